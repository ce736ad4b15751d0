use crate::ui::answer_order::AnswerFilter;
use crate::ui::app::{App, Screen, SearchFocus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Lines moved by PageUp/PageDown on the detail screen.
const PAGE_LINES: i32 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // The dialog is modal.
    if app.network_dialog_visible() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_network_dialog();
        }
        return;
    }

    if is_ctrl_char(key, 'r') {
        app.refresh();
        return;
    }

    match app.screen() {
        Screen::Search => handle_search_key(app, key),
        Screen::Detail => handle_detail_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.clear_query();
        return;
    }

    match key.code {
        KeyCode::Esc => app.clear_error(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Enter => match app.focus() {
            SearchFocus::Query => app.submit_query(),
            SearchFocus::Results => app.open_selected(),
        },
        KeyCode::Backspace if app.focus() == SearchFocus::Query => app.pop_query_char(),
        KeyCode::Char(ch)
            if app.focus() == SearchFocus::Query
                && !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.push_query_char(ch)
        }
        KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Char('j') => app.move_selection(1),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => {
            app.clear_error();
            app.back_to_search();
        }
        KeyCode::Left => app.cycle_filter(false),
        KeyCode::Right | KeyCode::Tab => app.cycle_filter(true),
        KeyCode::Char('1') => app.select_filter(AnswerFilter::Votes),
        KeyCode::Char('2') => app.select_filter(AnswerFilter::Active),
        KeyCode::Char('3') => app.select_filter(AnswerFilter::Oldest),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_detail(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_detail(1),
        KeyCode::PageUp => app.scroll_detail(-PAGE_LINES),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_detail(PAGE_LINES),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
