use crate::api::{Answer, Question};
use crate::ui::answer_order::AnswerFilter;
use crate::ui::app::{App, Screen, SearchFocus};
use crate::ui::detail::DetailState;
use crate::ui::dialog::render_network_dialog;
use crate::ui::footer::Footer;
use crate::ui::format::{format_date, strip_html, time_ago, truncate};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::search::SearchState;
use crate::ui::theme::{
    ACCEPTED_GREEN, BORDER, BRAND_ORANGE, ERROR_RED, SELECTION_BG, TAG, TEXT, TEXT_MUTED,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use ratatui::Frame;

/// Longest title shown in the result list before it is cut.
const TITLE_WIDTH: usize = 100;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let location = match app.screen() {
        Screen::Search => "Questions",
        Screen::Detail => "Question",
    };
    let header_widget = Header::new(app.site(), location).loading(app.is_loading(), app.tick());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Search => draw_search(frame, body, app),
        Screen::Detail => draw_detail(frame, body, app),
    }

    let footer_widget = Footer::new(app.screen());
    frame.render_widget(footer_widget.widget(footer), footer);

    if app.network_dialog_visible() {
        render_network_dialog(frame, area);
    }
}

fn draw_search(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let state = app.search_state();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let query_focused = app.focus() == SearchFocus::Query;
    let border = if query_focused { BRAND_ORANGE } else { BORDER };
    let query = Paragraph::new(Line::from(vec![
        Span::styled(" ⌕ ", Style::default().fg(TEXT_MUTED)),
        Span::styled(app.query().to_string(), Style::default().fg(TEXT)),
    ]))
    .block(
        Block::default()
            .title(" Search by title ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(query, chunks[0]);
    if query_focused && chunks[0].width > 4 && chunks[0].height > 2 {
        let offset = query_cursor_offset(app.query());
        let x = chunks[0].x + offset.min(chunks[0].width.saturating_sub(2));
        frame.set_cursor_position((x, chunks[0].y + 1));
    }

    frame.render_widget(Paragraph::new(search_status_line(&state)), chunks[1]);

    let results_focused = app.focus() == SearchFocus::Results;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if results_focused {
            BRAND_ORANGE
        } else {
            BORDER
        }));

    if state.is_empty_result() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No questions found.",
            Style::default().fg(TEXT_MUTED),
        )))
        .block(block);
        frame.render_widget(empty, chunks[2]);
        return;
    }

    let items: Vec<ListItem> = state.results.iter().map(question_item).collect();
    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(SELECTION_BG)
            .add_modifier(Modifier::BOLD),
    );
    let mut list_state = ListState::default();
    if !state.results.is_empty() {
        list_state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, chunks[2], &mut list_state);
}

/// Cursor column inside the query box: border, padding, prompt, then text.
fn query_cursor_offset(query: &str) -> u16 {
    u16::try_from(query.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
}

fn search_status_line(state: &SearchState) -> Line<'static> {
    if let Some(error) = &state.error_message {
        return Line::from(vec![
            Span::styled(" ✗ ", Style::default().fg(ERROR_RED)),
            Span::styled(error.clone(), Style::default().fg(ERROR_RED)),
            Span::styled("  (Esc to dismiss)", Style::default().fg(TEXT_MUTED)),
        ]);
    }
    if state.is_loading {
        return Line::from(Span::styled(" Loading...", Style::default().fg(ACCEPTED_GREEN)));
    }
    Line::from(Span::styled(
        format!(" {} questions", state.results.len()),
        Style::default().fg(TEXT_MUTED),
    ))
}

fn question_item(question: &Question) -> ListItem<'static> {
    let title = Line::from(Span::styled(
        truncate(&strip_html(&question.title), TITLE_WIDTH),
        Style::default().fg(TEXT),
    ));

    let answers_style = if question.accepted_answer_id.is_some() {
        Style::default().fg(ACCEPTED_GREEN)
    } else {
        Style::default().fg(TEXT_MUTED)
    };
    let mut meta = vec![
        Span::styled(
            format!("  {} votes", question.score),
            Style::default().fg(TEXT_MUTED),
        ),
        Span::styled(format!("  {} answers", question.answer_count), answers_style),
        Span::styled(
            format!("  {} views", question.view_count),
            Style::default().fg(TEXT_MUTED),
        ),
        Span::raw("  "),
    ];
    for tag in &question.tags {
        meta.push(Span::styled(format!("[{}] ", tag), Style::default().fg(TAG)));
    }
    meta.push(Span::styled(
        format!(
            "asked {} by {}",
            time_ago(question.creation_date),
            question.owner.display_name
        ),
        Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM),
    ));

    ListItem::new(vec![title, Line::from(meta)])
}

fn draw_detail(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let state = app.detail_state();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let answer_count = state.answers.len();
    let tabs = Tabs::new(
        AnswerFilter::ALL
            .iter()
            .map(|filter| Line::from(format!(" {} ", filter.label())))
            .collect::<Vec<_>>(),
    )
    .select(state.filter.index())
    .style(Style::default().fg(TEXT_MUTED))
    .highlight_style(Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD))
    .block(
        Block::default()
            .title(format!(" {} answers ", answer_count))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER)),
    );
    frame.render_widget(tabs, chunks[0]);

    let content = Paragraph::new(detail_lines(&state))
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll(), 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER)),
        );
    frame.render_widget(content, chunks[1]);
}

fn detail_lines(state: &DetailState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(error) = &state.error_message {
        lines.push(Line::from(vec![
            Span::styled("✗ ", Style::default().fg(ERROR_RED)),
            Span::styled(error.clone(), Style::default().fg(ERROR_RED)),
        ]));
        lines.push(Line::from(""));
    }

    match &state.question {
        Some(question) => push_question(&mut lines, question),
        None if state.question_load.in_flight => {
            lines.push(Line::from(Span::styled(
                "Loading question...",
                Style::default().fg(ACCEPTED_GREEN),
            )));
        }
        None => {}
    }

    lines.push(Line::from(""));
    if state.answers.is_empty() {
        let text = if state.answers_load.in_flight {
            "Loading answers..."
        } else {
            "No answers yet."
        };
        lines.push(Line::from(Span::styled(text, Style::default().fg(TEXT_MUTED))));
        return lines;
    }

    for answer in state.ordered_answers() {
        push_answer(&mut lines, &answer);
    }
    lines
}

fn push_question(lines: &mut Vec<Line<'static>>, question: &Question) {
    lines.push(Line::from(Span::styled(
        strip_html(&question.title),
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!(
            "Asked {} by {}  ·  {} votes  ·  {} views",
            format_date(question.creation_date),
            question.owner.display_name,
            question.score,
            question.view_count
        ),
        Style::default().fg(TEXT_MUTED),
    )));
    if !question.tags.is_empty() {
        lines.push(Line::from(
            question
                .tags
                .iter()
                .map(|tag| Span::styled(format!("[{}] ", tag), Style::default().fg(TAG)))
                .collect::<Vec<_>>(),
        ));
    }
    lines.push(Line::from(""));
    if let Some(body) = &question.body {
        lines.push(Line::from(Span::styled(
            strip_html(body),
            Style::default().fg(TEXT),
        )));
    }
}

fn push_answer(lines: &mut Vec<Line<'static>>, answer: &Answer) {
    lines.push(Line::from(Span::styled(
        "─".repeat(40),
        Style::default().fg(BORDER),
    )));
    let mut meta = vec![Span::styled(
        format!("▲ {}  ", answer.score),
        Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD),
    )];
    if answer.is_accepted {
        meta.push(Span::styled(
            "✓ Accepted  ",
            Style::default().fg(ACCEPTED_GREEN).add_modifier(Modifier::BOLD),
        ));
    }
    meta.push(Span::styled(
        format!(
            "answered {} by {}",
            format_date(answer.creation_date),
            answer.owner.display_name
        ),
        Style::default().fg(TEXT_MUTED),
    ));
    lines.push(Line::from(meta));
    lines.push(Line::from(Span::styled(
        strip_html(&answer.body),
        Style::default().fg(TEXT),
    )));
    lines.push(Line::from(""));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_offset_counts_chars_not_bytes() {
        assert_eq!(query_cursor_offset(""), 4);
        assert_eq!(query_cursor_offset("héllo"), 9);
    }

    #[test]
    fn cursor_offset_saturates_on_long_queries() {
        let query = "x".repeat(usize::from(u16::MAX) + 10);
        assert_eq!(query_cursor_offset(&query), u16::MAX);
    }
}
