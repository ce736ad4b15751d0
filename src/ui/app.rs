use std::sync::Arc;

use tokio::runtime::Handle;

use crate::repository::Repository;
use crate::ui::answer_order::AnswerFilter;
use crate::ui::detail::{DetailHolder, DetailState};
use crate::ui::search::{SearchHolder, SearchState};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Search,
    Detail,
}

/// Which part of the search screen receives typed keys.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchFocus {
    Query,
    Results,
}

/// Navigation and view-local state around the two state holders.
pub struct App {
    should_quit: bool,
    screen: Screen,
    focus: SearchFocus,
    query: String,
    selected: usize,
    detail_scroll: u16,
    tick: usize,
    site: String,
    search: SearchHolder,
    detail: DetailHolder,
}

impl App {
    /// Builds both holders; the search holder starts loading immediately.
    pub fn new(repository: Arc<Repository>, runtime: Handle) -> Self {
        let site = repository.options().site.clone();
        Self {
            should_quit: false,
            screen: Screen::Search,
            focus: SearchFocus::Query,
            query: String::new(),
            selected: 0,
            detail_scroll: 0,
            tick: 0,
            site,
            search: SearchHolder::new(Arc::clone(&repository), runtime.clone()),
            detail: DetailHolder::new(repository, runtime),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn focus(&self) -> SearchFocus {
        self.focus
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn detail_scroll(&self) -> u16 {
        self.detail_scroll
    }

    /// Animation counter advanced on every tick.
    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn search_state(&self) -> SearchState {
        self.search.state()
    }

    pub fn detail_state(&self) -> DetailState {
        self.detail.state()
    }

    pub fn is_loading(&self) -> bool {
        match self.screen {
            Screen::Search => self.search.state().is_loading,
            Screen::Detail => self.detail.state().is_loading(),
        }
    }

    pub fn network_dialog_visible(&self) -> bool {
        match self.screen {
            Screen::Search => self.search.state().show_network_dialog,
            Screen::Detail => self.detail.state().show_network_dialog,
        }
    }

    pub fn dismiss_network_dialog(&mut self) {
        match self.screen {
            Screen::Search => self.search.dismiss_network_dialog(),
            Screen::Detail => self.detail.dismiss_network_dialog(),
        }
    }

    pub fn clear_error(&mut self) {
        match self.screen {
            Screen::Search => self.search.clear_error(),
            Screen::Detail => self.detail.clear_error(),
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        let count = self.search.state().results.len();
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    pub fn push_query_char(&mut self, ch: char) {
        self.query.push(ch);
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
    }

    /// Clears the query and goes back to recent questions.
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.selected = 0;
        self.search.refresh_questions();
    }

    pub fn submit_query(&mut self) {
        if self.search.search_questions(&self.query).is_some() {
            self.selected = 0;
            self.focus = SearchFocus::Results;
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            SearchFocus::Query => SearchFocus::Results,
            SearchFocus::Results => SearchFocus::Query,
        };
    }

    pub fn move_selection(&mut self, delta: isize) {
        let count = self.search.state().results.len();
        if count == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self
            .selected
            .saturating_add_signed(delta)
            .min(count - 1);
    }

    /// Opens the highlighted question on the detail screen.
    pub fn open_selected(&mut self) {
        let question_id = self
            .search
            .state()
            .results
            .get(self.selected)
            .map(|question| question.question_id);
        if let Some(question_id) = question_id {
            self.open_question(question_id);
        }
    }

    pub fn open_question(&mut self, question_id: u64) {
        self.detail.open(question_id);
        self.detail_scroll = 0;
        self.screen = Screen::Detail;
    }

    pub fn back_to_search(&mut self) {
        self.screen = Screen::Search;
    }

    /// Ctrl+R: recent questions on the search screen, reload on detail.
    pub fn refresh(&mut self) {
        match self.screen {
            Screen::Search => {
                self.selected = 0;
                self.search.refresh_questions();
            }
            Screen::Detail => {
                self.detail.reload();
            }
        }
    }

    pub fn select_filter(&mut self, filter: AnswerFilter) {
        self.detail.select_filter(filter);
        self.detail_scroll = 0;
    }

    pub fn cycle_filter(&mut self, forward: bool) {
        let current = self.detail.state().filter;
        let next = if forward { current.next() } else { current.previous() };
        self.select_filter(next);
    }

    pub fn scroll_detail(&mut self, delta: i32) {
        self.detail_scroll = if delta < 0 {
            self.detail_scroll.saturating_sub(delta.unsigned_abs() as u16)
        } else {
            self.detail_scroll.saturating_add(delta as u16)
        };
    }
}
