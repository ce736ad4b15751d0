//! State for the search screen.

use crate::api::Question;
use crate::ui::mvi::{RequestId, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Results of the last successful search or refresh.
    pub results: Vec<Question>,
    pub is_loading: bool,
    /// Inline error from the last failed request.
    pub error_message: Option<String>,
    /// Set when the last request failed for lack of connectivity.
    pub show_network_dialog: bool,
    /// Tag of the most recently issued request; older completions are dropped.
    pub latest_request: RequestId,
}

impl UiState for SearchState {}

impl SearchState {
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// Not loading, no error, nothing to show.
    pub fn is_empty_result(&self) -> bool {
        !self.is_loading && self.error_message.is_none() && self.results.is_empty()
    }
}
