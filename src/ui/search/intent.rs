//! Intents for the search screen.

use crate::api::Question;
use crate::repository::NetworkResult;
use crate::ui::mvi::{Intent, RequestId};

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// Progress of request `request`: `Loading(true)` when it starts,
    /// `Success`/`Error` when it completes.
    Resolved {
        request: RequestId,
        result: NetworkResult<Vec<Question>>,
    },
    DismissNetworkDialog,
    ClearError,
}

impl Intent for SearchIntent {}
