//! Intents for the question detail screen.

use crate::api::{Answer, Question};
use crate::repository::NetworkResult;
use crate::ui::answer_order::AnswerFilter;
use crate::ui::mvi::{Intent, RequestId};

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// Enter the screen for `question_id`. The filter goes back to the
    /// default; data is cleared only when the id changes.
    Open { question_id: u64 },
    QuestionResolved {
        request: RequestId,
        result: NetworkResult<Question>,
    },
    AnswersResolved {
        request: RequestId,
        result: NetworkResult<Vec<Answer>>,
    },
    SelectFilter(AnswerFilter),
    DismissNetworkDialog,
    ClearError,
}

impl Intent for DetailIntent {}
