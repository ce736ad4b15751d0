//! State for the question detail screen.

use crate::api::{Answer, Question};
use crate::ui::answer_order::{sorted_answers, AnswerFilter};
use crate::ui::mvi::{RequestId, UiState};

/// Progress of one of the two independent detail loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSlot {
    pub in_flight: bool,
    pub latest_request: RequestId,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    /// Question currently shown, `None` before the first `open`.
    pub question_id: Option<u64>,
    pub question: Option<Question>,
    /// Answers in server order. Use [`DetailState::ordered_answers`] to render.
    pub answers: Vec<Answer>,
    pub question_load: LoadSlot,
    pub answers_load: LoadSlot,
    pub error_message: Option<String>,
    pub show_network_dialog: bool,
    pub filter: AnswerFilter,
}

impl UiState for DetailState {}

impl DetailState {
    /// True while either load is in flight.
    pub fn is_loading(&self) -> bool {
        self.question_load.in_flight || self.answers_load.in_flight
    }

    /// Answers ordered by the selected filter.
    pub fn ordered_answers(&self) -> Vec<Answer> {
        sorted_answers(&self.answers, self.filter)
    }

    /// The accepted answer, when the question names one and it was fetched.
    pub fn accepted_answer(&self) -> Option<&Answer> {
        let accepted_id = self.question.as_ref()?.accepted_answer_id?;
        self.answers.iter().find(|answer| answer.answer_id == accepted_id)
    }
}
