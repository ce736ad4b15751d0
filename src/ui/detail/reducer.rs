//! Reducer for the question detail screen.

use crate::repository::NetworkResult;
use crate::ui::answer_order::AnswerFilter;
use crate::ui::mvi::{Reducer, RequestId};

use super::intent::DetailIntent;
use super::state::{DetailState, LoadSlot};

pub struct DetailReducer;

#[derive(Clone, Copy)]
enum Load {
    Question,
    Answers,
}

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Open { question_id } => {
                if state.question_id == Some(question_id) {
                    return DetailState {
                        filter: AnswerFilter::default(),
                        ..state
                    };
                }
                // Request tags are kept so completions for the previous
                // question stay stale.
                DetailState {
                    question_id: Some(question_id),
                    question: None,
                    answers: Vec::new(),
                    error_message: None,
                    show_network_dialog: false,
                    filter: AnswerFilter::default(),
                    ..state
                }
            }

            DetailIntent::QuestionResolved { request, result } => {
                if request < state.question_load.latest_request {
                    return state;
                }
                let mut next = settle(state, Load::Question, request, &result);
                if let NetworkResult::Success(question) = result {
                    next.question = Some(question);
                }
                next
            }

            DetailIntent::AnswersResolved { request, result } => {
                if request < state.answers_load.latest_request {
                    return state;
                }
                let mut next = settle(state, Load::Answers, request, &result);
                if let NetworkResult::Success(answers) = result {
                    next.answers = answers;
                }
                next
            }

            DetailIntent::SelectFilter(filter) => DetailState { filter, ..state },

            DetailIntent::DismissNetworkDialog => DetailState {
                show_network_dialog: false,
                ..state
            },

            DetailIntent::ClearError => DetailState {
                error_message: None,
                ..state
            },
        }
    }
}

/// Updates the load slot and the shared error fields for `result`.
/// The payload itself is stored by the caller.
fn settle<T>(
    mut state: DetailState,
    load: Load,
    request: RequestId,
    result: &NetworkResult<T>,
) -> DetailState {
    let in_flight = matches!(result, NetworkResult::Loading(true));
    let slot = match load {
        Load::Question => &mut state.question_load,
        Load::Answers => &mut state.answers_load,
    };
    *slot = LoadSlot {
        in_flight,
        latest_request: request,
    };

    match result {
        NetworkResult::Loading(true) => state.error_message = None,
        NetworkResult::Error(err) if err.is_connectivity() => state.show_network_dialog = true,
        NetworkResult::Error(err) => state.error_message = Some(err.to_string()),
        NetworkResult::Loading(false) | NetworkResult::Success(_) => {}
    }
    state
}
