//! Reducer for the search screen.

use crate::repository::NetworkResult;
use crate::ui::mvi::Reducer;

use super::intent::SearchIntent;
use super::state::SearchState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Resolved { request, result } => {
                if request < state.latest_request {
                    // Superseded by a newer request.
                    return state;
                }
                match result {
                    NetworkResult::Loading(is_loading) => SearchState {
                        is_loading,
                        error_message: if is_loading { None } else { state.error_message },
                        latest_request: request,
                        ..state
                    },
                    NetworkResult::Success(results) => SearchState {
                        results,
                        is_loading: false,
                        latest_request: request,
                        ..state
                    },
                    NetworkResult::Error(err) if err.is_connectivity() => SearchState {
                        is_loading: false,
                        show_network_dialog: true,
                        latest_request: request,
                        ..state
                    },
                    NetworkResult::Error(err) => SearchState {
                        is_loading: false,
                        error_message: Some(err.to_string()),
                        latest_request: request,
                        ..state
                    },
                }
            }
            SearchIntent::DismissNetworkDialog => SearchState {
                show_network_dialog: false,
                ..state
            },
            SearchIntent::ClearError => SearchState {
                error_message: None,
                ..state
            },
        }
    }
}
