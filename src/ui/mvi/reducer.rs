//! The state/intent/reducer contract each screen implements.

/// Everything a screen renders. Compared after each reduction so observers
/// are only woken on real changes, and shared with runtime tasks.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}

/// A key press, a started request or a finished one.
pub trait Intent: Send + 'static {}

/// Pure state transition for one screen.
///
/// Network completions, user actions and flag resets all arrive as
/// intents, so a reducer can be tested without a runtime or a repository.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Applies `intents` in order.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
