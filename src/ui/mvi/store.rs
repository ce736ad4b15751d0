//! Observable state container driven by a [`Reducer`].

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use super::reducer::Reducer;

/// Tag attached to each request a holder issues.
pub type RequestId = u64;

/// Monotonic source of [`RequestId`]s, starting at 1.
///
/// Reducers compare a completion's tag with the latest issued one and
/// drop results of superseded requests.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    last: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> RequestId {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Current state of one screen plus a change feed for observers.
///
/// Cloning is cheap; every clone dispatches into the same state.
pub struct Store<R: Reducer> {
    state: Arc<watch::Sender<R::State>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            state: Arc::new(state),
            _reducer: PhantomData,
        }
    }

    /// Run the reducer and publish the result. Observers are only woken
    /// when the state actually changed.
    pub fn dispatch(&self, intent: R::Intent) {
        self.state.send_if_modified(|state| {
            let next = R::reduce(state.clone(), intent);
            if next == *state {
                return false;
            }
            *state = next;
            true
        });
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> R::State {
        self.state.borrow().clone()
    }

    /// Receiver that yields on every published change.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.state.subscribe()
    }
}
