//! Search screen state holder.

use std::future::Future;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::Question;
use crate::repository::{NetworkResult, Repository};
use crate::ui::mvi::{RequestSequence, Store};

use super::intent::SearchIntent;
use super::reducer::SearchReducer;
use super::state::SearchState;

/// Owns the search screen state and runs its requests on `runtime`.
pub struct SearchHolder {
    repository: Arc<Repository>,
    runtime: Handle,
    store: Store<SearchReducer>,
    sequence: RequestSequence,
}

impl SearchHolder {
    /// Creates the holder and starts loading recent questions.
    pub fn new(repository: Arc<Repository>, runtime: Handle) -> Self {
        let holder = Self {
            repository,
            runtime,
            store: Store::default(),
            sequence: RequestSequence::new(),
        };
        holder.refresh_questions();
        holder
    }

    pub fn state(&self) -> SearchState {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.store.subscribe()
    }

    /// Searches question titles. Blank queries are ignored and return `None`.
    pub fn search_questions(&self, query: &str) -> Option<JoinHandle<()>> {
        if query.trim().is_empty() {
            return None;
        }
        tracing::debug!(query, "search");
        let repository = Arc::clone(&self.repository);
        let query = query.to_string();
        Some(self.launch(async move { repository.search_questions(&query).await }))
    }

    /// Reloads recent questions, whatever was searched before.
    pub fn refresh_questions(&self) -> JoinHandle<()> {
        let repository = Arc::clone(&self.repository);
        self.launch(async move { repository.fetch_recent_questions().await })
    }

    pub fn dismiss_network_dialog(&self) {
        self.store.dispatch(SearchIntent::DismissNetworkDialog);
    }

    pub fn clear_error(&self) {
        self.store.dispatch(SearchIntent::ClearError);
    }

    fn launch<F>(&self, fetch: F) -> JoinHandle<()>
    where
        F: Future<Output = NetworkResult<Vec<Question>>> + Send + 'static,
    {
        let request = self.sequence.next_id();
        self.store.dispatch(SearchIntent::Resolved {
            request,
            result: NetworkResult::Loading(true),
        });

        let store = self.store.clone();
        self.runtime.spawn(async move {
            let result = fetch.await;
            store.dispatch(SearchIntent::Resolved { request, result });
        })
    }
}
