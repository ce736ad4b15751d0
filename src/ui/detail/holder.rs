//! Question detail state holder.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::repository::{NetworkResult, Repository};
use crate::ui::answer_order::AnswerFilter;
use crate::ui::mvi::{RequestSequence, Store};

use super::intent::DetailIntent;
use super::reducer::DetailReducer;
use super::state::DetailState;

/// Owns the detail screen state. The question and its answers load
/// independently and may complete in either order.
pub struct DetailHolder {
    repository: Arc<Repository>,
    runtime: Handle,
    store: Store<DetailReducer>,
    question_requests: RequestSequence,
    answer_requests: RequestSequence,
}

impl DetailHolder {
    pub fn new(repository: Arc<Repository>, runtime: Handle) -> Self {
        Self {
            repository,
            runtime,
            store: Store::default(),
            question_requests: RequestSequence::new(),
            answer_requests: RequestSequence::new(),
        }
    }

    pub fn state(&self) -> DetailState {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.store.subscribe()
    }

    /// Shows `question_id` and starts both loads.
    pub fn open(&self, question_id: u64) -> (JoinHandle<()>, JoinHandle<()>) {
        tracing::debug!(question_id, "open question");
        self.store.dispatch(DetailIntent::Open { question_id });
        (self.load_question(question_id), self.load_answers(question_id))
    }

    /// Reloads whatever question is open, keeping the selected filter.
    /// `None` before the first `open`.
    pub fn reload(&self) -> Option<(JoinHandle<()>, JoinHandle<()>)> {
        let question_id = self.state().question_id?;
        tracing::debug!(question_id, "reload question");
        Some((self.load_question(question_id), self.load_answers(question_id)))
    }

    pub fn load_question(&self, question_id: u64) -> JoinHandle<()> {
        let request = self.question_requests.next_id();
        self.store.dispatch(DetailIntent::QuestionResolved {
            request,
            result: NetworkResult::Loading(true),
        });

        let repository = Arc::clone(&self.repository);
        let store = self.store.clone();
        self.runtime.spawn(async move {
            let result = repository.get_question_by_id(question_id).await;
            store.dispatch(DetailIntent::QuestionResolved { request, result });
        })
    }

    pub fn load_answers(&self, question_id: u64) -> JoinHandle<()> {
        let request = self.answer_requests.next_id();
        self.store.dispatch(DetailIntent::AnswersResolved {
            request,
            result: NetworkResult::Loading(true),
        });

        let repository = Arc::clone(&self.repository);
        let store = self.store.clone();
        self.runtime.spawn(async move {
            let result = repository.get_answers(question_id).await;
            store.dispatch(DetailIntent::AnswersResolved { request, result });
        })
    }

    pub fn select_filter(&self, filter: AnswerFilter) {
        self.store.dispatch(DetailIntent::SelectFilter(filter));
    }

    pub fn dismiss_network_dialog(&self) {
        self.store.dispatch(DetailIntent::DismissNetworkDialog);
    }

    pub fn clear_error(&self) {
        self.store.dispatch(DetailIntent::ClearError);
    }
}
