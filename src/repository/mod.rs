//! Data layer between the Stack Exchange client and the state holders.
//!
//! Every operation follows the same contract:
//!
//! 1. connectivity probe; offline short-circuits with
//!    [`FetchError::NoConnection`] and no request is sent,
//! 2. a single GET with the configured [`QueryOptions`],
//! 3. the response is folded into a [`NetworkResult`], or returned as a
//!    plain `Result` by the `try_` variants.

mod result;

pub use result::{FetchError, NetworkResult, Operation};

use std::future::Future;
use std::sync::Arc;

use crate::api::{Answer, ApiError, ApiResponse, QueryOptions, Question, StackExchangeApi};
use crate::connectivity::ConnectivityProbe;

pub struct Repository {
    api: Arc<dyn StackExchangeApi>,
    connectivity: Arc<dyn ConnectivityProbe>,
    options: QueryOptions,
}

impl Repository {
    pub fn new(
        api: Arc<dyn StackExchangeApi>,
        connectivity: Arc<dyn ConnectivityProbe>,
        options: QueryOptions,
    ) -> Self {
        Self {
            api,
            connectivity,
            options,
        }
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Questions whose title matches `query`.
    pub async fn search_questions(&self, query: &str) -> NetworkResult<Vec<Question>> {
        self.try_search_questions(query).await.into()
    }

    /// Answers for `question_id`, in server order.
    pub async fn get_answers(&self, question_id: u64) -> NetworkResult<Vec<Answer>> {
        self.try_get_answers(question_id).await.into()
    }

    /// First page of recently active questions.
    pub async fn fetch_recent_questions(&self) -> NetworkResult<Vec<Question>> {
        self.try_fetch_recent_questions().await.into()
    }

    /// A single question. When the server returns several matches only the
    /// first is used.
    pub async fn get_question_by_id(&self, question_id: u64) -> NetworkResult<Question> {
        self.try_get_question_by_id(question_id).await.into()
    }

    pub async fn try_search_questions(&self, query: &str) -> Result<Vec<Question>, FetchError> {
        let request = self.api.search_questions(query, &self.options);
        self.fetch(Operation::Search, request).await
    }

    pub async fn try_get_answers(&self, question_id: u64) -> Result<Vec<Answer>, FetchError> {
        let request = self.api.answers(question_id, &self.options);
        self.fetch(Operation::Answers, request).await
    }

    pub async fn try_fetch_recent_questions(&self) -> Result<Vec<Question>, FetchError> {
        let request = self.api.recent_questions(&self.options);
        self.fetch(Operation::RecentQuestions, request).await
    }

    pub async fn try_get_question_by_id(&self, question_id: u64) -> Result<Question, FetchError> {
        let request = self.api.question_by_id(question_id, &self.options);
        self.fetch(Operation::QuestionById, request)
            .await?
            .into_iter()
            .next()
            .ok_or(FetchError::QuestionNotFound)
    }

    /// Runs `request` behind the connectivity check and maps the outcome.
    ///
    /// `request` is lazy: it is only polled once the probe reports a network.
    async fn fetch<T, F>(&self, operation: Operation, request: F) -> Result<Vec<T>, FetchError>
    where
        F: Future<Output = Result<ApiResponse<T>, ApiError>>,
    {
        if !self.connectivity.is_available().await {
            tracing::warn!(operation = operation.name(), "skipped: no network");
            return Err(FetchError::NoConnection);
        }

        let result = request
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
            .and_then(|response| interpret(operation, response));

        match &result {
            Ok(items) => {
                tracing::debug!(operation = operation.name(), items = items.len(), "fetched")
            }
            Err(e) => tracing::warn!(operation = operation.name(), error = %e, "fetch failed"),
        }
        result
    }
}

fn interpret<T>(operation: Operation, response: ApiResponse<T>) -> Result<Vec<T>, FetchError> {
    if !response.is_success() {
        return Err(FetchError::Http {
            operation,
            status: response.status_text,
        });
    }
    response
        .body
        .map(|envelope| envelope.items)
        .ok_or(FetchError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_success_status_maps_to_http_error() {
        let response: ApiResponse<Question> = ApiResponse {
            status: 503,
            status_text: "Service Unavailable".to_string(),
            body: None,
        };
        let err = interpret(Operation::RecentQuestions, response).unwrap_err();
        assert_eq!(err.to_string(), "Failed to load questions: Service Unavailable");
    }

    #[test]
    fn success_without_body_is_empty_response() {
        let response: ApiResponse<Answer> = ApiResponse {
            status: 200,
            status_text: "OK".to_string(),
            body: None,
        };
        assert_eq!(
            interpret(Operation::Answers, response),
            Err(FetchError::EmptyResponse)
        );
    }

    #[test]
    fn success_with_empty_items_is_ok_for_lists() {
        let response: ApiResponse<Answer> = ApiResponse::ok(Vec::new());
        assert_eq!(interpret(Operation::Answers, response), Ok(Vec::new()));
    }
}
