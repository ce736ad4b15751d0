//! In-process `StackExchangeApi` with scripted replies and a call log.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use stackbrowse::api::{
    Answer, ApiError, ApiResponse, QueryOptions, Question, StackExchangeApi,
};
use std::collections::VecDeque;
use std::time::Duration;

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Search(String),
    Answers(u64),
    Recent,
    QuestionById(u64),
}

/// Reply to hand out for the next call of one endpoint.
#[derive(Debug, Clone)]
pub struct Reply<T> {
    delay: Duration,
    outcome: Outcome<T>,
}

#[derive(Debug, Clone)]
enum Outcome<T> {
    Response(ApiResponse<T>),
    TransportFailure(String),
}

impl<T> Reply<T> {
    pub fn items(items: Vec<T>) -> Self {
        Self::response(ApiResponse::ok(items))
    }

    pub fn status(status: u16, reason: &str) -> Self {
        Self::response(ApiResponse {
            status,
            status_text: reason.to_string(),
            body: None,
        })
    }

    /// 200 with no body.
    pub fn empty_body() -> Self {
        Self::response(ApiResponse {
            status: 200,
            status_text: "OK".to_string(),
            body: None,
        })
    }

    pub fn transport_failure(reason: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Outcome::TransportFailure(reason.to_string()),
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn response(response: ApiResponse<T>) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Outcome::Response(response),
        }
    }

    async fn resolve(self) -> Result<ApiResponse<T>, ApiError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match self.outcome {
            Outcome::Response(response) => Ok(response),
            Outcome::TransportFailure(reason) => Err(ApiError::InvalidUrl {
                url: "mock://api".to_string(),
                reason,
            }),
        }
    }
}

/// Empty queues answer with an empty 200 response.
#[derive(Default)]
pub struct ScriptedApi {
    search: Mutex<VecDeque<Reply<Question>>>,
    answers: Mutex<VecDeque<Reply<Answer>>>,
    recent: Mutex<VecDeque<Reply<Question>>>,
    by_id: Mutex<VecDeque<Reply<Question>>>,
    calls: Mutex<Vec<Call>>,
    options: Mutex<Vec<QueryOptions>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_search(&self, reply: Reply<Question>) -> &Self {
        self.search.lock().push_back(reply);
        self
    }

    pub fn on_answers(&self, reply: Reply<Answer>) -> &Self {
        self.answers.lock().push_back(reply);
        self
    }

    pub fn on_recent(&self, reply: Reply<Question>) -> &Self {
        self.recent.lock().push_back(reply);
        self
    }

    pub fn on_question(&self, reply: Reply<Question>) -> &Self {
        self.by_id.lock().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Options passed with each call, in call order.
    pub fn options_seen(&self) -> Vec<QueryOptions> {
        self.options.lock().clone()
    }

    fn record(&self, call: Call, options: &QueryOptions) {
        self.calls.lock().push(call);
        self.options.lock().push(options.clone());
    }
}

fn next<T>(queue: &Mutex<VecDeque<Reply<T>>>) -> Reply<T> {
    queue
        .lock()
        .pop_front()
        .unwrap_or_else(|| Reply::items(Vec::new()))
}

#[async_trait]
impl StackExchangeApi for ScriptedApi {
    async fn search_questions(
        &self,
        title: &str,
        options: &QueryOptions,
    ) -> Result<ApiResponse<Question>, ApiError> {
        self.record(Call::Search(title.to_string()), options);
        next(&self.search).resolve().await
    }

    async fn answers(
        &self,
        question_id: u64,
        options: &QueryOptions,
    ) -> Result<ApiResponse<Answer>, ApiError> {
        self.record(Call::Answers(question_id), options);
        next(&self.answers).resolve().await
    }

    async fn recent_questions(
        &self,
        options: &QueryOptions,
    ) -> Result<ApiResponse<Question>, ApiError> {
        self.record(Call::Recent, options);
        next(&self.recent).resolve().await
    }

    async fn question_by_id(
        &self,
        question_id: u64,
        options: &QueryOptions,
    ) -> Result<ApiResponse<Question>, ApiError> {
        self.record(Call::QuestionById(question_id), options);
        next(&self.by_id).resolve().await
    }
}
