use std::fmt;

use thiserror::Error;

/// Repository operation, used to prefix HTTP failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Search,
    Answers,
    RecentQuestions,
    QuestionById,
}

impl Operation {
    pub fn failure_prefix(self) -> &'static str {
        match self {
            Operation::Search => "Search failed",
            Operation::Answers => "Failed to load answers",
            Operation::RecentQuestions => "Failed to load questions",
            Operation::QuestionById => "Failed to load question",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Search => "search",
            Operation::Answers => "answers",
            Operation::RecentQuestions => "recent_questions",
            Operation::QuestionById => "question_by_id",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_prefix())
    }
}

/// Why a repository call produced no data. `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The connectivity probe reported no network; no request was sent.
    #[error("No internet connection")]
    NoConnection,

    /// The request could not be completed (DNS, connect, timeout, decode).
    #[error("Network error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("{operation}: {status}")]
    Http { operation: Operation, status: String },

    #[error("Empty response")]
    EmptyResponse,

    #[error("Question not found")]
    QuestionNotFound,
}

impl FetchError {
    /// Connectivity failures are shown as a dialog rather than inline.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, FetchError::NoConnection)
    }
}

/// Outcome of one repository query.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResult<T> {
    Success(T),
    Error(FetchError),
    /// In progress. Holders translate this into a loading flag instead of
    /// storing it.
    Loading(bool),
}

impl<T> NetworkResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, NetworkResult::Success(_))
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            NetworkResult::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Error text, if this is an `Error`.
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            NetworkResult::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> NetworkResult<U> {
        match self {
            NetworkResult::Success(data) => NetworkResult::Success(f(data)),
            NetworkResult::Error(err) => NetworkResult::Error(err),
            NetworkResult::Loading(flag) => NetworkResult::Loading(flag),
        }
    }
}

impl<T> From<Result<T, FetchError>> for NetworkResult<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(data) => NetworkResult::Success(data),
            Err(err) => NetworkResult::Error(err),
        }
    }
}
