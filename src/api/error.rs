use thiserror::Error;

/// Failures of the HTTP exchange itself.
///
/// A response with an error status is not an `ApiError`; see
/// [`ApiResponse`](crate::api::ApiResponse).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
