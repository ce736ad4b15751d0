use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::models::{Answer, Envelope, Question};
use crate::api::params::QueryOptions;
use crate::config::ApiConfig;

/// Raw outcome of one HTTP exchange, before the repository interprets it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    /// Reason phrase for `status` (e.g. "Not Found").
    pub status_text: String,
    /// `None` when the server answered with an empty body.
    pub body: Option<Envelope<T>>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 200 response carrying `items`.
    pub fn ok(items: Vec<T>) -> Self {
        Self {
            status: 200,
            status_text: "OK".to_string(),
            body: Some(Envelope::with_items(items)),
        }
    }
}

/// Read-only Stack Exchange endpoints.
///
/// Implementations perform exactly one request per call and never retry.
/// `Err` means the exchange itself failed; HTTP error statuses come back as
/// `Ok` with a non-success `status`.
#[async_trait]
pub trait StackExchangeApi: Send + Sync {
    /// `GET /2.2/search/advanced?title=...`
    async fn search_questions(
        &self,
        title: &str,
        options: &QueryOptions,
    ) -> Result<ApiResponse<Question>, ApiError>;

    /// `GET /2.2/questions/{id}/answers`
    async fn answers(
        &self,
        question_id: u64,
        options: &QueryOptions,
    ) -> Result<ApiResponse<Answer>, ApiError>;

    /// `GET /2.2/questions`
    async fn recent_questions(
        &self,
        options: &QueryOptions,
    ) -> Result<ApiResponse<Question>, ApiError>;

    /// `GET /2.2/questions/{id}`
    async fn question_by_id(
        &self,
        question_id: u64,
        options: &QueryOptions,
    ) -> Result<ApiResponse<Question>, ApiError>;
}

/// reqwest-backed client for a Stack Exchange compatible host.
pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        // Endpoint paths are joined relative to the base, so a path prefix
        // such as `/se` needs a trailing slash to survive the join.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .user_agent(concat!("stackbrowse/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(ApiError::Build)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<Url, ApiError> {
        let mut url = self.base_url.join(path).map_err(|e| ApiError::InvalidUrl {
            url: format!("{}{}", self.base_url, path),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())));
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<ApiResponse<T>, ApiError> {
        tracing::debug!(url = %url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let status_text = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_u16().to_string());

        let bytes = response.bytes().await?;
        // Error bodies are not decoded; only the status line matters.
        let body = if !status.is_success() || bytes.iter().all(u8::is_ascii_whitespace) {
            None
        } else {
            Some(serde_json::from_slice::<Envelope<T>>(&bytes)?)
        };

        tracing::debug!(status = status.as_u16(), has_body = body.is_some(), "response");

        Ok(ApiResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}

#[async_trait]
impl StackExchangeApi for HttpApi {
    async fn search_questions(
        &self,
        title: &str,
        options: &QueryOptions,
    ) -> Result<ApiResponse<Question>, ApiError> {
        let mut params = options.paged();
        params.push(("title", title.to_string()));
        let url = self.endpoint("2.2/search/advanced", &params)?;
        self.get(url).await
    }

    async fn answers(
        &self,
        question_id: u64,
        options: &QueryOptions,
    ) -> Result<ApiResponse<Answer>, ApiError> {
        let url = self.endpoint(
            &format!("2.2/questions/{}/answers", question_id),
            &options.sorted(),
        )?;
        self.get(url).await
    }

    async fn recent_questions(
        &self,
        options: &QueryOptions,
    ) -> Result<ApiResponse<Question>, ApiError> {
        let url = self.endpoint("2.2/questions", &options.paged())?;
        self.get(url).await
    }

    async fn question_by_id(
        &self,
        question_id: u64,
        options: &QueryOptions,
    ) -> Result<ApiResponse<Question>, ApiError> {
        let url = self.endpoint(&format!("2.2/questions/{}", question_id), &options.lookup())?;
        self.get(url).await
    }
}
