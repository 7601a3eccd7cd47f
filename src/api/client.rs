use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::api::{
    ErrorBody, LanguageOption, LanguagesResponse, StatusResponse, TranslateRequest,
    TranslateResponse, TranslationResult,
};
use crate::utils::url::{construct_api_url, normalize_base_url};

/// Failure of a single backend request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The backend answered with a non-success HTTP status.
    Status {
        status: u16,
        /// Server-supplied `detail` string, when the error body carried one.
        detail: Option<String>,
    },
    /// No HTTP response was received (connect failure, DNS, timeout).
    Transport { message: String, timed_out: bool },
    /// A success status arrived but the body did not match the expected shape.
    Decode { message: String },
}

impl BackendError {
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    fn from_transport(err: reqwest::Error) -> Self {
        BackendError::Transport {
            timed_out: err.is_timeout(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Status {
                status,
                detail: Some(detail),
            } => write!(f, "backend returned HTTP {status}: {detail}"),
            BackendError::Status {
                status,
                detail: None,
            } => write!(f, "backend returned HTTP {status}"),
            BackendError::Transport {
                message,
                timed_out: true,
            } => write!(f, "request timed out: {message}"),
            BackendError::Transport { message, .. } => write!(f, "request failed: {message}"),
            BackendError::Decode { message } => {
                write!(f, "unexpected response body: {message}")
            }
        }
    }
}

impl StdError for BackendError {}

/// The two operations the form needs from a translation backend.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    async fn fetch_languages(&self) -> Result<Vec<LanguageOption>, BackendError>;

    async fn translate(&self, request: &TranslateRequest)
        -> Result<TranslationResult, BackendError>;
}

/// JSON-over-HTTP backend client.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(BackendError::from_transport)?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /`, used as a liveness probe.
    pub async fn status(&self) -> Result<String, BackendError> {
        let url = construct_api_url(&self.base_url, "");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(BackendError::from_transport)?;
        let body: StatusResponse = decode_success(response).await?;
        Ok(body.message)
    }
}

#[async_trait]
impl TranslationBackend for HttpBackend {
    async fn fetch_languages(&self) -> Result<Vec<LanguageOption>, BackendError> {
        let url = construct_api_url(&self.base_url, "languages");
        debug!(%url, "fetching language list");
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(BackendError::from_transport)?;
        let body: LanguagesResponse = decode_success(response).await?;
        debug!(count = body.languages.len(), "language list received");
        Ok(body.languages)
    }

    async fn translate(
        &self,
        request: &TranslateRequest,
    ) -> Result<TranslationResult, BackendError> {
        let url = construct_api_url(&self.base_url, "translate");
        debug!(
            source = %request.source_language,
            target = %request.target_language,
            chars = request.text.chars().count(),
            "sending translation request"
        );
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(BackendError::from_transport)?;
        let body: TranslateResponse = decode_success(response).await?;
        Ok(body.into())
    }
}

async fn decode_success<T>(response: reqwest::Response) -> Result<T, BackendError>
where
    T: serde::de::DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(status_error(status.as_u16(), &error_text));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(BackendError::from_transport)?;
    serde_json::from_slice(&bytes).map_err(|err| BackendError::Decode {
        message: err.to_string(),
    })
}

pub(crate) fn status_error(status: u16, error_text: &str) -> BackendError {
    let detail = serde_json::from_str::<ErrorBody>(error_text)
        .ok()
        .and_then(|body| body.detail_text());
    BackendError::Status { status, detail }
}
