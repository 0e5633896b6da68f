//! Blocking HTTP client for the paste backend.
//!
//! Every request carries the static access token header. Reads also opt out
//! of caching, since a paste can expire between two fetches.

use crate::config::Config;
use crate::constants::{ACCESS_TOKEN, ACCESS_TOKEN_HEADER};
use crate::models::{CreatePasteRequest, CreatePasteResponse, Language, Paste};
use reqwest::blocking::{Client, Response};
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use reqwest::{StatusCode, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Failures surfaced by [`ApiClient`].
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("paste content is empty")]
    EmptyContent,

    #[error("invalid server URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Outcome of a paste lookup. Every failure collapses into `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteLookup {
    Found(Paste),
    NotFound,
}

/// Client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    http: Client,
}

/// Build `{base}/{segments...}` with each segment percent-encoded.
///
/// # Errors
/// Returns [`ClientError::InvalidBaseUrl`] when `base` does not parse or
/// cannot carry a path.
pub fn api_url(base: &Url, segments: &[&str]) -> Result<Url, ClientError> {
    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl {
                url: base.to_string(),
                reason: "URL cannot be used as an API base".to_string(),
            })?;
        path.pop_if_empty();
        for segment in segments {
            path.push(segment);
        }
    }
    Ok(url)
}

/// Pull a readable message out of an error response body.
///
/// Prefers a JSON `{"error": ...}` field, then the raw body, then the
/// status reason phrase.
pub fn error_message_for_response(status: StatusCode, body: &str) -> String {
    if body.trim().is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string();
    }

    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(ClientError::Status {
        status,
        message: error_message_for_response(status, &body),
    })
}

impl ApiClient {
    /// Create a client for `base` (already normalized, see
    /// [`crate::config::resolve_base_url`]).
    ///
    /// # Errors
    /// Fails when the base URL does not parse or the HTTP client cannot be
    /// built.
    pub fn new(base: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base = Url::parse(base).map_err(|err| ClientError::InvalidBaseUrl {
            url: base.to_string(),
            reason: err.to_string(),
        })?;
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { base, http })
    }

    /// Client for the configured backend.
    ///
    /// # Errors
    /// See [`ApiClient::new`].
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Self::new(&config.api_base, config.timeout)
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Publish `content` and return the identifier assigned by the backend.
    ///
    /// Whitespace-only content is rejected before any request is made.
    ///
    /// # Errors
    /// Returns [`ClientError::EmptyContent`], a transport error, a non-2xx
    /// status, or a decode error when the body lacks an `id`.
    pub fn create_paste(&self, content: &str, language: Language) -> Result<String, ClientError> {
        if content.trim().is_empty() {
            return Err(ClientError::EmptyContent);
        }
        let url = api_url(&self.base, &["api", "pastes"])?;
        let body = CreatePasteRequest::new(content, language);
        debug!(%url, bytes = content.len(), language = language.tag(), "creating paste");

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCESS_TOKEN_HEADER, ACCESS_TOKEN)
            .json(&body)
            .send()?;
        let response = ensure_success(response)?;
        let created: CreatePasteResponse = response
            .json()
            .map_err(|err| ClientError::Decode(err.to_string()))?;
        if created.id.trim().is_empty() {
            return Err(ClientError::Decode("empty paste id".to_string()));
        }
        Ok(created.id)
    }

    /// Fetch the paste stored under `id`.
    ///
    /// # Errors
    /// Returns a transport error, a non-2xx status, or a decode error.
    pub fn fetch_paste(&self, id: &str) -> Result<Paste, ClientError> {
        let url = api_url(&self.base, &["api", "pastes", id])?;
        debug!(%url, "fetching paste");
        let response = self
            .http
            .get(url)
            .header(ACCESS_TOKEN_HEADER, ACCESS_TOKEN)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()?;
        ensure_success(response)?
            .json::<Paste>()
            .map_err(|err| ClientError::Decode(err.to_string()))
    }

    /// Fetch `id`, collapsing every failure into [`PasteLookup::NotFound`].
    pub fn lookup_paste(&self, id: &str) -> PasteLookup {
        match self.fetch_paste(id) {
            Ok(paste) => PasteLookup::Found(paste),
            Err(ClientError::Status { status, .. }) if status == StatusCode::NOT_FOUND => {
                debug!(id, "paste not found");
                PasteLookup::NotFound
            }
            Err(err) => {
                warn!(id, "paste lookup failed: {}", err);
                PasteLookup::NotFound
            }
        }
    }
}
