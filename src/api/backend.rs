//! Transport abstraction for the search backend
//!
//! The façade only needs three verbs against the backend: fetch JSON, post
//! JSON, and fetch plain text (CSV exports). `HttpBackend` implements them
//! with a blocking `reqwest` client; `MockBackend` serves canned responses.

use super::error::{ApiError, Result};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Trait for search backend transports
///
/// Paths are relative to the backend's base URL (e.g. `"es"`, `"d/<id>"`).
pub trait Backend {
    /// GET a path and decode the body as JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend answers with a
    /// non-success status, or the body is not valid JSON.
    fn get(&self, path: &str) -> Result<Value>;

    /// POST a JSON body to a path and decode the response as JSON
    ///
    /// An empty response body decodes to `Value::Null`.
    ///
    /// # Errors
    ///
    /// Same as [`Backend::get`].
    fn post(&self, path: &str, body: &Value) -> Result<Value>;

    /// GET a path and return the raw body text
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not a success.
    fn get_text(&self, path: &str) -> Result<String>;

    /// Absolute URL for a path
    fn url(&self, path: &str) -> String;
}

/// Ensure a base URL ends with exactly one `/`
///
/// An empty base URL stays empty so that generated URLs remain relative.
#[must_use]
pub fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}/")
    }
}

/// Decode a response body, treating an empty body as `null`
pub(crate) fn decode_body(body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(body)?)
}

/// Blocking HTTP backend
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    client: Client,
}

impl HttpBackend {
    /// Create a backend for the given base URL with the default timeout
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the base URL is empty, or
    /// `ApiError::Http` if the client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a backend with a custom request timeout
    ///
    /// # Errors
    ///
    /// See [`HttpBackend::new`].
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = normalize_base_url(base_url);
        if base_url.is_empty() {
            return Err(ApiError::InvalidInput("Base URL must not be empty".into()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidInput(format!(
                "Base URL must start with http:// or https://, got '{base_url}'"
            )));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, client })
    }

    /// The normalized base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn send(&self, request: RequestBuilder, path: &str) -> Result<Response> {
        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!(path, status = status.as_u16(), "backend request failed");
            return Err(ApiError::status(path, status.as_u16(), &body));
        }
        Ok(response)
    }
}

impl Backend for HttpBackend {
    fn get(&self, path: &str) -> Result<Value> {
        let body = self.get_text(path)?;
        decode_body(&body)
    }

    fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.send(self.client.post(&url).json(body), path)?;
        decode_body(&response.text()?)
    }

    fn get_text(&self, path: &str) -> Result<String> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.send(self.client.get(&url), path)?;
        Ok(response.text()?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
