//! Mock backend for testing

use super::backend::{Backend, decode_body, normalize_base_url};
use super::error::{ApiError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Canned response served by [`MockBackend`]
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// JSON body
    Json(Value),
    /// Raw text body
    Text(String),
    /// Non-success status with a body
    Status(u16, String),
}

/// A request received by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
}

/// Mock backend that serves predetermined responses
///
/// Responses are keyed by method and path. Every request is recorded so
/// tests can assert on what the façade sent.
#[derive(Debug, Default)]
pub struct MockBackend {
    base_url: String,
    responses: HashMap<(String, String), MockResponse>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockBackend {
    /// Create a mock with a relative (empty) base URL
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock with a base URL used for generated URLs
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            ..Self::default()
        }
    }

    /// Register a JSON response for `GET path`
    #[must_use]
    pub fn on_get(mut self, path: &str, body: Value) -> Self {
        self.responses
            .insert(("GET".into(), path.into()), MockResponse::Json(body));
        self
    }

    /// Register a JSON response for `POST path`
    #[must_use]
    pub fn on_post(mut self, path: &str, body: Value) -> Self {
        self.responses
            .insert(("POST".into(), path.into()), MockResponse::Json(body));
        self
    }

    /// Register a text response for `GET path`
    #[must_use]
    pub fn on_get_text(mut self, path: &str, body: &str) -> Self {
        self.responses
            .insert(("GET".into(), path.into()), MockResponse::Text(body.into()));
        self
    }

    /// Register a failing status for a method and path
    #[must_use]
    pub fn on_status(mut self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses.insert(
            (method.into(), path.into()),
            MockResponse::Status(status, body.into()),
        );
        self
    }

    /// All requests received so far
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// The most recent request, if any
    #[must_use]
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests().pop()
    }

    fn respond(&self, method: &str, path: &str, body: Option<&Value>) -> Result<String> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                method: method.to_string(),
                path: path.to_string(),
                body: body.cloned(),
            });
        }

        match self.responses.get(&(method.to_string(), path.to_string())) {
            Some(MockResponse::Json(value)) => Ok(value.to_string()),
            Some(MockResponse::Text(text)) => Ok(text.clone()),
            Some(MockResponse::Status(status, body)) => Err(ApiError::status(path, *status, body)),
            None => Err(ApiError::NoResponse {
                method: method.to_string(),
                path: path.to_string(),
            }),
        }
    }
}

impl Backend for MockBackend {
    fn get(&self, path: &str) -> Result<Value> {
        decode_body(&self.respond("GET", path, None)?)
    }

    fn post(&self, path: &str, body: &Value) -> Result<Value> {
        decode_body(&self.respond("POST", path, Some(body))?)
    }

    fn get_text(&self, path: &str) -> Result<String> {
        self.respond("GET", path, None)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mock_serves_json() {
        let mock = MockBackend::new().on_get("i", json!({"indices": []}));
        let value = mock.get("i").unwrap();
        assert_eq!(value, json!({"indices": []}));
    }

    #[test]
    fn test_mock_records_post_body() {
        let mock = MockBackend::new().on_post("es", json!({}));
        mock.post("es", &json!({"size": 0})).unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "es");
        assert_eq!(request.body, Some(json!({"size": 0})));
    }

    #[test]
    fn test_mock_unregistered_path() {
        let mock = MockBackend::new();
        assert!(matches!(mock.get("nope"), Err(ApiError::NoResponse { .. })));
        assert_eq!(mock.requests().len(), 1);
    }

    #[test]
    fn test_mock_status() {
        let mock = MockBackend::new().on_status("GET", "d/x", 404, "not found");
        match mock.get("d/x") {
            Err(ApiError::Status { status, .. }) => assert_eq!(status, 404),
            other => panic!("Expected Status error, got {other:?}"),
        }
    }

    #[test]
    fn test_mock_empty_text_post_is_null() {
        let mock = MockBackend::new();
        let mock = MockBackend {
            responses: HashMap::from([(
                ("POST".to_string(), "tag/idx".to_string()),
                MockResponse::Text(String::new()),
            )]),
            ..mock
        };
        assert_eq!(mock.post("tag/idx", &json!({})).unwrap(), Value::Null);
    }

    #[test]
    fn test_mock_url() {
        assert_eq!(MockBackend::new().url("s/abc/1"), "s/abc/1");
        assert_eq!(
            MockBackend::with_base_url("http://host:4090").url("s/abc/1"),
            "http://host:4090/s/abc/1"
        );
    }
}
