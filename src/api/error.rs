//! API-specific error types
//!
//! This module defines the errors that can occur while talking to the search
//! backend or while reshaping its responses.
//!
//! # Error Types
//!
//! - **`Http`**: Transport failures from the underlying `reqwest` client
//! - **`Status`**: The backend answered with a non-success status code
//! - **`Json`**: A response body could not be decoded into the expected shape
//! - **`MissingAggregation`**: An aggregation query returned no buckets for the
//!   requested aggregation
//! - **`Csv`**: A statistics export could not be parsed

use thiserror::Error;

/// Result alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors produced by the search API façade and its backends
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport error from the HTTP client
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status
    #[error("Backend returned {status} for {path}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },

    /// Response body did not match the expected shape
    #[error("Error while decoding response: {0}")]
    Json(#[from] serde_json::Error),

    /// Aggregation missing from an aggregation query response
    #[error("Aggregation '{0}' missing from response")]
    MissingAggregation(String),

    /// Statistics CSV could not be parsed
    #[error("Error while reading CSV: {0}")]
    Csv(#[from] csv::Error),

    /// No canned response registered (mock backend only)
    #[error("No response registered for {method} {path}")]
    NoResponse { method: String, path: String },

    /// Document lookup returned no hit
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Invalid input provided (e.g., malformed tag or base URL)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ApiError {
    #[must_use]
    pub fn status(path: &str, status: u16, body: &str) -> Self {
        Self::Status {
            path: path.to_string(),
            status,
            body: body.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
