//! Docseek - a client for a document search backend
//!
//! This library talks to a search backend over its HTTP JSON API and turns
//! raw search hits into records a front end can render directly: unescaped
//! paths, a path fingerprint, capability flags ("is this a playable video")
//! and colored display tags.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod hit;
pub mod index;
pub mod logging;
pub mod mime;
pub mod output;
pub mod query;
pub mod stats;
pub mod tags;

#[cfg(test)]
pub mod testing;

use thiserror::Error;

pub use api::{ApiError, SearchApi};
pub use hit::{Hit, HitProps, SearchResult};
pub use tags::{EsTag, Tag};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum DocseekError {
    /// Search backend error
    #[error("API error: {0}")]
    ApiError(#[from] api::ApiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents a JSON output error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_api_error_conversion() {
        let error: DocseekError = ApiError::NotFound("abc".into()).into();
        assert_eq!(error.to_string(), "API error: Document not found: abc");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_config_error_conversion() {
        let error: DocseekError = ::config::ConfigError::Message("bad".into()).into();
        assert!(error.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_every_variant_has_a_prefix() {
        let errors = [
            DocseekError::ApiError(ApiError::NotFound("a".into())),
            DocseekError::ConfigError(::config::ConfigError::Message("b".into())),
            DocseekError::JsonError(serde_json::from_str::<u8>("x").unwrap_err()),
            DocseekError::InvalidInput("c".into()),
        ];

        for error in &errors {
            let prefix = match error {
                DocseekError::ApiError(_) => "API error",
                DocseekError::ConfigError(_) => "Configuration error",
                DocseekError::JsonError(_) => "JSON error",
                DocseekError::InvalidInput(_) => "Invalid input",
            };
            assert!(error.to_string().starts_with(prefix));
        }
    }

    #[test]
    fn test_invalid_input_display() {
        let error = DocseekError::InvalidInput("no server".into());
        assert_eq!(error.to_string(), "Invalid input: no server");
    }
}
