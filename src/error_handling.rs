//! Error type definitions.
//!
//! Two failure surfaces exist: startup (logger / HTTP client construction)
//! and request handling. DNS resolution and geolocation lookup failures are
//! deliberately absent here -- those degrade the affected `DomainInfo` fields
//! to `None` instead of surfacing an error.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types surfaced to API callers.
///
/// `MissingParameter` and `UpstreamFetchFailed` map to a 400 response;
/// `Internal` covers failures inside the analyzer fan-out and maps to 500.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The required `url` query parameter was absent.
    #[error("URL parameter is missing")]
    MissingParameter,

    /// The target page fetch failed or returned a non-success status.
    ///
    /// Carries the underlying transport error text, which is returned to the
    /// caller verbatim.
    #[error("{0}")]
    UpstreamFetchFailed(String),

    /// Any failure inside the analyzer fan-out.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_message() {
        assert_eq!(
            ApiError::MissingParameter.to_string(),
            "URL parameter is missing"
        );
    }

    #[test]
    fn test_upstream_fetch_failed_preserves_underlying_text() {
        let err = ApiError::UpstreamFetchFailed("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }
}
