//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ApiError`] - Requests to the backend API
//! - [`ConfigError`] - Parsing structured config files for display

use thiserror::Error;

/// Errors from backend API requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No `token` query parameter was supplied
    #[error("Access token is missing")]
    MissingToken,
    /// Failed to build the request (bad URL, body, or headers)
    #[error("Failed to create request: {0}")]
    Request(String),
    /// Network request failed (offline, CORS, aborted, ...)
    #[error("Network error: {0}")]
    Network(String),
    /// Request exceeded the fetch timeout
    #[error("Request timed out")]
    Timeout,
    /// HTTP error response (non-2xx status)
    #[error("HTTP error {0}")]
    Http(u16),
    /// Response body could not be read or decoded
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            gloo_net::Error::JsError(e) => Self::Network(e.message),
            other => Self::Network(other.to_string()),
        }
    }
}

/// Errors from parsing config files for the structured viewer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid YAML: {0}")]
    Yaml(String),
    #[error("Invalid TOML: {0}")]
    Toml(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Toml(err.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_messages() {
        assert_eq!(ApiError::Http(404).to_string(), "HTTP error 404");
        assert_eq!(ApiError::Timeout.to_string(), "Request timed out");
        assert_eq!(
            ApiError::Network("offline".to_string()).to_string(),
            "Network error: offline"
        );
    }
}
