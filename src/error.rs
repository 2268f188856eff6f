// src/error.rs

//! Unified error handling for the newsroom crate.

use thiserror::Error;

/// Result type alias for newsroom operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization failed
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Content API answered with a non-success status
    #[error("Content API returned {status} for {endpoint}")]
    Api { status: u16, endpoint: String },

    /// Requested entity does not exist upstream
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// Response body had an unexpected shape
    #[error("Unexpected response shape from {endpoint}")]
    Shape { endpoint: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not-found error for the given resource description.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// HTTP-status-like code for this error.
    ///
    /// Upstream statuses pass through; transport and parse failures map to 500.
    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Api { status, .. } => *status,
            Self::Http(e) => e.status().map_or(500, |s| s.as_u16()),
            Self::Validation(_) => 400,
            _ => 500,
        }
    }

    /// Whether this error means the entity does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == 404
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::not_found("article 'x'").status(), 404);
        assert_eq!(
            AppError::Api {
                status: 503,
                endpoint: "/articles/".into()
            }
            .status(),
            503
        );
        assert_eq!(
            AppError::Shape {
                endpoint: "/authors/".into()
            }
            .status(),
            500
        );
        assert_eq!(AppError::config("bad").status(), 500);
    }

    #[test]
    fn test_json_error_maps_to_500() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.status(), 500);
        assert!(!err.is_not_found());
    }
}
