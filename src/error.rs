//! Error types for continuation-pager
//!
//! All fallible public APIs return `Result<T, Error>` where Error is defined here.
//! Malformed token history is never an error,
//! see [`crate::history::TokenHistory::from_json_lossy`].

use thiserror::Error;

/// The main error type for continuation-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Data Source Errors
    // ============================================================================
    #[error("Invalid continuation token: {message}")]
    InvalidToken { message: String },

    #[error("Data source error: {message}")]
    Source { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid token error
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::InvalidToken {
            message: message.into(),
        }
    }

    /// Create a data source error
    pub fn source(message: impl Into<String>) -> Self {
        Self::Source {
            message: message.into(),
        }
    }

    /// Whether the error came from the upstream data source rather than
    /// from this crate's own inputs
    pub fn is_upstream(&self) -> bool {
        matches!(self, Error::Source { .. } | Error::Anyhow(_))
    }
}

/// Result type alias for continuation-pager
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_value("page_size", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'page_size': must be at least 1"
        );

        let err = Error::invalid_token("not base64");
        assert_eq!(err.to_string(), "Invalid continuation token: not base64");
    }

    #[test]
    fn test_is_upstream() {
        assert!(Error::source("cosmos unavailable").is_upstream());
        assert!(Error::from(anyhow::anyhow!("throttled")).is_upstream());

        assert!(!Error::invalid_value("page_size", "bad").is_upstream());
        assert!(!Error::invalid_token("bad").is_upstream());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::invalid_token("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Invalid continuation token: inner"));
    }

    #[test]
    fn test_io_error_context() {
        let read = std::fs::read_to_string("/nonexistent/pager.yaml");
        let err = read.with_context(|| "Failed to read".to_string()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read: IO error:"));
    }

    #[test]
    fn test_json_error_converts() {
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str("{oops");
        let err: Error = parsed.unwrap_err().into();
        assert!(matches!(err, Error::JsonParse(_)));
    }
}
