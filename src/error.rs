//! Error types for valschema
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for valschema
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unknown schema draft '{draft}', supported drafts: 4, 6, 7, 2019, 2020")]
    UnknownDraft { draft: u32 },

    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Failed to read input '{path}': {message}")]
    Input { path: String, message: String },

    #[error("Failed to parse YAML from '{path}': {source}")]
    YamlParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} fetching '{url}'")]
    HttpStatus { status: u16, url: String },

    // ============================================================================
    // Schema Errors
    // ============================================================================
    #[error("Schema invariant violated: {message}")]
    SchemaInvariant { message: String },

    #[error("Failed to serialize schema: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Failed to write output '{path}': {message}")]
    Output { path: String, message: String },

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
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an input error naming the offending file or URL
    pub fn input(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Input {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an output error naming the target file
    pub fn output(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Output {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a schema invariant error
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::SchemaInvariant {
            message: message.into(),
        }
    }

    /// Check if this error was caught during configuration validation
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config { .. } | Error::UnknownDraft { .. })
    }
}

/// Result type alias for valschema
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::input("values.yaml", "no such file");
        assert_eq!(
            err.to_string(),
            "Failed to read input 'values.yaml': no such file"
        );

        let err = Error::UnknownDraft { draft: 5 };
        assert_eq!(
            err.to_string(),
            "Unknown schema draft '5', supported drafts: 4, 6, 7, 2019, 2020"
        );

        let err = Error::HttpStatus {
            status: 404,
            url: "http://example.com/values.yaml".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 404 fetching 'http://example.com/values.yaml'"
        );
    }

    #[test]
    fn test_is_config() {
        assert!(Error::config("bad indent").is_config());
        assert!(Error::UnknownDraft { draft: 5 }.is_config());

        assert!(!Error::input("a.yaml", "gone").is_config());
        assert!(!Error::invariant("broken").is_config());
    }
}
