//! Error types for the JSON:API connector
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Failures while fetching are always surfaced as [`Error::DataSource`],
//! which carries the URL in flight and the underlying cause. There is no
//! retryable category: any fetch failure is terminal.

use thiserror::Error;

/// The main error type for the connector
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("'{name}' is a required attribute")]
    RequiredAttribute { name: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Resolution Errors
    // ============================================================================
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Unsupported character encoding: {label}")]
    UnsupportedEncoding { label: String },

    // ============================================================================
    // Data Source Errors
    // ============================================================================
    #[error("Exception in invoking url {url}: {source}")]
    DataSource {
        url: String,
        #[source]
        source: Box<Error>,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a required attribute error
    pub fn required_attribute(name: impl Into<String>) -> Self {
        Self::RequiredAttribute { name: name.into() }
    }

    /// Create an invalid URL error
    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            source,
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an unsupported encoding error
    pub fn unsupported_encoding(label: impl Into<String>) -> Self {
        Self::UnsupportedEncoding {
            label: label.into(),
        }
    }

    /// Wrap a cause into a data source error for the given URL
    pub fn data_source(url: impl Into<String>, source: Error) -> Self {
        Self::DataSource {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// Whether this error must abort the import of the current entity
    pub fn is_severe(&self) -> bool {
        matches!(
            self,
            Error::DataSource { .. } | Error::RequiredAttribute { .. }
        )
    }

    /// URL that was being accessed, for data source errors
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::DataSource { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Underlying cause of a data source error, or the error itself
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::DataSource { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type alias for the connector
pub type Result<T> = std::result::Result<T, Error>;
