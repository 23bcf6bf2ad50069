use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching the vehicle collection.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The request could not be built or sent.
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The store answered with a non-success status.
    #[error("Document store returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The configured endpoint is not a valid URL.
    #[error("Invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Fixture file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// Short machine-friendly kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::Request { .. } => "request",
            SourceError::Status { .. } => "status",
            SourceError::Decode(_) => "decode",
            SourceError::InvalidEndpoint { .. } => "invalid_endpoint",
            SourceError::Io { .. } => "io",
        }
    }
}
