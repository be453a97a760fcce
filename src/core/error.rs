//! Error types for the webhook logger

use std::sync::Arc;

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors are `Clone` so a logger can both return a failure and keep it in
/// its last-error slot.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoggerError {
    /// The HTTP request to a webhook could not be completed
    #[error("Failed to post log message to '{destination}': {source}")]
    Transport {
        destination: String,
        #[source]
        source: Arc<reqwest::Error>,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error raised by a non-HTTP transport
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create a transport error for a failed request
    pub fn transport(destination: impl Into<String>, source: reqwest::Error) -> Self {
        LoggerError::Transport {
            destination: destination.into(),
            source: Arc::new(source),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}

impl From<LoggerError> for std::io::Error {
    fn from(err: LoggerError) -> Self {
        std::io::Error::other(err)
    }
}
