//! Error types for the static host.

use thiserror::Error;

/// Result type alias using `ServerError`.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Static host error types.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration loading or validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),

    /// Invalid client settings.
    #[error("Client configuration error: {0}")]
    Client(#[from] storyai_core::ClientError),

    /// Socket or file system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
