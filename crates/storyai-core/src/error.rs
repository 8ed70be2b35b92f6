//! Error types for the StoryAI client.

use thiserror::Error;

/// Result type alias using `ClientError`.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client error types.
///
/// Views treat every variant as a single "request failed" outcome and only
/// ever render its `Display` text. The variants exist for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a response (network unreachable, CORS, aborted).
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected wire shape.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// A route parameter that should name a story could not be parsed.
    #[error("Invalid story id: {0:?}")]
    InvalidStoryId(String),

    /// Client configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Create a new network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create a new status error.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Create a new configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the backend reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

impl From<gloo_net::Error> for ClientError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error() {
        let err = ClientError::status(404, "Story not found");
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Story not found"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_network_error_is_not_not_found() {
        let err = ClientError::network("connection refused");
        assert!(err.to_string().contains("Network error"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_invalid_story_id() {
        let err = ClientError::InvalidStoryId("abc".to_string());
        assert_eq!(err.to_string(), "Invalid story id: \"abc\"");
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ClientError = serde_err.into();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
