//! Centralized error types for the analogy generator.

use thiserror::Error;

/// Main error type for analogy operations.
#[derive(Error, Debug)]
pub enum AnalogyError {
    /// Empty input caught before any network call.
    #[error("{0}")]
    Validation(String),

    /// The provider credential is absent on the proxy.
    #[error("OpenAI API key is not configured")]
    MissingCredential,

    /// Request body could not be read as `{thing1, thing2}`.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// The provider answered with a non-success status or an unusable payload.
    #[error("OpenAI API error: {0}")]
    Upstream(String),

    /// The proxy answered with an `{"error"}` body or a non-success status.
    #[error("Proxy error: {0}")]
    Proxy(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A browser-side collaborator (clipboard, window) refused the action.
    #[error("Environment error: {0}")]
    Environment(String),
}

/// Result type for analogy operations.
pub type AnalogyResult<T> = Result<T, AnalogyError>;

impl AnalogyError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an upstream error from the provider's message, if any.
    pub fn upstream(message: Option<String>) -> Self {
        Self::Upstream(message.unwrap_or_else(|| "Unknown error".to_string()))
    }

    /// Create an environment error.
    pub fn environment(msg: impl Into<String>) -> Self {
        Self::Environment(msg.into())
    }
}
