//! Unified error type for chatcore.

use thiserror::Error;

use super::config::ConfigError;

/// Unified error type for the fallible edges of the crate.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ChatError::Config(err) => err.user_message(),
            ChatError::Json(_) => "Failed to encode message content.".to_string(),
        }
    }
}
