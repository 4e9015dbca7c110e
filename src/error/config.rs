//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable was set to a value that cannot be used.
    #[error("invalid value {value:?} for {variable}: {message}")]
    InvalidValue {
        variable: String,
        value: String,
        message: String,
    },
}

impl ConfigError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::InvalidValue {
                variable, message, ..
            } => format!("Environment variable {} is invalid: {}.", variable, message),
        }
    }
}
