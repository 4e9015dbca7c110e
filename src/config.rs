//! Streaming configuration.
//!
//! Controls how eagerly the streaming buffer surfaces new content.

use crate::error::{ChatResult, ConfigError};

/// Environment variable overriding the emit threshold.
pub const THRESHOLD_ENV_VAR: &str = "CHATCORE_STREAM_THRESHOLD";

/// Default number of chars a stream must grow by before an update is emitted.
pub const DEFAULT_STREAM_THRESHOLD: usize = 64;

/// Configuration for a `StreamingMessageBuffer`.
///
/// # Example
///
/// ```
/// use chatcore::config::StreamingConfig;
///
/// let config = StreamingConfig::default().with_threshold(32);
/// assert_eq!(config.threshold, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamingConfig {
    /// Growth (in chars) since the last emit that forces a new emit
    pub threshold: usize,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_STREAM_THRESHOLD,
        }
    }
}

impl StreamingConfig {
    /// Create a new StreamingConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the emit threshold.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Create config from the `CHATCORE_STREAM_THRESHOLD` environment variable.
    ///
    /// Unset falls back to the default. A value that is not a positive
    /// integer is rejected.
    pub fn from_env() -> ChatResult<Self> {
        match std::env::var(THRESHOLD_ENV_VAR) {
            Ok(raw) => {
                let threshold = parse_threshold(&raw)?;
                tracing::debug!(threshold, "stream threshold loaded from environment");
                Ok(Self::default().with_threshold(threshold))
            }
            Err(_) => Ok(Self::default()),
        }
    }
}

fn parse_threshold(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidValue {
        variable: THRESHOLD_ENV_VAR.to_string(),
        value: raw.to_string(),
        message: message.to_string(),
    };

    match raw.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be greater than zero")),
        Ok(n) => Ok(n),
        Err(_) => Err(invalid("expected a positive integer")),
    }
}
