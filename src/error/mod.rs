//! Error types for chatcore.
//!
//! The streaming buffer and the markdown extractor never fail; bad input
//! degrades to partial output. Errors only surface from the edges of the
//! crate:
//!
//! - **Configuration**: invalid values read from the environment
//! - **Serialization**: rendering blocks to the JSON bridge form
//!
//! All fallible functions return `ChatResult<T>`.

mod chat_error;
mod config;
mod result;

pub use chat_error::ChatError;
pub use config::ConfigError;
pub use result::ChatResult;
