//! chatcore - the data layer of a chat client
//!
//! Buffers streamed assistant responses so the UI redraws at a sane rate,
//! and turns finished markdown into typed content blocks for rendering.

pub mod attachments;
pub mod config;
pub mod conversation;
pub mod error;
pub mod markdown;
pub mod streaming;

pub use config::StreamingConfig;
pub use error::{ChatError, ChatResult};
pub use markdown::{extract_blocks, ContentBlock};
pub use streaming::{Decision, StreamingMessageBuffer};
