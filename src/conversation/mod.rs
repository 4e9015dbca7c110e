//! Conversation data model
//!
//! The message list a chat view renders, and the glue that routes a
//! streamed response through a `StreamingMessageBuffer` into the assistant
//! message being generated.

mod message;
mod session;

pub use message::{ChatMessage, MessageRole};
pub use session::Conversation;
