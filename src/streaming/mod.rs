//! Streaming response handling
//!
//! Tools for turning a high-frequency token stream into a small number of
//! consumer updates:
//!
//! - `StreamingMessageBuffer` decides when accumulated text should be shown
//! - `should_reparse` throttles re-parsing of growing markdown
//! - `SemanticBlockParser` splits a growing response into completed blocks

mod buffer;
mod reparse;
mod semantic;
mod state;

pub use buffer::{Decision, StreamingMessageBuffer};
pub use reparse::should_reparse;
pub use semantic::SemanticBlockParser;
pub use state::StreamingState;
