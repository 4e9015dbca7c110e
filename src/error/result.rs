//! Result type alias for chatcore operations.

use super::chat_error::ChatError;

/// Type alias for Results using ChatError.
pub type ChatResult<T> = Result<T, ChatError>;
