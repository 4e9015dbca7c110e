//! Message list state for one conversation

use crate::config::StreamingConfig;
use crate::streaming::{Decision, StreamingMessageBuffer};

use super::message::{ChatMessage, MessageRole};

/// The message list behind a chat view, plus the streaming buffer that
/// throttles updates to the assistant message being generated.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    buffer: StreamingMessageBuffer,
    is_interacting: bool,
    is_thinking: bool,
}

impl Conversation {
    /// Create an empty conversation with the default stream threshold
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty conversation with a custom streaming configuration
    pub fn with_config(config: StreamingConfig) -> Self {
        Self {
            buffer: StreamingMessageBuffer::with_config(config),
            ..Self::default()
        }
    }

    /// All messages in display order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The most recent message, if any
    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Check if a response is being generated
    pub fn is_interacting(&self) -> bool {
        self.is_interacting
    }

    /// Check if the assistant is in its thinking phase
    pub fn is_thinking(&self) -> bool {
        self.is_thinking
    }

    /// The streaming buffer for the current response
    pub fn streaming_buffer(&self) -> &StreamingMessageBuffer {
        &self.buffer
    }

    /// Append a message to the list
    pub fn add_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Remove the message at `index`. Out of range is a no-op.
    pub fn remove_message(&mut self, index: usize) -> Option<ChatMessage> {
        if index < self.messages.len() {
            Some(self.messages.remove(index))
        } else {
            None
        }
    }

    /// Replace the content of the last message if it is from the assistant.
    ///
    /// Returns false (and changes nothing) otherwise.
    pub fn update_last_message_with_content(&mut self, content: &str) -> bool {
        match self.messages.last_mut() {
            Some(last) if last.role == MessageRole::Assistant => {
                last.content = content.to_string();
                true
            }
            _ => false,
        }
    }

    /// Mark whether a response is in progress. Ending the interaction drops
    /// any buffered stream state.
    pub fn set_interacting(&mut self, interacting: bool) {
        self.is_interacting = interacting;
        if !interacting {
            self.buffer.reset();
        }
    }

    /// Mark whether the assistant is thinking
    pub fn set_thinking(&mut self, thinking: bool) {
        self.is_thinking = thinking;
    }

    /// Add the user's message and an empty assistant placeholder, and start
    /// buffering the response stream.
    pub fn start_streaming_response(&mut self, user_text: &str) {
        self.messages.push(ChatMessage::user(user_text));
        self.messages.push(ChatMessage::assistant(""));
        self.buffer.begin();
        self.is_interacting = true;
        tracing::debug!(message_count = self.messages.len(), "streaming response started");
    }

    /// Feed the latest cumulative response text.
    ///
    /// The placeholder is only rewritten when the buffer decides to emit.
    /// Returns true when the displayed content changed. Ignored when the
    /// last message is not from the assistant.
    pub fn update_streaming_response(&mut self, content: &str) -> bool {
        if !self.last_is_assistant() {
            return false;
        }

        match self.buffer.update(content) {
            Decision::Emit { text } => self.update_last_message_with_content(&text),
            Decision::Suppress => false,
        }
    }

    /// Flush whatever the buffer is still holding into the placeholder and
    /// end the interaction.
    pub fn finish_streaming_response(&mut self) {
        if let Decision::Emit { text } = self.buffer.finish() {
            self.update_last_message_with_content(&text);
        }
        self.is_interacting = false;
        tracing::debug!("streaming response finished");
    }

    /// Remove every message and drop stream state
    pub fn clear(&mut self) {
        self.messages.clear();
        self.buffer.reset();
    }

    fn last_is_assistant(&self) -> bool {
        self.messages
            .last()
            .is_some_and(|m| m.role == MessageRole::Assistant)
    }
}
