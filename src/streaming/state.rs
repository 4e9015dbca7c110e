//! Streaming state for one in-progress response
//!
//! Holds the accumulated text of a streamed response and how much of it has
//! already been surfaced to the consumer. Lengths are counted in chars
//! (Unicode scalar values), never bytes.

/// Streaming state for one in-progress response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamingState {
    /// Full accumulated content so far
    pub(crate) buffered_text: String,
    /// Char length of `buffered_text`, kept in step with every mutation
    pub(crate) buffered_length: usize,
    /// Char length of the text last surfaced to the consumer
    pub(crate) last_emitted_length: usize,
    /// Whether a response is currently streaming
    pub(crate) is_active: bool,
}

impl StreamingState {
    /// Create a new, inactive streaming state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty state for a response that just started streaming
    pub fn active() -> Self {
        Self {
            is_active: true,
            ..Self::default()
        }
    }

    /// Full accumulated content so far
    pub fn buffered_text(&self) -> &str {
        &self.buffered_text
    }

    /// Char length of the accumulated content
    pub fn buffered_length(&self) -> usize {
        self.buffered_length
    }

    /// Char length of the text last surfaced to the consumer
    pub fn last_emitted_length(&self) -> usize {
        self.last_emitted_length
    }

    /// Check if a response is currently streaming
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Chars received since the last emit
    pub fn growth(&self) -> usize {
        self.buffered_length - self.last_emitted_length
    }

    /// Check if there is content the consumer has not seen yet
    pub fn has_pending(&self) -> bool {
        self.buffered_length > self.last_emitted_length
    }

    pub(crate) fn push_chunk(&mut self, chunk: &str) {
        self.buffered_text.push_str(chunk);
        self.buffered_length += chunk.chars().count();
    }

    pub(crate) fn replace_text(&mut self, snapshot: &str) {
        self.buffered_text.clear();
        self.buffered_text.push_str(snapshot);
        self.buffered_length = snapshot.chars().count();
        // An edited or restarted snapshot can be shorter than what was shown.
        self.last_emitted_length = self.last_emitted_length.min(self.buffered_length);
    }

    pub(crate) fn mark_emitted(&mut self) {
        self.last_emitted_length = self.buffered_length;
    }
}
