//! Streaming message buffer
//!
//! Decouples the arrival rate of streamed tokens from the rate at which the
//! consumer redraws a message. Text accumulates on every chunk, but an
//! update is only emitted when enough new content has arrived, when a line
//! ends, or when the stream is no longer active. Nothing is ever dropped:
//! `finish` always surfaces the remainder.

use crate::config::StreamingConfig;

use super::state::StreamingState;

/// Outcome of feeding the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Surface the full accumulated text now.
    Emit { text: String },
    /// Hold the update back; more content is expected.
    Suppress,
}

impl Decision {
    /// Check if this decision surfaces content
    pub fn is_emit(&self) -> bool {
        matches!(self, Decision::Emit { .. })
    }

    /// Text to display, if this decision surfaces content
    pub fn text(&self) -> Option<&str> {
        match self {
            Decision::Emit { text } => Some(text),
            Decision::Suppress => None,
        }
    }

    /// Consume the decision, returning the text to display if any
    pub fn into_text(self) -> Option<String> {
        match self {
            Decision::Emit { text } => Some(text),
            Decision::Suppress => None,
        }
    }
}

/// Accumulates one streamed response and decides when to surface it.
///
/// Lifecycle is `begin`, any number of `append`/`update` calls, then
/// `finish` (or `reset` on cancellation). Calls outside that order are the
/// caller's responsibility.
///
/// # Example
///
/// ```
/// use chatcore::streaming::{Decision, StreamingMessageBuffer};
///
/// let mut buffer = StreamingMessageBuffer::new();
/// buffer.begin();
/// assert_eq!(buffer.append("Hello"), Decision::Suppress);
/// assert!(buffer.append(", world\n").is_emit());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StreamingMessageBuffer {
    config: StreamingConfig,
    state: StreamingState,
}

impl StreamingMessageBuffer {
    /// Create a buffer with the default threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer from a configuration.
    pub fn with_config(config: StreamingConfig) -> Self {
        Self {
            config,
            state: StreamingState::new(),
        }
    }

    /// Create a buffer with a custom threshold.
    pub fn with_threshold(threshold: usize) -> Self {
        Self::with_config(StreamingConfig::default().with_threshold(threshold))
    }

    /// Start a new streamed response, discarding anything buffered.
    pub fn begin(&mut self) {
        self.state = StreamingState::active();
        tracing::trace!(threshold = self.config.threshold, "stream buffer started");
    }

    /// Append an incremental chunk and decide whether to emit.
    pub fn append(&mut self, chunk: &str) -> Decision {
        if !chunk.is_empty() {
            self.state.push_chunk(chunk);
        }
        self.decide()
    }

    /// Replace the buffered text with a cumulative snapshot and decide
    /// whether to emit.
    ///
    /// The emit rule is the same as for `append`: growth is measured
    /// against the length last emitted.
    pub fn update(&mut self, snapshot: &str) -> Decision {
        if snapshot != self.state.buffered_text {
            self.state.replace_text(snapshot);
        }
        self.decide()
    }

    /// Flush any unseen remainder and end the stream.
    ///
    /// Emits only when content arrived since the last emit. The buffer is
    /// left inactive and empty either way.
    pub fn finish(&mut self) -> Decision {
        let finished = std::mem::take(&mut self.state);
        let length = finished.buffered_length;
        let pending = finished.growth();

        let decision = if finished.has_pending() {
            Decision::Emit {
                text: finished.buffered_text,
            }
        } else {
            Decision::Suppress
        };

        tracing::debug!(
            flushed = decision.is_emit(),
            length,
            pending,
            "stream buffer finished"
        );
        decision
    }

    /// Drop all state unconditionally (used on cancellation).
    pub fn reset(&mut self) {
        self.state = StreamingState::new();
    }

    /// Current streaming state.
    pub fn state(&self) -> &StreamingState {
        &self.state
    }

    /// Full accumulated content so far.
    pub fn buffered_text(&self) -> &str {
        self.state.buffered_text()
    }

    /// Chars received since the last emit.
    pub fn pending_len(&self) -> usize {
        self.state.growth()
    }

    /// Check if a response is currently streaming.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Growth in chars that forces an emit.
    pub fn threshold(&self) -> usize {
        self.config.threshold
    }

    fn decide(&mut self) -> Decision {
        let growth = self.state.growth();
        let should_emit = growth >= self.config.threshold
            || !self.state.is_active
            || self.state.buffered_text.ends_with('\n');

        if !should_emit {
            return Decision::Suppress;
        }

        tracing::trace!(
            growth,
            length = self.state.buffered_length,
            "stream buffer emitting"
        );
        self.state.mark_emitted();
        Decision::Emit {
            text: self.state.buffered_text.clone(),
        }
    }
}
