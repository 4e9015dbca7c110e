//! Semantic block splitting for streamed responses
//!
//! Splits a growing response into semantic blocks (paragraph-like runs of
//! lines and fenced code blocks) as soon as each one is complete, so a
//! consumer can render finished blocks once and only keep re-rendering the
//! block still being written.
//!
//! The parser is fed cumulative snapshots, not deltas, and works out the
//! delta itself.

/// Fence delimiter of an open code block: the fence char and run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fence {
    marker: char,
    len: usize,
}

impl Fence {
    /// Parse an opening fence (three or more backticks or tildes).
    fn open(line: &str) -> Option<Self> {
        let trimmed = line.trim_start();
        let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
        let len = trimmed.chars().take_while(|c| *c == marker).count();
        (len >= 3).then_some(Self { marker, len })
    }

    /// Check if `line` closes this fence.
    fn closes(&self, line: &str) -> bool {
        let trimmed = line.trim_start();
        let len = trimmed.chars().take_while(|c| *c == self.marker).count();
        len >= self.len && trimmed[len * self.marker.len_utf8()..].trim().is_empty()
    }
}

/// Incremental splitter turning cumulative snapshots into completed blocks.
#[derive(Debug, Clone, Default)]
pub struct SemanticBlockParser {
    /// Last snapshot seen
    seen: String,
    /// Byte offset where the pending block starts
    block_start: usize,
    /// Byte offset of the first line not yet scanned
    scan_pos: usize,
    /// Open code fence, if inside one
    fence: Option<Fence>,
}

impl SemanticBlockParser {
    /// Create a parser with no pending state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all pending state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Text that has been seen but not yet returned as a block.
    pub fn pending(&self) -> &str {
        &self.seen[self.block_start..]
    }

    /// Consume the latest full text and return blocks completed since the
    /// previous call.
    ///
    /// When `is_done` is true the pending remainder is flushed as a final
    /// block and the parser resets.
    pub fn consume_full_text(&mut self, full_text: &str, is_done: bool) -> Vec<String> {
        if !full_text.starts_with(self.seen.as_str()) {
            tracing::debug!("snapshot does not extend previous text, restarting block parser");
            self.reset();
        }
        let start = self.seen.len();
        self.seen.push_str(&full_text[start..]);

        let mut blocks = Vec::new();
        self.scan_lines(&mut blocks);

        if is_done {
            let end = self.seen.len();
            self.push_block(self.block_start, end, &mut blocks);
            self.reset();
        }

        blocks
    }

    fn scan_lines(&mut self, blocks: &mut Vec<String>) {
        while let Some(offset) = self.seen[self.scan_pos..].find('\n') {
            let line_start = self.scan_pos;
            let line_end = line_start + offset + 1;
            let line = &self.seen[line_start..line_start + offset];

            match self.fence {
                Some(fence) => {
                    if fence.closes(line) {
                        self.push_block(self.block_start, line_end, blocks);
                        self.block_start = line_end;
                        self.fence = None;
                    }
                }
                None => {
                    if let Some(fence) = Fence::open(line) {
                        self.push_block(self.block_start, line_start, blocks);
                        self.block_start = line_start;
                        self.fence = Some(fence);
                    } else if line.trim().is_empty() {
                        self.push_block(self.block_start, line_start, blocks);
                        self.block_start = line_end;
                    }
                }
            }

            self.scan_pos = line_end;
        }
    }

    fn push_block(&self, start: usize, end: usize, blocks: &mut Vec<String>) {
        if start >= end {
            return;
        }
        let block = self.seen[start..end]
            .trim_start_matches(&['\n', '\r'][..])
            .trim_end();
        if !block.is_empty() {
            blocks.push(block.to_string());
        }
    }
}
