//! Attachment link blocks in message content.
//!
//! Messages sent with attachments carry their uploaded URLs in a trailing
//! block appended to the text:
//!
//! ```text
//! Please review these.
//! [附件链接：
//! - https://cdn.example.com/a.png
//! - https://cdn.example.com/b.pdf
//! ]
//! ```
//!
//! The block is data for the attachment strip, not something to display as
//! text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex matching a trailing attachment block (fullwidth or ASCII colon)
static ATTACHMENT_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[附件链接[：:](?P<body>[^\]]*)\]\s*\z").expect("Invalid attachment block regex")
});

/// Parse the http(s) URLs listed in the trailing attachment block, in order.
///
/// Lines that are not http(s) URLs are ignored. Returns an empty list when
/// there is no attachment block.
pub fn parse_attachment_urls(content: &str) -> Vec<String> {
    let Some(captures) = ATTACHMENT_BLOCK_REGEX.captures(content) else {
        return Vec::new();
    };

    captures["body"]
        .lines()
        .map(|line| line.trim().trim_start_matches('-').trim())
        .filter(|line| line.starts_with("http://") || line.starts_with("https://"))
        .map(str::to_string)
        .collect()
}

/// Strip the trailing attachment block for display, leaving the main text.
///
/// If no attachment block is found, returns the original content trimmed.
pub fn display_text(content: &str) -> String {
    match ATTACHMENT_BLOCK_REGEX.find(content) {
        Some(m) => content[..m.start()].trim().to_string(),
        None => content.trim().to_string(),
    }
}
