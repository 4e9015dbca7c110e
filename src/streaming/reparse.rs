//! Reparse throttling for streamed markdown.
//!
//! Parsing a whole message on every token is wasteful. Consumers that keep
//! parsed output around use `should_reparse` to decide when the text has
//! changed enough to be worth parsing again.

/// Decide whether `new_text` should be parsed again given the text that was
/// parsed last time.
///
/// Returns true when:
/// - the previous text is no longer a prefix (content was edited or shrank)
/// - the text grew by at least `threshold` chars
/// - the text changed and now ends on a line break
///
/// Identical texts never need a reparse.
pub fn should_reparse(new_text: &str, last_parsed_text: &str, threshold: usize) -> bool {
    if new_text == last_parsed_text {
        return false;
    }

    let Some(added) = new_text.strip_prefix(last_parsed_text) else {
        return true;
    };

    added.chars().count() >= threshold || new_text.ends_with('\n')
}
