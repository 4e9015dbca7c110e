//! Plain-text flattening and whitespace normalization
//!
//! Formatting (emphasis, links, code spans) is discarded; only the textual
//! content of a subtree survives.

use super::tree::{Node, NodeKind};

/// Flatten a subtree to its concatenated plain text.
///
/// Text and inline code contribute their literal text; everything else
/// contributes its children's text with no separator. Line breaks have no
/// children, so `para\nline` flattens to `paraline`.
pub(crate) fn flatten_text(node: &Node) -> String {
    let mut out = String::new();
    flatten_into(node, &mut out);
    out
}

fn flatten_into(node: &Node, out: &mut String) {
    match &node.kind {
        NodeKind::Text(text) | NodeKind::Code(text) => out.push_str(text),
        _ => {
            for child in &node.children {
                flatten_into(child, out);
            }
        }
    }
}

/// Flatten each direct child of a container on its own.
///
/// Block children (paragraphs, nested lists, code) flatten whole with
/// `flatten_text`, so the items of a nested list run together. A tight list
/// item holds its inline content directly; that run counts as one child,
/// the same as the paragraph it would be in a loose item.
pub(crate) fn flatten_children(node: &Node) -> Vec<String> {
    let mut texts = Vec::new();
    let mut inline_run: Option<String> = None;

    for child in &node.children {
        if child.kind.is_block() {
            texts.extend(inline_run.take());
            texts.push(flatten_text(child));
        } else {
            flatten_into(child, inline_run.get_or_insert_with(String::new));
        }
    }

    texts.extend(inline_run);
    texts
}

/// Trim and collapse every whitespace run (including newlines) to one space.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
