//! Markdown block extraction
//!
//! Converts a raw markdown document into an ordered list of `ContentBlock`s
//! (headings, paragraphs, code, quotes, list items and rules) for a
//! rendering layer to lay out. Inline formatting is flattened to plain
//! text; syntax highlighting of code is left to the consumer.
//!
//! Includes a memoization layer (`BlockCache`) that caches extracted blocks
//! keyed by content hash to avoid re-parsing unchanged messages.
//!
//! Extraction never fails. Partial documents (common mid-stream) produce
//! whatever blocks can be recognized so far.

mod blocks;
mod cache;
mod text;
mod tree;

pub use blocks::{blocks_to_json, ContentBlock};
pub use cache::BlockCache;
pub use text::normalize_whitespace;

use text::{flatten_children, flatten_text};
use tree::{Node, NodeKind};

/// Maximum number of entries in the block cache before eviction
pub const BLOCK_CACHE_MAX_ENTRIES: usize = 500;

/// Extract content blocks from a markdown document, in document order.
///
/// Each top-level node becomes one block, except lists, which produce one
/// `ListItem` per item (nested lists fold into their parent item's text).
/// Paragraphs, quotes and list items whose text is empty are dropped;
/// headings and code blocks are always kept. Anything else (tables, raw
/// HTML) is skipped.
///
/// # Example
///
/// ```
/// use chatcore::markdown::{extract_blocks, ContentBlock};
///
/// let blocks = extract_blocks("# Hello");
/// assert_eq!(
///     blocks,
///     vec![ContentBlock::Heading { level: 1, text: "Hello".to_string() }]
/// );
/// ```
pub fn extract_blocks(raw: &str) -> Vec<ContentBlock> {
    if raw.is_empty() {
        return Vec::new();
    }

    let document = tree::parse_document(raw);
    let mut blocks = Vec::new();
    for node in &document.children {
        push_blocks(node, &mut blocks);
    }

    tracing::trace!(
        input_len = raw.len(),
        block_count = blocks.len(),
        "extracted markdown blocks"
    );
    blocks
}

fn push_blocks(node: &Node, blocks: &mut Vec<ContentBlock>) {
    match &node.kind {
        NodeKind::Heading(level) => blocks.push(ContentBlock::Heading {
            level: *level,
            text: normalize_whitespace(&flatten_text(node)),
        }),
        NodeKind::Paragraph => {
            let text = normalize_whitespace(&flatten_text(node));
            if !text.is_empty() {
                blocks.push(ContentBlock::Paragraph { text });
            }
        }
        NodeKind::CodeBlock(info) => blocks.push(ContentBlock::Code {
            language: info.trim().to_string(),
            code: flatten_text(node),
        }),
        NodeKind::ThematicBreak => blocks.push(ContentBlock::HorizontalRule),
        NodeKind::BlockQuote => {
            let text = quote_text(node);
            if !text.is_empty() {
                blocks.push(ContentBlock::Quote { text });
            }
        }
        NodeKind::List => {
            for item in node.children.iter().filter(|c| c.kind == NodeKind::Item) {
                let text = normalize_whitespace(&flatten_children(item).join("\n"));
                if !text.is_empty() {
                    blocks.push(ContentBlock::ListItem { text });
                }
            }
        }
        _ => {}
    }
}

/// Quote text keeps one line per child block and is only trimmed, not normalized.
fn quote_text(node: &Node) -> String {
    flatten_children(node).join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(text: &str) -> ContentBlock {
        ContentBlock::Paragraph {
            text: text.to_string(),
        }
    }

    fn list_item(text: &str) -> ContentBlock {
        ContentBlock::ListItem {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_blocks("").is_empty());
    }

    #[test]
    fn test_whitespace_only_input() {
        assert!(extract_blocks("   \n\n  \n").is_empty());
    }

    #[test]
    fn test_heading() {
        assert_eq!(
            extract_blocks("# Hello"),
            vec![ContentBlock::Heading {
                level: 1,
                text: "Hello".to_string()
            }]
        );
    }

    #[test]
    fn test_heading_levels() {
        for level in 1..=6u8 {
            let md = format!("{} Title", "#".repeat(level as usize));
            assert_eq!(
                extract_blocks(&md),
                vec![ContentBlock::Heading {
                    level,
                    text: "Title".to_string()
                }]
            );
        }
    }

    #[test]
    fn test_setext_heading() {
        assert_eq!(
            extract_blocks("Title\n====="),
            vec![ContentBlock::Heading {
                level: 1,
                text: "Title".to_string()
            }]
        );
    }

    #[test]
    fn test_empty_heading_is_kept() {
        assert_eq!(
            extract_blocks("#"),
            vec![ContentBlock::Heading {
                level: 1,
                text: String::new()
            }]
        );
    }

    #[test]
    fn test_multiple_paragraphs() {
        assert_eq!(
            extract_blocks("para one\n\npara two"),
            vec![paragraph("para one"), paragraph("para two")]
        );
    }

    #[test]
    fn test_paragraph_line_breaks_join_without_space() {
        assert_eq!(extract_blocks("para\nline"), vec![paragraph("paraline")]);
        assert_eq!(extract_blocks("para  \nline"), vec![paragraph("paraline")]);
        assert_eq!(
            extract_blocks("first line \nsecond   line"),
            vec![paragraph("first linesecond line")]
        );
    }

    #[test]
    fn test_inline_formatting_is_flattened() {
        assert_eq!(
            extract_blocks("This is **bold**, *italic*, ~~gone~~ and `code` with a [link](https://x.dev)."),
            vec![paragraph(
                "This is bold, italic, gone and code with a link."
            )]
        );
    }

    #[test]
    fn test_code_block() {
        assert_eq!(
            extract_blocks("```py\nprint(1)\n```"),
            vec![ContentBlock::Code {
                language: "py".to_string(),
                code: "print(1)\n".to_string()
            }]
        );
    }

    #[test]
    fn test_code_block_preserves_whitespace() {
        let md = "```rust\nfn main() {\n    println!(\"hi\");\n\n}\n```";
        assert_eq!(
            extract_blocks(md),
            vec![ContentBlock::Code {
                language: "rust".to_string(),
                code: "fn main() {\n    println!(\"hi\");\n\n}\n".to_string()
            }]
        );
    }

    #[test]
    fn test_code_block_without_language() {
        assert_eq!(
            extract_blocks("```\nplain\n```"),
            vec![ContentBlock::Code {
                language: String::new(),
                code: "plain\n".to_string()
            }]
        );
    }

    #[test]
    fn test_empty_code_block_is_kept() {
        assert_eq!(
            extract_blocks("```js\n```"),
            vec![ContentBlock::Code {
                language: "js".to_string(),
                code: String::new()
            }]
        );
    }

    #[test]
    fn test_code_info_string_is_trimmed() {
        let blocks = extract_blocks("```   python   \nx = 1\n```");
        assert_eq!(
            blocks,
            vec![ContentBlock::Code {
                language: "python".to_string(),
                code: "x = 1\n".to_string()
            }]
        );
    }

    #[test]
    fn test_incomplete_code_block_during_streaming() {
        let blocks = extract_blocks("```rust\nfn incomplete(");
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            ContentBlock::Code { language, code } => {
                assert_eq!(language, "rust");
                assert_eq!(code.trim_end(), "fn incomplete(");
            }
            other => panic!("expected code block, got {:?}", other),
        }
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(
            extract_blocks("above\n\n---\n\nbelow"),
            vec![
                paragraph("above"),
                ContentBlock::HorizontalRule,
                paragraph("below")
            ]
        );
    }

    #[test]
    fn test_quote_keeps_paragraph_breaks() {
        assert_eq!(
            extract_blocks("> first part\n>\n> second"),
            vec![ContentBlock::Quote {
                text: "first part\nsecond".to_string()
            }]
        );
    }

    #[test]
    fn test_quote_is_trimmed_not_normalized() {
        assert_eq!(
            extract_blocks("> a   b\n>\n> c"),
            vec![ContentBlock::Quote {
                text: "a   b\nc".to_string()
            }]
        );
    }

    #[test]
    fn test_empty_quote_is_dropped() {
        assert!(extract_blocks(">").is_empty());
    }

    #[test]
    fn test_list_items() {
        assert_eq!(
            extract_blocks("- a\n- b"),
            vec![list_item("a"), list_item("b")]
        );
    }

    #[test]
    fn test_ordered_list_items() {
        assert_eq!(
            extract_blocks("1. first\n2. second\n3. third"),
            vec![list_item("first"), list_item("second"), list_item("third")]
        );
    }

    #[test]
    fn test_loose_list_items() {
        assert_eq!(
            extract_blocks("- a\n\n- b\n\n  more b"),
            vec![list_item("a"), list_item("b more b")]
        );
    }

    #[test]
    fn test_nested_list_folds_into_parent() {
        assert_eq!(
            extract_blocks("- parent\n  - child one\n  - child two\n- sibling"),
            vec![list_item("parent child onechild two"), list_item("sibling")]
        );
    }

    #[test]
    fn test_empty_list_item_is_dropped() {
        assert_eq!(extract_blocks("-\n- b"), vec![list_item("b")]);
    }

    #[test]
    fn test_unknown_blocks_are_skipped() {
        assert_eq!(
            extract_blocks("<div>\nraw html\n</div>\n\nafter"),
            vec![paragraph("after")]
        );
    }

    #[test]
    fn test_mixed_document_order() {
        let md = r#"# Heading

This is **bold** and *italic* text.

```rust
fn main() {}
```

- List item 1
- List item 2

> quoted

---
"#;
        assert_eq!(
            extract_blocks(md),
            vec![
                ContentBlock::Heading {
                    level: 1,
                    text: "Heading".to_string()
                },
                paragraph("This is bold and italic text."),
                ContentBlock::Code {
                    language: "rust".to_string(),
                    code: "fn main() {}\n".to_string()
                },
                list_item("List item 1"),
                list_item("List item 2"),
                ContentBlock::Quote {
                    text: "quoted".to_string()
                },
                ContentBlock::HorizontalRule,
            ]
        );
    }

    #[test]
    fn test_extraction_is_pure() {
        let md = "# T\n\n- a\n- b\n\n```\nx\n```";
        assert_eq!(extract_blocks(md), extract_blocks(md));
    }

    #[test]
    fn test_incomplete_bold_during_streaming() {
        assert_eq!(extract_blocks("Some **unclosed"), vec![paragraph("Some **unclosed")]);
    }
}
