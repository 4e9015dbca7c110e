//! Content blocks produced by markdown extraction

use serde::{Deserialize, Serialize};

use crate::error::ChatResult;

/// One structurally classified unit of a markdown document.
///
/// Serializes as an internally tagged object, e.g.
/// `{"type":"heading","level":1,"text":"Hello"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentBlock {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    Code { language: String, code: String },
    HorizontalRule,
    Quote { text: String },
    ListItem { text: String },
}

impl ContentBlock {
    /// Name of the block kind as used in the serialized form
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Heading { .. } => "heading",
            ContentBlock::Paragraph { .. } => "paragraph",
            ContentBlock::Code { .. } => "code",
            ContentBlock::HorizontalRule => "horizontalRule",
            ContentBlock::Quote { .. } => "quote",
            ContentBlock::ListItem { .. } => "listItem",
        }
    }

    /// Plain text of the block (code for code blocks, none for rules)
    pub fn text(&self) -> Option<&str> {
        match self {
            ContentBlock::Heading { text, .. }
            | ContentBlock::Paragraph { text }
            | ContentBlock::Quote { text }
            | ContentBlock::ListItem { text } => Some(text),
            ContentBlock::Code { code, .. } => Some(code),
            ContentBlock::HorizontalRule => None,
        }
    }

    /// Check if this is a code block
    pub fn is_code(&self) -> bool {
        matches!(self, ContentBlock::Code { .. })
    }
}

/// Render blocks as a JSON array for consumers on the other side of a
/// language or process boundary.
pub fn blocks_to_json(blocks: &[ContentBlock]) -> ChatResult<String> {
    Ok(serde_json::to_string(blocks)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_serialization() {
        let block = ContentBlock::Heading {
            level: 2,
            text: "Setup".to_string(),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "heading");
        assert_eq!(json["level"], 2);
        assert_eq!(json["text"], "Setup");
    }

    #[test]
    fn test_tag_names_match_kind() {
        let blocks = vec![
            ContentBlock::Heading {
                level: 1,
                text: "h".to_string(),
            },
            ContentBlock::Paragraph {
                text: "p".to_string(),
            },
            ContentBlock::Code {
                language: String::new(),
                code: String::new(),
            },
            ContentBlock::HorizontalRule,
            ContentBlock::Quote {
                text: "q".to_string(),
            },
            ContentBlock::ListItem {
                text: "l".to_string(),
            },
        ];

        for block in &blocks {
            let json = serde_json::to_value(block).unwrap();
            assert_eq!(json["type"], block.kind());
        }
    }

    #[test]
    fn test_horizontal_rule_has_only_type() {
        let json = serde_json::to_string(&ContentBlock::HorizontalRule).unwrap();
        assert_eq!(json, r#"{"type":"horizontalRule"}"#);
    }

    #[test]
    fn test_deserialize_list_item() {
        let block: ContentBlock =
            serde_json::from_str(r#"{"type":"listItem","text":"milk"}"#).unwrap();
        assert_eq!(
            block,
            ContentBlock::ListItem {
                text: "milk".to_string()
            }
        );
    }

    #[test]
    fn test_text_accessor() {
        let code = ContentBlock::Code {
            language: "rust".to_string(),
            code: "fn main() {}".to_string(),
        };
        assert_eq!(code.text(), Some("fn main() {}"));
        assert!(code.is_code());
        assert_eq!(ContentBlock::HorizontalRule.text(), None);
    }

    #[test]
    fn test_blocks_to_json() {
        let json = blocks_to_json(&[ContentBlock::Paragraph {
            text: "hi".to_string(),
        }])
        .unwrap();
        assert_eq!(json, r#"[{"type":"paragraph","text":"hi"}]"#);
    }

    #[test]
    fn test_blocks_to_json_empty() {
        assert_eq!(blocks_to_json(&[]).unwrap(), "[]");
    }
}
