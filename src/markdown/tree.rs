//! Document tree built from pulldown_cmark events
//!
//! pulldown_cmark produces a flat stream of start/end events. Block
//! extraction needs to look at whole subtrees (all the text under a
//! heading, every item of a list), so the events are folded into a small
//! owned tree first.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};

/// Kind of a node in the document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Document,
    Heading(u8),
    Paragraph,
    /// Code block with its raw info string (empty when not fenced or unlabeled)
    CodeBlock(String),
    ThematicBreak,
    BlockQuote,
    List,
    Item,
    /// Literal text
    Text(String),
    /// Inline code span
    Code(String),
    /// Soft or hard line break
    LineBreak,
    /// Emphasis, links, images and other inline containers
    Inline,
    /// Tables, HTML blocks, footnote definitions and other blocks
    OtherBlock,
}

impl NodeKind {
    /// Check if this kind is block-level (as opposed to inline content)
    pub(crate) fn is_block(&self) -> bool {
        matches!(
            self,
            NodeKind::Document
                | NodeKind::Heading(_)
                | NodeKind::Paragraph
                | NodeKind::CodeBlock(_)
                | NodeKind::ThematicBreak
                | NodeKind::BlockQuote
                | NodeKind::List
                | NodeKind::Item
                | NodeKind::OtherBlock
        )
    }
}

/// A node and its children in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }
}

fn kind_for(tag: Tag<'_>) -> NodeKind {
    match tag {
        Tag::Heading { level, .. } => NodeKind::Heading(level as u8),
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::CodeBlock(CodeBlockKind::Fenced(info)) => NodeKind::CodeBlock(info.to_string()),
        Tag::CodeBlock(CodeBlockKind::Indented) => NodeKind::CodeBlock(String::new()),
        Tag::BlockQuote(..) => NodeKind::BlockQuote,
        Tag::List(_) => NodeKind::List,
        Tag::Item => NodeKind::Item,
        Tag::Emphasis
        | Tag::Strong
        | Tag::Strikethrough
        | Tag::Link { .. }
        | Tag::Image { .. } => NodeKind::Inline,
        _ => NodeKind::OtherBlock,
    }
}

/// Parse markdown into a document tree.
///
/// Never fails: pulldown_cmark accepts any input, and unclosed constructs
/// (common mid-stream) are closed at end of input.
pub(crate) fn parse_document(raw: &str) -> Node {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut stack: Vec<Node> = vec![Node::new(NodeKind::Document)];

    for event in Parser::new_ext(raw, options) {
        match event {
            Event::Start(tag) => stack.push(Node::new(kind_for(tag))),
            Event::End(_) => {
                // The document root is never closed by an event
                if stack.len() > 1 {
                    if let Some(node) = stack.pop() {
                        attach(&mut stack, node);
                    }
                }
            }
            Event::Text(text) => attach_text(&mut stack, &text),
            Event::Code(code) => attach(&mut stack, Node::new(NodeKind::Code(code.into_string()))),
            Event::SoftBreak | Event::HardBreak => attach(&mut stack, Node::new(NodeKind::LineBreak)),
            Event::Rule => attach(&mut stack, Node::new(NodeKind::ThematicBreak)),
            // Raw HTML, footnote references, task markers and math carry no plain text
            _ => {}
        }
    }

    while stack.len() > 1 {
        if let Some(node) = stack.pop() {
            attach(&mut stack, node);
        }
    }

    stack
        .pop()
        .unwrap_or_else(|| Node::new(NodeKind::Document))
}

fn attach(stack: &mut [Node], node: Node) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

/// Attach text, merging it into a directly preceding text node.
fn attach_text(stack: &mut [Node], text: &str) {
    let Some(parent) = stack.last_mut() else {
        return;
    };
    match parent.children.last_mut() {
        Some(Node {
            kind: NodeKind::Text(existing),
            ..
        }) => existing.push_str(text),
        _ => parent
            .children
            .push(Node::new(NodeKind::Text(text.to_string()))),
    }
}
