//! Node types for the rendered document tree.

use serde::{Deserialize, Serialize};

/// One block-level unit of rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockNode {
    /// A heading, levels 1 through 3.
    Heading { level: u8, text: String },
    /// A run of inline content from a single plain line.
    Paragraph { content: Vec<InlineNode> },
    /// A fenced code block. Inline rules never apply inside.
    CodeBlock {
        language: Option<String>,
        text: String,
    },
    /// An unordered list; one inline sequence per item.
    List { items: Vec<Vec<InlineNode>> },
    /// A table with a header row and zero or more data rows.
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// A horizontal rule.
    Rule,
    /// A line break between adjacent paragraph content.
    LineBreak,
}

/// One inline-level unit within a paragraph or list item.
///
/// Emphasis content is flat text: the subset grammar does not nest inline
/// constructs inside one another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineNode {
    PlainText { text: String },
    Bold { text: String },
    Italic { text: String },
    InlineCode { text: String },
}

/// The renderer's output: an ordered sequence of blocks.
///
/// A document is built once per model response and replaced wholesale by the
/// next render; it is never mutated in place and never re-parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub blocks: Vec<BlockNode>,
}

impl RenderedDocument {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Serializes the document to sanitized HTML.
    pub fn to_html(&self) -> String {
        super::html::to_html(self)
    }
}
