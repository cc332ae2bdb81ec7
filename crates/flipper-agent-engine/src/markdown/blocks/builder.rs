use crate::markdown::ast::{BlockNode, InlineNode};
use crate::markdown::inline::parse_inline;

use super::{classify::LineClass, types::LineKind};

/// The multi-line block currently being accumulated, if any.
#[derive(Debug)]
enum LeafState {
    None,
    Fence {
        language: Option<String>,
        lines: Vec<String>,
    },
    List {
        items: Vec<Vec<InlineNode>>,
    },
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Phase 2 of block parsing: folds classified lines into block nodes.
///
/// An open fence is a raw zone; every line inside it is captured verbatim
/// until a fence line closes it, and an unterminated fence is flushed as a
/// code block at end of input. Line breaks are emitted only between adjacent
/// plain/blank lines, never around block constructs.
pub struct BlockBuilder {
    leaf: LeafState,
    prev_plain: bool,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            prev_plain: false,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if matches!(self.leaf, LeafState::Fence { .. }) {
            self.consume_fence_line(c);
            return;
        }

        match &c.kind {
            LineKind::Blank => {
                self.flush_leaf();
                if self.prev_plain {
                    self.out.push(BlockNode::LineBreak);
                }
                self.prev_plain = true;
            }
            LineKind::Fence { language } => {
                self.flush_leaf();
                self.prev_plain = false;
                self.leaf = LeafState::Fence {
                    language: language.clone(),
                    lines: vec![],
                };
            }
            LineKind::Heading { level, text } => {
                self.flush_leaf();
                self.prev_plain = false;
                self.out.push(BlockNode::Heading {
                    level: *level,
                    text: text.clone(),
                });
            }
            LineKind::Rule => {
                self.flush_leaf();
                self.prev_plain = false;
                self.out.push(BlockNode::Rule);
            }
            LineKind::ListItem { text } => {
                let item = parse_inline(text);
                if let LeafState::List { items } = &mut self.leaf {
                    items.push(item);
                } else {
                    self.flush_leaf();
                    self.leaf = LeafState::List { items: vec![item] };
                }
                self.prev_plain = false;
            }
            LineKind::TableRow { cells, separator } => {
                if let LeafState::Table { rows, .. } = &mut self.leaf {
                    // A separator row immediately following a row is
                    // consumed, not emitted as a row of empty cells.
                    if !*separator {
                        rows.push(cells.clone());
                    }
                } else {
                    self.flush_leaf();
                    self.leaf = LeafState::Table {
                        header: cells.clone(),
                        rows: vec![],
                    };
                }
                self.prev_plain = false;
            }
            LineKind::Text => {
                self.flush_leaf();
                if self.prev_plain {
                    self.out.push(BlockNode::LineBreak);
                }
                self.out.push(BlockNode::Paragraph {
                    content: parse_inline(&c.text),
                });
                self.prev_plain = true;
            }
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush; an unclosed fence consumed the remainder of the input.
        self.flush_leaf();
        self.out
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        if matches!(c.kind, LineKind::Fence { .. }) {
            self.flush_leaf();
        } else if let LeafState::Fence { lines, .. } = &mut self.leaf {
            lines.push(c.text.clone());
        }
    }

    fn flush_leaf(&mut self) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Fence { language, lines } => self.out.push(BlockNode::CodeBlock {
                language,
                text: lines.join("\n"),
            }),
            LeafState::List { items } => self.out.push(BlockNode::List { items }),
            LeafState::Table { header, rows } => {
                self.out.push(BlockNode::Table { header, rows })
            }
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
