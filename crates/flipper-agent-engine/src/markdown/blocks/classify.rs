use super::types::LineKind;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Context-dependent decisions
/// (fence interiors, table separator dropping, list merging) belong to the
/// [`BlockBuilder`](super::builder::BlockBuilder).
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Line content with any trailing carriage return stripped.
    pub text: String,
    pub kind: LineKind,
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    pub const FENCE: &'static str = "```";
    pub const RULE: &'static str = "---";
    pub const LIST_MARKER: &'static str = "* ";

    pub fn classify(&self, raw: &str) -> LineClass {
        let line = raw.trim_end_matches('\r');
        LineClass {
            text: line.to_string(),
            kind: self.kind_of(line),
        }
    }

    fn kind_of(&self, line: &str) -> LineKind {
        if line.trim().is_empty() {
            return LineKind::Blank;
        }
        if let Some(rest) = line.strip_prefix(Self::FENCE) {
            // First word of the info string only; fence detection itself
            // ignores whatever follows the backticks.
            return LineKind::Fence {
                language: rest.split_whitespace().next().map(str::to_string),
            };
        }
        if let Some(heading) = heading_sig(line) {
            return heading;
        }
        if line == Self::RULE {
            return LineKind::Rule;
        }
        if let Some(rest) = line.strip_prefix(Self::LIST_MARKER) {
            return LineKind::ListItem {
                text: rest.to_string(),
            };
        }
        if line.contains('|') {
            return LineKind::TableRow {
                cells: split_cells(line),
                separator: is_separator(line),
            };
        }
        LineKind::Text
    }
}

/// Detects a heading opener: one to three `#` followed by a space.
///
/// Four or more hashes, or a missing space, is not a heading and falls
/// through to plain text.
fn heading_sig(line: &str) -> Option<LineKind> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=3).contains(&level) {
        return None;
    }
    let rest = line[level..].strip_prefix(' ')?;
    Some(LineKind::Heading {
        level: level as u8,
        text: rest.to_string(),
    })
}

/// Splits a table row on `|`, trimming cells and discarding the empty
/// boundary cells produced by leading/trailing pipes, so `| A | B |` and
/// `A|B` both yield `["A", "B"]`.
fn split_cells(line: &str) -> Vec<String> {
    let mut parts: Vec<&str> = line.trim().split('|').collect();
    if parts.first().is_some_and(|c| c.trim().is_empty()) {
        parts.remove(0);
    }
    if parts.last().is_some_and(|c| c.trim().is_empty()) {
        parts.pop();
    }
    parts.iter().map(|c| c.trim().to_string()).collect()
}

/// A separator row contains only dashes, pipes, and whitespace.
fn is_separator(line: &str) -> bool {
    line.chars()
        .all(|c| c == '-' || c == '|' || c.is_whitespace())
}
