/// The locally detectable kind of a single source line.
///
/// Precedence is encoded in the classifier's match order: blank, fence,
/// heading, rule, list item, table row, plain text. A list-item line is
/// never a table row even when it contains `|`.
#[derive(Debug, Clone)]
pub enum LineKind {
    Blank,
    /// A line opening (or closing) a code fence, with an optional info word.
    Fence { language: Option<String> },
    Heading { level: u8, text: String },
    Rule,
    ListItem { text: String },
    TableRow { cells: Vec<String>, separator: bool },
    Text,
}
