//! Inline parsing for eligible block content.
//!
//! Applied to paragraph and list-item text only; code blocks, headings, and
//! table cells carry plain text. Code spans are raw zones and are tried
//! first, then bold, then italic.

pub mod cursor;
pub mod parser;

pub use cursor::Cursor;
pub use parser::parse_inline;
