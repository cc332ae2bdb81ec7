use crate::markdown::ast::InlineNode;

use super::cursor::Cursor;

const TICK: u8 = b'`';
const STAR: u8 = b'*';
const BOLD: &[u8] = b"**";

/// Parses one line's text into a sequence of [`InlineNode`]s.
///
/// Constructs are tried in precedence order at each position: inline code
/// first (a raw zone, so `**` inside backticks stays literal), then bold,
/// then italic. Trying bold before italic keeps `**x**` from matching as two
/// italic spans around a bare `*`. An unclosed span restores the cursor and
/// degrades to plain text.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    fn flush_text(out: &mut Vec<InlineNode>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::PlainText {
                text: s[start..end].to_string(),
            });
        }
    }

    while !cur.eof() {
        let start = cur.i;
        if let Some(node) = try_parse_code(&mut cur) {
            flush_text(&mut out, s, text_start, start);
            out.push(node);
            text_start = cur.i;
            continue;
        }
        if let Some(node) = try_parse_bold(&mut cur) {
            flush_text(&mut out, s, text_start, start);
            out.push(node);
            text_start = cur.i;
            continue;
        }
        if let Some(node) = try_parse_italic(&mut cur) {
            flush_text(&mut out, s, text_start, start);
            out.push(node);
            text_start = cur.i;
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, s, text_start, cur.i);
    out
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick or if the span isn't closed; on
/// failure the cursor position is restored.
fn try_parse_code(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let inner_start = cur.i;

    while !cur.eof() && cur.peek() != Some(TICK) {
        cur.bump();
    }

    if cur.peek() != Some(TICK) {
        *cur = saved;
        return None;
    }
    let text = cur.s[inner_start..cur.i].to_string();
    cur.bump(); // closing `

    Some(InlineNode::InlineCode { text })
}

/// Attempts to parse a bold span (`**…**`) starting at the current position.
fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(BOLD) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(BOLD.len());
    let inner_start = cur.i;

    while !cur.eof() && !cur.starts_with(BOLD) {
        cur.bump();
    }

    if !cur.starts_with(BOLD) {
        *cur = saved;
        return None;
    }
    let text = cur.s[inner_start..cur.i].to_string();
    cur.bump_n(BOLD.len());

    Some(InlineNode::Bold { text })
}

/// Attempts to parse an italic span (`*…*`) starting at the current position.
///
/// Only reached when the bold attempt has failed, so a lone `**` with no
/// closing pair collapses to an empty italic span, mirroring the original
/// substitution order.
fn try_parse_italic(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(STAR) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // *
    let inner_start = cur.i;

    while !cur.eof() && cur.peek() != Some(STAR) {
        cur.bump();
    }

    if cur.peek() != Some(STAR) {
        *cur = saved;
        return None;
    }
    let text = cur.s[inner_start..cur.i].to_string();
    cur.bump(); // closing *

    Some(InlineNode::Italic { text })
}
