//! The markdown-subset renderer.
//!
//! Converts untrusted free-text model output into a sanitized structured
//! document. Rendering is a total function: any string input, including the
//! empty string, yields a [`RenderedDocument`], and malformed or incomplete
//! constructs degrade to plain text instead of failing.
//!
//! Parsing runs in two passes. A line-classification pass produces block
//! nodes (headings, code fences, lists, tables, rules, paragraph runs), then
//! an inline-scanning pass produces inline nodes within eligible blocks.
//! Code fences are raw zones; nothing inside them is interpreted.

pub mod ast;
pub mod blocks;
pub mod html;
pub mod inline;

#[cfg(test)]
mod tests;

pub use ast::{BlockNode, InlineNode, RenderedDocument};

use blocks::{BlockBuilder, LineClassifier};

/// Renders a source string into a document.
///
/// Pure and deterministic: identical input always yields an identical
/// document. No I/O, no shared state.
pub fn render(source: &str) -> RenderedDocument {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for line in source.split('\n') {
        builder.push(&classifier.classify(line));
    }

    RenderedDocument {
        blocks: builder.finish(),
    }
}

/// Convenience: renders a source string straight to sanitized HTML.
pub fn render_html(source: &str) -> String {
    render(source).to_html()
}
