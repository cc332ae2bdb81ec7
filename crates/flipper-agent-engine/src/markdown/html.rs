//! HTML serialization for rendered documents.
//!
//! Every text node is escaped on the way out (`&`, `<`, `>`); the generated
//! tags are the only unescaped structural output, so untrusted model text can
//! never inject live markup.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::ast::{BlockNode, InlineNode, RenderedDocument};

pub fn to_html(doc: &RenderedDocument) -> String {
    doc.blocks
        .iter()
        .map(block_html)
        .collect::<Vec<_>>()
        .join("\n")
}

fn block_html(block: &BlockNode) -> String {
    match block {
        BlockNode::Heading { level, text } => {
            format!("<h{level}>{}</h{level}>", encode_text(text))
        }
        // Paragraph content is emitted bare; the surrounding display styles
        // the text, and runs of lines are separated by explicit LineBreaks.
        BlockNode::Paragraph { content } => inline_html(content),
        BlockNode::CodeBlock { language, text } => match language {
            Some(lang) => format!(
                "<pre><code class=\"language-{}\">{}</code></pre>",
                encode_double_quoted_attribute(lang),
                encode_text(text)
            ),
            None => format!("<pre><code>{}</code></pre>", encode_text(text)),
        },
        BlockNode::List { items } => {
            let body: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", inline_html(item)))
                .collect();
            format!("<ul>{body}</ul>")
        }
        BlockNode::Table { header, rows } => {
            let head: String = header
                .iter()
                .map(|cell| format!("<th>{}</th>", encode_text(cell)))
                .collect();
            let body: String = rows
                .iter()
                .map(|row| {
                    let cells: String = row
                        .iter()
                        .map(|cell| format!("<td>{}</td>", encode_text(cell)))
                        .collect();
                    format!("<tr>{cells}</tr>")
                })
                .collect();
            format!("<table><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table>")
        }
        BlockNode::Rule => "<hr />".to_string(),
        BlockNode::LineBreak => "<br />".to_string(),
    }
}

fn inline_html(nodes: &[InlineNode]) -> String {
    nodes
        .iter()
        .map(|node| match node {
            InlineNode::PlainText { text } => encode_text(text).into_owned(),
            InlineNode::Bold { text } => format!("<strong>{}</strong>", encode_text(text)),
            InlineNode::Italic { text } => format!("<em>{}</em>", encode_text(text)),
            InlineNode::InlineCode { text } => format!("<code>{}</code>", encode_text(text)),
        })
        .collect()
}
