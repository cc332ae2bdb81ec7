//! Contract tests for the renderer: totality, escaping, and the grammar's
//! tie-break rules.

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::ast::{BlockNode, InlineNode};
use super::{render, render_html};

fn plain(text: &str) -> InlineNode {
    InlineNode::PlainText {
        text: text.to_string(),
    }
}

#[test]
fn empty_input_yields_empty_document() {
    assert!(render("").is_empty());
}

#[test]
fn whitespace_only_input_terminates() {
    // Totality: nothing here is a block trigger, and nothing panics.
    let doc = render("   \n\t\n  ");
    assert!(doc.blocks.iter().all(|b| matches!(b, BlockNode::LineBreak)));
}

#[test]
fn rendering_is_deterministic() {
    let source = "# a\n**b**\n```\nc\n```\n* d\nA|B\n---\n";
    assert_eq!(render(source), render(source));
}

#[test]
fn single_heading() {
    assert_eq!(
        render("# Title").blocks,
        vec![BlockNode::Heading {
            level: 1,
            text: "Title".to_string()
        }]
    );
}

#[test]
fn emphasis_paragraph() {
    assert_eq!(
        render("**bold** and *italic*").blocks,
        vec![BlockNode::Paragraph {
            content: vec![
                InlineNode::Bold {
                    text: "bold".to_string()
                },
                plain(" and "),
                InlineNode::Italic {
                    text: "italic".to_string()
                },
            ]
        }]
    );
}

#[test]
fn fenced_code_block_is_raw() {
    assert_eq!(
        render("```\ncode here\n```").blocks,
        vec![BlockNode::CodeBlock {
            language: None,
            text: "code here".to_string()
        }]
    );
}

#[test]
fn code_fence_suppresses_all_other_rules() {
    assert_eq!(
        render("```\n# not a heading\n* not a list\nA|B\n```").blocks,
        vec![BlockNode::CodeBlock {
            language: None,
            text: "# not a heading\n* not a list\nA|B".to_string()
        }]
    );
}

#[test]
fn unterminated_fence_consumes_rest_of_input() {
    assert_eq!(
        render("```\nstill code\nmore code").blocks,
        vec![BlockNode::CodeBlock {
            language: None,
            text: "still code\nmore code".to_string()
        }]
    );
}

#[test]
fn consecutive_list_items_merge_into_one_list() {
    assert_eq!(
        render("* a\n* b").blocks,
        vec![BlockNode::List {
            items: vec![vec![plain("a")], vec![plain("b")]]
        }]
    );
}

#[test]
fn list_line_with_pipe_stays_a_list_item() {
    assert_eq!(
        render("* a | b").blocks,
        vec![BlockNode::List {
            items: vec![vec![plain("a | b")]]
        }]
    );
}

#[test]
fn table_with_separator_row() {
    assert_eq!(
        render("A|B\n---|---\n1|2").blocks,
        vec![BlockNode::Table {
            header: vec!["A".to_string(), "B".to_string()],
            rows: vec![vec!["1".to_string(), "2".to_string()]],
        }]
    );
}

#[test]
fn leading_separator_line_opens_a_table_as_data() {
    // "immediately following a row" is the only case where a separator is
    // dropped; a separator-shaped first line is an ordinary header row.
    assert_eq!(
        render("---|---").blocks,
        vec![BlockNode::Table {
            header: vec!["---".to_string(), "---".to_string()],
            rows: vec![],
        }]
    );
}

#[test]
fn bare_rule_line() {
    assert_eq!(render("---").blocks, vec![BlockNode::Rule]);
}

#[test]
fn block_boundary_terminates_paragraph_run() {
    assert_eq!(
        render("text\n# heading\nmore").blocks,
        vec![
            BlockNode::Paragraph {
                content: vec![plain("text")]
            },
            BlockNode::Heading {
                level: 1,
                text: "heading".to_string()
            },
            BlockNode::Paragraph {
                content: vec![plain("more")]
            },
        ]
    );
}

#[test]
fn list_interrupted_by_blank_line_splits() {
    let blocks = render("* a\n\n* b").blocks;
    let lists = blocks
        .iter()
        .filter(|b| matches!(b, BlockNode::List { .. }))
        .count();
    assert_eq!(lists, 2);
}

#[rstest]
#[case("# Title", "<h1>Title</h1>")]
#[case("## Sub", "<h2>Sub</h2>")]
#[case("### Deep", "<h3>Deep</h3>")]
#[case("#### Too deep", "#### Too deep")]
#[case("---", "<hr />")]
#[case("a\nb", "a\n<br />\nb")]
#[case("a\n\nb", "a\n<br />\n<br />\nb")]
#[case("* a\n* b", "<ul><li>a</li><li>b</li></ul>")]
#[case("`x`", "<code>x</code>")]
#[case(
    "A|B\n---|---\n1|2",
    "<table><thead><tr><th>A</th><th>B</th></tr></thead><tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
)]
fn html_output(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(render_html(source), expected);
}

#[test]
fn kitchen_sink_html() {
    let source = "# ESP32-CAM\n\
                  **Vision** module with *onboard* flash and `PSRAM`.\n\
                  \n\
                  ## Pinout\n\
                  Pin|Function\n\
                  ---|---\n\
                  IO0|Boot select\n\
                  5V|Power\n\
                  \n\
                  * check voltage\n\
                  * avoid 5V on GPIO\n\
                  \n\
                  ---\n\
                  ```python\n\
                  import machine\n\
                  ```";
    insta::assert_snapshot!(render_html(source), @r#"
    <h1>ESP32-CAM</h1>
    <strong>Vision</strong> module with <em>onboard</em> flash and <code>PSRAM</code>.
    <br />
    <h2>Pinout</h2>
    <table><thead><tr><th>Pin</th><th>Function</th></tr></thead><tbody><tr><td>IO0</td><td>Boot select</td></tr><tr><td>5V</td><td>Power</td></tr></tbody></table>
    <ul><li>check voltage</li><li>avoid 5V on GPIO</li></ul>
    <hr />
    <pre><code class="language-python">import machine</code></pre>
    "#);
}
