//! Markdown → blocks → Markdown
//!
//! For the subset both sides model (paragraphs, headings, single-level
//! bullet lists, code without backticks) the round trip reproduces the input
//! up to blank lines.

use super::fixture;
use blockmark::ast::Node;
use blockmark::formats::markdown::{parse_markdown, ParseOptions};
use blockmark::{blocks_to_markdown, markdown_to_blocks, render_inline};
use insta::assert_snapshot;
use proptest::prelude::*;

fn round_trip(md: &str) -> String {
    let blocks = markdown_to_blocks(md).expect("Should convert markdown");
    blocks_to_markdown(&blocks)
}

/// Collapse runs of blank lines and trim the ends.
fn normalize_blank_lines(s: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    for line in s.trim().lines() {
        if line.trim().is_empty() && out.last().map_or(true, |l| l.is_empty()) {
            continue;
        }
        out.push(if line.trim().is_empty() { "" } else { line });
    }
    out.join("\n")
}

#[test]
fn test_simple_subset_round_trips() {
    let md = "# Title\n\nSome *text* with **bold** and `code`.\n\n## Section\n\n- one\n- two\n- three\n\n```rust\nfn main() {\n    let x = 1;\n}\n```\n\nClosing paragraph.\n";
    assert_eq!(normalize_blank_lines(&round_trip(md)), normalize_blank_lines(md));
}

#[test]
fn test_code_with_angle_brackets_round_trips() {
    let md = "```rust\nlet v: Vec<String> = x;\nif a<b && c>d { s = \"'q'\"; }\n```\n";
    assert_eq!(round_trip(md), format!("{md}\n"));
}

#[test]
fn test_soft_breaks_round_trip() {
    let md = "first line\nsecond line\n";
    assert_eq!(round_trip(md), "first line\nsecond line\n\n");
}

#[test]
fn test_nested_lists_round_trip() {
    let md = "- a\n  - b\n  - c\n- d\n";
    assert_eq!(normalize_blank_lines(&round_trip(md)), normalize_blank_lines(md));
}

#[test]
fn test_links_round_trip() {
    let md = "See [the docs](https://example.com) now.\n";
    assert_eq!(round_trip(md), "See [the docs](https://example.com) now.\n\n");
}

#[test]
fn test_kitchensink_round_trip() {
    let md = round_trip(&fixture("kitchensink.md"));
    assert_snapshot!(md, @r###"
    # Kitchen *sink*

    A paragraph with **bold**, `code` and a [link](https://example.com).
    It wraps onto a second line.

    ![A cat](cat.png)

    - first
    - second
      1. nested one
      2. nested two
    - third

    > Quoted text
    > continues.

    ```rust
    fn main() {
        println!("hi");
    }
    ```

    <div class="note">raw html</div>


    ---

    5. five
    6. six
    "###);
}

#[test]
fn test_second_pass_is_stable() {
    let once = round_trip(&fixture("kitchensink.md"));
    let twice = round_trip(&once);
    assert_eq!(normalize_blank_lines(&once), normalize_blank_lines(&twice));
}

fn paragraph_inlines(md: &str) -> Vec<Node> {
    let doc = parse_markdown(md, &ParseOptions::default());
    doc.children
        .into_iter()
        .next()
        .map(|para| para.children)
        .unwrap_or_default()
}

proptest! {
    #[test]
    fn render_inline_is_pure(text in "[a-z *_`\\[\\]()<>&]{1,40}") {
        let nodes = paragraph_inlines(&text);
        prop_assert_eq!(render_inline(&nodes), render_inline(&nodes));
    }

    #[test]
    fn conversion_is_deterministic(text in "[a-z#*\\- \n]{1,60}") {
        let first = markdown_to_blocks(&text);
        let second = markdown_to_blocks(&text);
        prop_assert_eq!(&first, &second);
        if let Ok(blocks) = first {
            prop_assert_eq!(blocks_to_markdown(&blocks), blocks_to_markdown(&blocks));
        }
    }

    #[test]
    fn text_without_header_is_untouched(text in "[^-][a-z\\-\n]{0,40}") {
        prop_assert_eq!(blockmark::strip_front_matter(&text), text.as_str());
    }
}
