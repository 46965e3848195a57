//! Export tests (blocks → Markdown)
//!
//! Block trees are built in code or loaded from JSON fixtures, the way an
//! editor would hand them over.

use super::fixture;
use blockmark::{blocks_to_markdown, Block, BlockType};
use insta::assert_snapshot;

fn load_blocks(name: &str) -> Vec<Block> {
    serde_json::from_str(&fixture(name)).expect("fixture should deserialize")
}

fn ordered_list(style: &str, count: usize) -> Block {
    (1..=count).fold(
        Block::new(BlockType::List)
            .with_attr("ordered", true)
            .with_attr("type", style),
        |list, i| {
            list.with_child(
                Block::new(BlockType::ListItem).with_attr("content", format!("item {i}")),
            )
        },
    )
}

#[test]
fn test_upper_roman_bullets() {
    assert_eq!(
        blocks_to_markdown(&[ordered_list("upper-roman", 3)]),
        "I. item 1\nII. item 2\nIII. item 3\n\n"
    );
}

#[test]
fn test_lower_alpha_bullets() {
    assert_eq!(
        blocks_to_markdown(&[ordered_list("lower-alpha", 2)]),
        "a. item 1\nb. item 2\n\n"
    );
}

#[test]
fn test_unknown_list_type_falls_back_to_decimal() {
    assert_eq!(
        blocks_to_markdown(&[ordered_list("circle", 2)]),
        "1. item 1\n2. item 2\n\n"
    );
}

#[test]
fn test_huge_roman_start_uses_digits() {
    let list = ordered_list("upper-roman", 2).with_attr("start", 4_000_000_000_000_000_000i64);
    assert_eq!(
        blocks_to_markdown(&[list]),
        "4000000000000000000. item 1\n4000000000000000001. item 2\n\n"
    );
}

#[test]
fn test_roman_boundary() {
    let list = ordered_list("upper-roman", 2).with_attr("start", 3999i64);
    assert_eq!(
        blocks_to_markdown(&[list]),
        "MMMCMXCIX. item 1\n4000. item 2\n\n"
    );
}

#[test]
fn test_non_positive_start_counts_from_one() {
    for start in [0i64, -3] {
        let list = ordered_list("decimal", 2).with_attr("start", start);
        assert_eq!(blocks_to_markdown(&[list]), "1. item 1\n2. item 2\n\n");
    }
}

#[test]
fn test_wide_bullets_widen_continuation() {
    let list = Block::new(BlockType::List)
        .with_attr("ordered", true)
        .with_attr("start", 10i64)
        .with_child(
            Block::new(BlockType::ListItem)
                .with_attr("content", "ten<br>more")
                .with_child(
                    Block::new(BlockType::List)
                        .with_attr("ordered", false)
                        .with_child(Block::new(BlockType::ListItem).with_attr("content", "sub")),
                ),
        );
    assert_eq!(
        blocks_to_markdown(&[list]),
        "10. ten\n    more\n    - sub\n\n"
    );
}

#[test]
fn test_paragraph_inside_list_item_is_indented() {
    let list = Block::new(BlockType::List)
        .with_attr("ordered", false)
        .with_child(
            Block::new(BlockType::ListItem)
                .with_attr("content", "lead")
                .with_child(Block::new(BlockType::Paragraph).with_attr("content", "body")),
        );
    assert_eq!(blocks_to_markdown(&[list]), "- lead\n  body\n\n\n");
}

#[test]
fn test_code_fence_widths() {
    let with_two = Block::new(BlockType::Code).with_attr("content", "``x``");
    let with_three = Block::new(BlockType::Code).with_attr("content", "```");
    assert!(blocks_to_markdown(&[with_two]).starts_with("```\n"));
    assert!(blocks_to_markdown(&[with_three]).starts_with("````\n"));
}

#[test]
fn test_code_with_language_and_entities() {
    let code = Block::new(BlockType::Code)
        .with_attr("language", "html")
        .with_attr("content", "&lt;p&gt;hi&lt;/p&gt;");
    assert_eq!(blocks_to_markdown(&[code]), "```html\n<p>hi</p>\n```\n\n");
}

#[test]
fn test_image_drops_caption() {
    let image = Block::new(BlockType::Image)
        .with_attr("url", "cat.png")
        .with_attr("caption", "Kitty");
    assert_eq!(blocks_to_markdown(&[image]), "![](cat.png)\n\n");
}

#[test]
fn test_html_block_is_written_raw() {
    let html = Block::new(BlockType::Html).with_attr("content", "<div>\n<b>x</b>\n</div>");
    assert_eq!(blocks_to_markdown(&[html]), "<div>\n<b>x</b>\n</div>\n\n");
}

#[test]
fn test_root_renders_children() {
    let root = Block::new(BlockType::Root)
        .with_child(Block::new(BlockType::Paragraph).with_attr("content", "a"))
        .with_child(Block::new(BlockType::Separator));
    assert_eq!(blocks_to_markdown(&[root]), "a\n\n\n---\n\n");
}

#[test]
fn test_quote_with_list() {
    let quote = Block::new(BlockType::Quote).with_child(
        Block::new(BlockType::List)
            .with_attr("ordered", false)
            .with_child(Block::new(BlockType::ListItem).with_attr("content", "x"))
            .with_child(Block::new(BlockType::ListItem).with_attr("content", "y")),
    );
    assert_eq!(blocks_to_markdown(&[quote]), "> - x\n> - y\n\n");
}

#[test]
fn test_list_item_without_list_is_empty() {
    let stray = Block::new(BlockType::ListItem).with_attr("content", "orphan");
    assert_eq!(blocks_to_markdown(&[stray]), "");
}

#[test]
fn test_empty_input() {
    assert_eq!(blocks_to_markdown(&[]), "");
}

#[test]
fn test_release_notes_fixture() {
    let blocks = load_blocks("release-notes.blocks.json");
    assert_eq!(blocks[2].name, BlockType::Unknown("core/gallery".to_string()));

    let md = blocks_to_markdown(&blocks);
    assert_snapshot!(md, @r###"
    ## Release *notes*

    i alpha
    ii beta
       continued
       - `x`

    ````
    let s = `a`;
    ```
    ````

    See [the **docs**](https://x.org).
    "###);
}
