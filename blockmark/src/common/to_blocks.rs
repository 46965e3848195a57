//! Markdown AST → block tree.
//!
//! Block-level nodes map one-to-one onto blocks, except:
//!
//! - a paragraph holding nothing but an image becomes a `core/image` block
//! - headings, paragraphs and list items capture their inline children as an
//!   HTML `content` attribute instead of recursing into them
//! - list items only look at their own paragraph and nested lists
//! - unknown kinds produce nothing and their subtree is skipped

use crate::ast::{ListType, Node, NodeKind};
use crate::blocks::{Block, BlockType};
use crate::error::ConvertError;
use crate::formats::html::{escape_html, render_inline};

/// Convert a parsed document into its top-level blocks.
pub fn ast_to_blocks(document: &Node) -> Result<Vec<Block>, ConvertError> {
    if document.children.is_empty() {
        return Err(ConvertError::EmptyDocument);
    }

    let mut root = Block::new(BlockType::Root);
    append_blocks(&mut root, &document.children);
    Ok(root.inner_blocks)
}

fn append_blocks(parent: &mut Block, nodes: &[Node]) {
    for node in nodes {
        if let NodeKind::Document = node.kind {
            // The document itself never becomes a block.
            append_blocks(parent, &node.children);
            continue;
        }
        if let Some(block) = node_to_block(node) {
            parent.inner_blocks.push(block);
        }
    }
}

fn node_to_block(node: &Node) -> Option<Block> {
    let block = match &node.kind {
        NodeKind::Paragraph => match sole_image(node) {
            Some(image) => image_block(image),
            None => Block::new(BlockType::Paragraph)
                .with_attr("content", render_inline(&node.children)),
        },

        NodeKind::Heading { level } => Block::new(BlockType::Heading)
            .with_attr("level", *level)
            .with_attr("content", render_inline(&node.children)),

        NodeKind::List { list_type, start } => {
            let mut block = Block::new(BlockType::List)
                .with_attr("ordered", *list_type == ListType::Ordered);
            if *start != 1 && *list_type == ListType::Ordered {
                block.attributes.insert("start", *start);
            }
            append_blocks(&mut block, &node.children);
            block
        }

        NodeKind::Item => list_item_block(node),

        NodeKind::BlockQuote => {
            let mut block = Block::new(BlockType::Quote);
            append_blocks(&mut block, &node.children);
            block
        }

        NodeKind::CodeBlock { info, literal } => {
            let mut block = Block::new(BlockType::Code);
            if let Some(language) = info.split_whitespace().next() {
                block.attributes.insert("language", language);
            }
            block.attributes.insert(
                "content",
                escape_html(literal.trim()).replace('\n', "<br>"),
            );
            block
        }

        NodeKind::HtmlBlock { literal } => {
            Block::new(BlockType::Html).with_attr("content", literal.as_str())
        }

        NodeKind::ThematicBreak => Block::new(BlockType::Separator),

        _ => {
            log::debug!("skipping '{}' node: no block mapping", node.kind_name());
            return None;
        }
    };

    Some(block)
}

/// The image child of a paragraph that contains nothing else.
fn sole_image(paragraph: &Node) -> Option<&Node> {
    match paragraph.children.as_slice() {
        [only] if matches!(only.kind, NodeKind::Image { .. }) => Some(only),
        _ => None,
    }
}

fn image_block(image: &Node) -> Block {
    let NodeKind::Image {
        destination,
        title,
        description,
    } = &image.kind
    else {
        return Block::new(BlockType::Image);
    };

    let caption = match title {
        Some(title) => title.clone(),
        None => render_inline(&image.children),
    };

    let mut block = Block::new(BlockType::Image)
        .with_attr("url", destination.as_str())
        .with_attr("caption", caption);
    if let Some(alt) = description {
        block.attributes.insert("alt", alt.as_str());
    }
    block
}

/// Items take the inline content of their first paragraph and convert any
/// nested lists. Other children (code blocks, quotes, ...) are dropped.
fn list_item_block(item: &Node) -> Block {
    let mut block = Block::new(BlockType::ListItem);
    let mut content = None;

    for child in &item.children {
        match child.kind {
            NodeKind::Paragraph if content.is_none() => {
                content = Some(render_inline(&child.children));
            }
            NodeKind::List { .. } => {
                if let Some(list) = node_to_block(child) {
                    block.inner_blocks.push(list);
                }
            }
            _ => {}
        }
    }

    block
        .attributes
        .insert("content", content.unwrap_or_default());
    block
}
