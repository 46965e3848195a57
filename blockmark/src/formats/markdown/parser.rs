//! Markdown parsing (Markdown → owned AST)
//!
//! Pipeline: Markdown string → Comrak arena AST → [`crate::ast::Node`] tree.
//! The arena only lives for the duration of one call.

use crate::ast::{ListType, Node, NodeKind};
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

/// Parser knobs forwarded to comrak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Convert straight quotes and dashes to typographic ones
    pub smart_punctuation: bool,
}

/// Parse Markdown into a document node.
pub fn parse_markdown(source: &str, options: &ParseOptions) -> Node {
    let arena = Arena::new();
    let comrak_options = comrak_options(options);
    let root = parse_document(&arena, source, &comrak_options);
    convert_node(root)
}

/// Plain CommonMark: no extensions, so tables and footnotes stay out of the tree.
fn comrak_options(options: &ParseOptions) -> ComrakOptions<'static> {
    let mut comrak_options = ComrakOptions::default();
    comrak_options.parse.smart = options.smart_punctuation;
    comrak_options
}

fn convert_node<'a>(node: &'a AstNode<'a>) -> Node {
    let kind = match &node.data.borrow().value {
        NodeValue::Document => NodeKind::Document,
        NodeValue::Paragraph => NodeKind::Paragraph,
        NodeValue::Heading(heading) => NodeKind::Heading {
            level: heading.level,
        },
        NodeValue::List(list) => NodeKind::List {
            list_type: match list.list_type {
                comrak::nodes::ListType::Ordered => ListType::Ordered,
                comrak::nodes::ListType::Bullet => ListType::Bullet,
            },
            start: list.start,
        },
        NodeValue::Item(_) => NodeKind::Item,
        NodeValue::BlockQuote => NodeKind::BlockQuote,
        NodeValue::CodeBlock(code_block) => NodeKind::CodeBlock {
            info: code_block.info.clone(),
            literal: code_block.literal.clone(),
        },
        NodeValue::HtmlBlock(html) => NodeKind::HtmlBlock {
            literal: html.literal.trim_end_matches('\n').to_string(),
        },
        NodeValue::ThematicBreak => NodeKind::ThematicBreak,
        NodeValue::Image(link) => NodeKind::Image {
            destination: link.url.clone(),
            title: non_empty(&link.title),
            description: non_empty(&collect_text_from_children(node)),
        },
        NodeValue::Link(link) => NodeKind::Link {
            destination: link.url.clone(),
            title: non_empty(&link.title),
        },
        NodeValue::Emph => NodeKind::Emph,
        NodeValue::Strong => NodeKind::Strong,
        NodeValue::Text(text) => NodeKind::Text {
            literal: text.clone(),
        },
        NodeValue::Code(code) => NodeKind::Code {
            literal: code.literal.clone(),
        },
        NodeValue::SoftBreak => NodeKind::SoftBreak,
        NodeValue::LineBreak => NodeKind::LineBreak,
        NodeValue::HtmlInline(literal) => NodeKind::HtmlInline {
            literal: literal.clone(),
        },
        other => NodeKind::Other(other_name(other)),
    };

    let children = node.children().map(convert_node).collect();
    Node::with_children(kind, children)
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn collect_text_from_children<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for child in node.children() {
        collect_text_content(child, &mut text);
    }
    text
}

fn collect_text_content<'a>(node: &'a AstNode<'a>, output: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => output.push_str(text),
        NodeValue::Code(code) => output.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => output.push(' '),
        _ => {
            for child in node.children() {
                collect_text_content(child, output);
            }
        }
    }
}

/// Diagnostic name for node values without a mapping
fn other_name(value: &NodeValue) -> String {
    let debug = format!("{value:?}");
    let name = debug
        .split(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or_default();
    name.to_lowercase()
}
