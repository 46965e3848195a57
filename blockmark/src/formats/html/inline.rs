//! Inline nodes → HTML fragment.

use super::escape_html;
use crate::ast::{Node, NodeKind};

/// Render a run of sibling inline nodes to an HTML fragment.
///
/// Pure: the same nodes always render to the same string.
pub fn render_inline(nodes: &[Node]) -> String {
    let mut html = String::new();
    for node in nodes {
        render_node(node, &mut html);
    }
    html
}

fn render_node(node: &Node, html: &mut String) {
    match &node.kind {
        NodeKind::Text { literal } => html.push_str(literal),
        NodeKind::Code { literal } => {
            if !literal.is_empty() {
                html.push_str("<code>");
                html.push_str(&escape_html(literal));
                html.push_str("</code>");
            }
        }
        NodeKind::Emph => wrap(node, "em", &[], html),
        NodeKind::Strong => wrap(node, "strong", &[], html),
        NodeKind::Link { destination, title } => wrap(
            node,
            "a",
            &[("href", Some(destination)), ("title", title.as_ref())],
            html,
        ),
        NodeKind::Image {
            destination,
            title,
            description,
        } => {
            html.push_str("<img");
            push_attrs(
                &[
                    ("src", Some(destination)),
                    ("title", title.as_ref()),
                    ("alt", description.as_ref()),
                ],
                html,
            );
            html.push('>');
        }
        NodeKind::SoftBreak | NodeKind::LineBreak => html.push_str("<br>"),
        NodeKind::HtmlInline { literal } => html.push_str(&escape_html(literal)),
        _ => log::debug!("no inline rendering for '{}' node", node.kind_name()),
    }
}

fn wrap(node: &Node, tag: &str, attrs: &[(&str, Option<&String>)], html: &mut String) {
    html.push('<');
    html.push_str(tag);
    push_attrs(attrs, html);
    html.push('>');
    for child in &node.children {
        render_node(child, html);
    }
    html.push_str("</");
    html.push_str(tag);
    html.push('>');
}

/// Attributes without a value are left out entirely.
fn push_attrs(attrs: &[(&str, Option<&String>)], html: &mut String) {
    for (name, value) in attrs {
        if let Some(value) = value {
            html.push(' ');
            html.push_str(name);
            html.push_str("=\"");
            html.push_str(&escape_html(value));
            html.push('"');
        }
    }
}
