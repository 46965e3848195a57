//! HTML fragment → Markdown text.
//!
//! Only a handful of inline tags are understood: strong/b, em/i, code, a and
//! br. Everything else contributes its text content.

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Convert an HTML fragment to Markdown.
pub fn html_to_markdown(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    // An explicit <body> keeps leading whitespace and head-only tags in the fragment.
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(format!("<body>{html}"));

    let mut out = String::new();
    if let Some(body) = find_element(&dom.document, "body") {
        push_children(&body, &mut out);
    }
    out
}

fn find_element(node: &Handle, tag: &str) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &node.data {
        if &*name.local == tag {
            return Some(node.clone());
        }
    }
    node.children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, tag))
}

fn push_children(node: &Handle, out: &mut String) {
    for child in node.children.borrow().iter() {
        push_node(child, out);
    }
}

fn push_node(node: &Handle, out: &mut String) {
    match &node.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        NodeData::Element { name, attrs, .. } => match &*name.local {
            "strong" | "b" => surround(node, "**", out),
            "em" | "i" => surround(node, "*", out),
            "code" => surround(node, "`", out),
            "br" => out.push('\n'),
            "a" => {
                let href = attrs
                    .borrow()
                    .iter()
                    .find(|attr| &*attr.name.local == "href")
                    .map(|attr| attr.value.to_string())
                    .unwrap_or_default();
                out.push('[');
                push_children(node, out);
                out.push_str("](");
                out.push_str(&href);
                out.push(')');
            }
            _ => push_children(node, out),
        },
        _ => {}
    }
}

fn surround(node: &Handle, marker: &str, out: &mut String) {
    out.push_str(marker);
    push_children(node, out);
    out.push_str(marker);
}
