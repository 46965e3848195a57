//! Owned Markdown syntax tree.
//!
//! The parser's arena tree is copied once into these values. Every node owns
//! its children in document order, so "first child" is `children.first()` and
//! "next sibling" is the following element of the parent's `children`.

/// Kind of list as declared in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListType {
    Bullet,
    Ordered,
}

/// A node of the Markdown syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

/// Node kinds with their kind-specific fields.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Document,
    Paragraph,
    Heading {
        level: u8,
    },
    List {
        list_type: ListType,
        start: usize,
    },
    Item,
    BlockQuote,
    CodeBlock {
        info: String,
        literal: String,
    },
    HtmlBlock {
        literal: String,
    },
    ThematicBreak,
    Image {
        destination: String,
        title: Option<String>,
        /// Plain text of the alt-text children, absent when empty
        description: Option<String>,
    },
    Link {
        destination: String,
        title: Option<String>,
    },
    Emph,
    Strong,
    Text {
        literal: String,
    },
    Code {
        literal: String,
    },
    SoftBreak,
    LineBreak,
    HtmlInline {
        literal: String,
    },
    /// Anything the converters have no mapping for (tables, footnotes, ...)
    Other(String),
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: NodeKind, children: Vec<Node>) -> Self {
        Node { kind, children }
    }

    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    /// Short lowercase name of the node kind, used in diagnostics
    pub fn kind_name(&self) -> &str {
        match &self.kind {
            NodeKind::Document => "document",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Heading { .. } => "heading",
            NodeKind::List { .. } => "list",
            NodeKind::Item => "item",
            NodeKind::BlockQuote => "block_quote",
            NodeKind::CodeBlock { .. } => "code_block",
            NodeKind::HtmlBlock { .. } => "html_block",
            NodeKind::ThematicBreak => "thematic_break",
            NodeKind::Image { .. } => "image",
            NodeKind::Link { .. } => "link",
            NodeKind::Emph => "emph",
            NodeKind::Strong => "strong",
            NodeKind::Text { .. } => "text",
            NodeKind::Code { .. } => "code",
            NodeKind::SoftBreak => "softbreak",
            NodeKind::LineBreak => "linebreak",
            NodeKind::HtmlInline { .. } => "html_inline",
            NodeKind::Other(name) => name,
        }
    }

    /// Concatenated literal text of all descendant text-like nodes
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(node: &Node, out: &mut String) {
    match &node.kind {
        NodeKind::Text { literal } | NodeKind::Code { literal } => out.push_str(literal),
        NodeKind::SoftBreak | NodeKind::LineBreak => out.push(' '),
        _ => {
            for child in &node.children {
                collect_text(child, out);
            }
        }
    }
}
