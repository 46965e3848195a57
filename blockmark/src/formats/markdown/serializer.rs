//! Markdown serialization (blocks → Markdown)
//!
//! Walks a block tree depth-first and writes Markdown the way an author would:
//! fenced code wide enough for its content, numbered bullets in the list's
//! declared style, nested lists aligned under their parent item's text.
//!
//! List bookkeeping lives in [`SerializerState`], created fresh for every
//! call:
//!
//! - `indent` holds one prefix per enclosing list item (the width of its
//!   bullet plus a space). List items write the concatenated prefix before
//!   their bullet; other nested blocks are rendered flush-left and shifted
//!   afterwards.
//! - `list_style` holds the style and next ordinal of every enclosing list.

use crate::blocks::{Block, BlockType};
use crate::common::numbering::BulletStyle;
use crate::formats::html::html_to_markdown;

/// Export knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Style for ordered lists that do not declare a `type`
    pub ordered_style: BulletStyle,
}

/// Style and next ordinal of an open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLevel {
    pub style: BulletStyle,
    pub count: u64,
}

/// Transient state threaded through one serialization.
#[derive(Debug, Clone, Default)]
pub struct SerializerState {
    pub indent: Vec<String>,
    pub list_style: Vec<ListLevel>,
}

/// Serialize blocks to Markdown with default options.
pub fn serialize_to_markdown(blocks: &[Block]) -> String {
    serialize_with_options(blocks, &SerializeOptions::default())
}

/// Serialize blocks to Markdown.
pub fn serialize_with_options(blocks: &[Block], options: &SerializeOptions) -> String {
    let mut serializer = MarkdownSerializer {
        options,
        state: SerializerState::default(),
    };
    serializer.blocks(blocks)
}

struct MarkdownSerializer<'o> {
    options: &'o SerializeOptions,
    state: SerializerState,
}

impl MarkdownSerializer<'_> {
    fn blocks(&mut self, blocks: &[Block]) -> String {
        blocks.iter().map(|block| self.block(block)).collect()
    }

    fn block(&mut self, block: &Block) -> String {
        match &block.name {
            BlockType::Root => self.blocks(&block.inner_blocks),
            BlockType::Quote => self.quote(block),
            BlockType::Code => code(block),
            BlockType::Image => format!(
                "![{}]({})\n\n",
                block.attr_str("alt").unwrap_or_default(),
                block.attr_str("url").unwrap_or_default()
            ),
            BlockType::Heading => {
                let level = block.attr_i64("level").unwrap_or(1).clamp(1, 6) as usize;
                format!("{} {}\n\n", "#".repeat(level), content(block))
            }
            BlockType::List => self.list(block),
            BlockType::ListItem => self.list_item(block),
            BlockType::Paragraph => format!("{}\n\n", content(block)),
            BlockType::Html => format!("{}\n\n", block.attr_str("content").unwrap_or_default()),
            BlockType::Separator => "\n---\n\n".to_string(),
            BlockType::Unknown(name) => {
                log::debug!("dropping block '{name}': no Markdown mapping");
                String::new()
            }
        }
    }

    /// Quotes are rendered outside any list indentation, then prefixed.
    fn quote(&mut self, block: &Block) -> String {
        let saved = std::mem::take(&mut self.state.indent);
        let inner = self.blocks(&block.inner_blocks);
        self.state.indent = saved;

        let quoted: Vec<String> = inner
            .trim_end_matches('\n')
            .split('\n')
            .map(|line| format!("> {line}").trim_end().to_string())
            .collect();
        format!("{}\n\n", quoted.join("\n"))
    }

    fn list(&mut self, block: &Block) -> String {
        let style = if block.attr_bool("ordered").unwrap_or(false) {
            block
                .attr_str("type")
                .and_then(|name| name.parse().ok())
                .unwrap_or(self.options.ordered_style)
        } else {
            BulletStyle::Dash
        };
        let count = block
            .attr_i64("start")
            .and_then(|start| u64::try_from(start).ok())
            .filter(|&start| start > 0)
            .unwrap_or(1);

        self.state.list_style.push(ListLevel { style, count });
        let mut list = self.blocks(&block.inner_blocks);
        self.state.list_style.pop();

        // Only the outermost list is closed with a blank line; a blank line
        // inside an item would make the parent list loose.
        if self.state.indent.is_empty() {
            list.push('\n');
        }
        list
    }

    fn list_item(&mut self, block: &Block) -> String {
        let Some(level) = self.state.list_style.last_mut() else {
            log::debug!("dropping list item outside of a list");
            return String::new();
        };
        let bullet = level.style.bullet(level.count);
        level.count = level.count.saturating_add(1);
        let continuation = " ".repeat(bullet.chars().count() + 1);

        let text = content(block);
        let mut lines = text.split('\n');
        let first_line = lines.next().unwrap_or_default();
        let rest_lines: Vec<&str> = lines.collect();

        let mut out = self.state.indent.concat();
        out.push_str(&bullet);
        if !first_line.is_empty() {
            out.push(' ');
            out.push_str(first_line);
        }
        out.push('\n');

        self.state.indent.push(continuation);
        if !rest_lines.is_empty() {
            out.push_str(&self.indented(&rest_lines.join("\n")));
            out.push('\n');
        }
        for inner in &block.inner_blocks {
            let rendered = self.block(inner);
            if inner.name == BlockType::List {
                // Items of the nested list already carry the full indent.
                out.push_str(&rendered);
            } else {
                out.push_str(&self.indented(&rendered));
            }
        }
        self.state.indent.pop();

        out
    }

    /// Prefix every non-empty line with the current indent. Blank lines stay
    /// blank so paragraph breaks inside an item are not padded.
    fn indented(&self, s: &str) -> String {
        let prefix = self.state.indent.concat();
        if prefix.is_empty() {
            return s.to_string();
        }
        s.split('\n')
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{prefix}{line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn content(block: &Block) -> String {
    html_to_markdown(block.attr_str("content").unwrap_or_default())
}

fn code(block: &Block) -> String {
    let code = content(block);
    let language = block.attr_str("language").unwrap_or_default();
    let fence = "`".repeat((longest_run(&code, '`') + 1).max(3));
    format!("{fence}{language}\n{code}\n{fence}\n\n")
}

/// Length of the longest run of consecutive `ch` in `s`.
fn longest_run(s: &str, ch: char) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in s.chars() {
        if c == ch {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
