//! Markdown format implementation
//!
//! This module implements bidirectional conversion between CommonMark
//! Markdown and block trees.
//!
//! # Library Choice
//!
//! We use the `comrak` crate for parsing. Its arena AST is copied into the
//! owned tree in [`crate::ast`] so the block mapping never deals with arena
//! lifetimes. Serialization is hand-written: the output has to reproduce list
//! numbering styles and fence widths that a generic Markdown writer does not
//! know about.
//!
//! # Element Mapping Table
//!
//! | Markdown              | Block            | Import Notes                          | Export Notes                        |
//! |-----------------------|------------------|---------------------------------------|-------------------------------------|
//! | Paragraph             | core/paragraph   | Inline content → HTML `content`       | `content` → Markdown inlines        |
//! | Image-only paragraph  | core/image       | `url`, `caption`, `alt`               | `![alt](url)`, caption is lost      |
//! | Heading               | core/heading     | `level`, `content`                    | ATX heading                         |
//! | List                  | core/list        | `ordered`, `start` when not 1         | Bullets from `type` (roman, alpha)  |
//! | List item             | core/list-item   | First paragraph + nested lists only   | Continuation lines aligned to text  |
//! | Block quote           | core/quote       | Children converted recursively        | Every line prefixed with `> `       |
//! | Code block            | core/code        | `language`, newlines → `<br>`         | Fence longer than any backtick run  |
//! | HTML block            | core/html        | Raw literal                           | Raw literal                         |
//! | Thematic break        | core/separator   | No attributes                         | `---`                               |
//!
//! # Lossy Conversions
//!
//! - Image captions are not written back
//! - List items keep only their first paragraph and nested lists
//! - Tables, footnotes and other extensions are not parsed
//! - Blank-line layout is normalized

pub mod frontmatter;
pub mod parser;
pub mod serializer;

pub use frontmatter::{split_front_matter, strip_front_matter};
pub use parser::{parse_markdown, ParseOptions};
pub use serializer::{serialize_to_markdown, serialize_with_options, SerializeOptions};
