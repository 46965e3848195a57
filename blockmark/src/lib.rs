//! Conversion between Markdown and editor block trees
//!
//!     This crate turns free-form Markdown into a tree of content blocks (a type name, a flat
//!     attribute map and ordered children) and turns such a tree back into Markdown.
//!
//!     Blocks are what a block editor stores; the final markup for each block type is written
//!     by an external block registry. This crate only builds and reads the in-memory tree, so
//!     attribute names must match what that registry expects.
//!
//!     This is a pure lib: no I/O, no global state. Every call owns its state, so converters
//!     can run concurrently on independent inputs.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── ast.rs                  # Owned Markdown syntax tree
//!     ├── blocks.rs               # Block tree
//!     ├── common
//!     │   ├── to_blocks.rs        # AST → blocks
//!     │   └── numbering.rs        # List bullet labels
//!     ├── formats
//!     │   ├── markdown            # comrak parsing, front matter, serialization
//!     │   └── html                # Inline HTML rendering and HTML → Markdown
//!     └── lib.rs
//!
//! Pipelines
//!
//!     Import: text → strip front matter → comrak → ast::Node → blocks
//!     Export: blocks → Markdown (block content goes through the HTML fragment reader)
//!
//!     The two directions are not inverses: captions, extra item paragraphs and layout are lost.
//!     For plain paragraphs, headings, simple lists and code blocks without backticks the round
//!     trip reproduces the input up to blank lines.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── fixtures
//!     └── markdown
//!         ├── import.rs
//!         ├── export.rs
//!         ├── frontmatter.rs
//!         └── roundtrip.rs

pub mod ast;
pub mod blocks;
pub mod common;
pub mod error;
pub mod formats;

pub use blocks::{AttrValue, Attributes, Block, BlockType};
pub use common::numbering::BulletStyle;
pub use error::ConvertError;
pub use formats::html::{escape_html, html_to_markdown, render_inline};
pub use formats::markdown::{split_front_matter, strip_front_matter};

use formats::markdown::{parse_markdown, serialize_with_options, ParseOptions, SerializeOptions};

/// Options for both conversion directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Remove a leading `---` header before parsing
    pub strip_front_matter: bool,
    /// Typographic quotes and dashes while parsing
    pub smart_punctuation: bool,
    /// Bullet style for ordered lists without a declared `type`
    pub ordered_style: BulletStyle,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            strip_front_matter: true,
            smart_punctuation: false,
            ordered_style: BulletStyle::Decimal,
        }
    }
}

/// Markdown ⇄ blocks converter carrying its options.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Converter { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert Markdown text into top-level blocks.
    pub fn to_blocks(&self, markdown: &str) -> Result<Vec<Block>, ConvertError> {
        let source = if self.options.strip_front_matter {
            strip_front_matter(markdown)
        } else {
            markdown
        };
        let parse_options = ParseOptions {
            smart_punctuation: self.options.smart_punctuation,
        };
        let document = parse_markdown(source, &parse_options);
        common::to_blocks::ast_to_blocks(&document)
    }

    /// Convert blocks back into Markdown text.
    pub fn to_markdown(&self, blocks: &[Block]) -> String {
        let serialize_options = SerializeOptions {
            ordered_style: self.options.ordered_style,
        };
        serialize_with_options(blocks, &serialize_options)
    }
}

/// Convert Markdown into blocks with default options.
pub fn markdown_to_blocks(markdown: &str) -> Result<Vec<Block>, ConvertError> {
    Converter::default().to_blocks(markdown)
}

/// Convert blocks into Markdown with default options.
pub fn blocks_to_markdown(blocks: &[Block]) -> String {
    Converter::default().to_markdown(blocks)
}
