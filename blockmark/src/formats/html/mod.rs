//! HTML fragments used as block attribute values.
//!
//! Block `content` attributes hold small HTML fragments. This module produces
//! them from inline Markdown nodes ([`inline`]) and turns them back into
//! Markdown text ([`fragment`]).
//!
//! # Library Choice
//!
//! Fragments are read back with `html5ever` + `markup5ever_rcdom`, the same
//! browser-grade parser used elsewhere in the Servo ecosystem, so entity
//! decoding and malformed markup behave like they would in an editor.
//!
//! # Tag Mapping
//!
//! | Inline node   | HTML                                   | Markdown on the way back |
//! |---------------|----------------------------------------|--------------------------|
//! | text          | literal, unescaped                     | literal                  |
//! | emph          | `<em>`                                 | `*…*` (also `<i>`)       |
//! | strong        | `<strong>`                             | `**…**` (also `<b>`)     |
//! | code          | `<code>` with escaped literal          | `` `…` ``                |
//! | link          | `<a href title?>`                      | `[text](href)`           |
//! | image         | `<img src title? alt?>`                | dropped                  |
//! | softbreak     | `<br>`                                 | newline                  |
//! | html_inline   | escaped literal                        | literal                  |

pub mod fragment;
pub mod inline;

pub use fragment::html_to_markdown;
pub use inline::render_inline;

/// Escape the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
