//! Front-matter detection.
//!
//! Jekyll-style headers: an opening `---` line at the very start of the text,
//! closed by a `---` or `...` line. The header is removed before parsing and
//! its content is never interpreted.

use once_cell::sync::Lazy;
use regex::Regex;

static FRONT_MATTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A---[ \t\r\f\v]*\n(.*?)\n?(?:---|\.\.\.)[ \t\r\f\v]*\n")
        .expect("front matter pattern is valid")
});

/// Split `input` into its front-matter body (if any) and the remaining text.
pub fn split_front_matter(input: &str) -> (Option<&str>, &str) {
    match FRONT_MATTER.captures(input) {
        Some(caps) => {
            let whole = caps.get(0).map_or(0, |m| m.end());
            let body = caps.get(1).map(|m| m.as_str());
            (body, &input[whole..])
        }
        None => (None, input),
    }
}

/// Remove a leading front-matter header, returning the text unchanged when
/// there is none.
pub fn strip_front_matter(input: &str) -> &str {
    split_front_matter(input).1
}
