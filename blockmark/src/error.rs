//! Error types for conversion operations

use thiserror::Error;

/// Errors that can occur while converting between Markdown and blocks
///
/// Unrecognized node kinds and block names are deliberately not errors: they
/// are logged and skipped so newer grammars degrade instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The parsed document has no content to convert
    #[error("Document is empty: nothing to convert")]
    EmptyDocument,
}
