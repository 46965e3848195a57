//! Format-agnostic conversion logic.
//!
//! `to_blocks` maps a parsed Markdown tree onto blocks; `numbering` computes
//! list bullet labels for the way back.

pub mod numbering;
pub mod to_blocks;
