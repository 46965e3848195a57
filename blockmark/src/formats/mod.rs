//! Text formats on either side of the block tree.

pub mod html;
pub mod markdown;
