//! Shared helpers

pub mod serde_helpers;
pub mod text;

pub use text::{fix_empty_and_trim, relativize, simplify_path, split_patterns};
