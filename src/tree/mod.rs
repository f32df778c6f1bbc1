//! Page tree construction.
//!
//! The builder scans a root directory depth-first, normalizes entry names,
//! resolves file/directory naming conflicts, synthesizes missing index
//! documents, and emits an ordered tree of nodes with stable positions.

pub mod builder;

pub use builder::{Mode, TreeBuilder};
