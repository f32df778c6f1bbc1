//! Core types for the page tree.

use serde::{Deserialize, Serialize};

/// Fixed identifier and slug of the tree root.
pub const ROOT_SLUG: &str = "root";

/// One page in the tree, corresponding to either a markdown document or a
/// directory. Field order matters for output reviewability and is part of
/// the serialized shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Opaque random identifier, unique per node, stable only within a run.
    pub id: String,
    /// Display label derived from the slug.
    pub title: String,
    /// Normalized, URL-safe name, unique among siblings.
    pub slug: String,
    /// Ordered child nodes.
    pub children: Vec<Node>,
    /// Zero-based rank among siblings, contiguous in emission order.
    pub position: usize,
}

impl Node {
    /// Total nodes in this subtree, this node included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}
