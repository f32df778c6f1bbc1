//! Tree Views
//!
//! Presentation of a completed tree: compact JSON serialization for the
//! output file and an indented text listing for preview mode.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::error::TreeError;
use crate::types::Node;

/// Serialize the tree as a single-line compact JSON document.
///
/// serde_json emits no insignificant whitespace and leaves non-ASCII text
/// unescaped, which is exactly the output contract.
pub fn tree_to_json(tree: &Node) -> Result<String, TreeError> {
    Ok(serde_json::to_string(tree)?)
}

/// Serialize the tree and write it to `path` in one step.
pub fn write_tree(tree: &Node, path: &Path) -> Result<(), TreeError> {
    let json = tree_to_json(tree)?;
    fs::write(path, json).map_err(|source| TreeError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Render the tree as a human-readable listing, one `- Title (slug)` line
/// per node, indented two spaces per depth level.
pub fn render_tree(tree: &Node) -> String {
    let mut out = String::new();
    render_node(tree, 0, &mut out);
    out
}

fn render_node(node: &Node, depth: usize, out: &mut String) {
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "{:indent$}- {} ({})",
        "",
        node.title,
        node.slug,
        indent = depth * 2
    );
    for child in &node.children {
        render_node(child, depth + 1, out);
    }
}
