//! Name normalization and title derivation.
//!
//! Pure functions implementing the naming convention: file and folder names
//! are lowercase with hyphens as the word separator, and display titles are
//! derived from slugs by word capitalization.

/// Reserved filename for a directory's own page content. Never renamed,
/// never treated as a regular page.
pub const INDEX_FILE: &str = "index.md";

/// Extension identifying markdown documents.
pub const MD_EXT: &str = ".md";

/// Normalize a file or folder name: lowercase, underscores to hyphens.
/// Idempotent; already-normalized names come back unchanged.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace('_', "-")
}

/// Derive a display title from a slug.
///
/// Hyphens and underscores become spaces, a space is inserted at each
/// lowercase-to-uppercase boundary (splitting camelCase names), and the
/// first letter of each resulting word is capitalized with the rest
/// lowercased.
pub fn slug_to_title(slug: &str) -> String {
    let spaced = slug.replace(['-', '_'], " ");

    let mut split = String::with_capacity(spaced.len() + 4);
    let mut prev_lower = false;
    for ch in spaced.chars() {
        if prev_lower && ch.is_ascii_uppercase() {
            split.push(' ');
        }
        prev_lower = ch.is_ascii_lowercase();
        split.push(ch);
    }

    split
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
