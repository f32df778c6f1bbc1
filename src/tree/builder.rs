//! Recursive directory processor and root assembler.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::TreeError;
use crate::events::{Event, EventSink};
use crate::id::IdGenerator;
use crate::naming::{normalize_name, slug_to_title, INDEX_FILE, MD_EXT};
use crate::types::{Node, ROOT_SLUG};

/// Heading written into a synthesized root index document.
const ROOT_INDEX_HEADING: &str = "# Home\n\n";

/// Whether a run mutates the filesystem or only reports intended actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Rename entries, create missing index documents.
    Apply,
    /// Report what would be done; touch nothing.
    Preview,
}

impl Mode {
    pub fn is_preview(self) -> bool {
        self == Mode::Preview
    }
}

/// A directory entry after the normalization pass.
///
/// `effective` is the name the entry is processed under (normalized, or the
/// original when a rename failed). `actual` is the on-disk name, which
/// differs from `effective` in preview mode where no rename happens. Slugs,
/// partitioning, and ordering use `effective`; recursion and index checks
/// use `actual`.
struct Entry {
    effective: String,
    actual: String,
    is_dir: bool,
}

impl Entry {
    /// An entry processed under its on-disk name (already normalized, exempt
    /// from renaming, or left alone after a rename failure).
    fn unchanged(name: String, is_dir: bool) -> Self {
        Self {
            effective: name.clone(),
            actual: name,
            is_dir,
        }
    }
}

/// Builds the page tree for a directory of markdown documents.
///
/// Identifier generation and diagnostics are injected capabilities, so runs
/// can be made deterministic and silent in tests.
pub struct TreeBuilder<I, S> {
    mode: Mode,
    ids: I,
    sink: S,
}

impl<I: IdGenerator, S: EventSink> TreeBuilder<I, S> {
    pub fn new(mode: Mode, ids: I, sink: S) -> Self {
        Self { mode, ids, sink }
    }

    /// Scan the root directory and assemble the full tree under the fixed
    /// root node.
    ///
    /// Fails only when the root directory itself is missing; every per-entry
    /// problem during the scan is reported as an event and skipped.
    pub fn build(&mut self, root: &Path) -> Result<Node, TreeError> {
        if !root.exists() {
            return Err(TreeError::RootNotFound(root.to_path_buf()));
        }

        info!(root = %root.display(), preview = self.mode.is_preview(), "building page tree");

        self.ensure_root_index(root);
        let children = self.process_directory(root);

        Ok(Node {
            id: ROOT_SLUG.to_string(),
            title: ROOT_SLUG.to_string(),
            slug: ROOT_SLUG.to_string(),
            children,
            position: 0,
        })
    }

    /// The root's index document gets a fixed default heading rather than one
    /// derived from the directory name.
    fn ensure_root_index(&mut self, root: &Path) {
        let index_path = root.join(INDEX_FILE);
        if index_path.exists() {
            return;
        }
        if self.mode.is_preview() {
            self.sink.emit(Event::WouldCreateRootIndex);
            return;
        }
        match fs::write(&index_path, ROOT_INDEX_HEADING) {
            Ok(()) => self.sink.emit(Event::RootIndexCreated),
            // Non-fatal: the tree is still built, the root just lacks content.
            Err(err) => self.sink.emit(Event::RootIndexCreateFailed {
                error: err.to_string(),
            }),
        }
    }

    /// Produce the ordered child nodes for one directory, with all
    /// descendants fully resolved.
    ///
    /// Position assignment follows processing order: all document nodes
    /// first, then all directory nodes, each category in lexicographic order
    /// of effective name. Downstream consumers rely on this order; it is a
    /// contract, not an artifact.
    fn process_directory(&mut self, dir: &Path) -> Vec<Node> {
        let listed = match self.list_entries(dir) {
            Some(listed) => listed,
            None => return Vec::new(),
        };
        debug!(path = %dir.display(), entries = listed.len(), "scanning directory");

        let mut docs: Vec<Entry> = Vec::new();
        let mut dirs: Vec<Entry> = Vec::new();
        // By the time a directory's rename pass runs in apply mode, its
        // index document exists (pre-existing, or synthesized before the
        // recursion); a rename targeting it always collides. Pre-claim the
        // name so preview predicts the same.
        let mut claimed: HashSet<String> = HashSet::from([INDEX_FILE.to_string()]);
        for (name, is_dir) in listed {
            let entry = self.normalize_entry(dir, name, is_dir, &mut claimed);
            if entry.is_dir {
                dirs.push(entry);
            } else if entry.effective.ends_with(MD_EXT) && entry.effective != INDEX_FILE {
                docs.push(entry);
            }
        }
        docs.sort_by(|a, b| a.effective.cmp(&b.effective));
        dirs.sort_by(|a, b| a.effective.cmp(&b.effective));

        let dir_names: HashSet<&str> = dirs.iter().map(|d| d.effective.as_str()).collect();

        let mut children = Vec::new();
        let mut position = 0;

        for doc in &docs {
            let stem = doc
                .effective
                .strip_suffix(MD_EXT)
                .unwrap_or(&doc.effective);
            // A same-named directory supersedes the document: its index
            // document represents this page instead. Skipped, not deleted.
            if dir_names.contains(stem) {
                self.sink.emit(Event::Superseded {
                    file: doc.effective.clone(),
                    dir: stem.to_string(),
                });
                continue;
            }
            children.push(Node {
                id: self.ids.next_id(),
                title: slug_to_title(stem),
                slug: stem.to_string(),
                children: Vec::new(),
                position,
            });
            position += 1;
        }

        for sub in &dirs {
            let sub_path = dir.join(&sub.actual);
            if !self.ensure_index(&sub_path, &sub.effective) {
                continue;
            }
            let grandchildren = self.process_directory(&sub_path);
            children.push(Node {
                id: self.ids.next_id(),
                title: slug_to_title(&sub.effective),
                slug: sub.effective.clone(),
                children: grandchildren,
                position,
            });
            position += 1;
        }

        children
    }

    /// List immediate entries of `dir` in lexicographic name order.
    /// `None` means the directory could not be read; it contributes an empty
    /// child set and the run continues.
    fn list_entries(&mut self, dir: &Path) -> Option<Vec<(String, bool)>> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            match entry {
                Ok(entry) => {
                    let name = entry.file_name().to_string_lossy().into_owned();
                    entries.push((name, entry.file_type().is_dir()));
                }
                Err(err) => {
                    self.sink.emit(Event::ListFailed {
                        dir: dir.to_path_buf(),
                        error: err.to_string(),
                    });
                    return None;
                }
            }
        }
        Some(entries)
    }

    /// Normalize one entry's name, renaming it on disk in apply mode.
    ///
    /// The index document is exempt in every mode. For markdown files only
    /// the stem is normalized; any other name (directories included) is
    /// normalized whole. A rename whose target already exists counts as a
    /// failure, and a failed rename leaves the entry processed under its
    /// original, un-normalized name.
    ///
    /// `claimed` holds the effective names already taken among the siblings
    /// processed so far. Apply mode sees earlier renames on disk, but
    /// preview mode must consult the set to predict them; either way a
    /// collision resolves identically in both modes.
    fn normalize_entry(
        &mut self,
        dir: &Path,
        name: String,
        is_dir: bool,
        claimed: &mut HashSet<String>,
    ) -> Entry {
        let entry = self.normalize_entry_inner(dir, name, is_dir, claimed);
        claimed.insert(entry.effective.clone());
        entry
    }

    fn normalize_entry_inner(
        &mut self,
        dir: &Path,
        name: String,
        is_dir: bool,
        claimed: &HashSet<String>,
    ) -> Entry {
        if name == INDEX_FILE {
            return Entry::unchanged(name, is_dir);
        }

        let target = match name.strip_suffix(MD_EXT) {
            Some(stem) if !is_dir => format!("{}{}", normalize_name(stem), MD_EXT),
            _ => normalize_name(&name),
        };
        if target == name {
            return Entry::unchanged(name, is_dir);
        }

        if self.mode.is_preview() {
            // A taken target (on disk, or claimed by an earlier sibling's
            // pending rename) would fail in apply mode; predict the same
            // outcome so the previewed tree matches.
            if dir.join(&target).exists() || claimed.contains(&target) {
                self.sink.emit(Event::RenameFailed {
                    path: dir.join(&name),
                    error: "target already exists".to_string(),
                });
                return Entry::unchanged(name, is_dir);
            }
            self.sink.emit(Event::WouldRename {
                from: name.clone(),
                to: target.clone(),
            });
            return Entry {
                effective: target,
                actual: name,
                is_dir,
            };
        }

        let from = dir.join(&name);
        let to = dir.join(&target);
        // fs::rename would silently replace an existing target on Unix;
        // a collision is a reportable failure instead.
        let outcome = if to.exists() {
            Err("target already exists".to_string())
        } else {
            fs::rename(&from, &to).map_err(|err| err.to_string())
        };

        match outcome {
            Ok(()) => {
                self.sink.emit(Event::Renamed {
                    from: name,
                    to: target.clone(),
                });
                Entry {
                    effective: target.clone(),
                    actual: target,
                    is_dir,
                }
            }
            Err(error) => {
                self.sink.emit(Event::RenameFailed { path: from, error });
                Entry::unchanged(name, is_dir)
            }
        }
    }

    /// Make sure a subdirectory has an index document, synthesizing one with
    /// a heading derived from the directory name when missing.
    ///
    /// Returns false when creation failed; the directory is then skipped
    /// entirely and contributes no node.
    fn ensure_index(&mut self, dir: &Path, slug: &str) -> bool {
        let index_path = dir.join(INDEX_FILE);
        if index_path.exists() {
            return true;
        }
        if self.mode.is_preview() {
            self.sink.emit(Event::WouldCreateIndex {
                dir: dir.to_path_buf(),
            });
            return true;
        }
        match fs::write(&index_path, format!("# {}\n\n", slug_to_title(slug))) {
            Ok(()) => {
                self.sink.emit(Event::IndexCreated {
                    dir: dir.to_path_buf(),
                });
                true
            }
            Err(err) => {
                self.sink.emit(Event::IndexCreateFailed {
                    dir: dir.to_path_buf(),
                    error: err.to_string(),
                });
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CollectedEvents;
    use crate::id::SequenceIds;
    use tempfile::TempDir;

    fn build(root: &Path, mode: Mode) -> (Node, CollectedEvents) {
        let mut events = CollectedEvents::default();
        let tree = TreeBuilder::new(mode, SequenceIds::default(), &mut events)
            .build(root)
            .unwrap();
        (tree, events)
    }

    #[test]
    fn missing_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("absent");
        let mut builder =
            TreeBuilder::new(Mode::Apply, SequenceIds::default(), CollectedEvents::default());
        let err = builder.build(&missing).unwrap_err();
        assert!(matches!(err, TreeError::RootNotFound(path) if path == missing));
    }

    #[test]
    fn documents_precede_directories_in_position_order() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("z.md"), "# Z").unwrap();
        std::fs::write(temp.path().join("a.md"), "# A").unwrap();
        std::fs::create_dir(temp.path().join("b")).unwrap();
        std::fs::create_dir(temp.path().join("c")).unwrap();

        let (tree, _) = build(temp.path(), Mode::Apply);
        let slugs: Vec<&str> = tree.children.iter().map(|n| n.slug.as_str()).collect();
        assert_eq!(slugs, ["a", "z", "b", "c"]);
        let positions: Vec<usize> = tree.children.iter().map(|n| n.position).collect();
        assert_eq!(positions, [0, 1, 2, 3]);
    }

    #[test]
    fn rename_collision_keeps_original_name() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("Page.md"), "# P").unwrap();
        std::fs::write(temp.path().join("page.md"), "# p").unwrap();

        let (tree, events) = build(temp.path(), Mode::Apply);
        let slugs: Vec<&str> = tree.children.iter().map(|n| n.slug.as_str()).collect();
        assert_eq!(slugs, ["Page", "page"]);
        assert!(temp.path().join("Page.md").exists());
        assert!(events
            .events()
            .iter()
            .any(|e| matches!(e, Event::RenameFailed { .. })));
    }

    #[test]
    fn preview_predicts_rename_collision_with_existing_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("Page.md"), "# P").unwrap();
        std::fs::write(temp.path().join("page.md"), "# p").unwrap();

        let (tree, events) = build(temp.path(), Mode::Preview);
        let slugs: Vec<&str> = tree.children.iter().map(|n| n.slug.as_str()).collect();
        // Same outcome as apply mode: the collision keeps the original name,
        // so sibling slugs stay distinct.
        assert_eq!(slugs, ["Page", "page"]);
        assert!(events
            .events()
            .iter()
            .any(|e| matches!(e, Event::RenameFailed { .. })));
        assert!(temp.path().join("Page.md").exists());
        assert!(temp.path().join("page.md").exists());
    }

    #[test]
    fn preview_predicts_rename_collision_with_earlier_rename() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("Foo-Bar.md"), "# a").unwrap();
        std::fs::write(temp.path().join("Foo_Bar.md"), "# b").unwrap();

        // Neither target exists on disk yet; both entries normalize to
        // foo-bar.md. The earlier sibling claims it, the later one keeps
        // its original name, exactly as apply mode would resolve it.
        let (preview_tree, events) = build(temp.path(), Mode::Preview);
        let preview_slugs: Vec<String> = preview_tree
            .children
            .iter()
            .map(|n| n.slug.clone())
            .collect();
        assert_eq!(preview_slugs, ["Foo_Bar", "foo-bar"]);
        assert!(events
            .events()
            .iter()
            .any(|e| matches!(e, Event::RenameFailed { .. })));

        let (apply_tree, _) = build(temp.path(), Mode::Apply);
        let apply_slugs: Vec<String> = apply_tree
            .children
            .iter()
            .map(|n| n.slug.clone())
            .collect();
        assert_eq!(preview_slugs, apply_slugs);
    }

    #[test]
    fn preview_predicts_collision_with_pending_index() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("Index.md"), "# I").unwrap();

        // Apply mode synthesizes index.md before the rename pass, so the
        // rename of Index.md collides and the file stays a regular page.
        let (preview_tree, _) = build(temp.path(), Mode::Preview);
        let preview_slugs: Vec<String> = preview_tree
            .children
            .iter()
            .map(|n| n.slug.clone())
            .collect();
        assert_eq!(preview_slugs, ["Index"]);

        let (apply_tree, _) = build(temp.path(), Mode::Apply);
        let apply_slugs: Vec<String> = apply_tree
            .children
            .iter()
            .map(|n| n.slug.clone())
            .collect();
        assert_eq!(preview_slugs, apply_slugs);
    }

    #[test]
    fn index_document_is_never_a_page() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("index.md"), "# Custom Home").unwrap();
        std::fs::write(temp.path().join("page.md"), "# P").unwrap();

        let (tree, events) = build(temp.path(), Mode::Apply);
        let slugs: Vec<&str> = tree.children.iter().map(|n| n.slug.as_str()).collect();
        assert_eq!(slugs, ["page"]);
        // Pre-existing root index is left alone.
        assert!(events.is_empty());
        assert_eq!(
            std::fs::read_to_string(temp.path().join("index.md")).unwrap(),
            "# Custom Home"
        );
    }

    #[test]
    fn directory_named_like_markdown_is_still_a_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("Weird.md")).unwrap();

        let (tree, _) = build(temp.path(), Mode::Apply);
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].slug, "weird.md");
        assert!(temp.path().join("weird.md").join(INDEX_FILE).exists());
    }
}
