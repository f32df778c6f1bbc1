//! Structured diagnostics for the scan.
//!
//! Every noteworthy occurrence during a run (a rename, a synthesized index
//! document, a skipped entry, a recoverable failure) is emitted as an
//! [`Event`] through an [`EventSink`]. The console sink prints each event as
//! a plain text line; the collecting sink records them for preview rendering
//! and test assertions. Recoverable failures are events, not errors: they
//! degrade the outcome for one entry and the run continues.

use std::fmt;
use std::path::PathBuf;

/// Something that happened (or, in preview mode, would happen) during a scan.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// An entry was renamed to the normalized convention.
    Renamed { from: String, to: String },
    /// Preview mode: an entry would be renamed.
    WouldRename { from: String, to: String },
    /// A rename failed (permissions, existing target); the entry keeps its
    /// original name for the rest of the run.
    RenameFailed { path: PathBuf, error: String },
    /// A document was skipped because a directory with the same base name
    /// supersedes it.
    Superseded { file: String, dir: String },
    /// A missing index document was created for a directory.
    IndexCreated { dir: PathBuf },
    /// Preview mode: an index document would be created.
    WouldCreateIndex { dir: PathBuf },
    /// Index creation failed; the directory contributes no node.
    IndexCreateFailed { dir: PathBuf, error: String },
    /// A missing index document was created for the root directory.
    RootIndexCreated,
    /// Preview mode: the root index document would be created.
    WouldCreateRootIndex,
    /// Root index creation failed; the run continues without it.
    RootIndexCreateFailed { error: String },
    /// A directory could not be listed; it contributes an empty child set.
    ListFailed { dir: PathBuf, error: String },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Renamed { from, to } => write!(f, "Renamed: {from} -> {to}"),
            Event::WouldRename { from, to } => write!(f, "Would rename: {from} -> {to}"),
            Event::RenameFailed { path, error } => {
                write!(f, "Error renaming {}: {error}", path.display())
            }
            Event::Superseded { file, dir } => {
                write!(f, "Skipping {file} - using folder {dir}/ instead")
            }
            Event::IndexCreated { dir } => {
                write!(f, "Created index.md for: {}", dir.display())
            }
            Event::WouldCreateIndex { dir } => {
                write!(f, "Would create index.md for: {}", dir.display())
            }
            Event::IndexCreateFailed { dir, error } => {
                write!(f, "Error creating index.md in {}: {error}", dir.display())
            }
            Event::RootIndexCreated => write!(f, "Created index.md for root directory"),
            Event::WouldCreateRootIndex => write!(f, "Would create index.md for root directory"),
            Event::RootIndexCreateFailed { error } => {
                write!(f, "Error creating root index.md: {error}")
            }
            Event::ListFailed { dir, error } => {
                write!(f, "Error reading directory {}: {error}", dir.display())
            }
        }
    }
}

/// Consumer of scan events.
pub trait EventSink {
    fn emit(&mut self, event: Event);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: Event) {
        (**self).emit(event)
    }
}

/// Prints each event to stdout as it happens.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: Event) {
        println!("{event}");
    }
}

/// Records events for later inspection.
#[derive(Debug, Default)]
pub struct CollectedEvents {
    events: Vec<Event>,
}

impl CollectedEvents {
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for CollectedEvents {
    fn emit(&mut self, event: Event) {
        self.events.push(event);
    }
}
