//! Error types for page tree generation.
//!
//! Only run-aborting conditions are errors. Per-entry failures during the
//! scan (rename failures, unreadable directories, index creation failures)
//! are reported as events and never abort the run; see [`crate::events`].

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run (or its final write step).
#[derive(Debug, Error)]
pub enum TreeError {
    /// The configured root directory is missing; nothing can be scanned.
    #[error("root path {} does not exist", .0.display())]
    RootNotFound(PathBuf),

    /// The completed tree could not be serialized.
    #[error("failed to serialize tree: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output file could not be written. The tree was already fully
    /// computed in memory when this occurs; only the write step is lost.
    #[error("failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}
