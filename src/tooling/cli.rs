//! CLI Tooling
//!
//! Command-line interface for page tree generation. A run scans the root
//! directory, reports every action as it happens, and either writes the
//! compact JSON tree or, in preview mode, prints the intended outcome
//! without touching the filesystem.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::events::ConsoleSink;
use crate::id::RandomIds;
use crate::tree::{Mode, TreeBuilder};
use crate::views::{render_tree, write_tree};

/// PageTree CLI - Generate a wiki page tree from markdown documents
#[derive(Debug, Parser)]
#[command(name = "pagetree")]
#[command(about = "Generate a wiki page tree from a directory of markdown documents")]
pub struct Cli {
    /// Root directory to scan
    #[arg(long, default_value = "data/root")]
    pub root: PathBuf,

    /// Output path for the generated tree JSON
    #[arg(long, default_value = "data/tree.json")]
    pub output: PathBuf,

    /// Preview changes without renaming files, creating index documents,
    /// or writing the output file
    #[arg(long)]
    pub preview: bool,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,
}

/// Execution context for one CLI run.
pub struct CliContext {
    root: PathBuf,
    output: PathBuf,
    mode: Mode,
}

impl CliContext {
    pub fn new(root: PathBuf, output: PathBuf, preview: bool) -> Self {
        let mode = if preview { Mode::Preview } else { Mode::Apply };
        Self { root, output, mode }
    }

    /// Run the scan and return the final summary to print.
    ///
    /// Progress and per-entry diagnostics are printed to stdout as they
    /// happen; only the fatal conditions (missing root, serialization or
    /// output-write failure) surface as errors.
    pub fn execute(&self) -> Result<String> {
        let mut builder = TreeBuilder::new(self.mode, RandomIds, ConsoleSink);
        let tree = builder.build(&self.root)?;

        if self.mode.is_preview() {
            let mut out = String::from("\n=== Preview - no files were modified ===\n");
            out.push_str("Tree structure:\n");
            out.push_str(&render_tree(&tree));
            return Ok(out);
        }

        write_tree(&tree, &self.output)?;
        info!(output = %self.output.display(), nodes = tree.count(), "wrote page tree");

        Ok(format!(
            "\nSuccessfully generated {}\nTotal nodes: {}",
            self.output.display(),
            tree.count()
        ))
    }
}
