//! Tooling & Integration Layer
//!
//! CLI surface for the page tree generator.

pub mod cli;

pub use cli::{Cli, CliContext};
