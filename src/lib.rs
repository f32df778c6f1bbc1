//! PageTree: Wiki Page Tree Generation
//!
//! Walks a directory of markdown documents and produces a single JSON document
//! describing their hierarchical structure (a "page tree"), normalizing file
//! and folder names to a lowercase-hyphenated convention and synthesizing
//! missing index documents along the way.

pub mod error;
pub mod events;
pub mod id;
pub mod logging;
pub mod naming;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod views;
