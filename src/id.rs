//! Node identifier generation.
//!
//! Identifiers are opaque and unique per node within a run. Generation is a
//! capability injected into the tree builder so tests can substitute a
//! fixed-sequence generator and get deterministic trees.

use nanoid::nanoid;

/// Length of generated node identifiers.
pub const ID_LENGTH: usize = 9;

/// Source of node identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

/// Random identifiers drawn from the URL-safe alphabet `A-Za-z0-9_-`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        nanoid!(ID_LENGTH)
    }
}

/// Sequential identifiers (`id-0`, `id-1`, ...) for deterministic tests.
#[derive(Debug, Default)]
pub struct SequenceIds {
    next: usize,
}

impl IdGenerator for SequenceIds {
    fn next_id(&mut self) -> String {
        let id = format!("id-{}", self.next);
        self.next += 1;
        id
    }
}
