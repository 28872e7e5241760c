//! Per-invocation deduplication of export slugs
//!
//! Several physical devices can share a manufacturer/model pair. The export
//! is keyed by model, so only the first device seen for a slug is written.

use std::collections::HashSet;

/// Slugs already exported during one service call
#[derive(Debug, Default)]
pub struct ProcessedSlugs {
    seen: HashSet<String>,
}

impl ProcessedSlugs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a slug as processed
    ///
    /// Returns `false` if the slug was already processed in this run.
    pub fn mark(&mut self, slug: &str) -> bool {
        if self.seen.contains(slug) {
            return false;
        }
        self.seen.insert(slug.to_owned())
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.seen.contains(slug)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
