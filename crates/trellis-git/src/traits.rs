//! Trait abstractions for history loading.
//!
//! This module defines the `HistorySource` trait which abstracts where
//! commits come from, enabling dependency injection and testability.

use trellis_graph::{Commit, HashPool};

use crate::Result;
use crate::repository::{LogOptions, Repository};

/// Trait for loading commit history.
///
/// This trait abstracts the repository, allowing for:
/// - Dependency injection in services
/// - Mock implementations for testing
#[allow(clippy::missing_errors_doc)]
pub trait HistorySource {
    /// Load commits children-first, interning every hash into `pool`.
    fn load_commits(&self, pool: &mut HashPool, options: &LogOptions) -> Result<Vec<Commit>>;

    /// Resolve a revision to the full hash of a commit.
    fn resolve(&self, rev: &str) -> Result<String>;
}

impl HistorySource for Repository {
    fn load_commits(&self, pool: &mut HashPool, options: &LogOptions) -> Result<Vec<Commit>> {
        Self::load_commits(self, pool, options)
    }

    fn resolve(&self, rev: &str) -> Result<String> {
        Self::resolve(self, rev).map(|oid| oid.to_string())
    }
}
