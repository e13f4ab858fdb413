//! Commit model consumed by the graph renderer.

use crate::pool::{Hash, HashPool};

/// A commit as seen by the graph renderer.
///
/// Only `hash` and `parents` drive the layout. The remaining fields are
/// carried for the presentation layer (author colors, the metadata printed
/// beside each graph row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Interned hash of this commit.
    pub hash: Hash,

    /// Interned parent hashes, first parent first.
    pub parents: Vec<Hash>,

    /// Author display name.
    pub author_name: String,

    /// Author email address.
    pub author_email: String,

    /// First line of the commit message.
    pub subject: String,

    /// Author time, seconds since the Unix epoch.
    pub unix_timestamp: i64,

    /// Branch and tag names pointing at this commit.
    pub refs: Vec<String>,
}

impl Commit {
    /// Create a commit with only its graph identity set.
    #[must_use]
    pub const fn new(hash: Hash, parents: Vec<Hash>) -> Self {
        Self {
            hash,
            parents,
            author_name: String::new(),
            author_email: String::new(),
            subject: String::new(),
            unix_timestamp: 0,
            refs: Vec::new(),
        }
    }

    /// Set the author name.
    #[must_use]
    pub fn with_author(mut self, name: impl Into<String>) -> Self {
        self.author_name = name.into();
        self
    }

    /// Set the subject line.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Whether this commit has more than one parent.
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// Whether this commit has no parents at all.
    #[must_use]
    pub fn is_first_commit(&self) -> bool {
        self.parents.is_empty()
    }

    /// The first `len` characters of the hash.
    #[must_use]
    pub fn short_hash<'p>(&self, pool: &'p HashPool, len: usize) -> &'p str {
        let full = pool.resolve(self.hash);
        full.get(..len).unwrap_or(full)
    }
}
