//! Mock implementations for testing services.
//!
//! These mocks implement the traits from trellis-git to enable unit testing
//! of service logic without real git repos.

use std::cell::RefCell;

use trellis_git::{Error as GitError, HistorySource, LogOptions, Result as GitResult};
use trellis_graph::{Commit, HashPool};

struct MockCommit {
    hash: String,
    parents: Vec<String>,
    subject: String,
}

/// Mock implementation of `HistorySource` for testing.
///
/// Commits are returned in the order they were added.
#[derive(Default)]
pub struct MockHistory {
    commits: Vec<MockCommit>,
    last_options: RefCell<Option<LogOptions>>,
}

impl MockHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commit(mut self, hash: &str, parents: &[&str], subject: &str) -> Self {
        self.commits.push(MockCommit {
            hash: hash.to_string(),
            parents: parents.iter().map(ToString::to_string).collect(),
            subject: subject.to_string(),
        });
        self
    }

    /// Options of the most recent `load_commits` call.
    pub fn last_options(&self) -> Option<LogOptions> {
        self.last_options.borrow().clone()
    }
}

impl HistorySource for MockHistory {
    fn load_commits(&self, pool: &mut HashPool, options: &LogOptions) -> GitResult<Vec<Commit>> {
        *self.last_options.borrow_mut() = Some(options.clone());

        let commits: Vec<Commit> = self
            .commits
            .iter()
            .take(options.limit.unwrap_or(usize::MAX))
            .map(|c| {
                let hash = pool.intern(&c.hash);
                let parents = c.parents.iter().map(|p| pool.intern(p)).collect();
                Commit::new(hash, parents)
                    .with_author("Test User")
                    .with_subject(c.subject.as_str())
            })
            .collect();

        if commits.is_empty() {
            return Err(GitError::EmptyRepository);
        }
        Ok(commits)
    }

    fn resolve(&self, rev: &str) -> GitResult<String> {
        self.commits
            .iter()
            .find(|c| c.hash == rev)
            .map(|c| c.hash.clone())
            .ok_or_else(|| GitError::RevisionNotFound(rev.to_string()))
    }
}
