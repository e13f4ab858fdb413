//! Error types for trellis-git.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading history.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Not inside a git repository.
    #[error("not a git repository")]
    NotARepository,

    /// A revision can't be resolved to a commit.
    #[error("revision not found: {0}")]
    RevisionNotFound(String),

    /// The repository has no commits yet.
    #[error("repository has no commits yet")]
    EmptyRepository,

    /// Underlying git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}
