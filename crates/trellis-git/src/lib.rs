//! # trellis-git
//!
//! History loading for Trellis, built on git2-rs.
//! Walks a repository's commits children-first and interns them into a
//! [`trellis_graph::HashPool`], ready for graph rendering.

mod error;
mod repository;
mod traits;

pub use error::{Error, Result};
pub use git2::Oid;
pub use repository::{LogOptions, Repository};
pub use traits::HistorySource;
