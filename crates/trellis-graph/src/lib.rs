//! # trellis-graph
//!
//! Commit graph layout and rendering for Trellis.
//!
//! Commits are laid out one row at a time: [`next_pipes`] turns the pipes
//! left open by the previous row into the pipe set of the current commit,
//! and [`render_pipe_set`] draws a pipe set as a row of box-drawing glyphs.
//! [`render_commit_graph`] runs both over a whole commit list.
//!
//! ```
//! use trellis_graph::{Commit, HashPool, TextStyle, render_commit_graph};
//!
//! let mut pool = HashPool::new();
//! let (a, b, c) = (pool.intern("a"), pool.intern("b"), pool.intern("c"));
//! let commits = vec![
//!     Commit::new(a, vec![b, c]),
//!     Commit::new(c, vec![b]),
//!     Commit::new(b, vec![]),
//! ];
//!
//! let rows = render_commit_graph(&pool, &commits, None, |_| TextStyle::NOTHING);
//! let lines: Vec<String> = rows.iter().map(|row| row.plain()).collect();
//! assert_eq!(lines, ["⏣─╮ ", "│ ◯ ", "◯─╯ "]);
//! ```

mod author;
mod cell;
mod commit;
pub mod config;
mod error;
mod graph;
mod layout;
mod pipe;
mod pool;
mod render;
mod style;

pub use author::AuthorStyles;
pub use commit::Commit;
pub use config::Config;
pub use error::{Error, Result};
pub use graph::{pipe_sets, render_commit_graph, render_rows};
pub use layout::{next_pipes, open_lineages};
pub use pipe::{Pipe, PipeKind};
pub use pool::{EMPTY_TREE_COMMIT_HASH, Hash, HashPool};
pub use render::{Glyph, Row, render_pipe_set};
pub use style::{Color, HIGHLIGHT, ParseColorError, TextStyle};
