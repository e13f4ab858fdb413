//! The pipe model: line segments crossing from one graph row to the next.

use crate::pool::Hash;
use crate::style::TextStyle;

/// How a pipe relates to the row it is attached to.
///
/// The declaration order is the tie-break order used when sorting a pipe
/// set, so terminating pipes come before the pipes starting at the same
/// column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PipeKind {
    /// Ends at this row; there is no successor pipe.
    Terminates,
    /// Born at this row; there is no predecessor pipe.
    Starts,
    /// Passes through this row without touching its commit.
    Continues,
}

/// One line segment of the graph.
///
/// Spans the gap between the row it belongs to (at `from_pos`) and the next
/// row (at `to_pos`). `from_hash` and `to_hash` name the commits at either
/// end of the lineage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipe {
    pub from_pos: usize,
    pub to_pos: usize,
    pub from_hash: Hash,
    pub to_hash: Hash,
    pub kind: PipeKind,
    pub style: TextStyle,
}

impl Pipe {
    /// Leftmost column the pipe touches.
    #[must_use]
    pub fn left(&self) -> usize {
        self.from_pos.min(self.to_pos)
    }

    /// Rightmost column the pipe touches.
    #[must_use]
    pub fn right(&self) -> usize {
        self.from_pos.max(self.to_pos)
    }

    /// Whether the pipe moves sideways within its row.
    #[must_use]
    pub const fn is_horizontal(&self) -> bool {
        self.from_pos != self.to_pos
    }

    /// Whether the pipe touches `hash` at either end.
    #[must_use]
    pub fn touches(&self, hash: Hash) -> bool {
        self.from_hash == hash || self.to_hash == hash
    }
}
