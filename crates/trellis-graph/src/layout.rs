//! Row transition engine.
//!
//! Given the pipes left open by the previous row and the commit of the
//! current row, [`next_pipes`] decides the column of every line crossing into
//! the next row. Columns are assigned greedily from the left so the graph
//! stays as narrow as the topology allows.

use std::collections::HashSet;

use crate::commit::Commit;
use crate::pipe::{Pipe, PipeKind};
use crate::pool::{Hash, HashPool};
use crate::style::TextStyle;

/// Columns claimed while laying out a single row.
#[derive(Debug, Default)]
struct Columns {
    /// Columns a pipe ends on below the row.
    taken: HashSet<usize>,
    /// Columns a pipe starts on, ends on, or sweeps across within the row.
    traversed: HashSet<usize>,
}

impl Columns {
    fn claim(&mut self, from: usize, to: usize) {
        let (left, right) = (from.min(to), from.max(to));
        self.traversed.extend(left..=right);
        self.taken.insert(to);
    }

    fn is_free(&self, column: usize) -> bool {
        !self.taken.contains(&column) && !self.traversed.contains(&column)
    }

    /// Lowest column nothing has touched yet.
    fn first_untraversed(&self) -> usize {
        lowest(|c| !self.traversed.contains(&c))
    }
}

/// Lowest column satisfying `is_free`.
///
/// Only finitely many columns are ever claimed, so the search terminates.
fn lowest(is_free: impl Fn(usize) -> bool) -> usize {
    let mut column = 0;
    while !is_free(column) {
        column += 1;
    }
    column
}

/// Compute the pipe set for the row of `commit`.
///
/// `prev_pipes` is the set produced for the previous row (empty for the
/// first row). `style_of` colors the pipes this commit starts; pipes that
/// merely continue or terminate keep the style they were born with.
///
/// The returned set is ordered by target column, terminating pipes first,
/// and that order is significant to [`render_pipe_set`](crate::render_pipe_set).
pub fn next_pipes(
    pool: &HashPool,
    prev_pipes: &[Pipe],
    commit: &Commit,
    style_of: &dyn Fn(&Commit) -> TextStyle,
) -> Vec<Pipe> {
    let empty_tree = pool.empty_tree();
    let current: Vec<&Pipe> = open_pipes(pool, prev_pipes).collect();

    let pos = current
        .iter()
        .find(|pipe| pipe.to_hash == commit.hash)
        .map_or_else(|| lowest_unused_column(&current), |pipe| pipe.to_pos);

    let style = style_of(commit);
    let first_parent = if commit.is_first_commit() {
        empty_tree
    } else {
        commit.parents[0]
    };

    let mut next = Vec::with_capacity(current.len() + commit.parents.len().max(1));
    next.push(Pipe {
        from_pos: pos,
        to_pos: pos,
        from_hash: commit.hash,
        to_hash: first_parent,
        kind: PipeKind::Starts,
        style,
    });

    let mut columns = Columns::default();
    columns.claim(pos, pos);

    // Columns still held by lineages passing this row. A merge's extra
    // parents never land on them, even if the lineage moves left this row.
    let held: HashSet<usize> = current
        .iter()
        .filter(|pipe| pipe.to_hash != commit.hash)
        .map(|pipe| pipe.to_pos)
        .collect();

    for pipe in &current {
        if pipe.to_hash == commit.hash {
            next.push(Pipe {
                from_pos: pipe.to_pos,
                to_pos: pos,
                kind: PipeKind::Terminates,
                ..**pipe
            });
            columns.claim(pipe.to_pos, pos);
        } else if pipe.to_pos < pos {
            let to_pos = columns.first_untraversed();
            next.push(Pipe {
                from_pos: pipe.to_pos,
                to_pos,
                kind: PipeKind::Continues,
                ..**pipe
            });
            columns.claim(pipe.to_pos, to_pos);
        }
    }

    let extra_parents: &[Hash] = if commit.is_merge() {
        &commit.parents[1..]
    } else {
        &[]
    };
    for &parent in extra_parents {
        let to_pos = lowest(|c| !columns.taken.contains(&c) && !held.contains(&c));
        next.push(Pipe {
            from_pos: pos,
            to_pos,
            from_hash: commit.hash,
            to_hash: parent,
            kind: PipeKind::Starts,
            style,
        });
        columns.taken.insert(to_pos);
    }

    for pipe in &current {
        if pipe.to_hash == commit.hash || pipe.to_pos < pos {
            continue;
        }

        // Slide left into any gap, but never across the commit's column.
        let to_pos = (pos + 1..=pipe.to_pos)
            .rev()
            .take_while(|&c| columns.is_free(c))
            .last()
            .unwrap_or(pipe.to_pos);
        next.push(Pipe {
            from_pos: pipe.to_pos,
            to_pos,
            kind: PipeKind::Continues,
            ..**pipe
        });
        columns.claim(pipe.to_pos, to_pos);
    }

    next.sort_by_key(|pipe| (pipe.to_pos, pipe.kind));

    debug_assert!(
        columns_are_exclusive(&next),
        "two pipes claim the same column around {}: {next:?}",
        commit.hash
    );
    debug_assert!(
        next.iter()
            .all(|pipe| pipe.kind != PipeKind::Terminates || pipe.to_hash == commit.hash),
        "a pipe terminates at {} without targeting it",
        commit.hash
    );

    next
}

/// Lowest column no open pipe arrives at.
fn lowest_unused_column(pipes: &[&Pipe]) -> usize {
    let used: HashSet<usize> = pipes.iter().map(|pipe| pipe.to_pos).collect();
    lowest(|c| !used.contains(&c))
}

/// Whether every column holds at most one line above and one line below
/// the row.
pub(crate) fn columns_are_exclusive(pipes: &[Pipe]) -> bool {
    let mut above = HashSet::new();
    let mut below = HashSet::new();

    pipes.iter().all(|pipe| {
        let above_ok = pipe.kind == PipeKind::Starts || above.insert(pipe.from_pos);
        let below_ok = pipe.kind == PipeKind::Terminates || below.insert(pipe.to_pos);
        above_ok && below_ok
    })
}

/// Pipes of a set that carry on into the next row.
///
/// Pipes that ended on the row have no successor, and nothing ever arrives
/// at the empty tree.
fn open_pipes<'a>(pool: &HashPool, pipes: &'a [Pipe]) -> impl Iterator<Item = &'a Pipe> {
    let empty_tree = pool.empty_tree();
    pipes
        .iter()
        .filter(move |pipe| pipe.kind != PipeKind::Terminates && pipe.to_hash != empty_tree)
}

/// Hashes of the lineages a pipe set leaves open for the next row.
#[must_use]
pub fn open_lineages(pool: &HashPool, pipes: &[Pipe]) -> Vec<Hash> {
    open_pipes(pool, pipes).map(|pipe| pipe.to_hash).collect()
}
