//! Graph builder: lays out and renders a whole commit list.

use rayon::prelude::*;

use crate::commit::Commit;
use crate::layout::{next_pipes, open_lineages};
use crate::pipe::Pipe;
use crate::pool::{Hash, HashPool};
use crate::render::{Row, render_pipe_set};
use crate::style::TextStyle;

/// Render one graph row per commit.
///
/// `commits` must be ordered so that every commit comes before its parents.
/// `style_of` gives the color of the lineages a commit starts; the lineage of
/// `selected` (if any) is drawn in the highlight style. The result depends on
/// nothing but the arguments, so callers may cache it per selection.
pub fn render_commit_graph<F>(
    pool: &HashPool,
    commits: &[Commit],
    selected: Option<Hash>,
    style_of: F,
) -> Vec<Row>
where
    F: Fn(&Commit) -> TextStyle,
{
    if commits.is_empty() {
        return Vec::new();
    }

    let sets = pipe_sets(pool, commits, style_of);
    render_rows(&sets, selected)
}

/// Lay out every row, threading each row's pipes into the next.
pub fn pipe_sets<F>(pool: &HashPool, commits: &[Commit], style_of: F) -> Vec<Vec<Pipe>>
where
    F: Fn(&Commit) -> TextStyle,
{
    commits
        .iter()
        .scan(Vec::new(), |prev, commit| {
            let next = next_pipes(pool, prev, commit, &style_of);
            log::trace!(
                "{}: {} pipes, {} lineages open",
                commit.short_hash(pool, 10),
                next.len(),
                open_lineages(pool, &next).len()
            );
            prev.clone_from(&next);
            Some(next)
        })
        .collect()
}

/// Render already laid out rows.
///
/// Each row depends only on its own pipe set, so rows are rendered in
/// parallel; the output order matches `sets`.
#[must_use]
pub fn render_rows(sets: &[Vec<Pipe>], selected: Option<Hash>) -> Vec<Row> {
    sets.par_iter()
        .map(|pipes| render_pipe_set(pipes, selected))
        .collect()
}
