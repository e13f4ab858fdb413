//! Row renderer: turns one pipe set into a row of styled glyphs.

use std::fmt;

use crate::cell::{Cell, CellKind};
use crate::pipe::{Pipe, PipeKind};
use crate::pool::Hash;
use crate::style::{HIGHLIGHT, TextStyle};

/// A glyph and the style it is printed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: TextStyle,
}

/// One rendered graph row.
///
/// Every graph column is two glyphs wide: the junction (a node, a corner or
/// a vertical line) followed by the connector towards the next column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    glyphs: Vec<Glyph>,
}

impl Row {
    /// All glyphs of the row, left to right.
    #[must_use]
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Number of graph columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.glyphs.len() / 2
    }

    /// The row without any styling.
    #[must_use]
    pub fn plain(&self) -> String {
        self.glyphs.iter().map(|g| g.ch).collect()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; 4];
        for glyph in &self.glyphs {
            let text = glyph.ch.encode_utf8(&mut buf);
            if glyph.style == TextStyle::NOTHING {
                f.write_str(text)?;
            } else {
                write!(f, "{}", glyph.style.paint(text))?;
            }
        }
        Ok(())
    }
}

/// Render the pipe set of a single row.
///
/// Starting pipes are drawn first and own the connectors they span;
/// terminating and continuing pipes are drawn over them. Pipes touching
/// `selected` at either end are drawn last in the [`HIGHLIGHT`] style,
/// replacing whatever was under them. The one exception is the line a
/// commit inherits straight from its selected child: when that is all the
/// selection contributes to the row, the node keeps its own color.
#[must_use]
pub fn render_pipe_set(pipes: &[Pipe], selected: Option<Hash>) -> Row {
    let mut commit_pos = 0;
    let mut start_count = 0;
    let mut max_pos = 0;
    for pipe in pipes {
        match pipe.kind {
            PipeKind::Starts => {
                start_count += 1;
                commit_pos = pipe.from_pos;
            }
            PipeKind::Terminates => commit_pos = pipe.to_pos,
            PipeKind::Continues => {}
        }
        max_pos = max_pos.max(pipe.right());
    }

    let mut cells = vec![Cell::default(); max_pos + 1];

    let straight_into_commit = |pipe: &Pipe| {
        pipe.kind == PipeKind::Terminates && !pipe.is_horizontal() && pipe.to_pos == commit_pos
    };
    let touches_selected = |pipe: &Pipe| selected.is_some_and(|hash| pipe.touches(hash));

    // A pipe running straight down into the commit shows nothing but the
    // node itself, which belongs to the commit's own lineage. It only takes
    // the highlight when the selected commit has other pipes in this row.
    let selection_spreads = pipes
        .iter()
        .any(|pipe| touches_selected(pipe) && !straight_into_commit(pipe));
    let (highlighted, normal): (Vec<&Pipe>, Vec<&Pipe>) = pipes
        .iter()
        .filter(|pipe| !straight_into_commit(pipe) || (selection_spreads && touches_selected(pipe)))
        .partition(|pipe| touches_selected(pipe));

    for pipe in normal.iter().filter(|p| p.kind == PipeKind::Starts) {
        draw_pipe(&mut cells, pipe, pipe.style, true);
    }
    for pipe in normal.iter().filter(|p| p.kind != PipeKind::Starts) {
        draw_pipe(&mut cells, pipe, pipe.style, false);
    }

    // Sideways highlighted pipes wipe the lines they cross; vertical ones
    // only restyle their own junction.
    for pipe in highlighted.iter().filter(|p| p.is_horizontal()) {
        for cell in &mut cells[pipe.left()..=pipe.right()] {
            cell.reset();
        }
    }
    for pipe in &highlighted {
        draw_pipe(&mut cells, pipe, HIGHLIGHT, true);
        // Starting and terminating pipes meet at the node.
        if pipe.kind != PipeKind::Continues {
            cells[commit_pos].set_style(HIGHLIGHT);
        }
    }

    let kind = if start_count > 1 {
        CellKind::Merge
    } else {
        CellKind::Commit
    };
    cells[commit_pos].set_kind(kind);

    let glyphs = cells
        .iter()
        .flat_map(Cell::glyphs)
        .map(|(ch, style)| Glyph { ch, style })
        .collect();
    Row { glyphs }
}

fn draw_pipe(cells: &mut [Cell], pipe: &Pipe, style: TextStyle, overwrite_right: bool) {
    if pipe.is_horizontal() {
        let (left, right) = (pipe.left(), pipe.right());
        for cell in &mut cells[left + 1..right] {
            cell.set_left(style).set_right(style, overwrite_right);
        }
        cells[left].set_right(style, overwrite_right);
        cells[right].set_left(style);
    }

    match pipe.kind {
        PipeKind::Starts => {
            cells[pipe.to_pos].set_down(style);
        }
        PipeKind::Terminates => {
            cells[pipe.from_pos].set_up(style);
        }
        PipeKind::Continues => {
            cells[pipe.to_pos].set_down(style);
            cells[pipe.from_pos].set_up(style);
        }
    }
}
