//! A single column of a rendered graph row.

use crate::style::TextStyle;

pub const COMMIT_SYMBOL: char = '◯';
pub const MERGE_SYMBOL: char = '⏣';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Connection,
    Commit,
    Merge,
}

/// One two-character column: a junction glyph and the connector to its
/// right.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    kind: CellKind,
    style: TextStyle,
    right_style: Option<TextStyle>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            up: false,
            down: false,
            left: false,
            right: false,
            kind: CellKind::Connection,
            style: TextStyle::NOTHING,
            right_style: None,
        }
    }
}

impl Cell {
    /// Forget the lines drawn so far, keeping the styles.
    pub const fn reset(&mut self) {
        self.up = false;
        self.down = false;
        self.left = false;
        self.right = false;
    }

    pub const fn set_up(&mut self, style: TextStyle) -> &mut Self {
        self.up = true;
        self.style = style;
        self
    }

    pub const fn set_down(&mut self, style: TextStyle) -> &mut Self {
        self.down = true;
        self.style = style;
        self
    }

    pub const fn set_left(&mut self, style: TextStyle) -> &mut Self {
        self.left = true;
        // vertical trumps horizontal
        if !self.up && !self.down {
            self.style = style;
        }
        self
    }

    pub const fn set_right(&mut self, style: TextStyle, overwrite: bool) -> &mut Self {
        self.right = true;
        if self.right_style.is_none() || overwrite {
            self.right_style = Some(style);
        }
        self
    }

    pub const fn set_style(&mut self, style: TextStyle) -> &mut Self {
        self.style = style;
        self
    }

    pub const fn set_kind(&mut self, kind: CellKind) -> &mut Self {
        self.kind = kind;
        self
    }

    /// The two glyphs of this cell with their styles.
    ///
    /// Blank glyphs are never styled.
    pub fn glyphs(&self) -> [(char, TextStyle); 2] {
        let (junction, connector) = box_drawing_chars(self.up, self.down, self.left, self.right);
        let junction = match self.kind {
            CellKind::Connection => junction,
            CellKind::Commit => COMMIT_SYMBOL,
            CellKind::Merge => MERGE_SYMBOL,
        };
        let right_style = self.right_style.unwrap_or(self.style);

        [
            (junction, styled_unless_blank(junction, self.style)),
            (connector, styled_unless_blank(connector, right_style)),
        ]
    }
}

const fn styled_unless_blank(glyph: char, style: TextStyle) -> TextStyle {
    if glyph == ' ' { TextStyle::NOTHING } else { style }
}

/// Junction and connector characters for the lines meeting in a cell.
const fn box_drawing_chars(up: bool, down: bool, left: bool, right: bool) -> (char, char) {
    match (up, down, left, right) {
        (true, true, _, true) => ('│', '─'),
        (true, true, _, false) => ('│', ' '),
        (true, false, true, true) => ('┴', '─'),
        (true, false, true, false) => ('╯', ' '),
        (true, false, false, true) => ('╰', '─'),
        (true, false, false, false) => ('╵', ' '),
        (false, true, true, true) => ('┬', '─'),
        (false, true, true, false) => ('╮', ' '),
        (false, true, false, true) => ('╭', '─'),
        (false, true, false, false) => ('╷', ' '),
        (false, false, true, true) => ('─', '─'),
        (false, false, true, false) => ('─', ' '),
        (false, false, false, true) => ('╶', '─'),
        (false, false, false, false) => (' ', ' '),
    }
}
