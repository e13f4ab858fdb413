//! Text styles for graph cells.

use std::str::FromStr;

use colored::{ColoredString, Colorize};

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// 24-bit color.
    Rgb(u8, u8, u8),
}

impl Color {
    const NAMED: [(&'static str, Self); 16] = [
        ("black", Self::Black),
        ("red", Self::Red),
        ("green", Self::Green),
        ("yellow", Self::Yellow),
        ("blue", Self::Blue),
        ("magenta", Self::Magenta),
        ("cyan", Self::Cyan),
        ("white", Self::White),
        ("bright-black", Self::BrightBlack),
        ("bright-red", Self::BrightRed),
        ("bright-green", Self::BrightGreen),
        ("bright-yellow", Self::BrightYellow),
        ("bright-blue", Self::BrightBlue),
        ("bright-magenta", Self::BrightMagenta),
        ("bright-cyan", Self::BrightCyan),
        ("bright-white", Self::BrightWhite),
    ];

    const fn to_colored(self) -> colored::Color {
        match self {
            Self::Black => colored::Color::Black,
            Self::Red => colored::Color::Red,
            Self::Green => colored::Color::Green,
            Self::Yellow => colored::Color::Yellow,
            Self::Blue => colored::Color::Blue,
            Self::Magenta => colored::Color::Magenta,
            Self::Cyan => colored::Color::Cyan,
            Self::White => colored::Color::White,
            Self::BrightBlack => colored::Color::BrightBlack,
            Self::BrightRed => colored::Color::BrightRed,
            Self::BrightGreen => colored::Color::BrightGreen,
            Self::BrightYellow => colored::Color::BrightYellow,
            Self::BrightBlue => colored::Color::BrightBlue,
            Self::BrightMagenta => colored::Color::BrightMagenta,
            Self::BrightCyan => colored::Color::BrightCyan,
            Self::BrightWhite => colored::Color::BrightWhite,
            Self::Rgb(r, g, b) => colored::Color::TrueColor { r, g, b },
        }
    }
}

/// Error returned when a color name can't be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color '{0}'")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a color name (`red`, `bright-blue`, `bright_blue`) or `#rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");

        if let Some(hex) = normalized.strip_prefix('#') {
            if hex.len() != 6 {
                return Err(ParseColorError(s.to_string()));
            }
            let channel = |range: std::ops::Range<usize>| {
                hex.get(range)
                    .and_then(|c| u8::from_str_radix(c, 16).ok())
                    .ok_or_else(|| ParseColorError(s.to_string()))
            };
            return Ok(Self::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
        }

        Self::NAMED
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|&(_, color)| color)
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// Foreground color and weight of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextStyle {
    fg: Option<Color>,
    bold: bool,
}

/// Style of every cell on the selected commit's lineage.
pub const HIGHLIGHT: TextStyle = TextStyle::fg(Color::BrightWhite).bold();

impl TextStyle {
    /// No color, no weight.
    pub const NOTHING: Self = Self {
        fg: None,
        bold: false,
    };

    /// A style with the given foreground color.
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bold: false,
        }
    }

    /// The same style in bold.
    #[must_use]
    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    /// Foreground color, if any.
    #[must_use]
    pub const fn color(&self) -> Option<Color> {
        self.fg
    }

    /// Whether the style is bold.
    #[must_use]
    pub const fn is_bold(&self) -> bool {
        self.bold
    }

    /// Apply the style to `text`.
    ///
    /// Honors `colored`'s global override, so output is plain when color is
    /// disabled.
    #[must_use]
    pub fn paint(&self, text: &str) -> ColoredString {
        let mut painted = text.normal();
        if let Some(color) = self.fg {
            painted = painted.color(color.to_colored());
        }
        if self.bold {
            painted = painted.bold();
        }
        painted
    }
}
