//! Per-author lineage colors.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::{ANY_AUTHOR, ColorConfig};
use crate::error::{Error, Result};
use crate::style::{Color, TextStyle};

/// Maps author names to the style of the lineages they start.
///
/// Configured colors win; otherwise the `*` entry applies, and failing that
/// each author gets a color derived from their name, so the same author has
/// the same color on every run.
#[derive(Debug, Default)]
pub struct AuthorStyles {
    configured: HashMap<String, TextStyle>,
    fallback: Option<TextStyle>,
    cache: RefCell<HashMap<String, TextStyle>>,
}

impl AuthorStyles {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the `[colors.authors]` table.
    ///
    /// # Errors
    /// Returns error if a color can't be parsed.
    pub fn from_config(colors: &ColorConfig) -> Result<Self> {
        let mut styles = Self::new();
        for (author, value) in &colors.authors {
            let color: Color = value.parse().map_err(|source| Error::InvalidColor {
                field: format!("colors.authors.{author}"),
                source,
            })?;
            let style = TextStyle::fg(color);
            if author == ANY_AUTHOR {
                styles.fallback = Some(style);
            } else {
                styles.configured.insert(author.clone(), style);
            }
        }
        Ok(styles)
    }

    /// Style for `author`.
    pub fn style_for(&self, author: &str) -> TextStyle {
        if let Some(style) = self.configured.get(author) {
            return *style;
        }
        if let Some(style) = self.fallback {
            return style;
        }

        *self
            .cache
            .borrow_mut()
            .entry(author.to_string())
            .or_insert_with(|| TextStyle::fg(name_color(author)))
    }
}

/// A saturated, medium-light color picked by hashing `name`.
fn name_color(name: &str) -> Color {
    let hue = fnv1a(name.as_bytes()) % 360;
    let (r, g, b) = hsl_to_rgb(hue, 0.6, 0.6);
    Color::Rgb(r, g, b)
}

fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    bytes.iter().fold(OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(PRIME)
    })
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn hsl_to_rgb(hue: u64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let h = hue as f64 / 60.0;
    let chroma = (1.0 - 2.0f64.mul_add(lightness, -1.0).abs()) * saturation;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());

    let (r, g, b) = match hue / 60 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}
