//! Error types for trellis-graph.

use crate::style::ParseColorError;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading or validating configuration.
///
/// Layout and rendering themselves cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An enumerated setting holds a value outside its allowed set.
    #[error("unexpected value '{value}' for '{field}'. allowed values: {}", allowed.join(", "))]
    UnexpectedValue {
        field: String,
        value: String,
        allowed: &'static [&'static str],
    },

    /// A color setting can't be parsed.
    #[error("invalid color for '{field}': {source}")]
    InvalidColor {
        field: String,
        source: ParseColorError,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}
