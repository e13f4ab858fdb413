//! Configuration management for Trellis.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::style::Color;

/// Wildcard key in `[colors.authors]` matching every author not listed.
pub const ANY_AUTHOR: &str = "*";

const SHOW_GRAPH_VALUES: &[&str] = &["always", "never"];
const ORDER_VALUES: &[&str] = &["topo", "date"];

/// Trellis configuration loaded from `~/.config/trellis/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Settings of the log view.
    #[serde(default)]
    pub log: LogConfig,

    /// Graph colors.
    #[serde(default)]
    pub colors: ColorConfig,
}

impl Config {
    /// Default location of the config file, if the platform has a config
    /// directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trellis").join("config.toml"))
    }

    /// Load config from a TOML file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if file can't be read or parsed, or holds invalid values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a TOML file, creating its directory if needed.
    ///
    /// # Errors
    /// Returns error if serialization or write fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| std::io::Error::other(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check every enumerated value and color.
    ///
    /// # Errors
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<()> {
        validate_enum("log.show_graph", &self.log.show_graph, SHOW_GRAPH_VALUES)?;
        validate_enum("log.order", &self.log.order, ORDER_VALUES)?;

        for (author, color) in &self.colors.authors {
            color
                .parse::<Color>()
                .map_err(|source| Error::InvalidColor {
                    field: format!("colors.authors.{author}"),
                    source,
                })?;
        }
        Ok(())
    }
}

fn validate_enum(field: &str, value: &str, allowed: &'static [&'static str]) -> Result<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(Error::UnexpectedValue {
            field: field.to_string(),
            value: value.to_string(),
            allowed,
        })
    }
}

/// Settings of the log view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Whether to draw the graph: `always` or `never`.
    #[serde(default = "default_show_graph")]
    pub show_graph: String,

    /// Number of commits loaded when no count is given.
    #[serde(default = "default_max_count")]
    pub max_count: usize,

    /// Commit order: `topo` or `date`.
    #[serde(default = "default_order")]
    pub order: String,
}

impl LogConfig {
    #[must_use]
    pub fn graph_enabled(&self) -> bool {
        self.show_graph != "never"
    }

    /// Whether commits are ordered by committer date before topology.
    #[must_use]
    pub fn date_order(&self) -> bool {
        self.order == "date"
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            show_graph: default_show_graph(),
            max_count: default_max_count(),
            order: default_order(),
        }
    }
}

fn default_show_graph() -> String {
    "always".into()
}

const fn default_max_count() -> usize {
    300
}

fn default_order() -> String {
    "topo".into()
}

/// Graph colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Author name to color; [`ANY_AUTHOR`] applies to everyone not listed.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub authors: BTreeMap<String, String>,
}
