use std::path::Path;

use anyhow::{Context, Result};
use trellis_git::Repository;
use trellis_graph::Config;

/// Open the repository containing the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current().context("Not inside a git repository")
}

/// Load the config from `path`, or from the default location.
///
/// A missing file yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path.map(Path::to_path_buf).or_else(Config::default_path) else {
        log::debug!("no config directory on this platform, using defaults");
        return Ok(Config::default());
    };

    log::debug!("loading config from {}", path.display());
    Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))
}
