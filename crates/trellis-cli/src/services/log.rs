//! Log service for loading history and rendering its graph.
//!
//! This module handles the logic behind `trellis log`, separated from CLI
//! presentation concerns.

use anyhow::{Context, Result};
use serde::Serialize;
use trellis_git::{HistorySource, LogOptions};
use trellis_graph::{AuthorStyles, Commit, Config, Hash, HashPool, Row, render_commit_graph};

/// What to show.
#[derive(Debug, Clone, Default)]
pub struct LogRequest {
    /// Overrides `log.max_count` from the config.
    pub max_count: Option<usize>,
    pub all: bool,
    /// Revision whose lineage is highlighted.
    pub select: Option<String>,
    /// Draw the graph, unless the config says never.
    pub graph: bool,
}

/// A single commit line of the log.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub hash: String,
    pub parents: Vec<String>,
    pub subject: String,
    pub author: String,
    pub date: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub refs: Vec<String>,
    /// The graph row as plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<String>,
}

impl LogEntry {
    #[must_use]
    pub fn short_hash(&self) -> &str {
        self.hash.get(..7).unwrap_or(&self.hash)
    }
}

/// Loaded history ready for printing.
#[derive(Debug, Clone)]
pub struct LogView {
    pub entries: Vec<LogEntry>,
    /// Styled graph rows, one per entry; empty when the graph is off.
    pub rows: Vec<Row>,
    /// Whether the selected revision is part of the loaded history.
    pub selection_shown: bool,
}

impl LogView {
    /// Widest graph row, in columns.
    #[must_use]
    pub fn graph_width(&self) -> usize {
        self.rows.iter().map(Row::width).max().unwrap_or(0)
    }
}

/// Service for loading and rendering commit history.
pub struct LogService<'a, H: HistorySource> {
    source: &'a H,
    config: &'a Config,
}

impl<'a, H: HistorySource> LogService<'a, H> {
    /// Create a new log service.
    pub const fn new(source: &'a H, config: &'a Config) -> Self {
        Self { source, config }
    }

    /// Load history and render its graph.
    pub fn load(&self, request: &LogRequest) -> Result<LogView> {
        let options = LogOptions {
            all: request.all,
            limit: Some(request.max_count.unwrap_or(self.config.log.max_count)),
            date_order: self.config.log.date_order(),
        };

        let mut pool = HashPool::new();
        let commits = self
            .source
            .load_commits(&mut pool, &options)
            .context("Failed to load history")?;

        let selected = match &request.select {
            Some(rev) => {
                let hash = self
                    .source
                    .resolve(rev)
                    .with_context(|| format!("Cannot select '{rev}'"))?;
                pool.get(&hash)
            }
            None => None,
        };
        let selection_shown = selected.is_some_and(|hash| commits.iter().any(|c| c.hash == hash));

        let rows = if request.graph && self.config.log.graph_enabled() {
            let authors = AuthorStyles::from_config(&self.config.colors)?;
            render_commit_graph(&pool, &commits, selected, |commit| {
                authors.style_for(&commit.author_name)
            })
        } else {
            Vec::new()
        };

        let entries = commits
            .iter()
            .enumerate()
            .map(|(i, commit)| to_entry(&pool, commit, rows.get(i).map(Row::plain)))
            .collect();

        Ok(LogView {
            entries,
            rows,
            selection_shown,
        })
    }
}

fn to_entry(pool: &HashPool, commit: &Commit, graph: Option<String>) -> LogEntry {
    let resolve = |hash: Hash| pool.resolve(hash).to_string();

    LogEntry {
        hash: resolve(commit.hash),
        parents: commit.parents.iter().copied().map(resolve).collect(),
        subject: commit.subject.clone(),
        author: commit.author_name.clone(),
        date: format_date(commit.unix_timestamp),
        refs: commit.refs.clone(),
        graph: graph.map(|row| row.trim_end().to_string()),
    }
}

/// `YYYY-MM-DD` in UTC.
fn format_date(unix_timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(unix_timestamp, 0)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
