//! `trellis log` command - show history next to its commit graph.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::LogArgs;
use super::utils::{load_config, open_repo};
use crate::output;
use crate::services::{LogEntry, LogRequest, LogService, LogView};

/// Run the log command.
pub fn run(args: &LogArgs, config_path: Option<&Path>) -> Result<()> {
    args.color.apply();

    let config = load_config(config_path)?;
    let repo = open_repo()?;

    let service = LogService::new(&repo, &config);
    let request = LogRequest {
        max_count: args.max_count,
        all: args.all,
        select: args.select.clone(),
        graph: !args.no_graph,
    };
    let view = service.load(&request)?;

    if let Some(rev) = &args.select {
        if !view.selection_shown {
            output::warn(&format!("'{rev}' is not part of the shown history"));
        }
    }

    if args.json {
        print_json(&view.entries)?;
    } else {
        print_log(&view);

        let limit = args.max_count.unwrap_or(config.log.max_count);
        if view.entries.len() == limit {
            output::info(&format!("Showing the first {limit} commits, use -n to see more"));
        }
    }

    Ok(())
}

/// Print commits in human-readable format, graph first.
fn print_log(view: &LogView) {
    let width = view.graph_width();

    for (i, entry) in view.entries.iter().enumerate() {
        let graph = view.rows.get(i).map_or_else(String::new, |row| {
            let padding = "  ".repeat(width - row.width());
            format!("{row}{padding}")
        });
        output::essential(&format!("{graph}{}", format_entry(entry)));
    }
}

fn format_entry(entry: &LogEntry) -> String {
    let mut line = entry.short_hash().yellow().to_string();
    if !entry.refs.is_empty() {
        line.push_str(&format!(" ({})", entry.refs.join(", ")).cyan().to_string());
    }
    line.push(' ');
    line.push_str(&entry.subject);
    line.push_str(&format!(" {} {}", entry.author.dimmed(), entry.date.dimmed()));
    line
}

/// Print commits as JSON.
fn print_json(entries: &[LogEntry]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(entries)?;
    println!("{json_output}");
    Ok(())
}
