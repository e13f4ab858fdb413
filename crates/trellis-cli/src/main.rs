//! Trellis CLI - git history as a colored commit graph.

use clap::Parser;

mod commands;
mod output;
mod services;

use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    output::set_quiet(cli.quiet);

    let result = match cli.command {
        Commands::Log(args) => commands::log::run(&args, cli.config.as_deref()),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the verbosity flags.
fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
