//! Combinat CLI: the `combinat` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Logs go to stderr so `--json` output stays machine-readable.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "dispatching");

    match cli.command {
        Commands::Product { start, end, json } => commands::product::run(start, end, json),

        Commands::Count {
            counter,
            n,
            k,
            json,
        } => commands::count::run(counter, n, k, json),

        Commands::Bell { n, json } => commands::bell::run(n, json),

        Commands::Advance { values, sum, json } => commands::advance::run(values, sum, json),

        Commands::Partitions {
            len,
            sum,
            limit,
            json,
        } => commands::partitions::run(len, sum, limit, json),

        Commands::Selections { n, k, limit, json } => {
            commands::selections::run(n, k, limit, json)
        }
    }
}
