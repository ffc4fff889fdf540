//! pyboot - CI interpreter bootstrap
//!
//! Runs as the first step of a CI job on POSIX-like hosts and guarantees
//! that a binary named `python3` is resolvable before the build
//! orchestrator runs, installing it via the platform package manager when
//! missing.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod host;
mod manifest;
mod plan;
mod privilege;
mod process;
mod repository;
mod resolver;
#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ensure(args) => commands::ensure::run(args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
