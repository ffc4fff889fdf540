//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pyboot - CI interpreter bootstrap
///
/// Guarantee a usable python3 interpreter before the build orchestrator runs.
#[derive(Parser, Debug)]
#[command(
    name = "pyboot",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "CI bootstrap that guarantees a python3 interpreter on POSIX hosts",
    long_about = "pyboot runs as the first step of a CI job on Linux, FreeBSD, OpenBSD, \
                  or NetBSD. It checks whether a binary named python3 is resolvable and, \
                  if not, installs it through the platform's package manager, so later \
                  build steps never need to know which OS they run on.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  pyboot ensure\n    \
                  pyboot ensure --dry-run\n    \
                  CI_NETBSD_USE_PKGIN=1 pyboot ensure\n    \
                  pyboot ensure --pkg-path https://cdn.NetBSD.org/pub/pkgsrc/packages/NetBSD/amd64/10.1/All"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ensure a python3 interpreter is present, installing it if missing
    Ensure(EnsureArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the ensure command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Ensure python3 is available:\n    pyboot ensure\n\n\
                  Preview the install plan without touching the host:\n    pyboot ensure --dry-run\n\n\
                  NetBSD with a caller-pinned repository:\n    PKG_PATH=... pyboot ensure\n\n\
                  NetBSD via pkgin:\n    pyboot ensure --use-pkgin")]
pub struct EnsureArgs {
    /// NetBSD package repository URL (kept as-is when set by the caller)
    #[arg(long, env = "PKG_PATH", value_name = "URL")]
    pub pkg_path: Option<String>,

    /// Use the pkgin package manager on NetBSD, bootstrapping it if needed
    #[arg(
        long,
        env = "CI_NETBSD_USE_PKGIN",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub use_pkgin: bool,

    /// Directory receiving the canonical python3 link on NetBSD
    /// (defaults to the directory containing the pyboot executable)
    #[arg(long, value_name = "DIR")]
    pub link_dir: Option<PathBuf>,

    /// Print the resolved install plan without executing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    pyboot completions bash > ~/.bash_completion.d/pyboot\n\n\
                  Generate zsh completions:\n    pyboot completions zsh > ~/.zfunc/_pyboot\n\n\
                  Generate fish completions:\n    pyboot completions fish > ~/.config/fish/completions/pyboot.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
