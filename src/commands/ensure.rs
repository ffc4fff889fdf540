//! Ensure command implementation

use crate::cli::EnsureArgs;
use crate::error::Result;
use crate::process::SystemRunner;
use crate::resolver::{Bootstrap, BootstrapOptions, Outcome};

/// Run the ensure command against the real host
pub fn run(args: EnsureArgs, verbose: bool) -> Result<()> {
    let options = BootstrapOptions {
        pkg_path: args.pkg_path,
        use_pkgin: args.use_pkgin,
        link_dir: args.link_dir,
        dry_run: args.dry_run,
    };

    let runner = SystemRunner;
    let search_path = std::env::var_os("PATH").unwrap_or_default();
    let bootstrap = Bootstrap::new(&runner, search_path);

    let outcome = bootstrap.ensure_interpreter_present(&options)?;

    if verbose {
        match &outcome {
            Outcome::AlreadyPresent(path) => println!("Resolved interpreter: {}", path.display()),
            Outcome::Installed(Some(path)) => println!("Canonical link: {}", path.display()),
            Outcome::Installed(None) => println!("Interpreter available on the search path"),
            Outcome::UnsupportedPlatform(kernel) => println!("Unhandled kernel: {kernel}"),
            Outcome::DryRunPlanned => println!("Dry run, host untouched"),
        }
    }

    Ok(())
}
