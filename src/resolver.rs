//! Bootstrap resolution
//!
//! Drives the single-pass flow: probe for python3, classify the host,
//! resolve privileges and (on NetBSD) the package repository, then build
//! and execute the install plan. No loops, no retries; the first failure
//! is terminal.

use std::ffi::OsString;
use std::path::PathBuf;

use console::style;

use crate::error::{PybootError, Result};
use crate::host::{self, OsFamily};
use crate::plan::{self, NetBsdPlanInputs};
use crate::privilege::PrivilegeContext;
use crate::process::{ProcessRunner, find_executable};
use crate::repository;

/// Caller-supplied knobs for one bootstrap run
#[derive(Debug, Clone, Default)]
pub struct BootstrapOptions {
    /// NetBSD repository URL; use-if-present, else synthesized
    pub pkg_path: Option<String>,
    /// Opt in to the pkgin package manager on NetBSD
    pub use_pkgin: bool,
    /// Directory for the canonical NetBSD link; defaults to the directory
    /// containing the pyboot executable
    pub link_dir: Option<PathBuf>,
    /// Print the plan instead of executing it
    pub dry_run: bool,
}

/// How a run ended; every variant maps to exit code 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// python3 was already resolvable; nothing was touched
    AlreadyPresent(PathBuf),
    /// The installer ran; on NetBSD the path names the canonical link,
    /// elsewhere python3 is on the global search path
    Installed(Option<PathBuf>),
    /// Kernel name outside the supported set; no action taken
    UnsupportedPlatform(String),
    /// Plan printed, nothing executed
    DryRunPlanned,
}

/// The bootstrap resolver; all environment facts are passed in explicitly
pub struct Bootstrap<'a> {
    runner: &'a dyn ProcessRunner,
    search_path: OsString,
}

impl<'a> Bootstrap<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, search_path: OsString) -> Self {
        Self {
            runner,
            search_path,
        }
    }

    /// Ensure a binary named exactly `python3` is invocable
    ///
    /// The idempotency probe is the very first action so repeated CI
    /// invocations are side-effect-free when already satisfied.
    pub fn ensure_interpreter_present(&self, options: &BootstrapOptions) -> Result<Outcome> {
        if let Some(existing) = find_executable("python3", &self.search_path) {
            println!(
                "{} python3 already present at {}",
                style("Satisfied").green().bold(),
                existing.display()
            );
            return Ok(Outcome::AlreadyPresent(existing));
        }

        let profile = host::detect(self.runner)?;
        if let OsFamily::Other(kernel) = &profile.os_family {
            println!(
                "{} unrecognized kernel '{kernel}', no install action taken",
                style("Skipped").yellow().bold()
            );
            return Ok(Outcome::UnsupportedPlatform(kernel.clone()));
        }

        let privilege = PrivilegeContext::detect(&self.search_path);

        let netbsd_inputs = if profile.os_family == OsFamily::NetBsd {
            Some(self.netbsd_inputs(options, &profile)?)
        } else {
            None
        };

        self.print_diagnostics(&profile, &privilege, netbsd_inputs.as_ref());

        let Some(install_plan) = plan::build(&profile, netbsd_inputs.as_ref()) else {
            // build() only returns None for Other, handled above
            return Ok(Outcome::UnsupportedPlatform(profile.os_family.to_string()));
        };

        if options.dry_run {
            let mut rendered = String::new();
            plan::describe(&install_plan, &privilege, &mut rendered);
            println!("{}", style("Planned install steps:").bold());
            print!("{rendered}");
            return Ok(Outcome::DryRunPlanned);
        }

        plan::execute(&install_plan, &privilege, self.runner)?;

        let installed_at = plan::expected_interpreter(&install_plan).map(PathBuf::from);
        println!("{} python3 installed", style("Done").green().bold());
        Ok(Outcome::Installed(installed_at))
    }

    fn netbsd_inputs(
        &self,
        options: &BootstrapOptions,
        profile: &host::HostProfile,
    ) -> Result<NetBsdPlanInputs> {
        let pkg_path = repository::resolve(options.pkg_path.as_deref(), profile);
        let link_dir = match &options.link_dir {
            Some(dir) => dir.clone(),
            None => default_link_dir()?,
        };

        Ok(NetBsdPlanInputs {
            pkg_path,
            use_pkgin: options.use_pkgin,
            pkgin_present: find_executable("pkgin", &self.search_path).is_some(),
            link_dir,
        })
    }

    fn print_diagnostics(
        &self,
        profile: &host::HostProfile,
        privilege: &PrivilegeContext,
        netbsd: Option<&NetBsdPlanInputs>,
    ) {
        println!("{} {}", style("Detected OS:").bold(), profile.os_family);
        println!(
            "{} {}",
            style("Search path:").bold(),
            self.search_path.to_string_lossy()
        );
        println!("{} {}", style("Privilege mode:").bold(), privilege.mode());
        if let Some(inputs) = netbsd {
            println!("{} {}", style("Repository:").bold(), inputs.pkg_path);
        }
    }
}

/// Directory containing the running pyboot executable
fn default_link_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| PybootError::LinkDirUnavailable {
        reason: e.to_string(),
    })?;
    exe.parent()
        .map(PathBuf::from)
        .ok_or_else(|| PybootError::LinkDirUnavailable {
            reason: "executable path has no parent directory".to_string(),
        })
}
