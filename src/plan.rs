//! Per-platform install plans and their executor
//!
//! One builder per supported OS family produces a typed [`InstallPlan`];
//! a single executor consumes them uniformly. Steps are built without a
//! privilege prefix; the executor applies the escalation helper to every
//! step when one is available.

use std::path::{Path, PathBuf};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{PybootError, Result};
use crate::host::{HostProfile, OsFamily};
use crate::privilege::PrivilegeContext;
use crate::process::{Invocation, ProcessRunner};
use crate::repository::PKG_PATH_VAR;

/// Pinned interpreter package on NetBSD
///
/// pkgsrc offers no unversioned `python3` alias, so a specific minor
/// version is installed and aliased afterwards via [`LinkSpec`].
pub const NETBSD_PYTHON_PACKAGE: &str = "python312";

/// Where the pinned NetBSD package installs its interpreter binary
pub const NETBSD_PYTHON_BINARY: &str = "/usr/pkg/bin/python3.12";

/// Symlink giving the versioned NetBSD interpreter its canonical name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpec {
    /// The `python3` alias to create
    pub link: PathBuf,
    /// Real installed path of the versioned interpreter
    pub target: PathBuf,
}

/// Everything needed to make `python3` available on one OS family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub steps: Vec<Invocation>,
    pub canonicalize: Option<LinkSpec>,
}

/// NetBSD-specific inputs to plan building
#[derive(Debug, Clone)]
pub struct NetBsdPlanInputs {
    /// Resolved repository URL, threaded into every package-tool step
    pub pkg_path: String,
    /// Caller opted in to the pkgin package manager
    pub use_pkgin: bool,
    /// Whether pkgin is already resolvable on the search path
    pub pkgin_present: bool,
    /// Directory receiving the canonical `python3` link
    pub link_dir: PathBuf,
}

/// Build the install plan for a classified host
///
/// Returns `None` for unrecognized OS families; no install action exists
/// for them.
pub fn build(host: &HostProfile, netbsd: Option<&NetBsdPlanInputs>) -> Option<InstallPlan> {
    match &host.os_family {
        OsFamily::Linux => Some(linux_plan()),
        OsFamily::FreeBsd => Some(freebsd_plan()),
        OsFamily::OpenBsd => Some(openbsd_plan()),
        OsFamily::NetBsd => netbsd.map(netbsd_plan),
        OsFamily::Other(_) => None,
    }
}

fn linux_plan() -> InstallPlan {
    InstallPlan {
        steps: vec![
            Invocation::new("apt-get", &["update", "-qq"]),
            Invocation::new("apt-get", &["install", "-qq", "python3"]),
        ],
        canonicalize: None,
    }
}

fn freebsd_plan() -> InstallPlan {
    InstallPlan {
        steps: vec![Invocation::new("pkg", &["install", "-y", "python3"])],
        canonicalize: None,
    }
}

fn openbsd_plan() -> InstallPlan {
    InstallPlan {
        steps: vec![Invocation::new("pkg_add", &["-I", "python3"])],
        canonicalize: None,
    }
}

fn netbsd_plan(inputs: &NetBsdPlanInputs) -> InstallPlan {
    let with_repo =
        |invocation: Invocation| invocation.with_env(PKG_PATH_VAR, inputs.pkg_path.clone());

    let mut steps = Vec::new();

    if inputs.use_pkgin {
        if !inputs.pkgin_present {
            steps.push(with_repo(Invocation::new("pkg_add", &["-I", "pkgin"])));
            steps.push(with_repo(Invocation::new("pkgin", &["-y", "update"])));
        }
        steps.push(with_repo(Invocation::new(
            "pkgin",
            &["-y", "install", NETBSD_PYTHON_PACKAGE],
        )));
    } else {
        steps.push(with_repo(Invocation::new(
            "pkg_add",
            &["-I", NETBSD_PYTHON_PACKAGE],
        )));
    }

    InstallPlan {
        steps,
        canonicalize: Some(LinkSpec {
            link: inputs.link_dir.join("python3"),
            target: PathBuf::from(NETBSD_PYTHON_BINARY),
        }),
    }
}

/// Run a plan to completion: steps in order, then the canonical link
///
/// The first non-zero installer exit aborts the whole run; the link is
/// never attempted after a failed step.
pub fn execute(
    plan: &InstallPlan,
    privilege: &PrivilegeContext,
    runner: &dyn ProcessRunner,
) -> Result<()> {
    for step in &plan.steps {
        let invocation = privilege.escalate(step.clone());
        run_step(&invocation, runner)?;
    }

    if let Some(link) = &plan.canonicalize {
        create_link(link)?;
        println!(
            "{} {} -> {}",
            style("Linked").green().bold(),
            link.link.display(),
            link.target.display()
        );
    }

    Ok(())
}

fn run_step(invocation: &Invocation, runner: &dyn ProcessRunner) -> Result<()> {
    let spinner = step_spinner(&invocation.command_line());
    let output = runner.run(invocation);
    spinner.finish_and_clear();

    let output = output?;
    println!("{} {}", style("Ran").cyan(), invocation.command_line());
    if !output.stdout.is_empty() {
        print!("{}", output.stdout);
    }
    if !output.stderr.is_empty() {
        eprint!("{}", output.stderr);
    }

    if !output.success() {
        return Err(PybootError::InstallerFailure {
            command: invocation.command_line(),
            code: output.code.unwrap_or(-1),
        });
    }

    Ok(())
}

fn step_spinner(command_line: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(command_line.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(120));
    spinner
}

#[cfg(unix)]
fn create_link(spec: &LinkSpec) -> Result<()> {
    std::os::unix::fs::symlink(&spec.target, &spec.link).map_err(|e| {
        PybootError::CanonicalizationFailed {
            link: spec.link.display().to_string(),
            reason: e.to_string(),
        }
    })
}

#[cfg(not(unix))]
fn create_link(spec: &LinkSpec) -> Result<()> {
    Err(PybootError::CanonicalizationFailed {
        link: spec.link.display().to_string(),
        reason: "symbolic links are not supported on this platform".to_string(),
    })
}

/// Render a plan without executing it (`--dry-run`)
pub fn describe(plan: &InstallPlan, privilege: &PrivilegeContext, out: &mut impl std::fmt::Write) {
    for step in &plan.steps {
        let invocation = privilege.escalate(step.clone());
        let _ = writeln!(out, "  {}", invocation.command_line());
    }
    if let Some(link) = &plan.canonicalize {
        let _ = writeln!(
            out,
            "  ln -s {} {}",
            link.target.display(),
            link.link.display()
        );
    }
}

/// Expected interpreter path after a successful run
pub fn expected_interpreter(plan: &InstallPlan) -> Option<&Path> {
    plan.canonicalize.as_ref().map(|link| link.link.as_path())
}
