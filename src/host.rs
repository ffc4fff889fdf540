//! Host OS classification
//!
//! The host is classified once per run from the canonical kernel name and
//! the resulting [`HostProfile`] is immutable for the rest of the run.

use crate::error::{PybootError, Result};
use crate::process::{Invocation, ProcessRunner};

/// The closed set of OS families pyboot knows how to bootstrap
///
/// Kernel names outside the four supported ones are carried verbatim in
/// `Other`; no install action is taken for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsFamily {
    Linux,
    FreeBsd,
    OpenBsd,
    NetBsd,
    Other(String),
}

impl OsFamily {
    /// Classify a canonical kernel name (`uname -s`)
    pub fn classify(kernel: &str) -> Self {
        match kernel {
            "Linux" => Self::Linux,
            "FreeBSD" => Self::FreeBsd,
            "OpenBSD" => Self::OpenBsd,
            "NetBSD" => Self::NetBsd,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Linux => "Linux",
            Self::FreeBsd => "FreeBSD",
            Self::OpenBsd => "OpenBSD",
            Self::NetBsd => "NetBSD",
            Self::Other(name) => name,
        }
    }
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Facts about the host, derived once at the start of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostProfile {
    pub os_family: OsFamily,
    /// Processor type from `uname -p` (e.g. "amd64")
    pub architecture_hint: String,
    /// OS release from `uname -r`, truncated to major.minor
    pub os_release_hint: String,
}

/// Probe the host with uname through the given runner
pub fn detect(runner: &dyn ProcessRunner) -> Result<HostProfile> {
    let kernel = uname(runner, "-s")?;
    let architecture_hint = uname(runner, "-p")?;
    let os_release_hint = major_minor(&uname(runner, "-r")?);

    Ok(HostProfile {
        os_family: OsFamily::classify(&kernel),
        architecture_hint,
        os_release_hint,
    })
}

fn uname(runner: &dyn ProcessRunner, flag: &str) -> Result<String> {
    let invocation = Invocation::new("uname", &[flag]);
    let output = runner.run(&invocation)?;

    if !output.success() {
        return Err(PybootError::HostDetectionFailed {
            message: format!("uname {flag} exited with status {:?}", output.code),
        });
    }

    Ok(output.stdout.trim().to_string())
}

/// Keep only the first two dot-separated components of a release string
///
/// "10.1.2" becomes "10.1"; a release without a patch component is
/// returned unchanged. Non-numeric suffixes inside the second component
/// (e.g. "10.1_RC1") are kept, matching the repository layout on the CDN.
fn major_minor(release: &str) -> String {
    release.split('.').take(2).collect::<Vec<_>>().join(".")
}
