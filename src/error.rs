//! Error types for pyboot
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Every failure is fatal at the point of occurrence: there are no retries,
//! no fallback installers, and no cleanup of partially installed packages.
//! An unrecognized platform is deliberately NOT an error; it is reported as
//! an outcome so a genuinely missing interpreter surfaces downstream instead.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pyboot operations
#[derive(Error, Diagnostic, Debug)]
pub enum PybootError {
    // Host detection errors
    #[error("Failed to detect host system: {message}")]
    #[diagnostic(
        code(pyboot::host::detection_failed),
        help("pyboot probes the host with uname; check that uname is on PATH")
    )]
    HostDetectionFailed { message: String },

    // Process invocation errors
    #[error("Failed to launch command '{command}': {reason}")]
    #[diagnostic(
        code(pyboot::process::launch_failed),
        help("Check that the command exists and is executable on this host")
    )]
    CommandLaunchFailed { command: String, reason: String },

    #[error("Installer command '{command}' exited with status {code}")]
    #[diagnostic(
        code(pyboot::installer::failed),
        help(
            "Package installation failed. If you are not root and no privilege \
             escalation helper is available, the package manager likely lacked \
             the rights it needed."
        )
    )]
    InstallerFailure { command: String, code: i32 },

    // NetBSD canonicalization errors
    #[error("Failed to create canonical python3 link at '{link}': {reason}")]
    #[diagnostic(
        code(pyboot::canonicalize::link_failed),
        help("Remove any conflicting file at the link path and re-run")
    )]
    CanonicalizationFailed { link: String, reason: String },

    #[error("Cannot determine the pyboot executable directory: {reason}")]
    #[diagnostic(
        code(pyboot::canonicalize::no_link_dir),
        help("Pass --link-dir to choose where the python3 link is created")
    )]
    LinkDirUnavailable { reason: String },

    // Orchestrator boundary errors
    #[error("Failed to read test manifest: {path}")]
    #[diagnostic(code(pyboot::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to parse test manifest: {path}")]
    #[diagnostic(
        code(pyboot::manifest::parse_failed),
        help("The manifest must be a JSON object with a 'tests' array")
    )]
    ManifestParseFailed { path: String, reason: String },
}

/// Convenience result type for pyboot operations
pub type Result<T> = std::result::Result<T, PybootError>;
