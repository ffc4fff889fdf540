//! External process invocation
//!
//! Every command pyboot runs (uname probes, package managers) goes through
//! the [`ProcessRunner`] trait so the whole bootstrap can be exercised in
//! tests with a scripted runner instead of a real package manager.
//!
//! Environment for child processes is carried explicitly on the
//! [`Invocation`] rather than mutated globally on the pyboot process.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::Command;

use crate::error::{PybootError, Result};

/// One external command: program, arguments, and environment overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Extra environment passed to the child on top of the inherited one
    pub env: Vec<(String, String)>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
            env: Vec::new(),
        }
    }

    /// Add an environment override for the child process
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Prefix this invocation with another program (e.g. a privilege helper)
    #[must_use]
    pub fn prefixed_with(self, program: impl Into<String>) -> Self {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(self.program);
        args.extend(self.args);
        Self {
            program: program.into(),
            args,
            env: self.env,
        }
    }

    /// The command as a single display line, for diagnostics and errors
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Outcome of a finished child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    /// Exit code; `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// A successful run with the given captured stdout (test construction)
    #[cfg(test)]
    pub fn ok(stdout: &str) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    /// A failed run with the given exit code (test construction)
    #[cfg(test)]
    pub fn failed(code: i32) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

/// Runs external commands, capturing their output
///
/// Captured rather than streamed so the caller can keep terminal control
/// (spinner) while an installer runs and replay the output afterwards,
/// which keeps CI logs complete.
pub trait ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<RunOutput>;
}

/// Production runner backed by `std::process::Command`
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<RunOutput> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        for (key, value) in &invocation.env {
            command.env(key, value);
        }

        let output = command
            .output()
            .map_err(|e| PybootError::CommandLaunchFailed {
                command: invocation.command_line(),
                reason: e.to_string(),
            })?;

        Ok(RunOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Resolve an executable by name against an explicit search path
///
/// The search path is passed in rather than read from the ambient
/// environment so the idempotency probe is deterministic under test.
pub fn find_executable(name: &str, search_path: &OsStr) -> Option<PathBuf> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    which::which_in(name, Some(search_path), cwd).ok()
}
