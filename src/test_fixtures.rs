//! Test fixtures shared by the unit tests
//!
//! The central piece is [`ScriptedRunner`], a `ProcessRunner` double that
//! replays canned outputs keyed by command line and records everything it
//! was asked to run, so the per-OS install scenarios never touch a real
//! package manager.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::process::{Invocation, ProcessRunner, RunOutput};

/// A scripted `ProcessRunner` for unit tests
///
/// Panics on any command line it was not scripted for, which makes an
/// unexpected installer invocation a loud test failure.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: HashMap<String, RunOutput>,
    recorded: RefCell<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful run with the given stdout
    #[must_use]
    pub fn on_success(mut self, command_line: &str, stdout: &str) -> Self {
        self.responses
            .insert(command_line.to_string(), RunOutput::ok(stdout));
        self
    }

    /// Script a failing run with the given exit code
    #[must_use]
    pub fn on_failure(mut self, command_line: &str, code: i32) -> Self {
        self.responses
            .insert(command_line.to_string(), RunOutput::failed(code));
        self
    }

    /// Command lines that were asked to run, in order
    pub fn recorded(&self) -> Vec<String> {
        self.recorded
            .borrow()
            .iter()
            .map(Invocation::command_line)
            .collect()
    }

    /// Environment overrides recorded for a given command line
    pub fn recorded_env(&self, command_line: &str) -> Vec<(String, String)> {
        self.recorded
            .borrow()
            .iter()
            .find(|inv| inv.command_line() == command_line)
            .map(|inv| inv.env.clone())
            .unwrap_or_default()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, invocation: &Invocation) -> Result<RunOutput> {
        self.recorded.borrow_mut().push(invocation.clone());
        let line = invocation.command_line();
        match self.responses.get(&line) {
            Some(output) => Ok(output.clone()),
            None => panic!("unscripted command: {line}"),
        }
    }
}

/// Drop an executable stub named `name` into `dir`
///
/// Used to satisfy the idempotency probe with a fake python3.
pub fn executable_stub(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, "#!/bin/sh\nexit 0\n").expect("Failed to write stub");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark stub executable");
    }
    path
}
