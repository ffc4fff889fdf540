//! Common test utilities for pyboot integration tests

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A fake search path for integration tests
///
/// Holds a temp directory that tests populate with stub executables and
/// pass to the pyboot binary as its entire `PATH`, so runs are isolated
/// from whatever the host has installed.
pub struct FakePath {
    /// Temporary directory backing the path entry
    #[allow(dead_code)]
    pub temp: TempDir,
    /// The directory to use as `PATH`
    pub dir: PathBuf,
}

impl FakePath {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let dir = temp.path().to_path_buf();
        Self { temp, dir }
    }

    /// Add an executable stub that exits with the given code
    #[allow(dead_code)]
    pub fn stub(&self, name: &str, exit_code: i32) -> PathBuf {
        let path = self.dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\nexit {exit_code}\n"))
            .expect("Failed to write stub");
        mark_executable(&path);
        path
    }

    /// Symlink a real host binary into the fake path
    #[allow(dead_code)]
    #[cfg(unix)]
    pub fn adopt(&self, name: &str) {
        let real = which::which(name).expect("host binary not found");
        std::os::unix::fs::symlink(real, self.dir.join(name)).expect("Failed to link binary");
    }
}

#[cfg(unix)]
fn mark_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to mark stub executable");
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) {}
