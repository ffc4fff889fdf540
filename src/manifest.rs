//! Build orchestrator boundary
//!
//! pyboot only unblocks the interpreter; the orchestration script it hands
//! off to consumes a step selector, build options, and a JSON test
//! manifest. These types pin down that contract so the boundary stays
//! checkable; pyboot consumes none of them at runtime.

#![allow(dead_code)]

use std::path::Path;

use serde::Deserialize;

use crate::error::{PybootError, Result};

/// Step selector passed to the orchestration script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Prepare,
    Configure,
    Build,
    Test,
}

impl Step {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prepare => "prepare",
            Self::Configure => "configure",
            Self::Build => "build",
            Self::Test => "test",
        }
    }
}

/// Build configuration payload the orchestrator expects
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildOptions {
    #[serde(default)]
    pub compiler: String,
    #[serde(default)]
    pub architecture: String,
    #[serde(default)]
    pub build_type: String,
    #[serde(default)]
    pub build_defs: String,
    #[serde(default)]
    pub source_dir: String,
}

/// One test entry in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestCommand {
    /// Executable followed by its arguments
    pub cmd: Vec<String>,
    /// A non-zero exit from an optional command does not fail the step
    #[serde(default)]
    pub optional: bool,
}

/// The JSON test manifest: an object with a `tests` array
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestManifest {
    #[serde(default)]
    pub tests: Vec<TestCommand>,
}

impl TestManifest {
    /// Load and parse a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PybootError::ManifestReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        serde_json::from_str(&content).map_err(|e| PybootError::ManifestParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest_with_optional_flag() {
        let manifest: TestManifest = serde_json::from_str(
            r#"{
                "tests": [
                    { "cmd": ["unit_tests", "--fast"] },
                    { "cmd": ["fuzz_smoke"], "optional": true }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.tests.len(), 2);
        assert_eq!(manifest.tests[0].cmd, vec!["unit_tests", "--fast"]);
        assert!(!manifest.tests[0].optional);
        assert!(manifest.tests[1].optional);
    }

    #[test]
    fn test_empty_manifest_has_no_tests() {
        let manifest: TestManifest = serde_json::from_str("{}").unwrap();
        assert!(manifest.tests.is_empty());
    }

    #[test]
    fn test_build_options_fields_default() {
        let options: BuildOptions =
            serde_json::from_str(r#"{ "compiler": "clang", "build_type": "Debug" }"#).unwrap();
        assert_eq!(options.compiler, "clang");
        assert_eq!(options.build_type, "Debug");
        assert!(options.source_dir.is_empty());
    }

    #[test]
    fn test_step_names() {
        assert_eq!(Step::Prepare.as_str(), "prepare");
        assert_eq!(Step::Test.as_str(), "test");
    }

    #[test]
    fn test_load_missing_file() {
        let err = TestManifest::load(Path::new("/no/such/manifest.json")).unwrap_err();
        assert!(matches!(err, PybootError::ManifestReadFailed { .. }));
    }

    #[test]
    fn test_load_malformed_json() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("tests.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = TestManifest::load(&path).unwrap_err();
        assert!(matches!(err, PybootError::ManifestParseFailed { .. }));
    }
}
