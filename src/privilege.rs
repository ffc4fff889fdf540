//! Privilege-escalation detection
//!
//! When a sudo binary is resolvable, every installer invocation is run
//! through it. When it is not, installer commands run as the current user
//! and any resulting permission failure propagates as an ordinary
//! installer failure.

use std::ffi::OsStr;
use std::path::PathBuf;

use crate::process::{Invocation, find_executable};

/// Whether install commands can be escalated, resolved once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivilegeContext {
    escalation: Option<PathBuf>,
}

impl PrivilegeContext {
    /// Look for a sudo binary on the given search path
    pub fn detect(search_path: &OsStr) -> Self {
        Self {
            escalation: find_executable("sudo", search_path),
        }
    }

    #[cfg(test)]
    pub fn with_helper(path: impl Into<PathBuf>) -> Self {
        Self {
            escalation: Some(path.into()),
        }
    }

    #[cfg(test)]
    pub fn without_helper() -> Self {
        Self { escalation: None }
    }

    pub fn has_escalation_helper(&self) -> bool {
        self.escalation.is_some()
    }

    /// Human-readable mode for the pre-install diagnostics
    pub fn mode(&self) -> &'static str {
        if self.escalation.is_some() {
            "sudo"
        } else {
            "current user"
        }
    }

    /// Prefix an installer invocation with the helper when one is available
    pub fn escalate(&self, invocation: Invocation) -> Invocation {
        match &self.escalation {
            Some(helper) => invocation.prefixed_with(helper.display().to_string()),
            None => invocation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escalate_with_helper() {
        let ctx = PrivilegeContext::with_helper("/usr/bin/sudo");
        let inv = ctx.escalate(Invocation::new("pkg", &["install", "-y", "python3"]));
        assert_eq!(inv.program, "/usr/bin/sudo");
        assert_eq!(inv.args, vec!["pkg", "install", "-y", "python3"]);
    }

    #[test]
    fn test_escalate_without_helper() {
        let ctx = PrivilegeContext::without_helper();
        let inv = ctx.escalate(Invocation::new("pkg", &["install", "-y", "python3"]));
        assert_eq!(inv.program, "pkg");
        assert_eq!(inv.args, vec!["install", "-y", "python3"]);
    }

    #[test]
    fn test_detect_on_empty_path() {
        let ctx = PrivilegeContext::detect(OsStr::new(""));
        assert!(!ctx.has_escalation_helper());
        assert_eq!(ctx.mode(), "current user");
    }
}
