//! NetBSD package repository location
//!
//! NetBSD's package tools read the repository URL from `PKG_PATH`. A value
//! supplied by the caller always wins; otherwise the URL is synthesized
//! from the host's processor type and OS release. The resolved value is
//! passed to installer invocations as an explicit environment override,
//! never written into the pyboot process environment.

use crate::host::HostProfile;

/// Environment variable the NetBSD package tools read
pub const PKG_PATH_VAR: &str = "PKG_PATH";

const CDN_BASE: &str = "https://cdn.NetBSD.org/pub/pkgsrc/packages/NetBSD";

/// Resolve the repository URL with use-if-present semantics
///
/// `supplied` is the caller's `--pkg-path` flag or `PKG_PATH` environment
/// value; when set it is returned unchanged regardless of the detected
/// host facts.
pub fn resolve(supplied: Option<&str>, host: &HostProfile) -> String {
    match supplied {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => synthesize(host),
    }
}

fn synthesize(host: &HostProfile) -> String {
    format!(
        "{CDN_BASE}/{}/{}/All",
        host.architecture_hint, host.os_release_hint
    )
}
