//! Best-effort version discovery for installed tools.
//!
//! Version strings are cosmetic: they show up in status lines but never gate
//! an install decision, so every failure path here collapses to `None`.

use crate::shell::run_captured;
use regex::Regex;

/// Patterns tried in order against version command output.
///
/// Covers the formats the supported tools actually print:
/// `libprotoc 25.1`, `go version go1.22.1 linux/amd64`,
/// `OpenSSL 3.0.13 30 Jan 2024` (and letter-suffixed `1.1.1w`),
/// `ccache version 4.9.1`.
const VERSION_PATTERNS: &[&str] = &[r"(\d+\.\d+\.\d+[a-z]?)", r"(\d+\.\d+)"];

/// Pull a dotted version out of arbitrary command output.
pub fn extract_version(output: &str) -> Option<String> {
    for pattern in VERSION_PATTERNS {
        if let Ok(regex) = Regex::new(pattern) {
            if let Some(captures) = regex.captures(output) {
                if let Some(m) = captures.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }
    None
}

/// Run `binary version_arg` and extract a version from its output.
///
/// Checks stdout first, then stderr, since some tools report versions on
/// the error stream.
pub fn sniff(binary: &str, version_arg: &str) -> Option<String> {
    let result = run_captured(binary, &[version_arg]).ok()?;
    if !result.success {
        return None;
    }
    extract_version(&result.stdout).or_else(|| extract_version(&result.stderr))
}
