//! Tool presence detection via PATH lookup.
//!
//! A tool counts as installed when its binary resolves to an executable file
//! in some PATH entry. No version floor is enforced here; whatever the
//! platform ships is accepted.

use std::path::{Path, PathBuf};

/// Resolves tool binaries against a fixed set of search directories.
///
/// The directory list is captured at construction so tests can probe
/// against a synthetic PATH instead of the real environment.
#[derive(Debug, Clone)]
pub struct ToolProbe {
    entries: Vec<PathBuf>,
}

impl ToolProbe {
    /// Build a probe from the current `PATH` value.
    pub fn from_env() -> Self {
        let entries = match std::env::var_os("PATH") {
            Some(value) => parse_search_path(&value),
            None => Vec::new(),
        };
        Self { entries }
    }

    /// Build a probe over an explicit directory list.
    pub fn with_entries(entries: Vec<PathBuf>) -> Self {
        Self { entries }
    }

    /// Find the first executable named `binary` in the search directories.
    pub fn resolve(&self, binary: &str) -> Option<PathBuf> {
        for entry in &self.entries {
            let candidate = entry.join(binary);
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
        None
    }

    /// Whether `binary` resolves to any executable.
    pub fn is_installed(&self, binary: &str) -> bool {
        self.resolve(binary).is_some()
    }
}

/// Split a `PATH`-style value into directories, dropping empty segments.
fn parse_search_path(value: &std::ffi::OsStr) -> Vec<PathBuf> {
    std::env::split_paths(value)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match path.metadata() {
        Ok(metadata) => metadata.is_file() && metadata.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
