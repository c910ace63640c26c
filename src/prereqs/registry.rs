//! The built-in prerequisite set.
//!
//! Order matters: tools are probed and installed in the sequence returned by
//! [`default_prereqs`], and the run summary reports them in the same order.

use crate::shell::{InstallCommand, Platform};

/// A tool the desktop build needs before it can start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prereq {
    /// Binary name, as probed on PATH and shown in status lines.
    pub name: &'static str,

    /// One-line description for status output.
    pub summary: &'static str,

    /// Opt-in tools are skipped entirely unless explicitly requested.
    pub opt_in: bool,

    /// Debian/Ubuntu package installed via apt.
    pub apt_package: &'static str,

    /// Homebrew formula installed via brew.
    pub brew_formula: &'static str,

    /// Argument passed to the binary to make it print its version.
    pub version_arg: &'static str,
}

impl Prereq {
    /// The installer invocation for this tool on `platform`.
    ///
    /// Linux installs go through apt and need administrative privileges;
    /// macOS installs go through brew as the invoking user. Anything else
    /// has no installer and returns `None`.
    pub fn install_command(&self, platform: Platform) -> Option<InstallCommand> {
        match platform {
            Platform::Linux => {
                Some(InstallCommand::new("apt", &["install", "-y", self.apt_package]).with_root())
            }
            Platform::MacOS => Some(InstallCommand::new("brew", &["install", self.brew_formula])),
            Platform::Unsupported => None,
        }
    }
}

/// The prerequisites handled by this tool, in probe order.
pub fn default_prereqs() -> Vec<Prereq> {
    vec![
        Prereq {
            name: "protoc",
            summary: "Protocol Buffers compiler",
            opt_in: false,
            apt_package: "protobuf-compiler",
            brew_formula: "protobuf",
            version_arg: "--version",
        },
        Prereq {
            name: "go",
            summary: "Go toolchain",
            opt_in: false,
            apt_package: "golang",
            brew_formula: "go",
            version_arg: "version",
        },
        Prereq {
            name: "openssl",
            summary: "OpenSSL toolkit",
            opt_in: true,
            apt_package: "openssl",
            brew_formula: "openssl",
            version_arg: "version",
        },
        Prereq {
            name: "ccache",
            summary: "Compiler cache",
            opt_in: false,
            apt_package: "ccache",
            brew_formula: "ccache",
            version_arg: "--version",
        },
    ]
}
