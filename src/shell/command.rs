//! Installer command construction and execution.
//!
//! Commands are spawned argv-style (no intermediate shell) so package names
//! and paths never go through shell interpolation. Installer commands run
//! with inherited stdio: the package manager's own progress output is the
//! progress display.

use crate::error::{PrepError, Result};
use crate::shell::platform::is_elevated;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// A fully-specified external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    /// Program to invoke.
    pub program: String,

    /// Arguments, already split.
    pub args: Vec<String>,

    /// Whether the command needs administrative privileges.
    pub as_root: bool,
}

impl InstallCommand {
    /// Create a command with no elevation.
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            as_root: false,
        }
    }

    /// Mark the command as requiring administrative privileges.
    pub fn with_root(mut self) -> Self {
        self.as_root = true;
        self
    }

    /// The argv that will actually be spawned.
    ///
    /// On Unix an administrative command is prefixed with `sudo` unless the
    /// process already holds root. Elevation is passed in rather than read
    /// here so the prefix logic stays deterministic under test.
    pub fn effective_argv(&self, elevated: bool) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 2);
        if self.as_root && !elevated && cfg!(unix) {
            argv.push("sudo".to_string());
        }
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty when stdio was inherited).
    pub stdout: String,

    /// Standard error (empty when stdio was inherited).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

/// Join an argv into a display-friendly command line.
pub fn render_argv(argv: &[String]) -> String {
    argv.join(" ")
}

/// Run an installer command with inherited stdio.
///
/// The sudo prefix is applied based on the current effective UID.
pub fn run_install(cmd: &InstallCommand) -> Result<CommandResult> {
    let argv = cmd.effective_argv(is_elevated());
    execute(&argv, false)
}

/// Run a command with captured output.
///
/// Used for version sniffing, never for installs.
pub fn run_captured(program: &str, args: &[&str]) -> Result<CommandResult> {
    let mut argv = vec![program.to_string()];
    argv.extend(args.iter().map(|s| s.to_string()));
    execute(&argv, true)
}

fn execute(argv: &[String], capture: bool) -> Result<CommandResult> {
    let command_line = render_argv(argv);
    let Some(program) = argv.first() else {
        return Err(PrepError::Spawn {
            command: command_line,
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
        });
    };

    tracing::debug!("running: {}", command_line);
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(&argv[1..]);

    if capture {
        let output = cmd
            .stdin(Stdio::null())
            .output()
            .map_err(|source| PrepError::Spawn {
                command: command_line,
                source,
            })?;
        Ok(CommandResult {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            duration: start.elapsed(),
            success: output.status.success(),
        })
    } else {
        let status = cmd.status().map_err(|source| PrepError::Spawn {
            command: command_line,
            source,
        })?;
        Ok(CommandResult {
            exit_code: status.code(),
            stdout: String::new(),
            stderr: String::new(),
            duration: start.elapsed(),
            success: status.success(),
        })
    }
}
