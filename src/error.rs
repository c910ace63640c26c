//! Error types for prepkit operations.
//!
//! This module defines [`PrepError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PrepError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PrepError::Other`) for unexpected errors
//! - Installer failures keep the child's exit code so the process can
//!   propagate it verbatim

use thiserror::Error;

/// Core error type for prepkit operations.
#[derive(Debug, Error)]
pub enum PrepError {
    /// An installer command ran and exited non-zero (or died to a signal).
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// An installer command could not be launched at all.
    #[error("Failed to launch '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PrepError {
    /// Map this error to a process exit code.
    ///
    /// A failed installer propagates its own exit code; everything else
    /// (spawn failures, signal death, IO errors) exits 1.
    pub fn process_exit_code(&self) -> u8 {
        match self {
            PrepError::CommandFailed {
                code: Some(code), ..
            } => u8::try_from(*code).unwrap_or(1),
            _ => 1,
        }
    }
}

/// Result type alias for prepkit operations.
pub type Result<T> = std::result::Result<T, PrepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = PrepError::CommandFailed {
            command: "apt install -y ccache".into(),
            code: Some(100),
        };
        let msg = err.to_string();
        assert!(msg.contains("apt install -y ccache"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn spawn_displays_command() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = PrepError::Spawn {
            command: "brew install protobuf".into(),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("brew install protobuf"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PrepError = io_err.into();
        assert!(matches!(err, PrepError::Io(_)));
    }

    #[test]
    fn command_failure_propagates_child_exit_code() {
        let err = PrepError::CommandFailed {
            command: "apt install -y golang".into(),
            code: Some(100),
        };
        assert_eq!(err.process_exit_code(), 100);
    }

    #[test]
    fn signal_death_exits_one() {
        let err = PrepError::CommandFailed {
            command: "brew install go".into(),
            code: None,
        };
        assert_eq!(err.process_exit_code(), 1);
    }

    #[test]
    fn out_of_range_exit_code_clamps_to_one() {
        let err = PrepError::CommandFailed {
            command: "apt install -y openssl".into(),
            code: Some(-9),
        };
        assert_eq!(err.process_exit_code(), 1);
    }

    #[test]
    fn spawn_failure_exits_one() {
        let err = PrepError::Spawn {
            command: "python -m pip".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.process_exit_code(), 1);
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PrepError::CommandFailed {
                command: "test".into(),
                code: Some(1),
            })
        }
        assert!(returns_error().is_err());
    }
}
