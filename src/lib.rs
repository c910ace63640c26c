//! Prepkit - desktop SDK build prerequisite bootstrapper.
//!
//! Prepkit prepares a development machine for building the desktop SDK: it
//! probes for the required command-line tools, installs the missing ones
//! through the platform package manager, and installs the pinned Python
//! dependencies.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`prereqs`] - Prerequisite registry, PATH probing, and version sniffing
//! - [`pydeps`] - Python dependency installation
//! - [`runner`] - The linear bootstrap routine
//! - [`shell`] - External command construction and execution
//! - [`ui`] - Terminal output and run reporting
//!
//! # Example
//!
//! ```
//! use prepkit::prereqs::ToolProbe;
//! use prepkit::pydeps;
//!
//! // Probe an empty search path: nothing resolves, so the pip step
//! // falls back to the plain `python` interpreter.
//! let probe = ToolProbe::with_entries(Vec::new());
//! let interpreter = pydeps::pick_interpreter(&probe);
//! let cmd = pydeps::pip_install_command(interpreter, pydeps::DEFAULT_MANIFEST);
//! assert_eq!(cmd.program, "python");
//! assert!(!cmd.as_root);
//! ```
//!
//! For end-to-end runs against a synthetic PATH, see the integration tests.

pub mod cli;
pub mod error;
pub mod prereqs;
pub mod pydeps;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{PrepError, Result};
