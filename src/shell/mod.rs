//! Process execution and platform facts.

pub mod command;
pub mod platform;

pub use command::{render_argv, run_captured, run_install, CommandResult, InstallCommand};
pub use platform::{is_elevated, Platform};
