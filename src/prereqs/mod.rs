//! Prerequisite definitions and detection.

pub mod probe;
pub mod registry;
pub mod version;

pub use probe::ToolProbe;
pub use registry::{default_prereqs, Prereq};
