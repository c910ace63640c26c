//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The entry point is the [`Cli`] struct. There are no subcommands: the
//! whole program is one linear bootstrap run.

use clap::Parser;

use crate::pydeps::DEFAULT_MANIFEST;

/// prepkit - Desktop SDK build prerequisite installer.
#[derive(Debug, Parser)]
#[command(name = "prepkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Install OpenSSL (not installed by default)
    #[arg(long)]
    pub openssl: bool,

    /// Preview installer commands without executing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Path to the pip requirements manifest
    #[arg(
        long,
        value_name = "PATH",
        env = "PREPKIT_REQUIREMENTS",
        default_value = DEFAULT_MANIFEST
    )]
    pub requirements: String,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
