//! User-facing run reporting.
//!
//! This module provides:
//! - [`Reporter`] trait for output abstraction
//! - [`TerminalReporter`] for styled terminal output
//! - [`MockReporter`] for capturing output in tests
//! - [`RunSummary`] and friends, the per-run outcome vocabulary
//!
//! # Example
//!
//! ```
//! use prepkit::ui::{MockReporter, Reporter};
//!
//! let mut reporter = MockReporter::new();
//! reporter.command("brew install ccache");
//! reporter.success("ccache installed");
//!
//! assert!(reporter.has_command("brew install"));
//! assert!(reporter.has_success("ccache"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockReporter;
pub use output::OutputMode;
pub use terminal::TerminalReporter;
pub use theme::{should_use_colors, PrepTheme};

/// Trait for run reporting.
///
/// This trait allows capturing output in tests.
pub trait Reporter {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain status line.
    fn status(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Echo a command line right before it is spawned (or, in a dry run,
    /// instead of spawning it).
    fn command(&mut self, line: &str);

    /// Display a verbose-only detail line.
    fn detail(&mut self, msg: &str);

    /// Show the run banner.
    fn show_header(&mut self, title: &str);

    /// Show the end-of-run totals.
    fn show_summary(&mut self, summary: &RunSummary);
}

/// Why a prerequisite was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Opt-in tool that was not requested on the command line.
    NotRequested,
    /// No package-manager mapping for the current platform.
    UnsupportedPlatform,
}

impl SkipReason {
    /// Short human-readable description.
    pub fn describe(self) -> &'static str {
        match self {
            SkipReason::NotRequested => "not requested",
            SkipReason::UnsupportedPlatform => "no installer for this platform",
        }
    }
}

/// How a single prerequisite ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrereqStatus {
    /// On PATH before the run started; no installer ran.
    AlreadyPresent {
        /// Best-effort version sniff, cosmetic only.
        version: Option<String>,
    },
    /// The installer ran and exited 0.
    Installed,
    /// Dry run: the install command was shown, not executed.
    WouldInstall,
    /// Neither probed nor installed.
    Skipped { reason: SkipReason },
}

/// Outcome of one prerequisite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrereqOutcome {
    /// Binary name, as probed.
    pub name: &'static str,
    /// What happened to it.
    pub status: PrereqStatus,
}

/// Aggregated per-tool outcomes for one run, in probe order.
///
/// Reporting only; nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Per-tool outcomes, in probe order.
    pub outcomes: Vec<PrereqOutcome>,
}

impl RunSummary {
    /// Record the outcome for one tool.
    pub fn record(&mut self, name: &'static str, status: PrereqStatus) {
        self.outcomes.push(PrereqOutcome { name, status });
    }

    /// Number of tools whose installer ran.
    pub fn installed(&self) -> usize {
        self.count(|s| matches!(s, PrereqStatus::Installed))
    }

    /// Number of tools whose installer was previewed in a dry run.
    pub fn would_install(&self) -> usize {
        self.count(|s| matches!(s, PrereqStatus::WouldInstall))
    }

    /// Number of tools that were already on PATH.
    pub fn already_present(&self) -> usize {
        self.count(|s| matches!(s, PrereqStatus::AlreadyPresent { .. }))
    }

    /// Number of tools that were skipped.
    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, PrereqStatus::Skipped { .. }))
    }

    /// The status recorded for `name`, if any.
    pub fn status_of(&self, name: &str) -> Option<&PrereqStatus> {
        self.outcomes
            .iter()
            .find(|o| o.name == name)
            .map(|o| &o.status)
    }

    fn count(&self, pred: impl Fn(&PrereqStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> RunSummary {
        let mut summary = RunSummary::default();
        summary.record(
            "protoc",
            PrereqStatus::AlreadyPresent {
                version: Some("25.1".to_string()),
            },
        );
        summary.record("go", PrereqStatus::Installed);
        summary.record(
            "openssl",
            PrereqStatus::Skipped {
                reason: SkipReason::NotRequested,
            },
        );
        summary.record("ccache", PrereqStatus::Installed);
        summary
    }

    #[test]
    fn summary_counts_by_status() {
        let summary = sample_summary();
        assert_eq!(summary.installed(), 2);
        assert_eq!(summary.already_present(), 1);
        assert_eq!(summary.skipped(), 1);
        assert_eq!(summary.would_install(), 0);
    }

    #[test]
    fn summary_preserves_probe_order() {
        let summary = sample_summary();
        let names: Vec<&str> = summary.outcomes.iter().map(|o| o.name).collect();
        assert_eq!(names, vec!["protoc", "go", "openssl", "ccache"]);
    }

    #[test]
    fn status_of_finds_recorded_tools() {
        let summary = sample_summary();
        assert_eq!(summary.status_of("go"), Some(&PrereqStatus::Installed));
        assert_eq!(summary.status_of("nonexistent"), None);
    }

    #[test]
    fn dry_run_outcomes_count_as_would_install() {
        let mut summary = RunSummary::default();
        summary.record("protoc", PrereqStatus::WouldInstall);
        summary.record("go", PrereqStatus::WouldInstall);
        assert_eq!(summary.would_install(), 2);
        assert_eq!(summary.installed(), 0);
    }

    #[test]
    fn skip_reasons_have_descriptions() {
        assert_eq!(SkipReason::NotRequested.describe(), "not requested");
        assert_eq!(
            SkipReason::UnsupportedPlatform.describe(),
            "no installer for this platform"
        );
    }

    #[test]
    fn empty_summary_counts_zero() {
        let summary = RunSummary::default();
        assert_eq!(summary.installed(), 0);
        assert_eq!(summary.already_present(), 0);
        assert_eq!(summary.skipped(), 0);
    }
}
