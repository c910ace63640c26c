//! Mock reporter implementation for testing.
//!
//! `MockReporter` implements the `Reporter` trait and captures all output
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use prepkit::ui::{MockReporter, Reporter};
//!
//! let mut reporter = MockReporter::new();
//! reporter.success("go already installed");
//! reporter.command("sudo apt install -y ccache");
//!
//! assert!(reporter.has_success("go"));
//! assert_eq!(reporter.commands(), &["sudo apt install -y ccache"]);
//! ```

use super::{OutputMode, Reporter, RunSummary};

/// Mock reporter implementation for testing.
///
/// Captures every call unconditionally, regardless of output mode, so tests
/// can assert on what the caller asked for rather than what a terminal
/// would have shown.
#[derive(Debug, Default)]
pub struct MockReporter {
    mode: OutputMode,
    statuses: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    commands: Vec<String>,
    details: Vec<String>,
    headers: Vec<String>,
    summaries: Vec<RunSummary>,
}

impl MockReporter {
    /// Create a new MockReporter with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockReporter with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured status lines.
    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured command echoes.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Get all captured detail lines.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured run summaries.
    pub fn summaries(&self) -> &[RunSummary] {
        &self.summaries
    }

    /// Check if a specific status line was shown.
    pub fn has_status(&self, msg: &str) -> bool {
        self.statuses.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a command echo containing `fragment` was shown.
    pub fn has_command(&self, fragment: &str) -> bool {
        self.commands.iter().any(|m| m.contains(fragment))
    }

    /// Check if a detail line containing `msg` was shown.
    pub fn has_detail(&self, msg: &str) -> bool {
        self.details.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured output.
    pub fn clear(&mut self) {
        self.statuses.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.commands.clear();
        self.details.clear();
        self.headers.clear();
        self.summaries.clear();
    }
}

impl Reporter for MockReporter {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn status(&mut self, msg: &str) {
        self.statuses.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn command(&mut self, line: &str) {
        self.commands.push(line.to_string());
    }

    fn detail(&mut self, msg: &str) {
        self.details.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_summary(&mut self, summary: &RunSummary) {
        self.summaries.push(summary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::PrereqStatus;

    #[test]
    fn mock_reporter_captures_messages() {
        let mut reporter = MockReporter::new();

        reporter.status("Probing tools");
        reporter.success("Done");
        reporter.warning("Be careful");
        reporter.error("Oops");

        assert_eq!(reporter.statuses(), &["Probing tools"]);
        assert_eq!(reporter.successes(), &["Done"]);
        assert_eq!(reporter.warnings(), &["Be careful"]);
        assert_eq!(reporter.errors(), &["Oops"]);
    }

    #[test]
    fn mock_reporter_captures_commands_and_details() {
        let mut reporter = MockReporter::new();

        reporter.command("brew install protobuf");
        reporter.detail("openssl skipped");

        assert!(reporter.has_command("brew install"));
        assert!(reporter.has_detail("openssl"));
    }

    #[test]
    fn mock_reporter_captures_headers() {
        let mut reporter = MockReporter::new();
        reporter.show_header("Preparing prerequisites");
        assert_eq!(reporter.headers(), &["Preparing prerequisites"]);
    }

    #[test]
    fn mock_reporter_captures_summaries() {
        let mut reporter = MockReporter::new();

        let mut summary = RunSummary::default();
        summary.record("protoc", PrereqStatus::Installed);
        reporter.show_summary(&summary);

        assert_eq!(reporter.summaries().len(), 1);
        assert_eq!(reporter.summaries()[0].installed(), 1);
    }

    #[test]
    fn mock_reporter_captures_regardless_of_mode() {
        let mut reporter = MockReporter::with_mode(OutputMode::Quiet);

        reporter.status("hidden on a real terminal");
        reporter.detail("also hidden");

        assert_eq!(reporter.statuses().len(), 1);
        assert_eq!(reporter.details().len(), 1);
    }

    #[test]
    fn mock_reporter_has_helpers() {
        let mut reporter = MockReporter::new();

        reporter.status("Installing go");
        reporter.success("go installed");
        reporter.error("pip failed");

        assert!(reporter.has_status("Installing"));
        assert!(reporter.has_success("go"));
        assert!(reporter.has_error("pip"));
        assert!(!reporter.has_success("not there"));
    }

    #[test]
    fn mock_reporter_output_mode() {
        let reporter = MockReporter::with_mode(OutputMode::Verbose);
        assert_eq!(reporter.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn mock_reporter_clear_resets() {
        let mut reporter = MockReporter::new();

        reporter.status("one");
        reporter.command("two");
        reporter.show_summary(&RunSummary::default());
        reporter.clear();

        assert!(reporter.statuses().is_empty());
        assert!(reporter.commands().is_empty());
        assert!(reporter.summaries().is_empty());
    }
}
