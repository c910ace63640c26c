//! Styled terminal reporter.

use console::Term;
use std::io::Write;

use super::theme::{should_use_colors, PrepTheme};
use super::{OutputMode, Reporter, RunSummary};

/// Terminal reporter implementation.
///
/// Status lines, command echoes, and the summary go to stdout; warnings and
/// errors go to stderr so a quiet run stays silent on the happy path.
pub struct TerminalReporter {
    out: Term,
    err: Term,
    theme: PrepTheme,
    mode: OutputMode,
}

impl TerminalReporter {
    /// Create a new terminal reporter.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            PrepTheme::new()
        } else {
            PrepTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl Reporter for TerminalReporter {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn status(&mut self, msg: &str) {
        if self.mode.shows_info() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_info() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn command(&mut self, line: &str) {
        if self.mode.shows_commands() {
            writeln!(self.out, "{}", self.theme.format_command(line)).ok();
        }
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_detail() {
            writeln!(self.out, "{}", self.theme.dim.apply_to(msg)).ok();
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_info() {
            writeln!(self.out, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_summary(&mut self, summary: &RunSummary) {
        if !self.mode.shows_info() {
            return;
        }

        // Dry runs never mix with real installs, so one label suffices.
        let install_part = if summary.would_install() > 0 {
            format!("{} would install", summary.would_install())
        } else {
            format!("{} installed", summary.installed())
        };

        writeln!(self.out).ok();
        writeln!(
            self.out,
            "{} {} {} already present {} {} skipped",
            self.theme.highlight.apply_to(install_part),
            self.theme.dim.apply_to("·"),
            summary.already_present(),
            self.theme.dim.apply_to("·"),
            summary.skipped(),
        )
        .ok();
    }
}
