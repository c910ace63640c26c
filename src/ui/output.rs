//! Output verbosity levels.

/// How much the terminal reporter prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Warnings and errors only.
    Quiet,

    /// Status lines, command echoes, and the final summary.
    #[default]
    Normal,

    /// Everything, including per-tool detail lines.
    Verbose,
}

impl OutputMode {
    /// Resolve the mode from CLI flags. Verbose wins if both are set.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            OutputMode::Verbose
        } else if quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }

    /// Whether ordinary status lines are shown.
    pub fn shows_info(self) -> bool {
        !matches!(self, OutputMode::Quiet)
    }

    /// Whether command echoes are shown.
    pub fn shows_commands(self) -> bool {
        !matches!(self, OutputMode::Quiet)
    }

    /// Whether verbose-only detail lines are shown.
    pub fn shows_detail(self) -> bool {
        matches!(self, OutputMode::Verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_normal() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }

    #[test]
    fn flags_resolve_with_verbose_priority() {
        assert_eq!(OutputMode::from_flags(false, false), OutputMode::Normal);
        assert_eq!(OutputMode::from_flags(true, false), OutputMode::Verbose);
        assert_eq!(OutputMode::from_flags(false, true), OutputMode::Quiet);
        assert_eq!(OutputMode::from_flags(true, true), OutputMode::Verbose);
    }

    #[test]
    fn quiet_suppresses_info_and_commands() {
        assert!(!OutputMode::Quiet.shows_info());
        assert!(!OutputMode::Quiet.shows_commands());
        assert!(!OutputMode::Quiet.shows_detail());
    }

    #[test]
    fn verbose_shows_everything() {
        assert!(OutputMode::Verbose.shows_info());
        assert!(OutputMode::Verbose.shows_commands());
        assert!(OutputMode::Verbose.shows_detail());
    }

    #[test]
    fn normal_hides_detail_only() {
        assert!(OutputMode::Normal.shows_info());
        assert!(OutputMode::Normal.shows_commands());
        assert!(!OutputMode::Normal.shows_detail());
    }
}
