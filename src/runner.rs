//! The linear bootstrap routine.
//!
//! One pass over the prerequisite registry (probe, then install what is
//! missing), followed by the unconditional pip step. There is no retry and
//! no rollback: the first installer that fails ends the run, and its exit
//! code becomes the process exit code.

use crate::error::{PrepError, Result};
use crate::prereqs::{default_prereqs, version, Prereq, ToolProbe};
use crate::pydeps;
use crate::shell::{render_argv, run_install, CommandResult, InstallCommand, Platform};
use crate::ui::{PrereqStatus, Reporter, RunSummary, SkipReason};

/// Options for a bootstrap run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Install OpenSSL (opt-in, off by default).
    pub install_openssl: bool,

    /// Show installer commands without executing them.
    pub dry_run: bool,

    /// Path handed to `pip install -r`. Never opened by prepkit itself;
    /// a missing manifest surfaces as pip's own failure.
    pub manifest: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            install_openssl: false,
            dry_run: false,
            manifest: pydeps::DEFAULT_MANIFEST.to_string(),
        }
    }
}

/// Mockable dependencies for the bootstrap routine.
pub struct ExecContext<'a> {
    /// Run an installer command with inherited stdio.
    pub run_install: &'a dyn Fn(&InstallCommand) -> Result<CommandResult>,

    /// Best-effort version lookup for an already-present tool.
    pub sniff_version: &'a dyn Fn(&Prereq) -> Option<String>,

    /// Whether the process already holds administrative rights.
    pub is_elevated: &'a dyn Fn() -> bool,
}

/// Build the default `ExecContext` for production use.
pub fn default_context() -> ExecContext<'static> {
    ExecContext {
        run_install: &|cmd| run_install(cmd),
        sniff_version: &|prereq| version::sniff(prereq.name, prereq.version_arg),
        is_elevated: &|| crate::shell::is_elevated(),
    }
}

/// Run the full bootstrap sequence.
///
/// Probes and installs each prerequisite in registry order, then installs
/// the pinned Python dependencies. Returns the per-tool summary, which has
/// also been handed to the reporter by the time this returns.
pub fn run(
    options: &RunOptions,
    platform: Platform,
    probe: &ToolProbe,
    ctx: &ExecContext<'_>,
    reporter: &mut dyn Reporter,
) -> Result<RunSummary> {
    reporter.show_header("Preparing desktop SDK build prerequisites");
    if options.dry_run {
        reporter.status("Dry run: commands are shown, not executed");
    }
    tracing::debug!("platform: {}", platform);

    let mut summary = RunSummary::default();

    for prereq in default_prereqs() {
        let status = handle_prereq(&prereq, options, platform, probe, ctx, reporter)?;
        summary.record(prereq.name, status);
    }

    install_python_deps(options, probe, ctx, reporter)?;

    reporter.show_summary(&summary);
    Ok(summary)
}

/// Probe one tool and install it if missing.
fn handle_prereq(
    prereq: &Prereq,
    options: &RunOptions,
    platform: Platform,
    probe: &ToolProbe,
    ctx: &ExecContext<'_>,
    reporter: &mut dyn Reporter,
) -> Result<PrereqStatus> {
    if prereq.opt_in && !options.install_openssl {
        tracing::debug!("{} is opt-in and was not requested", prereq.name);
        reporter.detail(&format!(
            "{} skipped (pass --{} to install)",
            prereq.name, prereq.name
        ));
        return Ok(PrereqStatus::Skipped {
            reason: SkipReason::NotRequested,
        });
    }

    if probe.is_installed(prereq.name) {
        let version = (ctx.sniff_version)(prereq);
        tracing::debug!("{} already on PATH", prereq.name);
        let line = match &version {
            Some(v) => format!("{} {} already installed", prereq.name, v),
            None => format!("{} already installed", prereq.name),
        };
        reporter.success(&line);
        return Ok(PrereqStatus::AlreadyPresent { version });
    }

    let Some(install) = prereq.install_command(platform) else {
        tracing::debug!("no {} installer for platform {}", prereq.name, platform);
        reporter.detail(&format!(
            "{} skipped ({})",
            prereq.name,
            SkipReason::UnsupportedPlatform.describe()
        ));
        return Ok(PrereqStatus::Skipped {
            reason: SkipReason::UnsupportedPlatform,
        });
    };

    let command_line = render_argv(&install.effective_argv((ctx.is_elevated)()));
    reporter.command(&command_line);

    if options.dry_run {
        return Ok(PrereqStatus::WouldInstall);
    }

    let result = (ctx.run_install)(&install)?;
    if !result.success {
        return Err(PrepError::CommandFailed {
            command: command_line,
            code: result.exit_code,
        });
    }

    reporter.success(&format!("{} installed", prereq.name));
    Ok(PrereqStatus::Installed)
}

/// The unconditional pip step: runs on every platform, after the tool
/// installs, whether or not any tool work happened.
fn install_python_deps(
    options: &RunOptions,
    probe: &ToolProbe,
    ctx: &ExecContext<'_>,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let interpreter = pydeps::pick_interpreter(probe);
    tracing::debug!("python interpreter: {}", interpreter);

    let install = pydeps::pip_install_command(interpreter, &options.manifest);
    let command_line = render_argv(&install.effective_argv((ctx.is_elevated)()));
    reporter.command(&command_line);

    if options.dry_run {
        return Ok(());
    }

    let result = (ctx.run_install)(&install)?;
    if !result.success {
        return Err(PrepError::CommandFailed {
            command: command_line,
            code: result.exit_code,
        });
    }

    reporter.success("Python dependencies installed");
    Ok(())
}
