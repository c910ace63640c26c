//! Prepkit CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use prepkit::cli::Cli;
use prepkit::prereqs::ToolProbe;
use prepkit::runner::{self, RunOptions};
use prepkit::shell::Platform;
use prepkit::ui::{OutputMode, Reporter, TerminalReporter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("prepkit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("prepkit=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("prepkit starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let options = RunOptions {
        install_openssl: cli.openssl,
        dry_run: cli.dry_run,
        manifest: cli.requirements.clone(),
    };

    let platform = Platform::current();
    let probe = ToolProbe::from_env();
    let ctx = runner::default_context();
    let mut reporter = TerminalReporter::new(output_mode);

    match runner::run(&options, platform, &probe, &ctx, &mut reporter) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.error(&format!("Error: {}", e));
            ExitCode::from(e.process_exit_code())
        }
    }
}
