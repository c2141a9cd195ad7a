//! plugin-setup - post-generation setup for napari plugin projects
//!
//! Run by the template generator right after it writes a new project:
//! validates names and the manifest, bootstraps git, and prints what to do
//! next.

mod cli;
mod output;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;
use output::{ConsoleReporter, ConsoleStyle};
use plugin_setup_core::manifest::SchemaSupport;
use plugin_setup_core::platform::HostEnvironment;
use plugin_setup_core::process::SystemRunner;
use plugin_setup_core::report::{Reporter, Verbosity};
use plugin_setup_core::setup;

fn main() -> ExitCode {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let work_dir = Utf8PathBuf::try_from(cwd).context("Current directory is not valid UTF-8")?;

    let options = cli.to_options(work_dir);
    let reporter = ConsoleReporter::new(Verbosity::from_flags(cli.quiet, cli.verbose));
    let schema = SchemaSupport::resolve();
    debug!(
        "Working directory {}, manifest schema available: {}",
        options.work_dir,
        schema.is_available()
    );

    match setup::run(
        &options,
        &SystemRunner::new(),
        &reporter,
        &schema,
        HostEnvironment::detect(),
    ) {
        Ok(report) => {
            println!();
            print!("{}", report.outcome.guide().render(&ConsoleStyle));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            reporter.error(&e.to_string());
            if let Some(hint) = e.hint() {
                eprintln!("  {}", hint);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Initialize tracing with appropriate verbosity
///
/// Diagnostics go to stderr so stdout carries only the guide and progress.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
