// vidlen-cli/src/commands/report.rs
//
// Maps parsed arguments onto a CoreConfig and runs the report.

use log::debug;
use vidlen_core::CoreConfigBuilder;

use crate::cli::Cli;
use crate::error::{CliErrorContext, CliResult};

/// Runs the report for the parsed arguments and returns the text to print.
pub fn run_report(cli: &Cli) -> CliResult<String> {
    let config = CoreConfigBuilder::new()
        .ffprobe_path(&cli.ffprobe)
        .layout(cli.layout())
        .build();
    debug!(
        "Probing {} file(s) with {} ({:?} layout)",
        cli.files.len(),
        config.ffprobe_path.display(),
        config.layout
    );

    vidlen_core::run_report(&config, &cli.files).cli_context("Failed to render report")
}
