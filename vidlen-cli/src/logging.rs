// ============================================================================
// vidlen-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger configuration for the CLI
//
// Log records go to stderr so they never mix with the report on stdout.
//
// USAGE:
// - default: warnings only (failed probes, unreadable files)
// - --verbose: debug output, including ffprobe's stderr
// - RUST_LOG overrides both, e.g. RUST_LOG=vidlen_core=trace

use console::style;
use env_logger::Env;
use log::{Level, LevelFilter};
use std::io::Write;

/// Initializes the global logger. Safe to call once per process.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format(|buf, record| {
            let label = match record.level() {
                Level::Error => style("ERROR").red().bold(),
                Level::Warn => style("WARN ").yellow(),
                Level::Info => style("INFO ").green(),
                Level::Debug => style("DEBUG").blue(),
                Level::Trace => style("TRACE").magenta(),
            };
            writeln!(buf, "{} {}", label.for_stderr(), record.args())
        })
        .init();

    log::debug!("Logger initialized with level: {}", level);
}
