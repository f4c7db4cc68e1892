//! Configuration structures and constants for the vidlen-core library.
//!
//! This module provides the settings that drive a report run: which ffprobe
//! executable to launch and which report layout to render.

mod builder;

use std::path::PathBuf;

pub use builder::CoreConfigBuilder;

// Default constants

/// Default ffprobe executable, resolved through `PATH`.
pub const DEFAULT_FFPROBE_PATH: &str = "ffprobe";

/// Environment variable the CLI reads to override the ffprobe executable.
pub const FFPROBE_PATH_ENV: &str = "VIDLEN_FFPROBE";

/// Layout of the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportLayout {
    /// One `<duration> - <file>` line per file followed by the total duration.
    Basic,
    /// Aligned File / Duration / Size table with a TOTAL row.
    #[default]
    Table,
}

impl ReportLayout {
    /// Whether this layout shows file sizes, which requires a stat per file.
    #[must_use]
    pub fn includes_size(self) -> bool {
        matches!(self, ReportLayout::Table)
    }
}

/// Main configuration structure for the vidlen-core library.
///
/// Typically created by the CLI from its arguments and passed to
/// [`crate::reporting::run_report`].
///
/// # Examples
///
/// ```rust
/// use vidlen_core::config::{CoreConfigBuilder, ReportLayout};
///
/// let config = CoreConfigBuilder::new()
///     .ffprobe_path("/usr/local/bin/ffprobe")
///     .layout(ReportLayout::Basic)
///     .build();
/// assert_eq!(config.layout, ReportLayout::Basic);
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// ffprobe executable to launch for every input file
    pub ffprobe_path: PathBuf,

    /// Report layout to render
    pub layout: ReportLayout,
}
