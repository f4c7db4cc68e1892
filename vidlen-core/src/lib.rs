//! Core library for reporting media durations using ffprobe.
//!
//! This crate launches one ffprobe process per input file, all of them up
//! front, then collects their JSON output in input order, extracts each
//! file's duration and renders either a line-per-file listing or an aligned
//! File / Duration / Size table.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidlen_core::config::{CoreConfigBuilder, ReportLayout};
//! use std::path::PathBuf;
//!
//! let config = CoreConfigBuilder::new()
//!     .layout(ReportLayout::Table)
//!     .build();
//!
//! let files = vec![PathBuf::from("intro.mp4"), PathBuf::from("episode1.mkv")];
//! let rendered = vidlen_core::run_report(&config, &files).unwrap();
//! println!("{rendered}");
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod probe;
pub mod reporting;
pub mod table;
pub mod utils;

// Re-exports for public API
pub use config::{CoreConfig, CoreConfigBuilder, ReportLayout};
pub use error::{CoreError, CoreResult};
pub use probe::{UNKNOWN_DURATION, parse_duration};
pub use reporting::{FileEntry, Report, collect_report, run_report};
pub use table::TableRow;
pub use utils::{format_bytes, format_duration, format_duration_compact};
