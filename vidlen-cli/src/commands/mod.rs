//! Command implementations for the CLI.

/// Probes the given files and renders the duration report.
pub mod report;
