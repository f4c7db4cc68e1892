//! Summary reporting module
//!
//! Holds the per-file results of a run and renders them as either the
//! line-per-file listing or the File / Duration / Size table.

use std::path::PathBuf;

use crate::config::ReportLayout;
use crate::error::CoreResult;
use crate::table::{self, TableRow};
use crate::utils::{UNKNOWN_DISPLAY, format_bytes, format_duration, format_duration_compact};

/// Table columns that are padded on the left: Duration and Size.
const RIGHT_JUSTIFIED_COLUMNS: [usize; 2] = [1, 2];

/// Result for a single input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path exactly as given on the command line
    pub path: PathBuf,

    /// Whole seconds, or [`crate::probe::UNKNOWN_DURATION`]
    pub duration: i64,

    /// Size in bytes; `None` when not looked up or not readable
    pub size: Option<u64>,
}

impl FileEntry {
    #[must_use]
    pub fn has_known_duration(&self) -> bool {
        self.duration >= 0
    }
}

/// Results of a run in input order, with running totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub entries: Vec<FileEntry>,

    /// Sum of all known durations; unknown ones contribute nothing
    pub total_duration: i64,

    /// Sum of all known sizes
    pub total_size: u64,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and folds it into the totals.
    pub fn push(&mut self, entry: FileEntry) {
        if entry.has_known_duration() {
            self.total_duration = self.total_duration.saturating_add(entry.duration);
        }
        if let Some(size) = entry.size {
            self.total_size = self.total_size.saturating_add(size);
        }
        self.entries.push(entry);
    }

    pub fn render(&self, layout: ReportLayout) -> CoreResult<String> {
        match layout {
            ReportLayout::Basic => Ok(self.render_basic()),
            ReportLayout::Table => self.render_table(),
        }
    }

    /// `<HH:MM:SS> - <path>` per file, then the total duration on its own line.
    #[must_use]
    pub fn render_basic(&self) -> String {
        let mut lines: Vec<String> = self
            .entries
            .iter()
            .map(|entry| {
                format!(
                    "{} - {}",
                    format_duration(entry.duration),
                    entry.path.display()
                )
            })
            .collect();
        lines.push(format_duration(self.total_duration));
        lines.join("\n")
    }

    /// Header, separator, one row per file, separator, TOTAL row.
    pub fn render_table(&self) -> CoreResult<String> {
        let mut rows = Vec::with_capacity(self.entries.len() + 4);
        rows.push(TableRow::cells(["File ", " Duration", " Size"]));
        rows.push(TableRow::Separator);

        for entry in &self.entries {
            let size = entry
                .size
                .map(format_bytes)
                .unwrap_or_else(|| UNKNOWN_DISPLAY.to_string());
            rows.push(TableRow::cells([
                format!("{} ", entry.path.display()),
                format!(" {}", format_duration_compact(entry.duration)),
                format!(" {size}"),
            ]));
        }

        rows.push(TableRow::Separator);
        rows.push(TableRow::cells([
            "TOTAL ".to_string(),
            format!(" {}", format_duration_compact(self.total_duration)),
            format!(" {}", format_bytes(self.total_size)),
        ]));

        table::render(&rows, &RIGHT_JUSTIFIED_COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::UNKNOWN_DURATION;

    fn entry(path: &str, duration: i64, size: Option<u64>) -> FileEntry {
        FileEntry {
            path: PathBuf::from(path),
            duration,
            size,
        }
    }

    #[test]
    fn test_totals_skip_unknown_values() {
        let mut report = Report::new();
        report.push(entry("a.mp4", 90, Some(100)));
        report.push(entry("b.mp4", UNKNOWN_DURATION, Some(50)));
        report.push(entry("c.mp4", 30, None));

        assert_eq!(report.total_duration, 120);
        assert_eq!(report.total_size, 150);
        assert_eq!(report.entries.len(), 3);
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let mut report = Report::new();
        report.push(entry("a.mkv", i64::MAX, None));
        report.push(entry("b.mkv", i64::MAX, Some(u64::MAX)));
        report.push(entry("c.mkv", 10, Some(1)));

        assert_eq!(report.total_duration, i64::MAX);
        assert_eq!(report.total_size, u64::MAX);
    }

    #[test]
    fn test_render_basic() {
        let mut report = Report::new();
        report.push(entry("file1.mp4", 90, None));
        report.push(entry("file2.mp4", UNKNOWN_DURATION, None));

        assert_eq!(
            report.render_basic(),
            "00:01:30 - file1.mp4\n??? - file2.mp4\n00:01:30"
        );
    }

    #[test]
    fn test_render_basic_empty() {
        assert_eq!(Report::new().render_basic(), "00:00:00");
    }

    #[test]
    fn test_render_table() {
        let mut report = Report::new();
        report.push(entry("file1.mp4", 90, Some(1536)));
        report.push(entry("file2.mp4", UNKNOWN_DURATION, Some(2048)));

        let expected = [
            "File      | Duration|    Size",
            "----------|---------|--------",
            "file1.mp4 |    01:30| 1.5 KiB",
            "file2.mp4 |      ???| 2.0 KiB",
            "----------|---------|--------",
            "TOTAL     |    01:30| 3.5 KiB",
        ]
        .join("\n");
        assert_eq!(report.render_table().unwrap(), expected);
    }

    #[test]
    fn test_render_table_unknown_size_and_long_total() {
        let mut report = Report::new();
        report.push(entry("long.mkv", 7200, None));
        report.push(entry("short.mkv", 5, Some(10)));

        let expected = [
            "File      | Duration|     Size",
            "----------|---------|---------",
            "long.mkv  | 02:00:00|      ???",
            "short.mkv |    00:05| 10 Bytes",
            "----------|---------|---------",
            "TOTAL     | 02:00:05| 10 Bytes",
        ]
        .join("\n");
        assert_eq!(report.render_table().unwrap(), expected);
    }

    #[test]
    fn test_render_dispatches_on_layout() {
        let mut report = Report::new();
        report.push(entry("x.mp4", 61, Some(1)));

        assert_eq!(
            report.render(ReportLayout::Basic).unwrap(),
            report.render_basic()
        );
        assert_eq!(
            report.render(ReportLayout::Table).unwrap(),
            report.render_table().unwrap()
        );
    }
}
