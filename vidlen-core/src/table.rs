//! Plain-text table rendering with pipe and dash separators.
//!
//! ```text
//! File       | Duration|      Size
//! -----------|---------|----------
//! intro.mp4  |    01:30|  12.4 MiB
//! ```
//!
//! Cells are padded to the widest cell in their column; separator rows
//! become dash runs of the same widths so the `|` characters line up.

use crate::error::{CoreError, CoreResult};
use unicode_width::UnicodeWidthStr;

/// One line of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// Display strings, one per column.
    Cells(Vec<String>),
    /// A horizontal rule between groups of rows.
    Separator,
}

impl TableRow {
    /// Builds a data row, stringifying every value.
    pub fn cells<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        TableRow::Cells(values.into_iter().map(|v| v.to_string()).collect())
    }
}

/// Computes the display width of every column across all data rows.
///
/// Fails if the data rows do not all have the same number of cells.
pub fn column_widths(rows: &[TableRow]) -> CoreResult<Vec<usize>> {
    let column_count = rows
        .iter()
        .filter_map(|row| match row {
            TableRow::Cells(cells) => Some(cells.len()),
            TableRow::Separator => None,
        })
        .max()
        .unwrap_or(0);

    let mut widths = vec![0; column_count];
    for (index, row) in rows.iter().enumerate() {
        let TableRow::Cells(cells) = row else {
            continue;
        };
        if cells.len() != column_count {
            return Err(CoreError::RaggedTable {
                row: index,
                expected: column_count,
                found: cells.len(),
            });
        }
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.width());
        }
    }

    Ok(widths)
}

/// Renders `rows` as a table. Columns whose index is in `right_justified`
/// are padded on the left, all others on the right. Rows are joined with
/// `\n` and there is no trailing newline.
///
/// Widths are terminal display columns, not character counts: a wide CJK
/// character takes two columns and a combining mark takes none.
pub fn render(rows: &[TableRow], right_justified: &[usize]) -> CoreResult<String> {
    let widths = column_widths(rows)?;

    let lines: Vec<String> = rows
        .iter()
        .map(|row| match row {
            TableRow::Separator => widths
                .iter()
                .map(|&width| "-".repeat(width))
                .collect::<Vec<_>>()
                .join("|"),
            TableRow::Cells(cells) => cells
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(column, (cell, &width))| {
                    let padding = " ".repeat(width.saturating_sub(cell.width()));
                    if right_justified.contains(&column) {
                        format!("{padding}{cell}")
                    } else {
                        format!("{cell}{padding}")
                    }
                })
                .collect::<Vec<_>>()
                .join("|"),
        })
        .collect();

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_matches_column_widths() {
        let rows = vec![
            TableRow::cells(["a", "bb"]),
            TableRow::Separator,
            TableRow::cells(["ccc", "d"]),
        ];

        assert_eq!(column_widths(&rows).unwrap(), vec![3, 2]);
        assert_eq!(render(&rows, &[]).unwrap(), "a  |bb\n---|--\nccc|d ");
    }

    #[test]
    fn test_right_justified_columns() {
        let rows = vec![
            TableRow::cells(["name", "1"]),
            TableRow::cells(["x", "100"]),
        ];

        assert_eq!(render(&rows, &[1]).unwrap(), "name|  1\nx   |100");
        assert_eq!(render(&rows, &[0, 1]).unwrap(), "name|  1\n   x|100");
    }

    #[test]
    fn test_cells_stringifies_values() {
        let rows = vec![TableRow::cells([1, 22]), TableRow::cells([333, 4])];
        assert_eq!(render(&rows, &[0]).unwrap(), "  1|22\n333|4 ");
    }

    #[test]
    fn test_ragged_rows_fail_fast() {
        let rows = vec![
            TableRow::cells(["a", "b", "c"]),
            TableRow::Separator,
            TableRow::cells(["d", "e"]),
        ];

        match render(&rows, &[]) {
            Err(CoreError::RaggedTable {
                row,
                expected,
                found,
            }) => {
                assert_eq!((row, expected, found), (2, 3, 2));
            }
            other => panic!("expected RaggedTable, got {other:?}"),
        }
    }

    #[test]
    fn test_separators_only() {
        let rows = vec![TableRow::Separator, TableRow::Separator];
        assert_eq!(render(&rows, &[]).unwrap(), "\n");
        assert_eq!(render(&[], &[]).unwrap(), "");
    }

    #[test]
    fn test_wide_characters_use_display_width() {
        let rows = vec![
            TableRow::cells(["日本.mkv", "1"]),
            TableRow::Separator,
            TableRow::cells(["a.mkv", "2"]),
        ];

        let rendered = render(&rows, &[]).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "--------|-");
        assert_eq!(lines[2], "a.mkv   |2");
    }
}
