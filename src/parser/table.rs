//! Pipe-delimited table parsing.

use super::{ParseReport, RowPolicy};
use crate::model::Table;

/// Minimum block size: header, separator and one data row.
const MIN_TABLE_LINES: usize = 3;

/// Separator prefix that marks a line as a rule rather than a data row.
const SEPARATOR_PREFIX: &str = "|---";

/// Split one table line into trimmed cells.
///
/// Surrounding whitespace and one leading and one trailing `|` are removed
/// before splitting on `|`.
pub fn split_cells(line: &str) -> Vec<String> {
    let inner = line.trim();
    let inner = inner.strip_prefix('|').unwrap_or(inner);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner
        .trim()
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Parse a contiguous block of `|`-prefixed lines into a table.
///
/// Line 0 is the header, line 1 the separator (skipped unvalidated), the rest
/// data rows. Returns `None` for blocks shorter than three lines and for
/// tables where no data row survives the row policy. Never fails.
pub fn parse_table(lines: &[&str], policy: RowPolicy) -> (Option<Table>, ParseReport) {
    let mut report = ParseReport::default();

    if lines.len() < MIN_TABLE_LINES {
        log::debug!("discarding {}-line table block", lines.len());
        report.discarded_tables += 1;
        return (None, report);
    }

    let mut table = Table::new(split_cells(lines[0]));
    let width = table.column_count();

    for line in &lines[2..] {
        if line.trim().is_empty() || line.starts_with(SEPARATOR_PREFIX) {
            continue;
        }

        let cells = split_cells(line);
        let cells = match table.push_row(cells) {
            Ok(()) => continue,
            Err(cells) => cells,
        };

        match policy {
            RowPolicy::Drop => {
                log::debug!(
                    "dropping table row with {} cells (header has {})",
                    cells.len(),
                    width
                );
                report.dropped_rows += 1;
            }
            RowPolicy::Pad => {
                let mut cells = cells;
                cells.resize(width, String::new());
                report.padded_rows += 1;
                // resized to the header width, cannot be rejected
                let _ = table.push_row(cells);
            }
            RowPolicy::Reject => {
                log::debug!(
                    "rejecting table: row with {} cells (header has {})",
                    cells.len(),
                    width
                );
                report.discarded_tables += 1;
                return (None, report);
            }
        }
    }

    if table.is_empty() {
        log::debug!("discarding table without data rows");
        report.discarded_tables += 1;
        return (None, report);
    }

    (Some(table), report)
}
