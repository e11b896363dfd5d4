//! Table types.

use serde::{Deserialize, Serialize};

/// A pipe-delimited table: one header row and zero or more data rows.
///
/// Every data row holds exactly `headers.len()` cells. Use
/// [`Table::push_row`] to keep the invariant; it hands back mismatched rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Header cells, in column order
    pub headers: Vec<String>,

    /// Data rows, in source order
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given header and no rows.
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row if its cell count matches the header.
    ///
    /// The row is returned unchanged when it does not fit.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), Vec<String>> {
        if row.len() == self.headers.len() {
            self.rows.push(row);
            Ok(())
        } else {
            Err(row)
        }
    }

    /// Append a row built from text values, see [`Table::push_row`].
    pub fn push_strings<S: Into<String>>(
        &mut self,
        values: impl IntoIterator<Item = S>,
    ) -> Result<(), Vec<String>> {
        self.push_row(values.into_iter().map(Into::into).collect())
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get plain text representation of the table (tab-separated).
    pub fn plain_text(&self) -> String {
        std::iter::once(&self.headers)
            .chain(self.rows.iter())
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table = Table::new(["Name", "Age"]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_push_row_keeps_invariant() {
        let mut table = Table::new(["Name", "Age"]);
        assert!(table.push_strings(["Alice", "30"]).is_ok());
        let rejected = table.push_strings(["Bob"]).unwrap_err();
        assert_eq!(rejected, vec!["Bob".to_string()]);
        assert!(table.push_strings(["Carol", "41"]).is_ok());

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[1][0], "Carol");
    }

    #[test]
    fn test_plain_text() {
        let mut table = Table::new(["A", "B"]);
        table.push_strings(["1", "2"]).unwrap();
        assert_eq!(table.plain_text(), "A\tB\n1\t2");
    }
}
