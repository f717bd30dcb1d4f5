//! Table payload for table blocks
//!
//! `TableData` keeps its headers and rows rectangular: every row always has
//! exactly one cell per header. The invariant is maintained structurally by the
//! editing operations below rather than checked after the fact.

use crate::error::{Error, Result};
use log::debug;
use serde::Serialize;

/// Header and body cells of a table block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableData {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Default for TableData {
    /// The starter table offered when a table block is being composed.
    fn default() -> Self {
        Self {
            headers: vec!["Coluna 1".to_string(), "Coluna 2".to_string()],
            rows: vec![vec!["Dados 1".to_string(), "Dados 2".to_string()]],
        }
    }
}

impl TableData {
    /// Build a table from headers and rows.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTable` if any row's cell count differs from the
    /// number of headers.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != headers.len())
        {
            return Err(Error::InvalidTable {
                row,
                expected: headers.len(),
                found: cells.len(),
            });
        }
        Ok(Self { headers, rows })
    }

    /// Column headers, in display order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Body rows, each with one cell per header.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Structural operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a column: a new header and one empty cell in every row.
    pub fn add_column(&mut self) {
        let label = format!("Coluna {}", self.headers.len() + 1);
        self.headers.push(label);
        for row in &mut self.rows {
            row.push(String::new());
        }
    }

    /// Remove the column at `index` from the headers and every row.
    ///
    /// Refuses (returns `false`) when only one column remains or the index is
    /// out of range.
    pub fn remove_column(&mut self, index: usize) -> bool {
        if self.headers.len() <= 1 || index >= self.headers.len() {
            debug!("Ignoring removal of table column {}", index);
            return false;
        }
        self.headers.remove(index);
        for row in &mut self.rows {
            row.remove(index);
        }
        true
    }

    /// Append a row with one empty cell per header.
    pub fn add_row(&mut self) {
        self.rows.push(vec![String::new(); self.headers.len()]);
    }

    /// Remove the row at `index`.
    ///
    /// Refuses (returns `false`) when only one row remains or the index is out
    /// of range.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if self.rows.len() <= 1 || index >= self.rows.len() {
            debug!("Ignoring removal of table row {}", index);
            return false;
        }
        self.rows.remove(index);
        true
    }

    /// Replace the header text at `index`. Out-of-range edits are ignored.
    pub fn set_header(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.headers.get_mut(index) {
            Some(header) => {
                *header = value.into();
                true
            }
            None => false,
        }
    }

    /// Replace a body cell. Out-of-range edits are ignored.
    pub fn set_cell(&mut self, row: usize, column: usize, value: impl Into<String>) -> bool {
        match self.rows.get_mut(row).and_then(|cells| cells.get_mut(column)) {
            Some(cell) => {
                *cell = value.into();
                true
            }
            None => false,
        }
    }

    /// Whether every row has exactly one cell per header.
    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|row| row.len() == self.headers.len())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_table() {
        let table = TableData::default();
        assert_eq!(table.headers(), strings(&["Coluna 1", "Coluna 2"]).as_slice());
        assert_eq!(table.row_count(), 1);
        assert!(table.is_rectangular());
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let err = TableData::new(
            strings(&["A", "B"]),
            vec![strings(&["1", "2"]), strings(&["3"])],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTable {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_add_column_extends_every_row() {
        let mut table = TableData::default();
        table.add_row();
        table.add_column();

        assert_eq!(table.column_count(), 3);
        assert_eq!(table.headers()[2], "Coluna 3");
        assert_eq!(table.rows()[0], strings(&["Dados 1", "Dados 2", ""]));
        assert_eq!(table.rows()[1], strings(&["", "", ""]));
    }

    #[test]
    fn test_remove_column_drops_matching_cells() {
        let mut table =
            TableData::new(strings(&["A", "B", "C"]), vec![strings(&["1", "2", "3"])]).unwrap();
        assert!(table.remove_column(1));
        assert_eq!(table.headers(), strings(&["A", "C"]).as_slice());
        assert_eq!(table.rows()[0], strings(&["1", "3"]));
    }

    #[test]
    fn test_remove_last_column_is_refused() {
        let mut table = TableData::new(strings(&["A"]), vec![strings(&["1"])]).unwrap();
        let before = table.clone();
        assert!(!table.remove_column(0));
        assert_eq!(table, before);
    }

    #[test]
    fn test_remove_last_row_is_refused() {
        let mut table = TableData::default();
        let before = table.clone();
        assert!(!table.remove_row(0));
        assert_eq!(table, before);
    }

    #[test]
    fn test_out_of_range_removals_are_ignored() {
        let mut table = TableData::default();
        table.add_row();
        table.add_column();
        let before = table.clone();
        assert!(!table.remove_column(7));
        assert!(!table.remove_row(7));
        assert_eq!(table, before);
    }

    #[test]
    fn test_rectangular_after_mixed_operations() {
        let mut table = TableData::default();
        let steps: [fn(&mut TableData); 8] = [
            |t| t.add_column(),
            |t| t.add_row(),
            |t| {
                t.remove_column(0);
            },
            |t| t.add_row(),
            |t| {
                t.remove_row(1);
            },
            |t| t.add_column(),
            |t| {
                t.remove_column(2);
            },
            |t| t.add_row(),
        ];
        for step in steps.iter().cycle().take(40) {
            step(&mut table);
            assert!(table.is_rectangular());
        }
    }

    #[test]
    fn test_set_header_and_cell() {
        let mut table = TableData::default();
        assert!(table.set_header(0, "Nome"));
        assert!(table.set_cell(0, 1, "42"));
        assert!(!table.set_header(5, "x"));
        assert!(!table.set_cell(3, 0, "x"));
        assert_eq!(table.headers()[0], "Nome");
        assert_eq!(table.rows()[0][1], "42");
    }
}
