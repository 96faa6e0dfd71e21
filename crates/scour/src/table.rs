//! In-memory numeric table model.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScourError};

/// A single cell: `None` is a missing value.
pub type Cell = Option<f64>;

/// An in-memory table of named numeric columns.
///
/// Rows are stored in row-major order and always occupy a dense `0..n` index
/// range; operations that drop or append rows produce a new `Table` rather
/// than mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Ordered column names.
    columns: Vec<String>,
    /// Row data (row-major order).
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a new table from column names and row data.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { columns, rows }
    }

    /// Create an empty table with the given columns.
    pub fn with_columns(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Get the ordered column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Find a column's position by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Resolve the target column's position, failing with the list of
    /// available columns when it is absent.
    pub fn target_index(&self, target: &str) -> Result<usize> {
        self.column_index(target)
            .ok_or_else(|| ScourError::MissingTarget {
                column: target.to_string(),
                available: self.columns.clone(),
            })
    }

    /// Positions of every column other than `target`.
    pub fn feature_indices(&self, target: &str) -> Vec<usize> {
        (0..self.columns.len())
            .filter(|&i| self.columns[i] != target)
            .collect()
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Set a specific cell value.
    pub fn set(&mut self, row: usize, col: usize, value: Cell) {
        if let Some(r) = self.rows.get_mut(row) {
            if let Some(c) = r.get_mut(col) {
                *c = value;
            }
        }
    }

    /// Get a full row.
    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    /// Append a row after the last existing row.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Non-missing values of one column, in row order.
    pub fn column_values(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().filter_map(move |r| r.get(col).copied().flatten())
    }

    /// Count missing cells across the whole table.
    pub fn missing_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.iter().filter(|c| c.is_none()).count())
            .sum()
    }

    /// Count missing cells in one column.
    pub fn missing_in_column(&self, col: usize) -> usize {
        self.rows
            .iter()
            .filter(|r| r.get(col).copied().flatten().is_none())
            .count()
    }

    /// Build a new table keeping only the rows at `indices`, in the order
    /// given. Row indices are renumbered densely by construction.
    pub fn select_rows(&self, indices: &[usize]) -> Table {
        let rows = indices
            .iter()
            .filter_map(|&i| self.rows.get(i).cloned())
            .collect();
        Table::new(self.columns.clone(), rows)
    }

    /// Check whether a raw text value represents a missing/null cell.
    pub fn is_null_token(value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("na")
            || trimmed.eq_ignore_ascii_case("n/a")
            || trimmed.eq_ignore_ascii_case("nan")
            || trimmed.eq_ignore_ascii_case("null")
            || trimmed.eq_ignore_ascii_case("none")
            || trimmed == "."
            || trimmed == "-"
    }
}
