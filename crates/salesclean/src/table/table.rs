//! In-memory table flowing through the cleaning pipeline.

use super::value::Value;

/// Tabular data: an ordered list of column names and row-major cells.
///
/// Every row has exactly `headers.len()` cells. Column labels are not
/// required to be unique; lookups by name return every matching index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Column names, in input order.
    pub headers: Vec<String>,
    /// Row data (row-major order).
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create a table, padding short rows with nulls and truncating long ones.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Value::Null);
                row
            })
            .collect();

        Self { headers, rows }
    }

    /// Build a table from string cells. Empty strings become nulls.
    pub fn from_strings<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let headers = headers.into_iter().map(Into::into).collect();
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| {
                        let cell = cell.as_ref();
                        if cell.is_empty() {
                            Value::Null
                        } else {
                            Value::text(cell)
                        }
                    })
                    .collect()
            })
            .collect();

        Self::new(headers, rows)
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column with the given name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Indices of every column with the given name.
    pub fn column_indices(&self, name: &str) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, h)| *h == name)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    /// Get the first column with the given name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<&Value>> {
        let index = self.column_index(name)?;
        Some(self.column_values(index).collect())
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Replace every cell of a column with `f(cell)`.
    pub fn map_column(&mut self, index: usize, mut f: impl FnMut(&Value) -> Value) {
        for row in &mut self.rows {
            if let Some(cell) = row.get_mut(index) {
                *cell = f(cell);
            }
        }
    }

    /// Keep only rows for which `keep` returns true, preserving order.
    /// Returns the number of rows removed.
    pub fn retain_rows(&mut self, mut keep: impl FnMut(&[Value]) -> bool) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| keep(row));
        before - self.rows.len()
    }

    /// A copy of the first `n` rows.
    pub fn head(&self, n: usize) -> Table {
        Table {
            headers: self.headers.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}
