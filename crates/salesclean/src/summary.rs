//! Column types and descriptive statistics for a table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::table::{Table, Value};

/// Descriptive statistics for a numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    /// Number of non-null values.
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` with fewer than two values.
    pub std: Option<f64>,
    pub min: f64,
    /// First quartile (25th percentile).
    pub q1: f64,
    pub median: f64,
    /// Third quartile (75th percentile).
    pub q3: f64,
    pub max: f64,
}

/// Summary of one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    /// `text`, `number`, `datetime`, `empty` (all null) or `mixed`.
    pub column_type: String,
    pub non_null: usize,
    /// Count of cells per value kind, in first-seen order.
    pub kinds: IndexMap<String, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericSummary>,
}

/// Summary of a whole table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSummary {
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
}

/// Compute column types and statistics for every column.
pub fn describe(table: &Table) -> TableSummary {
    let columns = table
        .headers
        .iter()
        .enumerate()
        .map(|(index, name)| describe_column(table, index, name))
        .collect();

    TableSummary {
        rows: table.row_count(),
        columns,
    }
}

fn describe_column(table: &Table, index: usize, name: &str) -> ColumnSummary {
    let mut kinds: IndexMap<String, usize> = IndexMap::new();
    let mut numbers = Vec::new();

    for value in table.column_values(index) {
        *kinds.entry(value.kind().to_string()).or_insert(0) += 1;
        if let Value::Number(n) = value {
            numbers.push(*n);
        }
    }

    let non_null: usize = kinds
        .iter()
        .filter(|(kind, _)| kind.as_str() != "null")
        .map(|(_, count)| count)
        .sum();

    let non_null_kinds: Vec<&str> = kinds
        .keys()
        .map(String::as_str)
        .filter(|kind| *kind != "null")
        .collect();
    let column_type = match non_null_kinds.as_slice() {
        [] => "empty".to_string(),
        [single] => single.to_string(),
        _ => "mixed".to_string(),
    };

    ColumnSummary {
        name: name.to_string(),
        column_type,
        non_null,
        kinds,
        numeric: numeric_summary(&numbers),
    }
}

/// Statistics over a set of numbers, or `None` if it is empty.
pub fn numeric_summary(values: &[f64]) -> Option<NumericSummary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;
    let std = (count > 1).then(|| {
        let variance =
            sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        variance.sqrt()
    });

    Some(NumericSummary {
        count,
        mean,
        std,
        min: sorted[0],
        q1: percentile(&sorted, 0.25),
        median: percentile(&sorted, 0.5),
        q3: percentile(&sorted, 0.75),
        max: sorted[count - 1],
    })
}

/// Linear-interpolated percentile of sorted, non-empty data.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let position = p * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;

    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
    }
}
