//! Row validity filtering.

use tracing::info;

use crate::report::CleaningReport;
use crate::table::{Table, Value};

use super::rules::{ColumnRule, positive_rules};
use super::stage::Stage;

/// Drops rows whose required numeric columns are missing or not positive.
///
/// Passes run in a fixed order and each reports how many rows it removed
/// relative to the one before:
///
/// 1. any required column (`price`, `qty`) is null
/// 2. `price` is not strictly greater than zero
/// 3. `qty` is not strictly greater than zero
///
/// A required column that is absent from the table is skipped by every pass.
pub struct RowValidator;

impl RowValidator {
    pub fn new() -> Self {
        Self
    }

    fn drop_missing(&self, table: &mut Table, report: &mut CleaningReport) {
        let rules: Vec<&ColumnRule> = positive_rules().collect();
        let indices: Vec<usize> = rules
            .iter()
            .flat_map(|rule| table.column_indices(rule.name))
            .collect();

        let dropped = table.retain_rows(|row| indices.iter().all(|&i| !row[i].is_null()));

        let names: Vec<&str> = rules.iter().map(|rule| rule.name).collect();
        let reason = format!("missing {}", names.join("/"));
        info!("Dropped {} rows with {}", dropped, reason);
        report.add_pass("missing_required", reason, dropped, table.row_count());
    }

    fn drop_non_positive(
        &self,
        rule: &ColumnRule,
        table: &mut Table,
        report: &mut CleaningReport,
    ) {
        let indices = table.column_indices(rule.name);

        let dropped = table.retain_rows(|row| indices.iter().all(|&i| is_positive(&row[i])));

        let reason = format!("non-positive {}", rule.name);
        info!("Dropped {} rows with {}", dropped, reason);
        report.add_pass(
            format!("non_positive_{}", rule.name),
            reason,
            dropped,
            table.row_count(),
        );
    }
}

impl Default for RowValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for RowValidator {
    fn name(&self) -> &'static str {
        "row_validator"
    }

    fn apply(&self, mut table: Table, report: &mut CleaningReport) -> Table {
        self.drop_missing(&mut table, report);
        for rule in positive_rules() {
            self.drop_non_positive(rule, &mut table, report);
        }
        table
    }
}

/// Strictly greater than zero. Nulls and non-numeric cells fail.
fn is_positive(value: &Value) -> bool {
    value.as_number().is_some_and(|n| n > 0.0)
}
