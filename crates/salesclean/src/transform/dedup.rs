//! Exact duplicate removal.

use indexmap::IndexSet;
use tracing::info;

use crate::report::CleaningReport;
use crate::table::Table;

use super::stage::Stage;

/// Keeps the first of every group of rows that are equal across all columns.
///
/// Rows are compared on their normalized values, so two raw rows that differ
/// only in case or surrounding whitespace of a text column collapse here.
/// Nulls compare equal to each other.
pub struct Deduplicator;

impl Deduplicator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Deduplicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for Deduplicator {
    fn name(&self) -> &'static str {
        "deduplicator"
    }

    fn apply(&self, mut table: Table, report: &mut CleaningReport) -> Table {
        let before = table.row_count();

        // IndexSet keeps the first insertion of each row and its position.
        let unique: IndexSet<_> = std::mem::take(&mut table.rows).into_iter().collect();
        table.rows = unique.into_iter().collect();

        let dropped = before - table.row_count();
        info!("Dropped {} duplicate rows", dropped);
        report.add_pass("duplicate", "duplicate", dropped, table.row_count());

        info!(
            "Final clean dataset: {} rows (removed {} total)",
            table.row_count(),
            report.total_dropped()
        );

        table
    }
}
