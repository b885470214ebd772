//! The pipeline stage abstraction.

use crate::report::CleaningReport;
use crate::table::Table;

/// One step of the cleaning pipeline.
///
/// A stage takes ownership of the table, transforms it, and hands it back.
/// Stages never fail: anything a stage cannot interpret is turned into a
/// null or passed through, and row counts go into the report.
pub trait Stage {
    /// Short machine name, used in reports and logs.
    fn name(&self) -> &'static str;

    /// Transform the table.
    fn apply(&self, table: Table, report: &mut CleaningReport) -> Table;
}
