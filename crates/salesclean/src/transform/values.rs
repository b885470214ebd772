//! Per-column value cleaning and type coercion.

use tracing::{debug, info};

use crate::report::CleaningReport;
use crate::table::Table;

use super::rules::{COLUMN_RULES, ColumnKind};
use super::stage::Stage;

/// Cleans text columns and coerces numeric and date columns.
///
/// Only columns named in [`COLUMN_RULES`] are touched; absent ones are
/// skipped. Cells that fail to parse become null rather than errors so the
/// row validator can drop them later. Row count never changes here.
pub struct ValueNormalizer;

impl ValueNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ValueNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for ValueNormalizer {
    fn name(&self) -> &'static str {
        "value_normalizer"
    }

    fn apply(&self, mut table: Table, _report: &mut CleaningReport) -> Table {
        for rule in COLUMN_RULES {
            for index in table.column_indices(rule.name) {
                let mut nulled = 0;
                table.map_column(index, |cell| {
                    let coerced = rule.coerce(cell);
                    if coerced.is_null() && !cell.is_null() {
                        nulled += 1;
                    }
                    coerced
                });

                if rule.kind != ColumnKind::Text {
                    debug!("Coerced '{}': {} unparseable value(s) set to null", rule.name, nulled);
                }
            }
        }

        info!("After handling missing values: {} rows", table.row_count());
        table
    }
}
