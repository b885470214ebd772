//! Ordered composition of stages.

use tracing::debug;

use crate::report::{CleaningReport, StageRecord};
use crate::table::Table;

use super::columns::ColumnNormalizer;
use super::dedup::Deduplicator;
use super::stage::Stage;
use super::validate::RowValidator;
use super::values::ValueNormalizer;

/// A fixed, ordered list of stages run one after another on a single table.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// The sales cleaning pipeline: column names, values, validity, duplicates.
    pub fn standard() -> Self {
        Self {
            stages: vec![
                Box::new(ColumnNormalizer::new()),
                Box::new(ValueNormalizer::new()),
                Box::new(RowValidator::new()),
                Box::new(Deduplicator::new()),
            ],
        }
    }

    /// Names of the stages, in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage in order and return the cleaned table with its report.
    pub fn run(&self, table: Table) -> (Table, CleaningReport) {
        let mut report = CleaningReport::new(table.row_count());

        let table = self.stages.iter().fold(table, |table, stage| {
            let rows_in = table.row_count();
            debug!("Running stage '{}' on {} rows", stage.name(), rows_in);

            let table = stage.apply(table, &mut report);

            report.stages.push(StageRecord {
                stage: stage.name().to_string(),
                rows_in,
                rows_out: table.row_count(),
            });
            table
        });

        report.rows_final = table.row_count();
        (table, report)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;

    #[test]
    fn test_stage_order() {
        assert_eq!(
            Pipeline::standard().stage_names(),
            vec!["column_normalizer", "value_normalizer", "row_validator", "deduplicator"]
        );
    }

    #[test]
    fn test_full_run() {
        let table = Table::from_strings(
            ["PRODNAME", "Category", "Price", "Qty", "Date_Sold"],
            [
                ["  Widget ", "TOYS", "10.50", "2", "2024-01-05"],
                ["Gadget", "Tools", "abc", "1", "2024-01-06"],
                ["Gizmo", "Tools", "4", "-5", "2024-01-07"],
                ["widget", "toys ", "10.5", "2", "2024-01-05"],
            ],
        );

        let (table, report) = Pipeline::standard().run(table);

        assert_eq!(table.headers, vec!["prodname", "category", "price", "qty", "date_sold"]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows[0][0], Value::text("widget"));
        assert_eq!(table.rows[0][2], Value::Number(10.5));

        assert_eq!(report.rows_loaded, 4);
        assert_eq!(report.rows_final, 1);
        assert_eq!(report.dropped_by("missing_required"), Some(1));
        assert_eq!(report.dropped_by("non_positive_price"), Some(0));
        assert_eq!(report.dropped_by("non_positive_qty"), Some(1));
        assert_eq!(report.dropped_by("duplicate"), Some(1));
        assert_eq!(report.total_removed(), 3);

        let stages: Vec<(usize, usize)> = report
            .stages
            .iter()
            .map(|s| (s.rows_in, s.rows_out))
            .collect();
        assert_eq!(stages, vec![(4, 4), (4, 4), (4, 2), (2, 1)]);
    }
}
