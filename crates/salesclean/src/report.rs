//! Row-count bookkeeping for a pipeline run.

use serde::{Deserialize, Serialize};

/// Row counts before and after one pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRecord {
    /// Stage name, e.g. `column_normalizer`.
    pub stage: String,
    pub rows_in: usize,
    pub rows_out: usize,
}

/// One row-filtering pass and how many rows it removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassRecord {
    /// Machine name, e.g. `non_positive_price`.
    pub name: String,
    /// Human-readable reason, e.g. `non-positive price`.
    pub reason: String,
    /// Rows removed relative to the previous pass.
    pub rows_dropped: usize,
    /// Rows left after this pass.
    pub rows_remaining: usize,
}

/// Summary of a pipeline run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleaningReport {
    /// Rows handed to the pipeline.
    pub rows_loaded: usize,
    /// Column names after normalization.
    pub columns: Vec<String>,
    /// Per-stage row counts, in execution order.
    pub stages: Vec<StageRecord>,
    /// Filtering passes, in execution order.
    pub passes: Vec<PassRecord>,
    /// Rows in the cleaned table.
    pub rows_final: usize,
}

impl CleaningReport {
    /// Create a report for a table of `rows_loaded` rows.
    pub fn new(rows_loaded: usize) -> Self {
        Self {
            rows_loaded,
            rows_final: rows_loaded,
            ..Self::default()
        }
    }

    /// Record a filtering pass.
    pub fn add_pass(
        &mut self,
        name: impl Into<String>,
        reason: impl Into<String>,
        rows_dropped: usize,
        rows_remaining: usize,
    ) {
        self.passes.push(PassRecord {
            name: name.into(),
            reason: reason.into(),
            rows_dropped,
            rows_remaining,
        });
    }

    /// Rows removed by the named pass, if it ran.
    pub fn dropped_by(&self, name: &str) -> Option<usize> {
        self.passes
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.rows_dropped)
    }

    /// Rows removed by all passes so far.
    pub fn total_dropped(&self) -> usize {
        self.passes.iter().map(|p| p.rows_dropped).sum()
    }

    /// Rows removed between load and the end of the pipeline.
    pub fn total_removed(&self) -> usize {
        self.rows_loaded.saturating_sub(self.rows_final)
    }
}
