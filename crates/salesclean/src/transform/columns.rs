//! Column name normalization.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use crate::report::CleaningReport;
use crate::table::Table;

use super::stage::Stage;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Canonical form of a column name: trimmed, lowercased, and with every run
/// of whitespace replaced by a single underscore.
pub fn normalize_column_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    WHITESPACE_RUN.replace_all(&lowered, "_").into_owned()
}

/// Rewrites every column label to its canonical form.
///
/// Order and count of columns are preserved. Two labels that normalize to
/// the same name both keep it; the collision is logged, not resolved.
pub struct ColumnNormalizer;

impl ColumnNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ColumnNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for ColumnNormalizer {
    fn name(&self) -> &'static str {
        "column_normalizer"
    }

    fn apply(&self, mut table: Table, report: &mut CleaningReport) -> Table {
        let mut sources: IndexMap<String, Vec<String>> = IndexMap::new();

        for header in &mut table.headers {
            let normalized = normalize_column_name(header);
            sources
                .entry(normalized.clone())
                .or_default()
                .push(std::mem::replace(header, normalized));
        }

        for (name, raw) in sources.iter().filter(|(_, raw)| raw.len() > 1) {
            warn!("Columns {:?} all normalize to '{}'", raw, name);
        }

        info!("Cleaned column names: {:?}", table.headers);
        report.columns = table.headers.clone();

        table
    }
}
