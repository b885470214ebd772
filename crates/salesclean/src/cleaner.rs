//! Main Cleaner struct and public API.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::output::{Writer, WriterConfig};
use crate::report::CleaningReport;
use crate::summary::{TableSummary, describe};
use crate::table::Table;
use crate::transform::Pipeline;

/// Where the raw export is read from when no path is given.
pub const DEFAULT_INPUT: &str = "data/raw/sales_data_raw.csv";

/// Where the cleaned table is written when no path is given.
pub const DEFAULT_OUTPUT: &str = "data/processed/sales_data_clean.csv";

/// Configuration for loading and writing. The cleaning rules themselves
/// are fixed.
#[derive(Debug, Clone, Default)]
pub struct CleanerConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Writer configuration.
    pub writer: WriterConfig,
}

/// Result of cleaning a file.
#[derive(Debug, Clone)]
pub struct CleaningOutcome {
    /// Metadata about the input file.
    pub source: SourceMetadata,
    /// Row counts for every stage and pass.
    pub report: CleaningReport,
    /// The cleaned table, as written.
    pub table: Table,
    /// Where the cleaned table was written.
    pub output: PathBuf,
}

impl CleaningOutcome {
    /// Column types and statistics of the cleaned table.
    pub fn summary(&self) -> TableSummary {
        describe(&self.table)
    }
}

/// Loads a raw sales export, runs the cleaning pipeline and writes the result.
pub struct Cleaner {
    parser: Parser,
    pipeline: Pipeline,
    writer: Writer,
}

impl Cleaner {
    /// Create a new Cleaner with default configuration.
    pub fn new() -> Self {
        Self::with_config(CleanerConfig::default())
    }

    /// Create a Cleaner with custom configuration.
    pub fn with_config(config: CleanerConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser),
            pipeline: Pipeline::standard(),
            writer: Writer::with_config(config.writer),
        }
    }

    /// Load a raw file without cleaning it.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        self.parser.parse_file(path)
    }

    /// Run the cleaning pipeline on an in-memory table.
    pub fn clean(&self, table: Table) -> (Table, CleaningReport) {
        self.pipeline.run(table)
    }

    /// Load `input`, clean it and write the result to `output`.
    pub fn clean_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<CleaningOutcome> {
        let output = output.as_ref();

        let (raw, source) = self.load(input)?;
        let (table, report) = self.clean(raw);
        self.writer.write_file(&table, output)?;

        Ok(CleaningOutcome {
            source,
            report,
            table,
            output: output.to_path_buf(),
        })
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new()
    }
}
