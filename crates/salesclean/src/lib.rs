//! salesclean: turns raw sales exports into analysis-ready tables.
//!
//! A fixed pipeline of four stages runs over one in-memory table:
//!
//! 1. **Column normalization**: labels are trimmed, lowercased and have
//!    whitespace runs replaced by `_`.
//! 2. **Value normalization**: `prodname`/`category` are cleaned as text,
//!    `price`/`qty` parsed as numbers and `date_sold` as a date. Anything
//!    unparseable becomes null.
//! 3. **Row validation**: rows with a null or non-positive `price`/`qty`
//!    are dropped, one pass at a time.
//! 4. **Deduplication**: only the first of each set of identical rows is kept.
//!
//! # Example
//!
//! ```no_run
//! use salesclean::Cleaner;
//!
//! let cleaner = Cleaner::new();
//! let outcome = cleaner
//!     .clean_file("data/raw/sales_data_raw.csv", "data/processed/sales_data_clean.csv")
//!     .unwrap();
//!
//! println!("Kept {} of {} rows", outcome.report.rows_final, outcome.report.rows_loaded);
//! ```

pub mod error;
pub mod input;
pub mod output;
pub mod report;
pub mod summary;
pub mod table;
pub mod transform;

mod cleaner;

pub use crate::cleaner::{Cleaner, CleanerConfig, CleaningOutcome, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use error::{CleanError, Result};
pub use input::{Parser, ParserConfig, SourceMetadata};
pub use output::{Writer, WriterConfig};
pub use report::{CleaningReport, PassRecord, StageRecord};
pub use summary::{ColumnSummary, NumericSummary, TableSummary, describe};
pub use table::{Table, Value};
pub use transform::{
    ColumnNormalizer, Deduplicator, Pipeline, RowValidator, Stage, ValueNormalizer,
    normalize_column_name,
};
