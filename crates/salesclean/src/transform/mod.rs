//! The cleaning stages and the pipeline that runs them.

mod columns;
mod dates;
mod dedup;
mod pipeline;
mod rules;
mod stage;
mod validate;
mod values;

pub use columns::{ColumnNormalizer, normalize_column_name};
pub use dates::parse_datetime;
pub use dedup::Deduplicator;
pub use pipeline::Pipeline;
pub use rules::{
    COLUMN_RULES, ColumnKind, ColumnRule, Validity, coerce_datetime, coerce_number,
    normalize_text, positive_rules, rule_for,
};
pub use stage::Stage;
pub use validate::RowValidator;
pub use values::ValueNormalizer;
