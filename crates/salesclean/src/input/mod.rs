//! Loading raw CSV files into a [`Table`](crate::table::Table).

mod parser;
mod source;

pub use parser::{MISSING_TOKENS, Parser, ParserConfig, is_missing_token};
pub use source::SourceMetadata;
