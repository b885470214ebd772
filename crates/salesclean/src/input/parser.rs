//! CSV loader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use super::source::SourceMetadata;
use crate::error::{CleanError, Result};
use crate::table::{Table, Value};

/// Field contents that load as null.
///
/// These are the conventional missing-value markers written by spreadsheet
/// and dataframe exports. Matching is exact and case-sensitive.
pub const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True if the raw field is one of [`MISSING_TOKENS`].
pub fn is_missing_token(field: &str) -> bool {
    MISSING_TOKENS.contains(&field)
}

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            max_rows: None,
        }
    }
}

/// Reads delimited files into a [`Table`].
///
/// Column names are kept exactly as they appear in the header; cells are
/// loaded as text, except missing-value markers which load as null.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the table and metadata about the source.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| CleanError::io(path, e))?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| CleanError::io(path, e))?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let table = self.parse_bytes(&contents)?;

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            table.row_count(),
            table.column_count(),
        );

        info!("Loaded {} rows from {}", table.row_count(), path.display());

        Ok((table, metadata))
    }

    /// Parse in-memory bytes.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();

        if headers.is_empty() {
            return Err(CleanError::EmptyData("No header row found".to_string()));
        }

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            let row: Vec<Value> = record
                .iter()
                .map(|field| {
                    if is_missing_token(field) {
                        Value::Null
                    } else {
                        Value::text(field)
                    }
                })
                .collect();

            if row.len() != headers.len() {
                debug!(
                    "Row {} has {} fields, expected {}",
                    row_idx + 1,
                    row.len(),
                    headers.len()
                );
            }

            rows.push(row);
        }

        // Table::new pads short rows and truncates long ones.
        Ok(Table::new(headers, rows))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv() {
        let parser = Parser::new();
        let data = b"PRODNAME,Price,Qty\nWidget,10.50,2\nGadget,3,1";
        let table = parser.parse_bytes(data).unwrap();

        assert_eq!(table.headers, vec!["PRODNAME", "Price", "Qty"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some(&Value::text("Widget")));
        assert_eq!(table.get(1, 1), Some(&Value::text("3")));
    }

    #[test]
    fn test_headers_are_not_normalized() {
        let parser = Parser::new();
        let table = parser.parse_bytes(b" Prod Name ,Price\nx,1").unwrap();

        assert_eq!(table.headers, vec![" Prod Name ", "Price"]);
    }

    #[test]
    fn test_missing_tokens_load_as_null() {
        let parser = Parser::new();
        let data = b"a,b,c,d\n,NA,null,value\n";
        let table = parser.parse_bytes(data).unwrap();

        assert_eq!(table.get(0, 0), Some(&Value::Null));
        assert_eq!(table.get(0, 1), Some(&Value::Null));
        assert_eq!(table.get(0, 2), Some(&Value::Null));
        assert_eq!(table.get(0, 3), Some(&Value::text("value")));
    }

    #[test]
    fn test_is_missing_token() {
        assert!(is_missing_token(""));
        assert!(is_missing_token("NA"));
        assert!(is_missing_token("N/A"));
        assert!(is_missing_token("NaN"));
        assert!(is_missing_token("None"));
        assert!(!is_missing_token(" "));
        assert!(!is_missing_token("na"));
        assert!(!is_missing_token("0"));
        assert!(!is_missing_token("value"));
    }

    #[test]
    fn test_ragged_rows() {
        let parser = Parser::new();
        let data = b"a,b,c\n1\n1,2,3,4\n";
        let table = parser.parse_bytes(data).unwrap();

        assert_eq!(table.rows[0], vec![Value::text("1"), Value::Null, Value::Null]);
        assert_eq!(table.rows[1].len(), 3);
    }

    #[test]
    fn test_quoted_fields_keep_inner_quotes() {
        let parser = Parser::new();
        let data = b"prodname,price\n\"\"\"Deluxe\"\" Lamp\",5\n";
        let table = parser.parse_bytes(data).unwrap();

        assert_eq!(table.get(0, 0), Some(&Value::text("\"Deluxe\" Lamp")));
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let parser = Parser::new();
        let table = parser.parse_bytes(b"a,b\n").unwrap();

        assert_eq!(table.column_count(), 2);
        assert!(table.is_empty());
    }

    #[test]
    fn test_no_header_is_error() {
        let parser = Parser::new();
        assert!(matches!(
            parser.parse_bytes(b""),
            Err(CleanError::EmptyData(_))
        ));
    }

    #[test]
    fn test_max_rows() {
        let parser = Parser::with_config(ParserConfig {
            max_rows: Some(1),
            ..ParserConfig::default()
        });
        let table = parser.parse_bytes(b"a\n1\n2\n3\n").unwrap();
        assert_eq!(table.row_count(), 1);
    }
}
