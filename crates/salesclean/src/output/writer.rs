//! CSV writer for cleaned tables.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{CleanError, Result};
use crate::table::{Table, Value, format_datetime, is_midnight};

/// Writer configuration.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Create missing parent directories of the output path.
    pub create_dirs: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            create_dirs: true,
        }
    }
}

/// Serializes a [`Table`] as delimited text.
///
/// Nulls are written as empty fields. Numbers drop a zero fractional part.
/// A date column whose values all fall on midnight is written date-only.
pub struct Writer {
    config: WriterConfig,
}

impl Writer {
    pub fn new() -> Self {
        Self {
            config: WriterConfig::default(),
        }
    }

    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Write the table to a file, replacing it if it exists.
    pub fn write_file(&self, table: &Table, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if self.config.create_dirs {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| CleanError::io(parent, e))?;
            }
        }

        let file = fs::File::create(path).map_err(|e| CleanError::io(path, e))?;
        self.write(table, file)?;

        info!("Cleaned data written to {}", path.display());
        Ok(())
    }

    /// Write the table to any writer.
    pub fn write<W: Write>(&self, table: &Table, out: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.config.delimiter)
            .from_writer(out);

        writer.write_record(&table.headers)?;

        let date_only = date_only_columns(table);
        for row in &table.rows {
            let record: Vec<String> = row
                .iter()
                .zip(&date_only)
                .map(|(cell, &date_only)| render_cell(cell, date_only))
                .collect();
            writer.write_record(&record)?;
        }

        writer.flush().map_err(|e| CleanError::Csv(e.into()))?;
        Ok(())
    }

    /// Render the table to a string.
    pub fn write_string(&self, table: &Table) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(table, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// For each column, whether every date/time without offset in it is at
/// midnight. Values with an offset always keep their time and offset.
fn date_only_columns(table: &Table) -> Vec<bool> {
    (0..table.column_count())
        .map(|index| {
            table
                .column_values(index)
                .filter_map(Value::as_datetime)
                .all(|dt| is_midnight(&dt))
        })
        .collect()
}

fn render_cell(cell: &Value, date_only: bool) -> String {
    match cell {
        Value::DateTime(dt) => format_datetime(dt, date_only),
        other => other.to_text(),
    }
}
