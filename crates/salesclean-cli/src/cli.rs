//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use salesclean::{CleanerConfig, DEFAULT_INPUT, DEFAULT_OUTPUT, ParserConfig};

/// salesclean: clean raw sales exports into analysis-ready CSV
#[derive(Parser)]
#[command(name = "salesclean")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the cleaning pipeline and write the cleaned CSV
    Run {
        /// Raw sales CSV
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Output path for the cleaned CSV
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        #[command(flatten)]
        load: LoadArgs,

        /// Number of cleaned rows to preview
        #[arg(long, default_value = "5")]
        preview: usize,

        /// Print the cleaning report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show column types and summary statistics of a CSV without cleaning it
    Describe {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        load: LoadArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Options for reading the raw file.
#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    /// Field delimiter of the input file
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Only read the first N data rows
    #[arg(long, value_name = "N")]
    pub max_rows: Option<usize>,
}

impl LoadArgs {
    pub fn into_config(self) -> CleanerConfig {
        CleanerConfig {
            parser: ParserConfig {
                delimiter: self.delimiter,
                max_rows: self.max_rows,
            },
            ..CleanerConfig::default()
        }
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("delimiter must be a single ASCII character, got '{}'", s)),
    }
}
