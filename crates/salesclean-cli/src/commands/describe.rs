//! Describe command - show column types and statistics of a raw file.

use std::path::PathBuf;

use colored::Colorize;
use salesclean::{Cleaner, describe};

use crate::cli::LoadArgs;
use crate::display;

pub fn run(
    file: PathBuf,
    load: LoadArgs,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let (table, source) = Cleaner::with_config(load.into_config()).load(&file)?;
    let summary = describe(&table);

    if json_output {
        let out = serde_json::json!({
            "source": source,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "{} {} ({} rows, {} columns)",
        "Describing".cyan().bold(),
        source.file.white(),
        source.row_count,
        source.column_count
    );

    println!();
    println!("{}", "Column types:".yellow().bold());
    display::print_types(&summary);

    println!();
    println!("{}", "Summary statistics:".yellow().bold());
    display::print_statistics(&summary);

    Ok(())
}
