//! Run command - clean a raw sales export and write the result.

use std::path::PathBuf;

use colored::Colorize;
use salesclean::Cleaner;

use crate::cli::LoadArgs;
use crate::display;

pub fn run(
    input: PathBuf,
    output: PathBuf,
    load: LoadArgs,
    preview: usize,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file not found: {}", input.display()).into());
    }

    if !json_output {
        println!("{}", "=".repeat(60));
        println!("{}", "Data Cleaning Pipeline".bold());
        println!("{}", "=".repeat(60));
    }

    let cleaner = Cleaner::with_config(load.into_config());
    let outcome = cleaner.clean_file(&input, &output)?;
    let summary = outcome.summary();

    if json_output {
        let report = serde_json::json!({
            "source": outcome.source,
            "output": outcome.output,
            "report": outcome.report,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let report = &outcome.report;
    println!();
    println!(
        "{} {} of {} rows ({} removed)",
        "Kept".green().bold(),
        report.rows_final.to_string().white().bold(),
        report.rows_loaded,
        report.total_removed().to_string().yellow()
    );

    println!();
    println!("{}", "First few rows:".yellow().bold());
    display::print_preview(&outcome.table, preview);

    println!();
    println!("{}", "Column types:".yellow().bold());
    display::print_types(&summary);

    println!();
    println!("{}", "Summary statistics:".yellow().bold());
    display::print_statistics(&summary);

    println!();
    println!(
        "{} {}",
        "Saved to".green().bold(),
        outcome.output.display().to_string().white()
    );

    Ok(())
}
