//! Terminal rendering of tables and summaries.

use colored::Colorize;
use salesclean::{NumericSummary, Table, TableSummary};
use salesclean::table::{format_datetime, is_midnight};

/// Widest a preview cell may get before it is cut.
const MAX_CELL_WIDTH: usize = 24;

/// Print the first `n` rows as an aligned grid.
pub fn print_preview(table: &Table, n: usize) {
    let head = table.head(n);

    let date_only: Vec<bool> = (0..head.column_count())
        .map(|i| {
            table
                .column_values(i)
                .filter_map(|v| v.as_datetime())
                .all(|dt| is_midnight(&dt))
        })
        .collect();

    let cells: Vec<Vec<String>> = head
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .zip(&date_only)
                .map(|(value, &date_only)| match value.as_datetime() {
                    Some(dt) => format_datetime(&dt, date_only),
                    None => value.to_string(),
                })
                .map(|s| truncate(&s))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = head
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(truncate(h).chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_line: Vec<String> = head
        .headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{:<w$}", truncate(h), w = w))
        .collect();
    println!("  {}", header_line.join("  ").bold());

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<w$}", cell, w = w))
            .collect();
        println!("  {}", line.join("  "));
    }

    if table.row_count() > n {
        println!("  {}", format!("... {} more rows", table.row_count() - n).dimmed());
    }
}

/// Print each column with its type and non-null count.
pub fn print_types(summary: &TableSummary) {
    for column in &summary.columns {
        println!(
            "  {:20} {} {} non-null",
            column.name,
            format!("{:10}", column.column_type).cyan(),
            column.non_null
        );
    }
}

/// Print count/mean/std/min/quartiles/max for every numeric column.
pub fn print_statistics(summary: &TableSummary) {
    let numeric: Vec<(&str, &NumericSummary)> = summary
        .columns
        .iter()
        .filter_map(|c| c.numeric.as_ref().map(|n| (c.name.as_str(), n)))
        .collect();

    if numeric.is_empty() {
        println!("  {}", "No numeric columns".dimmed());
        return;
    }

    let header: Vec<String> = numeric.iter().map(|(name, _)| format!("{:>12}", name)).collect();
    println!("  {:6}{}", "", header.join("").bold());

    let rows: [(&str, fn(&NumericSummary) -> Option<f64>); 8] = [
        ("count", |n: &NumericSummary| Some(n.count as f64)),
        ("mean", |n: &NumericSummary| Some(n.mean)),
        ("std", |n: &NumericSummary| n.std),
        ("min", |n: &NumericSummary| Some(n.min)),
        ("25%", |n: &NumericSummary| Some(n.q1)),
        ("50%", |n: &NumericSummary| Some(n.median)),
        ("75%", |n: &NumericSummary| Some(n.q3)),
        ("max", |n: &NumericSummary| Some(n.max)),
    ];

    for (label, stat) in rows {
        let values: Vec<String> = numeric
            .iter()
            .map(|(_, n)| match stat(n) {
                Some(v) => format!("{:>12.4}", v),
                None => format!("{:>12}", "NaN"),
            })
            .collect();
        println!("  {:6}{}", label, values.join(""));
    }
}

fn truncate(s: &str) -> String {
    if s.chars().count() <= MAX_CELL_WIDTH {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(MAX_CELL_WIDTH - 3).collect();
        cut.push_str("...");
        cut
    }
}
