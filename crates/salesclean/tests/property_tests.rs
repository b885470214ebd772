//! Property-based tests for the cleaning pipeline.
//!
//! These tests use proptest to generate random raw tables and verify that
//! the invariants of the cleaned output hold for every input.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p salesclean --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p salesclean --test property_tests
//! ```

use std::collections::HashSet;

use proptest::prelude::*;

use salesclean::{Pipeline, Table, Value, normalize_column_name};

// =============================================================================
// Test Strategies
// =============================================================================

/// Column labels with mixed case and stray whitespace.
fn raw_column_name() -> impl Strategy<Value = String> {
    "[ \\t]{0,2}[A-Za-z]{1,6}([ \\t]{1,3}[A-Za-z]{1,6}){0,2}[ \\t]{0,2}"
}

/// Cells that look like what a sales export contains in numeric columns.
fn numeric_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        "-?[0-9]{1,3}(\\.[0-9]{1,2})?",
        " [0-9]{1,2} ",
        Just(String::new()),
        Just("abc".to_string()),
        Just("0".to_string()),
        Just("NA".to_string()),
    ]
}

fn text_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ ]?\"?[A-Za-z]{1,4}\"?[ ]?",
        Just(String::new()),
    ]
}

fn date_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        "202[0-4]-0[1-9]-[12][0-9]",
        Just("not a date".to_string()),
        Just(String::new()),
    ]
}

/// A raw sales row: prodname, category, price, qty, date_sold.
fn sales_row() -> impl Strategy<Value = Vec<String>> {
    (text_cell(), text_cell(), numeric_cell(), numeric_cell(), date_cell())
        .prop_map(|(p, c, price, qty, d)| vec![p, c, price, qty, d])
}

/// A raw table, with a small pool of rows so duplicates are common.
fn sales_table() -> impl Strategy<Value = Table> {
    prop::collection::vec(sales_row(), 1..6)
        .prop_flat_map(|pool| {
            let len = pool.len();
            prop::collection::vec(0..len, 0..30).prop_map(move |picks| {
                picks.iter().map(|&i| pool[i].clone()).collect::<Vec<_>>()
            })
        })
        .prop_map(|rows| {
            Table::from_strings(["PRODNAME", " Category", "Price", "QTY ", "Date Sold"], rows)
        })
}

fn positive(value: &Value) -> bool {
    value.as_number().is_some_and(|n| n > 0.0)
}

// =============================================================================
// Column Name Properties
// =============================================================================

proptest! {
    /// Normalizing an already-normalized name changes nothing.
    #[test]
    fn column_normalization_is_idempotent(name in raw_column_name()) {
        let once = normalize_column_name(&name);
        prop_assert_eq!(normalize_column_name(&once), once);
    }

    /// Normalized names are lowercase with no whitespace anywhere.
    #[test]
    fn normalized_names_have_no_whitespace(name in raw_column_name()) {
        let normalized = normalize_column_name(&name);
        prop_assert!(!normalized.chars().any(char::is_whitespace));
        prop_assert_eq!(normalized.to_lowercase(), normalized.clone());
        prop_assert!(!normalized.contains("__"));
    }
}

// =============================================================================
// Pipeline Properties
// =============================================================================

proptest! {
    /// Every surviving row has non-null, strictly positive price and qty.
    #[test]
    fn survivors_are_positive(table in sales_table()) {
        let (cleaned, _) = Pipeline::standard().run(table);
        let price = cleaned.column_index("price").unwrap();
        let qty = cleaned.column_index("qty").unwrap();

        for row in &cleaned.rows {
            prop_assert!(!row[price].is_null() && !row[qty].is_null());
            prop_assert!(positive(&row[price]));
            prop_assert!(positive(&row[qty]));
        }
    }

    /// No two surviving rows are equal.
    #[test]
    fn survivors_are_unique(table in sales_table()) {
        let (cleaned, _) = Pipeline::standard().run(table);
        let unique: HashSet<&Vec<Value>> = cleaned.rows.iter().collect();
        prop_assert_eq!(unique.len(), cleaned.row_count());
    }

    /// Text columns are lowercase, trimmed and quote-free.
    #[test]
    fn text_columns_are_clean(table in sales_table()) {
        let (cleaned, _) = Pipeline::standard().run(table);

        for name in ["prodname", "category"] {
            let index = cleaned.column_index(name).unwrap();
            for value in cleaned.column_values(index) {
                let text = value.as_text().expect("text column holds text");
                prop_assert!(!text.contains('"'));
                prop_assert_eq!(text.trim(), text);
                prop_assert_eq!(text.to_lowercase(), text.to_string());
            }
        }
    }

    /// Survivors appear in the same relative order as in the input.
    #[test]
    fn survivor_order_is_preserved(table in sales_table()) {
        // Tag every row with its input position in an extra column.
        let mut tagged = table.clone();
        tagged.headers.push("row_id".to_string());
        for (i, row) in tagged.rows.iter_mut().enumerate() {
            row.push(Value::text(i.to_string()));
        }

        let (cleaned, _) = Pipeline::standard().run(tagged);
        let ids: Vec<usize> = cleaned
            .column_values(cleaned.column_index("row_id").unwrap())
            .map(|v| v.to_text().parse().unwrap())
            .collect();

        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    /// Row counts in the report are consistent with the output.
    #[test]
    fn report_accounts_for_every_row(table in sales_table()) {
        let rows_in = table.row_count();
        let (cleaned, report) = Pipeline::standard().run(table);

        prop_assert_eq!(report.rows_loaded, rows_in);
        prop_assert_eq!(report.rows_final, cleaned.row_count());
        prop_assert_eq!(report.total_dropped(), rows_in - cleaned.row_count());
        prop_assert_eq!(report.passes.len(), 4);
    }

    /// Cleaning a cleaned table removes nothing more.
    #[test]
    fn pipeline_is_idempotent(table in sales_table()) {
        let (once, _) = Pipeline::standard().run(table);
        let (twice, report) = Pipeline::standard().run(once.clone());

        prop_assert_eq!(report.total_dropped(), 0);
        prop_assert_eq!(twice, once);
    }
}
