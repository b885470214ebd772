//! Static per-column cleaning rules.
//!
//! Each known canonical column maps to a [`ColumnKind`], which decides how
//! the value normalizer coerces its cells, and a [`Validity`], which decides
//! whether the row validator filters on it. Columns not listed here pass
//! through untouched. Adding a column means adding one entry.

use crate::table::Value;

use super::dates::parse_datetime;

/// How a known column is coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Lowercased, quote-free, trimmed text. Missing becomes `""`.
    Text,
    /// Decimal number; unparseable becomes null.
    Numeric,
    /// Date/time; unparseable becomes null.
    Date,
}

/// What the row validator requires of a known column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// No row filtering.
    Unchecked,
    /// Non-null and strictly greater than zero.
    RequiredPositive,
}

/// A cleaning rule for one canonical column name.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRule {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub validity: Validity,
}

impl ColumnRule {
    /// Coerce a single cell according to this rule's kind.
    pub fn coerce(&self, value: &Value) -> Value {
        match self.kind {
            ColumnKind::Text => normalize_text(value),
            ColumnKind::Numeric => coerce_number(value),
            ColumnKind::Date => coerce_datetime(value),
        }
    }

    pub fn requires_positive(&self) -> bool {
        self.validity == Validity::RequiredPositive
    }
}

/// Rules for the known sales columns, in the order they are applied.
pub const COLUMN_RULES: &[ColumnRule] = &[
    ColumnRule {
        name: "prodname",
        kind: ColumnKind::Text,
        validity: Validity::Unchecked,
    },
    ColumnRule {
        name: "category",
        kind: ColumnKind::Text,
        validity: Validity::Unchecked,
    },
    ColumnRule {
        name: "price",
        kind: ColumnKind::Numeric,
        validity: Validity::RequiredPositive,
    },
    ColumnRule {
        name: "qty",
        kind: ColumnKind::Numeric,
        validity: Validity::RequiredPositive,
    },
    ColumnRule {
        name: "date_sold",
        kind: ColumnKind::Date,
        validity: Validity::Unchecked,
    },
];

/// Look up the rule for a canonical column name.
pub fn rule_for(name: &str) -> Option<&'static ColumnRule> {
    COLUMN_RULES.iter().find(|rule| rule.name == name)
}

/// Rules whose columns must be non-null and positive, in rule order.
pub fn positive_rules() -> impl Iterator<Item = &'static ColumnRule> {
    COLUMN_RULES.iter().filter(|rule| rule.requires_positive())
}

/// Remove double quotes, trim and lowercase. Null becomes the empty string.
pub fn normalize_text(value: &Value) -> Value {
    let text = value.to_text();
    Value::Text(text.replace('"', "").trim().to_lowercase())
}

/// Parse the trimmed textual form of a cell as a number.
pub fn coerce_number(value: &Value) -> Value {
    match value {
        Value::Number(_) => value.clone(),
        Value::Null => Value::Null,
        other => other
            .to_text()
            .trim()
            .parse::<f64>()
            .map_or(Value::Null, Value::number),
    }
}

/// Parse a cell as a date/time.
pub fn coerce_datetime(value: &Value) -> Value {
    match value {
        Value::DateTime(_) | Value::DateTimeTz(_) => value.clone(),
        Value::Text(s) => parse_datetime(s).unwrap_or(Value::Null),
        _ => Value::Null,
    }
}
