//! Cell values.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, Timelike};
use serde::{Serialize, Serializer};

/// A single cell of a [`Table`](super::Table).
///
/// Numbers are never NaN: anything that would parse to NaN is stored as
/// [`Value::Null`] instead, which lets `Value` be `Eq` and `Hash`.
#[derive(Debug, Clone)]
pub enum Value {
    /// Explicit absence of a value.
    Null,
    /// Free text.
    Text(String),
    /// A finite or infinite decimal number.
    Number(f64),
    /// A parsed date/time without timezone.
    DateTime(NaiveDateTime),
    /// A parsed date/time that carried a UTC offset, kept as written.
    DateTimeTz(DateTime<FixedOffset>),
}

impl Value {
    /// Build a number cell, mapping NaN to null.
    pub fn number(value: f64) -> Self {
        if value.is_nan() {
            Value::Null
        } else {
            Value::Number(value)
        }
    }

    /// Build a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The numeric content, if this is a number cell.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The text content, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The date/time content, if this is a date/time cell without offset.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Short name of the variant, used in column type listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Text(_) => "text",
            Value::Number(_) => "number",
            Value::DateTime(_) | Value::DateTimeTz(_) => "datetime",
        }
    }

    /// Textual representation of the cell. Nulls render as the empty string.
    pub fn to_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Text(s) => s.clone(),
            Value::Number(n) => format_number(*n),
            Value::DateTime(dt) => format_datetime(dt, false),
            Value::DateTimeTz(dt) => format_offset_datetime(dt),
        }
    }

    /// Hash/equality key for numbers: `-0.0` and `0.0` compare equal.
    fn number_bits(n: f64) -> u64 {
        if n == 0.0 { 0.0f64.to_bits() } else { n.to_bits() }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => {
                Value::number_bits(*a) == Value::number_bits(*b)
            }
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            // Same instant written with different offsets is not the same cell.
            (Value::DateTimeTz(a), Value::DateTimeTz(b)) => {
                a.naive_local() == b.naive_local() && a.offset() == b.offset()
            }
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Text(s) => s.hash(state),
            Value::Number(n) => Value::number_bits(*n).hash(state),
            Value::DateTime(dt) => dt.hash(state),
            Value::DateTimeTz(dt) => {
                dt.naive_local().hash(state);
                dt.offset().local_minus_utc().hash(state);
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            other => write!(f, "{}", other.to_text()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::DateTime(dt) => serializer.serialize_str(&format_datetime(dt, false)),
            Value::DateTimeTz(dt) => serializer.serialize_str(&format_offset_datetime(dt)),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::number(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Format a number for output.
///
/// Whole numbers are written without a fractional part (`2`, not `2.0`);
/// everything else uses the shortest representation that round-trips.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else if n.is_infinite() {
        if n > 0.0 { "inf".to_string() } else { "-inf".to_string() }
    } else {
        format!("{}", n)
    }
}

/// Format a date/time for output.
///
/// With `date_only` the time of day is dropped; callers set it when every
/// value of a column falls on midnight.
pub fn format_datetime(dt: &NaiveDateTime, date_only: bool) -> String {
    if date_only {
        dt.format("%Y-%m-%d").to_string()
    } else if dt.nanosecond() != 0 {
        dt.format("%Y-%m-%d %H:%M:%S%.f").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Format a date/time with its offset, e.g. `2024-01-05 23:30:00-02:00`.
pub fn format_offset_datetime(dt: &DateTime<FixedOffset>) -> String {
    if dt.nanosecond() != 0 {
        dt.format("%Y-%m-%d %H:%M:%S%.f%:z").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S%:z").to_string()
    }
}

/// True if the value is a date/time falling exactly on midnight.
pub fn is_midnight(dt: &NaiveDateTime) -> bool {
    dt.time() == NaiveTime::MIN
}
