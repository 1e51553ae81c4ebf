//! Cell input values and the type inference that maps them onto the
//! service's extended values.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use sheetkit_types::{CellData, ExtendedValue};

/// Serial number of 1970-01-01 in the spreadsheet date system, whose day
/// zero is 1899-12-30.
const UNIX_EPOCH_SERIAL: f64 = 25_569.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// A value to be written into a cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellInput {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Date(NaiveDateTime),
    Text(String),
}

/// The extended-value type a [`CellInput`] is written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Boolean,
    Number,
    Formula,
    String,
}

impl CellInput {
    /// Classify the value. Total: every input has exactly one kind.
    ///
    /// - `Bool` is boolean
    /// - finite numbers and dates are numeric
    /// - text starting with `=` is a formula
    /// - everything else (null, other text, NaN and infinities) is a string
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            CellInput::Bool(_) => ValueKind::Boolean,
            CellInput::Number(n) if n.is_finite() => ValueKind::Number,
            CellInput::Date(_) => ValueKind::Number,
            CellInput::Text(s) if s.starts_with('=') => ValueKind::Formula,
            CellInput::Null | CellInput::Number(_) | CellInput::Text(_) => ValueKind::String,
        }
    }

    /// Convert into the extended value written to the service.
    #[must_use]
    pub fn to_extended_value(&self) -> ExtendedValue {
        match (self.kind(), self) {
            (ValueKind::Boolean, CellInput::Bool(b)) => ExtendedValue::BoolValue(*b),
            (ValueKind::Number, CellInput::Number(n)) => ExtendedValue::NumberValue(*n),
            (ValueKind::Number, CellInput::Date(d)) => {
                ExtendedValue::NumberValue(date_to_serial(*d))
            }
            (ValueKind::Formula, CellInput::Text(s)) => ExtendedValue::FormulaValue(s.clone()),
            _ => ExtendedValue::StringValue(self.to_string()),
        }
    }

    /// Check if the value is null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, CellInput::Null)
    }
}

/// Build the cell payload `{userEnteredValue: ...}` for a value.
pub fn cell_data(value: impl Into<CellInput>) -> CellData {
    CellData::with_value(value.into().to_extended_value())
}

/// Spreadsheet serial number of a date-time: whole days since 1899-12-30,
/// with the time of day as the fractional part.
#[must_use]
pub fn date_to_serial(date: NaiveDateTime) -> f64 {
    date.and_utc().timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_SERIAL
}

impl fmt::Display for CellInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellInput::Null => write!(f, ""),
            CellInput::Bool(b) => write!(f, "{b}"),
            CellInput::Number(n) if n.is_nan() => write!(f, "NaN"),
            CellInput::Number(n) if n.is_infinite() => {
                write!(f, "{}", if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            CellInput::Number(n) => write!(f, "{n}"),
            CellInput::Date(d) => write!(f, "{}", d.format("%Y-%m-%d %H:%M:%S")),
            CellInput::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for CellInput {
    fn from(b: bool) -> Self {
        CellInput::Bool(b)
    }
}

impl From<i32> for CellInput {
    fn from(i: i32) -> Self {
        CellInput::Number(f64::from(i))
    }
}

impl From<u32> for CellInput {
    fn from(i: u32) -> Self {
        CellInput::Number(f64::from(i))
    }
}

impl From<i64> for CellInput {
    fn from(i: i64) -> Self {
        CellInput::Number(i as f64)
    }
}

impl From<f32> for CellInput {
    fn from(f: f32) -> Self {
        CellInput::Number(f64::from(f))
    }
}

impl From<f64> for CellInput {
    fn from(f: f64) -> Self {
        CellInput::Number(f)
    }
}

impl From<String> for CellInput {
    fn from(s: String) -> Self {
        CellInput::Text(s)
    }
}

impl From<&str> for CellInput {
    fn from(s: &str) -> Self {
        CellInput::Text(s.to_string())
    }
}

impl From<NaiveDateTime> for CellInput {
    fn from(d: NaiveDateTime) -> Self {
        CellInput::Date(d)
    }
}

impl From<NaiveDate> for CellInput {
    fn from(d: NaiveDate) -> Self {
        CellInput::Date(d.and_time(chrono::NaiveTime::MIN))
    }
}

impl From<DateTime<Utc>> for CellInput {
    fn from(d: DateTime<Utc>) -> Self {
        CellInput::Date(d.naive_utc())
    }
}

impl<T: Into<CellInput>> From<Option<T>> for CellInput {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellInput::Null,
        }
    }
}

impl From<serde_json::Value> for CellInput {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellInput::Null,
            serde_json::Value::Bool(b) => CellInput::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(CellInput::Null, CellInput::Number),
            serde_json::Value::String(s) => CellInput::Text(s),
            other => CellInput::Text(other.to_string()),
        }
    }
}

impl From<&serde_json::Value> for CellInput {
    fn from(value: &serde_json::Value) -> Self {
        CellInput::from(value.clone())
    }
}
