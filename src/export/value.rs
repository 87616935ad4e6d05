//! Cell values and their CSV encoding.

use chrono::{DateTime, SecondsFormat, Utc};

/// A single field value of a [`Record`](super::Record).
///
/// The variant decides how the value is written into a CSV cell; see
/// [`CellValue::encode`].
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Missing or null value
    Null,
    /// Boolean literal
    Bool(bool),
    /// Integral number
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Free text
    Text(String),
    /// Point in time
    Date(DateTime<Utc>),
    /// Nested JSON array or object
    Structured(serde_json::Value),
}

impl CellValue {
    /// Encodes the value as one CSV cell.
    ///
    /// - `Null` becomes an empty, unquoted cell.
    /// - `Text` and `Structured` (as compact JSON) are wrapped in double quotes,
    ///   with embedded quotes doubled.
    /// - `Date` is a bare ISO-8601 timestamp with millisecond precision.
    /// - Numbers and booleans are bare literals.
    ///
    /// Encoding never fails. Non-finite floats fall back to `NaN`,
    /// `Infinity` and `-Infinity`. Floats of magnitude at least `1e21` or
    /// below `1e-6` use exponent form (`1e+21`, `1.5e-7`); others are plain
    /// decimals in shortest round-trip form.
    pub fn encode(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Float(f) => format_float(*f),
            CellValue::Text(s) => quote(s),
            CellValue::Date(dt) => format_timestamp(dt),
            CellValue::Structured(v) => quote(&v.to_string()),
        }
    }

    /// Returns `true` for [`CellValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

/// Formats an instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Wraps text in double quotes, doubling any quote inside it.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if f == 0.0 {
        // -0.0 prints as "-0"
        "0".to_string()
    } else if f.abs() >= 1e21 || f.abs() < 1e-6 {
        // Exponent form with an explicit `+` on positive exponents: 1e+21, 1.5e-7
        let formatted = format!("{:e}", f);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        f.to_string()
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Integer(i64::from(value))
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Integer(i64::from(value))
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        CellValue::Date(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Integer(i),
                None => n.as_f64().map_or(CellValue::Null, CellValue::Float),
            },
            Value::String(s) => CellValue::Text(s),
            structured @ (Value::Array(_) | Value::Object(_)) => CellValue::Structured(structured),
        }
    }
}
