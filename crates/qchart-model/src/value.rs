//! Cell values of a normalized table.
//!
//! Upstream payloads are arbitrary JSON. Numbers and strings are kept as-is;
//! every other JSON type (booleans, nested arrays, nested objects) is
//! stringified once at normalization time so downstream stages only ever see
//! four cases.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Missing or explicit `null`.
    #[default]
    Null,
    /// Numeric value. May be non-finite when constructed directly.
    Number(f64),
    /// String value.
    Text(String),
    /// Stringified form of any other JSON type.
    Other(String),
}

impl Value {
    /// Convert a JSON value into a cell value.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Number(number) => {
                number.as_f64().map_or(Self::Other(number.to_string()), Self::Number)
            }
            serde_json::Value::String(text) => Self::Text(text.clone()),
            serde_json::Value::Bool(flag) => Self::Other(flag.to_string()),
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the number when this is a finite numeric value.
    pub fn as_finite(&self) -> Option<f64> {
        match self {
            Self::Number(number) if number.is_finite() => Some(*number),
            _ => None,
        }
    }

    /// Returns the string when this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Loose numeric coercion used by the chart-rendering descriptor.
    ///
    /// `null` and blank strings coerce to `0`, `"true"`/`"false"` fallbacks
    /// to `1`/`0`, numeric strings to their value. Anything else yields
    /// `NaN`.
    pub fn coerce_number(&self) -> f64 {
        match self {
            Self::Null => 0.0,
            Self::Number(number) => *number,
            Self::Text(text) => parse_numeric_text(text),
            Self::Other(text) => match text.as_str() {
                "true" => 1.0,
                "false" => 0.0,
                _ => parse_numeric_text(text),
            },
        }
    }

    /// Convert back into a JSON value for emission.
    ///
    /// `null`, finite numbers and strings pass through; non-finite numbers
    /// and stringified fallbacks are emitted as strings. Whole numbers are
    /// written as JSON integers.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Number(number) => json_number(*number)
                .map_or_else(|| serde_json::Value::String(self.to_string()), serde_json::Value::Number),
            Self::Text(text) | Self::Other(text) => serde_json::Value::String(text.clone()),
        }
    }
}

fn parse_numeric_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // "inf" and "nan" spellings are not numeric text.
    if trimmed
        .chars()
        .any(|ch| ch.is_ascii_alphabetic() && !matches!(ch, 'e' | 'E'))
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Largest integer magnitude an `f64` holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// JSON number for a finite value, or `None` for NaN and infinities.
///
/// Whole numbers within `±(2^53 - 1)` become JSON integers, so `1` read from
/// a payload is written back as `1` rather than `1.0`.
pub fn json_number(number: f64) -> Option<serde_json::Number> {
    if !number.is_finite() {
        return None;
    }
    if number.fract() == 0.0 && number.abs() <= MAX_SAFE_INTEGER {
        #[allow(clippy::cast_possible_truncation)]
        return Some(serde_json::Number::from(number as i64));
    }
    serde_json::Number::from_f64(number)
}

/// Text form of a number as a JavaScript consumer prints it: plain decimals
/// for magnitudes in `[1e-6, 1e21)`, exponent notation (`1e+21`, `1e-7`)
/// outside that range.
pub(crate) fn format_number(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_string();
    }
    if number == f64::INFINITY {
        return "Infinity".to_string();
    }
    if number == f64::NEG_INFINITY {
        return "-Infinity".to_string();
    }
    if number == 0.0 {
        return "0".to_string();
    }
    let magnitude = number.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return number.to_string();
    }
    let text = format!("{number:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Number(number) => f.write_str(&format_number(*number)),
            Self::Text(text) | Self::Other(text) => f.write_str(text),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Number(number) => match json_number(*number) {
                Some(json) => json.serialize(serializer),
                None => serializer.serialize_str(&format_number(*number)),
            },
            Self::Text(text) | Self::Other(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_json(&raw))
    }
}
