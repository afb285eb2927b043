//! Classification of raw payloads before normalization.
//!
//! Each payload is tagged with exactly one [`RawShape`]. The rules are
//! checked in priority order and the first match wins:
//!
//! 1. object with `columns` (all strings) and `rows` (array) → `DirectTable`
//! 2. empty array → `EmptyArray`
//! 3. array whose first element is an object → `RecordArray`
//! 4. array whose first element is an array → `TupleArray`
//! 5. string → `EncodedString`
//! 6. anything else → `Unsupported`

use std::fmt;

use serde_json::{Map, Value as JsonValue};

/// A raw payload tagged with the normalization rule that applies to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawShape<'a> {
    DirectTable {
        columns: &'a [JsonValue],
        rows: &'a [JsonValue],
    },
    EmptyArray,
    RecordArray(&'a [JsonValue]),
    TupleArray(&'a [JsonValue]),
    EncodedString(&'a str),
    Unsupported,
}

/// Shape tag without the borrowed payload, for logging and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    DirectTable,
    EmptyArray,
    RecordArray,
    TupleArray,
    EncodedString,
    Unsupported,
}

impl RawShape<'_> {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::DirectTable { .. } => ShapeKind::DirectTable,
            Self::EmptyArray => ShapeKind::EmptyArray,
            Self::RecordArray(_) => ShapeKind::RecordArray,
            Self::TupleArray(_) => ShapeKind::TupleArray,
            Self::EncodedString(_) => ShapeKind::EncodedString,
            Self::Unsupported => ShapeKind::Unsupported,
        }
    }
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DirectTable => "direct_table",
            Self::EmptyArray => "empty_array",
            Self::RecordArray => "record_array",
            Self::TupleArray => "tuple_array",
            Self::EncodedString => "encoded_string",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag a raw payload with its shape.
pub fn classify_shape(raw: &JsonValue) -> RawShape<'_> {
    match raw {
        JsonValue::Object(object) => direct_table_parts(object)
            .map_or(RawShape::Unsupported, |(columns, rows)| {
                RawShape::DirectTable { columns, rows }
            }),
        JsonValue::Array(items) => classify_array(items),
        JsonValue::String(text) => RawShape::EncodedString(text),
        _ => RawShape::Unsupported,
    }
}

/// Tag an array payload. Strings are never produced here, which keeps
/// encoded-string recursion to a single level.
pub fn classify_array(items: &[JsonValue]) -> RawShape<'_> {
    match items.first() {
        None => RawShape::EmptyArray,
        Some(JsonValue::Object(_)) => RawShape::RecordArray(items),
        Some(JsonValue::Array(_)) => RawShape::TupleArray(items),
        Some(_) => RawShape::Unsupported,
    }
}

fn direct_table_parts(object: &Map<String, JsonValue>) -> Option<(&[JsonValue], &[JsonValue])> {
    let columns = object.get("columns")?.as_array()?;
    let rows = object.get("rows")?.as_array()?;
    if !columns.iter().all(JsonValue::is_string) {
        return None;
    }
    Some((columns.as_slice(), rows.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kind(raw: &JsonValue) -> ShapeKind {
        classify_shape(raw).kind()
    }

    #[test]
    fn direct_table_requires_string_columns_and_row_array() {
        assert_eq!(
            kind(&json!({"columns": ["a"], "rows": []})),
            ShapeKind::DirectTable
        );
        assert_eq!(
            kind(&json!({"columns": ["a", 1], "rows": []})),
            ShapeKind::Unsupported
        );
        assert_eq!(
            kind(&json!({"columns": ["a"], "rows": {}})),
            ShapeKind::Unsupported
        );
        assert_eq!(kind(&json!({"a": 1})), ShapeKind::Unsupported);
    }

    #[test]
    fn arrays_are_tagged_by_first_element() {
        assert_eq!(kind(&json!([])), ShapeKind::EmptyArray);
        assert_eq!(kind(&json!([{"a": 1}, [1]])), ShapeKind::RecordArray);
        assert_eq!(kind(&json!([[1], {"a": 1}])), ShapeKind::TupleArray);
        assert_eq!(kind(&json!([1, 2])), ShapeKind::Unsupported);
    }

    #[test]
    fn scalars_are_unsupported_and_strings_encoded() {
        assert_eq!(kind(&json!(null)), ShapeKind::Unsupported);
        assert_eq!(kind(&json!(3)), ShapeKind::Unsupported);
        assert_eq!(kind(&json!(false)), ShapeKind::Unsupported);
        assert_eq!(kind(&json!("text")), ShapeKind::EncodedString);
    }
}
