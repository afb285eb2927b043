//! Normalization of classified payloads into [`NormalizedTable`]s.
//!
//! `None` means the payload matched no accepted shape. An empty array is
//! the one input that normalizes to the valid-but-empty table.

use qchart_model::{NormalizedTable, Row};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::embedded::parse_embedded_array;
use crate::shape::{RawShape, classify_array, classify_shape};

/// Column names used when every tuple has exactly two elements.
pub const PAIR_COLUMNS: [&str; 2] = ["label", "value"];

/// Normalize an arbitrary payload.
pub fn normalize(raw: &JsonValue) -> Option<NormalizedTable> {
    let shape = classify_shape(raw);
    debug!(shape = %shape.kind(), "classified payload");
    normalize_shape(shape)
}

/// Normalize an already-classified payload.
pub fn normalize_shape(shape: RawShape<'_>) -> Option<NormalizedTable> {
    match shape {
        RawShape::DirectTable { columns, rows } => Some(normalize_direct_table(columns, rows)),
        RawShape::EmptyArray => Some(NormalizedTable::empty()),
        RawShape::RecordArray(items) => Some(normalize_records(items)),
        RawShape::TupleArray(items) => Some(normalize_tuples(items)),
        RawShape::EncodedString(text) => normalize_encoded_string(text),
        RawShape::Unsupported => None,
    }
}

/// Normalize an array payload; used after decoding an embedded string.
pub fn normalize_array(items: &[JsonValue]) -> Option<NormalizedTable> {
    let shape = classify_array(items);
    debug!(shape = %shape.kind(), "classified array payload");
    normalize_shape(shape)
}

/// Rebuild each row against the declared columns.
///
/// Object rows are looked up by name, array rows positionally. Columns that
/// are not strings are skipped; callers classify first so this does not
/// happen in practice.
pub fn normalize_direct_table(columns: &[JsonValue], rows: &[JsonValue]) -> NormalizedTable {
    let mut table = NormalizedTable::new(columns.iter().filter_map(JsonValue::as_str));
    table.rows = rows
        .iter()
        .map(|row| match row {
            JsonValue::Object(object) => Row::aligned(&table.columns, |_, name| object.get(name)),
            JsonValue::Array(values) => Row::aligned(&table.columns, |idx, _| values.get(idx)),
            _ => Row::aligned(&table.columns, |_, _| None),
        })
        .collect();
    table
}

/// Rebuild records against the union of all keys, in first-seen order.
pub fn normalize_records(items: &[JsonValue]) -> NormalizedTable {
    let keys = items
        .iter()
        .filter_map(JsonValue::as_object)
        .flat_map(|object| object.keys());
    let mut table = NormalizedTable::new(keys.cloned());
    table.rows = items
        .iter()
        .map(|item| {
            let object = item.as_object();
            Row::aligned(&table.columns, |_, name| object.and_then(|o| o.get(name)))
        })
        .collect();
    table
}

/// Rebuild tuples as positional columns.
///
/// When the longest tuple has exactly two elements the columns are
/// `label`/`value`, otherwise `col_1..col_N`. Shorter tuples are padded with
/// `null`.
pub fn normalize_tuples(items: &[JsonValue]) -> NormalizedTable {
    let width = items
        .iter()
        .map(|item| item.as_array().map_or(0, Vec::len))
        .max()
        .unwrap_or(0);
    let columns = tuple_column_names(width);
    let mut table = NormalizedTable::new(columns);
    table.rows = items
        .iter()
        .map(|item| {
            let values = item.as_array();
            Row::aligned(&table.columns, |idx, _| values.and_then(|v| v.get(idx)))
        })
        .collect();
    table
}

/// Column names for tuples of the given maximum width.
pub fn tuple_column_names(width: usize) -> Vec<String> {
    if width == PAIR_COLUMNS.len() {
        return PAIR_COLUMNS.iter().map(|name| (*name).to_string()).collect();
    }
    (1..=width).map(|idx| format!("col_{idx}")).collect()
}

/// Decode the first array literal embedded in free text and normalize it.
pub fn normalize_encoded_string(text: &str) -> Option<NormalizedTable> {
    let items = parse_embedded_array(text)?;
    normalize_array(&items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_names_switch_on_pair_width() {
        assert_eq!(tuple_column_names(2), vec!["label", "value"]);
        assert_eq!(tuple_column_names(1), vec!["col_1"]);
        assert_eq!(tuple_column_names(3), vec!["col_1", "col_2", "col_3"]);
        assert!(tuple_column_names(0).is_empty());
    }
}
