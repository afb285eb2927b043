//! Value and column classification.
//!
//! A column is numeric when any row holds a finite number in it, and textual
//! when any row holds a string. Both can hold for the same column.

use qchart_model::{NormalizedTable, Row, Value};
use serde::Serialize;

/// True for finite numbers only.
pub fn is_numeric_value(value: &Value) -> bool {
    value.as_finite().is_some()
}

/// True for string values. Stringified fallbacks are not text.
pub fn is_text_value(value: &Value) -> bool {
    matches!(value, Value::Text(_))
}

pub fn column_is_numeric(rows: &[Row], column: &str) -> bool {
    rows.iter()
        .any(|row| row.get(column).is_some_and(is_numeric_value))
}

pub fn column_is_textual(rows: &[Row], column: &str) -> bool {
    rows.iter()
        .any(|row| row.get(column).is_some_and(is_text_value))
}

/// Classification of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub numeric: bool,
    pub textual: bool,
}

/// Profile every column, in column order.
pub fn profile_columns(table: &NormalizedTable) -> Vec<ColumnProfile> {
    table
        .columns
        .iter()
        .map(|name| ColumnProfile {
            name: name.clone(),
            numeric: column_is_numeric(&table.rows, name),
            textual: column_is_textual(&table.rows, name),
        })
        .collect()
}
