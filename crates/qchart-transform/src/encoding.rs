//! Category/value column selection.
//!
//! Every chart output path selects its encoding here, so the declarative
//! spec and the chart-rendering descriptor always agree on the columns.

use qchart_model::{Encoding, NormalizedTable, Row};
use tracing::debug;

use crate::classify::{column_is_numeric, column_is_textual};

/// Pick the category and value columns.
///
/// Columns are scanned in order. The first numeric column becomes the value
/// key and the first textual column the category key. Without a textual
/// column the category falls back to the first column, which may also be
/// the value column. Empty input yields no keys.
pub fn select_encoding(columns: &[String], rows: &[Row]) -> Encoding {
    if columns.is_empty() || rows.is_empty() {
        return Encoding::default();
    }
    let value_key = columns
        .iter()
        .find(|column| column_is_numeric(rows, column))
        .cloned();
    let category_key = columns
        .iter()
        .find(|column| column_is_textual(rows, column))
        .or_else(|| columns.first())
        .cloned();
    debug!(
        category = category_key.as_deref().unwrap_or("-"),
        value = value_key.as_deref().unwrap_or("-"),
        "selected encoding"
    );
    Encoding::new(category_key, value_key)
}

/// [`select_encoding`] over a whole table.
pub fn select_table_encoding(table: &NormalizedTable) -> Encoding {
    select_encoding(&table.columns, &table.rows)
}

/// Fill in whichever keys the caller left out.
pub fn resolve_encoding(
    table: &NormalizedTable,
    category_key: Option<&str>,
    value_key: Option<&str>,
) -> Encoding {
    if let (Some(category), Some(value)) = (category_key, value_key) {
        return Encoding::new(Some(category.to_string()), Some(value.to_string()));
    }
    let selected = select_table_encoding(table);
    Encoding::new(
        category_key.map(str::to_string).or(selected.category_key),
        value_key.map(str::to_string).or(selected.value_key),
    )
}
