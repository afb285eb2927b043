use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// One table row: column name to value, in table column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    pub cells: IndexMap<String, Value>,
}

impl Row {
    /// Build a row holding exactly `columns`, looking each value up with
    /// `lookup`. Columns the lookup does not know become `null`.
    pub fn aligned<'a, F>(columns: &[String], mut lookup: F) -> Self
    where
        F: FnMut(usize, &str) -> Option<&'a serde_json::Value>,
    {
        let cells = columns
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let value = lookup(idx, name).map_or(Value::Null, Value::from_json);
                (name.clone(), value)
            })
            .collect();
        Self { cells }
    }

    /// Build a row from values already in column order.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            cells: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells.get(column)
    }

    /// Values in column order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.cells.values()
    }
}

/// Canonical `{columns, rows}` table every downstream stage works on.
///
/// A table is built once per payload and never mutated afterwards; sorting
/// and truncation produce new row sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl NormalizedTable {
    /// The valid-but-empty table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a table with no rows. Duplicate column names keep their first
    /// occurrence.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for column in columns {
            let column = column.into();
            if !unique.contains(&column) {
                unique.push(column);
            }
        }
        Self {
            columns: unique,
            rows: Vec::new(),
        }
    }

    /// Append a row, realigning it to the table columns.
    pub fn push_row(&mut self, row: Row) {
        let cells = self
            .columns
            .iter()
            .map(|name| {
                let value = row.cells.get(name).cloned().unwrap_or_default();
                (name.clone(), value)
            })
            .collect();
        self.rows.push(Row { cells });
    }

    /// A new table with the same columns and the given rows.
    pub fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// True when the table has no columns or no rows.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
