//! Locating the result payload inside an upstream response.
//!
//! The upstream intent service answers with an object that carries the
//! query result in a structured field (`sql_result`) and a free-text answer
//! (`final_response`). Either may hold the table.

use qchart_model::NormalizedTable;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::normalize::normalize;
use crate::shape::{RawShape, classify_shape};

/// Field names searched in an upstream response, in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadFields {
    /// Fields holding structured query results.
    pub structured: Vec<String>,
    /// Fields holding free text that may embed a JSON array.
    pub text: Vec<String>,
}

impl Default for PayloadFields {
    fn default() -> Self {
        Self {
            structured: ["sql_result", "result", "data", "rows"]
                .into_iter()
                .map(String::from)
                .collect(),
            text: ["final_response", "response", "answer", "message"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl PayloadFields {
    /// All field names, structured fields first.
    pub fn ordered(&self) -> impl Iterator<Item = &str> {
        self.structured
            .iter()
            .chain(self.text.iter())
            .map(String::as_str)
    }
}

/// The first present, non-null payload field of `response`.
pub fn extract_payload<'a>(response: &'a JsonValue, fields: &PayloadFields) -> Option<&'a JsonValue> {
    let object = response.as_object()?;
    fields
        .ordered()
        .filter_map(|name| object.get(name))
        .find(|value| !value.is_null())
}

/// Normalize an upstream response.
///
/// A response that is already a direct table is used as-is. Otherwise each
/// present payload field is tried in order and the first one that
/// normalizes wins.
pub fn normalize_response(response: &JsonValue, fields: &PayloadFields) -> Option<NormalizedTable> {
    if matches!(classify_shape(response), RawShape::DirectTable { .. }) {
        return normalize(response);
    }
    let object = response.as_object()?;
    for name in fields.ordered() {
        let Some(value) = object.get(name) else {
            continue;
        };
        if let Some(table) = normalize(value) {
            debug!(field = name, "normalized response field");
            return Some(table);
        }
    }
    debug!("no response field normalized");
    None
}
