//! Reading raw payloads.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use qchart_ingest::{
    PayloadFields, ShapeKind, classify_shape, extract_payload, normalize, normalize_response,
};
use qchart_model::{NormalizedTable, Result};
use serde_json::Value as JsonValue;

static NULL: JsonValue = JsonValue::Null;

/// Read the input text from a file, or from stdin for `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(fs::read_to_string(path)?)
}

/// Parse input text as JSON. Text that is not JSON is kept as a string
/// payload so embedded arrays can still be found.
pub fn parse_payload(text: &str) -> JsonValue {
    serde_json::from_str(text).unwrap_or_else(|_| JsonValue::String(text.to_string()))
}

/// A parsed payload together with how it was read.
#[derive(Debug, Clone)]
pub struct LoadedPayload {
    pub raw: JsonValue,
    /// Treat `raw` as an upstream response object.
    pub is_response: bool,
}

impl LoadedPayload {
    pub fn new(text: &str, is_response: bool) -> Self {
        Self {
            raw: parse_payload(text),
            is_response,
        }
    }

    /// Normalize the payload. `None` means the shape is unsupported.
    pub fn normalize(&self, fields: &PayloadFields) -> Option<NormalizedTable> {
        if self.is_response {
            normalize_response(&self.raw, fields)
        } else {
            normalize(&self.raw)
        }
    }

    /// Shape of the value that normalization starts from.
    pub fn shape(&self, fields: &PayloadFields) -> ShapeKind {
        let value = if self.is_response {
            match classify_shape(&self.raw).kind() {
                ShapeKind::DirectTable => &self.raw,
                _ => extract_payload(&self.raw, fields).unwrap_or(&NULL),
            }
        } else {
            &self.raw
        };
        classify_shape(value).kind()
    }
}
