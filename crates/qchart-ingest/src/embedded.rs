//! Array literals embedded in free text.
//!
//! Upstream services sometimes answer with prose that contains the result
//! as JSON, e.g. `Here are the totals: [["north", 12], ["south", 7]]`.

use serde_json::{Deserializer, Value as JsonValue};
use tracing::debug;

/// Byte offset of the first `[` in `text`.
pub fn locate_array_start(text: &str) -> Option<usize> {
    text.find('[')
}

/// Parse the JSON value starting at the first `[`.
///
/// Text after the value is ignored. Returns `None` when there is no `[`,
/// when the value does not parse, or when it is not an array.
pub fn parse_embedded_array(text: &str) -> Option<Vec<JsonValue>> {
    let Some(start) = locate_array_start(text) else {
        debug!("no array literal in text payload");
        return None;
    };
    let mut values = Deserializer::from_str(&text[start..]).into_iter::<JsonValue>();
    match values.next() {
        Some(Ok(JsonValue::Array(items))) => Some(items),
        Some(Ok(_)) => None,
        Some(Err(error)) => {
            debug!(offset = start, %error, "embedded array failed to parse");
            None
        }
        None => None,
    }
}
