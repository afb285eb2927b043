use serde::{Deserialize, Serialize};

/// Which columns play the category and value roles.
///
/// A `None` key means no column satisfied the role; consumers render an
/// explicit fallback instead of a chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encoding {
    pub category_key: Option<String>,
    pub value_key: Option<String>,
}

impl Encoding {
    pub fn new(category_key: Option<String>, value_key: Option<String>) -> Self {
        Self {
            category_key,
            value_key,
        }
    }

    /// Both keys, when both roles are resolved.
    pub fn keys(&self) -> Option<(&str, &str)> {
        match (&self.category_key, &self.value_key) {
            (Some(category), Some(value)) => Some((category, value)),
            _ => None,
        }
    }
}
