//! Named color palettes.
//!
//! Palettes are injected configuration: callers start from
//! [`PaletteRegistry::builtin`] and may merge user-supplied palettes on top.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::controls::DEFAULT_PALETTE;
use crate::error::{QchartError, Result};

const BUILTIN: &[(&str, &[&str])] = &[
    (
        "default",
        &[
            "#4c78a8", "#f58518", "#e45756", "#72b7b2", "#54a24b", "#eeca3b", "#b279a2",
            "#ff9da6", "#9d755d", "#bab0ac",
        ],
    ),
    (
        "warm",
        &["#7f2704", "#a63603", "#d94801", "#f16913", "#fd8d3c", "#fdae6b"],
    ),
    (
        "cool",
        &["#08306b", "#08519c", "#2171b5", "#4292c6", "#6baed6", "#9ecae1"],
    ),
    ("mono", &["#252525", "#525252", "#737373", "#969696", "#bdbdbd"]),
];

/// Mapping from palette name to an ordered list of color tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteRegistry {
    palettes: IndexMap<String, Vec<String>>,
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PaletteRegistry {
    /// Registry holding the built-in palettes.
    pub fn builtin() -> Self {
        let palettes = BUILTIN
            .iter()
            .map(|(name, colors)| {
                (
                    (*name).to_string(),
                    colors.iter().map(|color| (*color).to_string()).collect(),
                )
            })
            .collect();
        Self { palettes }
    }

    /// Parse a `{name: [color, ...]}` JSON object.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let palettes: IndexMap<String, Vec<String>> = serde_json::from_str(text)?;
        if let Some((name, _)) = palettes.iter().find(|(_, colors)| colors.is_empty()) {
            return Err(QchartError::InvalidPalette(name.clone()));
        }
        Ok(Self { palettes })
    }

    /// Add or replace palettes from `other`.
    #[must_use]
    pub fn merged(mut self, other: Self) -> Self {
        self.palettes.extend(other.palettes);
        self
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.palettes.get(name).map(Vec::as_slice)
    }

    /// Look up a palette, falling back to the default palette.
    pub fn resolve(&self, name: &str) -> &[String] {
        if let Some(colors) = self.get(name) {
            return colors;
        }
        warn!(palette = name, "unknown palette, using default");
        self.get(DEFAULT_PALETTE)
            .or_else(|| self.palettes.values().next().map(Vec::as_slice))
            .unwrap_or(&[])
    }
}
