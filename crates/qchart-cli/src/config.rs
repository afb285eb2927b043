//! Loading chart controls and palettes from disk.

use std::fs;
use std::path::Path;

use qchart_model::{ChartControlState, PaletteRegistry, Result};
use tracing::debug;

/// Load chart controls from a JSON file, or the defaults when no path is
/// given.
pub fn load_controls(path: Option<&Path>) -> Result<ChartControlState> {
    let Some(path) = path else {
        return Ok(ChartControlState::default());
    };
    let text = fs::read_to_string(path)?;
    let controls = ChartControlState::from_json_str(&text)?;
    debug!(path = %path.display(), "loaded chart controls");
    Ok(controls)
}

/// Built-in palettes, with palettes from a JSON file merged on top.
pub fn load_palettes(path: Option<&Path>) -> Result<PaletteRegistry> {
    let registry = PaletteRegistry::builtin();
    let Some(path) = path else {
        return Ok(registry);
    };
    let text = fs::read_to_string(path)?;
    let custom = PaletteRegistry::from_json_str(&text)?;
    debug!(path = %path.display(), "loaded palettes");
    Ok(registry.merged(custom))
}
