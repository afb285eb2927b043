//! Declarative (Vega-Lite) chart specifications.
//!
//! The generator embeds the row data and maps the category/value roles onto
//! encoding channels. It never sorts: rows are taken in the order given, so
//! callers sort beforehand when order matters.

use qchart_model::{ChartKind, NormalizedTable, Value};
use qchart_transform::resolve_encoding;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue, json};
use tracing::debug;

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";
pub const DEFAULT_LIMIT: usize = 100;
pub const DEFAULT_WIDTH: u32 = 400;
pub const DEFAULT_HEIGHT: u32 = 320;

/// Chart kinds of the declarative output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarativeKind {
    /// Horizontal bars: category on `y`, value on `x`.
    Bar,
    /// Vertical bars: category on `x`, value on `y`.
    #[default]
    Column,
    Line,
    Point,
    Area,
    /// Pie/donut: value on `theta`, category on `color`.
    Arc,
}

impl DeclarativeKind {
    /// Parse a kind name. Unrecognized names use the column mapping.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "bar" => Self::Bar,
            "column" => Self::Column,
            "line" => Self::Line,
            "point" => Self::Point,
            "area" => Self::Area,
            "arc" | "donut" | "pie" => Self::Arc,
            other => {
                debug!(kind = other, "unrecognized chart kind, using column");
                Self::Column
            }
        }
    }

    /// Vega-Lite mark type.
    pub fn mark(self) -> &'static str {
        match self {
            Self::Bar | Self::Column => "bar",
            Self::Line => "line",
            Self::Point => "point",
            Self::Area => "area",
            Self::Arc => "arc",
        }
    }
}

impl From<ChartKind> for DeclarativeKind {
    fn from(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Bar => Self::Bar,
            ChartKind::Donut => Self::Arc,
            ChartKind::Column | ChartKind::Treemap | ChartKind::Table => Self::Column,
        }
    }
}

/// Options for [`build_declarative_spec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarativeOptions {
    pub chart_kind: DeclarativeKind,
    /// Category column; selected automatically when `None`.
    pub category_key: Option<String>,
    /// Value column; selected automatically when `None`.
    pub value_key: Option<String>,
    /// Maximum number of rows embedded.
    pub limit: usize,
    pub width: u32,
    pub height: u32,
    /// Colors for the color scale (`arc`) or the mark (other kinds).
    pub palette: Option<Vec<String>>,
}

impl Default for DeclarativeOptions {
    fn default() -> Self {
        Self {
            chart_kind: DeclarativeKind::default(),
            category_key: None,
            value_key: None,
            limit: DEFAULT_LIMIT,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            palette: None,
        }
    }
}

impl DeclarativeOptions {
    pub fn new(chart_kind: DeclarativeKind) -> Self {
        Self {
            chart_kind,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_keys(mut self, category_key: Option<String>, value_key: Option<String>) -> Self {
        self.category_key = category_key;
        self.value_key = value_key;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, colors: Vec<String>) -> Self {
        self.palette = Some(colors);
        self
    }
}

/// Build a Vega-Lite spec for `table`.
///
/// Returns `None` when the table is empty or either role has no column.
pub fn build_declarative_spec(
    table: &NormalizedTable,
    options: &DeclarativeOptions,
) -> Option<JsonValue> {
    if table.is_empty() {
        return None;
    }
    let encoding = resolve_encoding(
        table,
        options.category_key.as_deref(),
        options.value_key.as_deref(),
    );
    let (category, value) = encoding.keys()?;

    let values: Vec<JsonValue> = table
        .rows
        .iter()
        .take(options.limit)
        .map(|row| {
            let object: Map<String, JsonValue> = table
                .columns
                .iter()
                .map(|column| {
                    let cell = row.get(column).map_or(JsonValue::Null, Value::to_json);
                    (column.clone(), cell)
                })
                .collect();
            JsonValue::Object(object)
        })
        .collect();

    let kind = options.chart_kind;
    let mut mark = json!({ "type": kind.mark(), "tooltip": true });
    let mut channels = encode_channels(kind, category, value);
    if let Some(colors) = options.palette.as_ref().filter(|colors| !colors.is_empty()) {
        if kind == DeclarativeKind::Arc {
            channels["color"]["scale"] = json!({ "range": colors });
        } else {
            mark["color"] = json!(colors[0]);
        }
    }
    debug!(
        kind = kind.mark(),
        rows = values.len(),
        category,
        value,
        "built declarative spec"
    );

    Some(json!({
        "$schema": VEGA_LITE_SCHEMA,
        "data": { "values": values },
        "mark": mark,
        "encoding": channels,
        "width": options.width,
        "height": options.height,
    }))
}

/// Encoding channels for one kind. Axis sort is disabled so the data order
/// is kept.
fn encode_channels(kind: DeclarativeKind, category: &str, value: &str) -> JsonValue {
    let category_field = json!({ "field": category, "type": "nominal", "sort": null });
    let value_field = json!({ "field": value, "type": "quantitative" });
    match kind {
        DeclarativeKind::Bar => json!({ "y": category_field, "x": value_field }),
        DeclarativeKind::Column
        | DeclarativeKind::Line
        | DeclarativeKind::Point
        | DeclarativeKind::Area => json!({ "x": category_field, "y": value_field }),
        DeclarativeKind::Arc => json!({
            "theta": value_field,
            "color": { "field": category, "type": "nominal" },
        }),
    }
}
