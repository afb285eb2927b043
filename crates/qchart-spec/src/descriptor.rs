//! Chart-rendering descriptors for imperative charting components.
//!
//! A descriptor is `{categoryKey, valueKey, chartData}` where every point is
//! `{[categoryKey]: label, [valueKey]: number}`. Values are coerced loosely:
//! a non-numeric entry in the value column becomes `NaN` (emitted as JSON
//! `null`) rather than an error. Whole values are emitted as integers.

use qchart_model::{
    ChartControlState, ChartKind, NormalizedTable, PaletteRegistry, Row, Value, json_number,
};
use qchart_transform::{prepare_rows, select_table_encoding, windows};
use serde::ser::{SerializeMap, SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

/// Upper bound on points handed to a charting component.
pub const MAX_CHART_POINTS: usize = 30;
/// Message shown instead of a chart when no value column exists.
pub const NO_NUMERIC_COLUMN_MESSAGE: &str = "No numeric column found";

/// One projected chart point.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Stringified category value.
    pub category: String,
    /// Numerically coerced value; may be non-finite.
    pub value: f64,
}

/// `{categoryKey, valueKey, chartData}` for an imperative charting component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartDescriptor {
    pub category_key: Option<String>,
    pub value_key: Option<String>,
    pub chart_data: Vec<ChartPoint>,
}

impl ChartDescriptor {
    /// False when the consumer must show the "no numeric column" fallback.
    pub fn has_chart(&self) -> bool {
        self.value_key.is_some() && !self.chart_data.is_empty()
    }
}

/// Build the descriptor: select the encoding, sort, take the top-N chart
/// window and project at most [`MAX_CHART_POINTS`] rows.
pub fn build_chart_descriptor(
    table: &NormalizedTable,
    controls: &ChartControlState,
) -> ChartDescriptor {
    let encoding = select_table_encoding(table);
    let Some((category_key, value_key)) = encoding.keys() else {
        return ChartDescriptor {
            category_key: encoding.category_key.clone(),
            value_key: encoding.value_key.clone(),
            chart_data: Vec::new(),
        };
    };
    let sorted = prepare_rows(&table.rows, controls);
    let window = windows(&sorted, controls.top_n, controls.rows_to_display);
    let chart_data: Vec<ChartPoint> = window
        .chart
        .iter()
        .take(MAX_CHART_POINTS)
        .map(|row| project_row(row, category_key, value_key))
        .collect();

    let non_finite = chart_data.iter().filter(|p| !p.value.is_finite()).count();
    if non_finite > 0 {
        warn!(
            column = value_key,
            count = non_finite,
            "value column coerced to non-finite numbers"
        );
    }
    debug!(points = chart_data.len(), "built chart descriptor");

    ChartDescriptor {
        category_key: Some(category_key.to_string()),
        value_key: Some(value_key.to_string()),
        chart_data,
    }
}

fn project_row(row: &Row, category_key: &str, value_key: &str) -> ChartPoint {
    let cell = |key: &str| row.get(key).cloned().unwrap_or(Value::Null);
    ChartPoint {
        category: cell(category_key).to_string(),
        value: cell(value_key).coerce_number(),
    }
}

/// What the consumer should render for the given controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ChartView {
    /// Plain table of the display window.
    Table { columns: Vec<String>, rows: Vec<Row> },
    Chart {
        kind: ChartKind,
        descriptor: ChartDescriptor,
        colors: Vec<String>,
        #[serde(rename = "showLabels")]
        show_labels: bool,
    },
    /// Fallback replacing any chart kind.
    NoNumericColumn { message: String },
}

/// Decide between table, chart and fallback for `controls`.
pub fn plan_chart_view(
    table: &NormalizedTable,
    controls: &ChartControlState,
    palettes: &PaletteRegistry,
) -> ChartView {
    if controls.chart_kind == ChartKind::Table {
        let sorted = prepare_rows(&table.rows, controls);
        let window = windows(&sorted, controls.top_n, controls.rows_to_display);
        return ChartView::Table {
            columns: table.columns.clone(),
            rows: window.display.to_vec(),
        };
    }
    let descriptor = build_chart_descriptor(table, controls);
    if !descriptor.has_chart() {
        debug!(kind = controls.chart_kind.as_str(), "no numeric column, using fallback");
        return ChartView::NoNumericColumn {
            message: NO_NUMERIC_COLUMN_MESSAGE.to_string(),
        };
    }
    ChartView::Chart {
        kind: controls.chart_kind,
        descriptor,
        colors: palettes.resolve(&controls.palette).to_vec(),
        show_labels: controls.show_labels,
    }
}

impl Serialize for ChartDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ChartDescriptor", 3)?;
        state.serialize_field("categoryKey", &self.category_key)?;
        state.serialize_field("valueKey", &self.value_key)?;
        state.serialize_field("chartData", &ChartData(self))?;
        state.end()
    }
}

struct ChartData<'a>(&'a ChartDescriptor);

impl Serialize for ChartData<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let descriptor = self.0;
        let mut seq = serializer.serialize_seq(Some(descriptor.chart_data.len()))?;
        for point in &descriptor.chart_data {
            seq.serialize_element(&PointEntry {
                point,
                category_key: descriptor.category_key.as_deref().unwrap_or_default(),
                value_key: descriptor.value_key.as_deref().unwrap_or_default(),
            })?;
        }
        seq.end()
    }
}

struct PointEntry<'a> {
    point: &'a ChartPoint,
    category_key: &'a str,
    value_key: &'a str,
}

impl Serialize for PointEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // When both roles share a column the numeric value wins.
        if self.category_key == self.value_key {
            let mut map = serializer.serialize_map(Some(1))?;
            map.serialize_entry(self.value_key, &json_number(self.point.value))?;
            return map.end();
        }
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.category_key, &self.point.category)?;
        map.serialize_entry(self.value_key, &json_number(self.point.value))?;
        map.end()
    }
}
