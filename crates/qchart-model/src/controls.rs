//! Chart control state supplied by the surrounding application.

use serde::{Deserialize, Serialize};

use crate::error::{QchartError, Result};

/// Default number of rows sampled for a chart.
pub const DEFAULT_TOP_N: usize = 10;
/// Default number of rows shown in a table display.
pub const DEFAULT_ROWS_TO_DISPLAY: usize = 50;
/// Palette used when none is configured.
pub const DEFAULT_PALETTE: &str = "default";

/// Chart kinds understood by the chart-rendering descriptor path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    #[default]
    Column,
    Donut,
    Treemap,
    /// Plain table; bypasses charting.
    Table,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Column => "column",
            Self::Donut => "donut",
            Self::Treemap => "treemap",
            Self::Table => "table",
        }
    }
}

/// Row ordering applied before truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Descending by representative value.
    #[default]
    ValueDesc,
    /// Ascending by representative value.
    ValueAsc,
    /// Ascending by representative label.
    LabelAsc,
    /// Descending by representative label.
    LabelDesc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ValueDesc => "value_desc",
            Self::ValueAsc => "value_asc",
            Self::LabelAsc => "label_asc",
            Self::LabelDesc => "label_desc",
        }
    }
}

/// User-facing chart controls, consumed as configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartControlState {
    pub chart_kind: ChartKind,
    /// Rows sampled into the chart window.
    pub top_n: usize,
    pub sort_by: SortOrder,
    pub palette: String,
    pub show_labels: bool,
    /// Rows sampled into the table-display window.
    pub rows_to_display: usize,
}

impl Default for ChartControlState {
    fn default() -> Self {
        Self {
            chart_kind: ChartKind::default(),
            top_n: DEFAULT_TOP_N,
            sort_by: SortOrder::default(),
            palette: DEFAULT_PALETTE.to_string(),
            show_labels: true,
            rows_to_display: DEFAULT_ROWS_TO_DISPLAY,
        }
    }
}

impl ChartControlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse controls from JSON. Missing fields take their defaults.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let controls: Self = serde_json::from_str(text)?;
        controls.validate()?;
        Ok(controls)
    }

    /// Reject limits that would make every window empty.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(QchartError::InvalidControl {
                field: "topN",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.rows_to_display == 0 {
            return Err(QchartError::InvalidControl {
                field: "rowsToDisplay",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn with_chart_kind(mut self, kind: ChartKind) -> Self {
        self.chart_kind = kind;
        self
    }

    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    #[must_use]
    pub fn with_sort_by(mut self, sort_by: SortOrder) -> Self {
        self.sort_by = sort_by;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: impl Into<String>) -> Self {
        self.palette = palette.into();
        self
    }

    #[must_use]
    pub fn with_show_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    #[must_use]
    pub fn with_rows_to_display(mut self, rows: usize) -> Self {
        self.rows_to_display = rows;
        self
    }
}
