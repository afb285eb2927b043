//! Chart outputs projected from a [`qchart_model::NormalizedTable`].
//!
//! - **declarative**: Vega-Lite specs with embedded data
//! - **descriptor**: `{categoryKey, valueKey, chartData}` descriptors and the
//!   table/chart/fallback decision built on them
//!
//! Both paths select columns through `qchart_transform::select_encoding`, so
//! they always agree on the category and value columns.

pub mod declarative;
pub mod descriptor;

pub use declarative::{DeclarativeKind, DeclarativeOptions, build_declarative_spec};
pub use descriptor::{
    ChartDescriptor, ChartPoint, ChartView, MAX_CHART_POINTS, NO_NUMERIC_COLUMN_MESSAGE,
    build_chart_descriptor, plan_chart_view,
};
