//! CLI argument definitions for `qchart`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use qchart_model::{ChartKind, SortOrder};
use qchart_spec::DeclarativeKind;

#[derive(Parser)]
#[command(
    name = "qchart",
    version,
    about = "Normalize query results and turn them into chart specs",
    long_about = "Normalize loosely shaped query results into a canonical table\n\
                  and derive Vega-Lite specs or chart descriptors from it.\n\n\
                  INPUT is a JSON file, or - to read from stdin."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Chart controls as JSON.
    #[arg(long = "controls", value_name = "FILE", global = true)]
    pub controls: Option<PathBuf>,

    /// Extra palettes as a JSON object of color lists.
    #[arg(long = "palettes", value_name = "FILE", global = true)]
    pub palettes: Option<PathBuf>,

    /// Treat INPUT as an upstream response and extract its payload field.
    #[arg(long = "response", global = true)]
    pub response: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the normalized table.
    Normalize(NormalizeArgs),

    /// Show the input shape, column profiles and chosen encoding.
    Inspect(InputArgs),

    /// Emit a Vega-Lite spec.
    Spec(SpecArgs),

    /// Emit the chart view: a descriptor, a table window or the fallback.
    Chart(ChartArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// Input JSON file, or - for stdin.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

#[derive(Args)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: TableFormatArg,
}

#[derive(Args)]
pub struct SpecArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Chart kind (bar, column, line, point, area, arc).
    ///
    /// Defaults to the kind in the chart controls.
    #[arg(long = "kind", value_enum)]
    pub kind: Option<SpecKindArg>,

    /// Category column (selected automatically when omitted).
    #[arg(long = "category", value_name = "COLUMN")]
    pub category: Option<String>,

    /// Value column (selected automatically when omitted).
    #[arg(long = "value", value_name = "COLUMN")]
    pub value: Option<String>,

    /// Maximum rows embedded in the spec.
    #[arg(long = "limit", default_value_t = qchart_spec::declarative::DEFAULT_LIMIT)]
    pub limit: usize,

    #[arg(long = "width", default_value_t = qchart_spec::declarative::DEFAULT_WIDTH)]
    pub width: u32,

    #[arg(long = "height", default_value_t = qchart_spec::declarative::DEFAULT_HEIGHT)]
    pub height: u32,

    #[command(flatten)]
    pub overrides: ControlOverrides,
}

#[derive(Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub overrides: ControlOverrides,

    /// Print the chart window as a text table instead of JSON.
    #[arg(long = "table")]
    pub table: bool,
}

/// Flags that override values from `--controls`.
#[derive(Args, Default)]
pub struct ControlOverrides {
    /// Chart kind used by the chart view.
    #[arg(long = "chart-kind", value_enum)]
    pub chart_kind: Option<ChartKindArg>,

    /// Rows kept in the chart window.
    #[arg(long = "top-n", value_name = "N")]
    pub top_n: Option<usize>,

    #[arg(long = "sort", value_enum)]
    pub sort: Option<SortArg>,

    /// Palette name.
    #[arg(long = "palette", value_name = "NAME")]
    pub palette: Option<String>,

    /// Rows kept in the display window.
    #[arg(long = "rows", value_name = "N")]
    pub rows: Option<usize>,

    /// Hide value labels.
    #[arg(long = "no-labels")]
    pub no_labels: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TableFormatArg {
    Json,
    Table,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SpecKindArg {
    Bar,
    Column,
    Line,
    Point,
    Area,
    #[value(alias = "donut", alias = "pie")]
    Arc,
}

impl From<SpecKindArg> for DeclarativeKind {
    fn from(kind: SpecKindArg) -> Self {
        match kind {
            SpecKindArg::Bar => Self::Bar,
            SpecKindArg::Column => Self::Column,
            SpecKindArg::Line => Self::Line,
            SpecKindArg::Point => Self::Point,
            SpecKindArg::Area => Self::Area,
            SpecKindArg::Arc => Self::Arc,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ChartKindArg {
    Bar,
    Column,
    Donut,
    Treemap,
    Table,
}

impl From<ChartKindArg> for ChartKind {
    fn from(kind: ChartKindArg) -> Self {
        match kind {
            ChartKindArg::Bar => Self::Bar,
            ChartKindArg::Column => Self::Column,
            ChartKindArg::Donut => Self::Donut,
            ChartKindArg::Treemap => Self::Treemap,
            ChartKindArg::Table => Self::Table,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    ValueDesc,
    ValueAsc,
    LabelAsc,
    LabelDesc,
}

impl From<SortArg> for SortOrder {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::ValueDesc => Self::ValueDesc,
            SortArg::ValueAsc => Self::ValueAsc,
            SortArg::LabelAsc => Self::LabelAsc,
            SortArg::LabelDesc => Self::LabelDesc,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
