use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span, warn};

use qchart_cli::config::{load_controls, load_palettes};
use qchart_cli::input::{LoadedPayload, read_input};
use qchart_cli::render::{render_descriptor, render_profiles, render_rows};
use qchart_ingest::{PayloadFields, ShapeKind};
use qchart_model::{ChartControlState, NormalizedTable, PaletteRegistry};
use qchart_spec::{
    ChartView, DeclarativeKind, DeclarativeOptions, build_declarative_spec, plan_chart_view,
};
use qchart_transform::{profile_columns, select_table_encoding, sort_rows};

use crate::cli::{
    ChartArgs, Cli, ControlOverrides, InputArgs, NormalizeArgs, SpecArgs, TableFormatArg,
};

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The input had no supported table shape.
    Unsupported(ShapeKind),
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Done => 0,
            Self::Unsupported(_) => 2,
        }
    }
}

/// Configuration shared by every subcommand.
pub struct Session {
    pub controls: ChartControlState,
    pub palettes: PaletteRegistry,
    pub fields: PayloadFields,
    pub is_response: bool,
}

impl Session {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let controls = load_controls(cli.controls.as_deref()).context("load chart controls")?;
        let palettes = load_palettes(cli.palettes.as_deref()).context("load palettes")?;
        Ok(Self {
            controls,
            palettes,
            fields: PayloadFields::default(),
            is_response: cli.response,
        })
    }

    fn load(&self, args: &InputArgs) -> Result<LoadedPayload> {
        let text = read_input(&args.input)
            .with_context(|| format!("read {}", args.input.display()))?;
        Ok(LoadedPayload::new(&text, self.is_response))
    }

    /// Normalize the input. The table is `None` for an unsupported shape.
    fn table(&self, args: &InputArgs) -> Result<(ShapeKind, Option<NormalizedTable>)> {
        let payload = self.load(args)?;
        let shape = payload.shape(&self.fields);
        let table = payload.normalize(&self.fields);
        match &table {
            Some(table) => info!(
                shape = shape.as_str(),
                columns = table.columns.len(),
                rows = table.row_count(),
                "normalized input"
            ),
            None => warn!(shape = shape.as_str(), "unsupported input shape"),
        }
        Ok((shape, table))
    }

    fn controls_with(&self, overrides: &ControlOverrides) -> Result<ChartControlState> {
        let controls = apply_overrides(self.controls.clone(), overrides);
        controls.validate().context("invalid chart controls")?;
        Ok(controls)
    }
}

pub fn run_normalize(session: &Session, args: &NormalizeArgs) -> Result<Outcome> {
    let _span = info_span!("normalize").entered();
    let (shape, table) = session.table(&args.input)?;
    let Some(table) = table else {
        return Ok(unsupported(shape));
    };
    match args.format {
        TableFormatArg::Json => print_json(&table)?,
        TableFormatArg::Table => println!("{}", render_rows(&table.columns, &table.rows)),
    }
    Ok(Outcome::Done)
}

pub fn run_inspect(session: &Session, args: &InputArgs) -> Result<Outcome> {
    let _span = info_span!("inspect").entered();
    let (shape, table) = session.table(args)?;
    let Some(table) = table else {
        return Ok(unsupported(shape));
    };
    let profiles = profile_columns(&table);
    let encoding = select_table_encoding(&table);
    println!("Rows: {}", table.row_count());
    println!("{}", render_profiles(shape, &profiles, &encoding));
    Ok(Outcome::Done)
}

pub fn run_spec(session: &Session, args: &SpecArgs) -> Result<Outcome> {
    let _span = info_span!("spec").entered();
    let controls = session.controls_with(&args.overrides)?;
    let (shape, table) = session.table(&args.input)?;
    let Some(table) = table else {
        return Ok(unsupported(shape));
    };
    let kind = args
        .kind
        .map_or_else(|| DeclarativeKind::from(controls.chart_kind), Into::into);
    let sorted = table.with_rows(sort_rows(&table.rows, controls.sort_by));
    let options = DeclarativeOptions::new(kind)
        .with_keys(args.category.clone(), args.value.clone())
        .with_limit(args.limit)
        .with_size(args.width, args.height)
        .with_palette(session.palettes.resolve(&controls.palette).to_vec());
    let spec = build_declarative_spec(&sorted, &options);
    if spec.is_none() {
        info!("no category/value columns, spec is null");
    }
    print_json(&spec)?;
    Ok(Outcome::Done)
}

pub fn run_chart(session: &Session, args: &ChartArgs) -> Result<Outcome> {
    let _span = info_span!("chart").entered();
    let controls = session.controls_with(&args.overrides)?;
    let (shape, table) = session.table(&args.input)?;
    let Some(table) = table else {
        return Ok(unsupported(shape));
    };
    let view = plan_chart_view(&table, &controls, &session.palettes);
    if !args.table {
        print_json(&view)?;
        return Ok(Outcome::Done);
    }
    match &view {
        ChartView::Table { columns, rows } => println!("{}", render_rows(columns, rows)),
        ChartView::Chart { descriptor, .. } => println!("{}", render_descriptor(descriptor)),
        ChartView::NoNumericColumn { message } => println!("{message}"),
    }
    Ok(Outcome::Done)
}

fn apply_overrides(mut controls: ChartControlState, overrides: &ControlOverrides) -> ChartControlState {
    if let Some(kind) = overrides.chart_kind {
        controls.chart_kind = kind.into();
    }
    if let Some(top_n) = overrides.top_n {
        controls.top_n = top_n;
    }
    if let Some(sort) = overrides.sort {
        controls.sort_by = sort.into();
    }
    if let Some(palette) = &overrides.palette {
        controls.palette.clone_from(palette);
    }
    if let Some(rows) = overrides.rows {
        controls.rows_to_display = rows;
    }
    if overrides.no_labels {
        controls.show_labels = false;
    }
    controls
}

fn unsupported(shape: ShapeKind) -> Outcome {
    eprintln!("error: unsupported input shape ({shape})");
    Outcome::Unsupported(shape)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ChartKindArg, SortArg};
    use qchart_model::{ChartKind, SortOrder};

    #[test]
    fn overrides_replace_only_given_fields() {
        let overrides = ControlOverrides {
            chart_kind: Some(ChartKindArg::Donut),
            sort: Some(SortArg::LabelAsc),
            no_labels: true,
            ..ControlOverrides::default()
        };
        let controls = apply_overrides(ChartControlState::default().with_top_n(4), &overrides);
        assert_eq!(controls.chart_kind, ChartKind::Donut);
        assert_eq!(controls.sort_by, SortOrder::LabelAsc);
        assert_eq!(controls.top_n, 4);
        assert!(!controls.show_labels);
    }

    #[test]
    fn unsupported_input_exits_with_two() {
        assert_eq!(Outcome::Unsupported(ShapeKind::Unsupported).exit_code(), 2);
        assert_eq!(Outcome::Done.exit_code(), 0);
    }
}
