//! Text rendering of tables and inspection reports.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use qchart_ingest::ShapeKind;
use qchart_model::{Encoding, Row, Value};
use qchart_spec::ChartDescriptor;
use qchart_transform::{ColumnProfile, is_numeric_value};

/// Render rows of a normalized table. Columns holding numbers are right
/// aligned; nulls are dimmed.
pub fn render_rows(columns: &[String], rows: &[Row]) -> Table {
    let mut table = Table::new();
    table.set_header(columns.iter().map(|name| header_cell(name)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for (idx, column) in columns.iter().enumerate() {
        let numeric = rows
            .iter()
            .any(|row| row.get(column).is_some_and(is_numeric_value));
        if numeric {
            align_column(&mut table, idx, CellAlignment::Right);
        }
    }
    for row in rows {
        table.add_row(
            columns
                .iter()
                .map(|column| value_cell(row.get(column).unwrap_or(&Value::Null)))
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// Render descriptor points as a two-column table.
pub fn render_descriptor(descriptor: &ChartDescriptor) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(descriptor.category_key.as_deref().unwrap_or("category")),
        header_cell(descriptor.value_key.as_deref().unwrap_or("value")),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for point in &descriptor.chart_data {
        let value = if point.value.is_nan() {
            dim_cell("NaN")
        } else {
            Cell::new(Value::Number(point.value).to_string())
        };
        table.add_row(vec![Cell::new(&point.category), value]);
    }
    table
}

/// Render the column profile report of `qchart inspect`.
pub fn render_profiles(shape: ShapeKind, profiles: &[ColumnProfile], encoding: &Encoding) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Numeric"),
        header_cell("Text"),
        header_cell("Role"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    for profile in profiles {
        table.add_row(vec![
            Cell::new(&profile.name),
            flag_cell(profile.numeric),
            flag_cell(profile.textual),
            role_cell(&profile.name, encoding),
        ]);
    }
    table.add_row(vec![
        Cell::new("shape")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(shape.as_str()),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &Value) -> Cell {
    match value {
        Value::Null => dim_cell("null"),
        Value::Other(text) => Cell::new(text).fg(Color::DarkGrey),
        other => Cell::new(other.to_string()),
    }
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn role_cell(name: &str, encoding: &Encoding) -> Cell {
    let category = encoding.category_key.as_deref() == Some(name);
    let value = encoding.value_key.as_deref() == Some(name);
    match (category, value) {
        (true, true) => Cell::new("category+value").fg(Color::Blue),
        (true, false) => Cell::new("category").fg(Color::Blue),
        (false, true) => Cell::new("value").fg(Color::Blue),
        (false, false) => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
