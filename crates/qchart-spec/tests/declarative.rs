//! Tests for the declarative spec generator.

use qchart_model::{NormalizedTable, Row, Value};
use qchart_spec::{DeclarativeKind, DeclarativeOptions, build_declarative_spec};
use serde_json::json;

fn sales_table() -> NormalizedTable {
    let mut table = NormalizedTable::new(["region", "sales"]);
    table.push_row(Row::from_pairs([
        ("region", Value::from("north")),
        ("sales", Value::Number(12.5)),
    ]));
    table.push_row(Row::from_pairs([
        ("region", Value::from("south")),
        ("sales", Value::Number(7.25)),
    ]));
    table
}

fn spec(table: &NormalizedTable, kind: DeclarativeKind) -> serde_json::Value {
    build_declarative_spec(table, &DeclarativeOptions::new(kind)).expect("spec")
}

#[test]
fn bar_spec_snapshot() {
    let spec = spec(&sales_table(), DeclarativeKind::Bar);
    insta::assert_json_snapshot!(spec, @r#"
    {
      "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
      "data": {
        "values": [
          {
            "region": "north",
            "sales": 12.5
          },
          {
            "region": "south",
            "sales": 7.25
          }
        ]
      },
      "mark": {
        "type": "bar",
        "tooltip": true
      },
      "encoding": {
        "y": {
          "field": "region",
          "type": "nominal",
          "sort": null
        },
        "x": {
          "field": "sales",
          "type": "quantitative"
        }
      },
      "width": 400,
      "height": 320
    }
    "#);
}

#[test]
fn column_line_point_and_area_put_category_on_x() {
    let table = sales_table();
    for (kind, mark) in [
        (DeclarativeKind::Column, "bar"),
        (DeclarativeKind::Line, "line"),
        (DeclarativeKind::Point, "point"),
        (DeclarativeKind::Area, "area"),
    ] {
        let spec = spec(&table, kind);
        assert_eq!(spec["mark"]["type"], mark);
        assert_eq!(spec["encoding"]["x"]["field"], "region");
        assert_eq!(spec["encoding"]["y"]["field"], "sales");
    }
}

#[test]
fn arc_maps_value_to_theta_regardless_of_column_order() {
    let mut table = NormalizedTable::new(["sales", "units", "region"]);
    table.push_row(Row::from_pairs([
        ("sales", Value::Number(3.0)),
        ("units", Value::Number(1.0)),
        ("region", Value::from("north")),
    ]));
    let spec = spec(&table, DeclarativeKind::Arc);
    assert_eq!(spec["mark"]["type"], "arc");
    assert_eq!(spec["encoding"]["theta"]["field"], "sales");
    assert_eq!(spec["encoding"]["color"]["field"], "region");
    assert!(spec["encoding"].get("x").is_none());
}

#[test]
fn unrecognized_kind_uses_column_mapping() {
    let options = DeclarativeOptions::new(DeclarativeKind::from_name("sunburst"));
    let spec = build_declarative_spec(&sales_table(), &options).expect("spec");
    assert_eq!(spec["mark"]["type"], "bar");
    assert_eq!(spec["encoding"]["x"]["field"], "region");
}

#[test]
fn rows_are_taken_in_order_up_to_limit() {
    let mut table = NormalizedTable::new(["name", "n"]);
    for (name, n) in [("c", 1.0), ("a", 9.0), ("b", 5.0)] {
        table.push_row(Row::from_pairs([("name", Value::from(name)), ("n", Value::Number(n))]));
    }
    let options = DeclarativeOptions::new(DeclarativeKind::Column).with_limit(2);
    let spec = build_declarative_spec(&table, &options).expect("spec");
    assert_eq!(
        spec["data"]["values"],
        json!([{"name": "c", "n": 1}, {"name": "a", "n": 9}])
    );
}

#[test]
fn emitted_values_are_coerced() {
    let mut table = NormalizedTable::new(["name", "n", "flag", "extra"]);
    table.push_row(Row::from_pairs([
        ("name", Value::from("a")),
        ("n", Value::Number(2.0)),
        ("flag", Value::Other("true".into())),
        ("extra", Value::Null),
    ]));
    table.push_row(Row::from_pairs([
        ("name", Value::from("b")),
        ("n", Value::Number(f64::NAN)),
    ]));
    let spec = spec(&table, DeclarativeKind::Column);
    assert_eq!(
        spec["data"]["values"],
        json!([
            {"name": "a", "n": 2, "flag": "true", "extra": null},
            {"name": "b", "n": "NaN", "flag": null, "extra": null}
        ])
    );
}

#[test]
fn explicit_keys_override_selection() {
    let options = DeclarativeOptions::new(DeclarativeKind::Column)
        .with_keys(Some("sales".to_string()), Some("sales".to_string()));
    let spec = build_declarative_spec(&sales_table(), &options).expect("spec");
    assert_eq!(spec["encoding"]["x"]["field"], "sales");
}

#[test]
fn size_and_palette_hints_are_applied() {
    let colors = vec!["#111111".to_string(), "#222222".to_string()];
    let options = DeclarativeOptions::new(DeclarativeKind::Column)
        .with_size(640, 480)
        .with_palette(colors.clone());
    let spec = build_declarative_spec(&sales_table(), &options).expect("spec");
    assert_eq!(spec["width"], 640);
    assert_eq!(spec["height"], 480);
    assert_eq!(spec["mark"]["color"], "#111111");

    let options = DeclarativeOptions::new(DeclarativeKind::Arc).with_palette(colors);
    let spec = build_declarative_spec(&sales_table(), &options).expect("spec");
    assert_eq!(spec["encoding"]["color"]["scale"]["range"], json!(["#111111", "#222222"]));
}

#[test]
fn empty_or_unencodable_tables_have_no_spec() {
    let options = DeclarativeOptions::default();
    assert_eq!(build_declarative_spec(&NormalizedTable::empty(), &options), None);
    assert_eq!(build_declarative_spec(&NormalizedTable::new(["a"]), &options), None);

    let mut text_only = NormalizedTable::new(["name"]);
    text_only.push_row(Row::from_pairs([("name", Value::from("a"))]));
    assert_eq!(build_declarative_spec(&text_only, &options), None);
}
