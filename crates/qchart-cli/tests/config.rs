//! Tests for loading controls, palettes and input payloads.

use std::io::Write;

use qchart_cli::config::{load_controls, load_palettes};
use qchart_cli::input::{LoadedPayload, parse_payload, read_input};
use qchart_ingest::{PayloadFields, ShapeKind};
use qchart_model::{ChartKind, QchartError, SortOrder, Value};
use serde_json::json;
use tempfile::NamedTempFile;

fn temp_json(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(text.as_bytes()).expect("write temp file");
    file
}

#[test]
fn missing_controls_path_uses_defaults() {
    let controls = load_controls(None).expect("defaults");
    assert_eq!(controls.top_n, 10);
    assert_eq!(controls.rows_to_display, 50);
    assert_eq!(controls.chart_kind, ChartKind::Column);
}

#[test]
fn controls_file_overrides_given_fields() {
    let file = temp_json(r#"{"chartKind": "donut", "sortBy": "label_desc", "topN": 3}"#);
    let controls = load_controls(Some(file.path())).expect("load controls");
    assert_eq!(controls.chart_kind, ChartKind::Donut);
    assert_eq!(controls.sort_by, SortOrder::LabelDesc);
    assert_eq!(controls.top_n, 3);
    assert_eq!(controls.palette, "default");
}

#[test]
fn invalid_controls_are_rejected() {
    let file = temp_json(r#"{"rowsToDisplay": 0}"#);
    let error = load_controls(Some(file.path())).expect_err("zero rows");
    assert!(matches!(error, QchartError::InvalidControl { .. }));
}

#[test]
fn missing_controls_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let error = load_controls(Some(&dir.path().join("absent.json"))).expect_err("missing");
    assert!(matches!(error, QchartError::Io(_)));
}

#[test]
fn palette_file_merges_with_builtins() {
    let file = temp_json(r##"{"brand": ["#112233", "#445566"]}"##);
    let palettes = load_palettes(Some(file.path())).expect("load palettes");
    assert_eq!(palettes.get("brand").map(<[String]>::len), Some(2));
    assert!(palettes.get("default").is_some());
}

#[test]
fn empty_palette_is_rejected() {
    let file = temp_json(r#"{"brand": []}"#);
    assert!(load_palettes(Some(file.path())).is_err());
}

#[test]
fn input_is_read_from_file() {
    let file = temp_json(r#"[{"a": 1}]"#);
    let text = read_input(file.path()).expect("read input");
    assert_eq!(parse_payload(&text), json!([{"a": 1}]));
}

#[test]
fn non_json_input_becomes_text() {
    let raw = parse_payload("Totals: [[\"x\", 4]] done");
    assert!(raw.is_string());
    let payload = LoadedPayload::new("Totals: [[\"x\", 4]] done", false);
    let fields = PayloadFields::default();
    assert_eq!(payload.shape(&fields), ShapeKind::EncodedString);
    let table = payload.normalize(&fields).expect("embedded array");
    assert_eq!(table.columns, vec!["label", "value"]);
    assert_eq!(table.rows[0].get("value"), Some(&Value::Number(4.0)));
}

#[test]
fn response_payload_is_extracted() {
    let text = r#"{"final_response": "no table here", "sql_result": [{"k": "a", "n": 2}]}"#;
    let payload = LoadedPayload::new(text, true);
    let fields = PayloadFields::default();
    assert_eq!(payload.shape(&fields), ShapeKind::RecordArray);
    let table = payload.normalize(&fields).expect("normalized");
    assert_eq!(table.columns, vec!["k", "n"]);
}

#[test]
fn plain_object_is_unsupported_without_response_flag() {
    let payload = LoadedPayload::new(r#"{"sql_result": [{"k": "a"}]}"#, false);
    let fields = PayloadFields::default();
    assert_eq!(payload.shape(&fields), ShapeKind::Unsupported);
    assert!(payload.normalize(&fields).is_none());
}
