//! Tests for payload normalization.

use proptest::prelude::*;
use qchart_ingest::{normalize, normalize_direct_table, normalize_records, normalize_tuples};
use qchart_model::{NormalizedTable, Value};
use serde_json::{Value as JsonValue, json};

fn cells(table: &NormalizedTable, idx: usize) -> Vec<(&str, &Value)> {
    table.rows[idx]
        .cells
        .iter()
        .map(|(k, v)| (k.as_str(), v))
        .collect()
}

#[test]
fn direct_table_fills_missing_columns() {
    let table = normalize(&json!({"columns": ["a", "b"], "rows": [{"a": 1}]})).expect("table");
    assert_eq!(table.columns, vec!["a", "b"]);
    assert_eq!(
        cells(&table, 0),
        vec![("a", &Value::Number(1.0)), ("b", &Value::Null)]
    );
}

#[test]
fn direct_table_writes_back_integers_unchanged() {
    let table = normalize(&json!({"columns": ["a", "b"], "rows": [{"a": 1}]})).expect("table");
    assert_eq!(
        serde_json::to_value(&table).expect("serialize"),
        json!({"columns": ["a", "b"], "rows": [{"a": 1, "b": null}]})
    );
}

#[test]
fn record_array_keeps_whole_years_integral() {
    let table = normalize(&json!([{"year": 2024, "n": 3, "share": 0.25}])).expect("table");
    assert_eq!(
        serde_json::to_value(&table).expect("serialize"),
        json!({"columns": ["year", "n", "share"], "rows": [{"year": 2024, "n": 3, "share": 0.25}]})
    );
}

#[test]
fn direct_table_drops_undeclared_fields() {
    let table = normalize(&json!({
        "columns": ["region"],
        "rows": [{"region": "north", "sales": 10}]
    }))
    .expect("table");
    assert_eq!(cells(&table, 0), vec![("region", &Value::from("north"))]);
}

#[test]
fn direct_table_maps_array_rows_positionally() {
    let columns = vec![json!("region"), json!("sales")];
    let rows = vec![json!(["north", 10]), json!(["south"]), json!(5)];
    let table = normalize_direct_table(&columns, &rows);
    assert_eq!(
        cells(&table, 0),
        vec![("region", &Value::from("north")), ("sales", &Value::Number(10.0))]
    );
    assert_eq!(table.rows[1].get("sales"), Some(&Value::Null));
    assert!(table.rows[2].values().all(Value::is_null));
}

#[test]
fn record_array_unions_keys_in_first_seen_order() {
    let table = normalize(&json!([{"a": 1}, {"b": 2}])).expect("table");
    assert_eq!(table.columns, vec!["a", "b"]);
    assert_eq!(
        cells(&table, 0),
        vec![("a", &Value::Number(1.0)), ("b", &Value::Null)]
    );
    assert_eq!(
        cells(&table, 1),
        vec![("a", &Value::Null), ("b", &Value::Number(2.0))]
    );
}

#[test]
fn record_array_keeps_source_key_order() {
    let table = normalize_records(&[json!({"zeta": 1, "alpha": "x"}), json!({"mid": true})]);
    assert_eq!(table.columns, vec!["zeta", "alpha", "mid"]);
    assert_eq!(table.rows[1].get("mid"), Some(&Value::Other("true".into())));
}

#[test]
fn record_array_non_objects_become_null_rows() {
    let table = normalize(&json!([{"a": 1}, 7])).expect("table");
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows[1].get("a"), Some(&Value::Null));
}

#[test]
fn tuple_pairs_become_label_value() {
    let table = normalize(&json!([["north", 12], ["south", 7]])).expect("table");
    assert_eq!(table.columns, vec!["label", "value"]);
    assert_eq!(table.rows[1].get("value"), Some(&Value::Number(7.0)));
}

#[test]
fn tuple_width_uses_longest_row() {
    let table = normalize(&json!([["north", 12], ["south", 7, "q1"]])).expect("table");
    assert_eq!(table.columns, vec!["col_1", "col_2", "col_3"]);
    assert_eq!(table.rows[0].get("col_3"), Some(&Value::Null));
    assert_eq!(table.rows[1].get("col_3"), Some(&Value::from("q1")));
}

#[test]
fn tuple_pair_naming_applies_when_later_rows_are_shorter() {
    let table = normalize_tuples(&[json!(["a"]), json!(["b", 2])]);
    assert_eq!(table.columns, vec!["label", "value"]);
    assert_eq!(table.rows[0].get("value"), Some(&Value::Null));
}

#[test]
fn empty_array_is_valid_and_empty() {
    let table = normalize(&json!([])).expect("empty array is supported");
    assert_eq!(table, NormalizedTable::empty());
    assert!(table.columns.is_empty());
    assert!(table.rows.is_empty());
}

#[test]
fn scalars_are_unsupported() {
    assert_eq!(normalize(&JsonValue::Null), None);
    assert_eq!(normalize(&json!(42)), None);
    assert_eq!(normalize(&json!(true)), None);
    assert_eq!(normalize(&json!({"answer": "none"})), None);
    assert_eq!(normalize(&json!([1, 2, 3])), None);
}

#[test]
fn encoded_scalar_array_is_rejected() {
    assert_eq!(normalize(&json!("prefix [1,2,3] suffix")), None);
}

#[test]
fn encoded_records_are_recursed_into() {
    let text = r#"Top regions: [{"region": "north", "sales": 12}, {"region": "south"}] as requested"#;
    let table = normalize(&json!(text)).expect("table");
    assert_eq!(table.columns, vec!["region", "sales"]);
    assert_eq!(table.rows[1].get("sales"), Some(&Value::Null));
}

#[test]
fn encoded_empty_array_is_empty_table() {
    assert_eq!(normalize(&json!("nothing found: []")), Some(NormalizedTable::empty()));
}

#[test]
fn encoded_string_failures_are_unsupported() {
    assert_eq!(normalize(&json!("no brackets here")), None);
    assert_eq!(normalize(&json!("broken [1, 2")), None);
    assert_eq!(normalize(&json!("")), None);
}

#[test]
fn encoded_string_does_not_recurse_twice() {
    assert_eq!(normalize(&json!(r#"["[[1, 2]]"]"#)), None);
}

fn record_strategy() -> impl Strategy<Value = JsonValue> {
    prop::collection::btree_map("[a-d]", 0i64..100, 0..4)
        .prop_map(|map| JsonValue::Object(map.into_iter().map(|(k, v)| (k, json!(v))).collect()))
}

proptest! {
    #[test]
    fn every_record_row_has_every_column(records in prop::collection::vec(record_strategy(), 1..8)) {
        let table = normalize(&JsonValue::Array(records.clone())).expect("record array");
        prop_assert_eq!(table.row_count(), records.len());
        for row in &table.rows {
            let keys: Vec<&String> = row.cells.keys().collect();
            let columns: Vec<&String> = table.columns.iter().collect();
            prop_assert_eq!(keys, columns);
        }
    }
}
