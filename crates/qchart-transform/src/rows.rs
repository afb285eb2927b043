//! Row ordering and truncation.
//!
//! Rows are sorted once; the chart window and the table-display window are
//! then independent prefixes of that same sorted sequence.

use std::cmp::Ordering;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};
use qchart_model::{ChartControlState, Row, SortOrder, Value};
use tracing::{debug, warn};

/// First finite number in column order, or `0`.
pub fn representative_value(row: &Row) -> f64 {
    row.values().find_map(Value::as_finite).unwrap_or(0.0)
}

/// First string in column order, or `""`.
pub fn representative_label(row: &Row) -> &str {
    row.values().find_map(Value::as_text).unwrap_or("")
}

/// Root-locale collation of category labels at tertiary strength: accents
/// sort next to their base letter and lowercase precedes uppercase.
pub struct LabelCollator {
    collator: Option<CollatorBorrowed<'static>>,
}

impl LabelCollator {
    pub fn new() -> Self {
        let mut options = CollatorOptions::default();
        options.strength = Some(Strength::Tertiary);
        let collator = match Collator::try_new(Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(error) => {
                warn!(%error, "label collation unavailable, comparing code points");
                None
            }
        };
        Self { collator }
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(left, right),
            None => left.cmp(right),
        }
    }
}

impl Default for LabelCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two labels with a fresh [`LabelCollator`].
pub fn compare_labels(left: &str, right: &str) -> Ordering {
    LabelCollator::new().compare(left, right)
}

// Representative values are always finite, so the comparison is total.
fn compare_values(left: f64, right: f64) -> Ordering {
    left.partial_cmp(&right).unwrap_or(Ordering::Equal)
}

/// Return a sorted copy of `rows`. The sort is stable.
pub fn sort_rows(rows: &[Row], sort_by: SortOrder) -> Vec<Row> {
    let mut sorted = rows.to_vec();
    match sort_by {
        SortOrder::ValueDesc => {
            sorted.sort_by(|a, b| compare_values(representative_value(b), representative_value(a)));
        }
        SortOrder::ValueAsc => {
            sorted.sort_by(|a, b| compare_values(representative_value(a), representative_value(b)));
        }
        SortOrder::LabelAsc => {
            let collator = LabelCollator::new();
            sorted.sort_by(|a, b| collator.compare(representative_label(a), representative_label(b)));
        }
        SortOrder::LabelDesc => {
            let collator = LabelCollator::new();
            sorted.sort_by(|a, b| collator.compare(representative_label(b), representative_label(a)));
        }
    }
    sorted
}

/// Chart and table-display windows over one sorted row sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowWindows<'a> {
    /// First `top_n` rows.
    pub chart: &'a [Row],
    /// First `rows_to_display` rows.
    pub display: &'a [Row],
}

/// Slice both windows from the start of `sorted`.
pub fn windows(sorted: &[Row], top_n: usize, rows_to_display: usize) -> RowWindows<'_> {
    RowWindows {
        chart: &sorted[..top_n.min(sorted.len())],
        display: &sorted[..rows_to_display.min(sorted.len())],
    }
}

/// Rows sorted per the chart controls. Pair with [`windows`].
pub fn prepare_rows(rows: &[Row], controls: &ChartControlState) -> Vec<Row> {
    let sorted = sort_rows(rows, controls.sort_by);
    debug!(
        rows = sorted.len(),
        sort = controls.sort_by.as_str(),
        top_n = controls.top_n,
        rows_to_display = controls.rows_to_display,
        "sorted rows"
    );
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn representative_scan_follows_column_order() {
        let row = Row::from_pairs([
            ("note", Value::Null),
            ("count", Value::Number(f64::NAN)),
            ("region", Value::from("north")),
            ("sales", Value::Number(12.0)),
            ("alt", Value::from("south")),
        ]);
        assert_eq!(representative_value(&row), 12.0);
        assert_eq!(representative_label(&row), "north");
    }

    #[test]
    fn representative_defaults() {
        let row = Row::from_pairs([("flag", Value::Other("true".into()))]);
        assert_eq!(representative_value(&row), 0.0);
        assert_eq!(representative_label(&row), "");
    }

    #[test]
    fn labels_collate_by_letter_before_case() {
        assert_eq!(compare_labels("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_labels("Zed", "alpha"), Ordering::Greater);
        assert_eq!(compare_labels("a", "A"), Ordering::Less);
        assert_eq!(compare_labels("élan", "zebra"), Ordering::Less);
        assert_eq!(compare_labels("same", "same"), Ordering::Equal);
    }
}
