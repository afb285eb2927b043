//! Table transforms shared by every chart output.
//!
//! - **classify**: numeric/text classification of values and columns
//! - **encoding**: the single category/value column selector
//! - **rows**: stable sorting and window truncation

pub mod classify;
pub mod encoding;
pub mod rows;

pub use classify::{ColumnProfile, is_numeric_value, is_text_value, profile_columns};
pub use encoding::{resolve_encoding, select_encoding, select_table_encoding};
pub use rows::{
    LabelCollator, RowWindows, compare_labels, prepare_rows, representative_label,
    representative_value, sort_rows, windows,
};
