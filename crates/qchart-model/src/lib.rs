//! Shared data model for qchart.
//!
//! - **value**: cell values and their loose numeric/text coercions
//! - **table**: the canonical `{columns, rows}` table
//! - **encoding**: category/value column roles
//! - **controls**: chart control state consumed as configuration
//! - **palette**: injected palette configuration

pub mod controls;
pub mod encoding;
pub mod error;
pub mod palette;
pub mod table;
pub mod value;

pub use controls::{ChartControlState, ChartKind, SortOrder};
pub use encoding::Encoding;
pub use error::{QchartError, Result};
pub use palette::PaletteRegistry;
pub use table::{NormalizedTable, Row};
pub use value::{Value, json_number};
