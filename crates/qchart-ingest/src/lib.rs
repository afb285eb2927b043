//! Payload ingestion for qchart.
//!
//! Upstream results have no fixed shape. This crate tags each payload with
//! its shape and rebuilds it as a [`qchart_model::NormalizedTable`]:
//!
//! - **shape**: explicit classification into direct tables, record arrays,
//!   tuple arrays, encoded strings and unsupported values
//! - **normalize**: one pure function per shape
//! - **embedded**: array literals inside free text
//! - **payload**: picking the result field out of an upstream response

pub mod embedded;
pub mod normalize;
pub mod payload;
pub mod shape;

pub use normalize::{
    normalize, normalize_array, normalize_direct_table, normalize_encoded_string,
    normalize_records, normalize_tuples,
};
pub use payload::{PayloadFields, extract_payload, normalize_response};
pub use shape::{RawShape, ShapeKind, classify_shape};
