//! Library components of the `qchart` command-line tool.

pub mod config;
pub mod input;
pub mod logging;
pub mod render;
