use thiserror::Error;

#[derive(Debug, Error)]
pub enum QchartError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("palette '{0}' has no colors")]
    InvalidPalette(String),
    #[error("invalid chart control {field}: {reason}")]
    InvalidControl {
        field: &'static str,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, QchartError>;
