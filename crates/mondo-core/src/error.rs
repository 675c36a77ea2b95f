// crates/mondo-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading, aggregating or writing travel data.
#[derive(Debug, Error)]
pub enum MondoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid data in {path}: {reason}")]
    InvalidData { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, MondoError>;
