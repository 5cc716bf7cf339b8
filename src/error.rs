//! Error types for the annotation engine.
//!
//! Only contract violations and file-level failures are errors. Ordinary
//! user-input inconsistencies (renaming to an empty string, deleting with no
//! selection, loading a table without a label column) are no-ops.

use thiserror::Error;

/// Invalid arguments when constructing a color.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("color must be a valid RGB or RGBA hex string, got {value:?}")]
    InvalidHex { value: String },
    #[error("color hex string must have 6 or 8 digits, got {digits}")]
    WrongDigitCount { digits: usize },
}

/// Failures reading or writing the tabular source.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} has {got} cells, header has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("table has no header row")]
    MissingHeader,
    #[error("column {name:?} does not exist")]
    UnknownColumn { name: String },
    #[error("column {name:?} has {got} cells, table has {expected} rows")]
    LengthMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
}

/// Failures loading the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),
}
