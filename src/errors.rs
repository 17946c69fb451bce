//! Unified application error type.
//! Loader, pipeline, config and export all return AppError so the binary
//! can report every failure the same way.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Time-clock file not found: {}", .0.display())]
    SourceMissing(PathBuf),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid timestamp on line {line}, column {column}: '{value}'")]
    InvalidTimestamp {
        line: u64,
        column: usize,
        value: String,
    },

    #[error("Invalid number on line {line}, column {column}: '{value}'")]
    InvalidNumber {
        line: u64,
        column: usize,
        value: String,
    },

    #[error("Missing field on line {line}, column {column}")]
    MissingField { line: u64, column: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for every error raised while reading rows of the source file.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            AppError::Csv(_)
                | AppError::InvalidTimestamp { .. }
                | AppError::InvalidNumber { .. }
                | AppError::MissingField { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
