//! Unified application error type.
//! All modules (models, codec, storage, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use crate::models::fields::Field;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Decoding errors (row level)
    // ---------------------------
    #[error("Invalid {field}: '{value}' ({reason})")]
    Validation {
        field: Field,
        value: String,
        reason: String,
    },

    #[error("Malformed row: {0}")]
    Structural(String),

    // ---------------------------
    // Caller-facing operations
    // ---------------------------
    #[error("{0}")]
    Command(String),

    #[error("Nothing to serialize: the roster is empty")]
    EmptyRoster,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Shorthand for a field that does not match its grammar.
    pub fn invalid(field: Field, value: &str, reason: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// True for errors that only invalidate a single row on read.
    pub fn is_row_level(&self) -> bool {
        matches!(
            self,
            AppError::Validation { .. } | AppError::Structural(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
