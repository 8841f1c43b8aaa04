use chrono::NaiveDate;
use thiserror::Error;

use crate::models::DATE_FORMAT;

/// Commute expenses error types
#[derive(Error, Debug)]
pub enum ExpenseError {
    #[error("There already is a record for {}.", .0.format(DATE_FORMAT))]
    DuplicateDate(NaiveDate),

    #[error("No travel found with date {}.", .0.format(DATE_FORMAT))]
    NotFound(NaiveDate),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("History file error: {0}")]
    History(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for commute expenses operations
pub type Result<T> = std::result::Result<T, ExpenseError>;
