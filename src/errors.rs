//! Unified application error type.
//! All modules (db, core, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Schema error: {0}")]
    Schema(String),

    // ---------------------------
    // Arguments
    // ---------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid timestamp stored in database: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// True for failures coming from the storage layer (SQLite or filesystem).
    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::Io(_) | AppError::Db(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
