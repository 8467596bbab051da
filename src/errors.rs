//! Unified application error type.
//! All modules (source, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Event data
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date format for event {id}: {value}")]
    InvalidDate { id: u32, value: String },

    #[error("Invalid time format for event {id}: {value} (expected HH:MM or TBA)")]
    InvalidTime { id: u32, value: String },

    #[error("Duplicate event id: {0}")]
    DuplicateId(u32),

    // ---------------------------
    // CLI input
    // ---------------------------
    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidAsOf(String),

    #[error("Unknown sport: {0}")]
    UnknownSport(String),

    #[error("Missing sport name after '{0}'. Type 'help' for commands.")]
    MissingSport(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
