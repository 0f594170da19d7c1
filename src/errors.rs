//! Unified application error type.
//! All modules (db, core, cli, map, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

/// Message shown when a submitted workout fails validation.
pub const INVALID_INPUT_MSG: &str = "Inputs have to be positive numbers!";

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoords(String),

    #[error("No position selected: click on the map (or pass --at LAT,LNG) first")]
    NoPositionSelected,

    // ---------------------------
    // Collaborators
    // ---------------------------
    #[error("Could not get your location: {0}")]
    Geolocation(String),

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

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// The validation failure raised for non-finite or non-positive inputs.
    pub fn invalid_input() -> Self {
        AppError::InvalidInput(INVALID_INPUT_MSG.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
