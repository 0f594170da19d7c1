// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;

pub use fs_utils::ensure_writable;
pub use json_csv::{export_csv, export_json};
pub use model::WorkoutExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, count: usize, path: &Path) {
    success(format!(
        "{label} export completed: {count} workout(s) → {}",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
