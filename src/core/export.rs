use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ensure_writable, export_csv, export_json};
use crate::models::workout::Workout;
use std::fs;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write `workouts` to `file` in the requested format.
    /// Returns the number of exported workouts.
    pub fn export(
        workouts: &[Workout],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if path.is_dir() {
            return Err(AppError::Export(format!(
                "'{}' is a directory",
                path.display()
            )));
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(workouts, path)?,
            ExportFormat::Json => export_json(workouts, path)?,
        }

        Ok(workouts.len())
    }
}
