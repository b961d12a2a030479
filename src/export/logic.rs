// src/export/logic.rs

use crate::db::tips::TipCalcDb;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export every stored tip.
    ///
    /// - `file` must be an absolute path
    /// - an existing file is overwritten only with `force` or after confirmation
    ///
    /// Returns the number of tips written.
    pub fn export(db: &TipCalcDb, format: ExportFormat, file: &str, force: bool) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let tips = db.get_tips()?;
        if tips.is_empty() {
            warning("No tips saved, nothing to export.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => csv::write_csv(path, &tips)?,
            ExportFormat::Json => json::write_json(path, &tips)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), tips.len(), path);
        Ok(tips.len())
    }
}
