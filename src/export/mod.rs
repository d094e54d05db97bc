mod csv;
mod json;
mod model;

pub use model::RecordExport;

use crate::errors::{AppError, AppResult};
use crate::models::record::RunRecord;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use clap::ValueEnum;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Dump the normalized record set to a file.
///
/// The output path must be absolute; an existing file is only
/// overwritten with `--force`.
pub fn export_records(
    records: &[RunRecord],
    format: ExportFormat,
    file: &str,
    force: bool,
) -> AppResult<()> {
    let path = expand_tilde(file);
    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "Output file path must be absolute: {file}"
        )));
    }

    ensure_writable(&path, force)?;

    if records.is_empty() {
        println!("⚠️  No records found. Nothing to export.");
        return Ok(());
    }

    let rows: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();

    match format {
        ExportFormat::Csv => csv::write_csv(&rows, &path)?,
        ExportFormat::Json => json::write_json(&rows, &path)?,
    }

    success(format!("Exported {} records to {}", rows.len(), file));
    Ok(())
}

fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::from(io::Error::other(format!(
            "File already exists: {} (use --force to overwrite)",
            path.display()
        ))));
    }
    Ok(())
}
