use crate::errors::{AppError, AppResult};
use crate::export::model::RecordExport;
use std::fs::File;
use std::path::Path;

pub fn write_json(rows: &[RecordExport], path: &Path) -> AppResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, rows).map_err(|e| AppError::Export(e.to_string()))?;
    Ok(())
}
