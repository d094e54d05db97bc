use crate::errors::{AppError, AppResult};
use crate::export::model::RecordExport;
use std::path::Path;

pub fn write_csv(rows: &[RecordExport], path: &Path) -> AppResult<()> {
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    writer.flush()?;
    Ok(())
}
