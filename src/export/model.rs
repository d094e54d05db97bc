use crate::models::record::RunRecord;
use serde::Serialize;

/// Flat export row: Options flattened to empty strings so every output
/// format sees the same shape.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: i64,
    pub date: String,
    pub project_id: String,
    pub scenario: String,
    pub status: String,
    pub track: String,
    pub engineers: String,
    pub shift: String,
    pub asset_line: String,
    pub platform: String,
}

impl From<&RunRecord> for RecordExport {
    fn from(rec: &RunRecord) -> Self {
        Self {
            id: rec.id,
            date: rec.date_str(),
            project_id: rec.project_id.clone().unwrap_or_default(),
            scenario: rec.scenario.clone().unwrap_or_default(),
            status: rec.status.clone().unwrap_or_default(),
            track: rec.track.clone().unwrap_or_default(),
            engineers: rec.engineers.clone().unwrap_or_default(),
            shift: rec.shift.clone().unwrap_or_default(),
            asset_line: rec.asset_line.clone().unwrap_or_default(),
            platform: rec.platform.clone().unwrap_or_default(),
        }
    }
}
