use chrono::NaiveDate;
use serde::Serialize;

/// Status value that marks a run still to be executed. Any other status
/// counts as done for coloring purposes.
pub const STATUS_TODO: &str = "to-do";

/// One scheduled test execution, as stored in the `runs` table.
///
/// Every string field is optional: trimming and the collapse of
/// ""/"nan"/NULL into None happen once, at ingestion (see `normalize`
/// and `db::queries::map_row`), so downstream grouping never has to
/// re-coerce values.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunRecord {
    pub id: i64,
    pub project_id: Option<String>,
    pub scenario: Option<String>,
    pub status: Option<String>,
    pub track: Option<String>,
    /// Comma-separated list of engineer identifiers (multi-valued).
    pub engineers: Option<String>,
    /// One of M/P/N, pipe-combined ("M|P"), or None meaning M and P.
    pub shift: Option<String>,
    pub asset_line: Option<String>,
    pub platform: Option<String>,
    /// None when the stored value was missing or unparseable; such a
    /// record is excluded from every date-indexed grid.
    pub date: Option<NaiveDate>,
}

/// Canonical "no value" coercion: trim, then treat empty strings and the
/// literal text "nan" (any case) the same as NULL.
pub fn clean_field(value: Option<&str>) -> Option<String> {
    let v = value?.trim();
    if v.is_empty() || v.eq_ignore_ascii_case("nan") {
        return None;
    }
    Some(v.to_string())
}

impl RunRecord {
    /// Re-apply the ingestion coercion on records built in memory
    /// (CLI `add`, tests). Idempotent on already-clean records.
    pub fn normalize(mut self) -> Self {
        self.project_id = clean_field(self.project_id.as_deref());
        self.scenario = clean_field(self.scenario.as_deref());
        self.status = clean_field(self.status.as_deref());
        self.track = clean_field(self.track.as_deref());
        self.engineers = clean_field(self.engineers.as_deref());
        self.shift = clean_field(self.shift.as_deref());
        self.asset_line = clean_field(self.asset_line.as_deref());
        self.platform = clean_field(self.platform.as_deref());
        self
    }

    /// True when the run is still to be executed ("to-do"), which
    /// overrides the normal cell color with the alert color.
    pub fn is_alert(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(STATUS_TODO))
    }

    pub fn date_str(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}
