//! In-memory record cache.
//!
//! Grids are computed from one immutable snapshot of the record set.
//! A refresh discards the snapshot wholesale and refetches; the cache
//! is never patched in place.

use crate::db::pool::DbPool;
use crate::db::queries::load_all_records;
use crate::errors::AppResult;
use crate::models::record::RunRecord;

#[derive(Default)]
pub struct RecordCache {
    records: Option<Vec<RunRecord>>,
}

impl RecordCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached snapshot, fetching it on first use.
    pub fn records(&mut self, pool: &mut DbPool) -> AppResult<&[RunRecord]> {
        if self.records.is_none() {
            self.records = Some(load_all_records(pool)?);
        }
        Ok(self.records.as_deref().unwrap_or_default())
    }

    /// Force a full refetch before the next grid computation.
    pub fn invalidate(&mut self) {
        self.records = None;
    }
}
