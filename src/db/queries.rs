use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::record::{RunRecord, clean_field};
use crate::utils::date;
use rusqlite::{Connection, Result, Row, params};

/// How many rows one page of the full fetch pulls in.
const PAGE_SIZE: i64 = 1000;

/// Map one `runs` row into a normalized RunRecord.
///
/// This is the single normalization pass: trimming and the
/// NULL/""/"nan" collapse happen here, and an unparseable run_date
/// becomes None (the record stays visible to `list`, but never enters
/// a date-indexed grid).
pub fn map_row(row: &Row) -> Result<RunRecord> {
    let raw_date: Option<String> = row.get("run_date")?;
    let date = clean_field(raw_date.as_deref()).and_then(|s| date::parse_date(&s));

    Ok(RunRecord {
        id: row.get("id")?,
        project_id: clean_field(row.get::<_, Option<String>>("project_id")?.as_deref()),
        scenario: clean_field(row.get::<_, Option<String>>("scenario")?.as_deref()),
        status: clean_field(row.get::<_, Option<String>>("status")?.as_deref()),
        track: clean_field(row.get::<_, Option<String>>("track")?.as_deref()),
        engineers: clean_field(row.get::<_, Option<String>>("engineers")?.as_deref()),
        shift: clean_field(row.get::<_, Option<String>>("shift")?.as_deref()),
        asset_line: clean_field(row.get::<_, Option<String>>("asset_line")?.as_deref()),
        platform: clean_field(row.get::<_, Option<String>>("platform")?.as_deref()),
        date,
    })
}

/// Fetch the complete record set, paging through the table so callers
/// always receive the whole thing already assembled.
pub fn load_all_records(pool: &mut DbPool) -> AppResult<Vec<RunRecord>> {
    let mut out = Vec::new();
    let mut offset: i64 = 0;

    loop {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT * FROM runs
             ORDER BY id ASC
             LIMIT ?1 OFFSET ?2",
        )?;

        let rows = stmt.query_map(params![PAGE_SIZE, offset], map_row)?;

        let mut batch = Vec::new();
        for r in rows {
            batch.push(r?);
        }

        let got = batch.len() as i64;
        out.extend(batch);

        if got < PAGE_SIZE {
            break;
        }
        offset += PAGE_SIZE;
    }

    Ok(out)
}

pub fn insert_record(conn: &Connection, rec: &RunRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO runs (project_id, scenario, status, track, engineers, shift, asset_line, platform, run_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            rec.project_id,
            rec.scenario,
            rec.status,
            rec.track,
            rec.engineers,
            rec.shift,
            rec.asset_line,
            rec.platform,
            rec.date.map(|d| d.format("%Y-%m-%d").to_string()),
        ],
    )?;
    Ok(())
}
