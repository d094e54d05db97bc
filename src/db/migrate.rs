//! Schema migrations, tracked through PRAGMA user_version.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

const SCHEMA_VERSION: i32 = 1;

fn user_version(conn: &Connection) -> AppResult<i32> {
    let v: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v)
}

fn set_user_version(conn: &Connection, v: i32) -> AppResult<()> {
    conn.pragma_update(None, "user_version", v)?;
    Ok(())
}

/// v1: the `runs` table, one row per scheduled test execution.
/// Every descriptive column is nullable; normalization happens on read.
fn migrate_to_v1(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS runs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id  TEXT,
            scenario    TEXT,
            status      TEXT,
            track       TEXT,
            engineers   TEXT,
            shift       TEXT,
            asset_line  TEXT,
            platform    TEXT,
            run_date    TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_runs_date ON runs(run_date);
        "#,
    )?;
    Ok(())
}

/// Bring the database up to the current schema version.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let mut version = user_version(conn)?;

    while version < SCHEMA_VERSION {
        let next = version + 1;
        match next {
            1 => migrate_to_v1(conn)?,
            other => {
                return Err(AppError::Migration(format!(
                    "No migration registered for version {}",
                    other
                )));
            }
        }
        set_user_version(conn, next)?;
        version = next;
    }

    Ok(())
}
