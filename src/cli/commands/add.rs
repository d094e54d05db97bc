use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::insert_record;
use crate::errors::{AppError, AppResult};
use crate::models::record::RunRecord;
use crate::models::shift::Shift;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: raw_date,
        project,
        scenario,
        status,
        track,
        engineers,
        shift,
        asset_line,
        platform,
    } = cmd
    {
        let parsed =
            date::parse_date(raw_date).ok_or_else(|| AppError::InvalidDate(raw_date.clone()))?;

        // reject unknown shift codes at the door; stored values stay raw
        if let Some(raw) = shift {
            for token in raw.split('|') {
                if Shift::parse_token(token).is_none() {
                    return Err(AppError::InvalidShift(token.trim().to_string()));
                }
            }
        }

        let rec = RunRecord {
            id: 0,
            project_id: Some(project.clone()),
            scenario: Some(scenario.clone()),
            status: status.clone(),
            track: track.clone(),
            engineers: engineers.clone(),
            shift: shift.clone(),
            asset_line: asset_line.clone(),
            platform: platform.clone(),
            date: Some(parsed),
        }
        .normalize();

        let pool = DbPool::new(&cfg.database)?;
        insert_record(&pool.conn, &rec)?;

        success(format!(
            "Added run for {} on {}",
            rec.project_id.as_deref().unwrap_or("?"),
            parsed
        ));
    }
    Ok(())
}
