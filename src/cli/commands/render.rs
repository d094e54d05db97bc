use crate::cli::parser::{Commands, ViewKind};
use crate::config::Config;
use crate::core::grid::{ScheduleGrid, SummaryGrid};
use crate::core::start_dates::kickoff_regex;
use crate::core::tooltip::Dimension;
use crate::db::cache::RecordCache;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::render::html;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render { view, out, refresh } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut cache = RecordCache::new();
        if *refresh {
            cache.invalidate();
        }
        let records = cache.records(&mut pool)?.to_vec();

        let window = cfg.window();
        let kickoff = kickoff_regex(&cfg.kickoff_pattern);

        let out_dir = expand_tilde(out);
        fs::create_dir_all(&out_dir)?;

        let mut written = Vec::new();

        if matches!(view, ViewKind::Tracks | ViewKind::All) {
            let grid = ScheduleGrid::by_track(&records, &window, &cfg.track_order, &kickoff);
            let page = html::render_shift_grid(
                &grid,
                "Track",
                "tableTracks",
                &records,
                Dimension::Track,
                &window,
            );
            written.push(write_page(&out_dir, "gantt_tracks.html", &page)?);
        }

        if matches!(view, ViewKind::Engineers | ViewKind::All) {
            let grid = ScheduleGrid::by_engineer(&records, &window, &kickoff);
            let page = html::render_shift_grid(
                &grid,
                "Test Engineer",
                "tableTE",
                &records,
                Dimension::Engineer,
                &window,
            );
            written.push(write_page(&out_dir, "gantt_engineers.html", &page)?);
        }

        if matches!(view, ViewKind::Projects | ViewKind::All) {
            let grid = ScheduleGrid::by_project(&records, &window, &kickoff);
            let page =
                html::render_project_grid(&grid, "Project", "tableProjects", &records, &window);
            written.push(write_page(&out_dir, "gantt_projects.html", &page)?);
        }

        if matches!(view, ViewKind::Summary | ViewKind::All) {
            let grid = SummaryGrid::by_project(&records, &window, &kickoff);
            let page = html::render_summary_grid(&grid, "Project", "tableSummary", &window);
            written.push(write_page(&out_dir, "summary_projects.html", &page)?);
        }

        for path in &written {
            success(format!("Wrote {}", path));
        }
    }
    Ok(())
}

fn write_page(dir: &Path, name: &str, page: &str) -> AppResult<String> {
    let path = dir.join(name);
    fs::write(&path, page)?;
    Ok(path.to_string_lossy().to_string())
}
