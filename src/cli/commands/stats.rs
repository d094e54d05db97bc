use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::{daily_project_counts, projects_on};
use crate::db::pool::DbPool;
use crate::db::queries::load_all_records;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::table::pad;
use ansi_term::Colour;

const BAR_WIDTH: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { date: day } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let records = load_all_records(&mut pool)?;

        if let Some(raw) = day {
            let d = date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?;
            let projects = projects_on(&records, d);
            if projects.is_empty() {
                println!("No projects scheduled on {}.", d);
            } else {
                println!("Projects scheduled on {}:", d);
                for p in projects {
                    println!("- {}", p);
                }
            }
            return Ok(());
        }

        let counts = daily_project_counts(&records);
        if counts.is_empty() {
            println!("No dated records found.");
            return Ok(());
        }

        let max = counts.iter().map(|c| c.projects).max().unwrap_or(1).max(1);
        let today = cfg.today.unwrap_or_else(date::today);

        println!("{} {}", pad("Date", 10), "Projects");
        for c in &counts {
            let bar_len = c.projects * BAR_WIDTH / max;
            let bar = "█".repeat(bar_len.max(1));
            let line = format!(
                "{} {:>8}  {}",
                c.date.format("%Y-%m-%d"),
                c.projects,
                Colour::Blue.paint(bar)
            );
            if c.date == today {
                println!("{}", Colour::Yellow.bold().paint(line));
            } else {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
