use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_records;
use crate::errors::{AppError, AppResult};
use crate::models::record::RunRecord;
use crate::utils::date;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;
use chrono::NaiveDate;
use std::collections::BTreeSet;

const SCENARIO_WIDTH: usize = 38;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, now } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut records = load_all_records(&mut pool)?;

        let filter: Option<BTreeSet<NaiveDate>> = if *now {
            Some([date::today()].into_iter().collect())
        } else if let Some(p) = period {
            Some(resolve_period(p)?.into_iter().collect())
        } else {
            None
        };

        if let Some(days) = &filter {
            // a date filter always hides undated records
            records.retain(|r| r.date.is_some_and(|d| days.contains(&d)));
        }

        if records.is_empty() {
            println!("No records found.");
            return Ok(());
        }

        // undated records sink to the bottom
        records.sort_by_key(|r| {
            (
                r.date.unwrap_or(NaiveDate::MAX),
                r.project_id.clone().unwrap_or_default(),
                r.id,
            )
        });

        print_table(&records);
    }
    Ok(())
}

fn resolve_period(period: &str) -> AppResult<Vec<NaiveDate>> {
    let dates = if let Some((start, end)) = period.split_once(':') {
        date::generate_range(start, end)
    } else {
        date::generate_from_period(period)
    };
    dates.map_err(AppError::InvalidPeriod)
}

fn print_table(records: &[RunRecord]) {
    let mut table = Table::new(vec![
        Column {
            header: "Date".into(),
            width: 10,
        },
        Column {
            header: "Sh".into(),
            width: 3,
        },
        Column {
            header: "Project".into(),
            width: 14,
        },
        Column {
            header: "Scenario".into(),
            width: SCENARIO_WIDTH,
        },
        Column {
            header: "Status".into(),
            width: 10,
        },
        Column {
            header: "Track".into(),
            width: 7,
        },
        Column {
            header: "TE".into(),
            width: 14,
        },
        Column {
            header: "AL".into(),
            width: 8,
        },
        Column {
            header: "Platform".into(),
            width: 10,
        },
    ]);

    for rec in records {
        let status = rec.status.clone().unwrap_or_default();
        let status = if rec.is_alert() {
            Colour::Red.bold().paint(status).to_string()
        } else {
            status
        };

        // wrap long scenario labels across continuation rows
        let scenario = rec.scenario.clone().unwrap_or_default();
        let wrapped = textwrap::wrap(&scenario, SCENARIO_WIDTH);
        let mut lines = wrapped.iter();
        let first = lines.next().map(|l| l.to_string()).unwrap_or_default();

        table.add_row(vec![
            rec.date_str(),
            rec.shift.clone().unwrap_or_default(),
            rec.project_id.clone().unwrap_or_default(),
            first,
            status,
            rec.track.clone().unwrap_or_default(),
            rec.engineers.clone().unwrap_or_default(),
            rec.asset_line.clone().unwrap_or_default(),
            rec.platform.clone().unwrap_or_default(),
        ]);

        for cont in lines {
            table.add_row(vec![
                String::new(),
                String::new(),
                String::new(),
                cont.to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ]);
        }
    }

    print!("{}", table.render());
    println!("{} records", records.len());
}
