//! Pivoted schedule grids.
//!
//! A grid is derived, read-only data: recomputed per view per load,
//! never patched in place. Rows carry the view dimension, columns are
//! the dense (date, shift) axis of the configured calendar window.

use crate::core::calendar::CalendarWindow;
use crate::core::format::{format_projects, format_solo_scenario};
use crate::core::normalize::{shift_slots, split_engineers};
use crate::core::palette;
use crate::core::start_dates::ProjectStartIndex;
use crate::models::record::RunRecord;
use crate::models::shift::Shift;
use chrono::NaiveDate;
use regex::Regex;
use std::collections::BTreeMap;

/// Row key of a pivot. None groups the records whose dimension value is
/// unresolved; such a row sorts last.
pub type RowKey = Option<String>;

/// Project-id prefix used purely as a grouping/visual-separator key.
pub fn family(project_id: &str) -> String {
    project_id.chars().take(7).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleGrid {
    /// Row keys in display order.
    pub rows: Vec<RowKey>,
    /// The full (date, shift) axis, every shift of every day present.
    pub columns: Vec<(NaiveDate, Shift)>,
    cells: BTreeMap<(RowKey, NaiveDate, Shift), String>,
}

impl ScheduleGrid {
    /// Pivot keyed by track. Known tracks first in the configured
    /// priority order, unknown tracks after, unresolved last; ties keep
    /// the original encounter order.
    pub fn by_track(
        records: &[RunRecord],
        window: &CalendarWindow,
        track_order: &[String],
        kickoff: &Regex,
    ) -> Self {
        let starts = ProjectStartIndex::build(records, kickoff);
        let (mut rows, groups) = pivot(records, |rec| vec![rec.track.clone()]);

        rows.sort_by_key(|k| track_rank(k, track_order));

        Self::from_groups(rows, groups, window, |_, group| {
            format_projects(group, &starts)
        })
    }

    /// Pivot keyed by single engineer: the comma-separated engineer list
    /// is exploded into one row per identifier before grouping. Rows are
    /// ordered lexicographically, unresolved last.
    pub fn by_engineer(records: &[RunRecord], window: &CalendarWindow, kickoff: &Regex) -> Self {
        let starts = ProjectStartIndex::build(records, kickoff);
        let (mut rows, groups) = pivot(records, |rec| match rec.engineers.as_deref() {
            Some(list) => split_engineers(list).into_iter().map(Some).collect(),
            None => vec![None],
        });

        rows.sort_by(|a, b| match (a, b) {
            (None, None) => std::cmp::Ordering::Equal,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (Some(_), None) => std::cmp::Ordering::Less,
            (Some(x), Some(y)) => x.cmp(y),
        });

        Self::from_groups(rows, groups, window, |_, group| {
            format_projects(group, &starts)
        })
    }

    /// Pivot keyed by project id ("solo scenario" view). Records without
    /// a project id contribute to no row. Rows are grouped by id-prefix
    /// family, then ordered by project start date, unresolved last.
    pub fn by_project(records: &[RunRecord], window: &CalendarWindow, kickoff: &Regex) -> Self {
        let starts = ProjectStartIndex::build(records, kickoff);
        let (mut rows, groups) = pivot(records, |rec| {
            rec.project_id.clone().map(Some).into_iter().collect()
        });

        rows.sort_by_key(|k| project_sort_key(k, &starts));

        Self::from_groups(rows, groups, window, |key, group| match key {
            Some(project) => format_solo_scenario(project, group),
            None => String::new(),
        })
    }

    fn from_groups<F>(
        rows: Vec<RowKey>,
        groups: BTreeMap<(RowKey, NaiveDate, Shift), Vec<&RunRecord>>,
        window: &CalendarWindow,
        mut format: F,
    ) -> Self
    where
        F: FnMut(&RowKey, &[&RunRecord]) -> String,
    {
        let mut cells = BTreeMap::new();
        for ((key, date, shift), group) in &groups {
            // projection stays inside the window; stray dates are dropped
            if *date < window.start || *date > window.end {
                continue;
            }
            let value = format(key, group);
            if !value.is_empty() {
                cells.insert((key.clone(), *date, *shift), value);
            }
        }

        Self {
            rows,
            columns: window.columns(),
            cells,
        }
    }

    /// Cell content, empty string for absent combinations: the grid is
    /// dense over `columns` even where nothing is scheduled.
    pub fn cell(&self, row: &RowKey, date: NaiveDate, shift: Shift) -> &str {
        self.cells
            .get(&(row.clone(), date, shift))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// One dense row, in column order.
    pub fn row_cells(&self, row: &RowKey) -> Vec<&str> {
        self.columns
            .iter()
            .map(|(date, shift)| self.cell(row, *date, *shift))
            .collect()
    }
}

/// The project summary pivot: one color value per (project, day), no
/// shift subdivision.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryGrid {
    pub rows: Vec<String>,
    pub columns: Vec<NaiveDate>,
    cells: BTreeMap<(String, NaiveDate), &'static str>,
}

impl SummaryGrid {
    pub fn by_project(records: &[RunRecord], window: &CalendarWindow, kickoff: &Regex) -> Self {
        let starts = ProjectStartIndex::build(records, kickoff);

        let mut groups: BTreeMap<(String, NaiveDate), Vec<&RunRecord>> = BTreeMap::new();
        let mut rows: Vec<String> = Vec::new();
        for rec in records {
            let (Some(project), Some(date)) = (rec.project_id.as_deref(), rec.date) else {
                continue;
            };
            if !rows.iter().any(|r| r == project) {
                rows.push(project.to_string());
            }
            if date < window.start || date > window.end {
                continue;
            }
            groups
                .entry((project.to_string(), date))
                .or_default()
                .push(rec);
        }

        rows.sort_by_key(|p| (family(p), starts.sort_key(p), p.clone()));

        let mut cells = BTreeMap::new();
        for ((project, date), group) in &groups {
            cells.insert(
                (project.clone(), *date),
                palette::status_color(group, Some(project.as_str())),
            );
        }

        Self {
            rows,
            columns: window.days(),
            cells,
        }
    }

    /// Cell color, None where nothing is scheduled that day.
    pub fn color(&self, row: &str, date: NaiveDate) -> Option<&'static str> {
        self.cells.get(&(row.to_string(), date)).copied()
    }
}

/// Group records by (key, date, shift) after both explosions, returning
/// the distinct row keys in encounter order alongside the groups.
/// Records without a resolvable date never enter any group.
fn pivot<'a, F>(
    records: &'a [RunRecord],
    keys_for: F,
) -> (
    Vec<RowKey>,
    BTreeMap<(RowKey, NaiveDate, Shift), Vec<&'a RunRecord>>,
)
where
    F: Fn(&'a RunRecord) -> Vec<RowKey>,
{
    let mut rows: Vec<RowKey> = Vec::new();
    let mut groups: BTreeMap<(RowKey, NaiveDate, Shift), Vec<&'a RunRecord>> = BTreeMap::new();

    for rec in records {
        let Some(date) = rec.date else {
            continue;
        };
        for key in keys_for(rec) {
            if !rows.contains(&key) {
                rows.push(key.clone());
            }
            for shift in shift_slots(rec) {
                groups
                    .entry((key.clone(), date, shift))
                    .or_default()
                    .push(rec);
            }
        }
    }

    (rows, groups)
}

fn track_rank(key: &RowKey, order: &[String]) -> usize {
    match key.as_deref() {
        None => order.len() + 1,
        Some(t) => order.iter().position(|o| o == t).unwrap_or(order.len()),
    }
}

fn project_sort_key(key: &RowKey, starts: &ProjectStartIndex) -> (String, NaiveDate, String) {
    match key.as_deref() {
        Some(p) => (family(p), starts.sort_key(p), p.to_string()),
        None => (String::from("\u{10FFFF}"), NaiveDate::MAX, String::new()),
    }
}
