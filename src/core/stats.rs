//! Daily summary aggregation.

use crate::models::record::RunRecord;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    /// Distinct projects scheduled that day.
    pub projects: usize,
}

/// Distinct project count per resolvable date, chronological.
pub fn daily_project_counts(records: &[RunRecord]) -> Vec<DailyCount> {
    let mut per_day: BTreeMap<NaiveDate, BTreeSet<&str>> = BTreeMap::new();
    for rec in records {
        let (Some(date), Some(project)) = (rec.date, rec.project_id.as_deref()) else {
            continue;
        };
        per_day.entry(date).or_default().insert(project);
    }

    per_day
        .into_iter()
        .map(|(date, projects)| DailyCount {
            date,
            projects: projects.len(),
        })
        .collect()
}

/// Sorted distinct project ids scheduled on one day.
pub fn projects_on(records: &[RunRecord], day: NaiveDate) -> Vec<String> {
    let mut out: BTreeSet<String> = BTreeSet::new();
    for rec in records {
        if rec.date == Some(day)
            && let Some(p) = rec.project_id.as_deref()
        {
            out.insert(p.to_string());
        }
    }
    out.into_iter().collect()
}
