//! Per-project start dates, used as the sort key for project ordering.

use crate::models::record::RunRecord;
use chrono::NaiveDate;
use regex::Regex;
use std::collections::BTreeMap;

/// Map from project id to its earliest resolvable scheduled date.
///
/// Two-tier lookup, per project:
/// 1. earliest date among records whose scenario matches the kickoff
///    pattern (setup-type scenarios);
/// 2. if no kickoff record exists for that project, earliest date among
///    all of its records.
///
/// Projects with no dated records at all have no entry and sort last.
#[derive(Debug, Clone, Default)]
pub struct ProjectStartIndex {
    starts: BTreeMap<String, NaiveDate>,
}

impl ProjectStartIndex {
    pub fn build(records: &[RunRecord], kickoff: &Regex) -> Self {
        let mut kickoff_min: BTreeMap<String, NaiveDate> = BTreeMap::new();
        let mut overall_min: BTreeMap<String, NaiveDate> = BTreeMap::new();

        for rec in records {
            let (Some(project), Some(date)) = (rec.project_id.as_deref(), rec.date) else {
                continue;
            };

            overall_min
                .entry(project.to_string())
                .and_modify(|d| *d = (*d).min(date))
                .or_insert(date);

            if rec.scenario.as_deref().is_some_and(|s| kickoff.is_match(s)) {
                kickoff_min
                    .entry(project.to_string())
                    .and_modify(|d| *d = (*d).min(date))
                    .or_insert(date);
            }
        }

        let mut starts = overall_min;
        for (project, date) in kickoff_min {
            starts.insert(project, date);
        }

        Self { starts }
    }

    pub fn get(&self, project_id: &str) -> Option<NaiveDate> {
        self.starts.get(project_id).copied()
    }

    /// Sort key: unresolved projects collapse to the maximum date so
    /// they order after every resolved one.
    pub fn sort_key(&self, project_id: &str) -> NaiveDate {
        self.get(project_id).unwrap_or(NaiveDate::MAX)
    }
}

/// Compile the kickoff pattern, case-insensitive.
pub fn kickoff_regex(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){}", pattern))
        .unwrap_or_else(|_| Regex::new(r"(?i)Setup\(OR\)|Setup\(Pretest\)").unwrap())
}
