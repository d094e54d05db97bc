//! Rich tooltip fragments built from the raw (un-exploded) record set.

use crate::core::normalize::engineers_contain;
use crate::models::record::RunRecord;
use crate::utils::html::escape;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use unicode_width::UnicodeWidthStr;

/// Which field a row key addresses when filtering for a tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Track,
    Engineer,
    Project,
}

impl Dimension {
    /// Whether a record belongs to the given key on this dimension.
    /// The engineer dimension matches membership within the
    /// comma-separated list; the others match the trimmed value exactly.
    pub fn matches(&self, rec: &RunRecord, key: &str) -> bool {
        match self {
            Dimension::Track => rec.track.as_deref() == Some(key),
            Dimension::Project => rec.project_id.as_deref() == Some(key),
            Dimension::Engineer => engineers_contain(rec.engineers.as_deref(), key),
        }
    }
}

/// Detail line: (project, scenario, track, engineers, asset_line,
/// platform). Array ordering doubles as the lexicographic sort and as
/// the dedup identity.
type DetailRow = [String; 6];

/// Build the tooltip fragment for one (key, day) cell: matching records
/// deduplicated on the detail tuple, sorted, grouped by project, with
/// the five detail columns padded to their maximum display width for
/// monospaced rendering. Empty when nothing matches.
pub fn build_tooltip(records: &[RunRecord], dim: Dimension, key: &str, day: NaiveDate) -> String {
    let key = key.trim();
    if key.is_empty() {
        return String::new();
    }

    let mut dedup: BTreeSet<DetailRow> = BTreeSet::new();
    for rec in records {
        if rec.date != Some(day) || !dim.matches(rec, key) {
            continue;
        }
        dedup.insert([
            rec.project_id.clone().unwrap_or_default(),
            rec.scenario.clone().unwrap_or_default(),
            rec.track.clone().unwrap_or_default(),
            rec.engineers.clone().unwrap_or_default(),
            rec.asset_line.clone().unwrap_or_default(),
            rec.platform.clone().unwrap_or_default(),
        ]);
    }

    if dedup.is_empty() {
        return String::new();
    }

    // max display width of each detail column (scenario .. platform)
    let mut max_len = [0usize; 5];
    for row in &dedup {
        for (i, value) in row[1..].iter().enumerate() {
            max_len[i] = max_len[i].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    let mut parts = Vec::new();
    let mut current_project: Option<&str> = None;
    for row in &dedup {
        let project = row[0].as_str();
        if current_project != Some(project) {
            parts.push(format!(
                "<div class='tt-proj'><b>{}</b></div>",
                escape(project)
            ));
            current_project = Some(project);
        }

        let line = row[1..]
            .iter()
            .enumerate()
            .map(|(i, v)| pad_display(v, max_len[i]))
            .collect::<Vec<_>>()
            .join(" | ");
        parts.push(format!(
            "<div class='tt-row' style='font-family:monospace;'>{}</div>",
            escape(&line)
        ));
    }

    format!("<div class='tt-wrap'>{}</div>", parts.join(""))
}

fn pad_display(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - w))
}
