//! Cell formatting: pure projections of a grouped record slice into a
//! display fragment. Input records are never mutated.

use crate::core::palette;
use crate::core::start_dates::ProjectStartIndex;
use crate::models::record::RunRecord;
use crate::utils::html::escape;
use std::collections::{BTreeMap, BTreeSet};

/// Fragment for one (track-or-engineer, date, shift) group: one block
/// per distinct project, ordered by project start date (unresolved
/// last, then id), each listing its distinct scenarios sorted.
///
/// Block background: alert if any of that project's runs in the group
/// is to-do, otherwise the project's stable color.
pub fn format_projects(group: &[&RunRecord], starts: &ProjectStartIndex) -> String {
    let mut scenarios: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for rec in group {
        let Some(project) = rec.project_id.as_deref() else {
            continue;
        };
        let entry = scenarios.entry(project).or_default();
        if let Some(s) = rec.scenario.as_deref() {
            entry.insert(s);
        }
    }

    if scenarios.is_empty() {
        return String::new();
    }

    let mut ordered: Vec<&str> = scenarios.keys().copied().collect();
    ordered.sort_by_key(|p| (starts.sort_key(p), p.to_string()));

    let mut parts = Vec::new();
    for project in ordered {
        let scens = &scenarios[project];
        let label = if scens.is_empty() {
            format!("<b>{}</b>", escape(project))
        } else {
            let joined = scens
                .iter()
                .map(|s| escape(s))
                .collect::<Vec<_>>()
                .join(", ");
            format!("<b>{}</b> ({})", escape(project), joined)
        };

        let slice: Vec<&RunRecord> = group
            .iter()
            .copied()
            .filter(|r| r.project_id.as_deref() == Some(project))
            .collect();
        let color = palette::status_color(&slice, Some(project));

        parts.push(format!(
            "<div class='cell-content' style='background-color:{color}; padding:2px 6px; \
             border-radius:5px; margin-bottom:2px;max-height:38px; overflow:hidden;'>\
             <small>{label}</small></div>"
        ));
    }

    parts.join("")
}

/// Fragment for one (project, date, shift) group in the by-project view:
/// project header, then per distinct (track, platform) pair the sorted
/// scenario labels (red bold when that scenario's slice holds a to-do
/// run) and a track/platform line. Pairs are joined with a thin spacer.
pub fn format_solo_scenario(project_id: &str, group: &[&RunRecord]) -> String {
    if group.is_empty() {
        return String::new();
    }

    // distinct (track, platform) pairs, None rendered as empty
    let mut pairs: BTreeMap<(String, String), Vec<&RunRecord>> = BTreeMap::new();
    for rec in group.iter().copied() {
        let key = (
            rec.track.clone().unwrap_or_default(),
            rec.platform.clone().unwrap_or_default(),
        );
        pairs.entry(key).or_default().push(rec);
    }

    let mut parts = Vec::new();
    parts.push(format!(
        "<div><strong style='color:blue'>{}</strong></div>",
        escape(project_id)
    ));

    for ((track, platform), sub) in &pairs {
        // alert state per scenario, over that scenario's slice only
        let mut scenario_alert: BTreeMap<&str, bool> = BTreeMap::new();
        for rec in sub {
            let Some(scen) = rec.scenario.as_deref() else {
                continue;
            };
            let alert = scenario_alert.entry(scen).or_default();
            *alert |= rec.is_alert();
        }

        let spans: Vec<String> = scenario_alert
            .iter()
            .map(|(scen, alert)| {
                let color = if *alert { "#ff0000" } else { "#000000" };
                format!(
                    "<span style='color:{color}; font-weight:bold'>{}</span>",
                    escape(scen)
                )
            })
            .collect();

        let mut block = String::new();
        if !spans.is_empty() {
            block.push_str(&format!("<div>{}</div>", spans.join(", ")));
        }
        if !track.is_empty() || !platform.is_empty() {
            block.push_str(&format!(
                "<div><small style='color:blue'>{}</small> - <small style='color:green'>{}</small></div>",
                escape(track),
                escape(platform)
            ));
        }

        if !block.is_empty() {
            parts.push(block);
        }
    }

    format!(
        "<div style='margin-bottom:4px'>{}</div>",
        parts.join("<div style='height:4px'></div>")
    )
}
