//! Multi-valued field explosion.
//!
//! Two independent, composable explosions: the engineer list (comma
//! separated) and the shift field (pipe combined). Both run before any
//! three-level group-by, so one record can legitimately land in several
//! grouped cells without being lost or duplicated relative to other views.

use crate::models::record::RunRecord;
use crate::models::shift::Shift;

/// The single tokenizer for the engineer list: split on comma, trim,
/// drop empties. Both the row explosion and the tooltip membership test
/// go through here, so the two paths cannot disagree on irregular
/// spacing or duplicate tokens.
pub fn split_engineers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// The shift slots one record occupies.
/// Absent shift expands to Morning and Afternoon, never Night; a
/// pipe-combined value is split into one slot per code; unknown codes
/// are dropped. Duplicate tokens ("M|M") collapse to one slot.
pub fn shift_slots(rec: &RunRecord) -> Vec<Shift> {
    match rec.shift.as_deref() {
        None => vec![Shift::Morning, Shift::Afternoon],
        Some(raw) => {
            let mut out: Vec<Shift> = Vec::new();
            for token in raw.split('|') {
                if let Some(s) = Shift::parse_token(token)
                    && !out.contains(&s)
                {
                    out.push(s);
                }
            }
            out
        }
    }
}

/// Engineer membership test, built on the same tokenizer as the row
/// explosion.
pub fn engineers_contain(raw: Option<&str>, key: &str) -> bool {
    match raw {
        Some(list) => split_engineers(list).iter().any(|t| t == key),
        None => false,
    }
}
