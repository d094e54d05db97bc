//! Stable per-project color assignment.

use crate::models::record::RunRecord;

/// Fixed pastel palette the stable colors are drawn from.
pub const PALETTE: [&str; 9] = [
    "#f28b82", "#fbbc04", "#fff475", "#ccff90", "#a7ffeb", "#cbf0f8", "#aecbfa", "#d7aefb",
    "#fdcfe8",
];

/// Alert color: at least one run in the group is still to-do.
pub const ALERT: &str = "#ff6b6b";

/// Neutral color for groups with no resolvable project id.
pub const NEUTRAL: &str = "#aecbfa";

/// FNV-1a, 64 bit. The one hash used for palette selection: byte-stable
/// across runs and platforms, unlike a seeded RNG whose output would be
/// an implementation detail of the RNG crate.
fn fnv1a64(s: &str) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for b in s.as_bytes() {
        hash ^= u64::from(*b);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

/// Deterministic color for a project id: same id, same color, on every
/// call and in every view.
pub fn stable_color(project_id: &str) -> &'static str {
    PALETTE[(fnv1a64(project_id) % PALETTE.len() as u64) as usize]
}

/// Cell color for a group of runs: alert wins over the stable color
/// whenever any record in the group is still to-do.
pub fn status_color(group: &[&RunRecord], project_id: Option<&str>) -> &'static str {
    if group.iter().any(|r| r.is_alert()) {
        return ALERT;
    }
    match project_id {
        Some(id) => stable_color(id),
        None => NEUTRAL,
    }
}
