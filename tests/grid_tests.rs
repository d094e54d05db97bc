use chrono::NaiveDate;
use ganttboard::core::calendar::CalendarWindow;
use ganttboard::core::grid::{ScheduleGrid, SummaryGrid};
use ganttboard::core::palette::{ALERT, PALETTE, stable_color};
use ganttboard::core::start_dates::kickoff_regex;
use ganttboard::models::record::RunRecord;
use ganttboard::models::shift::Shift;
use regex::Regex;
use std::collections::BTreeSet;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn window(start: &str, end: &str) -> CalendarWindow {
    CalendarWindow::new(d(start), d(end), d(start), BTreeSet::new())
}

fn kickoff() -> Regex {
    kickoff_regex(r"Setup\(OR\)|Setup\(Pretest\)")
}

fn rec(
    project: &str,
    scenario: &str,
    status: &str,
    date: &str,
    track: &str,
    engineers: &str,
) -> RunRecord {
    RunRecord {
        id: 0,
        project_id: Some(project.into()),
        scenario: Some(scenario.into()),
        status: Some(status.into()),
        track: Some(track.into()),
        engineers: Some(engineers.into()),
        shift: None,
        asset_line: None,
        platform: None,
        date: Some(d(date)),
    }
    .normalize()
}

fn tracks() -> Vec<String> {
    ["PB1", "PB2", "PS", "Biella"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn stable_color_is_deterministic() {
    let first = stable_color("25-0113-PB1");
    for _ in 0..100 {
        assert_eq!(first, stable_color("25-0113-PB1"));
    }
    assert!(PALETTE.contains(&first));
}

#[test]
fn stable_color_survives_across_views() {
    let records = vec![rec("P1", "Exec1", "done", "2025-03-03", "PB1", "A")];
    let w = window("2025-03-01", "2025-03-05");

    let by_track = ScheduleGrid::by_track(&records, &w, &tracks(), &kickoff());
    let by_te = ScheduleGrid::by_engineer(&records, &w, &kickoff());

    let expected = format!("background-color:{}", stable_color("P1"));
    let track_cell = by_track.cell(&Some("PB1".into()), d("2025-03-03"), Shift::Morning);
    let te_cell = by_te.cell(&Some("A".into()), d("2025-03-03"), Shift::Morning);
    assert!(track_cell.contains(&expected));
    assert!(te_cell.contains(&expected));
}

#[test]
fn calendar_projection_is_dense() {
    let w = window("2025-03-01", "2025-03-10");
    let grid = ScheduleGrid::by_track(&[], &w, &tracks(), &kickoff());

    assert_eq!(grid.columns.len(), 10 * 3);
    assert_eq!(grid.columns[0], (d("2025-03-01"), Shift::Morning));
    assert_eq!(grid.columns[1], (d("2025-03-01"), Shift::Afternoon));
    assert_eq!(grid.columns[2], (d("2025-03-01"), Shift::Night));
    assert_eq!(*grid.columns.last().unwrap(), (d("2025-03-10"), Shift::Night));
    assert!(grid.rows.is_empty());

    let summary = SummaryGrid::by_project(&[], &w, &kickoff());
    assert_eq!(summary.columns.len(), 10);
}

#[test]
fn engineer_and_shift_explosion_counts() {
    // two engineers x absent shift -> 2 x (M, P) = 4 grouped cells
    let records = vec![rec("P1", "Exec1", "done", "2025-03-02", "PB1", "A, B")];
    let w = window("2025-03-01", "2025-03-05");
    let grid = ScheduleGrid::by_engineer(&records, &w, &kickoff());

    let mut filled = 0;
    for row in &grid.rows {
        for (day, shift) in &grid.columns {
            if !grid.cell(row, *day, *shift).is_empty() {
                filled += 1;
            }
        }
    }
    assert_eq!(filled, 4);
    assert_eq!(grid.rows, vec![Some("A".to_string()), Some("B".to_string())]);
    assert_eq!(
        grid.row_cells(&Some("A".into())).len(),
        grid.columns.len()
    );
    assert!(
        grid.cell(&Some("A".into()), d("2025-03-02"), Shift::Night)
            .is_empty()
    );

    // explicit Night -> exactly one shift slot
    let mut night = rec("P1", "Exec1", "done", "2025-03-02", "PB1", "A");
    night.shift = Some("N".into());
    let grid = ScheduleGrid::by_engineer(&[night], &w, &kickoff());
    let filled: usize = grid
        .columns
        .iter()
        .filter(|(day, shift)| !grid.cell(&Some("A".into()), *day, *shift).is_empty())
        .count();
    assert_eq!(filled, 1);
    assert!(
        !grid
            .cell(&Some("A".into()), d("2025-03-02"), Shift::Night)
            .is_empty()
    );
}

#[test]
fn recompute_is_idempotent() {
    let records = vec![
        rec("P1", "Setup(OR)", "done", "2025-03-01", "PB1", "A"),
        rec("P2", "Exec1", "to-do", "2025-03-02", "PB2", "A,B"),
        rec("P3", "Exec2", "done", "2025-03-03", "Unknown", "C"),
    ];
    let w = window("2025-03-01", "2025-03-10");

    let a = ScheduleGrid::by_track(&records, &w, &tracks(), &kickoff());
    let b = ScheduleGrid::by_track(&records, &w, &tracks(), &kickoff());
    assert_eq!(a, b);

    let a = SummaryGrid::by_project(&records, &w, &kickoff());
    let b = SummaryGrid::by_project(&records, &w, &kickoff());
    assert_eq!(a, b);
}

#[test]
fn alert_overrides_stable_color() {
    // one to-do among many done records still flips the whole block
    let records = vec![
        rec("P1", "Exec1", "done", "2025-03-02", "PB1", "A"),
        rec("P1", "Exec2", "done", "2025-03-02", "PB1", "A"),
        rec("P1", "Exec3", "to-do", "2025-03-02", "PB1", "A"),
    ];
    let w = window("2025-03-01", "2025-03-05");
    let grid = ScheduleGrid::by_track(&records, &w, &tracks(), &kickoff());

    let cell = grid.cell(&Some("PB1".into()), d("2025-03-02"), Shift::Morning);
    assert!(cell.contains(ALERT));
    assert!(!cell.contains(stable_color("P1")));

    let summary = SummaryGrid::by_project(&records, &w, &kickoff());
    assert_eq!(summary.color("P1", d("2025-03-02")), Some(ALERT));
}

#[test]
fn track_rows_order_known_unknown_null() {
    let mk = |track: Option<&str>, date: &str| RunRecord {
        project_id: Some("P1".into()),
        track: track.map(|t| t.to_string()),
        date: Some(d(date)),
        ..Default::default()
    };

    // encounter order: null, Unknown, PB2, PB1
    let records = vec![
        mk(None, "2025-03-01"),
        mk(Some("Unknown"), "2025-03-01"),
        mk(Some("PB2"), "2025-03-01"),
        mk(Some("PB1"), "2025-03-01"),
    ];
    let w = window("2025-03-01", "2025-03-05");
    let grid = ScheduleGrid::by_track(&records, &w, &tracks(), &kickoff());

    assert_eq!(
        grid.rows,
        vec![
            Some("PB1".to_string()),
            Some("PB2".to_string()),
            Some("Unknown".to_string()),
            None,
        ]
    );
}

#[test]
fn unparseable_date_never_reaches_a_grid() {
    let mut undated = rec("P1", "Exec1", "done", "2025-03-02", "PB1", "A");
    undated.date = None;
    let w = window("2025-03-01", "2025-03-05");

    let grid = ScheduleGrid::by_track(&[undated.clone()], &w, &tracks(), &kickoff());
    assert!(grid.rows.is_empty());

    let summary = SummaryGrid::by_project(&[undated], &w, &kickoff());
    assert!(summary.rows.is_empty());
}

#[test]
fn project_rows_group_by_family_then_start() {
    let records = vec![
        rec("25-0200-B", "Exec1", "done", "2025-03-01", "PB1", "A"),
        rec("25-0100-A", "Setup(OR)", "done", "2025-03-04", "PB1", "A"),
        rec("25-0100-B", "Setup(OR)", "done", "2025-03-02", "PB1", "A"),
    ];
    let w = window("2025-03-01", "2025-03-10");
    let grid = ScheduleGrid::by_project(&records, &w, &kickoff());

    // family "25-0100" sorts before "25-0200"; within the family the
    // earlier kickoff comes first
    assert_eq!(
        grid.rows,
        vec![
            Some("25-0100-B".to_string()),
            Some("25-0100-A".to_string()),
            Some("25-0200-B".to_string()),
        ]
    );
}

#[test]
fn end_to_end_scenario() {
    let records = vec![
        rec("P1", "Setup(OR)", "done", "2025-03-01", "PB1", "A"),
        rec("P1", "Exec1", "to-do", "2025-03-02", "PB1", "A,B"),
    ];
    let w = window("2025-03-01", "2025-03-05");

    // kickoff anchors the project start
    let starts =
        ganttboard::core::start_dates::ProjectStartIndex::build(&records, &kickoff());
    assert_eq!(starts.get("P1"), Some(d("2025-03-01")));

    // by-track: the to-do run turns the cell alert-red
    let by_track = ScheduleGrid::by_track(&records, &w, &tracks(), &kickoff());
    let cell = by_track.cell(&Some("PB1".into()), d("2025-03-02"), Shift::Morning);
    assert!(cell.contains("P1"));
    assert!(cell.contains(ALERT));

    // by-engineer: P1 under both A and B, morning and afternoon, all alert
    let by_te = ScheduleGrid::by_engineer(&records, &w, &kickoff());
    let mut alert_cells = 0;
    for key in ["A", "B"] {
        for shift in [Shift::Morning, Shift::Afternoon] {
            let cell = by_te.cell(&Some(key.into()), d("2025-03-02"), shift);
            assert!(cell.contains("P1"));
            assert!(cell.contains(ALERT));
            alert_cells += 1;
        }
        assert!(
            by_te
                .cell(&Some(key.into()), d("2025-03-02"), Shift::Night)
                .is_empty()
        );
    }
    assert_eq!(alert_cells, 4);
}

#[test]
fn empty_groups_render_as_empty_cells() {
    let records = vec![rec("P1", "Exec1", "done", "2025-03-02", "PB1", "A")];
    let w = window("2025-03-01", "2025-03-05");
    let grid = ScheduleGrid::by_track(&records, &w, &tracks(), &kickoff());

    assert_eq!(grid.cell(&Some("PB1".into()), d("2025-03-04"), Shift::Morning), "");
    assert_eq!(grid.cell(&Some("PS".into()), d("2025-03-02"), Shift::Morning), "");
}
