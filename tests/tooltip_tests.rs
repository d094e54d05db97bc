use chrono::NaiveDate;
use ganttboard::core::tooltip::{Dimension, build_tooltip};
use ganttboard::models::record::RunRecord;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn rec(project: &str, scenario: &str, track: &str, engineers: &str) -> RunRecord {
    RunRecord {
        project_id: Some(project.into()),
        scenario: Some(scenario.into()),
        track: Some(track.into()),
        engineers: Some(engineers.into()),
        asset_line: Some("AL1".into()),
        platform: Some("HIL".into()),
        date: Some(d("2025-03-02")),
        ..Default::default()
    }
}

#[test]
fn identical_detail_tuples_appear_once() {
    // records differing only by ignored fields (id, status) dedup away
    let mut a = rec("P1", "Exec1", "PB1", "A");
    a.id = 1;
    a.status = Some("done".into());
    let mut b = rec("P1", "Exec1", "PB1", "A");
    b.id = 2;
    b.status = Some("to-do".into());

    let tip = build_tooltip(&[a, b], Dimension::Track, "PB1", d("2025-03-02"));
    assert_eq!(tip.matches("Exec1").count(), 1);
}

#[test]
fn engineer_key_matches_list_membership() {
    let records = vec![rec("P1", "Exec1", "PB1", "A , B")];

    let tip = build_tooltip(&records, Dimension::Engineer, "B", d("2025-03-02"));
    assert!(tip.contains("Exec1"));

    // exact token equality, not substring
    let tip = build_tooltip(&records, Dimension::Engineer, "AB", d("2025-03-02"));
    assert!(tip.is_empty());
}

#[test]
fn no_match_yields_empty_fragment() {
    let records = vec![rec("P1", "Exec1", "PB1", "A")];

    assert!(build_tooltip(&records, Dimension::Track, "PB2", d("2025-03-02")).is_empty());
    assert!(build_tooltip(&records, Dimension::Track, "PB1", d("2025-03-03")).is_empty());
    assert!(build_tooltip(&records, Dimension::Track, "  ", d("2025-03-02")).is_empty());
}

#[test]
fn columns_align_to_widest_value() {
    let records = vec![
        rec("P1", "Exec1", "PB1", "A"),
        rec("P1", "LongScenarioName", "PB1", "A"),
    ];

    let tip = build_tooltip(&records, Dimension::Track, "PB1", d("2025-03-02"));
    // the short scenario is padded to the width of the long one
    assert!(tip.contains(&format!("{} ", "Exec1".to_owned() + &" ".repeat(11))));
}

#[test]
fn rows_group_by_project_and_sort() {
    let records = vec![
        rec("P2", "Exec9", "PB1", "A"),
        rec("P1", "Exec2", "PB1", "A"),
        rec("P1", "Exec1", "PB1", "A"),
    ];

    let tip = build_tooltip(&records, Dimension::Track, "PB1", d("2025-03-02"));
    let p1 = tip.find("<b>P1</b>").unwrap();
    let p2 = tip.find("<b>P2</b>").unwrap();
    let e1 = tip.find("Exec1").unwrap();
    let e2 = tip.find("Exec2").unwrap();
    assert!(p1 < e1 && e1 < e2 && e2 < p2);
    // one project header even with two detail rows
    assert_eq!(tip.matches("<b>P1</b>").count(), 1);
}
