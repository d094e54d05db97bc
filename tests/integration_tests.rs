use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::path::PathBuf;

mod common;
use common::gb;

/// Create a unique test DB path inside the system temp dir
fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ganttboard.sqlite", name));

    let db_path = path.to_string_lossy().to_string();

    // reset any leftover from a previous run
    std::fs::remove_file(&db_path).ok();

    db_path
}

fn add_run(db: &str, date: &str, project: &str, scenario: &str, args: &[&str]) {
    let mut cmd = gb();
    cmd.args(["--db", db, "add", date, project, scenario]);
    cmd.args(args);
    cmd.assert().success();
}

#[test]
fn test_init_add_list() {
    let db = setup_test_db("init_add_list");

    gb().args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    add_run(
        &db,
        "2025-03-01",
        "P1",
        "Setup(OR)",
        &["--status", "done", "--track", "PB1", "--engineers", "A"],
    );
    add_run(
        &db,
        "2025-03-02",
        "P1",
        "Exec1",
        &["--status", "to-do", "--track", "PB1", "--engineers", "A,B"],
    );

    gb().args(["--db", &db, "list", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(contains("2025-03-01"))
        .stdout(contains("P1"))
        .stdout(contains("Setup(OR)"))
        .stdout(contains("2 records"));
}

#[test]
fn test_list_period_range() {
    let db = setup_test_db("list_period_range");

    gb().args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    add_run(&db, "2025-03-01", "P1", "Exec1", &[]);
    add_run(&db, "2025-06-15", "P2", "Exec1", &[]);
    add_run(&db, "2024-12-01", "P3", "Exec1", &[]);

    gb().args(["--db", &db, "list", "--period", "2025-01:2025-12"])
        .assert()
        .success()
        .stdout(contains("P1"))
        .stdout(contains("P2"))
        .stdout(contains("P3").not());
}

#[test]
fn test_add_rejects_invalid_date() {
    let db = setup_test_db("add_invalid_date");

    gb().args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    gb().args(["--db", &db, "add", "not-a-date", "P1", "Exec1"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_add_rejects_invalid_shift() {
    let db = setup_test_db("add_invalid_shift");

    gb().args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    gb().args([
        "--db", &db, "add", "2025-03-01", "P1", "Exec1", "--shift", "M|X",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid shift code"));
}

#[test]
fn test_stats_counts_and_day_listing() {
    let db = setup_test_db("stats_counts");

    gb().args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    add_run(&db, "2025-03-02", "P1", "Exec1", &[]);
    add_run(&db, "2025-03-02", "P2", "Exec1", &[]);
    add_run(&db, "2025-03-03", "P1", "Exec2", &[]);

    gb().args(["--db", &db, "stats"])
        .assert()
        .success()
        .stdout(contains("2025-03-02"))
        .stdout(contains("2025-03-03"));

    gb().args(["--db", &db, "stats", "--date", "2025-03-02"])
        .assert()
        .success()
        .stdout(contains("- P1"))
        .stdout(contains("- P2"));
}

#[test]
fn test_render_writes_all_views() {
    let db = setup_test_db("render_all");
    let out = tempfile::tempdir().unwrap();
    let out_str = out.path().to_string_lossy().to_string();

    gb().args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    add_run(
        &db,
        "2025-03-02",
        "P1",
        "Exec1",
        &["--status", "to-do", "--track", "PB1", "--engineers", "A,B"],
    );

    gb().args(["--db", &db, "render", "--view", "all", "--out", &out_str])
        .assert()
        .success();

    let tracks = std::fs::read_to_string(out.path().join("gantt_tracks.html")).unwrap();
    assert!(tracks.contains("tableTracks"));
    assert!(tracks.contains("P1"));
    // the open to-do run forces the alert color
    assert!(tracks.contains("#ff6b6b"));

    let engineers = std::fs::read_to_string(out.path().join("gantt_engineers.html")).unwrap();
    assert!(engineers.contains("<td>A</td>"));
    assert!(engineers.contains("<td>B</td>"));

    let projects = std::fs::read_to_string(out.path().join("gantt_projects.html")).unwrap();
    assert!(projects.contains("tableProjects"));
    assert!(projects.contains("Show all"));

    let summary = std::fs::read_to_string(out.path().join("summary_projects.html")).unwrap();
    assert!(summary.contains("tableSummary"));
    assert!(summary.contains("#ff6b6b"));
}

#[test]
fn test_render_single_view() {
    let db = setup_test_db("render_single");
    let out = tempfile::tempdir().unwrap();
    let out_str = out.path().to_string_lossy().to_string();

    gb().args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    add_run(&db, "2025-03-02", "P1", "Exec1", &["--track", "PB1"]);

    gb().args(["--db", &db, "render", "--view", "tracks", "--out", &out_str])
        .assert()
        .success();

    assert!(out.path().join("gantt_tracks.html").exists());
    assert!(!out.path().join("gantt_projects.html").exists());
}

#[test]
fn test_export_csv_and_json() {
    let db = setup_test_db("export_csv_json");
    let out = tempfile::tempdir().unwrap();

    gb().args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    add_run(
        &db,
        "2025-03-02",
        "P1",
        "Exec1",
        &["--track", "PB1", "--engineers", "A"],
    );

    let csv_path = out.path().join("runs.csv").to_string_lossy().to_string();
    gb().args([
        "--db", &db, "export", "--format", "csv", "--file", &csv_path,
    ])
    .assert()
    .success();
    let content = std::fs::read_to_string(&csv_path).unwrap();
    assert!(content.contains("P1"));
    assert!(content.contains("2025-03-02"));

    // refuses to overwrite without --force
    gb().args([
        "--db", &db, "export", "--format", "csv", "--file", &csv_path,
    ])
    .assert()
    .failure();

    let json_path = out.path().join("runs.json").to_string_lossy().to_string();
    gb().args([
        "--db", &db, "export", "--format", "json", "--file", &json_path,
    ])
    .assert()
    .success();
    let content = std::fs::read_to_string(&json_path).unwrap();
    assert!(content.contains("\"project_id\": \"P1\""));
}
