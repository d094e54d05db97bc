use assert_cmd::Command;

/// Launch the ganttboard binary for integration tests.
pub fn gb() -> Command {
    Command::cargo_bin("ganttboard").expect("binary not built")
}
