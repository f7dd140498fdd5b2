use crate::support::graphstep;
use predicates::prelude::*;

// ============================================================================
// Help, version and error exit codes
// ============================================================================

#[test]
fn test_help_flag() {
    graphstep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphstep"))
        .stdout(predicate::str::contains("bfs"))
        .stdout(predicate::str::contains("dfs"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("graph"));
}

#[test]
fn test_version_flag() {
    graphstep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("graphstep"));
}

#[test]
fn test_no_command_prints_banner() {
    graphstep()
        .assert()
        .success()
        .stdout(predicate::str::contains("graphstep"))
        .stdout(predicate::str::contains("--help"));
}

#[test]
fn test_unknown_format_is_usage_error() {
    graphstep()
        .args(["--format", "xml", "bfs"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_unknown_command_is_usage_error() {
    graphstep().arg("walk").assert().code(2);
}

#[test]
fn test_text_conflicts_with_graph() {
    graphstep()
        .args(["bfs", "--text", "A:B", "--graph", "g.txt"])
        .assert()
        .code(2);
}

#[test]
fn test_blank_start_is_invalid_argument() {
    graphstep()
        .args(["bfs", "--delay-ms", "0", "--start", "   "])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("error: invalid start"));
}

#[test]
fn test_blank_goal_json_envelope() {
    graphstep()
        .args(["--format", "json", "path", "--goal", ""])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("\"type\": \"invalid_argument\"").or(
            predicate::str::contains("\"type\":\"invalid_argument\""),
        ));
}

#[test]
fn test_missing_graph_file_is_data_error() {
    let dir = tempfile::tempdir().unwrap();
    graphstep()
        .args(["bfs", "--delay-ms", "0", "--graph"])
        .arg(dir.path().join("missing.txt"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cannot read graph"));
}

#[test]
fn test_quiet_suppresses_error_text() {
    graphstep()
        .args(["--quiet", "bfs", "--start", ""])
        .assert()
        .code(2)
        .stderr("");
}

#[test]
fn test_usage_error_json_before_parse() {
    graphstep()
        .args(["--format", "json", "bfs", "--bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("usage_error"));
}
