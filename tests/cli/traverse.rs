use crate::support::{graphstep, lines_with_prefix, stdout_json};
use predicates::prelude::*;

// ============================================================================
// bfs / dfs playback
// ============================================================================

#[test]
fn test_bfs_sample_order() {
    let output = graphstep()
        .args(["bfs", "--delay-ms", "0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let current: Vec<String> = lines_with_prefix(&output, "Step ")
        .into_iter()
        .filter(|line| line.ends_with(" Current"))
        .collect();
    assert_eq!(
        current,
        vec![
            "Step 1: A Current",
            "Step 3: B Current",
            "Step 5: C Current",
            "Step 7: D Current",
            "Step 9: E Current",
            "Step 11: F Current",
        ]
    );
}

#[test]
fn test_bfs_human_status_lines() {
    graphstep()
        .args(["bfs", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("BFS Traversal from A\n"))
        .stdout(predicate::str::contains("Step 2: A Visited"))
        .stdout(predicate::str::contains("Visited 6 of 6 vertices"))
        .stdout(predicate::str::ends_with("Status: BFS Traversal\n"));
}

#[test]
fn test_dfs_sample_preorder() {
    let output = graphstep()
        .args(["--format", "records", "dfs"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let events = lines_with_prefix(&output, "E ");
    let order: Vec<&str> = events
        .iter()
        .filter(|line| line.ends_with("role=current"))
        .filter_map(|line| line.split(' ').nth(2))
        .collect();
    assert_eq!(
        order,
        vec![
            "vertex=A", "vertex=B", "vertex=D", "vertex=E", "vertex=F", "vertex=C"
        ]
    );
}

#[test]
fn test_dfs_cycle_terminates() {
    graphstep()
        .args(["dfs", "--delay-ms", "0", "--text", "A:B;B:C;C:A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 6: C Visited"))
        .stdout(predicate::str::contains("Step 7").not());
}

#[test]
fn test_unknown_start_is_singleton_run() {
    graphstep()
        .args(["bfs", "--delay-ms", "0", "--start", "Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1: Z Current"))
        .stdout(predicate::str::contains("Step 2: Z Visited"))
        .stdout(predicate::str::contains("Step 3").not())
        .stdout(predicate::str::contains("Visited 1 of 7 vertices"));
}

#[test]
fn test_start_is_trimmed() {
    graphstep()
        .args(["bfs", "--delay-ms", "0", "--start", "  D "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1: D Current"));
}

#[test]
fn test_quiet_prints_only_status() {
    graphstep()
        .args(["--quiet", "bfs", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout("Status: BFS Traversal\n");
}

#[test]
fn test_bfs_records_shape() {
    let output = graphstep()
        .args(["--format", "records", "bfs"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(
        lines.next(),
        Some("H graphstep=1 records=1 mode=bfs start=A vertices=6 edges=12")
    );
    assert_eq!(lines.next(), Some("E seq=1 vertex=A role=current"));
    assert_eq!(lines.next(), Some("E seq=2 vertex=A role=visited"));
    assert_eq!(lines_with_prefix(&output, "E ").len(), 12);
    assert!(lines_with_prefix(&output, "P ").is_empty());
}

#[test]
fn test_dfs_json_document() {
    let output = graphstep()
        .args(["--format", "json", "dfs", "--text", "A:B;B:C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc = stdout_json(&output);
    assert_eq!(doc["algorithm"], "dfs");
    assert_eq!(doc["start"], "A");
    assert_eq!(doc["interrupted"], false);
    assert!(doc.get("goal").is_none());
    assert!(doc.get("outcome").is_none());

    let events = doc["events"].as_array().unwrap();
    assert_eq!(events.len(), 6);
    for (idx, event) in events.iter().enumerate() {
        assert_eq!(event["sequence"], idx as u64 + 1);
    }
    assert_eq!(events[4]["vertex"], "C");
    assert_eq!(events[4]["role"], "current");
}

#[test]
fn test_graph_from_stdin() {
    graphstep()
        .args(["bfs", "--delay-ms", "0", "--start", "X", "--graph", "-"])
        .write_stdin("X:Y\nY:\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 3: Y Current"));
}

#[test]
fn test_graph_from_file_with_bad_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.txt");
    std::fs::write(&path, "A:B\nthis line is junk\nB:C\n").unwrap();

    graphstep()
        .args(["bfs", "--delay-ms", "0", "--graph"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 5: C Current"))
        .stderr(predicate::str::contains("line 2"));
}
