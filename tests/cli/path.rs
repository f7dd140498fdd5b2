use crate::support::{graphstep, lines_with_prefix, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Shortest path playback
// ============================================================================

#[test]
fn test_path_sample_found() {
    graphstep()
        .args(["path", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Finding shortest path from A to F\n",
        ))
        .stdout(predicate::str::contains(
            "Step 1: A Path\nStep 2: C Path\nStep 3: F Path\n",
        ))
        .stdout(predicate::str::contains("Path: A -> C -> F (2 edges)"))
        .stdout(predicate::str::ends_with("Status: Shortest Path Found\n"));
}

#[test]
fn test_path_not_found_exits_zero() {
    graphstep()
        .args(["path", "--delay-ms", "0", "--goal", "G"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step").not())
        .stdout(predicate::str::ends_with("Status: No Path Found\n"));
}

#[test]
fn test_path_to_self_is_single_vertex() {
    graphstep()
        .args(["path", "--delay-ms", "0", "--start", "B", "--goal", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1: B Path"))
        .stdout(predicate::str::contains("Step 2").not())
        .stdout(predicate::str::contains("Path: B (0 edges)"));
}

#[test]
fn test_path_records() {
    let output = graphstep()
        .args(["--format", "records", "path", "-s", "D", "-G", "F"])
        .output()
        .unwrap();
    assert!(output.status.success());

    assert_eq!(
        lines_with_prefix(&output, "H "),
        vec!["H graphstep=1 records=1 mode=path start=D goal=F vertices=6 edges=12"]
    );
    assert_eq!(
        lines_with_prefix(&output, "E "),
        vec![
            "E seq=1 vertex=D role=path_member",
            "E seq=2 vertex=B role=path_member",
            "E seq=3 vertex=E role=path_member",
            "E seq=4 vertex=F role=path_member",
        ]
    );
    assert_eq!(
        lines_with_prefix(&output, "P "),
        vec!["P found=true length=3 path=D,B,E,F"]
    );
}

#[test]
fn test_path_records_not_found() {
    let output = graphstep()
        .args(["--format", "records", "path", "--text", "A:B;C:D", "--goal", "D"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(lines_with_prefix(&output, "E ").is_empty());
    assert_eq!(
        lines_with_prefix(&output, "P "),
        vec!["P found=false length=- path=-"]
    );
}

#[test]
fn test_path_json() {
    let output = graphstep()
        .args(["--format", "json", "path"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc = stdout_json(&output);
    assert_eq!(doc["algorithm"], "shortest_path");
    assert_eq!(doc["start"], "A");
    assert_eq!(doc["goal"], "F");
    assert_eq!(doc["outcome"], "found");
    assert_eq!(doc["path"], serde_json::json!(["A", "C", "F"]));
    assert_eq!(doc["events"].as_array().unwrap().len(), 3);
    assert_eq!(doc["events"][2]["role"], "path_member");
}

#[test]
fn test_path_json_not_found_has_no_path() {
    let output = graphstep()
        .args(["--format", "json", "path", "--goal", "Q"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc = stdout_json(&output);
    assert_eq!(doc["outcome"], "not_found");
    assert!(doc.get("path").is_none());
    assert_eq!(doc["events"], serde_json::json!([]));
}

#[test]
fn test_tie_broken_by_neighbor_order() {
    graphstep()
        .args([
            "path",
            "--delay-ms",
            "0",
            "--text",
            "S:X,Y;X:T;Y:T",
            "--start",
            "S",
            "--goal",
            "T",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: S -> X -> T (2 edges)"));
}
