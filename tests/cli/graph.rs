use crate::support::{graphstep, lines_with_prefix, stdout_json};
use predicates::prelude::*;

// ============================================================================
// graph inspection
// ============================================================================

#[test]
fn test_graph_sample_human() {
    graphstep()
        .arg("graph")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Graph (sample): 6 vertices, 12 edges",
        ))
        .stdout(predicate::str::contains("  B -> A, D, E"))
        .stdout(predicate::str::contains("Skipped input").not());
}

#[test]
fn test_graph_reports_skipped_lines() {
    graphstep()
        .args(["graph", "--text", "A:B,,C;junk;B:C:D;A:D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped input:"))
        .stdout(predicate::str::contains("line 1: empty neighbor dropped"))
        .stdout(predicate::str::contains("line 2: no ':' separator, line skipped"))
        .stdout(predicate::str::contains("line 3: more than one ':', line skipped"))
        .stdout(predicate::str::contains("line 4: vertex A redefined"))
        .stdout(predicate::str::contains("  A -> D"));
}

#[test]
fn test_graph_records() {
    let output = graphstep()
        .args(["--format", "records", "graph", "--text", "A:B;B:;:C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    assert_eq!(
        lines_with_prefix(&output, "V "),
        vec!["V vertex=A neighbors=B", "V vertex=B neighbors=-"]
    );
    assert_eq!(
        lines_with_prefix(&output, "D "),
        vec!["D line=3 kind=empty_vertex"]
    );
}

#[test]
fn test_graph_json() {
    let output = graphstep()
        .args(["--format", "json", "graph", "--text", "A:B,B"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc = stdout_json(&output);
    assert_eq!(doc["source"], "inline");
    assert_eq!(doc["edges"], 1);
    assert_eq!(doc["referenced_only"], serde_json::json!(["B"]));
    assert_eq!(doc["diagnostics"][0]["kind"], "duplicate_neighbor");
    assert_eq!(doc["diagnostics"][0]["neighbor"], "B");
}
