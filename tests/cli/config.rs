use crate::support::graphstep;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Configuration file handling
// ============================================================================

#[test]
fn test_config_dir_defaults_apply() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[playback]\ndelay_ms = 0\n\n[defaults]\nstart = \"C\"\ngoal = \"A\"\n",
    )
    .unwrap();

    graphstep()
        .env("GRAPHSTEP_CONFIG_DIR", dir.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("Finding shortest path from C to A"))
        .stdout(predicate::str::contains("Path: C -> A (1 edge)"));
}

#[test]
fn test_flags_override_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[defaults]\nstart = \"C\"\n",
    )
    .unwrap();

    graphstep()
        .env("GRAPHSTEP_CONFIG_DIR", dir.path())
        .args(["bfs", "--delay-ms", "0", "--start", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1: E Current"));
}

#[test]
fn test_explicit_config_with_default_graph() {
    let dir = tempdir().unwrap();
    let graph = dir.path().join("ring.txt");
    fs::write(&graph, "A:B\nB:C\nC:A\n").unwrap();

    let config = dir.path().join("custom.toml");
    fs::write(
        &config,
        format!(
            "[playback]\ndelay_ms = 0\n\n[defaults]\ngraph = {:?}\n",
            graph.display().to_string()
        ),
    )
    .unwrap();

    graphstep()
        .arg("--config")
        .arg(&config)
        .arg("graph")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 vertices, 3 edges"));
}

#[test]
fn test_invalid_config_is_data_error() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("broken.toml");
    fs::write(&config, "[playback\ndelay_ms = ").unwrap();

    graphstep()
        .arg("--config")
        .arg(&config)
        .arg("bfs")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_missing_explicit_config_is_data_error() {
    let dir = tempdir().unwrap();
    graphstep()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .arg("bfs")
        .assert()
        .code(3);
}
