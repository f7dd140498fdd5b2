use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::process::Output;

/// Get a Command for graphstep with no user configuration in play
pub fn graphstep() -> Command {
    let mut cmd = cargo_bin_cmd!("graphstep");
    cmd.env(
        "GRAPHSTEP_CONFIG_DIR",
        std::env::temp_dir().join("graphstep-tests-no-config"),
    )
    .env_remove("GRAPHSTEP_CONFIG")
    .env_remove("GRAPHSTEP_LOG")
    .env_remove("RUST_LOG");
    cmd
}

/// Stdout lines that start with `prefix`
pub fn lines_with_prefix(output: &Output, prefix: &str) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| line.starts_with(prefix))
        .map(str::to_string)
        .collect()
}

/// Parse stdout as one JSON document
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}
