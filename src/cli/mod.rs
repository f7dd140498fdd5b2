//! CLI argument parsing for graphstep
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use args::{GraphArgs, PathArgs, TraverseArgs};
pub use graphstep_core::format::OutputFormat;
use parse::parse_output_format;

/// Graphstep - step-by-step BFS, DFS and shortest-path playback
#[derive(Parser, Debug)]
#[command(name = "graphstep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (default: ~/.config/graphstep/config.toml)
    #[arg(long, global = true, env = "GRAPHSTEP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a breadth-first traversal
    Bfs(TraverseArgs),

    /// Play a depth-first traversal
    Dfs(TraverseArgs),

    /// Find and play the shortest path between two vertices
    Path(PathArgs),

    /// Show the parsed graph and any skipped input
    Graph(GraphArgs),
}
