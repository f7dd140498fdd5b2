use clap::Args;
use std::path::PathBuf;

/// Where the adjacency list comes from
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Read the adjacency list from a file (`-` for stdin)
    #[arg(long, short)]
    pub graph: Option<PathBuf>,

    /// Inline adjacency list; lines separated by newlines or `;`
    #[arg(long, conflicts_with = "graph")]
    pub text: Option<String>,
}

/// Pacing between events
#[derive(Args, Debug, Clone, Default)]
pub struct PlaybackArgs {
    /// Milliseconds between steps (default: config value for human output, 0 otherwise)
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct TraverseArgs {
    /// Start vertex (default: config value, or A)
    #[arg(long, short)]
    pub start: Option<String>,

    #[command(flatten)]
    pub source: GraphArgs,

    #[command(flatten)]
    pub playback: PlaybackArgs,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Start vertex (default: config value, or A)
    #[arg(long, short)]
    pub start: Option<String>,

    /// Goal vertex (default: config value, or F)
    #[arg(long, short = 'G')]
    pub goal: Option<String>,

    #[command(flatten)]
    pub source: GraphArgs,

    #[command(flatten)]
    pub playback: PlaybackArgs,
}
