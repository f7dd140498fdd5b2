//! Command implementations for all graphstep commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::traverse::{self, RunRequest};
use graphstep_core::error::Result;
use graphstep_core::traversal::Algorithm;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Bfs(args) => traverse::execute(
                ctx,
                RunRequest {
                    algorithm: Algorithm::Bfs,
                    start: args.start.as_deref(),
                    goal: None,
                    source: &args.source,
                    delay_ms: args.playback.delay_ms,
                },
            ),
            Commands::Dfs(args) => traverse::execute(
                ctx,
                RunRequest {
                    algorithm: Algorithm::Dfs,
                    start: args.start.as_deref(),
                    goal: None,
                    source: &args.source,
                    delay_ms: args.playback.delay_ms,
                },
            ),
            Commands::Path(args) => traverse::execute(
                ctx,
                RunRequest {
                    algorithm: Algorithm::ShortestPath,
                    start: args.start.as_deref(),
                    goal: Some(args.goal.as_deref().unwrap_or(&ctx.config.defaults.goal)),
                    source: &args.source,
                    delay_ms: args.playback.delay_ms,
                },
            ),
            Commands::Graph(args) => crate::commands::graph::execute(ctx, args),
        }
    }
}
