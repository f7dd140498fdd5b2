//! Command trait and context for dispatching commands

use std::time::{Duration, Instant};

use crate::cli::{Cli, OutputFormat};
use graphstep_core::config::Config;
use graphstep_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Pause between steps: the flag, else the config value for human
    /// output, else no pacing
    pub fn step_delay(&self, flag_ms: Option<u64>) -> Duration {
        match (flag_ms, self.cli.format) {
            (Some(ms), _) => Duration::from_millis(ms),
            (None, OutputFormat::Human) => self.config.step_delay(),
            (None, _) => Duration::ZERO,
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphstep {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step-by-step BFS, DFS and shortest-path playback.");
        println!();
        println!("Run `graphstep --help` for usage information.");
        Ok(())
    }
}
