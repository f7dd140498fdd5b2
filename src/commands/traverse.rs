//! `graphstep bfs|dfs|path` - parse the graph, run one traversal and play
//! its events through the selected renderer

use tracing::debug;

use crate::cli::args::GraphArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::present::{self, Renderer, RunHeader};
use crate::commands::source;
use graphstep_core::error::{GraphstepError, Result};
use graphstep_core::event::VisitationEvent;
use graphstep_core::graph::{GraphModel, Vertex};
use graphstep_core::playback::{pacer_for, play, Presenter};
use graphstep_core::trace_time;
use graphstep_core::traversal::{Algorithm, CancelToken, Traversal, TraversalSummary};

/// One traversal invocation with flags already pulled out of clap
pub struct RunRequest<'a> {
    pub algorithm: Algorithm,
    pub start: Option<&'a str>,
    pub goal: Option<&'a str>,
    pub source: &'a GraphArgs,
    pub delay_ms: Option<u64>,
}

/// Forwards to the renderer and counts what it was given
struct Tally<'r> {
    renderer: &'r mut dyn Renderer,
    summary: TraversalSummary,
}

impl Presenter for Tally<'_> {
    fn reset(&mut self, graph: &GraphModel) -> Result<()> {
        self.renderer.reset(graph)
    }

    fn apply(&mut self, event: &VisitationEvent) -> Result<()> {
        self.renderer.apply(event)?;
        self.summary.record(event);
        Ok(())
    }
}

pub fn execute(ctx: &CommandContext, request: RunRequest) -> Result<()> {
    let loaded = source::load(request.source, ctx.config)?;

    let start = request.start.unwrap_or(&ctx.config.defaults.start);
    let mut traversal = Traversal::start(request.algorithm, &loaded.graph, start, request.goal)?;

    let header = RunHeader {
        algorithm: request.algorithm,
        start: Vertex::from(start.trim()),
        goal: request.goal.map(|goal| Vertex::from(goal.trim())),
    };

    let cancel = CancelToken::new();
    install_interrupt_handler(&cancel);

    let delay = ctx.step_delay(request.delay_ms);
    let mut pacer = pacer_for(delay);
    let mut renderer = present::renderer_for(ctx.cli.format, header.clone(), ctx.cli.quiet);
    let mut tally = Tally {
        renderer: renderer.as_mut(),
        summary: TraversalSummary::new(header.algorithm, header.start, header.goal),
    };

    debug!(algorithm = %request.algorithm, ?delay, source = %loaded.source, "playback starting");
    let report = play(
        &loaded.graph,
        traversal.by_ref(),
        &mut tally,
        pacer.as_mut(),
        &cancel,
    )?;

    let mut summary = tally.summary;
    summary.interrupted = report.interrupted;
    if let Some(outcome) = traversal.outcome() {
        summary.finish_search(outcome, traversal.path());
    }

    renderer.finish(&summary)?;
    trace_time!(ctx.start, "traverse", steps = report.steps);

    if summary.interrupted {
        return Err(GraphstepError::Interrupted);
    }
    Ok(())
}

fn install_interrupt_handler(cancel: &CancelToken) {
    let token = cancel.clone();
    let _ = ctrlc::set_handler(move || {
        token.cancel();
    });
}
