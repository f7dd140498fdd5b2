use graphstep_core::error::Result;
use graphstep_core::event::VisitationEvent;
use graphstep_core::graph::{GraphModel, Vertex};
use graphstep_core::playback::{PlaybackState, Presenter};
use graphstep_core::traversal::{Algorithm, TraversalSummary};

use super::{join_path, Renderer, RunHeader};

/// Terminal playback: one `Step N:` line per event as it is applied
pub struct HumanRenderer {
    header: RunHeader,
    quiet: bool,
    state: PlaybackState,
}

impl HumanRenderer {
    pub fn new(header: RunHeader, quiet: bool) -> Self {
        Self {
            header,
            quiet,
            state: PlaybackState::default(),
        }
    }

    fn opening_line(&self) -> String {
        match (&self.header.algorithm, &self.header.goal) {
            (Algorithm::ShortestPath, Some(goal)) => format!(
                "Finding shortest path from {} to {}",
                self.header.start, goal
            ),
            (algorithm, _) => format!(
                "{} from {}",
                algorithm.status_label(),
                self.header.start
            ),
        }
    }

    /// `visited/total` over every vertex the display tracks
    fn coverage(&self) -> (usize, usize) {
        self.state.iter().fold((0, 0), |(seen, total), (_, role)| {
            (seen + usize::from(role.is_some()), total + 1)
        })
    }
}

pub(crate) fn step_line(event: &VisitationEvent) -> String {
    format!(
        "Step {}: {} {}",
        event.sequence,
        event.vertex,
        event.role.label()
    )
}

pub(crate) fn path_line(path: &[Vertex]) -> String {
    let edges = path.len().saturating_sub(1);
    let unit = if edges == 1 { "edge" } else { "edges" };
    format!("{} ({} {})", join_path(path, " -> "), edges, unit)
}

impl Presenter for HumanRenderer {
    fn reset(&mut self, graph: &GraphModel) -> Result<()> {
        self.state.reset(graph);
        if !self.quiet {
            println!("{}", self.opening_line());
        }
        Ok(())
    }

    fn apply(&mut self, event: &VisitationEvent) -> Result<()> {
        self.state.apply(event)?;
        if !self.quiet {
            println!("{}", step_line(event));
        }
        Ok(())
    }
}

impl HumanRenderer {
    /// Lines printed once playback stops; the status line survives `--quiet`
    fn closing_lines(&self, summary: &TraversalSummary) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.quiet {
            if summary.algorithm != Algorithm::ShortestPath {
                let (seen, total) = self.coverage();
                lines.push(format!("Visited {} of {} vertices", seen, total));
            } else if let Some(path) = summary.path.as_deref().filter(|_| !summary.interrupted) {
                lines.push(format!("Path: {}", path_line(path)));
            }
        }
        lines.push(format!("Status: {}", summary.status()));
        lines
    }
}

impl Renderer for HumanRenderer {
    fn finish(&mut self, summary: &TraversalSummary) -> Result<()> {
        for line in self.closing_lines(summary) {
            println!("{}", line);
        }
        Ok(())
    }
}
