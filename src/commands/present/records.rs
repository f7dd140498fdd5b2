use graphstep_core::error::Result;
use graphstep_core::event::VisitationEvent;
use graphstep_core::graph::GraphModel;
use graphstep_core::playback::Presenter;
use graphstep_core::traversal::{Algorithm, TraversalSummary};

use super::{join_path, Renderer, RunHeader};

/// Line-oriented records: `H` header, one `E` line per event, and a `P`
/// line for shortest-path runs
pub struct RecordsRenderer {
    header: RunHeader,
}

impl RecordsRenderer {
    pub fn new(header: RunHeader) -> Self {
        Self { header }
    }
}

pub(crate) fn header_line(header: &RunHeader, graph: &GraphModel) -> String {
    let mut line = format!(
        "H graphstep=1 records=1 mode={} start={}",
        header.algorithm, header.start
    );
    if let Some(goal) = &header.goal {
        line.push_str(&format!(" goal={}", goal));
    }
    line.push_str(&format!(
        " vertices={} edges={}",
        graph.len(),
        graph.edge_count()
    ));
    line
}

pub(crate) fn event_line(event: &VisitationEvent) -> String {
    format!(
        "E seq={} vertex={} role={}",
        event.sequence, event.vertex, event.role
    )
}

pub(crate) fn path_line(summary: &TraversalSummary) -> Option<String> {
    let outcome = summary.outcome?;
    let path = summary.path.as_deref().unwrap_or(&[]);
    let length = if outcome.is_found() {
        path.len().saturating_sub(1).to_string()
    } else {
        "-".to_string()
    };
    let joined = if path.is_empty() {
        "-".to_string()
    } else {
        join_path(path, ",")
    };
    Some(format!(
        "P found={} length={} path={}",
        outcome.is_found(),
        length,
        joined
    ))
}

impl Presenter for RecordsRenderer {
    fn reset(&mut self, graph: &GraphModel) -> Result<()> {
        println!("{}", header_line(&self.header, graph));
        Ok(())
    }

    fn apply(&mut self, event: &VisitationEvent) -> Result<()> {
        println!("{}", event_line(event));
        Ok(())
    }
}

/// Trailing records: `I` for a cut-short run, else `P` in path mode.
/// A truncated run never reports a path its `E` lines did not cover.
pub(crate) fn closing_lines(summary: &TraversalSummary) -> Vec<String> {
    if summary.interrupted {
        return vec![format!("I steps={}", summary.steps)];
    }
    if summary.algorithm != Algorithm::ShortestPath {
        return Vec::new();
    }
    path_line(summary).into_iter().collect()
}

impl Renderer for RecordsRenderer {
    fn finish(&mut self, summary: &TraversalSummary) -> Result<()> {
        for line in closing_lines(summary) {
            println!("{}", line);
        }
        Ok(())
    }
}
