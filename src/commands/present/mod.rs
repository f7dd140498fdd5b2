//! Renderers that turn a played event stream into terminal output

mod human;
mod json;
mod records;

use graphstep_core::error::Result;
use graphstep_core::format::OutputFormat;
use graphstep_core::graph::Vertex;
use graphstep_core::playback::Presenter;
use graphstep_core::traversal::{Algorithm, TraversalSummary};

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use records::RecordsRenderer;

/// A presenter that also reports how the run ended
pub trait Renderer: Presenter {
    fn finish(&mut self, summary: &TraversalSummary) -> Result<()>;
}

/// What is being played, for headers and status lines
#[derive(Debug, Clone)]
pub struct RunHeader {
    pub algorithm: Algorithm,
    pub start: Vertex,
    pub goal: Option<Vertex>,
}

pub fn renderer_for(format: OutputFormat, header: RunHeader, quiet: bool) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Human => Box::new(HumanRenderer::new(header, quiet)),
        OutputFormat::Json => Box::new(JsonRenderer::default()),
        OutputFormat::Records => Box::new(RecordsRenderer::new(header)),
    }
}

/// `a -> b -> c`
pub(crate) fn join_path(path: &[Vertex], separator: &str) -> String {
    path.iter()
        .map(Vertex::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}
