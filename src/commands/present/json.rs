use serde::Serialize;

use graphstep_core::error::Result;
use graphstep_core::event::VisitationEvent;
use graphstep_core::graph::GraphModel;
use graphstep_core::playback::Presenter;
use graphstep_core::traversal::TraversalSummary;

use super::Renderer;

/// Buffers events and prints one document when the run ends
#[derive(Default)]
pub struct JsonRenderer {
    events: Vec<VisitationEvent>,
}

#[derive(Serialize)]
struct RunDocument<'a> {
    #[serde(flatten)]
    summary: &'a TraversalSummary,
    events: &'a [VisitationEvent],
}

impl JsonRenderer {
    fn document(&self, summary: &TraversalSummary) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(RunDocument {
            summary,
            events: &self.events,
        })?)
    }
}

impl Presenter for JsonRenderer {
    fn reset(&mut self, _graph: &GraphModel) -> Result<()> {
        self.events.clear();
        Ok(())
    }

    fn apply(&mut self, event: &VisitationEvent) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}

impl Renderer for JsonRenderer {
    fn finish(&mut self, summary: &TraversalSummary) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(&self.document(summary)?)?);
        Ok(())
    }
}
