use crate::event::{Role, VisitationEvent};
use crate::graph::Vertex;

/// Numbers the events of one run, starting at 1.
#[derive(Debug, Default)]
pub(crate) struct Sequencer {
    emitted: u64,
}

impl Sequencer {
    pub(crate) fn emit(&mut self, vertex: &Vertex, role: Role) -> VisitationEvent {
        self.emitted += 1;
        VisitationEvent {
            vertex: vertex.clone(),
            role,
            sequence: self.emitted,
        }
    }

    pub(crate) fn emitted(&self) -> u64 {
        self.emitted
    }
}
