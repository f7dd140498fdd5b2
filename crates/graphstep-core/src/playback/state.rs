use std::collections::HashMap;

use crate::error::{GraphstepError, Result};
use crate::event::{Role, VisitationEvent};
use crate::graph::{GraphModel, Vertex};

/// Consumer-side presentation state: the latest role of every vertex and
/// the step counter.
///
/// A later event for the same vertex overrides the earlier role. Events
/// must arrive in sequence order; `reset` returns every vertex to the
/// unvisited baseline before a new run.
#[derive(Debug, Clone, Default)]
pub struct PlaybackState {
    roles: Vec<(Vertex, Option<Role>)>,
    positions: HashMap<Vertex, usize>,
    step: u64,
}

impl PlaybackState {
    pub fn new(graph: &GraphModel) -> Self {
        let mut state = Self::default();
        state.reset(graph);
        state
    }

    /// Forget all roles and start over from step 0 with the graph's vertices
    pub fn reset(&mut self, graph: &GraphModel) {
        self.roles.clear();
        self.positions.clear();
        self.step = 0;

        for vertex in graph.known_vertices() {
            self.positions.insert(vertex.clone(), self.roles.len());
            self.roles.push((vertex.clone(), None));
        }
    }

    /// Apply the next event. Vertices the graph never mentioned (an
    /// unknown start vertex) are added on first sight.
    pub fn apply(&mut self, event: &VisitationEvent) -> Result<()> {
        let expected = self.step + 1;
        if event.sequence != expected {
            return Err(GraphstepError::OutOfOrderEvent {
                expected,
                found: event.sequence,
            });
        }

        match self.positions.get(&event.vertex) {
            Some(&pos) => self.roles[pos].1 = Some(event.role),
            None => {
                self.positions.insert(event.vertex.clone(), self.roles.len());
                self.roles.push((event.vertex.clone(), Some(event.role)));
            }
        }

        self.step = event.sequence;
        Ok(())
    }

    /// Latest role of `vertex`; `None` while unvisited
    pub fn role(&self, vertex: &str) -> Option<Role> {
        self.positions
            .get(vertex)
            .and_then(|&pos| self.roles[pos].1)
    }

    /// Number of events applied since the last reset
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Every tracked vertex with its role, in display order
    pub fn iter(&self) -> impl Iterator<Item = (&Vertex, Option<Role>)> {
        self.roles.iter().map(|(vertex, role)| (vertex, *role))
    }
}
