use std::collections::{HashSet, VecDeque};

use super::sequencer::Sequencer;
use crate::event::{Role, VisitationEvent};
use crate::graph::{GraphModel, Vertex};

/// Breadth-first traversal as a lazy event stream.
///
/// Each dequeued vertex yields `Current` then `Visited`, back to back.
/// Vertices are marked visited when discovered, so none is enqueued twice.
#[derive(Debug)]
pub struct Bfs<'g> {
    graph: &'g GraphModel,
    queue: VecDeque<Vertex>,
    visited: HashSet<Vertex>,
    pending: Option<VisitationEvent>,
    sequencer: Sequencer,
    done: bool,
}

impl<'g> Bfs<'g> {
    pub(crate) fn new(graph: &'g GraphModel, start: Vertex) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start.clone());

        Self {
            graph,
            queue: VecDeque::from([start]),
            visited,
            pending: None,
            sequencer: Sequencer::default(),
            done: false,
        }
    }
}

impl Iterator for Bfs<'_> {
    type Item = VisitationEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }

        let Some(vertex) = self.queue.pop_front() else {
            if !self.done {
                self.done = true;
                tracing::debug!(
                    events = self.sequencer.emitted(),
                    vertices = self.visited.len(),
                    "bfs finished"
                );
            }
            return None;
        };

        for neighbor in self.graph.neighbors(vertex.as_str()) {
            if !self.visited.contains(neighbor) {
                self.visited.insert(neighbor.clone());
                self.queue.push_back(neighbor.clone());
            }
        }

        let current = self.sequencer.emit(&vertex, Role::Current);
        self.pending = Some(self.sequencer.emit(&vertex, Role::Visited));
        Some(current)
    }
}
