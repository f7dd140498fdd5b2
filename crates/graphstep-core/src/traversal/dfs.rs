use std::collections::HashSet;

use super::sequencer::Sequencer;
use crate::event::{Role, VisitationEvent};
use crate::graph::{GraphModel, Vertex};

/// A vertex on the explicit DFS stack and the index of the next
/// neighbor to try.
#[derive(Debug)]
struct Frame {
    vertex: Vertex,
    next: usize,
}

/// Pre-order depth-first traversal as a lazy event stream.
///
/// Both events for a vertex are emitted before descending into its first
/// unvisited neighbor. Uses an explicit stack, so depth is bounded by
/// heap, not the call stack.
#[derive(Debug)]
pub struct Dfs<'g> {
    graph: &'g GraphModel,
    start: Option<Vertex>,
    stack: Vec<Frame>,
    visited: HashSet<Vertex>,
    pending: Option<VisitationEvent>,
    sequencer: Sequencer,
    done: bool,
}

impl<'g> Dfs<'g> {
    pub(crate) fn new(graph: &'g GraphModel, start: Vertex) -> Self {
        Self {
            graph,
            start: Some(start),
            stack: Vec::new(),
            visited: HashSet::new(),
            pending: None,
            sequencer: Sequencer::default(),
            done: false,
        }
    }

    fn enter(&mut self, vertex: Vertex) -> VisitationEvent {
        self.visited.insert(vertex.clone());
        let current = self.sequencer.emit(&vertex, Role::Current);
        self.pending = Some(self.sequencer.emit(&vertex, Role::Visited));
        self.stack.push(Frame { vertex, next: 0 });
        current
    }

    fn next_unvisited(&mut self) -> Option<Vertex> {
        let graph = self.graph;

        while let Some(frame) = self.stack.last_mut() {
            match graph.neighbors(frame.vertex.as_str()).get(frame.next) {
                Some(neighbor) => {
                    frame.next += 1;
                    if !self.visited.contains(neighbor) {
                        return Some(neighbor.clone());
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}

impl Iterator for Dfs<'_> {
    type Item = VisitationEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }

        if let Some(start) = self.start.take() {
            return Some(self.enter(start));
        }

        match self.next_unvisited() {
            Some(vertex) => Some(self.enter(vertex)),
            None => {
                if !self.done {
                    self.done = true;
                    tracing::debug!(
                        events = self.sequencer.emitted(),
                        vertices = self.visited.len(),
                        "dfs finished"
                    );
                }
                None
            }
        }
    }
}
