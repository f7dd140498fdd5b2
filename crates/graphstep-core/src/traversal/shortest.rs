mod path;

use std::collections::{HashMap, HashSet, VecDeque};

use super::sequencer::Sequencer;
use crate::event::{Role, SearchOutcome, VisitationEvent};
use crate::graph::{GraphModel, Vertex};

/// Unweighted shortest-path search as a lazy event stream.
///
/// The search itself runs to completion on the first call to `next`; the
/// stream then yields one `PathMember` event per vertex of the path, start
/// to goal, or nothing at all when the goal is unreachable.
#[derive(Debug)]
pub struct ShortestPath<'g> {
    graph: &'g GraphModel,
    start: Vertex,
    goal: Vertex,
    outcome: Option<SearchOutcome>,
    path: Vec<Vertex>,
    pending: VecDeque<VisitationEvent>,
    sequencer: Sequencer,
}

/// Fully drained shortest-path run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult {
    pub outcome: SearchOutcome,
    pub path: Vec<Vertex>,
    pub events: Vec<VisitationEvent>,
}

impl ShortestPathResult {
    /// Path length in edges, if a path was found
    pub fn length(&self) -> Option<usize> {
        self.outcome
            .is_found()
            .then(|| self.path.len().saturating_sub(1))
    }
}

impl<'g> ShortestPath<'g> {
    pub(crate) fn new(graph: &'g GraphModel, start: Vertex, goal: Vertex) -> Self {
        Self {
            graph,
            start,
            goal,
            outcome: None,
            path: Vec::new(),
            pending: VecDeque::new(),
            sequencer: Sequencer::default(),
        }
    }

    /// Terminal status; `None` until the search has run
    pub fn outcome(&self) -> Option<SearchOutcome> {
        self.outcome
    }

    /// The path found, start to goal; empty until found
    pub fn path(&self) -> &[Vertex] {
        &self.path
    }

    /// Drain the stream and collect the result
    pub fn run(mut self) -> ShortestPathResult {
        let events: Vec<VisitationEvent> = self.by_ref().collect();
        ShortestPathResult {
            outcome: self.outcome.unwrap_or(SearchOutcome::NotFound),
            path: self.path,
            events,
        }
    }

    fn resolve(&mut self) {
        let found = find_path(self.graph, self.start.as_str(), self.goal.as_str());

        let outcome = match found {
            Some(path) => {
                for vertex in &path {
                    let event = self.sequencer.emit(vertex, Role::PathMember);
                    self.pending.push_back(event);
                }
                self.path = path;
                SearchOutcome::Found
            }
            None => SearchOutcome::NotFound,
        };

        tracing::debug!(
            start = %self.start,
            goal = %self.goal,
            ?outcome,
            length = self.path.len().saturating_sub(1),
            "shortest path resolved"
        );
        self.outcome = Some(outcome);
    }
}

impl Iterator for ShortestPath<'_> {
    type Item = VisitationEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if self.outcome.is_none() {
            self.resolve();
        }
        self.pending.pop_front()
    }
}

/// Breadth-first search recording each vertex's predecessor at discovery.
/// The first time `goal` is dequeued its predecessor chain is a shortest
/// path; ties go to whichever branch was discovered first in neighbor order.
fn find_path(graph: &GraphModel, start: &str, goal: &str) -> Option<Vec<Vertex>> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut predecessors: HashMap<&str, &str> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return Some(path::reconstruct_path(start, goal, &predecessors));
        }

        for neighbor in graph.neighbors(current) {
            let neighbor = neighbor.as_str();
            if visited.insert(neighbor) {
                predecessors.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    None
}
