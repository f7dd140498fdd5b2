use std::collections::HashSet;

use serde::Serialize;

use super::Algorithm;
use crate::event::{SearchOutcome, VisitationEvent};
use crate::graph::Vertex;

/// What one run produced, for status lines and machine-readable output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalSummary {
    pub algorithm: Algorithm,
    pub start: Vertex,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Vertex>,
    /// Events applied
    pub steps: u64,
    /// Distinct vertices that appeared in any event
    pub vertices: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<SearchOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Vertex>>,
    pub interrupted: bool,
    #[serde(skip)]
    seen: HashSet<Vertex>,
}

impl TraversalSummary {
    pub fn new(algorithm: Algorithm, start: impl Into<Vertex>, goal: Option<Vertex>) -> Self {
        Self {
            algorithm,
            start: start.into(),
            goal,
            steps: 0,
            vertices: 0,
            outcome: None,
            path: None,
            interrupted: false,
            seen: HashSet::new(),
        }
    }

    /// Count one applied event
    pub fn record(&mut self, event: &VisitationEvent) {
        self.steps += 1;
        if self.seen.insert(event.vertex.clone()) {
            self.vertices = self.seen.len();
        }
    }

    /// Attach the shortest-path result. An interrupted run keeps the
    /// outcome but not the path, since its events stopped short of it.
    pub fn finish_search(&mut self, outcome: SearchOutcome, path: &[Vertex]) {
        self.outcome = Some(outcome);
        self.path = (outcome.is_found() && !self.interrupted).then(|| path.to_vec());
    }

    /// Status line in the visualizer's wording
    pub fn status(&self) -> String {
        if self.interrupted {
            return format!("{} interrupted after {} steps", self.algorithm.status_label(), self.steps);
        }
        match self.outcome {
            Some(SearchOutcome::Found) => "Shortest Path Found".to_string(),
            Some(SearchOutcome::NotFound) => "No Path Found".to_string(),
            None => self.algorithm.status_label().to_string(),
        }
    }
}
