//! Traversal engine
//!
//! Each algorithm is a lazy, finite iterator of [`VisitationEvent`]s over a
//! borrowed [`GraphModel`]:
//! - `bfs`: breadth-first, `Current` then `Visited` per vertex
//! - `dfs`: pre-order depth-first with an explicit stack
//! - `shortest_path`: unweighted shortest path, `PathMember` per path vertex
//!
//! A run owns all of its state and is never restarted; calling an entry
//! point again yields a fresh stream numbered from 1.

pub mod bfs;
pub mod cancel;
pub mod dfs;
mod sequencer;
pub mod shortest;
pub mod summary;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::{SearchOutcome, VisitationEvent};
use crate::graph::{GraphModel, Vertex};

pub use bfs::Bfs;
pub use cancel::{CancelExt, CancelToken, Cancellable};
pub use dfs::Dfs;
pub use shortest::{ShortestPath, ShortestPathResult};
pub use summary::TraversalSummary;

/// The three supported traversals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    ShortestPath,
}

impl Algorithm {
    /// Status line shown while the traversal plays
    pub fn status_label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS Traversal",
            Algorithm::Dfs => "DFS Traversal",
            Algorithm::ShortestPath => "Shortest Path Search",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dfs => write!(f, "dfs"),
            Algorithm::ShortestPath => write!(f, "path"),
        }
    }
}

/// Validate a vertex argument. Surrounding whitespace is dropped, the
/// same as the parser does; an empty label is misuse.
fn require_vertex(argument: &str, value: &str) -> Result<Vertex> {
    let label = value.trim();
    if label.is_empty() {
        crate::bail_invalid!(argument, "vertex name must not be empty");
    }
    Ok(Vertex::from(label))
}

/// Breadth-first traversal from `start`
#[tracing::instrument(skip(graph), fields(vertices = graph.len(), edges = graph.edge_count()))]
pub fn bfs<'g>(graph: &'g GraphModel, start: &str) -> Result<Bfs<'g>> {
    let start = require_vertex("start", start)?;
    tracing::debug!("bfs started");
    Ok(Bfs::new(graph, start))
}

/// Depth-first traversal from `start`
#[tracing::instrument(skip(graph), fields(vertices = graph.len(), edges = graph.edge_count()))]
pub fn dfs<'g>(graph: &'g GraphModel, start: &str) -> Result<Dfs<'g>> {
    let start = require_vertex("start", start)?;
    tracing::debug!("dfs started");
    Ok(Dfs::new(graph, start))
}

/// Shortest path (by edge count) from `start` to `goal`
#[tracing::instrument(skip(graph), fields(vertices = graph.len(), edges = graph.edge_count()))]
pub fn shortest_path<'g>(graph: &'g GraphModel, start: &str, goal: &str) -> Result<ShortestPath<'g>> {
    let start = require_vertex("start", start)?;
    let goal = require_vertex("goal", goal)?;
    tracing::debug!("shortest path search started");
    Ok(ShortestPath::new(graph, start, goal))
}

/// Any one of the three runs, for callers that pick the algorithm at runtime
#[derive(Debug)]
pub enum Traversal<'g> {
    Bfs(Bfs<'g>),
    Dfs(Dfs<'g>),
    ShortestPath(ShortestPath<'g>),
}

impl<'g> Traversal<'g> {
    /// Start `algorithm`. `goal` is required for shortest path and
    /// ignored otherwise.
    pub fn start(
        algorithm: Algorithm,
        graph: &'g GraphModel,
        start: &str,
        goal: Option<&str>,
    ) -> Result<Self> {
        match algorithm {
            Algorithm::Bfs => bfs(graph, start).map(Traversal::Bfs),
            Algorithm::Dfs => dfs(graph, start).map(Traversal::Dfs),
            Algorithm::ShortestPath => {
                shortest_path(graph, start, goal.unwrap_or_default()).map(Traversal::ShortestPath)
            }
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Traversal::Bfs(_) => Algorithm::Bfs,
            Traversal::Dfs(_) => Algorithm::Dfs,
            Traversal::ShortestPath(_) => Algorithm::ShortestPath,
        }
    }

    /// Shortest-path status once resolved; `None` for BFS/DFS
    pub fn outcome(&self) -> Option<SearchOutcome> {
        match self {
            Traversal::ShortestPath(run) => run.outcome(),
            _ => None,
        }
    }

    /// Shortest path found so far; empty for BFS/DFS
    pub fn path(&self) -> &[Vertex] {
        match self {
            Traversal::ShortestPath(run) => run.path(),
            _ => &[],
        }
    }
}

impl Iterator for Traversal<'_> {
    type Item = VisitationEvent;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Traversal::Bfs(run) => run.next(),
            Traversal::Dfs(run) => run.next(),
            Traversal::ShortestPath(run) => run.next(),
        }
    }
}
