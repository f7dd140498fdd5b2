use std::collections::{HashMap, HashSet};

use super::types::Vertex;

/// Default graph text shown by the visualizer when no input is given
pub const SAMPLE_GRAPH: &str = "A:B,C
B:A,D,E
C:A,F
D:B
E:B,F
F:C,E";

/// Directed adjacency-list graph.
///
/// Vertices with an entry keep the order in which they were first
/// encountered; each neighbor list keeps the order it was written in,
/// with repeats removed. A vertex that only appears as a neighbor has
/// no entry and no outgoing edges. The model is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphModel {
    adjacency: Vec<(Vertex, Vec<Vertex>)>,
    positions: HashMap<Vertex, usize>,
}

impl GraphModel {
    /// The built-in sample graph (`SAMPLE_GRAPH`)
    pub fn sample() -> Self {
        Self::parse(SAMPLE_GRAPH)
    }

    /// Outgoing neighbors of `vertex`, in written order.
    /// Empty for unknown vertices and vertices without edges.
    pub fn neighbors(&self, vertex: &str) -> &[Vertex] {
        self.positions
            .get(vertex)
            .map(|&pos| self.adjacency[pos].1.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `vertex` has its own adjacency entry
    pub fn has_entry(&self, vertex: &str) -> bool {
        self.positions.contains_key(vertex)
    }

    /// Whether `vertex` has an entry or is referenced as a neighbor
    pub fn contains(&self, vertex: &str) -> bool {
        self.has_entry(vertex) || self.edges().any(|(_, to)| to == vertex)
    }

    /// Vertices with an adjacency entry, in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.adjacency.iter().map(|(vertex, _)| vertex)
    }

    /// Every vertex the text mentions, entries and neighbor-only vertices
    /// alike, in order of first mention.
    pub fn known_vertices(&self) -> Vec<&Vertex> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut known = Vec::new();

        for (vertex, neighbors) in &self.adjacency {
            for v in std::iter::once(vertex).chain(neighbors.iter()) {
                if seen.insert(v.as_str()) {
                    known.push(v);
                }
            }
        }

        known
    }

    /// Directed edges in adjacency order
    pub fn edges(&self) -> impl Iterator<Item = (&Vertex, &Vertex)> {
        self.adjacency
            .iter()
            .flat_map(|(from, neighbors)| neighbors.iter().map(move |to| (from, to)))
    }

    /// Number of vertices with an adjacency entry
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|(_, n)| n.len()).sum()
    }

    /// Set the neighbor list of `vertex`. A repeated vertex keeps its
    /// original position and takes the new list. Returns true on replace.
    pub(crate) fn insert(&mut self, vertex: Vertex, neighbors: Vec<Vertex>) -> bool {
        if let Some(&pos) = self.positions.get(&vertex) {
            self.adjacency[pos].1 = neighbors;
            return true;
        }

        self.positions.insert(vertex.clone(), self.adjacency.len());
        self.adjacency.push((vertex, neighbors));
        false
    }
}
