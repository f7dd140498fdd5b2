//! Path reconstruction from a predecessor map

use std::collections::HashMap;

use crate::graph::Vertex;

/// Walk predecessors back from `goal` to `start` and return the path in
/// forward order. `start == goal` yields the one-vertex path.
pub(super) fn reconstruct_path(
    start: &str,
    goal: &str,
    predecessors: &HashMap<&str, &str>,
) -> Vec<Vertex> {
    let mut path = vec![Vertex::from(goal)];
    let mut current = goal;

    while current != start {
        match predecessors.get(current) {
            Some(&pred) => {
                path.push(Vertex::from(pred));
                current = pred;
            }
            None => break,
        }
    }

    path.reverse();
    path
}
