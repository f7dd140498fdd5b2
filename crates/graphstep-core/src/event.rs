//! Visitation events emitted by the traversal engine

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::Vertex;

/// Semantic state of a vertex at a given step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Being expanded right now
    Current,
    /// Expansion confirmed
    Visited,
    /// Part of the shortest path found
    PathMember,
}

impl Role {
    /// Short label used by the presentation layer
    pub fn label(self) -> &'static str {
        match self {
            Role::Current => "Current",
            Role::Visited => "Visited",
            Role::PathMember => "Path",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Current => "current",
            Role::Visited => "visited",
            Role::PathMember => "path_member",
        };
        f.write_str(s)
    }
}

/// One atomic step of a traversal.
///
/// `sequence` starts at 1 for every run and grows by one per event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitationEvent {
    pub vertex: Vertex,
    pub role: Role,
    pub sequence: u64,
}

/// Terminal status of a shortest-path search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    Found,
    NotFound,
}

impl SearchOutcome {
    pub fn is_found(self) -> bool {
        self == SearchOutcome::Found
    }
}
