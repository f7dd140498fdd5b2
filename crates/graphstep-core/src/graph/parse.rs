//! Adjacency-list text parsing
//!
//! Grammar, one vertex per line:
//!
//! ```text
//! VERTEX ":" NEIGHBOR ("," NEIGHBOR)*
//! ```
//!
//! Whitespace around every token is ignored. Parsing never fails: lines
//! that don't fit the grammar are skipped and reported as diagnostics.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::model::GraphModel;
use super::types::Vertex;

/// Why a line (or part of one) was not taken as written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DiagnosticKind {
    /// Non-blank line with no `:`; skipped
    MissingSeparator,
    /// More than one `:`; skipped
    ExtraSeparator,
    /// Nothing before the `:`; skipped
    EmptyVertex,
    /// Empty token in the neighbor list; dropped
    EmptyNeighbor,
    /// Neighbor repeated on the same line; later copy dropped
    DuplicateNeighbor { neighbor: Vertex },
    /// Vertex given a second line; the later list wins
    DuplicateVertex { vertex: Vertex },
}

/// One tolerance the parser applied, with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseDiagnostic {
    pub line: usize,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            DiagnosticKind::MissingSeparator => write!(f, "no ':' separator, line skipped"),
            DiagnosticKind::ExtraSeparator => write!(f, "more than one ':', line skipped"),
            DiagnosticKind::EmptyVertex => write!(f, "missing vertex before ':', line skipped"),
            DiagnosticKind::EmptyNeighbor => write!(f, "empty neighbor dropped"),
            DiagnosticKind::DuplicateNeighbor { neighbor } => {
                write!(f, "neighbor {} listed twice, repeat dropped", neighbor)
            }
            DiagnosticKind::DuplicateVertex { vertex } => {
                write!(f, "vertex {} redefined, earlier list replaced", vertex)
            }
        }
    }
}

impl GraphModel {
    /// Parse adjacency-list text, discarding diagnostics
    pub fn parse(text: &str) -> Self {
        Self::parse_with_diagnostics(text).0
    }

    /// Parse adjacency-list text and report every tolerance applied
    pub fn parse_with_diagnostics(text: &str) -> (Self, Vec<ParseDiagnostic>) {
        let mut graph = GraphModel::default();
        let mut diagnostics = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let Some((vertex, neighbors)) = parse_line(raw, line, &mut diagnostics) else {
                continue;
            };

            if graph.insert(vertex.clone(), neighbors) {
                diagnostics.push(ParseDiagnostic {
                    line,
                    kind: DiagnosticKind::DuplicateVertex { vertex },
                });
            }
        }

        for diagnostic in &diagnostics {
            tracing::debug!(line = diagnostic.line, "{}", diagnostic);
        }

        (graph, diagnostics)
    }
}

fn parse_line(
    raw: &str,
    line: usize,
    diagnostics: &mut Vec<ParseDiagnostic>,
) -> Option<(Vertex, Vec<Vertex>)> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut report = |kind| diagnostics.push(ParseDiagnostic { line, kind });

    let mut parts = trimmed.split(':');
    let head = parts.next().unwrap_or_default().trim();
    let Some(tail) = parts.next() else {
        report(DiagnosticKind::MissingSeparator);
        return None;
    };
    if parts.next().is_some() {
        report(DiagnosticKind::ExtraSeparator);
        return None;
    }
    if head.is_empty() {
        report(DiagnosticKind::EmptyVertex);
        return None;
    }

    let mut neighbors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    // "A:" is a vertex without edges, not an empty neighbor
    if !tail.trim().is_empty() {
        for token in tail.split(',').map(str::trim) {
            if token.is_empty() {
                report(DiagnosticKind::EmptyNeighbor);
            } else if !seen.insert(token) {
                report(DiagnosticKind::DuplicateNeighbor {
                    neighbor: Vertex::from(token),
                });
            } else {
                neighbors.push(Vertex::from(token));
            }
        }
    }

    Some((Vertex::from(head), neighbors))
}
