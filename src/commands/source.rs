//! Graph source resolution: `--text`, `--graph FILE|-`, the configured
//! default graph, or the built-in sample

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::cli::args::GraphArgs;
use graphstep_core::config::Config;
use graphstep_core::error::{GraphstepError, Result};
use graphstep_core::graph::{GraphModel, ParseDiagnostic, SAMPLE_GRAPH};

/// Where the adjacency text came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    Inline,
    Stdin,
    File(String),
    Sample,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Inline => write!(f, "inline"),
            SourceKind::Stdin => write!(f, "stdin"),
            SourceKind::File(path) => write!(f, "{}", path),
            SourceKind::Sample => write!(f, "sample"),
        }
    }
}

/// A freshly parsed graph plus what the parser skipped
#[derive(Debug)]
pub struct LoadedGraph {
    pub graph: GraphModel,
    pub diagnostics: Vec<ParseDiagnostic>,
    pub source: SourceKind,
}

/// Read the adjacency text and parse it. Each call rebuilds the model.
pub fn load(args: &GraphArgs, config: &Config) -> Result<LoadedGraph> {
    let (text, source) = read_text(args, config)?;
    let (graph, diagnostics) = GraphModel::parse_with_diagnostics(&text);

    for diagnostic in &diagnostics {
        warn!(source = %source, "{}", diagnostic);
    }
    debug!(
        source = %source,
        vertices = graph.len(),
        edges = graph.edge_count(),
        skipped = diagnostics.len(),
        "graph loaded"
    );

    Ok(LoadedGraph {
        graph,
        diagnostics,
        source,
    })
}

fn read_text(args: &GraphArgs, config: &Config) -> Result<(String, SourceKind)> {
    if let Some(text) = &args.text {
        return Ok((inline_lines(text), SourceKind::Inline));
    }

    if let Some(path) = &args.graph {
        if path.as_os_str() == "-" {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| GraphstepError::graph_source("-", e))?;
            return Ok((text, SourceKind::Stdin));
        }
        return read_file(path);
    }

    match &config.defaults.graph {
        Some(path) => read_file(path),
        None => Ok((SAMPLE_GRAPH.to_string(), SourceKind::Sample)),
    }
}

fn read_file(path: &Path) -> Result<(String, SourceKind)> {
    let text = fs::read_to_string(path).map_err(|e| GraphstepError::graph_source(path, e))?;
    Ok((text, SourceKind::File(path.display().to_string())))
}

/// `--text` accepts `;` as a line break so a whole graph fits in one argument
fn inline_lines(text: &str) -> String {
    text.replace(';', "\n")
}
