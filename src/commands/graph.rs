//! `graphstep graph` - show the parsed adjacency list and what the parser
//! skipped

use serde_json::json;

use crate::cli::args::GraphArgs;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::source::{self, LoadedGraph};
use graphstep_core::error::Result;
use graphstep_core::graph::{DiagnosticKind, GraphModel, Vertex};
use graphstep_core::trace_time;

pub fn execute(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let loaded = source::load(args, ctx.config)?;

    match ctx.cli.format {
        OutputFormat::Human => {
            for line in human_lines(&loaded, ctx.cli.quiet) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json_document(&loaded))?);
        }
        OutputFormat::Records => {
            for line in records_lines(&loaded) {
                println!("{}", line);
            }
        }
    }

    trace_time!(ctx.start, "graph");
    Ok(())
}

/// Vertices referenced only as neighbors
fn neighbor_only(graph: &GraphModel) -> Vec<&Vertex> {
    graph
        .known_vertices()
        .into_iter()
        .filter(|v| !graph.has_entry(v.as_str()))
        .collect()
}

fn csv(vertices: &[Vertex]) -> String {
    vertices
        .iter()
        .map(Vertex::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

fn human_lines(loaded: &LoadedGraph, quiet: bool) -> Vec<String> {
    let graph = &loaded.graph;
    let mut lines = vec![format!(
        "Graph ({}): {} vertices, {} edges",
        loaded.source,
        graph.len(),
        graph.edge_count()
    )];
    if quiet {
        return lines;
    }

    for vertex in graph.vertices() {
        let neighbors = graph.neighbors(vertex.as_str());
        if neighbors.is_empty() {
            lines.push(format!("  {} (no outgoing edges)", vertex));
        } else {
            lines.push(format!("  {} -> {}", vertex, csv(neighbors).replace(',', ", ")));
        }
    }
    for vertex in neighbor_only(graph) {
        lines.push(format!("  {} (referenced only)", vertex));
    }

    if !loaded.diagnostics.is_empty() {
        lines.push(String::new());
        lines.push("Skipped input:".to_string());
        for diagnostic in &loaded.diagnostics {
            lines.push(format!("  {}", diagnostic));
        }
    }
    lines
}

fn json_document(loaded: &LoadedGraph) -> serde_json::Value {
    let graph = &loaded.graph;
    let vertices: Vec<serde_json::Value> = graph
        .vertices()
        .map(|vertex| {
            json!({
                "vertex": vertex,
                "neighbors": graph.neighbors(vertex.as_str()),
            })
        })
        .collect();

    json!({
        "source": loaded.source.to_string(),
        "vertices": vertices,
        "referenced_only": neighbor_only(graph),
        "edges": graph.edge_count(),
        "diagnostics": loaded.diagnostics,
    })
}

fn records_lines(loaded: &LoadedGraph) -> Vec<String> {
    let graph = &loaded.graph;
    let mut lines = vec![format!(
        "H graphstep=1 records=1 mode=graph source={} vertices={} edges={}",
        loaded.source,
        graph.len(),
        graph.edge_count()
    )];

    for vertex in graph.vertices() {
        let neighbors = graph.neighbors(vertex.as_str());
        let neighbors = if neighbors.is_empty() {
            "-".to_string()
        } else {
            csv(neighbors)
        };
        lines.push(format!("V vertex={} neighbors={}", vertex, neighbors));
    }

    for diagnostic in &loaded.diagnostics {
        let kind = match &diagnostic.kind {
            DiagnosticKind::MissingSeparator => "missing_separator".to_string(),
            DiagnosticKind::ExtraSeparator => "extra_separator".to_string(),
            DiagnosticKind::EmptyVertex => "empty_vertex".to_string(),
            DiagnosticKind::EmptyNeighbor => "empty_neighbor".to_string(),
            DiagnosticKind::DuplicateNeighbor { neighbor } => {
                format!("duplicate_neighbor neighbor={}", neighbor)
            }
            DiagnosticKind::DuplicateVertex { vertex } => {
                format!("duplicate_vertex vertex={}", vertex)
            }
        };
        lines.push(format!("D line={} kind={}", diagnostic.line, kind));
    }
    lines
}
