//! `dwgraph info` command - Summarize a graph file.

use std::path::Path;

use colored::Colorize;
use dwgraph::GraphAlgo;

use super::load_engine;
use crate::error::CliResult;

/// Counts printed by `dwgraph info`.
#[derive(Debug, PartialEq)]
struct GraphSummary {
    nodes: usize,
    edges: usize,
    sinks: usize,
    sources: usize,
    components: usize,
    strongly_connected: bool,
}

impl GraphSummary {
    fn of(algo: &GraphAlgo) -> Self {
        let graph = algo.graph();
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            sinks: graph.nodes().filter(|n| graph.out_degree(n.key()) == 0).count(),
            sources: graph.nodes().filter(|n| graph.in_degree(n.key()) == 0).count(),
            components: algo.connected_components().len(),
            strongly_connected: algo.is_strongly_connected(),
        }
    }
}

/// Execute the `info` command.
pub fn execute(file: &Path) -> CliResult<()> {
    let algo = load_engine(file)?;
    let summary = GraphSummary::of(&algo);

    println!("{}:", "Graph Summary".bright_white().underline());
    println!("  {} File: {}", "•".dimmed(), file.display().to_string().bright_yellow());
    println!("  {} Nodes: {}", "•".dimmed(), summary.nodes);
    println!("  {} Edges: {}", "•".dimmed(), summary.edges);
    println!("  {} Nodes without outgoing edges: {}", "•".dimmed(), summary.sinks);
    println!("  {} Nodes without incoming edges: {}", "•".dimmed(), summary.sources);
    println!("  {} Strongly connected components: {}", "•".dimmed(), summary.components);
    println!(
        "  {} Strongly connected: {}",
        "•".dimmed(),
        if summary.strongly_connected {
            "yes".green()
        } else {
            "no".red()
        }
    );

    Ok(())
}
