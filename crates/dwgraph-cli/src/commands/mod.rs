//! CLI command implementations.

pub mod components;
pub mod connected;
pub mod info;
pub mod path;
pub mod routes;
pub mod transpose;

use std::path::Path;

use dwgraph::{GraphAlgo, Node, NodeId};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Load a graph file into a fresh engine.
pub fn load_engine(file: &Path) -> CliResult<GraphAlgo> {
    debug!(file = %file.display(), "Loading graph");
    let mut algo = GraphAlgo::default();
    algo.load(file)?;
    Ok(algo)
}

/// Fail unless `key` names a node of the engine's graph.
pub fn require_node(algo: &GraphAlgo, key: i32) -> CliResult<NodeId> {
    let id = NodeId(key);
    if algo.graph().contains(id) {
        Ok(id)
    } else {
        Err(CliError::UnknownNode(key))
    }
}

/// Render node keys as `a -> b -> c`.
pub fn format_keys(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|n| n.key().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
