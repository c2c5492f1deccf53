//! Algorithms engine bound to a single graph.
//!
//! [`GraphAlgo`] owns one [`DirectedWeightedGraph`] and exposes every
//! algorithm in the crate against it. Algorithm calls take `&self` and keep
//! their scratch state local, so they never disturb the graph; anything that
//! mutates the graph needs `&mut self`, which rules out mutation while an
//! algorithm is running. Callers sharing an engine across threads wrap it in
//! a lock of their choosing.

use std::fmt;
use std::path::Path;

use tracing::{info, warn};

use crate::algorithms::{self, RouteTable, ShortestPathConfig};
use crate::codec::{self, CodecConfig};
use crate::models::{DirectedWeightedGraph, Node, NodeId};
use crate::Result;

/// Graph algorithms over an owned directed weighted graph.
///
/// # Example
///
/// ```
/// use dwgraph::{DirectedWeightedGraph, GraphAlgo, NodeId};
///
/// let g = DirectedWeightedGraph::from_weighted_edges(
///     [1, 2, 3],
///     &[(1, 2, 1.0), (2, 3, 1.0), (3, 1, 1.0)],
/// )
/// .unwrap();
/// let algo = GraphAlgo::new(g);
///
/// assert!(algo.is_strongly_connected());
/// assert_eq!(algo.shortest_path_dist(NodeId(1), NodeId(3)), 2.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphAlgo {
    graph: DirectedWeightedGraph,
    path_config: ShortestPathConfig,
    codec_config: CodecConfig,
}

impl GraphAlgo {
    /// Create an engine over `graph`.
    pub fn new(graph: DirectedWeightedGraph) -> Self {
        Self {
            graph,
            ..Self::default()
        }
    }

    /// Use the given shortest path configuration.
    pub fn with_path_config(mut self, config: ShortestPathConfig) -> Self {
        self.path_config = config;
        self
    }

    /// Use the given codec configuration for [`save`](Self::save).
    pub fn with_codec_config(mut self, config: CodecConfig) -> Self {
        self.codec_config = config;
        self
    }

    /// Replace the wrapped graph, returning the previous one.
    pub fn init(&mut self, graph: DirectedWeightedGraph) -> DirectedWeightedGraph {
        std::mem::replace(&mut self.graph, graph)
    }

    /// The wrapped graph.
    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    /// Mutable access to the wrapped graph.
    pub fn graph_mut(&mut self) -> &mut DirectedWeightedGraph {
        &mut self.graph
    }

    /// Consume the engine, returning the wrapped graph.
    pub fn into_graph(self) -> DirectedWeightedGraph {
        self.graph
    }

    /// Deep copy of the wrapped graph.
    pub fn copy(&self) -> DirectedWeightedGraph {
        self.graph.clone()
    }

    /// See [`algorithms::is_strongly_connected`].
    pub fn is_strongly_connected(&self) -> bool {
        algorithms::is_strongly_connected(&self.graph)
    }

    /// See [`algorithms::shortest_path`].
    pub fn shortest_path(&self, src: NodeId, dest: NodeId) -> Option<Vec<Node>> {
        algorithms::shortest_path_with_config(&self.graph, src, dest, &self.path_config)
    }

    /// Path length, or `-1.0` if there is no path.
    pub fn shortest_path_dist(&self, src: NodeId, dest: NodeId) -> f64 {
        self.shortest_path_distance(src, dest)
            .unwrap_or(algorithms::NO_PATH)
    }

    /// Path length, `None` if there is no path.
    pub fn shortest_path_distance(&self, src: NodeId, dest: NodeId) -> Option<f64> {
        let path = self.shortest_path(src, dest)?;
        Some(path.last().map_or(0.0, |node| node.weight))
    }

    /// See [`algorithms::all_shortest_paths`].
    pub fn all_shortest_paths(&self) -> RouteTable {
        algorithms::all_shortest_paths(&self.graph)
    }

    /// See [`algorithms::connected_component`].
    pub fn connected_component(&self, src: NodeId) -> Vec<Node> {
        algorithms::connected_component(&self.graph, src)
    }

    /// See [`algorithms::connected_components`].
    pub fn connected_components(&self) -> Vec<Vec<Node>> {
        algorithms::connected_components(&self.graph)
    }

    /// Transposed copy of the wrapped graph.
    pub fn transpose(&self) -> DirectedWeightedGraph {
        self.graph.transpose()
    }

    /// Save the wrapped graph to `path` as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        codec::save_to_file(&self.graph, path, &self.codec_config).map_err(|e| {
            warn!(path = %path.display(), error = %e, "Failed to save graph");
            e
        })
    }

    /// Load a graph from `path`, replacing the wrapped graph on success.
    ///
    /// On any error the current graph is left exactly as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match codec::load_from_file(path) {
            Ok(graph) => {
                info!(
                    path = %path.display(),
                    nodes = graph.node_count(),
                    edges = graph.edge_count(),
                    "Graph loaded"
                );
                self.graph = graph;
                Ok(())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load graph");
                Err(e)
            }
        }
    }
}

impl From<DirectedWeightedGraph> for GraphAlgo {
    fn from(graph: DirectedWeightedGraph) -> Self {
        Self::new(graph)
    }
}

impl fmt::Display for GraphAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.graph, f)
    }
}
