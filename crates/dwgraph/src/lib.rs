//! Directed weighted graphs and the algorithms that run over them.
//!
//! This crate provides:
//!
//! - **Graph store**: adjacency-list [`DirectedWeightedGraph`] with O(1) node
//!   and edge lookup and O(degree) neighbor iteration
//! - **Shortest path**: Dijkstra with a binary-heap frontier
//! - **Connectivity**: strong connectivity via a forward and a reversed BFS
//! - **SCC**: strongly connected components by reachability intersection
//! - **Codec**: JSON persistence in the `{"Edges": [...], "Nodes": [...]}` layout
//!
//! Algorithms keep their distance and visitation state local to each call,
//! so they only ever need `&DirectedWeightedGraph`.
//!
//! # Example
//!
//! ```
//! use dwgraph::{DirectedWeightedGraph, GraphAlgo, NodeId};
//!
//! // Graph: 1 -> 2 -> 3, plus a costly shortcut 1 -> 3
//! let g = DirectedWeightedGraph::from_weighted_edges(
//!     [1, 2, 3],
//!     &[(1, 2, 1.0), (2, 3, 1.0), (1, 3, 5.0)],
//! )
//! .unwrap();
//! let algo = GraphAlgo::new(g);
//!
//! let path = algo.shortest_path(NodeId(1), NodeId(3)).unwrap();
//! assert_eq!(path.len(), 3);
//! assert_eq!(algo.shortest_path_dist(NodeId(1), NodeId(3)), 2.0);
//! assert!(!algo.is_strongly_connected());
//! ```

pub mod algorithms;
pub mod codec;
pub mod engine;
pub mod models;

// Re-export main types
pub use algorithms::bfs::{bfs_order, reachable};
pub use algorithms::connectivity::is_strongly_connected;
pub use algorithms::scc::{connected_component, connected_components, scc_tarjan};
pub use algorithms::shortest_path::{
    all_shortest_paths, path_weight, shortest_path, shortest_path_dist, shortest_path_distance,
    shortest_path_tree, shortest_path_with_config, RouteTable, ShortestPathConfig,
    ShortestPathTree, NO_PATH,
};
pub use codec::{from_json_str, load_from_file, save_to_file, to_json_string, CodecConfig};
pub use engine::GraphAlgo;
pub use models::{Adjacency, DirectedWeightedGraph, Edge, GeoLocation, Node, NodeId, Reversed};

/// Graph error types.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Node does not exist.
    #[error("Node not found: {0}")]
    NodeNotFound(i32),

    /// Edge from a node to itself.
    #[error("Self loop on node {0} is not allowed")]
    SelfLoop(i32),

    /// Edge weight is negative or not finite.
    #[error("Invalid weight {weight} for edge {src} -> {dest}")]
    InvalidWeight { src: i32, dest: i32, weight: f64 },

    /// Node position is not three comma-separated floats.
    #[error("Malformed position: {0:?}")]
    MalformedPosition(String),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File could not be read or written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
