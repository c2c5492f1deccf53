//! Graph algorithms.
//!
//! This module provides sequential graph algorithms:
//! - [`bfs`]: Breadth-first traversal primitives
//! - [`shortest_path`]: Dijkstra shortest paths and route tables
//! - [`connectivity`]: Strong connectivity test
//! - [`scc`]: Strongly connected components

pub mod bfs;
pub mod connectivity;
pub mod scc;
pub mod shortest_path;

pub use bfs::{bfs_order, reachable};
pub use connectivity::is_strongly_connected;
pub use scc::{connected_component, connected_components, scc_tarjan};
pub use shortest_path::{
    all_shortest_paths, path_weight, shortest_path, shortest_path_dist, shortest_path_distance,
    shortest_path_tree, shortest_path_with_config, RouteTable, ShortestPathConfig,
    ShortestPathTree, NO_PATH,
};
