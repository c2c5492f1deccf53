//! Strongly Connected Components (SCC) algorithms.
//!
//! A strongly connected component is a maximal subgraph where every node
//! can reach every other node. This module provides:
//!
//! - Forward-backward reachability intersection per component
//! - Tarjan's algorithm (sequential, O(V+E)) over the whole graph

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::bfs::reachable;
use crate::models::{Adjacency, DirectedWeightedGraph, Node, NodeId};

/// The strongly connected component containing `src`.
///
/// Computed as the intersection of the nodes reachable from `src` and the
/// nodes that reach `src` (reachable over the reversed edges). The two
/// passes keep separate visitation sets, so the forward marks survive the
/// backward pass. Nodes come back in graph iteration order; the result is
/// empty if `src` is missing.
pub fn connected_component(graph: &DirectedWeightedGraph, src: NodeId) -> Vec<Node> {
    if !graph.contains(src) {
        return Vec::new();
    }

    let forward = reachable(graph, src);
    let backward = reachable(&graph.reversed(), src);

    graph
        .nodes()
        .filter(|node| forward.contains(&node.key()) && backward.contains(&node.key()))
        .cloned()
        .collect()
}

/// Partition every node into its strongly connected component.
///
/// Walks nodes in iteration order and extracts the component of each node
/// not yet assigned. Every node appears in exactly one component.
pub fn connected_components(graph: &DirectedWeightedGraph) -> Vec<Vec<Node>> {
    let mut assigned = HashSet::with_capacity(graph.node_count());
    let mut components = Vec::new();

    for node in graph.nodes() {
        if assigned.contains(&node.key()) {
            continue;
        }
        let component = connected_component(graph, node.key());
        assigned.extend(component.iter().map(Node::key));
        components.push(component);
    }

    debug!(
        nodes = graph.node_count(),
        components = components.len(),
        "Strongly connected components extracted"
    );
    components
}

/// Tarjan's SCC algorithm (sequential).
///
/// Uses DFS with lowlink values to find SCCs in O(V+E) time. Returns the
/// member keys of each component, components in the order they complete.
pub fn scc_tarjan<A: Adjacency>(adj: &A) -> Vec<Vec<NodeId>> {
    let ids: Vec<NodeId> = adj.node_ids().collect();
    let n = ids.len();
    if n == 0 {
        return Vec::new();
    }

    let position: HashMap<NodeId, usize> = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
    let successors: Vec<Vec<usize>> = ids
        .iter()
        .map(|&id| {
            adj.neighbors(id)
                .filter_map(|next| position.get(&next).copied())
                .collect()
        })
        .collect();

    let mut index = vec![u32::MAX; n]; // Discovery index
    let mut lowlink = vec![u32::MAX; n];
    let mut on_stack = vec![false; n];
    let mut stack = Vec::new();
    let mut components = Vec::new();
    let mut current_index = 0u32;

    // Iterative DFS with explicit stack to avoid stack overflow
    for start in 0..n {
        if index[start] != u32::MAX {
            continue;
        }

        let mut dfs_stack: Vec<(usize, usize)> = vec![(start, 0)];

        while let Some((v, neighbor_idx)) = dfs_stack.pop() {
            if neighbor_idx == 0 && index[v] == u32::MAX {
                // First visit to this node
                index[v] = current_index;
                lowlink[v] = current_index;
                current_index += 1;
                stack.push(v);
                on_stack[v] = true;
            }

            if let Some(&w) = successors[v].get(neighbor_idx) {
                dfs_stack.push((v, neighbor_idx + 1));

                if index[w] == u32::MAX {
                    // Not visited, descend
                    dfs_stack.push((w, 0));
                } else if on_stack[w] {
                    // Back edge to node in current SCC
                    lowlink[v] = lowlink[v].min(index[w]);
                }
                continue;
            }

            // All neighbors processed: update parent's lowlink
            if let Some(&(parent, _)) = dfs_stack.last() {
                lowlink[parent] = lowlink[parent].min(lowlink[v]);
            }

            // Check if v is root of an SCC
            if lowlink[v] == index[v] {
                let mut members = Vec::new();
                while let Some(w) = stack.pop() {
                    on_stack[w] = false;
                    members.push(ids[w]);
                    if w == v {
                        break;
                    }
                }
                components.push(members);
            }
        }
    }

    components
}
