//! Strong connectivity test.
//!
//! A graph is strongly connected iff one node reaches every node and every
//! node reaches it back. The second half is checked by walking the same
//! node's edges backwards, i.e. a BFS over the transpose, done here through
//! the borrowed reversed view instead of a copied graph.

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::models::{Adjacency, DirectedWeightedGraph, NodeId};

/// Returns true iff every node can reach every other node.
///
/// Graphs with 0 or 1 nodes are trivially connected. Otherwise a BFS from
/// the first node must visit every node, and so must a BFS from the same
/// node over the reversed edges. A dequeued node without (reversed) outgoing
/// edges fails the test immediately.
///
/// Runtime: O(V + E).
pub fn is_strongly_connected(graph: &DirectedWeightedGraph) -> bool {
    if graph.node_count() <= 1 {
        return true;
    }

    let Some(start) = graph.node_ids().next() else {
        return true;
    };

    let forward = sweeps_all_nodes(graph, start);
    let connected = forward && sweeps_all_nodes(&graph.reversed(), start);

    debug!(start = %start, forward, connected, "Strong connectivity checked");
    connected
}

/// BFS from `start` that fails on the first dead end.
///
/// Returns true iff no visited node lacks outgoing edges and every node was
/// visited.
fn sweeps_all_nodes<A: Adjacency>(adj: &A, start: NodeId) -> bool {
    let mut visited = HashSet::with_capacity(adj.node_count());
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        if adj.degree(node) == 0 {
            return false;
        }
        for neighbor in adj.neighbors(node) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    visited.len() == adj.node_count()
}
