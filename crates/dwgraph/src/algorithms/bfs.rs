//! Breadth-first traversal primitives.
//!
//! The traversals are generic over [`Adjacency`], so the same code walks a
//! graph forwards and, through [`DirectedWeightedGraph::reversed`], backwards.
//! Visitation state lives in a set owned by the call; nothing is written to
//! the graph.
//!
//! [`DirectedWeightedGraph::reversed`]: crate::DirectedWeightedGraph::reversed

use std::collections::{HashSet, VecDeque};

use crate::models::{Adjacency, NodeId};

/// Nodes in the order a BFS from `start` discovers them.
///
/// Uses a queue-based approach with O(V + E) complexity. Returns an empty
/// vector if `start` is not in the graph.
pub fn bfs_order<A: Adjacency>(adj: &A, start: NodeId) -> Vec<NodeId> {
    let mut order = Vec::new();
    let mut visited = HashSet::with_capacity(adj.node_count());
    walk(adj, start, &mut visited, |node| order.push(node));
    order
}

/// Set of nodes reachable from `start`, including `start` itself.
pub fn reachable<A: Adjacency>(adj: &A, start: NodeId) -> HashSet<NodeId> {
    let mut visited = HashSet::with_capacity(adj.node_count());
    walk(adj, start, &mut visited, |_| {});
    visited
}

/// Core BFS loop. Marks nodes in `visited` and reports each on discovery.
fn walk<A, F>(adj: &A, start: NodeId, visited: &mut HashSet<NodeId>, mut on_visit: F)
where
    A: Adjacency,
    F: FnMut(NodeId),
{
    if !adj.contains(start) || !visited.insert(start) {
        return;
    }
    on_visit(start);

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        for neighbor in adj.neighbors(node) {
            if visited.insert(neighbor) {
                on_visit(neighbor);
                queue.push_back(neighbor);
            }
        }
    }
}
