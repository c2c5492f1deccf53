//! Single-source shortest paths (Dijkstra).
//!
//! The frontier is a binary heap ordered by tentative distance, with lazy
//! removal of stale entries instead of decrease-key. Distances, predecessors
//! and the settled set are owned by the call, so the graph is only read.
//!
//! Complexity: O((V + E) log V).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use ordered_float::OrderedFloat;
use tracing::debug;

use crate::models::{DirectedWeightedGraph, Node, NodeId};

/// Distance reported by [`shortest_path_dist`] when there is no path.
pub const NO_PATH: f64 = -1.0;

/// Shortest path configuration.
#[derive(Debug, Clone, Default)]
pub struct ShortestPathConfig {
    /// Stop as soon as the destination is settled.
    pub early_exit: bool,
}

impl ShortestPathConfig {
    /// Create new shortest path configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the search once the destination is settled.
    pub fn with_early_exit(mut self) -> Self {
        self.early_exit = true;
        self
    }
}

/// Distances and predecessors computed from one source.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: NodeId,
    distances: HashMap<NodeId, f64>,
    predecessors: HashMap<NodeId, NodeId>,
}

impl ShortestPathTree {
    /// The source node.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Distance from the source, `None` if unreachable.
    ///
    /// A reachable node whose path cost overflows reports `f64::INFINITY`.
    pub fn distance(&self, node: NodeId) -> Option<f64> {
        self.distances.get(&node).copied()
    }

    /// Immediate predecessor of `node` on its shortest path.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(&node).copied()
    }

    /// Rebuild the path from the source to `dest`.
    ///
    /// Each returned node is a snapshot whose `weight` is its cumulative
    /// distance from the source. The source itself yields an empty path.
    pub fn path_to(&self, graph: &DirectedWeightedGraph, dest: NodeId) -> Option<Vec<Node>> {
        if dest == self.source {
            return graph.node(dest).map(|_| Vec::new());
        }
        self.predecessors.get(&dest)?;

        let mut path = Vec::new();
        let mut current = dest;
        loop {
            let node = graph.node(current)?;
            path.push(node.with_weight(self.distances.get(&current).copied()?));
            if current == self.source {
                break;
            }
            current = self.predecessor(current)?;
        }

        path.reverse();
        Some(path)
    }
}

/// Shortest path from `src` to `dest` as an ordered list of nodes.
///
/// Returns:
/// - `None` if either node is missing, if `src` has no outgoing edges, or
///   if `dest` is unreachable
/// - `Some(vec![])` if `src == dest` (a path of length zero)
/// - otherwise `src, ..., dest`, with the distance of each node in `weight`
///
/// # Example
///
/// ```
/// use dwgraph::{shortest_path, DirectedWeightedGraph, NodeId};
///
/// let g = DirectedWeightedGraph::from_weighted_edges(
///     [1, 2, 3],
///     &[(1, 2, 1.0), (2, 3, 1.0), (1, 3, 5.0)],
/// )
/// .unwrap();
///
/// let path = shortest_path(&g, NodeId(1), NodeId(3)).unwrap();
/// let keys: Vec<i32> = path.iter().map(|n| n.key().get()).collect();
/// assert_eq!(keys, vec![1, 2, 3]);
/// assert_eq!(path.last().unwrap().weight, 2.0);
/// ```
pub fn shortest_path(graph: &DirectedWeightedGraph, src: NodeId, dest: NodeId) -> Option<Vec<Node>> {
    shortest_path_with_config(graph, src, dest, &ShortestPathConfig::default())
}

/// Shortest path with configuration.
pub fn shortest_path_with_config(
    graph: &DirectedWeightedGraph,
    src: NodeId,
    dest: NodeId,
    config: &ShortestPathConfig,
) -> Option<Vec<Node>> {
    if !graph.contains(src) || !graph.contains(dest) {
        return None;
    }
    if src == dest {
        return Some(Vec::new());
    }
    if graph.out_degree(src) == 0 {
        return None;
    }

    let target = config.early_exit.then_some(dest);
    dijkstra(graph, src, target).path_to(graph, dest)
}

/// Length of the shortest path from `src` to `dest`.
///
/// Returns [`NO_PATH`] (`-1.0`) when [`shortest_path`] finds no path and
/// `0.0` when `src == dest`.
pub fn shortest_path_dist(graph: &DirectedWeightedGraph, src: NodeId, dest: NodeId) -> f64 {
    shortest_path_distance(graph, src, dest).unwrap_or(NO_PATH)
}

/// Length of the shortest path, `None` when there is no path.
pub fn shortest_path_distance(
    graph: &DirectedWeightedGraph,
    src: NodeId,
    dest: NodeId,
) -> Option<f64> {
    let path = shortest_path(graph, src, dest)?;
    Some(path.last().map_or(0.0, |node| node.weight))
}

/// Run Dijkstra from `src` over the whole reachable graph.
///
/// Returns `None` if `src` is not in the graph.
pub fn shortest_path_tree(graph: &DirectedWeightedGraph, src: NodeId) -> Option<ShortestPathTree> {
    graph.contains(src).then(|| dijkstra(graph, src, None))
}

/// Sum of edge weights along consecutive nodes of `path`.
///
/// Returns `None` if two consecutive nodes are not connected. Empty and
/// single-node paths weigh `0.0`.
pub fn path_weight(graph: &DirectedWeightedGraph, path: &[Node]) -> Option<f64> {
    path.windows(2).try_fold(0.0, |total, pair| {
        graph
            .edge(pair[0].key(), pair[1].key())
            .map(|edge| total + edge.weight())
    })
}

fn dijkstra(graph: &DirectedWeightedGraph, src: NodeId, target: Option<NodeId>) -> ShortestPathTree {
    // Only reached nodes get an entry, so a path whose cost overflows to
    // +inf still counts as reached.
    let mut distances: HashMap<NodeId, f64> = HashMap::with_capacity(graph.node_count());
    let mut predecessors = HashMap::new();
    let mut settled = HashSet::with_capacity(graph.node_count());

    // (distance, insertion sequence, node); the sequence keeps tie-breaking stable.
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0u64;

    distances.insert(src, 0.0);
    frontier.push(Reverse((OrderedFloat(0.0), sequence, src)));

    while let Some(Reverse((OrderedFloat(dist), _, node))) = frontier.pop() {
        if !settled.insert(node) {
            continue;
        }
        if target == Some(node) {
            break;
        }

        for edge in graph.out_edges(node) {
            let neighbor = edge.dest();
            if settled.contains(&neighbor) {
                continue;
            }

            let candidate = dist + edge.weight();
            let improves = distances
                .get(&neighbor)
                .map_or(true, |&known| candidate < known);
            if improves {
                distances.insert(neighbor, candidate);
                predecessors.insert(neighbor, node);
                sequence += 1;
                frontier.push(Reverse((OrderedFloat(candidate), sequence, neighbor)));
            }
        }
    }

    debug!(
        source = %src,
        settled = settled.len(),
        nodes = graph.node_count(),
        "Dijkstra finished"
    );

    ShortestPathTree {
        source: src,
        distances,
        predecessors,
    }
}

/// All-pairs table of shortest paths.
///
/// Every ordered pair of nodes has an entry holding exactly what
/// [`shortest_path`] returns for it.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<(NodeId, NodeId), Option<Vec<Node>>>,
}

impl RouteTable {
    /// The path from `src` to `dest`, `None` if there is none.
    pub fn route(&self, src: NodeId, dest: NodeId) -> Option<&[Node]> {
        self.routes.get(&(src, dest))?.as_deref()
    }

    /// Path length from `src` to `dest`, `None` if there is no path.
    pub fn distance(&self, src: NodeId, dest: NodeId) -> Option<f64> {
        self.route(src, dest)
            .map(|path| path.last().map_or(0.0, |node| node.weight))
    }

    /// Number of ordered pairs in the table.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Compute the shortest path between every ordered pair of nodes.
///
/// Runs one full Dijkstra per source node: O(V (V + E) log V).
pub fn all_shortest_paths(graph: &DirectedWeightedGraph) -> RouteTable {
    let n = graph.node_count();
    let mut routes = HashMap::with_capacity(n * n);

    for src in graph.nodes().map(Node::key) {
        let tree = (graph.out_degree(src) > 0).then(|| dijkstra(graph, src, None));

        for dest in graph.nodes().map(Node::key) {
            let route = if src == dest {
                Some(Vec::new())
            } else {
                tree.as_ref().and_then(|t| t.path_to(graph, dest))
            };
            routes.insert((src, dest), route);
        }
    }

    debug!(pairs = routes.len(), "Route table built");
    RouteTable { routes }
}
