//! Adjacency-list directed weighted graph.
//!
//! The store keeps two indexes keyed by node:
//! - `out_edges[u]` = outgoing edges of `u`, keyed by destination
//! - `in_edges[v]`  = sources of the edges pointing at `v`
//!
//! which gives:
//! - O(1) node lookup and O(1) edge lookup by `(src, dest)`
//! - O(out-degree) iteration over a node's outgoing edges
//! - O(degree) node removal (incoming edges are found through `in_edges`)
//!
//! Iteration follows insertion order, so every traversal over a fixed build
//! sequence is deterministic. Removals use swap-removal to stay O(1); they
//! perturb the order deterministically.

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use super::edge::Edge;
use super::node::{GeoLocation, Node, NodeId};
use crate::{GraphError, Result};

/// Read-only adjacency used by the traversal algorithms.
///
/// Implemented by [`DirectedWeightedGraph`] (outgoing edges) and by
/// [`Reversed`] (incoming edges presented as outgoing).
pub trait Adjacency {
    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Check if a node exists.
    fn contains(&self, node: NodeId) -> bool;

    /// Keys of all nodes, in iteration order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_;

    /// Nodes reachable through one edge from `node`.
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_;

    /// Number of edges leaving `node`.
    fn degree(&self, node: NodeId) -> usize;
}

/// Directed weighted graph.
///
/// Cloning produces a deep copy: nodes and edges are owned values, so the
/// clone never shares scratch fields with the original.
#[derive(Debug, Clone, Default)]
pub struct DirectedWeightedGraph {
    nodes: IndexMap<NodeId, Node>,
    out_edges: IndexMap<NodeId, IndexMap<NodeId, Edge>>,
    in_edges: IndexMap<NodeId, IndexSet<NodeId>>,
    edge_count: usize,
    mode_count: u64,
}

impl DirectedWeightedGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph from node keys and `(src, dest, weight)` triples.
    ///
    /// Every node is placed at the origin.
    ///
    /// # Example
    ///
    /// ```
    /// use dwgraph::DirectedWeightedGraph;
    ///
    /// // Graph: 1 -> 2 -> 3
    /// let g = DirectedWeightedGraph::from_weighted_edges([1, 2, 3], &[(1, 2, 1.0), (2, 3, 1.0)]).unwrap();
    /// assert_eq!(g.edge_count(), 2);
    /// ```
    pub fn from_weighted_edges(
        nodes: impl IntoIterator<Item = i32>,
        edges: &[(i32, i32, f64)],
    ) -> Result<Self> {
        let mut graph = Self::new();
        for key in nodes {
            graph.add_node(NodeId(key), GeoLocation::ORIGIN);
        }
        for &(src, dest, weight) in edges {
            graph.connect(NodeId(src), NodeId(dest), weight)?;
        }
        Ok(graph)
    }

    /// Insert a node, or move an existing node to `location`.
    ///
    /// Returns `true` if the node was newly inserted. An existing node keeps
    /// its edges and scratch fields; only its location changes.
    pub fn add_node(&mut self, key: NodeId, location: GeoLocation) -> bool {
        self.insert_node(Node::new(key, location))
    }

    /// Insert a prepared node, with the same overwrite policy as [`add_node`](Self::add_node).
    pub fn insert_node(&mut self, node: Node) -> bool {
        self.mode_count += 1;
        if let Some(existing) = self.nodes.get_mut(&node.key()) {
            existing.location = node.location;
            return false;
        }
        let key = node.key();
        self.nodes.insert(key, node);
        self.out_edges.insert(key, IndexMap::new());
        self.in_edges.insert(key, IndexSet::new());
        true
    }

    /// Connect `src -> dest` with the given weight.
    ///
    /// Overwrites the weight if the edge already exists. Fails without
    /// touching the graph if an endpoint is missing, if `src == dest`, or if
    /// the weight is negative or not finite.
    pub fn connect(&mut self, src: NodeId, dest: NodeId, weight: f64) -> Result<()> {
        if src == dest {
            return Err(GraphError::SelfLoop(src.0));
        }
        if !self.nodes.contains_key(&src) {
            return Err(GraphError::NodeNotFound(src.0));
        }
        if !self.nodes.contains_key(&dest) {
            return Err(GraphError::NodeNotFound(dest.0));
        }
        if !Edge::is_valid_weight(weight) {
            return Err(GraphError::InvalidWeight {
                src: src.0,
                dest: dest.0,
                weight,
            });
        }

        self.insert_edge(Edge::new(src, dest, weight));
        Ok(())
    }

    /// Insert an edge whose endpoints are known to exist.
    fn insert_edge(&mut self, edge: Edge) {
        let previous = self
            .out_edges
            .entry(edge.src())
            .or_default()
            .insert(edge.dest(), edge);
        if previous.is_none() {
            self.in_edges
                .entry(edge.dest())
                .or_default()
                .insert(edge.src());
            self.edge_count += 1;
        }
        self.mode_count += 1;
    }

    /// Remove a node and every edge touching it.
    pub fn remove_node(&mut self, key: NodeId) -> Option<Node> {
        let node = self.nodes.swap_remove(&key)?;

        if let Some(outgoing) = self.out_edges.swap_remove(&key) {
            for dest in outgoing.keys() {
                if let Some(sources) = self.in_edges.get_mut(dest) {
                    sources.swap_remove(&key);
                }
            }
            self.edge_count -= outgoing.len();
        }

        if let Some(incoming) = self.in_edges.swap_remove(&key) {
            for src in &incoming {
                let removed = self
                    .out_edges
                    .get_mut(src)
                    .and_then(|edges| edges.swap_remove(&key));
                if removed.is_some() {
                    self.edge_count -= 1;
                }
            }
        }

        self.mode_count += 1;
        Some(node)
    }

    /// Remove the edge `src -> dest`.
    pub fn remove_edge(&mut self, src: NodeId, dest: NodeId) -> Option<Edge> {
        let edge = self.out_edges.get_mut(&src)?.swap_remove(&dest)?;
        if let Some(sources) = self.in_edges.get_mut(&dest) {
            sources.swap_remove(&src);
        }
        self.edge_count -= 1;
        self.mode_count += 1;
        Some(edge)
    }

    /// Look up a node.
    pub fn node(&self, key: NodeId) -> Option<&Node> {
        self.nodes.get(&key)
    }

    /// Look up a node for modification of its location or scratch fields.
    pub fn node_mut(&mut self, key: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&key)
    }

    /// Look up the edge `src -> dest`.
    pub fn edge(&self, src: NodeId, dest: NodeId) -> Option<&Edge> {
        self.out_edges.get(&src)?.get(&dest)
    }

    /// Check if edge exists from src to dest.
    pub fn has_edge(&self, src: NodeId, dest: NodeId) -> bool {
        self.edge(src, dest).is_some()
    }

    /// Check if a node exists.
    pub fn contains(&self, key: NodeId) -> bool {
        self.nodes.contains_key(&key)
    }

    /// Outgoing edges of a node (empty for a missing node).
    pub fn out_edges(&self, key: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.out_edges
            .get(&key)
            .into_iter()
            .flat_map(|edges| edges.values())
    }

    /// Number of edges leaving `key`.
    pub fn out_degree(&self, key: NodeId) -> usize {
        self.out_edges.get(&key).map_or(0, |edges| edges.len())
    }

    /// Number of edges entering `key`.
    pub fn in_degree(&self, key: NodeId) -> usize {
        self.in_edges.get(&key).map_or(0, |sources| sources.len())
    }

    /// All nodes, in iteration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    /// All edges, grouped by source in node iteration order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.out_edges.values().flat_map(|edges| edges.values())
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of structural modifications made so far.
    pub fn mode_count(&self) -> u64 {
        self.mode_count
    }

    /// Create transpose (reverse graph).
    ///
    /// Same node set, every edge reversed, weights kept. The original graph
    /// is left untouched.
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::new();
        for node in self.nodes() {
            transposed.insert_node(node.clone());
        }
        for edge in self.edges() {
            transposed.insert_edge(edge.reversed());
        }
        transposed
    }

    /// Borrowed view that walks incoming edges as if they were outgoing.
    pub fn reversed(&self) -> Reversed<'_> {
        Reversed { graph: self }
    }
}

impl Adjacency for DirectedWeightedGraph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.out_edges
            .get(&node)
            .into_iter()
            .flat_map(|edges| edges.keys().copied())
    }

    fn degree(&self, node: NodeId) -> usize {
        self.out_degree(node)
    }
}

impl fmt::Display for DirectedWeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DirectedWeightedGraph(|V|={}, |E|={})",
            self.node_count(),
            self.edge_count()
        )
    }
}

/// Transposed view over a [`DirectedWeightedGraph`].
///
/// Traversals over this view follow every edge backwards without copying
/// the graph.
#[derive(Debug, Clone, Copy)]
pub struct Reversed<'a> {
    graph: &'a DirectedWeightedGraph,
}

impl Adjacency for Reversed<'_> {
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn contains(&self, node: NodeId) -> bool {
        self.graph.contains(node)
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.nodes.keys().copied()
    }

    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.graph
            .in_edges
            .get(&node)
            .into_iter()
            .flat_map(|sources| sources.iter().copied())
    }

    fn degree(&self, node: NodeId) -> usize {
        self.graph.in_degree(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_line_graph(n: i32) -> DirectedWeightedGraph {
        // 0 -> 1 -> 2 -> ... -> n-1
        let edges: Vec<_> = (0..n - 1).map(|i| (i, i + 1, 1.0)).collect();
        DirectedWeightedGraph::from_weighted_edges(0..n, &edges).unwrap()
    }

    #[test]
    fn test_empty_graph() {
        let g = DirectedWeightedGraph::new();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_empty());
        assert!(g.node(NodeId(0)).is_none());
        assert_eq!(g.out_edges(NodeId(0)).count(), 0);
    }

    #[test]
    fn test_add_node_overwrites_location_only() {
        let mut g = make_line_graph(3);
        g.node_mut(NodeId(1)).unwrap().tag = 7;

        let inserted = g.add_node(NodeId(1), GeoLocation::new(1.0, 2.0, 3.0));

        assert!(!inserted);
        assert_eq!(g.node_count(), 3);
        let node = g.node(NodeId(1)).unwrap();
        assert_eq!(node.location, GeoLocation::new(1.0, 2.0, 3.0));
        assert_eq!(node.tag, 7);
        assert!(g.has_edge(NodeId(1), NodeId(2)));
    }

    #[test]
    fn test_connect_overwrites_weight() {
        let mut g = make_line_graph(2);
        g.connect(NodeId(0), NodeId(1), 4.5).unwrap();

        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edge(NodeId(0), NodeId(1)).unwrap().weight(), 4.5);
    }

    #[test]
    fn test_connect_rejects_bad_input() {
        let mut g = make_line_graph(2);
        let before = g.mode_count();

        assert!(matches!(
            g.connect(NodeId(0), NodeId(0), 1.0),
            Err(GraphError::SelfLoop(0))
        ));
        assert!(matches!(
            g.connect(NodeId(0), NodeId(9), 1.0),
            Err(GraphError::NodeNotFound(9))
        ));
        assert!(matches!(
            g.connect(NodeId(9), NodeId(0), 1.0),
            Err(GraphError::NodeNotFound(9))
        ));
        assert!(matches!(
            g.connect(NodeId(1), NodeId(0), -1.0),
            Err(GraphError::InvalidWeight { .. })
        ));

        assert_eq!(g.edge_count(), 1);
        assert!(!g.has_edge(NodeId(1), NodeId(0)));
        assert_eq!(g.mode_count(), before);
    }

    #[test]
    fn test_edges_are_directed() {
        let g = make_line_graph(2);
        assert!(g.has_edge(NodeId(0), NodeId(1)));
        assert!(!g.has_edge(NodeId(1), NodeId(0)));
    }

    #[test]
    fn test_degree() {
        let g = DirectedWeightedGraph::from_weighted_edges(
            0..4,
            &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0), (1, 2, 1.0)],
        )
        .unwrap();

        assert_eq!(g.out_degree(NodeId(0)), 3);
        assert_eq!(g.out_degree(NodeId(1)), 1);
        assert_eq!(g.out_degree(NodeId(2)), 0);
        assert_eq!(g.in_degree(NodeId(2)), 2);
        assert_eq!(g.in_degree(NodeId(0)), 0);
        assert_eq!(g.out_degree(NodeId(42)), 0);
    }

    #[test]
    fn test_remove_node_drops_incident_edges() {
        // 0 -> 1 -> 2, 2 -> 1, 0 -> 2
        let mut g = DirectedWeightedGraph::from_weighted_edges(
            0..3,
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 1, 1.0), (0, 2, 1.0)],
        )
        .unwrap();

        let removed = g.remove_node(NodeId(1)).unwrap();

        assert_eq!(removed.key(), NodeId(1));
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(g.has_edge(NodeId(0), NodeId(2)));
        assert_eq!(g.out_degree(NodeId(2)), 0);
        assert_eq!(g.in_degree(NodeId(2)), 1);
        assert!(g.remove_node(NodeId(1)).is_none());
    }

    #[test]
    fn test_remove_edge() {
        let mut g = make_line_graph(3);

        let edge = g.remove_edge(NodeId(0), NodeId(1)).unwrap();
        assert_eq!(edge.src(), NodeId(0));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.in_degree(NodeId(1)), 0);
        assert!(g.remove_edge(NodeId(0), NodeId(1)).is_none());
        assert!(g.remove_edge(NodeId(7), NodeId(1)).is_none());
    }

    #[test]
    fn test_mode_count_tracks_mutations() {
        let mut g = DirectedWeightedGraph::new();
        g.add_node(NodeId(1), GeoLocation::ORIGIN);
        g.add_node(NodeId(2), GeoLocation::ORIGIN);
        g.connect(NodeId(1), NodeId(2), 1.0).unwrap();
        assert_eq!(g.mode_count(), 3);

        g.remove_edge(NodeId(1), NodeId(2));
        g.remove_node(NodeId(2));
        assert_eq!(g.mode_count(), 5);
    }

    #[test]
    fn test_transpose() {
        // 0 -> 1 -> 2
        let g = make_line_graph(3);
        let transposed = g.transpose();

        // Should now be: 1 -> 0, 2 -> 1
        assert!(transposed.has_edge(NodeId(1), NodeId(0)));
        assert!(transposed.has_edge(NodeId(2), NodeId(1)));
        assert!(!transposed.has_edge(NodeId(0), NodeId(1)));
        assert_eq!(transposed.node_count(), 3);
        assert_eq!(transposed.edge_count(), 2);

        // Original is untouched
        assert!(g.has_edge(NodeId(0), NodeId(1)));
    }

    #[test]
    fn test_reversed_view_matches_transpose() {
        let g = DirectedWeightedGraph::from_weighted_edges(
            0..4,
            &[(0, 1, 1.0), (0, 2, 2.0), (3, 2, 1.0), (2, 0, 1.0)],
        )
        .unwrap();
        let transposed = g.transpose();
        let view = g.reversed();

        for key in g.node_ids() {
            let mut from_view: Vec<_> = view.neighbors(key).collect();
            let mut from_copy: Vec<_> = transposed.neighbors(key).collect();
            from_view.sort();
            from_copy.sort();
            assert_eq!(from_view, from_copy);
            assert_eq!(view.degree(key), transposed.out_degree(key));
        }
    }

    #[test]
    fn test_clone_is_deep() {
        let g = make_line_graph(3);
        let mut copy = g.clone();

        let node = copy.node_mut(NodeId(0)).unwrap();
        node.weight = 99.0;
        node.tag = 1;
        copy.remove_edge(NodeId(0), NodeId(1));

        assert_eq!(g.node(NodeId(0)).unwrap().weight, 0.0);
        assert_eq!(g.node(NodeId(0)).unwrap().tag, 0);
        assert!(g.has_edge(NodeId(0), NodeId(1)));
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let g = DirectedWeightedGraph::from_weighted_edges([5, 3, 9], &[(5, 9, 1.0), (5, 3, 1.0)])
            .unwrap();

        let keys: Vec<_> = g.nodes().map(|n| n.key().get()).collect();
        assert_eq!(keys, vec![5, 3, 9]);

        let dests: Vec<_> = g.out_edges(NodeId(5)).map(|e| e.dest().get()).collect();
        assert_eq!(dests, vec![9, 3]);
    }

    #[test]
    fn test_display() {
        let g = make_line_graph(4);
        assert_eq!(g.to_string(), "DirectedWeightedGraph(|V|=4, |E|=3)");
    }
}
