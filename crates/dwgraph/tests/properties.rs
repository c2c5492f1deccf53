//! Property-based tests for the graph algorithms and the JSON codec.

use std::collections::HashSet;

use dwgraph::{
    connected_components, from_json_str, is_strongly_connected, scc_tarjan, shortest_path,
    shortest_path_dist, to_json_string, CodecConfig, DirectedWeightedGraph, GeoLocation,
    GraphError, NodeId,
};
use proptest::prelude::*;

/// Build a graph over keys `0..n`, dropping self loops.
fn build(n: i32, locations: &[(f64, f64, f64)], edges: &[(i32, i32, f64)]) -> DirectedWeightedGraph {
    let mut g = DirectedWeightedGraph::new();
    for key in 0..n {
        let (x, y, z) = locations
            .get(key as usize)
            .copied()
            .unwrap_or((0.0, 0.0, 0.0));
        g.add_node(NodeId(key), GeoLocation::new(x, y, z));
    }
    for &(src, dest, w) in edges {
        match g.connect(NodeId(src), NodeId(dest), w) {
            Ok(()) | Err(GraphError::SelfLoop(_)) => {}
            Err(e) => panic!("unexpected connect failure: {e}"),
        }
    }
    g
}

/// Bellman-Ford distances from `src`, used as a reference for Dijkstra.
fn reference_distances(g: &DirectedWeightedGraph, src: NodeId) -> Vec<(NodeId, f64)> {
    let keys: Vec<NodeId> = g.nodes().map(|n| n.key()).collect();
    let mut dist: std::collections::HashMap<NodeId, f64> =
        keys.iter().map(|&k| (k, f64::INFINITY)).collect();
    dist.insert(src, 0.0);

    for _ in 0..keys.len() {
        for edge in g.edges() {
            let through = dist[&edge.src()] + edge.weight();
            if through < dist[&edge.dest()] {
                dist.insert(edge.dest(), through);
            }
        }
    }

    keys.into_iter().map(|k| (k, dist[&k])).collect()
}

fn graph_strategy() -> impl Strategy<Value = DirectedWeightedGraph> {
    (1i32..10).prop_flat_map(|n| {
        let edges = prop::collection::vec((0..n, 0..n, 0u32..50), 0..30);
        edges.prop_map(move |edges| {
            let weighted: Vec<_> = edges
                .into_iter()
                .map(|(s, d, w)| (s, d, f64::from(w)))
                .collect();
            build(n, &[], &weighted)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Property: load(save(G)) keeps keys, locations and weighted edges
    #[test]
    fn prop_json_round_trip(
        n in 1i32..12,
        locations in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6, -1e3f64..1e3), 12),
        edges in prop::collection::vec((0i32..12, 0i32..12, 0.0f64..1000.0), 0..40),
    ) {
        let edges: Vec<_> = edges.into_iter().filter(|&(s, d, _)| s < n && d < n).collect();
        let g = build(n, &locations, &edges);

        let json = to_json_string(&g, &CodecConfig::default()).unwrap();
        let back = from_json_str(&json).unwrap();

        prop_assert_eq!(g.node_count(), back.node_count());
        prop_assert_eq!(g.edge_count(), back.edge_count());
        for node in g.nodes() {
            let other = back.node(node.key()).unwrap();
            prop_assert_eq!(node.location, other.location);
        }
        for edge in g.edges() {
            let other = back.edge(edge.src(), edge.dest()).unwrap();
            prop_assert_eq!(edge.weight(), other.weight());
        }
    }

    // Property: Dijkstra agrees with Bellman-Ford on non-negative weights
    #[test]
    fn prop_dijkstra_matches_reference(g in graph_strategy()) {
        let src = NodeId(0);
        for (dest, expected) in reference_distances(&g, src) {
            let got = shortest_path_dist(&g, src, dest);
            if dest == src {
                prop_assert_eq!(got, 0.0);
            } else if g.out_degree(src) == 0 || expected.is_infinite() {
                prop_assert_eq!(got, -1.0);
            } else {
                prop_assert_eq!(got, expected);
            }
        }
    }

    // Property: returned paths are real walks ending at the destination
    #[test]
    fn prop_paths_are_walks(g in graph_strategy()) {
        let src = NodeId(0);
        for dest in g.nodes().map(|n| n.key()).collect::<Vec<_>>() {
            if let Some(path) = shortest_path(&g, src, dest) {
                if dest == src {
                    prop_assert!(path.is_empty());
                    continue;
                }
                prop_assert_eq!(path.first().map(|n| n.key()), Some(src));
                prop_assert_eq!(path.last().map(|n| n.key()), Some(dest));
                let mut total = 0.0;
                for pair in path.windows(2) {
                    let edge = g.edge(pair[0].key(), pair[1].key());
                    prop_assert!(edge.is_some());
                    total += edge.map_or(0.0, |e| e.weight());
                    prop_assert_eq!(pair[1].weight, total);
                }
            }
        }
    }

    // Property: components partition the node set and match Tarjan
    #[test]
    fn prop_components_partition(g in graph_strategy()) {
        let components = connected_components(&g);

        let mut seen = HashSet::new();
        for component in &components {
            prop_assert!(!component.is_empty());
            for node in component {
                prop_assert!(seen.insert(node.key()));
            }
        }
        prop_assert_eq!(seen.len(), g.node_count());

        let mut ours: Vec<Vec<i32>> = components
            .iter()
            .map(|c| {
                let mut keys: Vec<i32> = c.iter().map(|n| n.key().get()).collect();
                keys.sort();
                keys
            })
            .collect();
        ours.sort();
        let mut tarjan: Vec<Vec<i32>> = scc_tarjan(&g)
            .into_iter()
            .map(|c| {
                let mut keys: Vec<i32> = c.into_iter().map(|id| id.get()).collect();
                keys.sort();
                keys
            })
            .collect();
        tarjan.sort();
        prop_assert_eq!(ours, tarjan);
    }

    // Property: strongly connected iff there is exactly one component
    #[test]
    fn prop_connected_iff_single_component(g in graph_strategy()) {
        let single = connected_components(&g).len() <= 1;
        prop_assert_eq!(is_strongly_connected(&g), single);
    }

    // Property: any simple cycle over all nodes is strongly connected
    #[test]
    fn prop_cycles_are_connected(n in 2i32..20, w in 0.0f64..10.0) {
        let edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n, w)).collect();
        let g = build(n, &[], &edges);
        prop_assert!(is_strongly_connected(&g));
    }

    // Property: a node without outgoing edges breaks strong connectivity
    #[test]
    fn prop_dead_end_disconnects(g in graph_strategy()) {
        let mut g = g;
        let sink = NodeId(1000);
        g.add_node(sink, GeoLocation::ORIGIN);
        g.connect(NodeId(0), sink, 1.0).unwrap();
        prop_assert!(!is_strongly_connected(&g));
    }
}
