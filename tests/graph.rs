use std::cmp::Ordering;

use common::{edge, graph, init_logger, is_connected, kruskal_total, random_graph};
use itineraries::{
    graph::ByNoise, Edge, Error, Graph, NaivePathResolver, Node, PathResolver, Query,
};
use rand::SeedableRng;

mod common;

#[test]
fn test_edge_is_canonical() {
    let e1 = edge(3, 1, 7);
    let e2 = edge(1, 3, 7);
    assert_eq!(e1, e2);
    assert_eq!(e1.source(), Node(1));
    assert_eq!(e1.target(), Node(3));
    assert_eq!(e1.nodes(), [Node(1), Node(3)]);
    assert_ne!(e1, edge(1, 3, 8));
    assert_eq!(e1.to_string(), "Edge(Node(1), Node(3), 7)");
}

#[test]
fn test_edge_rejects_bad_input() {
    assert!(matches!(
        Edge::new(Node(4), Node(4), 1),
        Err(Error::SelfLoop(Node(4)))
    ));
    assert!(matches!(
        Edge::new(Node(5), Node(2), -1),
        Err(Error::NegativeNoise(Node(2), Node(5), -1))
    ));
    assert!(Edge::new(Node(-5), Node(2), 0).is_ok());
}

#[test]
fn test_other_end() {
    let e = edge(2, 9, 1);
    assert_eq!(e.other_end(Node(2)), Node(9));
    assert_eq!(e.other_end(Node(9)), Node(2));
    assert!(e.contains(Node(9)));
    assert!(!e.contains(Node(3)));
}

#[test]
#[should_panic(expected = "does not contain")]
fn test_other_end_of_foreign_node() {
    edge(2, 9, 1).other_end(Node(3));
}

#[test]
fn test_query_identity() {
    let q1 = Query::new(Node(1), Node(2));
    let q2 = Query::new(Node(1), Node(2));
    assert_ne!(q1, q2);
    assert_ne!(q1.id(), q2.id());
    let copy = q1;
    assert_eq!(copy, q1);
    assert_eq!(q1.other_end(Node(1)), Node(2));
    assert_eq!(q1.other_end(Node(2)), Node(1));
    assert!(!q1.is_trivial());
    assert!(Query::new(Node(3), Node(3)).is_trivial());
    assert_eq!(q1.to_string(), "Query(Node(1), Node(2))");
}

#[test]
#[should_panic(expected = "does not contain")]
fn test_query_other_end_of_foreign_node() {
    Query::new(Node(1), Node(2)).other_end(Node(5));
}

#[test]
fn test_total_noise_saturates() {
    let g = graph(&[(1, 2, i64::MAX), (2, 3, 1), (3, 4, i64::MAX)]);
    assert_eq!(g.total_noise(), i64::MAX);
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn test_graph_adjacency() {
    let g = graph(&[(1, 2, 5), (3, 2, 7), (1, 3, 9)]);
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.total_noise(), 21);
    assert_eq!(g.nodes().collect::<Vec<_>>(), [Node(1), Node(2), Node(3)]);
    // Insertion order is kept.
    assert_eq!(g.adjacent_edges(Node(2)), [edge(1, 2, 5), edge(2, 3, 7)]);
    assert_eq!(g.adjacent_edges(Node(3)), [edge(2, 3, 7), edge(1, 3, 9)]);
    let mut edges: Vec<Edge> = g.edges().collect();
    edges.sort_by_key(Edge::noise);
    assert_eq!(edges, [edge(1, 2, 5), edge(2, 3, 7), edge(1, 3, 9)]);
    assert!(g.contains(Node(3)));
    assert!(!g.contains(Node(4)));
}

#[test]
fn test_graph_add_node() {
    let mut g = Graph::new();
    assert!(g.is_empty());
    g.add_node(Node(7));
    g.add_node(Node(7));
    assert_eq!(g.node_count(), 1);
    assert_eq!(g.edge_count(), 0);
    assert!(g.adjacent_edges(Node(7)).is_empty());
    g.add_edge(edge(7, 8, 2));
    assert_eq!(g.adjacent_edges(Node(7)), [edge(7, 8, 2)]);
}

#[test]
#[should_panic(expected = "graph does not contain Node(4)")]
fn test_adjacency_of_unknown_node() {
    graph(&[(1, 2, 5)]).adjacent_edges(Node(4));
}

#[test]
fn test_graph_display() {
    let g = graph(&[(1, 2, 5), (2, 3, 7)]);
    let s = g.to_string();
    assert!(s.starts_with("Total noise: 12\nAdjacent edges:\n"), "{s}");
    assert!(s.contains("Node(2) -> [Edge(Node(1), Node(2), 5), Edge(Node(2), Node(3), 7)]"));
    let t = g.tree_string();
    assert!(t.contains("3 nodes, 2 edges, total noise 12"), "{t}");
    assert!(t.contains("Node(3) noise 7"), "{t}");
}

#[test]
fn test_by_noise_ignores_endpoints() {
    assert_eq!(ByNoise(edge(1, 2, 4)), ByNoise(edge(5, 6, 4)));
    assert_eq!(
        ByNoise(edge(1, 2, 4)).cmp(&ByNoise(edge(0, 9, 5))),
        Ordering::Less
    );
    assert_eq!(
        ByNoise(edge(1, 2, 6)).cmp(&ByNoise(edge(0, 9, 5))),
        Ordering::Greater
    );
}

#[test]
fn test_mst_triangle() {
    init_logger();
    let mst = graph(&[(1, 2, 5), (2, 3, 7), (1, 3, 9)]).minimum_spanning_tree();
    let mut edges: Vec<Edge> = mst.edges().collect();
    edges.sort_by_key(Edge::noise);
    assert_eq!(edges, [edge(1, 2, 5), edge(2, 3, 7)]);
    assert_eq!(mst.total_noise(), 12);
}

#[test]
fn test_mst_ties() {
    let mst = graph(&[(1, 2, 4), (2, 3, 4), (1, 3, 4)]).minimum_spanning_tree();
    assert_eq!(mst.node_count(), 3);
    assert_eq!(mst.edge_count(), 2);
    assert_eq!(mst.total_noise(), 8);
    assert!(is_connected(&mst));
}

#[test]
fn test_mst_skips_shortcut() {
    let mst = graph(&[(1, 2, 1), (2, 3, 1), (3, 4, 1), (1, 4, 100)]).minimum_spanning_tree();
    assert_eq!(mst.total_noise(), 3);
    assert!(mst.edges().all(|e| e.noise() == 1));
}

#[test]
fn test_mst_of_tree_is_itself() {
    let g = graph(&[(1, 2, 10), (1, 3, 20), (1, 4, 30)]);
    let mst = g.minimum_spanning_tree();
    let mut edges: Vec<Edge> = mst.edges().collect();
    edges.sort_by_key(Edge::noise);
    assert_eq!(edges, [edge(1, 2, 10), edge(1, 3, 20), edge(1, 4, 30)]);
}

#[test]
fn test_mst_small_graphs() {
    assert!(Graph::new().minimum_spanning_tree().is_empty());
    let mut single = Graph::new();
    single.add_node(Node(3));
    let mst = single.minimum_spanning_tree();
    assert_eq!(mst.nodes().collect::<Vec<_>>(), [Node(3)]);
    assert_eq!(mst.edge_count(), 0);
}

#[test]
fn test_mst_disconnected_spans_first_component() {
    init_logger();
    let mst = graph(&[(1, 2, 3), (5, 6, 1)]).minimum_spanning_tree();
    assert_eq!(mst.nodes().collect::<Vec<_>>(), [Node(1), Node(2)]);
}

#[test]
fn test_mst_is_deterministic() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let g = random_graph(&mut rng, 60, 200, 5);
    assert_eq!(g.minimum_spanning_tree(), g.minimum_spanning_tree());
}

#[test]
fn test_mst_against_kruskal() {
    init_logger();
    let mut rng = rand::rngs::StdRng::seed_from_u64(4815162342);
    for n in [2, 3, 10, 50, 120] {
        for max_noise in [1, 10, 1000] {
            let g = random_graph(&mut rng, n, 3 * n, max_noise);
            let mst = g.minimum_spanning_tree();
            assert_eq!(mst.node_count(), n);
            assert_eq!(mst.edge_count(), n - 1);
            assert!(is_connected(&mst));
            assert_eq!(mst.total_noise(), kruskal_total(&g), "n {n} max {max_noise}");
            // Cycle property: no edge outside the tree is quieter than the tree path it closes.
            let naive = NaivePathResolver::new(&mst);
            for e in g.edges() {
                let q = Query::new(e.source(), e.target());
                assert!(naive.maximum_noise(&q) <= e.noise(), "{e}\n{mst}");
            }
        }
    }
}
