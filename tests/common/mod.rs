#![allow(dead_code)]

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};
use std::sync::{LazyLock, Mutex};

use flexi_logger::{LoggerHandle, WriteMode};
use itineraries::{logging::logger, Edge, Graph, Node, Noise, Query};
use rand::{seq::SliceRandom, Rng};

pub static LOGGER: LazyLock<Mutex<LoggerHandle>> = LazyLock::new(|| {
    Mutex::new(
        logger("info")
            .unwrap()
            .write_mode(WriteMode::SupportCapture)
            .log_to_stdout()
            .start()
            .unwrap(),
    )
});

pub fn init_logger() {
    let _ = &*LOGGER;
}

pub fn edge(u: i64, v: i64, noise: Noise) -> Edge {
    Edge::new(Node(u), Node(v), noise).unwrap()
}

/// Graph with the edges added in the given order.
pub fn graph(edges: &[(i64, i64, Noise)]) -> Graph {
    let mut g = Graph::new();
    for &(u, v, noise) in edges {
        g.add_edge(edge(u, v, noise));
    }
    g
}

/// n distinct ids spread over negative and positive values, in random order.
pub fn random_nodes(rng: &mut impl Rng, n: usize) -> Vec<Node> {
    let mut ids: Vec<i64> = (0..n as i64).map(|i| 3 * i - n as i64).collect();
    ids.shuffle(rng);
    ids.into_iter().map(Node).collect()
}

/// Edges of a random tree over the nodes, shuffled so adjacency lists come in random order.
pub fn random_tree_edges(rng: &mut impl Rng, nodes: &[Node], max_noise: Noise) -> Vec<Edge> {
    let mut edges: Vec<Edge> = (1..nodes.len())
        .map(|i| {
            // Half the time hang from the previous node, so trees get deep.
            let j = if rng.gen_bool(0.5) {
                i - 1
            } else {
                rng.gen_range(0..i)
            };
            Edge::new(nodes[i], nodes[j], rng.gen_range(0..=max_noise)).unwrap()
        })
        .collect();
    edges.shuffle(rng);
    edges
}

pub fn random_tree(rng: &mut impl Rng, n: usize, max_noise: Noise) -> Graph {
    let nodes = random_nodes(rng, n);
    let mut g = Graph::new();
    for &u in &nodes {
        g.add_node(u);
    }
    for e in random_tree_edges(rng, &nodes, max_noise) {
        g.add_edge(e);
    }
    g
}

/// Connected graph: a random tree plus up to `extra` other edges.
pub fn random_graph(rng: &mut impl Rng, n: usize, extra: usize, max_noise: Noise) -> Graph {
    let nodes = random_nodes(rng, n);
    let mut edges = random_tree_edges(rng, &nodes, max_noise);
    let mut pairs: BTreeSet<(Node, Node)> =
        edges.iter().map(|e| (e.source(), e.target())).collect();
    for _ in 0..extra {
        let (&a, &b) = (nodes.choose(rng).unwrap(), nodes.choose(rng).unwrap());
        if let Ok(e) = Edge::new(a, b, rng.gen_range(0..=max_noise)) {
            if pairs.insert((e.source(), e.target())) {
                edges.push(e);
            }
        }
    }
    edges.shuffle(rng);
    let mut g = Graph::new();
    for &u in &nodes {
        g.add_node(u);
    }
    for e in edges {
        g.add_edge(e);
    }
    g
}

pub fn random_queries(rng: &mut impl Rng, g: &Graph, q: usize) -> Vec<Query> {
    let nodes: Vec<Node> = g.nodes().collect();
    (0..q)
        .map(|_| Query::new(*nodes.choose(rng).unwrap(), *nodes.choose(rng).unwrap()))
        .collect()
}

/// Smallest possible maximum noise over every path from `from` to `to` in the graph.
pub fn bottleneck(g: &Graph, from: Node, to: Node) -> Option<Noise> {
    let mut best: BTreeMap<Node, Noise> = BTreeMap::from([(from, 0)]);
    let mut heap = BinaryHeap::from([Reverse((0, from))]);
    while let Some(Reverse((noise, u))) = heap.pop() {
        if u == to {
            return Some(noise);
        }
        if best[&u] < noise {
            continue;
        }
        for e in g.adjacent_edges(u) {
            let v = e.other_end(u);
            let through_u = noise.max(e.noise());
            if best.get(&v).map_or(true, |&b| through_u < b) {
                best.insert(v, through_u);
                heap.push(Reverse((through_u, v)));
            }
        }
    }
    None
}

/// Total noise of a minimum spanning forest, with Kruskal's algorithm.
pub fn kruskal_total(g: &Graph) -> Noise {
    fn find(parent: &mut BTreeMap<Node, Node>, u: Node) -> Node {
        let p = parent[&u];
        if p == u {
            u
        } else {
            let root = find(parent, p);
            parent.insert(u, root);
            root
        }
    }
    let mut edges: Vec<Edge> = g.edges().collect();
    edges.sort_by_key(Edge::noise);
    let mut parent: BTreeMap<Node, Node> = g.nodes().map(|u| (u, u)).collect();
    let mut total = 0;
    for e in edges {
        let (a, b) = (find(&mut parent, e.source()), find(&mut parent, e.target()));
        if a != b {
            parent.insert(a, b);
            total += e.noise();
        }
    }
    total
}

/// Whether every node of the graph can be reached from its first node.
pub fn is_connected(g: &Graph) -> bool {
    let Some(start) = g.nodes().next() else {
        return true;
    };
    let mut seen = BTreeSet::from([start]);
    let mut stack = vec![start];
    while let Some(u) = stack.pop() {
        for e in g.adjacent_edges(u) {
            let v = e.other_end(u);
            if seen.insert(v) {
                stack.push(v);
            }
        }
    }
    seen.len() == g.node_count()
}
