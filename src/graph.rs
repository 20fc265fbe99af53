//! Undirected graphs whose edges carry a noise level.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};

use debug_tree::{add_branch_to, AsTree, TreeBuilder};

use crate::error::{Error, Result};

pub mod mst;

pub use mst::ByNoise;

/// Weight of an edge.
pub type Noise = i64;

/// A node is identified by its index only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Node(pub i64);

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// Undirected edge. The endpoints are kept sorted, so `(a, b, w)` and `(b, a, w)` are the same edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    source: Node,
    target: Node,
    noise: Noise,
}

impl Edge {
    /// Fails if both ends are the same node or the noise is negative.
    pub fn new(a: Node, b: Node, noise: Noise) -> Result<Self> {
        let (source, target) = match a.cmp(&b) {
            Ordering::Less => (a, b),
            Ordering::Greater => (b, a),
            Ordering::Equal => return Err(Error::SelfLoop(a)),
        };
        if noise < 0 {
            return Err(Error::NegativeNoise(source, target, noise));
        }
        Ok(Self {
            source,
            target,
            noise,
        })
    }
    /// The smaller endpoint.
    pub fn source(&self) -> Node {
        self.source
    }
    /// The larger endpoint.
    pub fn target(&self) -> Node {
        self.target
    }
    pub fn noise(&self) -> Noise {
        self.noise
    }
    pub fn nodes(&self) -> [Node; 2] {
        [self.source, self.target]
    }
    pub fn contains(&self, node: Node) -> bool {
        node == self.source || node == self.target
    }
    /// The endpoint that is not `node`. Panics if `node` is not an endpoint.
    pub fn other_end(&self, node: Node) -> Node {
        if node == self.source {
            self.target
        } else if node == self.target {
            self.source
        } else {
            panic!("{self} does not contain {node}")
        }
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Edge({}, {}, {})", self.source, self.target, self.noise)
    }
}

/// Adjacency lists keyed by node. Nodes iterate in increasing order and every adjacency list keeps
/// the order in which its edges were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    total_noise: Noise,
    adjacent: BTreeMap<Node, Vec<Edge>>,
}

/// A graph that is connected and acyclic by construction.
pub type Tree = Graph;

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the edge to the adjacency lists of both endpoints, creating them if needed.
    pub fn add_edge(&mut self, edge: Edge) {
        self.total_noise = self.total_noise.saturating_add(edge.noise);
        for node in edge.nodes() {
            self.adjacent.entry(node).or_default().push(edge);
        }
    }

    /// Adds a node with no edges. Does nothing if it is already there.
    pub fn add_node(&mut self, node: Node) {
        self.adjacent.entry(node).or_default();
    }

    pub fn contains(&self, node: Node) -> bool {
        self.adjacent.contains_key(&node)
    }

    pub fn is_empty(&self) -> bool {
        self.adjacent.is_empty()
    }

    /// All nodes, in increasing order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.adjacent.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.adjacent.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacent.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Every edge exactly once.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacent.iter().flat_map(|(&u, adj)| {
            adj.iter()
                .filter(move |edge| edge.source == u)
                .copied()
        })
    }

    /// Edges touching `node`, in insertion order. Panics if the node is not in the graph.
    pub fn adjacent_edges(&self, node: Node) -> &[Edge] {
        self.adjacent
            .get(&node)
            .unwrap_or_else(|| panic!("graph does not contain {node}"))
    }

    /// Sum of the noise of every edge added, saturating at `Noise::MAX`.
    pub fn total_noise(&self) -> Noise {
        self.total_noise
    }

    /// Renders a DFS forest of the graph, one tree per component, rooted at its smallest node.
    /// Meant for diagnostics: it recurses once per tree level.
    pub fn tree_string(&self) -> String {
        let builder = TreeBuilder::new();
        {
            let _b = builder.add_branch(&format!(
                "{} nodes, {} edges, total noise {}",
                self.node_count(),
                self.edge_count(),
                self.total_noise
            ));
            let mut seen = BTreeSet::new();
            for root in self.nodes() {
                if seen.insert(root) {
                    self.tree_dbg(root, format!("{root}"), &mut seen, &builder);
                }
            }
        }
        builder.string()
    }

    fn tree_dbg<T: AsTree>(&self, u: Node, label: String, seen: &mut BTreeSet<Node>, tree: &T) {
        add_branch_to!(*tree, "{label}");
        for edge in self.adjacent_edges(u) {
            let v = edge.other_end(u);
            if seen.insert(v) {
                self.tree_dbg(v, format!("{v} noise {}", edge.noise), seen, tree);
            }
        }
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total noise: {}", self.total_noise)?;
        writeln!(f, "Adjacent edges:")?;
        for (node, edges) in &self.adjacent {
            write!(f, "{node} -> [")?;
            for (i, edge) in edges.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{edge}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
