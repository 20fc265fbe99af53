//! Resolvers for the maximum noise on the path between two nodes of a tree.

use std::collections::HashMap;

use crate::graph::{Node, Noise, Tree};
use crate::query::Query;

pub mod lifting;
pub mod naive;
pub mod tarjan;

pub type Idx = usize;

/// Marks a missing node in dense tables, e.g. the ancestor of the root.
pub const EMPTY: Idx = usize::MAX;

/// Interface of a path resolver.
/// It answers, for two nodes of a tree, the maximum noise on the unique path between them.
pub trait PathResolver<'a>: Sized {
    /// Short name used in logs.
    const NAME: &'static str;
    /// Does all the precomputation needed to answer `queries` on `tree`.
    /// Resolvers that answer online ignore the batch.
    fn prepare(tree: &'a Tree, queries: &[Query]) -> Self;
    /// Maximum noise on the path between the endpoints of the query. 0 if they are the same node.
    fn maximum_noise(&self, query: &Query) -> Noise;
}

/// Copy of a tree with nodes renamed to `0..n` in node order, so index 0 is the first node.
/// Adjacency lists keep the order of the original tree.
#[derive(Debug, Clone)]
pub(crate) struct IndexedTree {
    nodes: Vec<Node>,
    index: HashMap<Node, Idx>,
    adj: Vec<Vec<(Idx, Noise)>>,
}

impl IndexedTree {
    pub(crate) fn new(tree: &Tree) -> Self {
        let nodes: Vec<Node> = tree.nodes().collect();
        let index: HashMap<Node, Idx> = nodes.iter().enumerate().map(|(i, &u)| (u, i)).collect();
        let adj = nodes
            .iter()
            .map(|&u| {
                tree.adjacent_edges(u)
                    .iter()
                    .map(|edge| (index[&edge.other_end(u)], edge.noise()))
                    .collect()
            })
            .collect();
        Self { nodes, index, adj }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The node every resolver roots the tree at.
    pub(crate) fn root(&self) -> Option<Idx> {
        (!self.nodes.is_empty()).then_some(0)
    }

    pub(crate) fn node(&self, u: Idx) -> Node {
        self.nodes[u]
    }

    /// Panics if the node is not in the tree.
    pub(crate) fn idx(&self, node: Node) -> Idx {
        match self.index.get(&node) {
            Some(&u) => u,
            None => panic!("tree does not contain {node}"),
        }
    }

    pub(crate) fn adjacent(&self, u: Idx) -> &[(Idx, Noise)] {
        &self.adj[u]
    }
}
