//! Minimum spanning tree with Prim's algorithm.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::{Edge, Graph, Tree};

/// Orders edges by noise alone. Two edges with the same noise compare equal even if their
/// endpoints differ.
#[derive(Debug, Clone, Copy)]
pub struct ByNoise(pub Edge);

impl PartialEq for ByNoise {
    fn eq(&self, other: &Self) -> bool {
        self.0.noise() == other.0.noise()
    }
}

impl Eq for ByNoise {}

impl PartialOrd for ByNoise {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByNoise {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.noise().cmp(&other.0.noise())
    }
}

impl Graph {
    /// Minimum spanning tree grown from the first node.
    ///
    /// If the graph is not connected, only the component of the first node is spanned. Ties
    /// between equal noises are broken by the heap, so the result is the same for the same graph.
    pub fn minimum_spanning_tree(&self) -> Tree {
        let mut mst = Tree::new();
        let Some(start) = self.nodes().next() else {
            return mst;
        };
        mst.add_node(start);
        let mut queue: BinaryHeap<Reverse<ByNoise>> = self
            .adjacent_edges(start)
            .iter()
            .map(|&edge| Reverse(ByNoise(edge)))
            .collect();
        while let Some(Reverse(ByNoise(edge))) = queue.pop() {
            let [a, b] = edge.nodes();
            // Only edges on the boundary of the tree grow it.
            let next = match (mst.contains(a), mst.contains(b)) {
                (true, false) => b,
                (false, true) => a,
                _ => continue,
            };
            log::trace!("mst takes {edge}");
            mst.add_edge(edge);
            queue.extend(
                self.adjacent_edges(next)
                    .iter()
                    .map(|&edge| Reverse(ByNoise(edge))),
            );
        }
        if mst.node_count() < self.node_count() {
            log::warn!(
                "graph is not connected, spanning tree covers {} of {} nodes",
                mst.node_count(),
                self.node_count()
            );
        }
        log::debug!(
            "mst has {} edges with total noise {}",
            mst.edge_count(),
            mst.total_noise()
        );
        mst
    }
}
