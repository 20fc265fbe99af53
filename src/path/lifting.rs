//! Binary lifting. Answers each query online in O(log n) after O(n log n) precomputation.

use derivative::Derivative;

use super::{Idx, IndexedTree, PathResolver, EMPTY};
use crate::graph::{Node, Noise, Tree};
use crate::query::Query;

#[derive(Derivative)]
#[derivative(Debug)]
pub struct LcaPathResolver {
    #[derivative(Debug = "ignore")]
    tree: IndexedTree,
    root: Option<Node>,
    /// Number of jump sizes kept: 1, 2, 4, ..., 2^(levels - 1).
    levels: usize,
    #[derivative(Debug = "ignore")]
    depth: Vec<usize>,
    /// jump[k][u] is the 2^k-th ancestor of u. EMPTY if it goes past the root.
    #[derivative(Debug = "ignore")]
    jump: Vec<Vec<Idx>>,
    /// max_noise[k][u] is the maximum noise between u and jump[k][u].
    #[derivative(Debug = "ignore")]
    max_noise: Vec<Vec<Noise>>,
}

impl LcaPathResolver {
    /// Roots the tree at its first node and builds the jump tables.
    pub fn new(tree: &Tree) -> Self {
        let tree = IndexedTree::new(tree);
        let n = tree.len();
        // Enough levels to jump any distance below n.
        let levels = ((usize::BITS - n.leading_zeros()) as usize).max(1);
        let mut depth = vec![0; n];
        let mut jump = vec![vec![EMPTY; n]; levels];
        let mut max_noise = vec![vec![0; n]; levels];

        if let Some(root) = tree.root() {
            let mut seen = vec![false; n];
            seen[root] = true;
            let mut stack = vec![root];
            while let Some(u) = stack.pop() {
                for &(v, noise) in tree.adjacent(u) {
                    if !seen[v] {
                        seen[v] = true;
                        jump[0][v] = u;
                        max_noise[0][v] = noise;
                        depth[v] = depth[u] + 1;
                        stack.push(v);
                    }
                }
            }
        }

        for k in 1..levels {
            for u in 0..n {
                let mid = jump[k - 1][u];
                if mid == EMPTY {
                    continue;
                }
                let up = jump[k - 1][mid];
                if up != EMPTY {
                    jump[k][u] = up;
                    max_noise[k][u] = max_noise[k - 1][u].max(max_noise[k - 1][mid]);
                }
            }
        }
        log::debug!(
            "binary lifting over {n} nodes with {levels} levels, height {}",
            depth.iter().max().copied().unwrap_or(0)
        );

        Self {
            root: tree.root().map(|r| tree.node(r)),
            tree,
            levels,
            depth,
            jump,
            max_noise,
        }
    }

    /// The node the tree was rooted at. None for an empty tree.
    pub fn root(&self) -> Option<Node> {
        self.root
    }

    /// Number of edges between the node and the root. Panics if the node is not in the tree.
    pub fn depth(&self, node: Node) -> usize {
        self.depth[self.tree.idx(node)]
    }

    /// Deepest node that is an ancestor of both a and b. Panics if either is not in the tree.
    pub fn lowest_common_ancestor(&self, a: Node, b: Node) -> Node {
        if a == b {
            return a;
        }
        if let Some(root) = self.root.filter(|&r| r == a || r == b) {
            return root;
        }
        let (lca, _) = self.climb(self.tree.idx(a), self.tree.idx(b));
        self.tree.node(lca)
    }

    /// Lifts u and v to their lowest common ancestor.
    /// Returns it together with the maximum noise of the edges crossed on both sides.
    fn climb(&self, mut u: Idx, mut v: Idx) -> (Idx, Noise) {
        if self.depth[u] > self.depth[v] {
            std::mem::swap(&mut u, &mut v);
        }
        let mut noise = 0;
        // Bring v up to the depth of u, one set bit of the difference at a time.
        let mut diff = self.depth[v] - self.depth[u];
        while diff > 0 {
            let k = diff.trailing_zeros() as usize;
            noise = noise.max(self.max_noise[k][v]);
            v = self.jump[k][v];
            diff &= diff - 1;
        }
        if u == v {
            return (u, noise);
        }
        // Same depth from here on, so either both jumps exist or none does.
        for k in (0..self.levels).rev() {
            let (pu, pv) = (self.jump[k][u], self.jump[k][v]);
            if pu != EMPTY && pu != pv {
                noise = noise.max(self.max_noise[k][u]).max(self.max_noise[k][v]);
                (u, v) = (pu, pv);
            }
        }
        noise = noise.max(self.max_noise[0][u]).max(self.max_noise[0][v]);
        log::trace!("climb met at {}", self.tree.node(self.jump[0][u]));
        (self.jump[0][u], noise)
    }
}

impl<'a> PathResolver<'a> for LcaPathResolver {
    const NAME: &'static str = "lifting";

    fn prepare(tree: &'a Tree, _queries: &[Query]) -> Self {
        Self::new(tree)
    }

    fn maximum_noise(&self, query: &Query) -> Noise {
        if query.is_trivial() {
            return 0;
        }
        let (_, noise) = self.climb(self.tree.idx(query.start()), self.tree.idx(query.end()));
        noise
    }
}
