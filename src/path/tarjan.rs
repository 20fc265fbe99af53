//! Tarjan's offline lowest common ancestor algorithm, extended to carry the maximum noise.
//!
//! The whole batch of queries is answered during construction with two traversals of the tree
//! from the same root. When a query is answered at node u, the union-find only knows the maximum
//! noise between its other end and the lowest common ancestor. The second traversal visits the
//! children of every node in reverse order, which swaps the roles of the two ends, so the maximum
//! of both traversals covers the whole path.

use std::collections::HashMap;

use derivative::Derivative;

use super::{Idx, IndexedTree, PathResolver, EMPTY};
use crate::graph::{Node, Noise, Tree};
use crate::query::{Query, QueryId};

/// Union-find where each node also knows the maximum noise up to its union-find parent.
/// Unions are directed: the child set always goes under the parent, which keeps the root of each
/// set at the topmost node of its subtree.
#[derive(Debug)]
struct NoiseUnionFind {
    /// EMPTY until the node is visited.
    parent: Vec<Idx>,
    max_to_parent: Vec<Noise>,
    // Scratch space for find.
    path: Vec<Idx>,
}

impl NoiseUnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: vec![EMPTY; n],
            max_to_parent: vec![0; n],
            path: vec![],
        }
    }

    fn is_visited(&self, u: Idx) -> bool {
        self.parent[u] != EMPTY
    }

    fn make_set(&mut self, u: Idx) {
        if self.parent[u] == EMPTY {
            self.parent[u] = u;
            self.max_to_parent[u] = 0;
        }
    }

    /// Puts the set of child under parent, through an edge with the given noise.
    /// child must be the root of its set.
    fn union(&mut self, parent: Idx, child: Idx, noise: Noise) {
        if parent == child {
            return;
        }
        self.parent[child] = parent;
        self.max_to_parent[child] = noise;
    }

    /// Root of the set of u. Every node on the way ends up pointing straight at the root, with
    /// the maximum noise of the chain it skipped.
    fn find(&mut self, u: Idx) -> Idx {
        self.make_set(u);
        let mut root = u;
        while self.parent[root] != root {
            self.path.push(root);
            root = self.parent[root];
        }
        // Top down, so the parent of each node already points at the root.
        while let Some(x) = self.path.pop() {
            let p = self.parent[x];
            self.max_to_parent[x] = self.max_to_parent[x].max(self.max_to_parent[p]);
            self.parent[x] = root;
        }
        root
    }
}

enum Frame {
    /// Enter u, coming from parent through an edge with that noise.
    Visit { u: Idx, parent: Idx, noise: Noise },
    /// All children of u are done.
    Finish { u: Idx, parent: Idx, noise: Noise },
}

#[derive(Derivative)]
#[derivative(Debug)]
pub struct TarjanPathResolver {
    root: Option<Node>,
    /// Position in the batch of each query.
    #[derivative(Debug = "ignore")]
    position: HashMap<QueryId, usize>,
    #[derivative(Debug = "ignore")]
    lca: Vec<Option<Node>>,
    #[derivative(Debug = "ignore")]
    noise: Vec<Noise>,
}

impl TarjanPathResolver {
    /// Answers every query in the batch. Panics if a query with two different ends mentions a node
    /// that is not in the tree.
    pub fn new(tree: &Tree, queries: &[Query]) -> Self {
        let tree = IndexedTree::new(tree);
        let n = tree.len();
        let mut lca = vec![None; queries.len()];
        let noise = vec![0; queries.len()];
        let mut position = HashMap::with_capacity(queries.len());
        // For each node, the queries touching it as (position, other end).
        let mut queries_by_node: Vec<Vec<(usize, Idx)>> = vec![vec![]; n];
        for (i, query) in queries.iter().enumerate() {
            position.insert(query.id(), i);
            if query.is_trivial() {
                lca[i] = Some(query.start());
                continue;
            }
            let (a, b) = (tree.idx(query.start()), tree.idx(query.end()));
            queries_by_node[a].push((i, b));
            queries_by_node[b].push((i, a));
        }

        let mut resolver = Self {
            root: tree.root().map(|r| tree.node(r)),
            position,
            lca,
            noise,
        };
        if let Some(root) = tree.root() {
            for reversed in [false, true] {
                resolver.pass(&tree, root, reversed, &queries_by_node);
            }
        }
        log::debug!(
            "tarjan answered {} queries over {n} nodes",
            resolver.lca.iter().filter(|l| l.is_some()).count()
        );
        resolver
    }

    /// One traversal from root. If reversed, children are visited from the last adjacent edge to
    /// the first. Queries are answered once both their ends have been visited.
    fn pass(
        &mut self,
        tree: &IndexedTree,
        root: Idx,
        reversed: bool,
        queries_by_node: &[Vec<(usize, Idx)>],
    ) {
        let mut uf = NoiseUnionFind::new(tree.len());
        let mut stack = vec![Frame::Visit {
            u: root,
            parent: EMPTY,
            noise: 0,
        }];
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Visit { u, parent, noise } => {
                    if uf.is_visited(u) {
                        continue;
                    }
                    uf.make_set(u);
                    stack.push(Frame::Finish { u, parent, noise });
                    let children = tree
                        .adjacent(u)
                        .iter()
                        .filter(|&&(v, _)| v != parent)
                        .map(|&(v, noise)| Frame::Visit { u: v, parent: u, noise });
                    // The stack pops in reverse, so push the children backwards to visit them in order.
                    if reversed {
                        stack.extend(children);
                    } else {
                        stack.extend(children.rev());
                    }
                }
                Frame::Finish { u, parent, noise } => {
                    for &(i, other) in &queries_by_node[u] {
                        if uf.is_visited(other) {
                            let lca = uf.find(other);
                            self.lca[i] = Some(tree.node(lca));
                            self.noise[i] = self.noise[i].max(uf.max_to_parent[other]);
                        }
                    }
                    if parent != EMPTY {
                        uf.union(parent, u, noise);
                        uf.find(u);
                    }
                }
            }
        }
        log::trace!("tarjan pass done, reversed = {reversed}");
    }

    /// The node the tree was rooted at. None for an empty tree.
    pub fn root(&self) -> Option<Node> {
        self.root
    }

    /// Lowest common ancestor of the ends of the query. None if the query was not in the batch or
    /// its ends are not connected.
    pub fn lowest_common_ancestor(&self, query: &Query) -> Option<Node> {
        self.position.get(&query.id()).and_then(|&i| self.lca[i])
    }
}

impl<'a> PathResolver<'a> for TarjanPathResolver {
    const NAME: &'static str = "tarjan";

    fn prepare(tree: &'a Tree, queries: &[Query]) -> Self {
        Self::new(tree, queries)
    }

    /// Panics if the query was not in the batch.
    fn maximum_noise(&self, query: &Query) -> Noise {
        match self.position.get(&query.id()) {
            Some(&i) => self.noise[i],
            None => panic!("{query} was not part of the batch"),
        }
    }
}
