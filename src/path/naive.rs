//! Path resolver that searches the tree on every query. Only useful to check the other resolvers.

use std::collections::{hash_map::Entry, HashMap};

use super::PathResolver;
use crate::graph::{Edge, Noise, Node, Tree};
use crate::query::Query;

#[derive(Debug, Clone, Copy)]
pub struct NaivePathResolver<'a> {
    tree: &'a Tree,
}

impl<'a> NaivePathResolver<'a> {
    pub fn new(tree: &'a Tree) -> Self {
        Self { tree }
    }

    /// Edges on the path from the start of the query to its end, in that order.
    /// Empty if both ends are the same node, None if the end can't be reached.
    /// Panics if either end is not in the tree.
    pub fn ordered_path(&self, query: &Query) -> Option<Vec<Edge>> {
        let (start, end) = (query.start(), query.end());
        if start == end {
            return Some(vec![]);
        }
        assert!(self.tree.contains(end), "tree does not contain {end}");
        // Edge through which the search entered each node. None for the start.
        let mut entered_by: HashMap<Node, Option<Edge>> = HashMap::from([(start, None)]);
        let mut stack = vec![start];
        'search: while let Some(u) = stack.pop() {
            for edge in self.tree.adjacent_edges(u) {
                let v = edge.other_end(u);
                if let Entry::Vacant(e) = entered_by.entry(v) {
                    e.insert(Some(*edge));
                    if v == end {
                        break 'search;
                    }
                    stack.push(v);
                }
            }
        }
        entered_by.get(&end)?;
        let mut path = vec![];
        let mut u = end;
        while let Some(edge) = entered_by[&u] {
            path.push(edge);
            u = edge.other_end(u);
        }
        path.reverse();
        log::trace!("path for {query}: {} edges", path.len());
        Some(path)
    }
}

impl<'a> PathResolver<'a> for NaivePathResolver<'a> {
    const NAME: &'static str = "naive";

    fn prepare(tree: &'a Tree, _queries: &[Query]) -> Self {
        Self::new(tree)
    }

    fn maximum_noise(&self, query: &Query) -> Noise {
        self.ordered_path(query)
            .and_then(|path| path.iter().map(Edge::noise).max())
            .unwrap_or(0)
    }
}
