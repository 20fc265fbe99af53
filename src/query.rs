use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::graph::Node;

/// Identity of a query instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryId(usize);

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A request for the maximum noise between two nodes.
///
/// Queries compare by identity: copies of a query are equal to it, but two queries created
/// separately are different even if they have the same endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Query {
    id: QueryId,
    start: Node,
    end: Node,
}

impl Query {
    pub fn new(start: Node, end: Node) -> Self {
        Self {
            id: QueryId(NEXT_ID.fetch_add(1, Ordering::Relaxed)),
            start,
            end,
        }
    }
    pub fn id(&self) -> QueryId {
        self.id
    }
    pub fn start(&self) -> Node {
        self.start
    }
    pub fn end(&self) -> Node {
        self.end
    }
    pub fn is_trivial(&self) -> bool {
        self.start == self.end
    }
    /// The endpoint that is not `node`. Panics if `node` is not an endpoint.
    pub fn other_end(&self, node: Node) -> Node {
        if node == self.start {
            self.end
        } else if node == self.end {
            self.start
        } else {
            panic!("{self} does not contain {node}")
        }
    }
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Query {}

impl Hash for Query {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Query({}, {})", self.start, self.end)
    }
}
