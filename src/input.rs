//! Reads problems in the itineraries format:
//!
//! ```text
//! <n> <m>
//! <u_1> <v_1> <w_1>
//! ...
//! <u_m> <v_m> <w_m>
//! <q>
//! <a_1> <b_1>
//! ...
//! <a_q> <b_q>
//! ```
//!
//! Tokens only need to be separated by whitespace; line breaks are not significant.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Node};
use crate::query::Query;

/// A graph and the queries to answer on it, in input order.
#[derive(Debug, Clone)]
pub struct Problem {
    pub graph: Graph,
    pub queries: Vec<Query>,
}

impl Problem {
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = Tokens(text.split_whitespace());
        let n: usize = tokens.next("node count")?;
        let m: usize = tokens.next("edge count")?;
        let mut graph = Graph::new();
        for _ in 0..m {
            let u = Node(tokens.next("edge endpoint")?);
            let v = Node(tokens.next("edge endpoint")?);
            let noise = tokens.next("edge noise")?;
            graph.add_edge(Edge::new(u, v, noise)?);
        }
        if graph.node_count() > n {
            log::warn!(
                "header announces {n} nodes but the edges touch {}",
                graph.node_count()
            );
        }

        let q: usize = tokens.next("query count")?;
        // Every query takes at least two bytes of input.
        let mut queries = Vec::with_capacity(q.min(text.len() / 2));
        for _ in 0..q {
            let start = Node(tokens.next("query endpoint")?);
            let end = Node(tokens.next("query endpoint")?);
            // A node may be asked about itself even if no edge touches it.
            if start != end {
                if let Some(&unknown) = [start, end].iter().find(|&&u| !graph.contains(u)) {
                    return Err(Error::UnknownNode(unknown));
                }
            }
            queries.push(Query::new(start, end));
        }

        if let Some(token) = tokens.0.next() {
            return Err(Error::TrailingInput(token.to_owned()));
        }
        log::debug!(
            "parsed {} nodes, {} edges and {} queries",
            graph.node_count(),
            graph.edge_count(),
            queries.len()
        );
        Ok(Self { graph, queries })
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl Tokens<'_> {
    fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        let token = self.0.next().ok_or(Error::MissingToken(expected))?;
        token.parse().map_err(|_| Error::InvalidToken {
            token: token.to_owned(),
            expected,
        })
    }
}
