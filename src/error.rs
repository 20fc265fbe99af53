//! Errors raised while reading problems and running the driver.

use thiserror::Error;

use crate::graph::{Noise, Node};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// An edge was given the same node at both ends.
    #[error("an edge must have two different nodes, got {0} twice")]
    SelfLoop(Node),

    /// An edge was given a noise below zero.
    #[error("edge between {0} and {1} has negative noise {2}")]
    NegativeNoise(Node, Node, Noise),

    /// The input ended while more tokens were expected.
    #[error("unexpected end of input, expected {0}")]
    MissingToken(&'static str),

    /// A token is not an integer of the expected kind.
    #[error("could not parse {token:?} as {expected}")]
    InvalidToken {
        token: String,
        expected: &'static str,
    },

    /// Tokens remain after the last query.
    #[error("unexpected input after the last query: {0:?}")]
    TrailingInput(String),

    /// A query mentions a node that no edge of the graph touches.
    #[error("query endpoint {0} is not in the graph")]
    UnknownNode(Node),

    /// Two resolvers gave different answers for the same query.
    #[error("resolvers disagree on {query}: {details}")]
    Disagreement { query: String, details: String },

    /// The command line is malformed, or help was asked for.
    #[error("{0}")]
    Usage(String),

    /// Reading the problem or writing the answers failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The log spec was rejected.
    #[error("could not start logger: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}
