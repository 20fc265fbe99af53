pub mod config;
pub mod error;
pub mod graph;
pub mod input;
pub mod logging;
pub mod path;
pub mod query;
pub mod solve;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, Node, Noise, Tree};
pub use input::Problem;
pub use path::{
    lifting::LcaPathResolver, naive::NaivePathResolver, tarjan::TarjanPathResolver, PathResolver,
};
pub use query::Query;
pub use solve::{solve, Version};
