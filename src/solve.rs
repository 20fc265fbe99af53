//! Answers a batch of queries with the chosen resolver.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Instant;

use crate::error::{Error, Result};
use crate::graph::{Noise, Tree};
use crate::path::{
    lifting::LcaPathResolver, naive::NaivePathResolver, tarjan::TarjanPathResolver, PathResolver,
};
use crate::query::Query;

/// Which resolver answers the queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Version {
    /// Searches the tree for every query.
    Naive,
    /// Binary lifting.
    #[default]
    Lifting,
    /// Tarjan's offline algorithm.
    Tarjan,
    /// Runs all three and fails if they disagree.
    Check,
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "naive" | "v1" => Ok(Self::Naive),
            "lifting" | "lca" | "v2" => Ok(Self::Lifting),
            "tarjan" | "v3" => Ok(Self::Tarjan),
            "check" | "test" => Ok(Self::Check),
            _ => Err(Error::Usage(format!(
                "unknown resolver {s:?}, expected naive, lifting, tarjan or check"
            ))),
        }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Naive => NaivePathResolver::NAME,
            Self::Lifting => LcaPathResolver::NAME,
            Self::Tarjan => TarjanPathResolver::NAME,
            Self::Check => "check",
        };
        write!(f, "{name}")
    }
}

/// Maximum noise for every query, in the order they were given.
pub fn solve(tree: &Tree, queries: &[Query], version: Version) -> Result<Vec<Noise>> {
    Ok(match version {
        Version::Naive => answer_all::<NaivePathResolver>(tree, queries),
        Version::Lifting => answer_all::<LcaPathResolver>(tree, queries),
        Version::Tarjan => answer_all::<TarjanPathResolver>(tree, queries),
        Version::Check => cross_check(tree, queries)?,
    })
}

/// Builds R for the batch and answers it, logging how long each phase took.
pub fn answer_all<'a, R: PathResolver<'a>>(tree: &'a Tree, queries: &[Query]) -> Vec<Noise> {
    let start = Instant::now();
    let resolver = R::prepare(tree, queries);
    log::info!("[{}][warming-up] {:?}", R::NAME, start.elapsed());
    let start = Instant::now();
    let answers = queries.iter().map(|q| resolver.maximum_noise(q)).collect();
    log::info!("[{}][processing] {:?}", R::NAME, start.elapsed());
    answers
}

/// Answers with every resolver. Fails on the first query where the noises differ, or where binary
/// lifting and Tarjan find different lowest common ancestors.
pub fn cross_check(tree: &Tree, queries: &[Query]) -> Result<Vec<Noise>> {
    let start = Instant::now();
    let naive = NaivePathResolver::new(tree);
    let lifting = LcaPathResolver::new(tree);
    let tarjan = TarjanPathResolver::new(tree, queries);
    log::info!("[check][warming-up] {:?}", start.elapsed());

    let start = Instant::now();
    let answers = queries
        .iter()
        .map(|query| {
            let noises = [
                naive.maximum_noise(query),
                lifting.maximum_noise(query),
                tarjan.maximum_noise(query),
            ];
            log::debug!("{query}: {noises:?}");
            if noises[0] != noises[1] || noises[1] != noises[2] {
                return Err(Error::Disagreement {
                    query: query.to_string(),
                    details: format!(
                        "noise is {} with naive, {} with lifting, {} with tarjan",
                        noises[0], noises[1], noises[2]
                    ),
                });
            }
            let by_lifting = lifting.lowest_common_ancestor(query.start(), query.end());
            let by_tarjan = tarjan.lowest_common_ancestor(query);
            if by_tarjan != Some(by_lifting) {
                return Err(Error::Disagreement {
                    query: query.to_string(),
                    details: format!(
                        "lowest common ancestor is {by_lifting} with lifting, {by_tarjan:?} with tarjan"
                    ),
                });
            }
            Ok(noises[0])
        })
        .collect::<Result<Vec<_>>>()?;
    log::info!("[check][processing] {:?}", start.elapsed());
    Ok(answers)
}
