//! Command line configuration of the `itineraries` binary.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::solve::Version;

pub const USAGE: &str = "usage: itineraries <input> [-r|--resolver naive|lifting|tarjan|check] \
[-o|--output PATH] [-l|--log SPEC]

The log spec is overridden by RUST_LOG.";

pub const DEFAULT_OUTPUT: &str = "itineraries.out";
pub const DEFAULT_LOG_SPEC: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Problem file to read.
    pub input: PathBuf,
    /// Where the answers are written, one per line.
    pub output: PathBuf,
    pub version: Version,
    pub log_spec: String,
}

impl Config {
    /// Parses the arguments, without the program name.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = args.into_iter();
        let mut input = None;
        let mut output = PathBuf::from(DEFAULT_OUTPUT);
        let mut version = Version::default();
        let mut log_spec = DEFAULT_LOG_SPEC.to_owned();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Err(Error::Usage(USAGE.to_owned())),
                "-r" | "--resolver" => version = value(&mut args, &arg)?.parse()?,
                "-o" | "--output" => output = PathBuf::from(value(&mut args, &arg)?),
                "-l" | "--log" => log_spec = value(&mut args, &arg)?,
                flag if flag.starts_with('-') => {
                    return Err(Error::Usage(format!("unknown option {flag}\n{USAGE}")))
                }
                _ if input.is_none() => input = Some(PathBuf::from(&arg)),
                _ => return Err(Error::Usage(format!("unexpected argument {arg:?}\n{USAGE}"))),
            }
        }
        let input = input.ok_or_else(|| Error::Usage(USAGE.to_owned()))?;
        Ok(Self {
            input,
            output,
            version,
            log_spec,
        })
    }
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| Error::Usage(format!("{flag} needs a value\n{USAGE}")))
}
