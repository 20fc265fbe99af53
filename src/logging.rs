//! Log setup shared by the binary, the tests and the benchmarks.

use flexi_logger::{DeferredNow, Logger};
use log::Record;

use crate::error::Result;

/// Logger that follows RUST_LOG, or `spec` when it is not set. Callers choose where it writes and
/// start it.
pub fn logger(spec: &str) -> Result<Logger> {
    Ok(Logger::try_with_env_or_str(spec)?
        .set_palette("196;208;3;7;8".to_owned())
        .format(line_format))
}

/// `12:34:56 [I] message`, colored by level.
pub fn line_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> std::io::Result<()> {
    let style = flexi_logger::style(record.level());
    write!(
        w,
        "{} {pref}[{}] {}{suf}",
        now.format("%H:%M:%S"),
        &record.level().as_str()[0..1],
        record.args(),
        pref = style.prefix(),
        suf = style.suffix(),
    )
}
