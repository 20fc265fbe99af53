use std::fs::File;
use std::io::{BufWriter, Write};
use std::process::ExitCode;

use itineraries::{config::Config, logging::logger, solve, Problem, Result};

fn run(config: &Config) -> Result<()> {
    let problem = Problem::from_file(&config.input)?;
    log::info!(
        "read {} nodes, {} edges and {} queries from {}",
        problem.graph.node_count(),
        problem.graph.edge_count(),
        problem.queries.len(),
        config.input.display()
    );
    log::debug!("original graph:\n{}", problem.graph);

    let mst = problem.graph.minimum_spanning_tree();
    log::debug!("minimum spanning tree:\n{mst}");
    if log::log_enabled!(log::Level::Trace) {
        log::trace!("{}", mst.tree_string());
    }

    let answers = solve(&mst, &problem.queries, config.version)?;
    let mut out = BufWriter::new(File::create(&config.output)?);
    for noise in &answers {
        writeln!(out, "{noise}")?;
    }
    out.flush()?;
    log::info!(
        "[{}] wrote {} answers to {}",
        config.version,
        answers.len(),
        config.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };
    let _logger = match logger(&config.log_spec).and_then(|l| Ok(l.start()?)) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = run(&config) {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
