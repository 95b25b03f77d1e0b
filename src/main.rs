//! CLI for resolving the maze configuration

use clap::Parser;
use maze_config::cli::Args;
use maze_config::logging::init_logging;
use maze_config::{resolve, resolver, MazeConfiguration};

/// Resolve configuration from a file or the command line, print it for the
/// maze engine
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let defaults = MazeConfiguration::default();

    let log = init_logging(defaults.verbosity)?;
    let overrides = resolver::select_source(&args, &defaults);
    log.set_verbosity(overrides.verbosity.unwrap_or(defaults.verbosity))?;

    let config = resolve(&defaults, overrides);
    println!("{config}");
    Ok(())
}
