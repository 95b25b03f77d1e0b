//! Command line options

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::algorithms::{BreakAlgorithm, GenerationAlgorithm, SearchAlgorithm, Verbosity};
use crate::cell::{Cell, Dimension};
use crate::{ConfigOverride, MazeConfiguration};

const LONG_ABOUT: &str = "Maze generation with some different path search algorithms.

If no options are specified, it will default to PRIM's with A* search. \
Start and exit cells are moved onto the nearest outer wall of the maze.";

/// Maze generation with different path search algorithms
#[derive(Parser, Debug)]
#[command(version, about, long_about = LONG_ABOUT, args_override_self = true)]
pub struct Args {
    /// YAML configuration file. When given, the other options are ignored
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maze dimension
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["ROWS", "COLS"],
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    pub dimension: Option<Vec<i64>>,

    /// Start cell, the format is ROW COL
    #[arg(long, num_args = 2, value_names = ["ROW", "COL"], allow_negative_numbers = true)]
    pub start_cell: Option<Vec<i64>>,

    /// Exit cell, the format is ROW COL
    #[arg(long, num_args = 2, value_names = ["ROW", "COL"], allow_negative_numbers = true)]
    pub exit_cell: Option<Vec<i64>>,

    /// Maze generation algorithm
    #[arg(short, long, value_enum)]
    pub maze_type: Option<GenerationAlgorithm>,

    /// Path search algorithms, run in the given order
    #[arg(short, long, value_enum, num_args = 0..)]
    pub search_type: Option<Vec<SearchAlgorithm>>,

    /// Breaking dead ends for an imperfect maze
    #[arg(short, long, value_enum)]
    pub break_type: Option<BreakAlgorithm>,

    /// Logging level
    #[arg(
        short = 'l',
        long,
        value_enum,
        visible_alias = "verbose",
        visible_short_alias = 'v'
    )]
    pub log_level: Option<Verbosity>,
}

impl Args {
    /// Complete override, with every omitted option taken from `defaults`
    ///
    /// Values that clap would have rejected, such as a dimension below 1 or
    /// a pair with fewer than two values, also fall back to `defaults`. Of
    /// a longer list the last two values are used.
    pub fn to_override(&self, defaults: &MazeConfiguration) -> ConfigOverride {
        ConfigOverride {
            dimension: Some(
                self.dimension
                    .as_deref()
                    .and_then(pair)
                    .and_then(|(rows, cols)| Dimension::new(rows, cols).ok())
                    .unwrap_or(defaults.dimension),
            ),
            start_cell: Some(cell(self.start_cell.as_deref()).unwrap_or(defaults.start_cell)),
            exit_cell: Some(cell(self.exit_cell.as_deref()).unwrap_or(defaults.exit_cell)),
            generation_algorithm: Some(self.maze_type.unwrap_or(defaults.generation_algorithm)),
            search_algorithms: Some(
                self.search_type
                    .clone()
                    .unwrap_or_else(|| defaults.search_algorithms.clone()),
            ),
            break_algorithm: Some(self.break_type.unwrap_or(defaults.break_algorithm)),
            verbosity: Some(self.log_level.unwrap_or(defaults.verbosity)),
        }
    }
}

/// Parse `argv` into a complete override
///
/// Returns a usage error for unknown options, values outside of the choice
/// sets and wrong value counts.
pub fn parse_from<I, T>(
    argv: I,
    defaults: &MazeConfiguration,
) -> Result<ConfigOverride, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(Args::try_parse_from(argv)?.to_override(defaults))
}

/// The last two values of a two-valued option
fn pair(values: &[i64]) -> Option<(i64, i64)> {
    match values {
        [.., first, second] => Some((*first, *second)),
        _ => None,
    }
}

fn cell(values: Option<&[i64]>) -> Option<Cell> {
    values.and_then(pair).map(Cell::from)
}
