//! Resolve the configuration of the maze generation and search front-end
//!
//! Configuration comes from built-in defaults, overridden by exactly one
//! source: the command line or a YAML configuration file. The start and
//! exit cells are then moved onto the outer wall of the maze, so that they
//! are valid entrances, and kept distinct.
//!
//! # Examples
//! ```
//! use maze_config::{resolve, Cell, ConfigOverride, Dimension, MazeConfiguration};
//!
//! let defaults = MazeConfiguration::default();
//! let overrides = ConfigOverride {
//!     dimension: Some(Dimension::new(10, 30).unwrap()),
//!     start_cell: Some(Cell::new(-5, 5)),
//!     exit_cell: Some(Cell::new(12, 5)),
//!     ..Default::default()
//! };
//! let config = resolve(&defaults, overrides);
//!
//! assert_eq!(config.start_cell, Cell::new(0, 5));
//! assert_eq!(config.exit_cell, Cell::new(9, 5));
//! assert_eq!(config.search_algorithms, defaults.search_algorithms);
//! ```
//!
//! ## Configuration file
//! A sequence of mappings, or a single mapping. Scalar choices may be
//! wrapped in a one-element list.
//! ```yaml
//! - dimension: [20, 40]
//! - start_cell: [0, 5]
//! - exit_cell: [19, 39]
//! - maze_type: [dfs]
//! - search_type: [bfs, a*]
//! - break_type: dfs
//! - log_level: [debug]
//! ```

use std::fmt;

use itertools::Itertools;

pub mod algorithms;
pub mod cell;
pub mod cli;
pub mod error;
pub mod file_source;
pub mod logging;
pub mod resolver;

pub use algorithms::{BreakAlgorithm, GenerationAlgorithm, SearchAlgorithm, Verbosity};
pub use cell::{normalize, Cell, Dimension};
pub use error::{ConfigError, ConfigFileError};
pub use resolver::resolve;

/// Settings handed to the maze engine
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeConfiguration {
    /// Size of the maze grid
    pub dimension: Dimension,
    /// Entrance of the maze
    pub start_cell: Cell,
    /// Exit of the maze
    pub exit_cell: Cell,
    /// How the maze is carved
    pub generation_algorithm: GenerationAlgorithm,
    /// Path searches, in the order they are run and displayed
    pub search_algorithms: Vec<SearchAlgorithm>,
    /// How dead ends are broken to make the maze imperfect
    pub break_algorithm: BreakAlgorithm,
    /// Diagnostic detail
    pub verbosity: Verbosity,
}

/// Partial configuration from one override source
///
/// Fields left as `None` keep their default value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverride {
    pub dimension: Option<Dimension>,
    pub start_cell: Option<Cell>,
    pub exit_cell: Option<Cell>,
    pub generation_algorithm: Option<GenerationAlgorithm>,
    pub search_algorithms: Option<Vec<SearchAlgorithm>>,
    pub break_algorithm: Option<BreakAlgorithm>,
    pub verbosity: Option<Verbosity>,
}

impl Default for MazeConfiguration {
    /// PRIM's maze of 10x30 searched with A* and depth-first search.
    ///
    /// The default exit cell lies outside the default maze and ends up in
    /// the bottom-right corner after normalization.
    fn default() -> Self {
        Self {
            dimension: Dimension::DEFAULT,
            start_cell: Cell::new(0, 0),
            exit_cell: Cell::new(29, 29),
            generation_algorithm: GenerationAlgorithm::Prim,
            search_algorithms: vec![SearchAlgorithm::AStar, SearchAlgorithm::Dfs],
            break_algorithm: BreakAlgorithm::Bfs,
            verbosity: Verbosity::Info,
        }
    }
}

impl ConfigOverride {
    /// Whether the source set no field at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for MazeConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Maze dimension:       {}", self.dimension)?;
        writeln!(f, "Start cell:           {}", self.start_cell)?;
        writeln!(f, "Exit cell:            {}", self.exit_cell)?;
        writeln!(f, "Generation algorithm: {}", self.generation_algorithm)?;
        writeln!(
            f,
            "Search algorithms:    {}",
            self.search_algorithms.iter().join(", ")
        )?;
        writeln!(f, "Break algorithm:      {}", self.break_algorithm)?;
        write!(f, "Log level:            {}", self.verbosity)
    }
}
