//! Merge defaults with one override source

use itertools::Itertools;
use tracing::{debug, warn};

use crate::cell::normalize;
use crate::cli::Args;
use crate::{file_source, ConfigOverride, MazeConfiguration};

/// Pick the override source: the configuration file if one is given,
/// otherwise the command line
pub fn select_source(args: &Args, defaults: &MazeConfiguration) -> ConfigOverride {
    match &args.config {
        Some(path) => file_source::load_or_default(path),
        None => args.to_override(defaults),
    }
}

/// Resolve the configuration for parsed command line arguments
pub fn resolve_from_args(args: &Args, defaults: &MazeConfiguration) -> MazeConfiguration {
    resolve(defaults, select_source(args, defaults))
}

/// Apply `overrides` on top of `defaults` and normalize the start and exit
/// cells
///
/// Both cells are moved onto the outer wall of the maze. If they end up on
/// the same cell, they are reset to the top-left and bottom-right corners.
pub fn resolve(defaults: &MazeConfiguration, overrides: ConfigOverride) -> MazeConfiguration {
    let mut config = merge(defaults, overrides);

    debug!(
        "cells before adjustment: start {}, exit {}",
        config.start_cell, config.exit_cell
    );
    config.start_cell = normalize(config.start_cell, config.dimension);
    config.exit_cell = normalize(config.exit_cell, config.dimension);
    debug!(start = %config.start_cell, exit = %config.exit_cell, "adjusted start and exit cells");

    if config.start_cell == config.exit_cell {
        let (start, exit) = (config.dimension.first_cell(), config.dimension.last_cell());
        if start == exit {
            warn!(
                dimension = %config.dimension,
                "maze is too small for distinct start and exit cells"
            );
        } else {
            warn!(
                cell = %config.start_cell,
                "start and exit cells are equal - resetting to default coordinates"
            );
        }
        config.start_cell = start;
        config.exit_cell = exit;
    }
    config
}

fn merge(defaults: &MazeConfiguration, overrides: ConfigOverride) -> MazeConfiguration {
    let search_algorithms = match overrides.search_algorithms {
        Some(algorithms) if !algorithms.is_empty() => algorithms.into_iter().unique().collect(),
        Some(_) => {
            warn!("no search algorithms given, using defaults");
            defaults.search_algorithms.clone()
        }
        None => defaults.search_algorithms.clone(),
    };

    MazeConfiguration {
        dimension: overrides.dimension.unwrap_or(defaults.dimension),
        start_cell: overrides.start_cell.unwrap_or(defaults.start_cell),
        exit_cell: overrides.exit_cell.unwrap_or(defaults.exit_cell),
        generation_algorithm: overrides
            .generation_algorithm
            .unwrap_or(defaults.generation_algorithm),
        search_algorithms,
        break_algorithm: overrides.break_algorithm.unwrap_or(defaults.break_algorithm),
        verbosity: overrides.verbosity.unwrap_or(defaults.verbosity),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tracing_test::traced_test;

    use crate::algorithms::{GenerationAlgorithm, SearchAlgorithm, Verbosity};
    use crate::cell::{Cell, Dimension};
    use crate::cli::Args;
    use crate::resolver::{resolve, resolve_from_args};
    use crate::{ConfigOverride, MazeConfiguration};

    fn dim(rows: i64, cols: i64) -> Dimension {
        Dimension::new(rows, cols).unwrap()
    }

    /// Defaults with normalized cells
    fn normalized_defaults() -> MazeConfiguration {
        MazeConfiguration {
            exit_cell: Cell::new(9, 29),
            ..Default::default()
        }
    }

    #[test]
    fn no_override_normalizes_defaults() {
        let config = resolve(&MazeConfiguration::default(), ConfigOverride::default());
        assert_eq!(config, normalized_defaults());
    }

    #[test]
    fn override_replaces_only_present_fields() {
        let defaults = MazeConfiguration::default();
        let config = resolve(
            &defaults,
            ConfigOverride {
                generation_algorithm: Some(GenerationAlgorithm::Dfs),
                verbosity: Some(Verbosity::Debug),
                ..Default::default()
            },
        );
        assert_eq!(
            config,
            MazeConfiguration {
                generation_algorithm: GenerationAlgorithm::Dfs,
                verbosity: Verbosity::Debug,
                ..normalized_defaults()
            }
        );
    }

    #[test]
    fn cells_are_moved_onto_outer_wall() {
        let config = resolve(
            &MazeConfiguration::default(),
            ConfigOverride {
                start_cell: Some(Cell::new(-5, 5)),
                exit_cell: Some(Cell::new(12, 5)),
                ..Default::default()
            },
        );
        assert_eq!(config.start_cell, Cell::new(0, 5));
        assert_eq!(config.exit_cell, Cell::new(9, 5));
    }

    #[test]
    #[traced_test]
    fn equal_cells_reset_to_corners() {
        let config = resolve(
            &MazeConfiguration::default(),
            ConfigOverride {
                dimension: Some(dim(5, 5)),
                start_cell: Some(Cell::new(0, 3)),
                exit_cell: Some(Cell::new(0, 3)),
                ..Default::default()
            },
        );
        assert_eq!(config.start_cell, Cell::new(0, 0));
        assert_eq!(config.exit_cell, Cell::new(4, 4));
        assert!(logs_contain("cells before adjustment: start (0, 3), exit (0, 3)"));
        assert!(logs_contain(
            "start and exit cells are equal - resetting to default coordinates"
        ));
    }

    #[test]
    #[traced_test]
    fn distinct_cells_are_kept_without_warning() {
        let config = resolve(
            &MazeConfiguration::default(),
            ConfigOverride {
                start_cell: Some(Cell::new(-5, 5)),
                ..Default::default()
            },
        );
        assert_eq!(config.start_cell, Cell::new(0, 5));
        assert!(logs_contain("cells before adjustment: start (-5, 5), exit (29, 29)"));
        assert!(!logs_contain("resetting to default coordinates"));
    }

    #[test]
    fn cells_equal_after_normalization_reset_to_corners() {
        let config = resolve(
            &MazeConfiguration::default(),
            ConfigOverride {
                dimension: Some(dim(5, 5)),
                start_cell: Some(Cell::new(-1, 2)),
                exit_cell: Some(Cell::new(0, 2)),
                ..Default::default()
            },
        );
        assert_eq!(config.start_cell, Cell::new(0, 0));
        assert_eq!(config.exit_cell, Cell::new(4, 4));
    }

    #[test]
    fn single_cell_maze() {
        let config = resolve(
            &MazeConfiguration::default(),
            ConfigOverride {
                dimension: Some(dim(1, 1)),
                ..Default::default()
            },
        );
        assert_eq!(config.start_cell, Cell::new(0, 0));
        assert_eq!(config.exit_cell, Cell::new(0, 0));
    }

    #[test]
    fn search_algorithms_are_never_empty() {
        let defaults = MazeConfiguration::default();
        let config = resolve(
            &defaults,
            ConfigOverride {
                search_algorithms: Some(vec![]),
                ..Default::default()
            },
        );
        assert_eq!(config.search_algorithms, defaults.search_algorithms);
    }

    #[test]
    fn duplicate_search_algorithms_keep_first_occurrence() {
        let config = resolve(
            &MazeConfiguration::default(),
            ConfigOverride {
                search_algorithms: Some(vec![
                    SearchAlgorithm::Bfs,
                    SearchAlgorithm::Ucs,
                    SearchAlgorithm::Bfs,
                    SearchAlgorithm::AStar,
                ]),
                ..Default::default()
            },
        );
        assert_eq!(
            config.search_algorithms,
            vec![
                SearchAlgorithm::Bfs,
                SearchAlgorithm::Ucs,
                SearchAlgorithm::AStar
            ]
        );
    }

    #[test]
    fn file_overriding_dimension_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "- dimension: [20, 40]").unwrap();
        let path = file.path().to_str().unwrap();

        let args = Args::try_parse_from(["maze", "--config", path, "-m", "dfs"]).unwrap();
        let config = resolve_from_args(&args, &MazeConfiguration::default());

        assert_eq!(
            config,
            MazeConfiguration {
                dimension: dim(20, 40),
                exit_cell: Cell::new(19, 39),
                ..Default::default()
            }
        );
    }

    #[test]
    #[traced_test]
    fn unusable_file_resolves_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        let malformed = dir.path().join("malformed.yaml");
        std::fs::write(&malformed, "- dimension: [20, 40\n- maze_type: [dfs]").unwrap();

        for path in [missing, malformed] {
            let args = Args {
                config: Some(path),
                ..Args::try_parse_from(["maze", "-m", "dfs"]).unwrap()
            };
            let config = resolve_from_args(&args, &MazeConfiguration::default());
            assert_eq!(config, normalized_defaults());
        }
        assert!(logs_contain("failed to read configuration file"));
        assert!(logs_contain("failed to parse configuration file"));
        assert!(logs_contain("falling back on default settings"));
    }

    #[test]
    fn command_line_is_used_without_config_file() {
        let args =
            Args::try_parse_from(["maze", "-d", "4", "6", "--exit-cell", "2", "3", "-s", "ucs"])
                .unwrap();
        let config = resolve_from_args(&args, &MazeConfiguration::default());

        assert_eq!(
            config,
            MazeConfiguration {
                dimension: dim(4, 6),
                exit_cell: Cell::new(3, 3),
                search_algorithms: vec![SearchAlgorithm::Ucs],
                ..Default::default()
            }
        );
    }
}
