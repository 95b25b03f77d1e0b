//! Algorithm and verbosity choices
//!
//! Every choice is a closed set. The same spelling is accepted on the
//! command line, in configuration files and through [`FromStr`].

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use itertools::Itertools;
use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;

use crate::error::ConfigError;

/// Maze generation algorithm
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(try_from = "String")]
pub enum GenerationAlgorithm {
    /// Randomized Prim's algorithm
    Prim,
    /// Randomized depth-first search
    Dfs,
}

/// Path search algorithm
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(try_from = "String")]
pub enum SearchAlgorithm {
    /// Depth-first search
    Dfs,
    /// Breadth-first search
    Bfs,
    /// Uniform-cost search
    Ucs,
    /// A* search
    #[value(name = "a*", alias = "astar")]
    AStar,
    /// Greedy best-first search
    #[value(name = "gs", alias = "greedy")]
    Greedy,
}

/// Algorithm for breaking dead ends into an imperfect maze
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(try_from = "String")]
pub enum BreakAlgorithm {
    /// Breadth-first search
    Bfs,
    /// Depth-first search
    Dfs,
}

/// Diagnostic verbosity, ordered by increasing detail
///
/// Configuration files map unknown levels to info, so this type is parsed
/// with [`FromStr`] instead of being deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Verbosity {
    Warning,
    Info,
    Debug,
}

impl GenerationAlgorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prim => "prim",
            Self::Dfs => "dfs",
        }
    }
}

impl SearchAlgorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dfs => "dfs",
            Self::Bfs => "bfs",
            Self::Ucs => "ucs",
            Self::AStar => "a*",
            Self::Greedy => "gs",
        }
    }
}

impl BreakAlgorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }
}

impl Verbosity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

impl From<Verbosity> for LevelFilter {
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::Warning => LevelFilter::WARN,
            Verbosity::Info => LevelFilter::INFO,
            Verbosity::Debug => LevelFilter::DEBUG,
        }
    }
}

/// Implement string conversions on top of the [`ValueEnum`] spelling
macro_rules! impl_choice {
    ($ty:ty, $field:literal) => {
        impl FromStr for $ty {
            type Err = ConfigError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                <Self as ValueEnum>::from_str(value.trim(), true).map_err(|_| {
                    ConfigError::UnknownChoice {
                        field: $field,
                        value: value.to_string(),
                        expected: Self::value_variants()
                            .iter()
                            .map(|variant| variant.as_str())
                            .join(", "),
                    }
                })
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ConfigError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_choice!(GenerationAlgorithm, "maze type");
impl_choice!(SearchAlgorithm, "search type");
impl_choice!(BreakAlgorithm, "break type");
impl_choice!(Verbosity, "log level");

#[cfg(test)]
mod tests {
    use crate::algorithms::{BreakAlgorithm, GenerationAlgorithm, SearchAlgorithm, Verbosity};
    use crate::error::ConfigError;

    #[test]
    fn search_algorithms_use_command_line_spelling() {
        assert_eq!("a*".parse::<SearchAlgorithm>(), Ok(SearchAlgorithm::AStar));
        assert_eq!("astar".parse::<SearchAlgorithm>(), Ok(SearchAlgorithm::AStar));
        assert_eq!("gs".parse::<SearchAlgorithm>(), Ok(SearchAlgorithm::Greedy));
        assert_eq!("UCS".parse::<SearchAlgorithm>(), Ok(SearchAlgorithm::Ucs));
        assert_eq!(SearchAlgorithm::AStar.to_string(), "a*");
    }

    #[test]
    fn unknown_choice_lists_expected_values() {
        let err = "kruskal".parse::<GenerationAlgorithm>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownChoice {
                field: "maze type",
                value: "kruskal".to_string(),
                expected: "prim, dfs".to_string(),
            }
        );
        assert!("ucs".parse::<BreakAlgorithm>().is_err());
    }

    #[test]
    fn verbosity_is_ordered_by_detail() {
        assert!(Verbosity::Warning < Verbosity::Info);
        assert!(Verbosity::Info < Verbosity::Debug);
    }

    #[test]
    fn deserialize_from_yaml_scalar() {
        let algorithms: Vec<SearchAlgorithm> = serde_yaml::from_str("[a*, dfs, gs]").unwrap();
        assert_eq!(
            algorithms,
            vec![
                SearchAlgorithm::AStar,
                SearchAlgorithm::Dfs,
                SearchAlgorithm::Greedy
            ]
        );
        assert!(serde_yaml::from_str::<BreakAlgorithm>("prim").is_err());
    }
}
