//! YAML configuration file
//!
//! The document is a sequence of mappings, or a single mapping. Entries are
//! applied in document order, so a repeated key takes its last value.
//! Unknown keys are ignored, and a recognized key with an unusable value is
//! skipped with a warning.

use std::fs;
use std::path::Path;

use anyhow::Context;
use itertools::Itertools;
use serde::de::DeserializeOwned;
use serde_yaml::Value;
use tracing::{debug, info, warn};

use crate::algorithms::{BreakAlgorithm, GenerationAlgorithm, SearchAlgorithm, Verbosity};
use crate::cell::{Cell, Dimension};
use crate::error::ConfigFileError;
use crate::ConfigOverride;

/// Read overrides from a configuration file
pub fn load(path: &Path) -> Result<ConfigOverride, ConfigFileError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&contents, path)
}

/// Read overrides from a configuration file, or none if it is unusable
///
/// A missing, empty or malformed file is reported as a warning and the
/// defaults stay in effect.
pub fn load_or_default(path: &Path) -> ConfigOverride {
    match load(path) {
        Ok(overrides) => {
            info!(path = %path.display(), "loaded configuration file");
            overrides
        }
        Err(err) => {
            warn!("{err}");
            warn!("falling back on default settings for configuration");
            ConfigOverride::default()
        }
    }
}

/// Parse overrides from the contents of a configuration file
///
/// `path` is only used for error reporting.
pub fn parse(contents: &str, path: &Path) -> Result<ConfigOverride, ConfigFileError> {
    let document: Value = serde_yaml::from_str(contents).map_err(|source| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<(Value, Value)> = match document {
        Value::Null => {
            return Err(ConfigFileError::Empty {
                path: path.to_path_buf(),
            })
        }
        Value::Mapping(mapping) => mapping.into_iter().collect(),
        Value::Sequence(items) if items.is_empty() => {
            return Err(ConfigFileError::Empty {
                path: path.to_path_buf(),
            })
        }
        Value::Sequence(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Mapping(mapping) => Ok(mapping),
                _ => Err(ConfigFileError::Shape {
                    path: path.to_path_buf(),
                }),
            })
            .flatten_ok()
            .collect::<Result<_, _>>()?,
        _ => {
            return Err(ConfigFileError::Shape {
                path: path.to_path_buf(),
            })
        }
    };

    let mut overrides = ConfigOverride::default();
    for (key, value) in entries {
        match key.as_str() {
            Some(key) => apply(&mut overrides, key, value),
            None => debug!(?key, "ignoring non-string configuration key"),
        }
    }
    Ok(overrides)
}

/// Set the field named by `key`
fn apply(overrides: &mut ConfigOverride, key: &str, value: Value) {
    let applied = match key {
        "dimension" => decode::<Dimension>(value).map(|v| overrides.dimension = Some(v)),
        "start_cell" => decode::<Cell>(value).map(|v| overrides.start_cell = Some(v)),
        "exit_cell" => decode::<Cell>(value).map(|v| overrides.exit_cell = Some(v)),
        "maze_type" => first_element(value)
            .and_then(decode::<GenerationAlgorithm>)
            .map(|v| overrides.generation_algorithm = Some(v)),
        "search_type" => decode::<Vec<SearchAlgorithm>>(as_sequence(value))
            .map(|v| overrides.search_algorithms = Some(v)),
        "break_type" => first_element(value)
            .and_then(decode::<BreakAlgorithm>)
            .map(|v| overrides.break_algorithm = Some(v)),
        "log_level" | "logging" => first_element(value)
            .and_then(decode::<String>)
            .map(|v| overrides.verbosity = Some(verbosity(&v))),
        _ => {
            debug!(key, "ignoring unrecognized configuration key");
            Ok(())
        }
    };
    if let Err(err) = applied {
        warn!(key, "ignoring configuration value: {err:#}");
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> anyhow::Result<T> {
    Ok(serde_yaml::from_value(value)?)
}

/// Unwrap a value given as a one-element list
fn first_element(value: Value) -> anyhow::Result<Value> {
    match value {
        Value::Sequence(items) => items.into_iter().next().context("empty list"),
        other => Ok(other),
    }
}

/// Wrap a single value into a list
fn as_sequence(value: Value) -> Value {
    match value {
        Value::Sequence(_) => value,
        other => Value::Sequence(vec![other]),
    }
}

/// Unknown levels fall back to info
fn verbosity(value: &str) -> Verbosity {
    value.parse().unwrap_or_else(|err| {
        warn!("{err}, using {}", Verbosity::Info);
        Verbosity::Info
    })
}
