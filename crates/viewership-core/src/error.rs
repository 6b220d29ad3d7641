// File: crates/viewership-core/src/error.rs
// Summary: Error taxonomy for loading, validating and rendering viewership data.

use std::path::PathBuf;

use thiserror::Error;

use crate::loader::ParseWarning;

/// The data file could not be turned into records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open '{path}'")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("malformed CSV")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Min/max and mean are undefined without at least one numeric value.
    #[error("no numeric values for {0}; refusing to render an empty chart")]
    EmptyInput(&'static str),
    #[error("{count} value(s) failed numeric coercion (first: {first})")]
    InvalidData { count: usize, first: ParseWarning },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
