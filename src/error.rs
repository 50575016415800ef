use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Why a single trace line did not produce a sample.
///
/// Always recovered by the parser: the line is skipped and the load goes on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected `<name> ---> <value>`, found {found} field(s)")]
    FieldCount { found: usize },

    #[error("invalid sample value `{value}`: {source}")]
    InvalidValue {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Failure to bring a trace file or a config file into memory.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type LoadResult<T> = Result<T, LoadError>;
