//! Error types for cidr2lsrules.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for conversion runs.
#[derive(Error, Debug)]
pub enum Error {
    /// Input file missing or unreadable
    #[error("cannot read input file {path:?}: {source}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed input line (1-based line number)
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: CidrParseError,
    },

    /// Output file could not be created or written
    #[error("cannot write output file {path:?}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for cidr2lsrules operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for splitting a CIDR line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrParseError {
    /// No `/` in the line
    #[error("missing '/' separator in {0:?}")]
    MissingSeparator(String),

    /// More than one `/` in the line
    #[error("too many '/' separators in {0:?}")]
    TooManySeparators(String),
}
