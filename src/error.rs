use thiserror::Error;

/// Errors returned by the clustering engine and its file collaborators.
#[derive(Debug, Error)]
pub enum Error {
    /// Growing a cluster's storage failed.
    ///
    /// The cluster that was being grown is left unmodified.
    #[error("out of memory: could not grow cluster storage to {requested} points")]
    OutOfMemory {
        /// Capacity that was requested.
        requested: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Input text does not follow the `count=` / record layout.
    #[error("malformed input at line {line}: {message}")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// Human-readable explanation.
        message: String,
    },

    /// A record parsed, but one of its values is fractional or out of range.
    #[error("invalid data at line {line}: {message}")]
    InvalidData {
        /// 1-based line number.
        line: usize,
        /// Human-readable explanation.
        message: String,
    },

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
