//! Error types for file-level SPMX operations

use std::io;
use std::path::PathBuf;

use spmx_core::SpmxError;
use thiserror::Error;

/// Result type alias using spmx's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading, combining or saving matrix files
#[derive(Error, Debug)]
pub enum Error {
    /// Matrix source file does not exist
    #[error("matrix file '{}' not found", path.display())]
    NotFound {
        /// The missing path
        path: PathBuf,
    },

    /// Matrix source file could not be parsed
    #[error("error loading matrix from file '{}': {source}", path.display())]
    Parse {
        /// The offending file
        path: PathBuf,
        /// Underlying format error
        #[source]
        source: SpmxError,
    },

    /// Matrix source file is not UTF-8 text
    #[error("error loading matrix from file '{}': {source}", path.display())]
    Encoding {
        /// The offending file
        path: PathBuf,
        /// Where decoding stopped
        #[source]
        source: std::str::Utf8Error,
    },

    /// Arithmetic failed (dimension mismatch or overflow)
    #[error(transparent)]
    Matrix(#[from] SpmxError),

    /// Filesystem failure other than a missing input
    #[error("failed to {action} '{}': {source}", path.display())]
    Io {
        /// What was being attempted
        action: &'static str,
        /// The file involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Operation selector not recognised
    #[error("invalid operation '{0}': expected 1/add, 2/subtract or 3/multiply")]
    InvalidOperation(String),

    /// Summary or dump could not be encoded
    #[cfg(feature = "serde")]
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from loading an unreadable matrix file
    pub fn is_load_error(&self) -> bool {
        matches!(self, Error::Parse { .. } | Error::Encoding { .. })
    }

    /// Whether this error is a multiplication dimension mismatch
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Error::Matrix(SpmxError::DimensionMismatch { .. }))
    }
}
