//! Error types for extent computations

use std::fmt;
use std::io;

/// Errors produced while building, transforming or persisting extents
#[derive(Debug)]
pub enum ExtentError {
    /// Bounds are inverted (or not comparable) on at least one axis
    InvalidExtent {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    },
    /// An aggregation received nothing to aggregate
    EmptyInput,
    /// Aggregated boxes declare different spatial references
    CrsMismatch {
        expected: String,
        found: String,
    },
    /// Unparsable spatial reference identifier
    InvalidSrs(String),
    /// Malformed persisted record
    InvalidRecord(String),
    /// I/O error
    IoError(io::Error),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ExtentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtentError::InvalidExtent { xmin, xmax, ymin, ymax } => {
                if !(xmin <= xmax) {
                    write!(f, "Invalid extent: x minimum is higher than x maximum ({} > {})", xmin, xmax)
                } else {
                    write!(f, "Invalid extent: y minimum is higher than y maximum ({} > {})", ymin, ymax)
                }
            },
            ExtentError::EmptyInput => write!(f, "Cannot aggregate an empty input"),
            ExtentError::CrsMismatch { expected, found } => {
                write!(f, "Spatial reference mismatch: expected {}, found {}", expected, found)
            },
            ExtentError::InvalidSrs(s) => write!(f, "Invalid spatial reference: {}", s),
            ExtentError::InvalidRecord(msg) => write!(f, "Invalid bbox record: {}", msg),
            ExtentError::IoError(e) => write!(f, "I/O error: {}", e),
            ExtentError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for ExtentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtentError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ExtentError {
    fn from(error: io::Error) -> Self {
        ExtentError::IoError(error)
    }
}

impl From<String> for ExtentError {
    fn from(msg: String) -> Self {
        ExtentError::GenericError(msg)
    }
}

/// Result type for extent operations
pub type ExtentResult<T> = Result<T, ExtentError>;
