//! Error types for edge walks and their surrounding file operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all walk operations
#[derive(Debug)]
pub enum WalkError {
    /// Walk parameters failed validation before any sampling occurred
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The feature map cannot supply as many distinct sources as requested
    ///
    /// Every edge consumes one eligible coordinate as its source, so a map with
    /// `available` eligible points supports at most `available - 1` edges.
    InsufficientPoints {
        /// Number of edges requested
        requested: usize,
        /// Eligible coordinates in the feature map
        available: usize,
    },

    /// The global stall guard tripped before the requested edges were produced
    SearchExhausted {
        /// Edges accepted before the search gave up
        edges_produced: usize,
        /// Number of edges requested
        requested: usize,
        /// Relocations performed across the whole walk
        relocations: usize,
    },

    /// A caller raised the cancellation flag while the walk was running
    Interrupted {
        /// Edges accepted before the interruption (discarded)
        edges_produced: usize,
    },

    /// An assembled edge sequence broke one of its invariants
    InvalidSequence {
        /// Index of the offending edge
        index: usize,
        /// Description of the broken invariant
        reason: String,
    },

    /// Failed to load a feature mask from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Source data doesn't meet walk requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid configuration '{parameter}' = '{value}': {reason}"
                )
            }
            Self::InsufficientPoints {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Feature map has {available} eligible points, cannot produce {requested} edges"
                )
            }
            Self::SearchExhausted {
                edges_produced,
                requested,
                relocations,
            } => {
                write!(
                    f,
                    "Search exhausted after {edges_produced}/{requested} edges ({relocations} relocations)"
                )
            }
            Self::Interrupted { edges_produced } => {
                write!(f, "Walk interrupted after {edges_produced} edges")
            }
            Self::InvalidSequence { index, reason } => {
                write!(f, "Invalid edge sequence at edge {index}: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for WalkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for walk results
pub type Result<T> = std::result::Result<T, WalkError>;

impl From<image::ImageError> for WalkError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for WalkError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WalkError {
    WalkError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid sequence error
pub fn invalid_sequence(index: usize, reason: &impl ToString) -> WalkError {
    WalkError::InvalidSequence {
        index,
        reason: reason.to_string(),
    }
}

/// Create a path-related error for CLI target handling
pub fn io_error(msg: &str) -> WalkError {
    WalkError::InvalidConfiguration {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
