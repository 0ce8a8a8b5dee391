//! Error types for image loading, scoring, and batch processing

use std::fmt;
use std::path::PathBuf;

/// Main error type for all scoring operations
#[derive(Debug)]
pub enum ScoreError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Input data doesn't meet scoring requirements
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Spectrum and distance field dimensions disagree
    ///
    /// Raised at the filter boundary so a malformed collaborator
    /// contract fails fast instead of producing a silently wrong score
    ShapeMismatch {
        /// Dimensions the pipeline expected (rows, cols)
        expected: (usize, usize),
        /// Dimensions actually supplied (rows, cols)
        actual: (usize, usize),
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
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

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidInput { reason } => {
                write!(f, "Invalid input: {reason}")
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "Shape mismatch: expected {}x{}, got {}x{}",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
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

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for scoring results
pub type Result<T> = std::result::Result<T, ScoreError>;

impl From<image::ImageError> for ScoreError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for ScoreError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid input error
pub fn invalid_input(reason: &impl ToString) -> ScoreError {
    ScoreError::InvalidInput {
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> ScoreError {
    ScoreError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a shape mismatch error from two (rows, cols) pairs
pub const fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> ScoreError {
    ScoreError::ShapeMismatch { expected, actual }
}
