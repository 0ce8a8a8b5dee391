//! Explicit fast-path selection for the hot distance-field stage
//!
//! The choice is made once when the scorer is configured, never resolved
//! per call. Both paths compute the same float-center arithmetic and return
//! bit-identical fields.

use crate::spatial::distance;
use ndarray::Array2;

/// Implementation strategy for the distance-field computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FastPath {
    /// Straightforward per-cell loops
    Scalar,
    /// Broadcast whole-array operations
    #[default]
    Vectorized,
}

impl FastPath {
    /// Build the squared center-distance field using the selected path
    pub fn distance_field(self, height: usize, width: usize) -> Array2<f64> {
        match self {
            Self::Scalar => distance::squared_distance_field(height, width),
            Self::Vectorized => distance::squared_distance_field_vectorized(height, width),
        }
    }
}
