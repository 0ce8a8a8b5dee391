//! High-intensity cell isolation and center-distance extraction

use crate::io::error::{Result, shape_mismatch};
use ndarray::Array2;

/// Mark spectrum cells strictly above the intensity threshold
///
/// The comparison is strict: a cell exactly at the threshold is not
/// high-intensity.
pub fn high_intensity_mask(spectrum: &Array2<f64>, threshold: f64) -> Array2<bool> {
    spectrum.mapv(|v| v > threshold)
}

/// Extract center distances of masked cells in row-major order
///
/// Returns the square roots of the distance-field values at every masked
/// position. The order is deterministic (row-major) though no downstream
/// statistic depends on it. An all-false mask yields an empty set.
///
/// # Errors
///
/// Returns [`ScoreError::ShapeMismatch`](crate::io::error::ScoreError) if
/// the mask and field dimensions disagree; the two must describe the same
/// spectrum.
pub fn center_distances(mask: &Array2<bool>, field: &Array2<f64>) -> Result<Vec<f64>> {
    if mask.dim() != field.dim() {
        return Err(shape_mismatch(mask.dim(), field.dim()));
    }

    Ok(mask
        .iter()
        .zip(field.iter())
        .filter(|(marked, _)| **marked)
        .map(|(_, &squared)| squared.sqrt())
        .collect())
}
