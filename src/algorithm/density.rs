//! High-frequency density inside the estimated radius

use crate::io::error::{Result, shape_mismatch};
use ndarray::Array2;

/// Fraction of in-disk cells that are high-intensity
///
/// Partitions the field into an inner disk (squared distance strictly below
/// `radius²`) and outer annulus, then divides the count of high-intensity
/// inner cells by the total inner count. A zero or degenerate radius leaves
/// the disk empty and yields a density of zero rather than dividing by
/// zero.
///
/// # Errors
///
/// Returns [`ScoreError::ShapeMismatch`](crate::io::error::ScoreError) if
/// the mask and field dimensions disagree.
pub fn frequency_density(mask: &Array2<bool>, field: &Array2<f64>, radius: f64) -> Result<f64> {
    if mask.dim() != field.dim() {
        return Err(shape_mismatch(mask.dim(), field.dim()));
    }

    let radius_squared = radius * radius;
    let mut inner_cells = 0u64;
    let mut intense_cells = 0u64;

    for (marked, &squared) in mask.iter().zip(field.iter()) {
        if squared < radius_squared {
            inner_cells += 1;
            if *marked {
                intense_cells += 1;
            }
        }
    }

    if inner_cells == 0 {
        Ok(0.0)
    } else {
        Ok(intense_cells as f64 / inner_cells as f64)
    }
}
