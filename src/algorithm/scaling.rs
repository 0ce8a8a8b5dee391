//! Final rescaling of raw density into the pattern-likeness score

use crate::io::configuration::{LOWER_DENSITY_BOUND, UPPER_DENSITY_BOUND};
use crate::math::normalize::normalize_to_range;

/// Map a raw frequency density to the final score in `[0, 1]`
///
/// Denser high-frequency content inside the estimated radius means less
/// regular repetition, so the map decreases monotonically:
///
/// - density strictly below the lower bound scores `1.0`
/// - density strictly above the upper bound scores `0.0`
/// - between the bounds, a linear ramp from `1.0` down to `0.0`
///
/// Both comparisons are strict; a density exactly at the lower bound falls
/// on the ramp, not the plateau.
pub fn scaled_prediction(density: f64) -> f64 {
    if density < LOWER_DENSITY_BOUND {
        1.0
    } else if density > UPPER_DENSITY_BOUND {
        0.0
    } else {
        1.0 - normalize_to_range(density, 0.0, UPPER_DENSITY_BOUND)
    }
}
