//! Clamp and linear-rescale utilities with explicit boundary contracts
//!
//! The scaling stage's strict-inequality behavior depends on these helpers,
//! so their domain and range semantics are fixed here rather than inherited
//! from an array library.

use ndarray::Array2;
use num_traits::Float;

/// Linearly rescale `value` from `[low, high]` into `[0, 1]`, clamping
///
/// `value <= low` maps to zero and `value >= high` maps to one; everything
/// between maps to `(value - low) / (high - low)`. A degenerate interval
/// (`low >= high`) maps every input to one, mirroring the array normalizer's
/// constant-input behavior.
pub fn normalize_to_range<T: Float>(value: T, low: T, high: T) -> T {
    if low >= high {
        return T::one();
    }
    let scaled = (value - low) / (high - low);
    scaled.max(T::zero()).min(T::one())
}

/// Normalize an array of values into `[0, 1]` by min-max rescaling
///
/// A constant array (minimum equals maximum) yields an all-ones array
/// instead of dividing by zero. Empty input yields an empty array.
pub fn min_max_normalize(values: &Array2<f64>) -> Array2<f64> {
    if values.is_empty() {
        return Array2::zeros(values.raw_dim());
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max <= min {
        return Array2::ones(values.raw_dim());
    }

    let span = max - min;
    values.mapv(|v| (v - min) / span)
}
