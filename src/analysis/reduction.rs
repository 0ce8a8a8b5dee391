//! Two-level grayscale reduction, the `reduce_colors` upstream capability
//!
//! Collapses an 8-bit grayscale image to two levels before the frequency
//! transform, so the spectrum reflects spatial repetition rather than tonal
//! gradients.

use crate::io::error::Result;
use ndarray::Array2;

/// Provider of two-level grayscale renditions
///
/// The pattern filter declares this capability as its required upstream
/// dependency; the orchestrating host must satisfy it before scoring.
pub trait GrayscaleReducer {
    /// Reduce 8-bit grayscale values to a two-level array in `{0.0, 1.0}`
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be reduced; the built-in Otsu
    /// reducer never fails.
    fn reduce(&self, luma: &Array2<u8>) -> Result<Array2<f64>>;
}

/// Histogram-based reducer splitting at Otsu's threshold
#[derive(Debug, Clone, Copy, Default)]
pub struct OtsuReducer;

/// Find the intensity threshold maximizing between-class variance
///
/// Returns the level such that values strictly above it belong to the
/// foreground class. A constant image yields its single level, putting every
/// pixel in the background class.
pub fn otsu_threshold(luma: &Array2<u8>) -> u8 {
    if luma.is_empty() {
        return 0;
    }

    let mut histogram = [0u64; 256];
    for &value in luma {
        if let Some(count) = histogram.get_mut(value as usize) {
            *count += 1;
        }
    }

    let total = luma.len() as f64;

    let weighted_total: f64 = histogram
        .iter()
        .enumerate()
        .map(|(level, &count)| level as f64 * count as f64)
        .sum();

    let mut background_count = 0.0;
    let mut background_sum = 0.0;
    let mut best_variance = 0.0;
    let mut best_threshold = 0u8;

    for (level, &count) in histogram.iter().enumerate() {
        background_count += count as f64;
        background_sum += level as f64 * count as f64;

        let foreground_count = total - background_count;
        if background_count <= 0.0 || foreground_count <= 0.0 {
            continue;
        }

        let background_mean = background_sum / background_count;
        let foreground_mean = (weighted_total - background_sum) / foreground_count;
        let mean_gap = background_mean - foreground_mean;
        let variance = background_count * foreground_count * mean_gap * mean_gap;

        if variance > best_variance {
            best_variance = variance;
            best_threshold = level as u8;
        }
    }

    best_threshold
}

impl GrayscaleReducer for OtsuReducer {
    fn reduce(&self, luma: &Array2<u8>) -> Result<Array2<f64>> {
        let threshold = otsu_threshold(luma);
        Ok(luma.mapv(|v| if v > threshold { 1.0 } else { 0.0 }))
    }
}
