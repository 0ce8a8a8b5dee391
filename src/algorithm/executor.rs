//! Pipeline orchestration and the filter surface exposed to hosts

use crate::algorithm::strategy::FastPath;
use crate::algorithm::{density, radius, scaling, threshold};
use crate::analysis::outliers;
use crate::analysis::reduction::GrayscaleReducer;
use crate::analysis::spectrum::SpectrumBuilder;
use crate::io::configuration::{
    CONTAMINATION, INTENSITY_THRESHOLD, LOF_NEIGHBORS, TOP_DISTANCES,
};
use crate::io::error::{Result, computation_error};
use ndarray::Array2;

/// Tunable parameters for one scorer instance
///
/// Constructed once at startup; every scoring call reads the same values,
/// including the fast-path strategy for the distance-field stage.
#[derive(Debug, Clone, Copy)]
pub struct ScorerConfig {
    /// Spectrum intensity above which a cell counts as high-energy
    pub intensity_threshold: f64,
    /// Maximum fraction of distances discarded as outliers
    pub contamination: f64,
    /// Neighborhood size for the local outlier factor
    pub lof_neighbors: usize,
    /// Number of largest distances averaged into the radius estimate
    pub top_distances: usize,
    /// Implementation strategy for the distance-field stage
    pub fast_path: FastPath,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            intensity_threshold: INTENSITY_THRESHOLD,
            contamination: CONTAMINATION,
            lof_neighbors: LOF_NEIGHBORS,
            top_distances: TOP_DISTANCES,
            fast_path: FastPath::default(),
        }
    }
}

/// Filter scoring how pattern-like an image is
///
/// A pure pipeline over array data: no I/O, no retained state between
/// calls. Scoring the same spectrum twice yields bit-identical results,
/// and independent instances may run concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternFilter {
    config: ScorerConfig,
}

impl PatternFilter {
    /// Create a filter with the given configuration
    pub const fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Name this filter registers under
    pub const fn name() -> &'static str {
        "pattern_detection"
    }

    /// Upstream capabilities the host must satisfy before invoking this
    /// filter
    pub const fn required() -> &'static [&'static str] {
        &["reduce_colors"]
    }

    /// The active configuration
    pub const fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Score a magnitude spectrum on pattern-likeness
    ///
    /// The spectrum must be normalized into `[0, 1]` with low frequencies
    /// at the array center. Degenerate inputs (empty arrays, no
    /// high-intensity cells) flow through every stage without error and
    /// score `1.0`, the documented no-signal sentinel.
    ///
    /// # Errors
    ///
    /// Returns a computation error if the spectrum contains non-finite
    /// values.
    pub fn score_spectrum(&self, spectrum: &Array2<f64>) -> Result<f64> {
        if spectrum.iter().any(|v| !v.is_finite()) {
            return Err(computation_error(
                "spectrum validation",
                &"magnitude spectrum contains non-finite values",
            ));
        }

        let (height, width) = spectrum.dim();
        let field = self.config.fast_path.distance_field(height, width);

        let mask = threshold::high_intensity_mask(spectrum, self.config.intensity_threshold);
        let distances = threshold::center_distances(&mask, &field)?;

        let survivors = outliers::filter_outliers(
            &distances,
            self.config.contamination,
            self.config.lof_neighbors,
        );
        let estimated = radius::estimate_radius(&survivors, self.config.top_distances);

        let raw_density = density::frequency_density(&mask, &field, estimated)?;
        Ok(scaling::scaled_prediction(raw_density))
    }

    /// Score a two-level grayscale array, building the spectrum first
    ///
    /// # Errors
    ///
    /// Propagates spectrum construction and scoring errors.
    pub fn score_grayscale<B: SpectrumBuilder>(
        &self,
        gray: &Array2<f64>,
        builder: &B,
    ) -> Result<f64> {
        let spectrum = builder.magnitude_spectrum(gray)?;
        self.score_spectrum(&spectrum)
    }

    /// Score raw 8-bit luma, resolving the `reduce_colors` dependency with
    /// the given reducer
    ///
    /// # Errors
    ///
    /// Propagates reduction, spectrum construction, and scoring errors.
    pub fn score_luma<R: GrayscaleReducer, B: SpectrumBuilder>(
        &self,
        luma: &Array2<u8>,
        reducer: &R,
        builder: &B,
    ) -> Result<f64> {
        let reduced = reducer.reduce(luma)?;
        self.score_grayscale(&reduced, builder)
    }
}
