//! Center-shifted magnitude spectrum construction via 2-D FFT
//!
//! Produces the frequency-domain representation the scoring pipeline
//! consumes: low frequencies at the array center, log-scaled magnitudes
//! normalized into `[0, 1]`.

use crate::io::error::Result;
use crate::math::normalize::min_max_normalize;
use ndarray::Array2;
use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

/// Source of magnitude spectra for the scoring pipeline
///
/// Hosts that already run their own frequency transform can substitute an
/// implementation; the pipeline only requires the output to match the input
/// shape with values normalized into `[0, 1]`.
pub trait SpectrumBuilder {
    /// Build a center-shifted magnitude spectrum from a grayscale array
    ///
    /// # Errors
    ///
    /// Returns an error if the transform cannot be computed for the given
    /// input; the built-in FFT builder never fails.
    fn magnitude_spectrum(&self, gray: &Array2<f64>) -> Result<Array2<f64>>;
}

/// FFT-backed spectrum builder
///
/// Applies a row-wise then column-wise forward FFT, recenters the zero
/// frequency, takes `ln(1 + |F|)`, and min-max normalizes the result. A
/// constant input (zero spectral spread) normalizes to an all-ones array.
#[derive(Debug, Clone, Copy, Default)]
pub struct FftSpectrumBuilder;

impl SpectrumBuilder for FftSpectrumBuilder {
    fn magnitude_spectrum(&self, gray: &Array2<f64>) -> Result<Array2<f64>> {
        let (height, width) = gray.dim();
        if height == 0 || width == 0 {
            return Ok(Array2::zeros((height, width)));
        }

        let mut field: Array2<Complex<f64>> = gray.mapv(|v| Complex::new(v, 0.0));
        let mut planner = FftPlanner::new();

        let row_fft = planner.plan_fft_forward(width);
        let mut scratch = vec![Complex::new(0.0, 0.0); row_fft.get_inplace_scratch_len()];
        let mut buffer = vec![Complex::new(0.0, 0.0); width];
        for mut row in field.rows_mut() {
            for (slot, value) in buffer.iter_mut().zip(row.iter()) {
                *slot = *value;
            }
            row_fft.process_with_scratch(&mut buffer, &mut scratch);
            for (value, slot) in buffer.iter().zip(row.iter_mut()) {
                *slot = *value;
            }
        }

        let col_fft = planner.plan_fft_forward(height);
        let mut col_scratch = vec![Complex::new(0.0, 0.0); col_fft.get_inplace_scratch_len()];
        let mut column = vec![Complex::new(0.0, 0.0); height];
        for mut col in field.columns_mut() {
            for (slot, value) in column.iter_mut().zip(col.iter()) {
                *slot = *value;
            }
            col_fft.process_with_scratch(&mut column, &mut col_scratch);
            for (value, slot) in column.iter().zip(col.iter_mut()) {
                *slot = *value;
            }
        }

        // Roll the zero frequency to the array center before log scaling
        let magnitudes = Array2::from_shape_fn((height, width), |(y, x)| {
            let src_y = (y + height - height / 2) % height;
            let src_x = (x + width - width / 2) % width;
            field[[src_y, src_x]].norm().ln_1p()
        });

        Ok(min_max_normalize(&magnitudes))
    }
}
