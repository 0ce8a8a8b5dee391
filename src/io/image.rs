//! PNG loading into grayscale arrays

use crate::io::error::{Result, ScoreError, invalid_input};
use ndarray::Array2;
use std::path::Path;

/// Load an image file as an 8-bit luma array
///
/// The image is converted to single-channel grayscale; rows of the returned
/// array correspond to image rows.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded, or if the
/// image has a zero dimension.
pub fn load_luma<P: AsRef<Path>>(path: P) -> Result<Array2<u8>> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| ScoreError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    let luma = img.to_luma8();

    let (width, height) = (luma.width() as usize, luma.height() as usize);
    if width == 0 || height == 0 {
        return Err(invalid_input(&"image has a zero dimension"));
    }

    let mut values = Array2::zeros((height, width));
    for (x, y, pixel) in luma.enumerate_pixels() {
        let level = pixel.0.first().copied().unwrap_or(0);
        if let Some(slot) = values.get_mut((y as usize, x as usize)) {
            *slot = level;
        }
    }

    Ok(values)
}
