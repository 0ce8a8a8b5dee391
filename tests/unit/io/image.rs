//! Tests for PNG loading into luma arrays

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma};
    use patternscore::io::error::ScoreError;
    use patternscore::io::image::load_luma;
    use std::fs;
    use tempfile::TempDir;

    // Tests a saved grayscale PNG round-trips into the expected array
    // Verified by transposing rows and columns
    #[test]
    fn test_load_luma_dimensions_and_values() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("gray.png");

        let mut img = GrayImage::from_pixel(4, 3, Luma([128u8]));
        img.put_pixel(2, 1, Luma([255u8]));
        img.save(&path).expect("Failed to save test image");

        let luma = load_luma(&path).expect("Failed to load image");

        // Rows correspond to image rows: (height, width) ordering
        assert_eq!(luma.dim(), (3, 4));
        assert_eq!(luma[[1, 2]], 255);
        assert_eq!(luma[[0, 0]], 128);
    }

    // Tests color images convert to a single luma channel
    // Verified by loading a channel count instead
    #[test]
    fn test_load_color_image_converts_to_luma() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("color.png");

        let img = image::RgbImage::from_pixel(2, 2, image::Rgb([255u8, 255, 255]));
        img.save(&path).expect("Failed to save test image");

        let luma = load_luma(&path).expect("Failed to load image");
        assert_eq!(luma.dim(), (2, 2));
        assert!(luma.iter().all(|&v| v > 250));
    }

    // Tests a missing file reports an image load error
    // Verified by returning a generic error instead
    #[test]
    fn test_missing_file_is_image_load_error() {
        let result = load_luma("definitely/not/here.png");
        assert!(matches!(result, Err(ScoreError::ImageLoad { .. })));
    }

    // Tests a non-image file fails to decode
    // Verified by skipping decode validation
    #[test]
    fn test_non_image_file_fails_to_decode() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("fake.png");
        fs::write(&path, "not a png").expect("Failed to write file");

        let result = load_luma(&path);
        assert!(matches!(result, Err(ScoreError::ImageLoad { .. })));
    }
}
