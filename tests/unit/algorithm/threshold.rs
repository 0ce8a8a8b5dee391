//! Tests for high-intensity masking and center-distance extraction

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};
    use patternscore::algorithm::threshold::{center_distances, high_intensity_mask};
    use patternscore::io::configuration::INTENSITY_THRESHOLD;
    use patternscore::io::error::ScoreError;
    use patternscore::spatial::distance::squared_distance_field;

    // Tests the comparison is strictly greater than the threshold
    // Verified by switching to a non-strict comparison
    #[test]
    fn test_threshold_is_strict() {
        let spectrum = array![[0.7, 0.700001], [0.0, 1.0]];
        let mask = high_intensity_mask(&spectrum, INTENSITY_THRESHOLD);

        assert!(!mask[[0, 0]], "a cell exactly at the threshold is excluded");
        assert!(mask[[0, 1]]);
        assert!(!mask[[1, 0]]);
        assert!(mask[[1, 1]]);
    }

    // Tests distances come out as square roots in row-major order
    // Verified by reordering the iteration axes
    #[test]
    fn test_distances_are_rooted_row_major() {
        let mask = array![[false, true], [false, true]];
        let field = squared_distance_field(2, 2);

        let distances = center_distances(&mask, &field).expect("extraction failed");

        // Field for 2x2 is [[2, 1], [1, 0]]; masked cells are (0,1) and (1,1)
        assert_eq!(distances, vec![1.0, 0.0]);
    }

    // Tests an all-false mask yields an empty distance set
    // Verified by returning an error for empty masks
    #[test]
    fn test_empty_mask_yields_empty_set() {
        let mask = Array2::from_elem((4, 4), false);
        let field = squared_distance_field(4, 4);

        let distances = center_distances(&mask, &field).expect("extraction failed");
        assert!(distances.is_empty());
    }

    // Tests disagreeing shapes fail fast with a descriptive error
    // Verified by dropping the dimension comparison
    #[test]
    fn test_shape_mismatch_fails_fast() {
        let mask = Array2::from_elem((2, 2), true);
        let field = squared_distance_field(3, 3);

        let result = center_distances(&mask, &field);
        assert!(matches!(
            result,
            Err(ScoreError::ShapeMismatch {
                expected: (2, 2),
                actual: (3, 3),
            })
        ));
    }
}
