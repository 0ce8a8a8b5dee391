//! Tests for the strict boundary semantics of the prediction scaler

#[cfg(test)]
mod tests {
    use patternscore::algorithm::scaling::scaled_prediction;
    use patternscore::io::configuration::{LOWER_DENSITY_BOUND, UPPER_DENSITY_BOUND};

    // Tests densities strictly below the lower bound saturate at one
    // Verified by relaxing the strict comparison
    #[test]
    fn test_below_lower_bound_saturates_at_one() {
        assert!((scaled_prediction(0.0) - 1.0).abs() < f64::EPSILON);
        assert!((scaled_prediction(LOWER_DENSITY_BOUND - 1e-9) - 1.0).abs() < f64::EPSILON);
    }

    // Tests the lower bound itself falls on the ramp, not the plateau
    // Verified by switching the lower comparison to non-strict
    #[test]
    fn test_lower_bound_is_interpolated() {
        let at_bound = scaled_prediction(LOWER_DENSITY_BOUND);
        assert!((at_bound - 0.875).abs() < f64::EPSILON);
        assert!(at_bound < 1.0);
    }

    // Tests the upper bound maps to zero through the ramp
    // Verified by moving the ramp's right endpoint
    #[test]
    fn test_upper_bound_reaches_zero() {
        assert!((scaled_prediction(UPPER_DENSITY_BOUND) - 0.0).abs() < f64::EPSILON);
    }

    // Tests densities strictly above the upper bound clamp to zero
    // Verified by relaxing the strict comparison
    #[test]
    fn test_above_upper_bound_clamps_to_zero() {
        assert!((scaled_prediction(UPPER_DENSITY_BOUND + 1e-9) - 0.0).abs() < f64::EPSILON);
        assert!((scaled_prediction(1.0) - 0.0).abs() < f64::EPSILON);
    }

    // Tests the map decreases monotonically across the ramp
    // Verified by negating the ramp slope
    #[test]
    fn test_ramp_is_monotonically_decreasing() {
        let samples = [0.05, 0.1, 0.2, 0.3, 0.4];
        for pair in samples.windows(2) {
            if let [lower, upper] = pair {
                assert!(scaled_prediction(*lower) > scaled_prediction(*upper));
            }
        }
    }

    // Tests the midpoint of the ramp scales linearly
    // Verified by bending the interpolation
    #[test]
    fn test_ramp_midpoint() {
        assert!((scaled_prediction(0.2) - 0.5).abs() < f64::EPSILON);
    }
}
