//! Tests for local outlier factor scoring and contamination-capped removal

#[cfg(test)]
mod tests {
    use patternscore::analysis::outliers::{filter_outliers, local_outlier_factors};
    use patternscore::io::configuration::{CONTAMINATION, LOF_NEIGHBORS};

    fn tight_cluster(count: usize) -> Vec<f64> {
        (0..count).map(|i| 1.0 + i as f64 * 0.1).collect()
    }

    // Tests empty input passes through as empty output
    // Verified by returning an error on empty sets
    #[test]
    fn test_empty_input_yields_empty_output() {
        let survivors = filter_outliers(&[], CONTAMINATION, LOF_NEIGHBORS);
        assert!(survivors.is_empty());
    }

    // Tests sets below the minimum neighborhood size pass through unchanged
    // Verified by lowering the minimum size gate
    #[test]
    fn test_small_input_is_returned_unchanged() {
        let values = vec![3.0, 1.0, 2.0];
        let survivors = filter_outliers(&values, CONTAMINATION, LOF_NEIGHBORS);
        assert_eq!(survivors, values);

        let boundary = tight_cluster(LOF_NEIGHBORS + 1);
        let survivors = filter_outliers(&boundary, CONTAMINATION, LOF_NEIGHBORS);
        assert_eq!(survivors, boundary);
    }

    // Tests a far outlier against a tight cluster is removed
    // Verified by raising the anomaly cutoff out of reach
    #[test]
    fn test_far_outlier_is_removed() {
        let mut values = tight_cluster(24);
        values.push(100.0);

        let survivors = filter_outliers(&values, CONTAMINATION, LOF_NEIGHBORS);

        assert_eq!(survivors.len(), 24);
        assert!(survivors.iter().all(|&v| v < 50.0));
    }

    // Tests survivors keep their input order
    // Verified by sorting the survivor list
    #[test]
    fn test_survivors_preserve_input_order() {
        let mut values = vec![100.0];
        values.extend(tight_cluster(24));

        let survivors = filter_outliers(&values, CONTAMINATION, LOF_NEIGHBORS);

        assert_eq!(survivors, tight_cluster(24));
    }

    // Tests a uniformly dense set loses no points
    // Verified by forcing removal of the top-scored points
    #[test]
    fn test_uniform_cluster_is_untouched() {
        let values = tight_cluster(50);
        let survivors = filter_outliers(&values, CONTAMINATION, LOF_NEIGHBORS);
        assert_eq!(survivors, values);
    }

    // Tests zero contamination disables removal entirely
    // Verified by ignoring the allowed-removal budget
    #[test]
    fn test_zero_contamination_removes_nothing() {
        let mut values = tight_cluster(24);
        values.push(100.0);

        let survivors = filter_outliers(&values, 0.0, LOF_NEIGHBORS);
        assert_eq!(survivors.len(), 25);
    }

    // Tests removal never exceeds the contamination budget
    // Verified by removing every point above the cutoff
    #[test]
    fn test_removal_respects_contamination_cap() {
        // Five far points, but a 10% budget on 30 points allows only three
        let mut values = tight_cluster(25);
        values.extend([200.0, 400.0, 600.0, 800.0, 1000.0]);

        let survivors = filter_outliers(&values, 0.1, LOF_NEIGHBORS);
        assert!(survivors.len() >= values.len() - 3);
    }

    // Tests score vector length and the dense-tie degenerate case
    // Verified by scoring duplicate clusters as outliers
    #[test]
    fn test_scores_for_identical_values_are_one() {
        let values = vec![2.5; 30];
        let scores = local_outlier_factors(&values, LOF_NEIGHBORS);

        assert_eq!(scores.len(), 30);
        assert!(scores.iter().all(|&s| (s - 1.0).abs() < f64::EPSILON));
    }

    // Tests an isolated point scores far above its dense neighbors
    // Verified by inverting the density ratio
    #[test]
    fn test_outlier_scores_higher_than_inliers() {
        let mut values = tight_cluster(24);
        values.push(100.0);

        let scores = local_outlier_factors(&values, LOF_NEIGHBORS);

        let outlier_score = scores.last().copied().unwrap_or(0.0);
        let max_inlier = scores
            .iter()
            .take(24)
            .copied()
            .fold(0.0_f64, f64::max);
        assert!(
            outlier_score > max_inlier * 2.0,
            "outlier {outlier_score} should dominate inliers (max {max_inlier})"
        );
    }
}
