//! Characteristic radius estimation from surviving center distances

/// Average the largest surviving distances into a representative radius
///
/// Takes the `top_count` largest values (all of them, if fewer exist) and
/// returns their arithmetic mean. An empty set estimates a radius of zero;
/// downstream stages treat that as "no signal" rather than an error.
pub fn estimate_radius(distances: &[f64], top_count: usize) -> f64 {
    if distances.is_empty() || top_count == 0 {
        return 0.0;
    }

    let mut sorted = distances.to_vec();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    let take = top_count.min(sorted.len());
    let sum: f64 = sorted.iter().take(take).sum();
    sum / take as f64
}
