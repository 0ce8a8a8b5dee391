//! Local outlier factor filtering over one-dimensional distance sets
//!
//! Flags points whose local neighborhood density is substantially lower than
//! that of their neighbors. Working in one dimension lets the k-nearest
//! neighbors of each point be found with an expanding window over the sorted
//! values instead of a full pairwise scan.

use crate::io::configuration::OUTLIER_SCORE_CUTOFF;

/// Neighbor positions and the k-distance for one point in sorted order
struct Neighborhood {
    members: Vec<usize>,
    k_distance: f64,
}

// Exact kNN in sorted order: each step takes the nearest remaining candidate
// from either side, so picked distances are non-decreasing and the last pick
// is the k-distance. Ties resolve toward the left for determinism.
fn nearest_neighbors(sorted: &[f64], position: usize, k: usize) -> Neighborhood {
    let n = sorted.len();
    let here = sorted.get(position).copied().unwrap_or(0.0);

    let mut left = position;
    let mut right = position;
    let mut members = Vec::with_capacity(k);
    let mut k_distance = 0.0;

    for _ in 0..k {
        let left_gap = if left > 0 {
            sorted
                .get(left - 1)
                .map_or(f64::INFINITY, |v| here - v)
        } else {
            f64::INFINITY
        };
        let right_gap = if right + 1 < n {
            sorted
                .get(right + 1)
                .map_or(f64::INFINITY, |v| v - here)
        } else {
            f64::INFINITY
        };

        if left_gap <= right_gap {
            if left == 0 {
                break;
            }
            left -= 1;
            members.push(left);
            k_distance = left_gap;
        } else {
            right += 1;
            members.push(right);
            k_distance = right_gap;
        }
    }

    Neighborhood {
        members,
        k_distance,
    }
}

fn local_reachability_density(
    sorted: &[f64],
    neighborhoods: &[Neighborhood],
    position: usize,
) -> f64 {
    let here = sorted.get(position).copied().unwrap_or(0.0);
    let Some(neighborhood) = neighborhoods.get(position) else {
        return f64::INFINITY;
    };

    let mut reach_sum = 0.0;
    for &member in &neighborhood.members {
        let there = sorted.get(member).copied().unwrap_or(0.0);
        let member_k_distance = neighborhoods
            .get(member)
            .map_or(0.0, |nb| nb.k_distance);
        reach_sum += (here - there).abs().max(member_k_distance);
    }

    if reach_sum <= 0.0 {
        // All neighbors coincide with this point; density is unbounded
        f64::INFINITY
    } else {
        neighborhood.members.len() as f64 / reach_sum
    }
}

/// Compute the local outlier factor of every value, in input order
///
/// Scores near one indicate a point as dense as its neighborhood; scores
/// well above one indicate an anomalously sparse neighborhood. Inputs with
/// fewer than `neighbors + 2` points score uniformly one, since no
/// meaningful neighborhood comparison exists.
pub fn local_outlier_factors(values: &[f64], neighbors: usize) -> Vec<f64> {
    let n = values.len();
    if n < neighbors + 2 {
        return vec![1.0; n];
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        let va = values.get(a).copied().unwrap_or(0.0);
        let vb = values.get(b).copied().unwrap_or(0.0);
        va.partial_cmp(&vb).unwrap_or(std::cmp::Ordering::Equal)
    });
    let sorted: Vec<f64> = order
        .iter()
        .map(|&i| values.get(i).copied().unwrap_or(0.0))
        .collect();

    let neighborhoods: Vec<Neighborhood> = (0..n)
        .map(|i| nearest_neighbors(&sorted, i, neighbors))
        .collect();
    let densities: Vec<f64> = (0..n)
        .map(|i| local_reachability_density(&sorted, &neighborhoods, i))
        .collect();

    let mut scores = vec![1.0; n];
    for (position, neighborhood) in neighborhoods.iter().enumerate() {
        let own_density = densities.get(position).copied().unwrap_or(f64::INFINITY);

        let score = if own_density.is_infinite() || neighborhood.members.is_empty() {
            // A zero-spread cluster is maximally dense, never an outlier
            1.0
        } else {
            let density_sum: f64 = neighborhood
                .members
                .iter()
                .map(|&m| densities.get(m).copied().unwrap_or(0.0))
                .sum();
            density_sum / neighborhood.members.len() as f64 / own_density
        };

        let original = order.get(position).copied().unwrap_or(0);
        if let Some(slot) = scores.get_mut(original) {
            *slot = score;
        }
    }

    scores
}

/// Remove values whose local density marks them as spatial outliers
///
/// At most `floor(contamination * n)` points are discarded, and only those
/// whose local outlier factor exceeds the anomaly cutoff; a set whose points
/// are all similarly dense passes through intact. Survivors keep their input
/// order. Empty input and input below the minimum neighborhood size return
/// unchanged.
pub fn filter_outliers(values: &[f64], contamination: f64, neighbors: usize) -> Vec<f64> {
    let n = values.len();
    if n < neighbors + 2 {
        return values.to_vec();
    }

    let allowed = (contamination * n as f64).floor() as usize;
    if allowed == 0 {
        return values.to_vec();
    }

    let scores = local_outlier_factors(values, neighbors);

    let mut ranked: Vec<usize> = (0..n).collect();
    ranked.sort_by(|&a, &b| {
        let sa = scores.get(a).copied().unwrap_or(1.0);
        let sb = scores.get(b).copied().unwrap_or(1.0);
        sb.partial_cmp(&sa)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });

    let mut discard = vec![false; n];
    for &index in ranked.iter().take(allowed) {
        if scores.get(index).copied().unwrap_or(1.0) > OUTLIER_SCORE_CUTOFF {
            if let Some(slot) = discard.get_mut(index) {
                *slot = true;
            }
        }
    }

    values
        .iter()
        .enumerate()
        .filter(|(i, _)| !discard.get(*i).copied().unwrap_or(false))
        .map(|(_, &v)| v)
        .collect()
}
