//! Exhaustive search for the closest pair of clusters.

use super::container::Cluster;
use super::distance::cluster_distance;

/// The closest pair found by [`find_nearest`]. Always `i < j`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPair {
    /// Lower index.
    pub i: usize,
    /// Higher index.
    pub j: usize,
    /// Single-linkage distance between the two clusters.
    pub distance: f64,
}

/// Find the pair `(i, j)`, `i < j`, with the smallest single-linkage distance.
///
/// Pairs are scanned in lexicographic `(i, j)` order and only a strictly smaller distance
/// replaces the current best, so the earliest pair wins ties.
///
/// # Panics
///
/// Panics if fewer than two clusters are given.
pub fn find_nearest(clusters: &[Cluster]) -> NearestPair {
    assert!(
        clusters.len() >= 2,
        "nearest-pair search needs at least two clusters, got {}",
        clusters.len()
    );

    let mut best = NearestPair {
        i: 0,
        j: 1,
        distance: f64::INFINITY,
    };

    for (i, a) in clusters.iter().enumerate() {
        for (j, b) in clusters.iter().enumerate().skip(i + 1) {
            let d = cluster_distance(a, b);
            if d < best.distance {
                best = NearestPair { i, j, distance: d };
            }
        }
    }

    best
}
