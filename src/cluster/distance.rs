//! Point and single-linkage cluster distances.

use super::container::Cluster;
use super::point::Point;

/// Euclidean distance between two points.
///
/// Computed in `f64` so that integral coordinates in the accepted input range produce
/// exact squared sums; ties between equal distances are therefore reproducible.
#[inline]
pub fn point_distance(a: &Point, b: &Point) -> f64 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    (dx * dx + dy * dy).sqrt()
}

/// Single-linkage distance: the minimum [`point_distance`] over all cross pairs.
///
/// Both clusters must be non-empty. Runs in `O(|a| * |b|)`.
pub fn cluster_distance(a: &Cluster, b: &Cluster) -> f64 {
    debug_assert!(!a.is_empty(), "distance query on an empty cluster");
    debug_assert!(!b.is_empty(), "distance query on an empty cluster");

    let mut best = f64::INFINITY;
    for p in a {
        for q in b {
            let d = point_distance(p, q);
            if d < best {
                best = d;
            }
        }
    }
    best
}
