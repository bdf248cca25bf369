use super::container::Cluster;
use super::point::Point;
use crate::error::Result;

/// Common interface for hard clustering of labeled points.
pub trait Clustering {
    /// Cluster the points and return the final clusters.
    ///
    /// Implementations must return every input point exactly once and must not alter the
    /// points themselves (ids included).
    fn fit(&self, points: &[Point]) -> Result<Vec<Cluster>>;

    /// Fit and return one cluster label per input point, in input order.
    ///
    /// Labels index into the cluster list that [`Clustering::fit`] would return.
    fn fit_predict(&self, points: &[Point]) -> Result<Vec<usize>> {
        // Re-label by position so duplicate ids still map back unambiguously.
        let indexed: Vec<Point> = points
            .iter()
            .enumerate()
            .map(|(i, p)| Point::new(i as i64, p.x, p.y))
            .collect();

        let clusters = self.fit(&indexed)?;
        let mut labels = vec![0; points.len()];
        for (label, cluster) in clusters.iter().enumerate() {
            for p in cluster {
                labels[p.id as usize] = label;
            }
        }
        Ok(labels)
    }

    /// The configured number of clusters.
    fn n_clusters(&self) -> usize;
}
