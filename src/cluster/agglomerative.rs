//! Single-linkage agglomerative clustering.
//!
//! # The Algorithm
//!
//! Start with one cluster per point. While more than `n_clusters` clusters remain:
//!
//! 1. Scan every pair `(i, j)`, `i < j`, for the smallest single-linkage distance
//!    (the earliest pair wins ties).
//! 2. Append the points of cluster `j` to cluster `i`.
//! 3. Remove cluster `j` and shift the later clusters down.
//!
//! Each step shrinks the collection by exactly one, so a run starting from `C` clusters
//! performs `C - n_clusters` steps. Merging into the lower index keeps every cluster
//! before `j` in place, which makes the output order deterministic.
//!
//! ## Complexity
//!
//! - **Time**: every step re-scans all pairs, `O(n^2)` point distances per step and
//!   `O(n^3)` overall for `n` points.
//! - **Space**: `O(n)`; points are moved between clusters, never copied twice.
//!
//! ## When to Use
//!
//! - Small to medium point sets where an exact, reproducible merge order matters.
//! - Elongated or chained groups (single linkage follows chains).
//!
//! For large inputs, an MST-based formulation is asymptotically faster; this driver keeps
//! the explicit cluster collection so callers can inspect each step.

use tracing::{debug, info, warn};

use super::container::{Cluster, CLUSTER_CHUNK};
use super::merge::merge_pair;
use super::nearest::find_nearest;
use super::point::Point;
use super::traits::Clustering;
use crate::error::{Error, Result};

/// Single-linkage agglomerative clustering.
#[derive(Debug, Clone)]
pub struct Agglomerative {
    /// Number of clusters at which merging stops.
    n_clusters: usize,
    /// Growth increment for clusters built by [`Clustering::fit`].
    growth_chunk: usize,
}

/// Record of one merge step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeStep {
    /// Index of the cluster that received the points (unchanged by the step).
    pub kept: usize,
    /// Index of the cluster that was merged and removed, relative to the collection
    /// before the step.
    pub removed: usize,
    /// Single-linkage distance between the two clusters.
    pub distance: f64,
    /// Size of the merged cluster.
    pub size: usize,
}

impl Agglomerative {
    /// Create a clusterer that merges until `n_clusters` clusters remain.
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            growth_chunk: CLUSTER_CHUNK,
        }
    }

    /// Set the target number of clusters.
    pub fn with_n_clusters(mut self, n_clusters: usize) -> Self {
        self.n_clusters = n_clusters;
        self
    }

    /// Set the growth increment for clusters created by [`Clustering::fit`].
    pub fn with_growth_chunk(mut self, growth_chunk: usize) -> Self {
        self.growth_chunk = growth_chunk;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.n_clusters == 0 {
            return Err(Error::InvalidParameter {
                name: "n_clusters",
                message: "must be at least 1",
            });
        }

        Ok(())
    }

    /// Only clusters built from points use `growth_chunk`; prepared collections keep their
    /// own, so this check belongs to the `fit` paths.
    fn validate_fit(&self) -> Result<()> {
        self.validate()?;

        if self.growth_chunk == 0 {
            return Err(Error::InvalidParameter {
                name: "growth_chunk",
                message: "must be at least 1",
            });
        }

        Ok(())
    }

    /// Merge an existing collection until `n_clusters` clusters remain.
    ///
    /// Every cluster must be non-empty. If the collection already has `n_clusters` or
    /// fewer clusters it is returned unchanged.
    pub fn run(&self, clusters: Vec<Cluster>) -> Result<Vec<Cluster>> {
        self.run_inner(clusters, None)
    }

    /// Like [`Agglomerative::run`], also returning every merge step in order.
    pub fn run_with_history(
        &self,
        clusters: Vec<Cluster>,
    ) -> Result<(Vec<Cluster>, Vec<MergeStep>)> {
        let mut history = Vec::new();
        let clusters = self.run_inner(clusters, Some(&mut history))?;
        Ok((clusters, history))
    }

    /// Cluster points, returning the final clusters and the merge history.
    pub fn fit_with_history(
        &self,
        points: &[Point],
    ) -> Result<(Vec<Cluster>, Vec<MergeStep>)> {
        self.validate_fit()?;
        self.run_with_history(self.singletons(points)?)
    }

    fn singletons(&self, points: &[Point]) -> Result<Vec<Cluster>> {
        points
            .iter()
            .map(|&p| Ok(Cluster::singleton(p)?.with_growth_chunk(self.growth_chunk)))
            .collect()
    }

    fn run_inner(
        &self,
        mut clusters: Vec<Cluster>,
        mut history: Option<&mut Vec<MergeStep>>,
    ) -> Result<Vec<Cluster>> {
        self.validate()?;
        debug_assert!(
            clusters.iter().all(|c| !c.is_empty()),
            "empty cluster in the initial collection"
        );

        let initial = clusters.len();
        if initial <= self.n_clusters {
            if initial < self.n_clusters {
                warn!(
                    clusters = initial,
                    target = self.n_clusters,
                    "target cluster count exceeds available clusters; nothing to merge"
                );
            }
            return Ok(clusters);
        }

        info!(clusters = initial, target = self.n_clusters, "starting agglomeration");

        while clusters.len() > self.n_clusters {
            let pair = find_nearest(&clusters);
            let before = clusters.len();
            let remaining = merge_pair(&mut clusters, pair.i, pair.j)?;
            debug_assert_eq!(remaining, before - 1);

            let size = clusters[pair.i].len();
            debug!(
                kept = pair.i,
                removed = pair.j,
                distance = pair.distance,
                size,
                remaining,
                "merged clusters"
            );

            if let Some(history) = history.as_deref_mut() {
                history.push(MergeStep {
                    kept: pair.i,
                    removed: pair.j,
                    distance: pair.distance,
                    size,
                });
            }
        }

        info!(
            clusters = clusters.len(),
            steps = initial - clusters.len(),
            "agglomeration finished"
        );
        Ok(clusters)
    }
}

impl Default for Agglomerative {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Clustering for Agglomerative {
    fn fit(&self, points: &[Point]) -> Result<Vec<Cluster>> {
        self.validate_fit()?;
        self.run(self.singletons(points)?)
    }

    fn n_clusters(&self) -> usize {
        self.n_clusters
    }
}
