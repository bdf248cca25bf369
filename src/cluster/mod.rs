//! Agglomerative clustering of labeled 2D points.
//!
//! ## Single Linkage
//!
//! The distance between two clusters is the distance between their closest members:
//!
//! ```text
//! d(A, B) = min_{a ∈ A, b ∈ B} ||a - b||
//! ```
//!
//! Agglomerative clustering starts from singletons and repeatedly merges the closest pair
//! of clusters. With single linkage, two groups join as soon as any of their points are
//! close, so chains of nearby points end up in one cluster.
//!
//! ## Building Blocks
//!
//! - [`Cluster`]: an owned, ordered point container with fixed-increment growth.
//! - [`point_distance`] / [`cluster_distance`]: Euclidean and single-linkage distances.
//! - [`find_nearest`]: exhaustive closest-pair search with a deterministic tie break.
//! - [`merge`] / [`remove_and_compact`]: move points between clusters and drop the
//!   emptied slot without leaving holes.
//! - [`Agglomerative`]: the driver loop tying these together.
//!
//! ## Usage
//!
//! ```rust
//! use agglom::cluster::{Agglomerative, Clustering, Point};
//!
//! let points = vec![
//!     Point::new(1, 0.0, 0.0),
//!     Point::new(2, 0.0, 1.0),
//!     Point::new(3, 10.0, 10.0),
//!     Point::new(4, 10.0, 11.0),
//! ];
//!
//! let clusters = Agglomerative::new(2).fit(&points).unwrap();
//! assert_eq!(clusters.len(), 2);
//! assert_eq!(clusters[0].points(), &points[..2]);
//!
//! let labels = Agglomerative::new(2).fit_predict(&points).unwrap();
//! assert_eq!(labels, vec![0, 0, 1, 1]);
//! ```

mod agglomerative;
mod container;
mod distance;
mod merge;
mod nearest;
mod point;
mod traits;

pub use agglomerative::{Agglomerative, MergeStep};
pub use container::{singletons, Cluster, CLUSTER_CHUNK};
pub use distance::{cluster_distance, point_distance};
pub use merge::{merge, remove_and_compact};
pub use nearest::{find_nearest, NearestPair};
pub use point::Point;
pub use traits::Clustering;
