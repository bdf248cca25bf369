//! Single-linkage agglomerative clustering.
//!
//! `agglom` groups labeled 2D points bottom-up: every point starts as its own cluster and
//! the two closest clusters are merged until a target number of clusters remains.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`Cluster`], a growable point container with fixed-increment growth
//! - single-linkage distances and the nearest-pair search
//! - [`Agglomerative`], the driver loop (also usable through [`Clustering`])
//!
//! [`io`] reads and writes the flat text representation used by the `agglom` binary.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod io;

pub use cluster::{
    cluster_distance, find_nearest, merge, point_distance, remove_and_compact, singletons,
    Agglomerative, Cluster, Clustering, MergeStep, NearestPair, Point, CLUSTER_CHUNK,
};
pub use error::{Error, Result};
