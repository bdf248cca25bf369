//! Growable point storage for a single cluster.
//!
//! A [`Cluster`] owns its points and tracks an explicit capacity. When a push finds the
//! storage full, the capacity grows by a fixed chunk ([`CLUSTER_CHUNK`] unless configured
//! otherwise) instead of doubling. Clusters only grow during merges, and most merges add a
//! handful of points, so the fixed increment keeps the reserved memory close to the
//! actual size.

use std::fmt;

use super::point::Point;
use crate::error::{Error, Result};

/// Default number of slots added each time a full cluster grows.
pub const CLUSTER_CHUNK: usize = 10;

/// An ordered, owned collection of points.
///
/// Points keep their insertion order. `len() <= capacity()` holds at all times.
#[derive(Debug)]
pub struct Cluster {
    points: Vec<Point>,
    /// Reserved slots; `points` always has room for at least this many.
    capacity: usize,
    growth_chunk: usize,
}

impl Cluster {
    /// Create an empty cluster with no reserved storage.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            capacity: 0,
            growth_chunk: CLUSTER_CHUNK,
        }
    }

    /// Create an empty cluster with `capacity` reserved slots.
    ///
    /// A capacity of 0 is valid and defers allocation until the first push.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut cluster = Self::new();
        cluster.grow_to(capacity)?;
        Ok(cluster)
    }

    /// Create a cluster holding exactly one point, with capacity 1.
    pub fn singleton(point: Point) -> Result<Self> {
        let mut cluster = Self::with_capacity(1)?;
        cluster.push(point)?;
        Ok(cluster)
    }

    /// Build a cluster by pushing every point in order.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Result<Self> {
        let mut cluster = Self::new();
        for p in points {
            cluster.push(p)?;
        }
        Ok(cluster)
    }

    /// Set the growth increment used when the cluster is full.
    ///
    /// A chunk of 0 is treated as 1 so that a push can always make progress.
    pub fn with_growth_chunk(mut self, chunk: usize) -> Self {
        self.growth_chunk = chunk.max(1);
        self
    }

    /// Ensure at least `new_capacity` reserved slots. Never shrinks.
    ///
    /// On allocation failure the cluster is left unmodified and
    /// [`Error::OutOfMemory`] is returned.
    pub fn grow_to(&mut self, new_capacity: usize) -> Result<()> {
        if self.capacity >= new_capacity {
            return Ok(());
        }

        self.points
            .try_reserve_exact(new_capacity - self.points.len())
            .map_err(|_| Error::OutOfMemory {
                requested: new_capacity,
            })?;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Append a point, growing by one chunk if the cluster is full.
    pub fn push(&mut self, point: Point) -> Result<()> {
        if self.points.len() >= self.capacity {
            let requested = self
                .capacity
                .checked_add(self.growth_chunk)
                .ok_or(Error::OutOfMemory {
                    requested: usize::MAX,
                })?;
            self.grow_to(requested)?;
        }
        debug_assert!(self.points.len() < self.capacity);

        self.points.push(point);
        Ok(())
    }

    /// Grow, in whole chunks, until `additional` more points fit without reallocating.
    ///
    /// Ends at the same capacity as pushing the points one by one would. On failure the
    /// cluster is left unmodified.
    pub fn reserve_chunks(&mut self, additional: usize) -> Result<()> {
        let needed = self.points.len().checked_add(additional).ok_or(Error::OutOfMemory {
            requested: usize::MAX,
        })?;
        if needed <= self.capacity {
            return Ok(());
        }

        let chunks = (needed - self.capacity).div_ceil(self.growth_chunk);
        let requested = chunks
            .checked_mul(self.growth_chunk)
            .and_then(|extra| self.capacity.checked_add(extra))
            .ok_or(Error::OutOfMemory {
                requested: usize::MAX,
            })?;
        self.grow_to(requested)
    }

    /// Release the storage and reset size and capacity to zero.
    ///
    /// Calling this on an already cleared cluster is a no-op.
    pub fn clear(&mut self) {
        self.points = Vec::new();
        self.capacity = 0;
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if the cluster holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of reserved slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Growth increment applied when the cluster is full.
    pub fn growth_chunk(&self) -> usize {
        self.growth_chunk
    }

    /// The points, in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over the points in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Consume the cluster and return its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

/// The clone reserves the same capacity as the original, so pushes into it stay on the
/// fallible growth path.
impl Clone for Cluster {
    fn clone(&self) -> Self {
        let mut points = Vec::with_capacity(self.capacity);
        points.extend_from_slice(&self.points);
        Self {
            points,
            capacity: self.capacity,
            growth_chunk: self.growth_chunk,
        }
    }
}

impl Default for Cluster {
    fn default() -> Self {
        Self::new()
    }
}

/// Two clusters are equal when they hold the same points in the same order; reserved
/// capacity is ignored.
impl PartialEq for Cluster {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl<'a> IntoIterator for &'a Cluster {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Formats the points space separated, e.g. `1[0,0] 2[0,1]`.
impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

/// Wrap every point in its own cluster, preserving input order.
pub fn singletons(points: &[Point]) -> Result<Vec<Cluster>> {
    points.iter().map(|&p| Cluster::singleton(p)).collect()
}
