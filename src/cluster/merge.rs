//! Moving points between clusters and compacting the collection.

use super::container::Cluster;
use crate::error::Result;

/// Append every point of `source` to `target`, in `source` order.
///
/// `source` is not released; the caller removes it afterwards with
/// [`remove_and_compact`]. Storage for all of `source` is reserved up front, so on
/// failure `target` is left unmodified.
pub fn merge(target: &mut Cluster, source: &Cluster) -> Result<()> {
    target.reserve_chunks(source.len())?;
    for &p in source {
        target.push(p)?;
    }
    Ok(())
}

/// Release `clusters[idx]` and shift every later cluster down by one.
///
/// Relative order of the remaining clusters is preserved. Returns the new length.
///
/// # Panics
///
/// Panics if `idx` is out of range.
pub fn remove_and_compact(clusters: &mut Vec<Cluster>, idx: usize) -> usize {
    assert!(
        idx < clusters.len(),
        "cluster index {idx} out of range for {} clusters",
        clusters.len()
    );

    let mut removed = clusters.remove(idx);
    removed.clear();
    clusters.len()
}

/// One agglomeration step: merge `clusters[j]` into `clusters[i]`, then remove `j`.
///
/// Requires `i < j`. The lower index keeps the merged points so that clusters before `j`
/// do not move. Returns the new length.
pub(crate) fn merge_pair(clusters: &mut Vec<Cluster>, i: usize, j: usize) -> Result<usize> {
    assert!(i < j, "merge_pair requires i < j (got {i}, {j})");
    assert!(
        j < clusters.len(),
        "cluster index {j} out of range for {} clusters",
        clusters.len()
    );

    let (head, tail) = clusters.split_at_mut(j);
    merge(&mut head[i], &tail[0])?;
    Ok(remove_and_compact(clusters, j))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::Point;

    fn cluster(ids: &[i64]) -> Cluster {
        Cluster::from_points(ids.iter().map(|&id| Point::new(id, id as f32, 0.0))).unwrap()
    }

    fn ids(c: &Cluster) -> Vec<i64> {
        c.iter().map(|p| p.id).collect()
    }

    #[test]
    fn merge_appends_in_source_order() {
        let mut target = cluster(&[1, 2]);
        let source = cluster(&[5, 3, 4]);
        merge(&mut target, &source).unwrap();
        assert_eq!(ids(&target), vec![1, 2, 5, 3, 4]);
        // Source is untouched until removal.
        assert_eq!(ids(&source), vec![5, 3, 4]);
    }

    #[test]
    fn merge_grows_past_chunk() {
        let mut target = cluster(&(0..9).collect::<Vec<_>>());
        let source = cluster(&(9..30).collect::<Vec<_>>());
        merge(&mut target, &source).unwrap();
        assert_eq!(ids(&target), (0..30).collect::<Vec<_>>());
        assert!(target.len() <= target.capacity());
    }

    #[test]
    fn failed_merge_leaves_target_unmodified() {
        let mut target = Cluster::singleton(Point::new(1, 0.0, 0.0))
            .unwrap()
            .with_growth_chunk(usize::MAX);
        let source = cluster(&[2, 3]);

        let err = merge(&mut target, &source).unwrap_err();
        assert!(matches!(err, crate::Error::OutOfMemory { .. }));
        assert_eq!(ids(&target), vec![1]);
        assert_eq!(target.capacity(), 1);
    }

    #[test]
    fn merge_grows_in_whole_chunks() {
        let mut target = cluster(&[0]);
        assert_eq!(target.capacity(), 10);
        merge(&mut target, &cluster(&(1..15).collect::<Vec<_>>())).unwrap();
        assert_eq!(target.capacity(), 20);
    }

    #[test]
    fn remove_shifts_later_clusters_down() {
        let mut clusters = vec![cluster(&[0]), cluster(&[1]), cluster(&[2]), cluster(&[3])];
        let n = remove_and_compact(&mut clusters, 1);
        assert_eq!(n, 3);
        let firsts: Vec<i64> = clusters.iter().map(|c| c.points()[0].id).collect();
        assert_eq!(firsts, vec![0, 2, 3]);
    }

    #[test]
    fn remove_last() {
        let mut clusters = vec![cluster(&[0]), cluster(&[1])];
        assert_eq!(remove_and_compact(&mut clusters, 1), 1);
        assert_eq!(ids(&clusters[0]), vec![0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn remove_out_of_range_panics() {
        let mut clusters = vec![cluster(&[0])];
        remove_and_compact(&mut clusters, 1);
    }

    #[test]
    fn merge_pair_keeps_lower_index() {
        let mut clusters = vec![cluster(&[0]), cluster(&[1]), cluster(&[2]), cluster(&[3])];
        let n = merge_pair(&mut clusters, 1, 3).unwrap();
        assert_eq!(n, 3);
        assert_eq!(ids(&clusters[0]), vec![0]);
        assert_eq!(ids(&clusters[1]), vec![1, 3]);
        assert_eq!(ids(&clusters[2]), vec![2]);
    }
}
