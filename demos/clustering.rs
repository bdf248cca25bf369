//! Single-linkage clustering on a small 2D dataset, with the merge history.

use agglom::cluster::{Agglomerative, Clustering, Point};

fn main() {
    // Three groups: two compact blobs and a chain.
    let points = vec![
        // Blob A (near origin)
        Point::new(1, 0.0, 0.0),
        Point::new(2, 1.0, 2.0),
        Point::new(3, 2.0, 1.0),
        // Blob B (near (50, 50))
        Point::new(4, 50.0, 50.0),
        Point::new(5, 51.0, 49.0),
        Point::new(6, 49.0, 51.0),
        // Chain along y = 100
        Point::new(7, 0.0, 100.0),
        Point::new(8, 4.0, 100.0),
        Point::new(9, 8.0, 100.0),
        Point::new(10, 12.0, 100.0),
    ];

    let model = Agglomerative::new(3);
    let (clusters, history) = model.fit_with_history(&points).unwrap();

    println!("=== Merge history ===");
    for (step, merge) in history.iter().enumerate() {
        println!(
            "  step {:2}: {} <- {} at distance {:6.3} (size {})",
            step + 1,
            merge.kept,
            merge.removed,
            merge.distance,
            merge.size
        );
    }

    println!("\n=== Clusters (k=3) ===");
    for (i, cluster) in clusters.iter().enumerate() {
        println!("  cluster {i}: {cluster}");
    }

    let labels = model.fit_predict(&points).unwrap();
    println!("\n=== Labels ===");
    for (p, label) in points.iter().zip(&labels) {
        println!("  point {:2} ({:5.1}, {:5.1}) => cluster {}", p.id, p.x, p.y, label);
    }
}
