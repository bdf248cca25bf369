use agglom::cluster::{find_nearest, singletons, Agglomerative, Clustering, Point};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let x = rng.random_range(0..=10000) as f32;
            let y = rng.random_range(0..=10000) as f32;
            Point::new(i as i64, x, y)
        })
        .collect()
}

fn bench_agglomerative(c: &mut Criterion) {
    let mut group = c.benchmark_group("agglomerative");

    let data = random_points(200, 42);

    group.bench_function("fit_n200_k10", |b| {
        b.iter(|| {
            let model = Agglomerative::new(10);
            model.fit(black_box(&data)).unwrap();
        })
    });

    let clusters = singletons(&random_points(500, 7)).unwrap();
    group.bench_function("find_nearest_n500", |b| {
        b.iter(|| find_nearest(black_box(&clusters)))
    });

    group.finish();
}

criterion_group!(benches, bench_agglomerative);
criterion_main!(benches);
