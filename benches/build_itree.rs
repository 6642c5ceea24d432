mod utils;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use itree_pip::{IntervalTree, IntervalTreeOptions, RingIndex};
use utils::{make_polygon, make_star};

pub fn construction_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_itree");
    for size in [100, 1_000, 10_000].iter() {
        let ring = make_star(*size, 42);
        group.bench_with_input(BenchmarkId::new("ring_index", size), &ring, |b, ring| {
            b.iter(|| RingIndex::new(ring));
        });
        for degree in [4, 8, 16].iter() {
            let polygons = vec![make_polygon(*size, 42)];
            let options = IntervalTreeOptions { degree: *degree };
            group.bench_with_input(
                BenchmarkId::new(format!("interval_tree.{}", degree), size),
                &polygons,
                |b, polygons| {
                    b.iter(|| IntervalTree::from_polygons(polygons, options));
                },
            );
        }
        group.bench_with_input(BenchmarkId::new("build_rstar", size), &ring, |b, ring| {
            b.iter(|| utils::other_impls::build_rstar(ring));
        });
    }

    group.finish();
}

criterion_group!(benches, construction_benchmark);
criterion_main!(benches);
