mod utils;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use itree_pip::algorithms::{point_in_ring, point_in_ring_brute_force};
use itree_pip::{classify, IntervalTree, RingIndex};
use utils::{get_random_points, make_polygon, make_star};

pub fn point_in_polygon_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_in_polygon");

    for size in [100, 1_000, 10_000].iter() {
        let ring = make_star(*size, 342);
        let index = RingIndex::new(&ring);
        let rstar = utils::other_impls::build_rstar(&ring);
        let polygons = vec![make_polygon(*size, 342)];
        let tree = IntervalTree::from_polygons(&polygons, Default::default());
        let query_points = get_random_points(tree.envelope(), 1000, 342);

        group.bench_function(BenchmarkId::new("itree_ring", size), |b| {
            b.iter(|| {
                for &point in &query_points {
                    black_box(point_in_ring(&index, point));
                }
            })
        });
        group.bench_function(BenchmarkId::new("brute_force_ring", size), |b| {
            b.iter(|| {
                for &point in &query_points {
                    black_box(point_in_ring_brute_force(&ring, point));
                }
            })
        });
        group.bench_function(BenchmarkId::new("rstar_ring", size), |b| {
            b.iter(|| {
                for &point in &query_points {
                    black_box(utils::other_impls::point_in_ring_rstar(point, &rstar));
                }
            })
        });
        group.bench_function(BenchmarkId::new("itree_polygon_with_hole", size), |b| {
            b.iter(|| {
                for &point in &query_points {
                    black_box(classify(&tree, point));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, point_in_polygon_benchmark);
criterion_main!(benches);
