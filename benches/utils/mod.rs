pub mod other_impls;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use itree_pip::{Coordinate, Polygon, Rectangle};

//// Utility functions

/// A closed, star-shaped ring with n edges around the origin.
pub(crate) fn make_star(n: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut coords: Vec<Coordinate> = (0..n)
        .map(|i| {
            let theta = 2. * std::f64::consts::PI * (i as f64) / (n as f64);
            let radius = rng.gen_range(50., 100.);
            Coordinate::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect();
    coords.push(coords[0]);
    coords
}

/// A star with a smaller star cut out of the middle.
pub(crate) fn make_polygon(n: usize, seed: u64) -> Polygon {
    let hole: Vec<Coordinate> = make_star(n / 4 + 3, seed + 1)
        .into_iter()
        .map(|c| Coordinate::new(c.x / 5., c.y / 5.))
        .collect();
    Polygon::new(make_star(n, seed), vec![hole])
}

pub(crate) fn get_random_points(rect: Rectangle, n: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Coordinate::new(
            rng.gen_range(rect.x_min, rect.x_max),
            rng.gen_range(rect.y_min, rect.y_max),
        ));
    }

    results
}
