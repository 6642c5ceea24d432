mod point_in_polygon;
mod point_in_ring;
mod predicates;

pub use point_in_polygon::point_in_multipolygon;
pub use point_in_ring::{point_in_ring, point_in_ring_brute_force, Location};
pub use predicates::{
    contains, covered_by, covers, intersects, intersects_geometries, within,
};
