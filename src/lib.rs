mod coordinate;
mod geometry;
mod itree;
mod rectangle;

pub mod algorithms;
pub mod errors;
pub mod from_wkt;
pub mod utils;

pub use crate::algorithms::Location;
pub use crate::itree::{
    build_index, IntervalNode, IntervalTree, IntervalTreeOptions, RingIndex, DEFAULT_DEGREE,
};
pub use coordinate::Coordinate;
pub use geometry::{Geometry, Polygon};
pub use rectangle::Rectangle;

pub fn classify(tree: &IntervalTree, point: Coordinate) -> Location {
    algorithms::point_in_multipolygon(tree, point)
}
