use super::point_in_ring::{point_in_ring, Location};
use crate::itree::IntervalTree;
use crate::Coordinate;

/// Locate a point relative to the polygons of an interval tree.
///
/// Each polygon is tried in turn: the shell first, then its holes. A point
/// inside a hole may still be inside a later polygon, so the search goes on.
/// The first boundary hit ends the search.
pub fn point_in_multipolygon(tree: &IntervalTree, point: Coordinate) -> Location {
    if !point.is_finite() || !tree.envelope().contains(point) {
        return Location::Outside;
    }

    for rings in tree.polygons() {
        let (shell, holes) = match rings.split_first() {
            None => continue,
            Some(split) => split,
        };

        match point_in_ring(shell, point) {
            Location::Boundary => return Location::Boundary,
            Location::Outside => continue,
            Location::Inside => {}
        }

        let mut in_hole = false;
        for hole in holes {
            match point_in_ring(hole, point) {
                Location::Boundary => return Location::Boundary,
                Location::Inside => {
                    in_hole = true;
                    break;
                }
                Location::Outside => {}
            }
        }
        if !in_hole {
            return Location::Inside;
        }
    }

    Location::Outside
}
