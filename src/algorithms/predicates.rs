use super::point_in_polygon::point_in_multipolygon;
use super::point_in_ring::Location;
use crate::errors::PredicateError;
use crate::geometry::Geometry;
use crate::itree::IntervalTree;
use crate::Coordinate;

/// The locations of each member of a puntal geometry.
///
/// An empty geometry has no members. Anything that isn't a point or
/// multipoint is an error.
fn point_locations<'a>(
    tree: &'a IntervalTree,
    points: &'a Geometry,
) -> Result<impl Iterator<Item = Location> + 'a, PredicateError> {
    let members: &[Coordinate] = match points {
        Geometry::Empty => &[],
        Geometry::Point(point) => std::slice::from_ref(point),
        Geometry::MultiPoint(points) => points,
        _ => {
            return Err(PredicateError::NotPoints {
                kind: points.kind(),
            })
        }
    };
    Ok(members
        .iter()
        .map(move |&point| point_in_multipolygon(tree, point)))
}

/// Is every point in the polygons, with at least one strictly inside?
///
/// Points on the boundary are allowed as long as one point is in the
/// interior.
pub fn contains(tree: &IntervalTree, points: &Geometry) -> Result<bool, PredicateError> {
    let mut found_inside = false;
    for location in point_locations(tree, points)? {
        match location {
            Location::Outside => return Ok(false),
            Location::Inside => found_inside = true,
            Location::Boundary => {}
        }
    }
    Ok(found_inside)
}

pub fn within(points: &Geometry, tree: &IntervalTree) -> Result<bool, PredicateError> {
    contains(tree, points)
}

pub fn covers(tree: &IntervalTree, points: &Geometry) -> Result<bool, PredicateError> {
    if let Geometry::Empty = points {
        return Ok(false);
    }
    let mut locations = point_locations(tree, points)?;
    Ok(locations.all(|location| location != Location::Outside))
}

pub fn covered_by(points: &Geometry, tree: &IntervalTree) -> Result<bool, PredicateError> {
    covers(tree, points)
}

/// Does any point touch the polygons, either inside or on the boundary?
pub fn intersects(tree: &IntervalTree, points: &Geometry) -> Result<bool, PredicateError> {
    let mut locations = point_locations(tree, points)?;
    Ok(locations.any(|location| location != Location::Outside))
}

/// Intersection test for a polygon and a point in either order, indexing
/// the polygonal argument on the fly.
pub fn intersects_geometries(a: &Geometry, b: &Geometry) -> Result<bool, PredicateError> {
    if a.is_empty() || b.is_empty() {
        return Ok(false);
    }

    let (polygons, points) = if a.is_polygonal() && b.is_puntal() {
        (a, b)
    } else if b.is_polygonal() && a.is_puntal() {
        (b, a)
    } else {
        return Err(PredicateError::Unsupported {
            first: a.kind(),
            second: b.kind(),
        });
    };

    let tree = IntervalTree::new(polygons)?;
    intersects(&tree, points)
}
