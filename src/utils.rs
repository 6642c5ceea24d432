use crate::Coordinate;

/// Which side of the directed segment start->end the point lies on.
///
/// Positive when the point is to the left, negative to the right, and zero
/// when it is on the infinite line through the segment.
pub fn segment_side(start: Coordinate, end: Coordinate, point: Coordinate) -> f64 {
    (end - start).cross(point - start)
}

/// Check the point against the segment's bounding box.
///
/// NB: This doesn't check that the point is on the line; the caller should
/// have already established that with segment_side.
pub(crate) fn within_segment_bounds(start: Coordinate, end: Coordinate, point: Coordinate) -> bool {
    start.x.min(end.x) <= point.x
        && point.x <= start.x.max(end.x)
        && start.y.min(end.y) <= point.y
        && point.y <= start.y.max(end.y)
}

/// Segments which can't be indexed: zero length, or any non-finite ordinate.
pub(crate) fn is_degenerate_segment(start: Coordinate, end: Coordinate) -> bool {
    start == end || !start.is_finite() || !end.is_finite()
}

/// Contribution of the segment start->end to the winding number around
/// point, or None if the point lies on the segment.
///
/// Crossings use half-open intervals in y (start inclusive, end exclusive),
/// so horizontal segments and shared vertices are counted exactly once.
pub fn winding_number(point: Coordinate, start: Coordinate, end: Coordinate) -> Option<i32> {
    let side = segment_side(start, end, point);

    if side == 0. && within_segment_bounds(start, end, point) {
        return None;
    }

    if start.y <= point.y && point.y < end.y && side > 0. {
        // Upward crossing
        Some(1)
    } else if end.y <= point.y && point.y < start.y && side < 0. {
        // Downward crossing
        Some(-1)
    } else {
        Some(0)
    }
}
