use crate::itree::RingIndex;
use crate::utils::{is_degenerate_segment, winding_number};
use crate::Coordinate;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    Inside,
    Outside,
    /// Exactly on an edge or vertex. This always wins over inside/outside.
    Boundary,
}

/// Locate the point relative to an indexed ring, using the winding number.
///
/// Subtrees whose y-interval doesn't contain the point are skipped, since
/// none of their edges can cross the point's horizontal or touch the point.
pub fn point_in_ring(ring: &RingIndex, point: Coordinate) -> Location {
    let root = match ring.root_index() {
        None => return Location::Outside,
        Some(root) => root,
    };

    let mut wn: i32 = 0;
    let mut stack = vec![root];
    while let Some(node_index) = stack.pop() {
        let node = ring.node(node_index);
        if !node.contains_value(point.y) {
            continue;
        }
        if node.is_leaf() {
            let (start, end) = ring.edge(node.edge_index);
            match winding_number(point, start, end) {
                None => return Location::Boundary,
                Some(w) => wn += w,
            }
        } else {
            // Reversed, so children are popped in ring order.
            stack.extend(node.children().rev());
        }
    }

    if wn == 0 {
        Location::Outside
    } else {
        Location::Inside
    }
}

/// Locate the point by checking every edge of the ring.
///
/// Applies exactly the same rules as point_in_ring, including skipping
/// degenerate edges, so the two always agree.
pub fn point_in_ring_brute_force(coords: &[Coordinate], point: Coordinate) -> Location {
    if coords.len() < crate::itree::MIN_RING_SIZE {
        return Location::Outside;
    }

    let mut wn: i32 = 0;
    for c in coords.windows(2) {
        if is_degenerate_segment(c[0], c[1]) {
            continue;
        }
        match winding_number(point, c[0], c[1]) {
            None => return Location::Boundary,
            Some(w) => wn += w,
        }
    }

    if wn == 0 {
        Location::Outside
    } else {
        Location::Inside
    }
}
