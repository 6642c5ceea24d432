use itree_pip::utils::winding_number;
use itree_pip::{Coordinate, Location};
use rstar::{RTree, RTreeObject, AABB};

pub struct Segment {
    start: Coordinate,
    end: Coordinate,
}

impl RTreeObject for Segment {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.start.x, self.start.y], [self.end.x, self.end.y])
    }
}

pub(crate) fn build_rstar(coords: &[Coordinate]) -> RTree<Segment> {
    RTree::bulk_load(
        coords
            .windows(2)
            .filter(|w| w[0] != w[1])
            .map(|w| Segment {
                start: w[0],
                end: w[1],
            })
            .collect(),
    )
}

pub(crate) fn point_in_ring_rstar(point: Coordinate, rtree: &RTree<Segment>) -> Location {
    let mut wn: i32 = 0;

    // Only segments spanning the point's horizontal can matter.
    let line = AABB::from_corners([f64::NEG_INFINITY, point.y], [f64::INFINITY, point.y]);
    for seg in rtree.locate_in_envelope_intersecting(&line) {
        match winding_number(point, seg.start, seg.end) {
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
