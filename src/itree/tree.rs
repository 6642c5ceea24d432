use super::ring_index::{RingIndex, DEFAULT_DEGREE, MIN_RING_SIZE};
use crate::errors::BuildError;
use crate::geometry::{Geometry, Polygon};
use crate::{Coordinate, Rectangle};
use log::{debug, trace};
use std::convert::TryFrom;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntervalTreeOptions {
    pub degree: usize,
}

impl Default for IntervalTreeOptions {
    fn default() -> Self {
        IntervalTreeOptions {
            degree: DEFAULT_DEGREE,
        }
    }
}

/// Ring indexes for every usable ring of a polygon or multipolygon.
///
/// Rings are stored in the order they are read off the geometry
/// (P0 shell, P0 holes, P1 shell, ...), and ring_counts records how many
/// consecutive rings belong to each polygon. The first ring of each group is
/// treated as the shell.
#[derive(Debug, Clone)]
pub struct IntervalTree {
    rings: Vec<RingIndex>,
    ring_counts: Vec<usize>,
    envelope: Rectangle,
}

impl IntervalTree {
    pub fn new_empty() -> Self {
        IntervalTree {
            rings: Vec::new(),
            ring_counts: Vec::new(),
            envelope: Rectangle::new_empty(),
        }
    }

    pub fn new(geom: &Geometry) -> Result<Self, BuildError> {
        IntervalTree::with_options(geom, IntervalTreeOptions::default())
    }

    pub fn with_options(geom: &Geometry, options: IntervalTreeOptions) -> Result<Self, BuildError> {
        match geom {
            Geometry::Polygon(poly) => Ok(IntervalTree::from_polygons(
                std::slice::from_ref(poly),
                options,
            )),
            Geometry::MultiPolygon(polys) => Ok(IntervalTree::from_polygons(polys, options)),
            _ => Err(BuildError::NotAPolygon { kind: geom.kind() }),
        }
    }

    pub fn from_polygons(polygons: &[Polygon], options: IntervalTreeOptions) -> Self {
        let mut tree = IntervalTree::new_empty();
        for poly in polygons {
            // Empty polygons don't get a group at all.
            if poly.is_empty() {
                continue;
            }
            let mut ring_count = 0;
            for ring in poly.rings() {
                if ring.len() < MIN_RING_SIZE {
                    trace!("Skipping ring with {} coordinates", ring.len());
                    continue;
                }
                tree.envelope.expand(Rectangle::of_coords(ring));
                tree.rings.push(RingIndex::with_degree(ring, options.degree));
                ring_count += 1;
            }
            tree.ring_counts.push(ring_count);
        }

        debug!(
            "Built interval tree: {} polygons, {} rings, {} nodes",
            tree.num_polygons(),
            tree.num_rings(),
            tree.rings.iter().map(|r| r.nodes().len()).sum::<usize>()
        );
        tree
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn num_polygons(&self) -> usize {
        self.ring_counts.len()
    }

    pub fn ring(&self, index: usize) -> &RingIndex {
        &self.rings[index]
    }

    pub fn ring_counts(&self) -> &[usize] {
        &self.ring_counts
    }

    /// Ring indexes grouped by polygon; the first of each group is the shell.
    pub fn polygons(&self) -> impl Iterator<Item = &[RingIndex]> + '_ {
        self.ring_counts.iter().scan(0, move |start, &count| {
            let group = &self.rings[*start..*start + count];
            *start += count;
            Some(group)
        })
    }

    pub fn envelope(&self) -> Rectangle {
        self.envelope
    }

    pub fn classify<IP: Into<Coordinate>>(&self, point: IP) -> crate::Location {
        crate::algorithms::point_in_multipolygon(self, point.into())
    }
}

impl TryFrom<&Geometry> for IntervalTree {
    type Error = BuildError;

    fn try_from(geom: &Geometry) -> Result<Self, Self::Error> {
        IntervalTree::new(geom)
    }
}

pub fn build_index(geom: Option<&Geometry>) -> Result<IntervalTree, BuildError> {
    match geom {
        None => Err(BuildError::MissingGeometry),
        Some(geom) => IntervalTree::new(geom),
    }
}
