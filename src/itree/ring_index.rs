use super::node::IntervalNode;
use crate::utils::is_degenerate_segment;
use crate::Coordinate;

pub const DEFAULT_DEGREE: usize = 4;

/// Fewest coordinates a closed ring can have: three distinct plus the
/// closing repeat of the first.
pub const MIN_RING_SIZE: usize = 4;

/// A packed interval tree over the y-extent of a ring's edges.
///
/// Leaves come first in the arena, in ring order, then each level of
/// parents; the root is the last node. The ring's coordinates are copied in,
/// so the index doesn't borrow from the geometry it was built from.
#[derive(Debug, Clone)]
pub struct RingIndex {
    degree: usize,
    num_leaves: usize,
    height: usize,
    nodes: Vec<IntervalNode>,
    coords: Vec<Coordinate>,
}

impl RingIndex {
    pub fn new_empty() -> Self {
        RingIndex {
            degree: DEFAULT_DEGREE,
            num_leaves: 0,
            height: 0,
            nodes: Vec::new(),
            coords: Vec::new(),
        }
    }

    pub fn new(coords: &[Coordinate]) -> Self {
        RingIndex::with_degree(coords, DEFAULT_DEGREE)
    }

    pub fn with_degree(coords: &[Coordinate], mut degree: usize) -> Self {
        degree = degree.max(2);
        if coords.len() < MIN_RING_SIZE {
            return RingIndex {
                degree,
                ..RingIndex::new_empty()
            };
        }

        // One leaf per usable edge. Degenerate edges are skipped, but each
        // leaf keeps the index of its edge in the original ring.
        let mut nodes: Vec<IntervalNode> = coords
            .windows(2)
            .enumerate()
            .filter(|(_, c)| !is_degenerate_segment(c[0], c[1]))
            .map(|(index, c)| IntervalNode::new_leaf(index, c[0], c[1]))
            .collect();
        let num_leaves = nodes.len();

        // Ring edges are already spatially coherent in walk order, so
        // merging consecutive runs gives tight parents without sorting.
        let mut height = 0;
        let mut level_start = 0;
        let mut level_len = num_leaves;
        while level_len > 1 {
            let level_end = level_start + level_len;
            let parents: Vec<IntervalNode> = (level_start..level_end)
                .step_by(degree)
                .map(|first| {
                    let last = (first + degree).min(level_end);
                    IntervalNode::new_parent(first, &nodes[first..last])
                })
                .collect();
            level_start = level_end;
            level_len = parents.len();
            nodes.extend(parents);
            height += 1;
        }

        nodes.shrink_to_fit();
        RingIndex {
            degree,
            num_leaves,
            height,
            nodes,
            coords: coords.to_vec(),
        }
    }

    pub fn root(&self) -> Option<&IntervalNode> {
        self.nodes.last()
    }

    pub fn root_index(&self) -> Option<usize> {
        self.nodes.len().checked_sub(1)
    }

    pub fn node(&self, index: usize) -> &IntervalNode {
        &self.nodes[index]
    }

    pub fn nodes(&self) -> &[IntervalNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.num_leaves
    }

    pub fn is_empty(&self) -> bool {
        self.num_leaves == 0
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    pub fn edge(&self, edge_index: usize) -> (Coordinate, Coordinate) {
        (self.coords[edge_index], self.coords[edge_index + 1])
    }
}
