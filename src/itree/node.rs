use crate::Coordinate;
use std::ops::Range;

/// Leaves cover a single edge of the ring; interior nodes cover the union of
/// their children, which occupy a contiguous run of the ring index's arena.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntervalNode {
    pub min: f64,
    pub max: f64,
    /// For leaves, the index of the edge's first coordinate. For interior
    /// nodes, the smallest edge index below them.
    pub edge_index: usize,
    first_child: usize,
    num_children: usize,
}

impl IntervalNode {
    pub(crate) fn new_leaf(edge_index: usize, start: Coordinate, end: Coordinate) -> Self {
        IntervalNode {
            min: start.y.min(end.y),
            max: start.y.max(end.y),
            edge_index,
            first_child: 0,
            num_children: 0,
        }
    }

    pub(crate) fn new_parent(first_child: usize, children: &[IntervalNode]) -> Self {
        let init = IntervalNode {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            edge_index: usize::MAX,
            first_child,
            num_children: children.len(),
        };
        children.iter().fold(init, |mut parent, child| {
            parent.min = parent.min.min(child.min);
            parent.max = parent.max.max(child.max);
            parent.edge_index = parent.edge_index.min(child.edge_index);
            parent
        })
    }

    pub fn is_leaf(&self) -> bool {
        self.num_children == 0
    }

    pub fn num_children(&self) -> usize {
        self.num_children
    }

    pub fn children(&self) -> Range<usize> {
        self.first_child..(self.first_child + self.num_children)
    }

    pub fn contains_value(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}
