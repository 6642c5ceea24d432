mod node;
mod ring_index;
mod tree;

pub use node::IntervalNode;
pub use ring_index::{RingIndex, DEFAULT_DEGREE, MIN_RING_SIZE};
pub use tree::{build_index, IntervalTree, IntervalTreeOptions};
