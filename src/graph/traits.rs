use std::fmt::Debug;
use std::ops::Sub;

use num_traits::{Bounded, Zero};

use crate::graph::Edge;

/// Numeric type usable as an edge weight
///
/// Weights are totally ordered, can be summed, and have a zero and a
/// maximum value. Every primitive integer qualifies, as does
/// `ordered_float::OrderedFloat<f64>`.
pub trait Weight: Copy + Ord + Debug + Zero + Bounded + Sub<Output = Self> {
    /// `self + other` for non-negative operands, `None` past `max_value()`
    fn checked_sum(self, other: Self) -> Option<Self> {
        if other > Self::max_value() - self {
            None
        } else {
            Some(self + other)
        }
    }
}

impl<T> Weight for T where T: Copy + Ord + Debug + Zero + Bounded + Sub<Output = T> {}

/// Trait representing a weighted directed graph addressed by node index
pub trait Graph<W>
where
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the node index exists in the graph
    fn has_node(&self, node: usize) -> bool {
        node < self.node_count()
    }

    /// Returns an iterator over the edges leaving a node
    fn out_edges(&self, node: usize) -> Box<dyn Iterator<Item = Edge<W>> + '_>;

    /// Returns an iterator over the edges entering a node
    fn in_edges(&self, node: usize) -> Box<dyn Iterator<Item = Edge<W>> + '_>;
}
