//! Directed weighted edge.

use super::node::NodeId;

/// A directed edge `src -> dest` with a non-negative cost.
///
/// An edge from A to B implies nothing about B to A.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    src: NodeId,
    dest: NodeId,
    weight: f64,
}

impl Edge {
    pub(crate) fn new(src: NodeId, dest: NodeId, weight: f64) -> Self {
        Self { src, dest, weight }
    }

    /// Source node.
    pub fn src(&self) -> NodeId {
        self.src
    }

    /// Destination node.
    pub fn dest(&self) -> NodeId {
        self.dest
    }

    /// Cost of traversing the edge.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The same edge pointing the other way.
    pub fn reversed(&self) -> Self {
        Self::new(self.dest, self.src, self.weight)
    }

    /// Check that `weight` can be used as an edge cost.
    pub fn is_valid_weight(weight: f64) -> bool {
        weight.is_finite() && weight >= 0.0
    }
}
