//! Undirected weighted edges.

use core::fmt;

use super::{Cost, NodeId};

/// A stable handle to an edge slot in a [`Graph`](super::Graph).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

impl EdgeId {
    #[inline(always)]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the slot index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E#{}", self.0)
    }
}

/// An unordered pair of nodes with a cost.
///
/// The endpoints keep the order they were given in (`first`, `second`);
/// [`Path::through_edge`](crate::Path::through_edge) follows that orientation,
/// everything else treats the pair as unordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    first: NodeId,
    second: NodeId,
    cost: Cost,
}

impl Edge {
    /// Creates a free-standing edge. Edges owned by a graph come from
    /// [`Graph::add_edge`](super::Graph::add_edge).
    pub fn new(first: NodeId, second: NodeId, cost: Cost) -> Self {
        Self {
            first,
            second,
            cost,
        }
    }

    /// Returns `true` if `{x, y}` is this edge's endpoint pair, in either order.
    pub fn is_edge(&self, x: NodeId, y: NodeId) -> bool {
        (self.first == x && self.second == y) || (self.first == y && self.second == x)
    }

    /// Returns `true` if `x` is one of the endpoints.
    pub fn touches(&self, x: NodeId) -> bool {
        self.first == x || self.second == x
    }

    /// The endpoints in insertion order.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.first, self.second)
    }

    /// First endpoint.
    pub fn first(&self) -> NodeId {
        self.first
    }

    /// Second endpoint.
    pub fn second(&self) -> NodeId {
        self.second
    }

    /// Given one endpoint, returns the other. `None` if `x` is not an endpoint.
    pub fn other(&self, x: NodeId) -> Option<NodeId> {
        if self.first == x {
            Some(self.second)
        } else if self.second == x {
            Some(self.first)
        } else {
            None
        }
    }

    /// The edge cost.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Overwrites the cost. Free-standing edges accept any value; the graph
    /// validates costs before they reach its own edges.
    pub fn set_cost(&mut self, cost: Cost) {
        self.cost = cost;
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-{}-> {}", self.first, self.cost, self.second)
    }
}
