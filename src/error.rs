//! Error types for graph mutation and path construction.
//!
//! "Not present" is not an error here: `has_*`, `delete_*` and path lookups
//! report absence through `bool`/`Option`. Errors are reserved for broken
//! preconditions the caller has to act on.

use core::fmt;

use crate::graph::{Cost, EdgeId, NodeId};

/// Convenience alias used throughout the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;

/// Errors raised by [`Graph`](crate::Graph) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// The node handle does not refer to a live node of this graph.
    NodeNotInGraph(NodeId),
    /// The edge handle does not refer to a live edge of this graph.
    EdgeNotInGraph(EdgeId),
    /// An edge already connects this unordered pair.
    DuplicateEdge(NodeId, NodeId),
    /// Edge costs must be non-negative for shortest-path search.
    NegativeCost(Cost),
    /// A generator configuration failed validation.
    InvalidConfig(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeNotInGraph(id) => write!(f, "node {id} is not in the graph"),
            Self::EdgeNotInGraph(id) => write!(f, "edge {id} is not in the graph"),
            Self::DuplicateEdge(x, y) => write!(f, "an edge between {x} and {y} already exists"),
            Self::NegativeCost(cost) => write!(f, "edge cost {cost} is negative"),
            Self::InvalidConfig(reason) => write!(f, "invalid generator config: {reason}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Errors raised while building a [`Path`](crate::Path).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathError {
    /// The edge's first endpoint is not the predecessor's node.
    PredecessorMismatch {
        /// First endpoint of the edge being followed.
        expected: NodeId,
        /// Node the predecessor path actually ends at.
        found: NodeId,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PredecessorMismatch { expected, found } => write!(
                f,
                "edge and path predecessor mismatch: edge starts at {expected}, predecessor ends at {found}"
            ),
        }
    }
}

impl std::error::Error for PathError {}
