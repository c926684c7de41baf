//! Vertices and their handles.

use core::fmt;

/// A stable handle to a node slot in a [`Graph`](super::Graph).
///
/// Slots are never reused, so a handle that outlives its node stops resolving
/// instead of silently pointing at a newer node.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Builds a handle for slot `index`.
    ///
    /// Mostly useful for tests and for paths built outside a graph; the
    /// handle only resolves if the graph actually has a live node there.
    #[inline(always)]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the slot index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N#{}", self.0)
    }
}

/// A vertex: an integer payload plus the ids of its neighbours.
///
/// Equality is identity: two nodes are equal iff they have the same
/// [`NodeId`]. The payload can be rewritten freely without affecting lookups.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    value: i64,
    neighbors: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(id: NodeId, value: i64) -> Self {
        Self {
            id,
            value,
            neighbors: Vec::new(),
        }
    }

    /// Returns this node's handle.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the integer payload.
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    pub(crate) fn set_value(&mut self, value: i64) {
        self.value = value;
    }

    /// Appends `x` to the neighbour list. No dedup: the graph only calls this
    /// once per edge.
    pub(crate) fn add_neighbor(&mut self, x: NodeId) {
        self.neighbors.push(x);
    }

    /// Removes every entry equal to `x`.
    pub(crate) fn remove_neighbor(&mut self, x: NodeId) {
        self.neighbors.retain(|&n| n != x);
    }

    /// Returns `true` if `x` is listed as a neighbour.
    pub fn has_neighbor(&self, x: NodeId) -> bool {
        self.neighbors.contains(&x)
    }

    /// Returns `true` if the node has at least one neighbour.
    pub fn has_neighbors(&self) -> bool {
        !self.neighbors.is_empty()
    }

    /// Iterates the neighbour ids in the order the edges were added.
    pub fn neighbors(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.neighbors.iter().copied()
    }

    /// Number of neighbour entries.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N({})", self.value)
    }
}
