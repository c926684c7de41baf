//! Predecessor chains.
//!
//! A [`Path`] is one immutable link: a node, the cumulative cost of reaching
//! it, and the path it was reached from. Predecessors are shared through
//! [`Arc`], so any link keeps its whole chain back to the root alive no matter
//! where it was handed out from.

use core::fmt;
use std::sync::Arc;

use crate::error::PathError;
use crate::graph::{Cost, Edge, NodeId};

/// A link in a predecessor chain.
///
/// Dropping and comparing walk the chain iteratively, so chains of any length
/// are safe to release or compare.
#[derive(Clone)]
pub struct Path {
    node: NodeId,
    predecessor: Option<Arc<Path>>,
    cost: Cost,
}

impl Path {
    /// A chain of one: `node` reached at `cost` with no predecessor.
    pub fn root(node: NodeId, cost: Cost) -> Self {
        Self {
            node,
            predecessor: None,
            cost,
        }
    }

    /// Extends `predecessor` to `node`, adding `increment` to its cost.
    pub fn extend(node: NodeId, predecessor: Arc<Path>, increment: Cost) -> Self {
        let cost = predecessor.cost.saturating_add(increment);
        Self {
            node,
            predecessor: Some(predecessor),
            cost,
        }
    }

    /// Follows `edge` from its first endpoint to its second.
    ///
    /// # Errors
    /// [`PathError::PredecessorMismatch`] if `predecessor` does not end at
    /// the edge's first endpoint.
    pub fn through_edge(edge: &Edge, predecessor: Arc<Path>) -> Result<Self, PathError> {
        if edge.first() != predecessor.node {
            return Err(PathError::PredecessorMismatch {
                expected: edge.first(),
                found: predecessor.node,
            });
        }
        Ok(Self::extend(edge.second(), predecessor, edge.cost()))
    }

    /// The node this link ends at.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The link this one extends, if any.
    pub fn predecessor(&self) -> Option<&Path> {
        self.predecessor.as_deref()
    }

    /// Shared handle to the predecessor, for building further chains.
    pub fn predecessor_arc(&self) -> Option<&Arc<Path>> {
        self.predecessor.as_ref()
    }

    /// Cumulative cost from the root.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Returns `true` if this link has no predecessor.
    pub fn is_root(&self) -> bool {
        self.predecessor.is_none()
    }

    /// Walks back to the first link of the chain.
    pub fn root_link(&self) -> &Path {
        let mut current = self;
        while let Some(p) = current.predecessor() {
            current = p;
        }
        current
    }

    /// Number of predecessor links between this one and the root.
    pub fn hops(&self) -> usize {
        self.iter().count() - 1
    }

    /// Iterates the chain from this link back to the root.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            current: Some(self),
        }
    }

    /// Node ids from the root to this link's node.
    pub fn route(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.iter().map(Path::node).collect();
        nodes.reverse();
        nodes
    }

    /// Returns `true` if `node` appears anywhere in the chain.
    pub fn contains(&self, node: NodeId) -> bool {
        self.iter().any(|p| p.node == node)
    }

    /// Renders the whole chain, start first: `N#3<-->N#2<-->N#0`.
    pub fn full_path(&self) -> FullPath<'_> {
        FullPath { start: self }
    }
}

impl Drop for Path {
    fn drop(&mut self) {
        let mut next = self.predecessor.take();
        while let Some(link) = next {
            match Arc::try_unwrap(link) {
                Ok(mut owned) => next = owned.predecessor.take(),
                // Still shared; whoever holds the other handle frees the rest.
                Err(_) => break,
            }
        }
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) => {
                    if core::ptr::eq(a, b) {
                        return true;
                    }
                    if a.node != b.node || a.cost != b.cost {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}

impl Eq for Path {}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("node", &self.node)
            .field("cost", &self.cost)
            .field("predecessor", &self.predecessor().map(Path::node))
            .finish()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.predecessor() {
            Some(p) => write!(f, "{}<--{}", p.node, self.node),
            None => write!(f, "root<--{}", self.node),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Path;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a chain, from a link back to its root.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    current: Option<&'a Path>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Path;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = current.predecessor();
        Some(current)
    }
}

/// `Display` adapter returned by [`Path::full_path`].
#[derive(Debug, Clone, Copy)]
pub struct FullPath<'a> {
    start: &'a Path,
}

impl fmt::Display for FullPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, link) in self.start.iter().enumerate() {
            if i > 0 {
                f.write_str("<-->")?;
            }
            write!(f, "{}", link.node)?;
        }
        Ok(())
    }
}
