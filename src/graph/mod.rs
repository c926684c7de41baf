//! An undirected weighted graph that owns its nodes and edges.
//!
//! Nodes and edges live in append-only slot vectors and are addressed by
//! [`NodeId`]/[`EdgeId`] handles. Deleting vacates a slot; it is never reused,
//! so stale handles resolve to nothing rather than to someone else's node.
//!
//! Vertical split:
//! - `node`, `edge`: element types and their handles
//! - `generate`: seeded random graphs
//! - `display`: debug rendering
//! - `tests`: module tests
//!
//! # Performance
//! Lookups by handle are O(1). Edge lookups by endpoint pair scan the edge
//! list, and neighbour membership scans the neighbour list; the graph is meant
//! for small instances.

use core::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::error::{GraphError, Result};

mod display;
mod edge;
mod generate;
mod node;

pub use edge::{Edge, EdgeId};
pub use generate::GeneratorConfig;
pub use node::{Node, NodeId};

/// Edge and path cost.
pub type Cost = i64;

static NEXT_GRAPH_UID: AtomicU64 = AtomicU64::new(0);

fn next_uid() -> u64 {
    NEXT_GRAPH_UID.fetch_add(1, Ordering::Relaxed)
}

/// An undirected weighted graph.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_node` | \(O(1)\) amortized | Appends a slot |
/// | `delete_node` | \(O(m \cdot d)\) | Deletes every incident edge first |
/// | `add_edge` | \(O(m)\) | Rejects duplicates by scanning edges |
/// | `delete_edge` | \(O(m + d)\) | Linear scan, then unlinks neighbours |
/// | `has_edge` | \(O(m)\) | Linear scan |
/// | `adjacent` | \(O(d)\) | Scans `x`'s neighbour list |
#[derive(Debug)]
pub struct Graph {
    uid: u64,
    nodes: Vec<Option<Node>>,
    edges: Vec<Option<Edge>>,
    node_count: usize,
    edge_count: usize,
    next_value: i64,
    version: u64,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Creates an empty graph with room for `nodes` nodes and `edges` edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            uid: next_uid(),
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            node_count: 0,
            edge_count: 0,
            next_value: 0,
            version: 0,
        }
    }

    /// Identifies this graph instance. Clones get a fresh uid.
    pub fn uid(&self) -> u64 {
        self.uid
    }

    /// Bumped by every mutation that can change a shortest path: node and edge
    /// insertion or deletion, and edge cost updates.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Adds a node whose payload is the next value of the internal counter.
    pub fn add_node(&mut self) -> NodeId {
        let value = self.next_value;
        self.next_value += 1;
        self.add_node_with_value(value)
    }

    /// Adds a node with an explicit payload. The counter is left alone.
    pub fn add_node_with_value(&mut self, value: i64) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Some(Node::new(id, value)));
        self.node_count += 1;
        self.version += 1;
        trace!(node = %id, value, "added node");
        id
    }

    /// Removes `x` together with every edge touching it.
    ///
    /// Returns the removed node (with an empty neighbour list), or `None` if
    /// `x` was not in the graph.
    pub fn delete_node(&mut self, x: NodeId) -> Option<Node> {
        if !self.has_node(x) {
            return None;
        }

        let incident: Vec<(NodeId, NodeId)> = self
            .edges()
            .filter(|(_, e)| e.touches(x))
            .map(|(_, e)| e.endpoints())
            .collect();
        for (a, b) in incident {
            self.delete_edge(a, b);
        }

        let node = self.nodes.get_mut(x.index())?.take()?;
        self.node_count -= 1;
        self.version += 1;
        trace!(node = %x, "deleted node");
        Some(node)
    }

    /// Returns `true` if `x` is a live node of this graph.
    pub fn has_node(&self, x: NodeId) -> bool {
        self.node(x).is_some()
    }

    /// Resolves a node handle.
    pub fn node(&self, x: NodeId) -> Option<&Node> {
        self.nodes.get(x.index()).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, x: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(x.index())
            .and_then(Option::as_mut)
            .ok_or(GraphError::NodeNotInGraph(x))
    }

    /// Finds the first live node (in insertion order) carrying `value`.
    pub fn find_node(&self, value: i64) -> Option<NodeId> {
        self.nodes()
            .find(|n| n.value() == value)
            .map(Node::id)
    }

    /// Iterates live nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter_map(Option::as_ref)
    }

    /// Iterates live node handles in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().map(Node::id)
    }

    /// Iterates the neighbours of `x`. Empty if `x` is not in the graph.
    pub fn neighbors(&self, x: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.node(x).into_iter().flat_map(|n| n.neighbors())
    }

    /// Connects `x` and `y` with an edge of the given cost.
    ///
    /// # Errors
    /// - [`GraphError::NodeNotInGraph`] if either endpoint is not a live node.
    /// - [`GraphError::NegativeCost`] if `cost < 0`.
    /// - [`GraphError::DuplicateEdge`] if the pair is already connected.
    pub fn add_edge(&mut self, x: NodeId, y: NodeId, cost: Cost) -> Result<EdgeId> {
        for n in [x, y] {
            if !self.has_node(n) {
                return Err(GraphError::NodeNotInGraph(n));
            }
        }
        if cost < 0 {
            return Err(GraphError::NegativeCost(cost));
        }
        if self.has_edge(x, y) {
            return Err(GraphError::DuplicateEdge(x, y));
        }

        self.node_mut(x)?.add_neighbor(y);
        if x != y {
            self.node_mut(y)?.add_neighbor(x);
        }

        let id = EdgeId::from_index(self.edges.len());
        self.edges.push(Some(Edge::new(x, y, cost)));
        self.edge_count += 1;
        self.version += 1;
        trace!(edge = %id, from = %x, to = %y, cost, "added edge");
        Ok(id)
    }

    /// Removes the edge connecting `x` and `y` (in either order) and the
    /// matching neighbour links. Returns the removed edge, or `None` if the
    /// pair was not connected.
    pub fn delete_edge(&mut self, x: NodeId, y: NodeId) -> Option<Edge> {
        let id = self.edge_between(x, y)?;
        let edge = self.edges.get_mut(id.index())?.take()?;

        if let Ok(node) = self.node_mut(x) {
            node.remove_neighbor(y);
        }
        if let Ok(node) = self.node_mut(y) {
            node.remove_neighbor(x);
        }

        self.edge_count -= 1;
        self.version += 1;
        trace!(edge = %id, from = %x, to = %y, "deleted edge");
        Some(edge)
    }

    /// Returns `true` if an edge connects `x` and `y` (in either order).
    pub fn has_edge(&self, x: NodeId, y: NodeId) -> bool {
        self.edge_between(x, y).is_some()
    }

    /// Returns `true` if `y` is listed as a neighbour of `x`.
    pub fn adjacent(&self, x: NodeId, y: NodeId) -> bool {
        self.node(x).is_some_and(|n| n.has_neighbor(y))
    }

    /// Returns the handle of the edge connecting `x` and `y`, if any.
    pub fn edge_between(&self, x: NodeId, y: NodeId) -> Option<EdgeId> {
        self.edges()
            .find(|(_, e)| e.is_edge(x, y))
            .map(|(id, _)| id)
    }

    /// Resolves an edge handle.
    pub fn edge(&self, e: EdgeId) -> Option<&Edge> {
        self.edges.get(e.index()).and_then(Option::as_ref)
    }

    /// Iterates live edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|e| (EdgeId::from_index(i), e)))
    }

    /// Iterates live edge handles in insertion order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges().map(|(id, _)| id)
    }

    /// Reads a node's payload.
    ///
    /// # Errors
    /// [`GraphError::NodeNotInGraph`] if `x` does not resolve.
    pub fn get_node_value(&self, x: NodeId) -> Result<i64> {
        self.node(x)
            .map(Node::value)
            .ok_or(GraphError::NodeNotInGraph(x))
    }

    /// Overwrites a node's payload. Identity and lookups are unaffected.
    ///
    /// # Errors
    /// [`GraphError::NodeNotInGraph`] if `x` does not resolve.
    pub fn set_node_value(&mut self, x: NodeId, value: i64) -> Result<()> {
        self.node_mut(x)?.set_value(value);
        Ok(())
    }

    /// Reads an edge's cost.
    ///
    /// # Errors
    /// [`GraphError::EdgeNotInGraph`] if `e` does not resolve.
    pub fn get_edge_value(&self, e: EdgeId) -> Result<Cost> {
        self.edge(e)
            .map(Edge::cost)
            .ok_or(GraphError::EdgeNotInGraph(e))
    }

    /// Overwrites an edge's cost.
    ///
    /// # Errors
    /// - [`GraphError::EdgeNotInGraph`] if `e` does not resolve.
    /// - [`GraphError::NegativeCost`] if `cost < 0`.
    pub fn set_edge_value(&mut self, e: EdgeId, cost: Cost) -> Result<()> {
        if cost < 0 {
            return Err(GraphError::NegativeCost(cost));
        }
        let edge = self
            .edges
            .get_mut(e.index())
            .and_then(Option::as_mut)
            .ok_or(GraphError::EdgeNotInGraph(e))?;
        edge.set_cost(cost);
        self.version += 1;
        Ok(())
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Graph {
    fn clone(&self) -> Self {
        Self {
            uid: next_uid(),
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            node_count: self.node_count,
            edge_count: self.edge_count,
            next_value: self.next_value,
            version: self.version,
        }
    }
}
