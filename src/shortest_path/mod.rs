//! All-pairs shortest paths by repeated single-source Dijkstra.
//!
//! [`ShortestPathEngine`] is lazy and memoized: nothing is computed until the
//! first query, and the result is reused until the graph changes. The engine
//! does not borrow the graph; every query passes it in, and the engine
//! compares the graph's `(uid, version)` stamp with the one it computed
//! against. A different graph, or any mutation of the same one, triggers a
//! full recomputation on the next query.
//!
//! Edge costs are non-negative by construction ([`Graph::add_edge`] rejects
//! negative costs), which is what Dijkstra needs.
//!
//! Vertical split:
//! - `frontier`: the open set
//! - `tests`: module tests

use core::fmt;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::graph::{Cost, Graph, NodeId};
use crate::path::Path;

mod frontier;

use frontier::Frontier;

/// Finalized shortest paths from one source.
#[derive(Debug, Clone)]
pub struct PathTable {
    source: NodeId,
    finalized: Vec<Arc<Path>>,
    index: HashMap<NodeId, usize>,
}

impl PathTable {
    fn new(source: NodeId) -> Self {
        Self {
            source,
            finalized: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Records `path` as final. Returns `false` if its node was already closed.
    fn close(&mut self, path: Arc<Path>) -> bool {
        if self.index.contains_key(&path.node()) {
            return false;
        }
        self.index.insert(path.node(), self.finalized.len());
        self.finalized.push(path);
        true
    }

    /// The node every path in this table starts from.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Shortest path from the source to `node`, if `node` is reachable.
    pub fn get(&self, node: NodeId) -> Option<&Arc<Path>> {
        self.index.get(&node).map(|&i| &self.finalized[i])
    }

    /// Returns `true` if `node` is reachable from the source.
    pub fn contains(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    /// Number of reachable nodes, the source included.
    pub fn len(&self) -> usize {
        self.finalized.len()
    }

    /// Always `false` for tables built from a live source.
    pub fn is_empty(&self) -> bool {
        self.finalized.is_empty()
    }

    /// Iterates the paths in the order they were finalized, which is
    /// non-decreasing cost order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Arc<Path>> + '_ {
        self.finalized.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GraphStamp {
    uid: u64,
    version: u64,
}

impl GraphStamp {
    fn of(graph: &Graph) -> Self {
        Self {
            uid: graph.uid(),
            version: graph.version(),
        }
    }
}

/// Memoized all-pairs shortest paths over a [`Graph`].
#[derive(Debug, Clone, Default)]
pub struct ShortestPathEngine {
    tables: BTreeMap<NodeId, PathTable>,
    stamp: Option<GraphStamp>,
}

impl ShortestPathEngine {
    /// Creates an engine with nothing computed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one Dijkstra search from `source`.
    ///
    /// # Errors
    /// [`GraphError::NodeNotInGraph`] if `source` is not a live node.
    pub fn single_source(graph: &Graph, source: NodeId) -> Result<PathTable> {
        if !graph.has_node(source) {
            return Err(GraphError::NodeNotInGraph(source));
        }

        let mut closed = PathTable::new(source);
        let mut open = Frontier::new();
        open.upsert(Arc::new(Path::root(source, 0)));
        let mut peak = 1;

        while let Some(current) = open.pop_min() {
            let here = current.node();
            // A node can only be closed once.
            if !closed.close(Arc::clone(&current)) {
                continue;
            }

            for neighbor in graph.neighbors(here) {
                if closed.contains(neighbor) {
                    continue;
                }
                let Some(edge) = graph
                    .edge_between(neighbor, here)
                    .and_then(|e| graph.edge(e))
                else {
                    continue;
                };

                let candidate = current.cost().saturating_add(edge.cost());
                let improves = open
                    .candidate_cost(neighbor)
                    .map_or(true, |existing| candidate < existing);
                if improves {
                    open.upsert(Arc::new(Path::extend(
                        neighbor,
                        Arc::clone(&current),
                        edge.cost(),
                    )));
                }
            }
            peak = peak.max(open.len());
        }

        trace!(
            source = %source,
            reached = closed.len(),
            peak_frontier = peak,
            "single-source search finished"
        );
        Ok(closed)
    }

    /// Recomputes every table now, regardless of cache state.
    pub fn compute(&mut self, graph: &Graph) {
        debug!(
            graph = graph.uid(),
            version = graph.version(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "computing all-pairs shortest paths"
        );
        self.tables = Self::all_sources(graph);
        self.stamp = Some(GraphStamp::of(graph));
    }

    #[cfg(not(feature = "parallel"))]
    fn all_sources(graph: &Graph) -> BTreeMap<NodeId, PathTable> {
        graph
            .node_ids()
            .filter_map(|s| Self::single_source(graph, s).ok().map(|t| (s, t)))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn all_sources(graph: &Graph) -> BTreeMap<NodeId, PathTable> {
        use rayon::prelude::*;

        let sources: Vec<NodeId> = graph.node_ids().collect();
        sources
            .into_par_iter()
            .filter_map(|s| Self::single_source(graph, s).ok().map(|t| (s, t)))
            .collect()
    }

    /// Returns `true` if the cached tables were computed against this graph
    /// at its current version.
    pub fn is_fresh(&self, graph: &Graph) -> bool {
        self.stamp == Some(GraphStamp::of(graph))
    }

    /// Drops the cached tables; the next query recomputes.
    pub fn invalidate(&mut self) {
        self.tables.clear();
        self.stamp = None;
    }

    fn ensure_fresh(&mut self, graph: &Graph) {
        if !self.is_fresh(graph) {
            self.compute(graph);
        }
    }

    /// Shortest path from `from` to `to`.
    ///
    /// Computes (or recomputes) all tables first if the cache is missing or
    /// stale. `None` means one of the nodes is not in the graph or `to` is
    /// unreachable from `from`.
    pub fn get_path(&mut self, graph: &Graph, from: NodeId, to: NodeId) -> Option<Arc<Path>> {
        self.paths_from(graph, from)?.get(to).cloned()
    }

    /// Cost of the shortest path from `from` to `to`, if there is one.
    pub fn distance(&mut self, graph: &Graph, from: NodeId, to: NodeId) -> Option<Cost> {
        self.paths_from(graph, from)?.get(to).map(|p| p.cost())
    }

    /// All shortest paths starting at `source`.
    pub fn paths_from(&mut self, graph: &Graph, source: NodeId) -> Option<&PathTable> {
        self.ensure_fresh(graph);
        self.tables.get(&source)
    }

    /// Cached tables, without triggering computation. Empty until the first
    /// query or [`compute`](Self::compute).
    pub fn tables(&self) -> impl Iterator<Item = &PathTable> + '_ {
        self.tables.values()
    }
}

impl fmt::Display for ShortestPathEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for table in self.tables.values() {
            writeln!(f, "Path from {}", table.source())?;
            for path in table.iter() {
                if path.node() == table.source() {
                    continue;
                }
                writeln!(f, "Path to {}", path.node())?;
                writeln!(f, "{}", path.full_path())?;
            }
        }
        Ok(())
    }
}
