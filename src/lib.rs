//! # `pathgraph` - Small Graphs and Shortest Paths
//!
//! An in-memory undirected weighted graph with an all-pairs shortest-path
//! engine, sized for exercising and testing graph algorithms rather than for
//! large workloads.
//!
//! ## Ownership Model
//!
//! - **The graph owns everything**: nodes and edges live in the [`Graph`] and
//!   are addressed by [`NodeId`]/[`EdgeId`] handles. Callers never hold
//!   references into graph storage across mutations.
//! - **Handles are stable**: slots are never reused, so a handle to a deleted
//!   node stops resolving instead of aliasing a newer node.
//! - **Identity is the handle**: a node's integer payload is free-form data.
//!   Rewriting it never changes equality, adjacency or path lookups.
//! - **Deletion cascades**: deleting a node deletes every edge touching it.
//!
//! ## Shortest Paths
//!
//! [`ShortestPathEngine`] runs one Dijkstra search per source node and keeps
//! the resulting predecessor chains ([`Path`]). It is lazy and memoized, and
//! it recomputes automatically when handed a graph whose version differs from
//! the one it last computed against. Returned paths are reference-counted and
//! remain valid after the graph or the engine moves on.
//!
//! ### Complexity
//!
//! All-pairs computation is `V` independent searches. Edge lookups by endpoint
//! pair are linear scans, so this is meant for graphs of a few hundred nodes.
//!
//! ## Example
//!
//! ```rust
//! use pathgraph::{Graph, ShortestPathEngine};
//!
//! let mut g = Graph::new();
//! let a = g.add_node();
//! let b = g.add_node();
//! let c = g.add_node();
//! g.add_edge(a, b, 1)?;
//! g.add_edge(b, c, 2)?;
//! g.add_edge(a, c, 5)?;
//!
//! let mut engine = ShortestPathEngine::new();
//! let path = engine.get_path(&g, a, c).expect("c is reachable");
//! assert_eq!(path.cost(), 3);
//! assert_eq!(path.route(), vec![a, b, c]);
//! # Ok::<(), pathgraph::GraphError>(())
//! ```
//!
//! ## Cargo Features
//!
//! - `parallel`: run the per-source searches on the rayon thread pool.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;
pub mod path;
pub mod shortest_path;

pub use error::{GraphError, PathError, Result};
pub use graph::{Cost, Edge, EdgeId, GeneratorConfig, Graph, Node, NodeId};
pub use path::Path;
pub use shortest_path::{PathTable, ShortestPathEngine};

// Handles are plain slot indices.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<NodeId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<EdgeId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<Option<std::sync::Arc<Path>>>() == mem::size_of::<usize>());
};
