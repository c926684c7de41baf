//! Random graph generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Cost, Graph, NodeId};
use crate::error::{GraphError, Result};

/// Parameters for [`Graph::generate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Number of nodes; payloads are `0..size`.
    pub size: usize,
    /// Probability of an edge attempt succeeding, per ordered node pair.
    pub density: f64,
    /// Inclusive lower bound of edge costs.
    pub min_cost: Cost,
    /// Exclusive upper bound of edge costs.
    pub max_cost: Cost,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 0,
            density: 0.1,
            min_cost: 0,
            max_cost: 10,
        }
    }
}

impl GeneratorConfig {
    /// Default density and cost range with `size` nodes.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Checks that the parameters describe a usable distribution.
    ///
    /// # Errors
    /// [`GraphError::InvalidConfig`] when `density` is not a probability,
    /// `min_cost` is negative, or the cost range is empty.
    pub fn validate(&self) -> Result<()> {
        if !self.density.is_finite() || !(0.0..=1.0).contains(&self.density) {
            return Err(GraphError::InvalidConfig(format!(
                "density {} is not in [0, 1]",
                self.density
            )));
        }
        if self.min_cost < 0 {
            return Err(GraphError::InvalidConfig(format!(
                "min_cost {} is negative",
                self.min_cost
            )));
        }
        if self.max_cost <= self.min_cost {
            return Err(GraphError::InvalidConfig(format!(
                "cost range [{}, {}) is empty",
                self.min_cost, self.max_cost
            )));
        }
        Ok(())
    }

    /// Expected number of edges, `size² × density`, as used for sanity bands.
    pub fn expected_edges(&self) -> f64 {
        let n = self.size as f64;
        n * n * self.density
    }
}

impl Graph {
    /// Builds a random graph.
    ///
    /// Every ordered pair `(n1, n2)` with `n1 != n2` that is not already
    /// adjacent gets one Bernoulli trial with probability `density`; a success
    /// adds an edge with a cost drawn uniformly from `[min_cost, max_cost)`.
    /// Each unordered pair is therefore tried up to twice.
    ///
    /// # Errors
    /// Whatever [`GeneratorConfig::validate`] rejects.
    pub fn generate<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let mut graph = Self::with_capacity(config.size, 0);
        for _ in 0..config.size {
            graph.add_node();
        }

        let ids: Vec<NodeId> = graph.node_ids().collect();
        for &n1 in &ids {
            for &n2 in &ids {
                if n1 == n2 || graph.adjacent(n1, n2) {
                    continue;
                }
                if rng.gen::<f64>() < config.density {
                    let cost = rng.gen_range(config.min_cost..config.max_cost);
                    graph.add_edge(n1, n2, cost)?;
                }
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            density = config.density,
            "generated random graph"
        );
        Ok(graph)
    }

    /// [`Graph::generate`] with a `StdRng` seeded from `seed`.
    ///
    /// # Errors
    /// Whatever [`GeneratorConfig::validate`] rejects.
    pub fn generate_seeded(config: &GeneratorConfig, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(config, &mut rng)
    }
}
