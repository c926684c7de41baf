//! Graph ownership and mutation properties.

use pathgraph::{GeneratorConfig, Graph, GraphError, NodeId};

#[test]
fn add_edge_links_both_endpoints() -> anyhow::Result<()> {
    let mut g = Graph::new();
    let x = g.add_node();
    let y = g.add_node();
    let before = g.edge_count();

    let e = g.add_edge(x, y, 4)?;

    assert!(g.has_edge(x, y));
    assert!(g.adjacent(x, y));
    assert!(g.adjacent(y, x));
    assert_eq!(g.edge_count(), before + 1);
    assert_eq!(g.get_edge_value(e)?, 4);
    Ok(())
}

#[test]
fn delete_edge_on_missing_pair_changes_nothing() -> anyhow::Result<()> {
    let mut g = Graph::new();
    let x = g.add_node();
    let y = g.add_node();
    let z = g.add_node();
    g.add_edge(x, y, 1)?;

    assert!(g.delete_edge(y, z).is_none());
    assert!(g.delete_edge(x, NodeId::from_index(42)).is_none());
    assert_eq!((g.node_count(), g.edge_count()), (3, 1));
    Ok(())
}

#[test]
fn delete_node_is_idempotent() {
    let mut g = Graph::new();
    let x = g.add_node();
    g.add_node();

    assert!(g.delete_node(x).is_some());
    assert_eq!(g.node_count(), 1);
    assert!(g.delete_node(x).is_none());
    assert_eq!(g.node_count(), 1);
}

#[test]
fn membership_is_checked_before_linking() {
    let mut g = Graph::new();
    let mut other = Graph::new();
    let x = g.add_node();
    other.add_node();
    let stranger = other.add_node();

    assert_eq!(
        g.add_edge(x, stranger, 1).unwrap_err(),
        GraphError::NodeNotInGraph(stranger)
    );
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn counts_match_collections_after_mixed_mutation() -> anyhow::Result<()> {
    let mut g = Graph::new();
    let ids: Vec<NodeId> = (0..6).map(|_| g.add_node()).collect();
    for w in ids.windows(2) {
        g.add_edge(w[0], w[1], 2)?;
    }
    g.add_edge(ids[0], ids[5], 9)?;
    g.delete_node(ids[2]);
    g.delete_edge(ids[4], ids[5]);

    assert_eq!(g.node_count(), g.nodes().count());
    assert_eq!(g.edge_count(), g.edges().count());
    for (_, e) in g.edges() {
        let (a, b) = e.endpoints();
        assert!(g.has_node(a) && g.has_node(b));
        assert!(g.adjacent(a, b) && g.adjacent(b, a));
    }
    Ok(())
}

#[test]
fn generated_edge_count_is_within_band() -> anyhow::Result<()> {
    let config = GeneratorConfig {
        size: 100,
        density: 0.1,
        min_cost: 0,
        max_cost: 10,
    };
    let expectation = config.expected_edges();

    for seed in 0..5 {
        let g = Graph::generate_seeded(&config, seed)?;
        assert_eq!(g.node_count(), 100);
        let edges = g.edge_count() as f64;
        assert!(
            edges > 0.5 * expectation && edges < 2.0 * expectation,
            "seed {seed}: {edges} edges, expected about {expectation}"
        );
        assert!(g.edges().all(|(_, e)| (0..10).contains(&e.cost())));
    }
    Ok(())
}

#[test]
fn generate_rejects_invalid_config() {
    let config = GeneratorConfig {
        size: 10,
        density: 0.5,
        min_cost: 10,
        max_cost: 3,
    };
    assert!(matches!(
        Graph::generate_seeded(&config, 1),
        Err(GraphError::InvalidConfig(_))
    ));
}

#[test]
fn generator_config_round_trips_through_json() -> anyhow::Result<()> {
    let config = GeneratorConfig {
        size: 8,
        density: 0.25,
        min_cost: 1,
        max_cost: 4,
    };
    let json = serde_json::to_string(&config)?;
    let back: GeneratorConfig = serde_json::from_str(&json)?;
    assert_eq!(back, config);
    Ok(())
}
