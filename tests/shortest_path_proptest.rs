use pathgraph::{Graph, NodeId, ShortestPathEngine};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    AddNode,
    AddEdge(usize, usize, i64),
    DeleteNode(usize),
    DeleteEdge(usize, usize),
}

fn edge_list() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n, 0i64..20), 0..30),
        )
    })
}

proptest! {
    #[test]
    fn engine_matches_petgraph_dijkstra((n, edges) in edge_list()) {
        let mut g = Graph::new();
        let mut pg = UnGraph::<(), i64>::default();
        let ids: Vec<NodeId> = (0..n).map(|_| g.add_node()).collect();
        let pids: Vec<NodeIndex> = (0..n).map(|_| pg.add_node(())).collect();

        for (a, b, cost) in edges {
            if g.add_edge(ids[a], ids[b], cost).is_ok() {
                pg.add_edge(pids[a], pids[b], cost);
            }
        }

        let mut engine = ShortestPathEngine::new();
        for s in 0..n {
            let expected = petgraph::algo::dijkstra(&pg, pids[s], None, |e| *e.weight());
            for t in 0..n {
                let ours = engine.get_path(&g, ids[s], ids[t]);
                let theirs = expected.get(&pids[t]).copied();
                prop_assert_eq!(ours.as_ref().map(|p| p.cost()), theirs);
                if let Some(path) = ours {
                    let route = path.route();
                    prop_assert_eq!(route.first().copied(), Some(ids[s]));
                    prop_assert_eq!(route.last().copied(), Some(ids[t]));
                }
            }
        }
    }

    #[test]
    fn counts_and_symmetry_survive_random_mutation(ops in proptest::collection::vec(
        prop_oneof![
            Just(Operation::AddNode),
            (0usize..10, 0usize..10, 0i64..5).prop_map(|(a, b, c)| Operation::AddEdge(a, b, c)),
            (0usize..10).prop_map(Operation::DeleteNode),
            (0usize..10, 0usize..10).prop_map(|(a, b)| Operation::DeleteEdge(a, b)),
        ],
        1..80
    )) {
        let mut g = Graph::new();
        for op in ops {
            match op {
                Operation::AddNode => {
                    g.add_node();
                }
                Operation::AddEdge(a, b, c) => {
                    let (a, b) = (NodeId::from_index(a), NodeId::from_index(b));
                    let before = g.edge_count();
                    let expect_ok = g.has_node(a) && g.has_node(b) && !g.has_edge(a, b);
                    prop_assert_eq!(g.add_edge(a, b, c).is_ok(), expect_ok);
                    if expect_ok {
                        prop_assert_eq!(g.edge_count(), before + 1);
                        prop_assert!(g.adjacent(a, b) && g.adjacent(b, a));
                    }
                }
                Operation::DeleteNode(a) => {
                    g.delete_node(NodeId::from_index(a));
                    prop_assert!(!g.has_node(NodeId::from_index(a)));
                }
                Operation::DeleteEdge(a, b) => {
                    let (a, b) = (NodeId::from_index(a), NodeId::from_index(b));
                    g.delete_edge(a, b);
                    prop_assert!(!g.has_edge(a, b));
                }
            }

            prop_assert_eq!(g.node_count(), g.nodes().count());
            prop_assert_eq!(g.edge_count(), g.edges().count());
            for node in g.nodes() {
                for nb in node.neighbors() {
                    prop_assert!(g.has_node(nb));
                    prop_assert!(g.adjacent(nb, node.id()));
                    prop_assert!(g.has_edge(node.id(), nb));
                }
            }
        }
    }
}
