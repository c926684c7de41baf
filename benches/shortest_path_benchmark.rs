use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathgraph::{GeneratorConfig, Graph, NodeId, ShortestPathEngine};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

// Same graph as a petgraph `UnGraph`, for comparison.
fn to_petgraph(graph: &Graph) -> (UnGraph<(), i64>, Vec<NodeIndex>) {
    let mut pg = UnGraph::<(), i64>::default();
    let slots = graph.node_ids().map(|id| id.index() + 1).max().unwrap_or(0);
    let mut index = vec![NodeIndex::end(); slots];
    for id in graph.node_ids() {
        index[id.index()] = pg.add_node(());
    }
    for (_, e) in graph.edges() {
        let (a, b) = e.endpoints();
        pg.add_edge(index[a.index()], index[b.index()], e.cost());
    }
    (pg, index)
}

fn bench_all_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs");
    for size in [20usize, 50, 100] {
        let config = GeneratorConfig {
            size,
            density: 0.1,
            min_cost: 1,
            max_cost: 10,
        };
        let graph = Graph::generate_seeded(&config, 99).unwrap();

        group.bench_with_input(BenchmarkId::new("engine", size), &graph, |b, graph| {
            b.iter(|| {
                let mut engine = ShortestPathEngine::new();
                engine.compute(graph);
                black_box(engine.tables().count())
            });
        });

        let (pg, index) = to_petgraph(&graph);
        group.bench_with_input(BenchmarkId::new("petgraph_dijkstra", size), &pg, |b, pg| {
            b.iter(|| {
                let mut reached = 0;
                for &s in &index {
                    reached += petgraph::algo::dijkstra(pg, s, None, |e| *e.weight()).len();
                }
                black_box(reached)
            });
        });
    }
    group.finish();
}

fn bench_cached_query(c: &mut Criterion) {
    let config = GeneratorConfig::with_size(60);
    let graph = Graph::generate_seeded(&config, 3).unwrap();
    let mut engine = ShortestPathEngine::new();
    engine.compute(&graph);
    let (a, b) = (NodeId::from_index(0), NodeId::from_index(59));

    c.bench_function("cached_get_path", |bench| {
        bench.iter(|| black_box(engine.get_path(&graph, a, b)));
    });
}

criterion_group!(benches, bench_all_pairs, bench_cached_query);
criterion_main!(benches);
