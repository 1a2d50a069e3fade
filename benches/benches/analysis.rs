use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use trivia_analysis::{Analyzer, TraversalMode};
use trivia_linter::{CollectingSink, RuleTable};
use trivia_syntax::{SyntaxKind, SyntaxTree};
use trivia_test_utils::parse_fixture;

// One block per unit: compliant, missing space, double space and a nested else chain
const UNIT: &str = "
{
    if (a) { x; }
    if(b) { y; }
    if  (c) z;
    if (d) {
        if/*c*/ (e) w;
    } else if(f) v; else { u; }
}
";

const SIZES: [usize; 3] = [10, 100, 1000];

/// Helper to build a tree with `units` copies of [`UNIT`]
fn source_tree(units: usize) -> SyntaxTree {
    match parse_fixture(&UNIT.repeat(units)) {
        Ok(tree) => tree,
        Err(error) => panic!("benchmark fixture failed to parse: {error}"),
    }
}

fn count_nodes(tree: &SyntaxTree) -> u64 {
    tree.root().descendants().count() as u64
}

/// Full traversal, sequential vs parallel
fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for units in SIZES {
        let tree = source_tree(units);
        group.throughput(Throughput::Elements(count_nodes(&tree)));

        for mode in [TraversalMode::Sequential, TraversalMode::Parallel] {
            let analyzer = Analyzer::with_builtin_rules().with_mode(mode);
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), units),
                &tree,
                |b, tree| {
                    b.iter_batched(
                        CollectingSink::new,
                        |sink| {
                            let summary = analyzer.run(tree, &sink);
                            black_box((summary, sink.len()))
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }

    group.finish();
}

/// Dispatch of a single if statement to the built-in table
fn bench_dispatch(c: &mut Criterion) {
    let tree = source_tree(1);
    let table = RuleTable::builtin();
    let nodes: Vec<_> = tree
        .root()
        .descendants()
        .filter(|node| node.kind() == SyntaxKind::IfStatement)
        .collect();

    c.bench_function("dispatch_if_statements", |b| {
        b.iter_batched(
            CollectingSink::new,
            |sink| {
                for node in &nodes {
                    let _ = black_box(table.dispatch(node, &tree, &sink));
                }
                sink
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("dispatch_unregistered_kind", |b| {
        let sink = CollectingSink::new();
        b.iter(|| black_box(table.dispatch(black_box(tree.root()), &tree, &sink)));
    });
}

criterion_group!(benches, bench_traversal, bench_dispatch);
criterion_main!(benches);
