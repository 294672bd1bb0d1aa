use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;

use mazegraph::algorithms::reachability::reachable_locations;
use mazegraph::builders::GraphBuilder;
use mazegraph::builders::SnakeGraphBuilder;
use mazegraph::builders::TextGraphBuilder;
use mazegraph::location::Location;

const EXTENTS: [usize; 3] = [7, 30, 100];

/// Draws an `extent`x`extent` text maze with every passage open.
fn open_maze_text(extent: usize) -> String {
    let top = "#.#|".repeat(extent);
    let middle = "...|".repeat(extent);
    let divider = "-".repeat(4 * extent);

    let mut text = String::new();
    for _ in 0..extent {
        for line in [&top, &middle, &top, &divider] {
            text.push_str(line);
            text.push('\n');
        }
    }
    text
}

fn build_snake(c: &mut Criterion) {
    let mut group = c.benchmark_group("Snake");
    for extent in EXTENTS {
        let builder = SnakeGraphBuilder::new(extent);
        group.bench_with_input(BenchmarkId::new("build", extent), &builder, |b, builder| {
            b.iter(|| builder.build_graph())
        });
    }
    group.finish();
}

fn build_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("Text");
    for extent in EXTENTS {
        let builder = TextGraphBuilder::from_text(&open_maze_text(extent));
        group.bench_with_input(BenchmarkId::new("build", extent), &builder, |b, builder| {
            b.iter(|| builder.build_graph())
        });
    }
    group.finish();
}

fn reach_snake(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reachability");
    for extent in EXTENTS {
        let Ok(graph) = SnakeGraphBuilder::new(extent).build_graph() else {
            log::warn!("Skipping snake of extent {extent}");
            continue;
        };
        group.bench_with_input(BenchmarkId::new("snake", extent), &graph, |b, graph| {
            b.iter(|| reachable_locations(graph, Location::new(0, 0)))
        });
    }
    group.finish();
}

criterion_group!(benches, build_snake, build_text, reach_snake);
criterion_main!(benches);
