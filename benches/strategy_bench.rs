use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use maze_search::{
    heap::{Heap, IndexedHeap, PriorityQueue},
    run_search_with, Grid, SearchOptions, Strategy,
};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::hint::black_box;

const N_GRIDS: usize = 20;

fn random_grids(n: usize, density: f64, seed: u64) -> Vec<Grid> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..N_GRIDS)
        .filter_map(|_| Grid::with_rng(n, n, density, &mut rng).ok())
        .collect()
}

fn strategy_bench(c: &mut Criterion) {
    for n in [32, 128] {
        let mut grids = random_grids(n, 0.25, 0);
        let mut group = c.benchmark_group(format!("{n}x{n} grids"));
        let runs = Strategy::ALL
            .into_iter()
            .map(|s| (s, s.to_string(), SearchOptions::default()))
            .chain([(
                Strategy::AStar,
                "astar (indexed)".to_owned(),
                SearchOptions {
                    indexed_heap: true,
                    ..Default::default()
                },
            )])
            .collect::<Vec<_>>();
        for (strategy, name, options) in &runs {
            group.bench_function(name.as_str(), |b| {
                b.iter(|| {
                    for grid in grids.iter_mut() {
                        let (start, target) = (grid.start(), grid.target());
                        black_box(run_search_with(*strategy, grid, start, target, options).ok());
                        grid.reset();
                    }
                })
            });
        }
        group.finish();
    }
}

fn heap_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap");
    group.sample_size(10);
    for size in [100_000usize, 1_000_000] {
        let mut rng = StdRng::seed_from_u64(size as u64);
        let mut values = (0..size as u32).collect::<Vec<u32>>();
        values.shuffle(&mut rng);
        group.bench_with_input(BenchmarkId::new("push/pop", size), &values, |b, values| {
            b.iter(|| {
                let mut heap = Heap::<u32>::natural();
                for &v in values {
                    heap.push(v);
                }
                while let Some(v) = heap.pop() {
                    black_box(v);
                }
            })
        });
        group.bench_with_input(
            BenchmarkId::new("indexed push/pop", size),
            &values,
            |b, values| {
                b.iter(|| {
                    let mut heap = IndexedHeap::<u32>::natural();
                    for &v in values {
                        heap.push(v);
                    }
                    while let Some(v) = heap.pop() {
                        black_box(v);
                    }
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, strategy_bench, heap_bench);
criterion_main!(benches);
