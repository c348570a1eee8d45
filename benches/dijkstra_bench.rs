use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use waypath::{find_path, AttrGraph, PathFinder, DEFAULT_WEIGHT_KEY};

const SIDE: u32 = 100;

/// Undirected `SIDE`x`SIDE` grid with random edge weights
fn grid() -> AttrGraph<(u32, u32)> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut g = AttrGraph::undirected();
    for x in 0..SIDE {
        for y in 0..SIDE {
            if x + 1 < SIDE {
                g.add_weighted_edge((x, y), (x + 1, y), rng.gen_range(1.0..10.0));
            }
            if y + 1 < SIDE {
                g.add_weighted_edge((x, y), (x, y + 1), rng.gen_range(1.0..10.0));
            }
        }
    }
    g
}

fn bench_grid(c: &mut Criterion) {
    let g = grid();
    let mut group = c.benchmark_group("grid");
    group.bench_function("corner_to_corner", |b| {
        b.iter(|| {
            find_path(&g, &(0, 0), &(SIDE - 1, SIDE - 1), DEFAULT_WEIGHT_KEY)
        });
    });
    group.bench_function("random_pairs", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter_batched(
            || {
                (
                    (rng.gen_range(0..SIDE), rng.gen_range(0..SIDE)),
                    (rng.gen_range(0..SIDE), rng.gen_range(0..SIDE)),
                )
            },
            |(s, e)| find_path(&g, &s, &e, DEFAULT_WEIGHT_KEY),
            BatchSize::SmallInput,
        );
    });
    group.bench_function("distances_from_center", |b| {
        let finder = PathFinder::new(&g);
        b.iter(|| finder.distances_from(&(SIDE / 2, SIDE / 2)));
    });
    group.finish();
}

criterion_group!(grid_benches, bench_grid);
criterion_main!(grid_benches);
