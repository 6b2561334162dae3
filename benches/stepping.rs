use env_logger::Env;

use criterion::{criterion_group, criterion_main, Criterion};

use log::info;
use nanorand::{Rng, WyRand};
use stepwise_pathfinding::prelude::*;

fn random_map(width: usize, height: usize, blocked_percent: u32) -> BoolGrid {
    let mut grid = BoolGrid::new(width, height);
    let mut rng = WyRand::new_seed(4);
    for y in 0..height {
        for x in 0..width {
            grid.set_blocked((x, y), rng.generate_range(0_u32..100) < blocked_percent);
        }
    }
    grid.set_blocked((0, 0), false);
    grid
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info") // Change this to debug or trace to see the individual searches.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_single_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single Steps");

    init();

    for map_size in [64, 256] {
        let map = random_map(map_size, map_size, 20);
        let id = format!("100 steps, Random Map, Map Size: ({0}, {0})", map_size);
        group.bench_function(&id, |b| {
            b.iter(|| {
                let mut engine = Engine::with_config(&map, SearchConfig::UNBOUNDED);
                engine.set_start((0, 0)).unwrap();
                engine.set_dest((map_size - 1, map_size - 1)).unwrap();
                for _ in 0..100 {
                    if engine.advance().is_err() {
                        break;
                    }
                }
            })
        });
    }
}

fn bench_full_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Full Search");
    group.sample_size(10);

    let (width, height) = (128, 128);
    let uniform = BoolGrid::new(width, height);
    let random = random_map(width, height, 25);

    for (name, map) in [("Uniform", &uniform), ("Random", &random)] {
        for (mode, config) in [
            ("Default", SearchConfig::default()),
            ("Unbounded", SearchConfig::UNBOUNDED),
            ("Four Way", SearchConfig::FOUR_WAY),
        ] {
            let id = format!(
                "{} Map, {}, Map Size: ({}, {})",
                name, mode, width, height
            );
            group.bench_function(&id, |b| {
                b.iter(|| find_path(map, (0, 0), (width - 1, height - 1), config))
            });
        }
    }

    let queries: Vec<_> = (0..32)
        .map(|i| ((0, 0), (width - 1 - i, height / 2 + i)))
        .collect();
    #[cfg(feature = "parallel")]
    let id = "Many Searches, Random Map, Parallel";
    #[cfg(not(feature = "parallel"))]
    let id = "Many Searches, Random Map, Single Threaded";

    let results = find_paths(&random, &queries, SearchConfig::default());
    info!(
        "{} of {} searches reached their destination",
        results
            .iter()
            .filter(|r| matches!(r, Ok(r) if r.outcome == Outcome::Reached))
            .count(),
        queries.len()
    );
    group.bench_function(id, |b| {
        b.iter(|| find_paths(&random, &queries, SearchConfig::default()))
    });
}

criterion_group!(benches, bench_single_steps, bench_full_search);
criterion_main!(benches);
