//! Criterion benchmarks for the NSGA-II engine.
//!
//! Uses synthetic objective vectors and the ZDT1 problem to measure
//! algorithm overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_nsga2::nsga2::{
    crowding, fast_non_dominated_sort, IdSequence, Individual, Nsga2Config, Nsga2Runner,
    Population,
};

fn random_population(n: usize, objectives: usize, seed: u64) -> Population {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ids = IdSequence::new();
    (0..n)
        .map(|_| {
            let objs = (0..objectives).map(|_| rng.random_range(0.0..1.0)).collect();
            Individual::with_objectives(ids.next_id(), vec![], objs)
        })
        .collect()
}

fn zdt1(genome: &[f64]) -> Vec<f64> {
    let f1 = genome[0].clamp(0.0, 1.0);
    let tail: f64 = genome[1..].iter().map(|x| x.max(0.0)).sum();
    let g = 1.0 + 9.0 * tail / (genome.len() - 1) as f64;
    vec![f1, g * (1.0 - (f1 / g).sqrt())]
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("fast_non_dominated_sort");
    for n in [50, 200, 800] {
        let pop = random_population(n, 3, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &pop, |b, pop| {
            b.iter(|| {
                let mut pop = pop.clone();
                black_box(fast_non_dominated_sort(&mut pop).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_crowding(c: &mut Criterion) {
    let mut pop = random_population(400, 3, 7);
    let fronts = fast_non_dominated_sort(&mut pop).unwrap();
    c.bench_function("crowding_distance_400", |b| {
        b.iter(|| {
            crowding::assign_crowding_distances(&mut pop, &fronts).unwrap();
            black_box(&pop);
        })
    });
}

fn bench_run(c: &mut Criterion) {
    let config = Nsga2Config::default()
        .with_population_size(100)
        .with_generations(50)
        .with_genotype_quantity(30)
        .with_crossover_constant(20.0)
        .with_seed(42);
    c.bench_function("nsga2_zdt1_100x50", |b| {
        b.iter(|| black_box(Nsga2Runner::run(&zdt1, &config).unwrap()))
    });
}

criterion_group!(benches, bench_sort, bench_crowding, bench_run);
criterion_main!(benches);
