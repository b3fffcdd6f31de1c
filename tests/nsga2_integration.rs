//! End-to-end runs on classic two-objective test problems.

use rand::rngs::StdRng;
use rand::SeedableRng;
use u_nsga2::nsga2::{
    crowding, fast_non_dominated_sort, CrowdingDistance, Evaluator, GeneKind, IdSequence,
    Individual, Nsga2Config, Nsga2Runner, Population,
};
use u_nsga2::{ConfigError, Nsga2Error};

// ===========================================================================
// ZDT1: convex front f2 = 1 - sqrt(f1), reached when x[1..] = 0
// ===========================================================================

struct Zdt1;

impl Zdt1 {
    fn g(genome: &[f64]) -> f64 {
        let tail: f64 = genome[1..].iter().map(|x| x.max(0.0)).sum();
        1.0 + 9.0 * tail / (genome.len() - 1) as f64
    }
}

impl Evaluator for Zdt1 {
    fn evaluate(&self, genome: &[f64]) -> Vec<f64> {
        let f1 = genome[0].clamp(0.0, 1.0);
        let g = Self::g(genome);
        vec![f1, g * (1.0 - (f1 / g).sqrt())]
    }
}

#[test]
fn zdt1_front_approaches_optimum() {
    let config = Nsga2Config::default()
        .with_population_size(60)
        .with_generations(150)
        .with_genotype_quantity(10)
        .with_crossover_constant(20.0)
        .with_seed(2024);

    let result = Nsga2Runner::run(&Zdt1, &config).unwrap();

    assert_eq!(result.population.len(), 60);
    let mean_g = result
        .best_front
        .iter()
        .map(|i| Zdt1::g(&i.genome))
        .sum::<f64>()
        / result.best_front.len() as f64;
    // Random genomes start around g = 5.5
    assert!(mean_g < 3.0, "expected best front near g = 1, got mean g {mean_g}");
}

#[test]
fn survivors_carry_rank_and_distance() {
    let config = Nsga2Config::default()
        .with_population_size(24)
        .with_generations(10)
        .with_genotype_quantity(4)
        .with_seed(3);

    let result = Nsga2Runner::run(&Zdt1, &config).unwrap();
    for ind in &result.population {
        assert!(ind.rank().is_some());
        assert!(ind.crowding_distance().is_some());
        assert_eq!(ind.objectives.len(), 2);
    }
    let mut ids: Vec<_> = result.population.iter().map(|i| i.id()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 24);
}

#[test]
fn mutation_keeps_genes_in_bounds_without_crossover() {
    // With crossover disabled every gene comes from initialization or the
    // clamped mutation, so bounds always hold.
    let config = Nsga2Config::default()
        .with_population_size(20)
        .with_generations(20)
        .with_genotype_quantity(3)
        .with_genome_bounds(1.0, 4.0)
        .with_crossover_rate(0.0)
        .with_mutation_rate(1.0)
        .with_gene_kind(GeneKind::Integer)
        .with_seed(8);
    let sphere_pair = |g: &[f64]| {
        vec![
            g.iter().map(|x| x * x).sum::<f64>(),
            g.iter().map(|x| (x - 4.0) * (x - 4.0)).sum::<f64>(),
        ]
    };

    let result = Nsga2Runner::run(&sphere_pair, &config).unwrap();
    for ind in result.population.iter().chain(result.best_front.iter()) {
        assert!(ind.genome.iter().all(|g| (1.0..=4.0).contains(g)));
    }
}

// ===========================================================================
// Ranking scenarios through the public API
// ===========================================================================

fn population(objectives: &[[f64; 2]]) -> Population {
    let mut ids = IdSequence::new();
    objectives
        .iter()
        .map(|o| Individual::with_objectives(ids.next_id(), vec![], o.to_vec()))
        .collect()
}

#[test]
fn trade_off_points_form_one_front() {
    let mut pop = population(&[[1.0, 4.0], [2.0, 3.0], [3.0, 2.0], [4.0, 1.0]]);
    let fronts = fast_non_dominated_sort(&mut pop).unwrap();
    crowding::assign_crowding_distances(&mut pop, &fronts).unwrap();

    assert_eq!(fronts.len(), 1);
    assert!(pop.iter().all(|i| i.rank() == Some(1)));
    assert_eq!(pop[0].crowding_distance(), Some(CrowdingDistance::Infinite));
    assert_eq!(pop[3].crowding_distance(), Some(CrowdingDistance::Infinite));
    // Interior: (3 - 1) / 3 on each objective
    let d = pop[1].crowding_distance().unwrap().to_f64();
    assert!((d - 4.0 / 3.0).abs() < 1e-12);
}

#[test]
fn chain_gives_singleton_fronts() {
    let mut pop = population(&[[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]);
    let fronts = fast_non_dominated_sort(&mut pop).unwrap();
    let ranks: Vec<_> = fronts.iter().map(|f| (f.rank(), f.len())).collect();
    assert_eq!(ranks, vec![(1, 1), (2, 1), (3, 1)]);
}

#[test]
fn seeded_rng_reproduces_run() {
    let config = Nsga2Config::default()
        .with_population_size(16)
        .with_generations(12)
        .with_genotype_quantity(5);

    let a = Nsga2Runner::run_with_rng(&Zdt1, &config, &mut StdRng::seed_from_u64(17)).unwrap();
    let b = Nsga2Runner::run_with_rng(&Zdt1, &config, &mut StdRng::seed_from_u64(17)).unwrap();

    let objectives = |pop: &Population| pop.iter().map(|i| i.objectives.clone()).collect::<Vec<_>>();
    assert_eq!(objectives(&a.population), objectives(&b.population));
}

#[test]
fn invalid_bounds_rejected_before_running() {
    let config = Nsga2Config::default().with_genome_bounds(3.0, 1.0);
    let err = Nsga2Runner::run(&Zdt1, &config).unwrap_err();
    assert_eq!(
        err,
        Nsga2Error::Config(ConfigError::InvalidGenomeBounds { min: 3.0, max: 1.0 })
    );
    assert!(err.to_string().contains("genome_min_value"));
}
