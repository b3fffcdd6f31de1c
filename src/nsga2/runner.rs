//! NSGA-II generational loop.
//!
//! [`Nsga2Runner`] orchestrates the complete process:
//! initialization → evaluation → ranking → crowding → survivor selection →
//! tournament + SBX + mutation → repeat.

use super::config::Nsga2Config;
use super::crowding::assign_crowding_distances;
use super::individual::{IdSequence, Individual};
use super::operators::{mutate, simulated_binary_crossover, MutationParams, SbxParams};
use super::population::Population;
use super::ranking::{fast_non_dominated_sort, Front};
use super::selection::{sort_by_crowded_comparison, Selection};
use super::types::Evaluator;
use crate::error::{Nsga2Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

/// Result of an NSGA-II run.
#[derive(Debug, Clone)]
pub struct Nsga2Result {
    /// Rank-1 front of the last ranked parent+offspring population, with
    /// crowding distances assigned.
    pub best_front: Vec<Individual>,

    /// Parent population that survived the last generation.
    pub population: Population,

    /// Number of generations executed.
    pub generations: usize,

    /// Size of the rank-1 front at each generation.
    pub front_history: Vec<usize>,
}

/// Executes the NSGA-II loop.
///
/// # Usage
///
/// ```
/// use u_nsga2::nsga2::{Nsga2Config, Nsga2Runner};
///
/// let config = Nsga2Config::default()
///     .with_population_size(20)
///     .with_generations(10)
///     .with_genome_bounds(-10.0, 10.0)
///     .with_seed(42);
/// let schaffer = |g: &[f64]| vec![g[0] * g[0], (g[0] - 2.0) * (g[0] - 2.0)];
///
/// let result = Nsga2Runner::run(&schaffer, &config).unwrap();
/// assert!(result.best_front.iter().all(|i| i.rank() == Some(1)));
/// ```
pub struct Nsga2Runner;

impl Nsga2Runner {
    /// Runs NSGA-II with an RNG seeded from `config.seed`.
    ///
    /// # Errors
    /// Returns [`Nsga2Error::Config`] for an invalid configuration, or the
    /// first ranking error caused by the evaluator's output.
    pub fn run<E: Evaluator>(evaluator: &E, config: &Nsga2Config) -> Result<Nsga2Result> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(evaluator, config, &mut rng)
    }

    /// Runs NSGA-II drawing every random number from `rng`.
    ///
    /// `config.seed` is ignored.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            generations = config.generations,
            population_size = config.population_size,
            genotype_quantity = config.genotype_quantity
        )
    )]
    pub fn run_with_rng<E: Evaluator, R: Rng>(
        evaluator: &E,
        config: &Nsga2Config,
        rng: &mut R,
    ) -> Result<Nsga2Result> {
        config.validate()?;

        let target = config.population_size;
        let sbx = SbxParams::from_config(config);
        let mutation = MutationParams::from_config(config);
        let mut ids = IdSequence::new();

        // 1. Initial parents
        let mut parents = Population::with_capacity(target);
        parents.initiate(config.initial_population(), config, &mut ids, rng);
        evaluator.evaluate_population(&mut parents);
        tracing::info!(initial = parents.len(), "Initial population evaluated");

        // 2. First offspring, bred before any crowding distance exists
        fast_non_dominated_sort(&mut parents)?;
        let mut offspring = breed(
            &parents,
            Selection::ObjectiveTournament,
            target,
            &sbx,
            &mutation,
            &mut ids,
            rng,
        );
        evaluator.evaluate_population(&mut offspring);

        let mut best_front = Vec::new();
        let mut front_history = Vec::with_capacity(config.generations);

        // 3. Generational loop
        for gen in 0..config.generations {
            let mut merged = parents;
            merged.union(offspring);

            let mut fronts = fast_non_dominated_sort(&mut merged)?;
            assign_crowding_distances(&mut merged, &fronts)?;

            let first = fronts.first().ok_or(Nsga2Error::EmptyPopulation)?;
            front_history.push(first.len());
            let best: Vec<&Individual> = first.individuals(&merged).collect();
            evaluator.on_generation(gen + 1, &best);

            if gen + 1 == config.generations {
                best_front = best
                    .into_iter()
                    .map(|ind| {
                        let mut ind = ind.clone();
                        ind.dominated_set.clear();
                        ind
                    })
                    .collect();
            }

            tracing::debug!(
                generation = gen + 1,
                merged = merged.len(),
                fronts = fronts.len(),
                best_front = first.len(),
                "Ranked merged population"
            );

            parents = select_survivors(merged, &mut fronts, target);

            offspring = breed(
                &parents,
                Selection::CrowdedTournament,
                target,
                &sbx,
                &mutation,
                &mut ids,
                rng,
            );
            evaluator.evaluate_population(&mut offspring);
        }

        tracing::info!(
            generations = config.generations,
            best_front = best_front.len(),
            "Optimization finished"
        );

        Ok(Nsga2Result {
            best_front,
            population: parents,
            generations: config.generations,
            front_history,
        })
    }
}

/// Builds the next parent population from a ranked, crowding-scored
/// population.
///
/// Whole fronts are taken in rank order while they fit. The first front
/// that does not fit is sorted by the crowded-comparison operator and only
/// the prefix that fills `target` exactly is kept. Survivors are moved, not
/// copied.
pub(crate) fn select_survivors(
    merged: Population,
    fronts: &mut [Front],
    target: usize,
) -> Population {
    let mut chosen: Vec<usize> = Vec::with_capacity(target);

    for front in fronts.iter_mut() {
        if chosen.len() + front.len() <= target {
            chosen.extend_from_slice(front.members());
            if chosen.len() == target {
                break;
            }
        } else {
            let remaining = target - chosen.len();
            sort_by_crowded_comparison(&merged, front.members_mut());
            tracing::debug!(
                rank = front.rank(),
                kept = remaining,
                discarded = front.len() - remaining,
                "Truncating front"
            );
            chosen.extend_from_slice(&front.members()[..remaining]);
            break;
        }
    }

    let mut slots: Vec<Option<Individual>> = merged.into_iter().map(Some).collect();
    chosen.iter().filter_map(|&i| slots[i].take()).collect()
}

/// Breeds `count` children (in pairs) from `parents`.
fn breed<R: Rng>(
    parents: &Population,
    selection: Selection,
    count: usize,
    sbx: &SbxParams,
    mutation: &MutationParams,
    ids: &mut IdSequence,
    rng: &mut R,
) -> Population {
    let mut offspring = Population::with_capacity(count);

    while offspring.len() < count {
        let parent1 = selection.select(parents, rng);
        let parent2 = selection.select(parents, rng);

        let (mut child1, mut child2) =
            simulated_binary_crossover(&parent1.genome, &parent2.genome, sbx, rng);
        mutate(&mut child1, mutation, rng);
        mutate(&mut child2, mutation, rng);

        offspring.insert(Individual::new(ids.next_id(), child1));
        if offspring.len() < count {
            offspring.insert(Individual::new(ids.next_id(), child2));
        }
    }

    offspring
}

// ============================================================================
// Tests
// ============================================================================
