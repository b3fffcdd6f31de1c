//! Parent selection and the crowded-comparison operator.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective GA: NSGA-II", §III-C
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::individual::{CrowdingDistance, Individual};
use super::population::Population;
use rand::Rng;
use std::cmp::Ordering;

/// Crowded-comparison operator (`≺n`).
///
/// Returns [`Ordering::Less`] when `a` is preferred: lower rank first, then
/// larger crowding distance. Unranked individuals sort after every ranked
/// one and a missing distance counts as zero. Equal rank and distance give
/// [`Ordering::Equal`]; callers keep the first-encountered individual.
pub fn crowded_cmp(a: &Individual, b: &Individual) -> Ordering {
    let rank = |i: &Individual| i.rank().unwrap_or(usize::MAX);
    let distance = |i: &Individual| i.crowding_distance().unwrap_or(CrowdingDistance::ZERO);

    rank(a)
        .cmp(&rank(b))
        .then_with(|| distance(b).total_cmp(&distance(a)))
}

/// Sorts population indices best-first under [`crowded_cmp`].
///
/// The sort is stable: tied individuals keep their relative order.
pub fn sort_by_crowded_comparison(population: &Population, members: &mut [usize]) {
    members.sort_by(|&a, &b| crowded_cmp(&population[a], &population[b]));
}

/// Parent selection strategy.
///
/// Both strategies are binary tournaments drawing two candidates uniformly
/// with replacement. On a tie the first candidate wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Winner by [`crowded_cmp`]. Requires ranks and crowding distances.
    #[default]
    CrowdedTournament,

    /// Winner is the candidate with the lower value on more objectives.
    ///
    /// Used to breed the first offspring, before any crowding distance
    /// exists. Scores objective values, not genome values, so it works for
    /// any number of genes.
    ObjectiveTournament,
}

impl Selection {
    /// Selects one parent.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<'a, R: Rng>(&self, population: &'a Population, rng: &mut R) -> &'a Individual {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        let first = population.random_member(rng);
        let second = population.random_member(rng);

        let second_wins = match self {
            Selection::CrowdedTournament => crowded_cmp(second, first) == Ordering::Less,
            Selection::ObjectiveTournament => objective_wins(second, first) > objective_wins(first, second),
        };

        if second_wins {
            second
        } else {
            first
        }
    }
}

/// Number of objectives on which `a` is strictly lower than `b`.
fn objective_wins(a: &Individual, b: &Individual) -> usize {
    a.objectives
        .iter()
        .zip(b.objectives.iter())
        .filter(|(x, y)| x < y)
        .count()
}
