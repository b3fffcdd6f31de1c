//! Fast non-dominated sorting.
//!
//! Partitions a population into Pareto fronts. Front 0 holds every
//! individual no other member dominates; front `k + 1` holds those
//! dominated only by members of fronts `0..=k`.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

use super::individual::Individual;
use super::population::{self, Population};
use crate::error::{Nsga2Error, Result};
use tracing::instrument;

/// One Pareto front: indices into the population it was computed from.
///
/// Fronts are only valid until that population is modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Front {
    rank: usize,
    members: Vec<usize>,
}

impl Front {
    pub(crate) fn new(rank: usize, members: Vec<usize>) -> Self {
        Self { rank, members }
    }

    /// 1-based rank shared by every member.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Population indices, in discovery order.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over the referenced individuals.
    pub fn individuals<'a>(
        &'a self,
        population: &'a Population,
    ) -> impl Iterator<Item = &'a Individual> + 'a {
        self.members.iter().map(move |&i| &population[i])
    }

    /// Min and max of one objective across the front.
    pub fn extreme_values(&self, population: &Population, objective_index: usize) -> Result<(f64, f64)> {
        population::extreme_values(self.individuals(population), objective_index)
    }

    /// Clones the members into a standalone population.
    pub fn to_population(&self, population: &Population) -> Population {
        self.individuals(population).cloned().collect()
    }

    pub(crate) fn members_mut(&mut self) -> &mut Vec<usize> {
        &mut self.members
    }
}

/// Dominance relation between two objective vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other.
    Neither,
}

/// Compares two objective vectors for Pareto dominance (minimization).
///
/// Both slices must have the same length.
pub fn dominance_cmp(a: &[f64], b: &[f64]) -> Dominance {
    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va < vb {
            a_better_in_some = true;
        } else if vb < va {
            b_better_in_some = true;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Checks that every member carries a non-empty objective vector of the
/// same length as the first member's, holding only finite values.
///
/// Returns the objective count.
pub fn check_objective_dimensions(population: &Population) -> Result<usize> {
    let first = population.get(0).ok_or(Nsga2Error::EmptyPopulation)?;
    let expected = first.objectives.len();

    for ind in population {
        if ind.objectives.is_empty() {
            return Err(Nsga2Error::MissingObjectives { id: ind.id() });
        }
        if ind.objectives.len() != expected {
            return Err(Nsga2Error::DimensionMismatch {
                id: ind.id(),
                expected,
                found: ind.objectives.len(),
            });
        }
        if let Some((index, &value)) = ind
            .objectives
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite())
        {
            return Err(Nsga2Error::NonFiniteObjective {
                id: ind.id(),
                index,
                value,
            });
        }
    }
    Ok(expected)
}

/// Fast non-dominated sort.
///
/// Resets the ranking bookkeeping of every member, records pairwise
/// dominance (`domination_count`, `dominated_set`), assigns ranks and
/// returns the fronts in increasing rank order. The trailing empty front
/// is never returned.
///
/// The result depends only on the dominance relation: every member lands
/// in exactly one front, and front 0 is exactly the set of members with a
/// zero domination count.
///
/// # Complexity
///
/// O(m * n²) where m = number of objectives, n = population size
///
/// # Errors
///
/// [`Nsga2Error::EmptyPopulation`], [`Nsga2Error::MissingObjectives`],
/// [`Nsga2Error::DimensionMismatch`] or [`Nsga2Error::NonFiniteObjective`]
/// if the objective vectors cannot be compared.
#[instrument(level = "debug", skip(population), fields(size = population.len()))]
pub fn fast_non_dominated_sort(population: &mut Population) -> Result<Vec<Front>> {
    check_objective_dimensions(population)?;

    let members = population.as_mut_slice();
    let n = members.len();
    for ind in members.iter_mut() {
        ind.reset_ranking();
    }

    let mut front_0 = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance_cmp(&members[i].objectives, &members[j].objectives) {
                Dominance::Left => {
                    members[i].dominated_set.push(j);
                    members[j].domination_count += 1;
                }
                Dominance::Right => {
                    members[j].dominated_set.push(i);
                    members[i].domination_count += 1;
                }
                Dominance::Neither => {}
            }
        }

        // Every pair involving i has been compared by now.
        if members[i].domination_count == 0 {
            members[i].rank = Some(1);
            front_0.push(i);
        }
    }

    // The stored counts stay intact; peeling works on a copy.
    let mut remaining: Vec<usize> = members.iter().map(|ind| ind.domination_count).collect();
    let mut fronts = vec![Front::new(1, front_0)];

    while let Some(current) = fronts.last() {
        let next_rank = current.rank + 1;
        let mut next_front = Vec::new();

        for &i in &current.members {
            for &j in &members[i].dominated_set {
                remaining[j] -= 1;
                if remaining[j] == 0 {
                    next_front.push(j);
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        for &j in &next_front {
            members[j].rank = Some(next_rank);
        }
        fronts.push(Front::new(next_rank, next_front));
    }

    Ok(fronts)
}
