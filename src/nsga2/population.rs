//! Ordered collections of individuals.

use super::config::Nsga2Config;
use super::individual::{IdSequence, Individual, IndividualId};
use crate::error::{Nsga2Error, Result};
use rand::Rng;

/// How initial genes are drawn from `[genome_min_value, genome_max_value]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneKind {
    /// Uniform real values.
    #[default]
    Real,
    /// Uniform integers from the inclusive range `[ceil(min), floor(max)]`,
    /// stored as `f64`.
    Integer,
}

impl GeneKind {
    /// Draws one gene value.
    ///
    /// # Panics
    /// Panics if the bounds are empty for this kind; [`Nsga2Config::validate`]
    /// rejects such bounds.
    pub fn sample<R: Rng>(self, min: f64, max: f64, rng: &mut R) -> f64 {
        match self {
            GeneKind::Real => rng.random_range(min..=max),
            GeneKind::Integer => {
                let lo = min.ceil() as i64;
                let hi = max.floor() as i64;
                rng.random_range(lo..=hi) as f64
            }
        }
    }
}

/// An ordered, mutable collection of individuals.
///
/// Order is insertion order. Members are owned; fronts refer to them by
/// index (see [`Front`](super::Front)).
#[derive(Debug, Clone, Default)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates an empty population.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty population with room for `capacity` members.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
        }
    }

    /// Appends `count` random individuals drawn within the configured bounds.
    pub fn initiate<R: Rng>(
        &mut self,
        count: usize,
        config: &Nsga2Config,
        ids: &mut IdSequence,
        rng: &mut R,
    ) {
        self.individuals.reserve(count);
        for _ in 0..count {
            let genome = (0..config.genotype_quantity)
                .map(|_| {
                    config
                        .gene_kind
                        .sample(config.genome_min_value, config.genome_max_value, rng)
                })
                .collect();
            self.insert(Individual::new(ids.next_id(), genome));
        }
    }

    /// Appends an individual.
    pub fn insert(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Moves every member of `other` into `self`, keeping their identities.
    pub fn union(&mut self, other: Population) {
        self.individuals.extend(other.individuals);
    }

    /// Removes and returns the member with the given id.
    pub fn delete(&mut self, id: IndividualId) -> Option<Individual> {
        let pos = self.individuals.iter().position(|ind| ind.id() == id)?;
        Some(self.individuals.remove(pos))
    }

    /// Uniform draw with replacement.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn random_member<R: Rng>(&self, rng: &mut R) -> &Individual {
        assert!(
            !self.individuals.is_empty(),
            "cannot draw from empty population"
        );
        &self.individuals[rng.random_range(0..self.individuals.len())]
    }

    /// Minimum and maximum of one objective across all members.
    pub fn extreme_values(&self, objective_index: usize) -> Result<(f64, f64)> {
        extreme_values(self.individuals.iter(), objective_index)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Returns `true` if the population has no members.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Member at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Iterates over members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    /// Iterates mutably over members in insertion order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Individual> {
        self.individuals.iter_mut()
    }

    /// Members as a slice.
    pub fn as_slice(&self) -> &[Individual] {
        &self.individuals
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    /// Consumes the population, returning its members.
    pub fn into_vec(self) -> Vec<Individual> {
        self.individuals
    }
}

impl From<Vec<Individual>> for Population {
    fn from(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<T: IntoIterator<Item = Individual>>(iter: T) -> Self {
        Self {
            individuals: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Population {
    type Item = Individual;
    type IntoIter = std::vec::IntoIter<Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Individual {
        &self.individuals[index]
    }
}

impl std::ops::IndexMut<usize> for Population {
    fn index_mut(&mut self, index: usize) -> &mut Individual {
        &mut self.individuals[index]
    }
}

/// Min and max of `objective_index` over `members`.
pub(crate) fn extreme_values<'a>(
    members: impl IntoIterator<Item = &'a Individual>,
    objective_index: usize,
) -> Result<(f64, f64)> {
    let mut extremes: Option<(f64, f64)> = None;
    for ind in members {
        let value = *ind
            .objectives
            .get(objective_index)
            .ok_or(Nsga2Error::DimensionMismatch {
                id: ind.id(),
                expected: objective_index + 1,
                found: ind.objectives.len(),
            })?;
        extremes = Some(match extremes {
            None => (value, value),
            Some((lo, hi)) => (lo.min(value), hi.max(value)),
        });
    }
    extremes.ok_or(Nsga2Error::EmptyPopulation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn evaluated(objectives: &[&[f64]]) -> Population {
        let mut ids = IdSequence::new();
        objectives
            .iter()
            .map(|o| Individual::with_objectives(ids.next_id(), vec![], o.to_vec()))
            .collect()
    }

    // ---- Initialization ----

    #[test]
    fn test_initiate_within_bounds() {
        let config = Nsga2Config::default()
            .with_genome_bounds(-2.0, 3.0)
            .with_genotype_quantity(4);
        let mut rng = StdRng::seed_from_u64(42);
        let mut ids = IdSequence::new();
        let mut pop = Population::new();
        pop.initiate(50, &config, &mut ids, &mut rng);

        assert_eq!(pop.len(), 50);
        for ind in &pop {
            assert_eq!(ind.genome.len(), 4);
            assert!(ind.genome.iter().all(|g| (-2.0..=3.0).contains(g)));
            assert!(ind.objectives.is_empty());
        }
    }

    #[test]
    fn test_initiate_integer_genes() {
        let config = Nsga2Config::default()
            .with_genome_bounds(0.5, 4.5)
            .with_genotype_quantity(3)
            .with_gene_kind(GeneKind::Integer);
        let mut rng = StdRng::seed_from_u64(7);
        let mut pop = Population::new();
        pop.initiate(40, &config, &mut IdSequence::new(), &mut rng);

        for ind in &pop {
            for &g in &ind.genome {
                assert_eq!(g, g.round());
                assert!((1.0..=4.0).contains(&g), "gene {g} outside integer range");
            }
        }
    }

    #[test]
    fn test_initiate_assigns_unique_ids() {
        let config = Nsga2Config::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut ids = IdSequence::new();
        let mut pop = Population::new();
        pop.initiate(10, &config, &mut ids, &mut rng);
        pop.initiate(10, &config, &mut ids, &mut rng);

        let mut seen: Vec<_> = pop.iter().map(|i| i.id()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 20);
    }

    // ---- Set operations ----

    #[test]
    fn test_insert_and_union() {
        let mut a = evaluated(&[&[1.0], &[2.0]]);
        let b = evaluated(&[&[3.0]]);
        let b_id = b[0].id();
        a.insert(Individual::new(IndividualId(99), vec![0.0]));
        a.union(b);
        assert_eq!(a.len(), 4);
        assert_eq!(a[3].id(), b_id);
    }

    #[test]
    fn test_delete() {
        let mut pop = evaluated(&[&[1.0], &[2.0], &[3.0]]);
        let id = pop[1].id();
        let removed = pop.delete(id).expect("member exists");
        assert_eq!(removed.objectives, vec![2.0]);
        assert_eq!(pop.len(), 2);
        assert!(pop.delete(id).is_none());
    }

    #[test]
    fn test_random_member_covers_population() {
        let pop = evaluated(&[&[1.0], &[2.0], &[3.0]]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 3];
        for _ in 0..3000 {
            let drawn = pop.random_member(&mut rng);
            let idx = pop.iter().position(|i| i.id() == drawn.id()).unwrap();
            counts[idx] += 1;
        }
        for &c in &counts {
            assert!(c > 800, "expected uniform draws, got {counts:?}");
        }
    }

    #[test]
    #[should_panic(expected = "cannot draw from empty population")]
    fn test_random_member_empty_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        Population::new().random_member(&mut rng);
    }

    // ---- Extremes ----

    #[test]
    fn test_extreme_values() {
        let pop = evaluated(&[&[3.0, -1.0], &[1.0, 5.0], &[2.0, 0.0]]);
        assert_eq!(pop.extreme_values(0), Ok((1.0, 3.0)));
        assert_eq!(pop.extreme_values(1), Ok((-1.0, 5.0)));
    }

    #[test]
    fn test_extreme_values_errors() {
        assert_eq!(
            Population::new().extreme_values(0),
            Err(Nsga2Error::EmptyPopulation)
        );
        let pop = evaluated(&[&[1.0]]);
        assert!(matches!(
            pop.extreme_values(1),
            Err(Nsga2Error::DimensionMismatch { found: 1, .. })
        ));
    }
}
