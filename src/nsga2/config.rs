//! NSGA-II configuration.
//!
//! [`Nsga2Config`] holds all parameters that control the generational loop.

use super::population::GeneKind;
use crate::error::ConfigError;

/// Configuration for NSGA-II.
///
/// # Defaults
///
/// ```
/// use u_nsga2::nsga2::Nsga2Config;
///
/// let config = Nsga2Config::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.initial_population(), 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_nsga2::nsga2::Nsga2Config;
///
/// let config = Nsga2Config::default()
///     .with_population_size(40)
///     .with_genome_bounds(-5.0, 5.0)
///     .with_genotype_quantity(3)
///     .with_crossover_constant(20.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsga2Config {
    /// Number of generations to run.
    pub generations: usize,

    /// Size of every parent and offspring population ("N").
    ///
    /// Must be even: offspring are bred in pairs.
    pub population_size: usize,

    /// Lower gene bound.
    pub genome_min_value: f64,

    /// Upper gene bound. Must be greater than `genome_min_value`.
    pub genome_max_value: f64,

    /// SBX distribution index η. Larger values keep children closer to
    /// their parents.
    pub crossover_constant: f64,

    /// Probability of applying SBX to a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, both children are copies of the parents.
    pub crossover_rate: f64,

    /// Number of genes per individual.
    pub genotype_quantity: usize,

    /// Probability that a produced genome is mutated at all.
    ///
    /// `None` uses `1 / genotype_quantity`.
    pub mutation_rate: Option<f64>,

    /// Probability of perturbing each gene of a genome selected for mutation.
    pub gene_mutation_probability: f64,

    /// Relative size of a mutation step: a gene `g` moves by `±g * disturb_fraction`.
    pub disturb_fraction: f64,

    /// Size of the randomly initialized first parent population.
    ///
    /// `None` uses `population_size / 2`.
    pub initial_population_size: Option<usize>,

    /// Distribution of initial gene values.
    pub gene_kind: GeneKind,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for Nsga2Config {
    fn default() -> Self {
        Self {
            generations: 100,
            population_size: 100,
            genome_min_value: 0.0,
            genome_max_value: 1.0,
            crossover_constant: 5.0,
            crossover_rate: 0.9,
            genotype_quantity: 1,
            mutation_rate: None,
            gene_mutation_probability: 0.5,
            disturb_fraction: 0.5,
            initial_population_size: None,
            gene_kind: GeneKind::Real,
            seed: None,
        }
    }
}

impl Nsga2Config {
    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the gene bounds.
    pub fn with_genome_bounds(mut self, min: f64, max: f64) -> Self {
        self.genome_min_value = min;
        self.genome_max_value = max;
        self
    }

    /// Sets the SBX distribution index.
    pub fn with_crossover_constant(mut self, eta: f64) -> Self {
        self.crossover_constant = eta.max(0.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of genes per individual.
    pub fn with_genotype_quantity(mut self, n: usize) -> Self {
        self.genotype_quantity = n;
        self
    }

    /// Overrides the whole-genome mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = Some(rate.clamp(0.0, 1.0));
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn with_gene_mutation_probability(mut self, p: f64) -> Self {
        self.gene_mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the relative mutation step.
    pub fn with_disturb_fraction(mut self, fraction: f64) -> Self {
        self.disturb_fraction = fraction.max(0.0);
        self
    }

    /// Overrides the size of the initial parent population.
    pub fn with_initial_population_size(mut self, n: usize) -> Self {
        self.initial_population_size = Some(n);
        self
    }

    /// Sets how initial genes are drawn.
    pub fn with_gene_kind(mut self, kind: GeneKind) -> Self {
        self.gene_kind = kind;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Whole-genome mutation rate in effect.
    pub fn effective_mutation_rate(&self) -> f64 {
        self.mutation_rate
            .unwrap_or_else(|| 1.0 / self.genotype_quantity.max(1) as f64)
    }

    /// Size of the initial parent population in effect.
    pub fn initial_population(&self) -> usize {
        self.initial_population_size
            .unwrap_or(self.population_size / 2)
    }

    /// Validates the configuration.
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.population_size < 2 {
            return Err(ConfigError::ZeroPopulation);
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::OddPopulationSize(self.population_size));
        }
        // Also rejects NaN bounds.
        if !(self.genome_min_value < self.genome_max_value) {
            return Err(ConfigError::InvalidGenomeBounds {
                min: self.genome_min_value,
                max: self.genome_max_value,
            });
        }
        if self.gene_kind == GeneKind::Integer
            && self.genome_min_value.ceil() > self.genome_max_value.floor()
        {
            return Err(ConfigError::EmptyIntegerRange);
        }
        if self.genotype_quantity == 0 {
            return Err(ConfigError::ZeroGenotypes);
        }
        if !(self.crossover_constant >= 0.0) {
            return Err(ConfigError::NegativeDistributionIndex(self.crossover_constant));
        }
        check_probability("crossover_rate", self.crossover_rate)?;
        check_probability("mutation_rate", self.effective_mutation_rate())?;
        check_probability("gene_mutation_probability", self.gene_mutation_probability)?;
        if !(self.disturb_fraction >= 0.0) {
            return Err(ConfigError::InvalidProbability {
                name: "disturb_fraction",
                value: self.disturb_fraction,
            });
        }
        let initial = self.initial_population();
        if initial == 0 || initial > self.population_size {
            return Err(ConfigError::InvalidInitialPopulation(initial));
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { name, value })
    }
}
