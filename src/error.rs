//! Error types.
//!
//! Configuration problems are reported as [`ConfigError`] before a run
//! starts. Everything that can go wrong while the loop is running is an
//! [`Nsga2Error`]; the run aborts on the first one.

use crate::nsga2::IndividualId;

/// Invalid optimizer configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("generations must be at least 1")]
    ZeroGenerations,
    #[error("population_size must be at least 2")]
    ZeroPopulation,
    #[error("population_size must be even, got {0}")]
    OddPopulationSize(usize),
    #[error("genome_min_value ({min}) must be lower than genome_max_value ({max})")]
    InvalidGenomeBounds { min: f64, max: f64 },
    #[error("genotype_quantity must be at least 1")]
    ZeroGenotypes,
    #[error("crossover_constant must be non-negative, got {0}")]
    NegativeDistributionIndex(f64),
    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("initial_population_size must be between 1 and population_size, got {0}")]
    InvalidInitialPopulation(usize),
    #[error("integer genome bounds contain no integer")]
    EmptyIntegerRange,
}

/// Errors raised while ranking or evolving a population.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Nsga2Error {
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("DimensionMismatch: individual {id} has {found} objectives, expected {expected}")]
    DimensionMismatch {
        id: IndividualId,
        expected: usize,
        found: usize,
    },
    #[error("MissingObjectives: individual {id} has not been evaluated")]
    MissingObjectives { id: IndividualId },
    #[error("NonFiniteObjective: individual {id} has objective {index} = {value}")]
    NonFiniteObjective {
        id: IndividualId,
        index: usize,
        value: f64,
    },
    #[error("EmptyPopulation: cannot operate on an empty population")]
    EmptyPopulation,
}

/// Shorthand for results carrying an [`Nsga2Error`].
pub type Result<T> = std::result::Result<T, Nsga2Error>;
