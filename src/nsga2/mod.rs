//! NSGA-II: Non-dominated Sorting Genetic Algorithm II.
//!
//! A generational, elitist multi-objective optimizer over real-valued
//! genomes. Users supply gene bounds and an [`Evaluator`]; the runner
//! returns the best Pareto front found after a fixed number of generations.
//!
//! # Key Types
//!
//! - [`Nsga2Config`]: Algorithm parameters (population size, bounds, SBX, mutation)
//! - [`Nsga2Runner`]: Executes the generational loop
//! - [`Nsga2Result`]: Best front, final population and per-generation statistics
//! - [`Individual`], [`Population`], [`Front`]: The data model
//!
//! # Submodules
//!
//! - [`ranking`]: Fast non-dominated sorting
//! - [`crowding`]: Crowding distance assignment
//! - [`selection`]: Crowded-comparison operator and binary tournaments
//! - [`operators`]: Simulated binary crossover and bounded mutation
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*
//! - Deb & Agrawal (1995), *Simulated Binary Crossover for Continuous Search Space*

mod config;
pub mod crowding;
mod individual;
pub mod operators;
mod population;
pub mod ranking;
mod runner;
pub mod selection;
mod types;

pub use config::Nsga2Config;
pub use individual::{CrowdingDistance, IdSequence, Individual, IndividualId};
pub use population::{GeneKind, Population};
pub use ranking::{fast_non_dominated_sort, Front};
pub use runner::{Nsga2Result, Nsga2Runner};
pub use selection::{crowded_cmp, Selection};
pub use types::Evaluator;
