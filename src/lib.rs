//! Multi-objective evolutionary optimization with NSGA-II.
//!
//! Evolves a population of real-valued genomes toward the Pareto-optimal
//! trade-off surface of several competing objectives:
//!
//! - **Fast non-dominated sorting**: partitions a population into ranked
//!   Pareto fronts in O(m·n²).
//! - **Crowding distance**: density estimate that keeps each front spread out.
//! - **Variation**: simulated binary crossover (SBX) and bounded mutation.
//! - **Selection**: binary tournaments under the crowded-comparison operator,
//!   elitist truncation of the merged parent + offspring population.
//!
//! # Architecture
//!
//! The crate contains no objective functions. Problems plug in through the
//! [`nsga2::Evaluator`] trait (closures work too), and all randomness is
//! drawn from a single injectable [`rand::Rng`].
//!
//! # Example
//!
//! ```
//! use u_nsga2::nsga2::{Nsga2Config, Nsga2Runner};
//!
//! let config = Nsga2Config::default()
//!     .with_population_size(20)
//!     .with_generations(5)
//!     .with_seed(7);
//! let result = Nsga2Runner::run(&|g: &[f64]| vec![g[0], 1.0 - g[0]], &config).unwrap();
//! assert!(!result.best_front.is_empty());
//! ```

pub mod error;
pub mod nsga2;

pub use error::{ConfigError, Nsga2Error};
