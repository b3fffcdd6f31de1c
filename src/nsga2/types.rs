//! The evaluator contract.
//!
//! The optimizer never computes objectives itself. An [`Evaluator`] maps a
//! genome to its objective vector; how objectives are computed or
//! normalized is entirely up to the implementation.

use super::individual::Individual;
use super::population::Population;

/// Computes objective vectors from genomes.
///
/// All objectives are **minimized**. Every call within a run must return a
/// vector of the same length, in the same objective order; the ranking step
/// rejects populations that violate this.
///
/// Closures `Fn(&[f64]) -> Vec<f64>` implement this trait.
///
/// # Implementing
///
/// ```
/// use u_nsga2::nsga2::Evaluator;
///
/// struct SchafferN1;
///
/// impl Evaluator for SchafferN1 {
///     fn evaluate(&self, genome: &[f64]) -> Vec<f64> {
///         let x = genome[0];
///         vec![x * x, (x - 2.0) * (x - 2.0)]
///     }
/// }
///
/// assert_eq!(SchafferN1.evaluate(&[1.0]), vec![1.0, 1.0]);
/// ```
pub trait Evaluator {
    /// Returns the objective vector of one genome.
    fn evaluate(&self, genome: &[f64]) -> Vec<f64>;

    /// Attaches objective vectors to every member of `population`.
    ///
    /// The default implementation calls [`evaluate`](Evaluator::evaluate)
    /// once per member, in order.
    fn evaluate_population(&self, population: &mut Population) {
        for ind in population.iter_mut() {
            ind.objectives = self.evaluate(&ind.genome);
        }
    }

    /// Called at the end of each generation with the current best front.
    ///
    /// Useful for logging or progress reporting. The default
    /// implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_front: &[&Individual]) {}
}

impl<F> Evaluator for F
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    fn evaluate(&self, genome: &[f64]) -> Vec<f64> {
        self(genome)
    }
}
