//! Real-coded variation operators.
//!
//! # Crossover
//!
//! - [`simulated_binary_crossover`] (SBX): Deb & Agrawal (1995), two
//!   children spread around the parents' midpoint with a polynomial
//!   distribution controlled by the distribution index η
//!
//! # Mutation
//!
//! - [`mutate`]: gated relative perturbation, clamped into the gene bounds
//!
//! # References
//!
//! - Deb & Agrawal (1995), "Simulated Binary Crossover for Continuous Search Space"
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective GA: NSGA-II"

use super::config::Nsga2Config;
use rand::Rng;

/// Genes closer than this are treated as equal by SBX.
pub const SBX_EPSILON: f64 = 1e-14;

// ============================================================================
// Crossover
// ============================================================================

/// Parameters of [`simulated_binary_crossover`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SbxParams {
    /// Distribution index η.
    pub distribution_index: f64,
    /// Probability of recombining at all.
    pub crossover_rate: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl SbxParams {
    pub fn from_config(config: &Nsga2Config) -> Self {
        Self {
            distribution_index: config.crossover_constant,
            crossover_rate: config.crossover_rate,
            lower_bound: config.genome_min_value,
            upper_bound: config.genome_max_value,
        }
    }
}

/// Simulated Binary Crossover (SBX).
///
/// With probability `1 - crossover_rate` the children are copies of the
/// parents. Otherwise every gene `j` is recombined independently with
/// `y1 = min(p1[j], p2[j])`, `y2 = max(p1[j], p2[j])` and `u ~ U(0, 1)`:
///
/// ```text
/// β  = 1 + 2 · min(y1 - lower, upper - y2) / (y2 - y1)
/// α  = 2 - β^-(η+1)
/// β̄  = (α·u)^(1/(η+1))            if u ≤ 1/α
///      (1 / (2 - α·u))^(1/(η+1))  otherwise
/// c1 = ((y1 + y2) - β̄·(y2 - y1)) / 2
/// c2 = ((y1 + y2) + β̄·(y2 - y1)) / 2
/// ```
///
/// Genes on which the parents agree within [`SBX_EPSILON`] are inherited
/// unchanged. A parent gene already outside the bounds counts as having
/// zero margin. Children are not clamped.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn simulated_binary_crossover<R: Rng>(
    parent1: &[f64],
    parent2: &[f64],
    params: &SbxParams,
    rng: &mut R,
) -> (Vec<f64>, Vec<f64>) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );

    if rng.random::<f64>() >= params.crossover_rate {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let eta = params.distribution_index;
    let exponent = 1.0 / (eta + 1.0);
    let mut child1 = Vec::with_capacity(parent1.len());
    let mut child2 = Vec::with_capacity(parent2.len());

    for (&g1, &g2) in parent1.iter().zip(parent2.iter()) {
        if (g1 - g2).abs() <= SBX_EPSILON {
            child1.push(g1);
            child2.push(g2);
            continue;
        }

        let (y1, y2) = if g1 < g2 { (g1, g2) } else { (g2, g1) };
        let spread = y2 - y1;
        let margin = (y1 - params.lower_bound)
            .min(params.upper_bound - y2)
            .max(0.0);
        let u: f64 = rng.random();

        let beta = 1.0 + 2.0 * margin / spread;
        let alpha = 2.0 - beta.powf(-(eta + 1.0));
        let beta_bar = if u <= 1.0 / alpha {
            (alpha * u).powf(exponent)
        } else {
            (1.0 / (2.0 - alpha * u)).powf(exponent)
        };

        child1.push(0.5 * ((y1 + y2) - beta_bar * spread));
        child2.push(0.5 * ((y1 + y2) + beta_bar * spread));
    }

    (child1, child2)
}

// ============================================================================
// Mutation
// ============================================================================

/// Parameters of [`mutate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationParams {
    /// Probability that the genome is touched at all.
    pub mutation_rate: f64,
    /// Probability of perturbing each gene once the genome is touched.
    pub gene_probability: f64,
    /// A perturbed gene `g` moves by `±g * disturb_fraction`.
    pub disturb_fraction: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl MutationParams {
    pub fn from_config(config: &Nsga2Config) -> Self {
        Self {
            mutation_rate: config.effective_mutation_rate(),
            gene_probability: config.gene_mutation_probability,
            disturb_fraction: config.disturb_fraction,
            lower_bound: config.genome_min_value,
            upper_bound: config.genome_max_value,
        }
    }
}

/// Relative perturbation mutation.
///
/// Fires with probability `mutation_rate`. When it fires, each gene is
/// perturbed with probability `gene_probability` by `±disturb_fraction` of
/// its current value (fair sign) and clamped into the bounds.
///
/// Returns `true` if the gate fired.
pub fn mutate<R: Rng>(genome: &mut [f64], params: &MutationParams, rng: &mut R) -> bool {
    if rng.random::<f64>() >= params.mutation_rate {
        return false;
    }

    for gene in genome.iter_mut() {
        if rng.random::<f64>() < params.gene_probability {
            let mut delta = params.disturb_fraction * *gene;
            if rng.random_bool(0.5) {
                delta = -delta;
            }
            *gene = (*gene + delta).clamp(params.lower_bound, params.upper_bound);
        }
    }
    true
}

// ============================================================================
// Tests
// ============================================================================
