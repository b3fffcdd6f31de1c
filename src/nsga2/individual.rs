//! Candidate solutions and their ranking bookkeeping.

use super::ranking::{dominance_cmp, Dominance};
use std::cmp::Ordering;
use std::fmt;

/// Identifier of an [`Individual`], unique within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndividualId(pub u64);

impl fmt::Display for IndividualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i~{}", self.0)
    }
}

/// Hands out increasing [`IndividualId`]s.
///
/// Owned by a single run, so two concurrent runs never share a counter.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: u64,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdSequence {
    /// Creates a sequence starting at `i~1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next identifier.
    pub fn next_id(&mut self) -> IndividualId {
        let id = IndividualId(self.next);
        self.next += 1;
        id
    }
}

/// Crowding distance of an individual within its front.
///
/// Boundary individuals get [`CrowdingDistance::Infinite`], a tagged value
/// that compares greater than every finite distance and absorbs further
/// accumulation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrowdingDistance {
    /// Sum of normalized neighbor gaps.
    Finite(f64),
    /// No neighbor on at least one side for some objective.
    Infinite,
}

impl CrowdingDistance {
    /// Zero distance, the starting point of every assignment pass.
    pub const ZERO: Self = CrowdingDistance::Finite(0.0);

    /// Returns `true` for the boundary sentinel.
    pub fn is_infinite(self) -> bool {
        matches!(self, CrowdingDistance::Infinite)
    }

    /// Adds a finite contribution. Infinite stays infinite.
    pub fn accumulate(self, contribution: f64) -> Self {
        match self {
            CrowdingDistance::Finite(d) => CrowdingDistance::Finite(d + contribution),
            CrowdingDistance::Infinite => CrowdingDistance::Infinite,
        }
    }

    /// Converts to `f64`, mapping the sentinel to `f64::INFINITY`.
    pub fn to_f64(self) -> f64 {
        match self {
            CrowdingDistance::Finite(d) => d,
            CrowdingDistance::Infinite => f64::INFINITY,
        }
    }

    /// Total order used by the crowded-comparison operator.
    ///
    /// `Infinite` is greater than every finite value. Finite values follow
    /// [`f64::total_cmp`], so a NaN distance still has a fixed position.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CrowdingDistance::Infinite, CrowdingDistance::Infinite) => Ordering::Equal,
            (CrowdingDistance::Infinite, CrowdingDistance::Finite(_)) => Ordering::Greater,
            (CrowdingDistance::Finite(_), CrowdingDistance::Infinite) => Ordering::Less,
            (CrowdingDistance::Finite(a), CrowdingDistance::Finite(b)) => a.total_cmp(b),
        }
    }
}

impl fmt::Display for CrowdingDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrowdingDistance::Finite(d) => write!(f, "{d:.2}"),
            CrowdingDistance::Infinite => f.write_str("inf"),
        }
    }
}

/// A single candidate solution.
///
/// `genome` and `objectives` are owned by the individual. The ranking
/// fields are rewritten on every ranking pass; `dominated_set` holds
/// indices into the population that was last ranked and is meaningless
/// outside of it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    id: IndividualId,

    /// Decision variables.
    pub genome: Vec<f64>,

    /// Objective values, all minimized. Empty until evaluated.
    pub objectives: Vec<f64>,

    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) domination_count: usize,

    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) dominated_set: Vec<usize>,

    pub(crate) rank: Option<usize>,

    pub(crate) crowding_distance: Option<CrowdingDistance>,
}

impl Individual {
    /// Creates an unevaluated, unranked individual.
    pub fn new(id: IndividualId, genome: Vec<f64>) -> Self {
        Self {
            id,
            genome,
            objectives: Vec::new(),
            domination_count: 0,
            dominated_set: Vec::new(),
            rank: None,
            crowding_distance: None,
        }
    }

    /// Creates an individual with known objective values.
    pub fn with_objectives(id: IndividualId, genome: Vec<f64>, objectives: Vec<f64>) -> Self {
        Self {
            objectives,
            ..Self::new(id, genome)
        }
    }

    /// Identifier assigned at creation.
    pub fn id(&self) -> IndividualId {
        self.id
    }

    /// 1-based front index, `None` until ranked.
    pub fn rank(&self) -> Option<usize> {
        self.rank
    }

    /// `None` until crowding distances have been assigned.
    pub fn crowding_distance(&self) -> Option<CrowdingDistance> {
        self.crowding_distance
    }

    /// Number of individuals dominating this one in the last ranking pass.
    pub fn domination_count(&self) -> usize {
        self.domination_count
    }

    /// Population indices this individual dominated in the last ranking pass.
    pub fn dominated_set(&self) -> &[usize] {
        &self.dominated_set
    }

    /// Clears the per-generation bookkeeping.
    pub(crate) fn reset_ranking(&mut self) {
        self.domination_count = 0;
        self.dominated_set.clear();
        self.rank = None;
        self.crowding_distance = None;
    }

    /// Pareto dominance (minimization).
    ///
    /// `self` dominates `other` when it is no worse on every objective and
    /// strictly better on at least one.
    ///
    /// # Panics
    /// Panics if the objective vectors have different lengths.
    pub fn dominates(&self, other: &Individual) -> bool {
        assert_eq!(
            self.objectives.len(),
            other.objectives.len(),
            "objective vectors must have equal length"
        );

        dominance_cmp(&self.objectives, &other.objectives) == Dominance::Left
    }
}

fn write_values(f: &mut fmt::Formatter<'_>, values: &[f64], sep: &str) -> fmt::Result {
    f.write_str("[")?;
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{v:.2}")?;
    }
    f.write_str("]")
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.id)?;
        write_values(f, &self.genome, " ")?;
        f.write_str(" ")?;
        write_values(f, &self.objectives, ", ")?;
        match self.rank {
            Some(r) => write!(f, " {r}")?,
            None => f.write_str(" -")?,
        }
        match self.crowding_distance {
            Some(d) => write!(f, " {d}"),
            None => f.write_str(" -"),
        }
    }
}
