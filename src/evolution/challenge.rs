use crate::{
    chromosome::Chromosome,
    dataset::Dataset,
    error::{GeneticError, Result},
};

/// Default number of units an activated site absorbs per observation.
pub const DEFAULT_RELIEF: f64 = 2.0;

/// Scores a chromosome. Higher is better.
///
/// Implementations must be pure: the same chromosome always yields the same
/// score, and scoring never mutates shared state. This is what allows a
/// population to be scored in parallel.
pub trait Challenge: Send + Sync {
    fn score(&self, chromosome: &Chromosome) -> f64;

    /// Chromosome length this challenge is defined for, if it is bound to one.
    fn expected_length(&self) -> Option<usize> {
        None
    }
}

/// Fitness of an activation plan against historical site observations.
///
/// An inactive site costs the sum of its observations. An activated site costs
/// `sum(max(0, value - relief))`. The score is the negated total cost, so
/// cheaper plans score higher.
///
/// Per-site sums are computed once at construction, so scoring is a single pass
/// over the chromosome.
#[derive(Clone, Debug)]
pub struct SiteChallenge {
    inactive_cost: Vec<f64>,
    active_cost: Vec<f64>,
    relief: f64,
}

impl SiteChallenge {
    pub fn new(dataset: &Dataset) -> Self {
        Self::build(dataset, DEFAULT_RELIEF)
    }

    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `relief` is negative or not finite.
    pub fn with_relief(dataset: &Dataset, relief: f64) -> Result<Self> {
        if !relief.is_finite() || relief < 0.0 {
            return Err(GeneticError::Configuration(format!(
                "relief must be a finite non-negative number, got {}",
                relief
            )));
        }
        Ok(Self::build(dataset, relief))
    }

    fn build(dataset: &Dataset, relief: f64) -> Self {
        let inactive_cost: Vec<f64> = dataset
            .iter()
            .map(|record| record.iter().sum())
            .collect();
        let active_cost: Vec<f64> = dataset
            .iter()
            .map(|record| record.iter().map(|value| (value - relief).max(0.0)).sum())
            .collect();

        Self {
            inactive_cost,
            active_cost,
            relief,
        }
    }

    pub fn relief(&self) -> f64 {
        self.relief
    }

    pub fn num_sites(&self) -> usize {
        self.inactive_cost.len()
    }

    /// Total cost of the plan. The chromosome must cover exactly
    /// [`num_sites`](Self::num_sites) sites; `Population::evaluate` checks
    /// this before scoring.
    pub fn cost(&self, chromosome: &Chromosome) -> f64 {
        debug_assert_eq!(chromosome.len(), self.num_sites());
        chromosome
            .genes()
            .iter()
            .zip(self.active_cost.iter().zip(&self.inactive_cost))
            .map(|(&active, (&on, &off))| if active { on } else { off })
            .sum()
    }
}

impl Challenge for SiteChallenge {
    fn score(&self, chromosome: &Chromosome) -> f64 {
        -self.cost(chromosome)
    }

    fn expected_length(&self) -> Option<usize> {
        Some(self.num_sites())
    }
}
