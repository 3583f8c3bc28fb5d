//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for breeding
//! the next generation's chromosomes from a breeding pool.
pub mod budgeted;

use std::fmt::Debug;

use crate::{
    chromosome::Chromosome, error::Result, evolution::options::EvolutionOptions,
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Produces offspring from the breeding pool selected in the current generation.
pub trait BreedStrategy
where
    Self: Debug + Send + Sync,
{
    /// Breeds exactly `num_offspring` chromosomes from `parents`.
    ///
    /// ## Parameters
    ///
    /// - `parents`: The breeding pool, best first.
    /// - `num_offspring`: How many chromosomes to return.
    /// - `evol_options`: The run configuration (budget, mutation rate, attempt limit).
    /// - `rng`: The random number generator every draw is taken from.
    ///
    /// ## Errors
    ///
    /// This method can fail if the parents slice is empty while offspring are requested.
    fn breed(
        &self,
        parents: &[Chromosome],
        num_offspring: usize,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>>;
}

pub use budgeted::BudgetedBreedStrategy;
