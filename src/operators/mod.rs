//! # Genetic Operators
//!
//! Budget-aware operators on site chromosomes.
//!
//! - [`crossover`](crossover::crossover) recombines two parents with a single
//!   cut and only accepts children that stay within the activation budget.
//! - [`mutate`](mutation::mutate) swaps one active and one inactive site, so
//!   the activation count never changes.
pub mod crossover;
pub mod mutation;

pub use crossover::{crossover, CrossoverOutcome};
pub use mutation::{mutate, MutationScratch};
