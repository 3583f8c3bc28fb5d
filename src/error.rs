//! # Error Types
//!
//! This module defines the error type returned by the optimizer. Only invalid
//! configuration and malformed inputs surface as errors; degenerate cases inside
//! the genetic operators (a crossover that cannot respect the activation budget,
//! a mutation with nothing to swap) are absorbed by the operators themselves.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use siteopt::error::{GeneticError, Result};
//!
//! fn check_budget(max_active: usize, length: usize) -> Result<()> {
//!     if max_active > length {
//!         return Err(GeneticError::Configuration(format!(
//!             "max_active ({}) exceeds chromosome length ({})",
//!             max_active, length
//!         )));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_budget(3, 2).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use siteopt::error::{GeneticError, OptionExt};
//!
//! fn best_score(scores: &[f64]) -> siteopt::error::Result<f64> {
//!     scores
//!         .iter()
//!         .cloned()
//!         .reduce(f64::max)
//!         .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert!(best_score(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running the optimizer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// Error that occurs when a breeding operation fails.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a chromosome is malformed or has the wrong length.
    #[error("Invalid chromosome: {0}")]
    InvalidChromosome(String),

    /// Error that occurs when the observation dataset holds unusable values.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Error that occurs when a fitness calculation fails.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),
}

/// A specialized Result type for optimizer operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GeneticError::Configuration("population_size must be greater than 1".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: population_size must be greater than 1"
        );
        assert_eq!(
            GeneticError::EmptyPopulation.to_string(),
            "Empty population error: Cannot operate on an empty population"
        );
    }

    #[test]
    fn test_option_ext() {
        let some: Option<u8> = Some(3);
        assert_eq!(some.ok_or_else_genetic(|| GeneticError::EmptyPopulation), Ok(3));

        let none: Option<u8> = None;
        assert_eq!(
            none.ok_or_else_genetic(|| GeneticError::EmptyPopulation),
            Err(GeneticError::EmptyPopulation)
        );
    }
}
