//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the configuration of a run: chromosome
//! length `N`, population size `P`, activation budget `K`, mutation rate, the
//! crossover attempt budget, optional elitism and the parallel threshold.
//!
//! ## Example
//!
//! ```rust
//! use siteopt::evolution::options::EvolutionOptions;
//!
//! // 380 sites, 1000 plans per generation, at most 100 upgrades, 1% mutation
//! let options = EvolutionOptions::new(380, 1000, 100, 0.01);
//! assert!(options.validate().is_ok());
//!
//! let options = EvolutionOptions::builder()
//!     .chromosome_length(380)
//!     .population_size(200)
//!     .max_active(100)
//!     .mutation_rate(0.05)
//!     .elitism(2)
//!     .build();
//! assert_eq!(options.get_max_crossover_attempts(), 10);
//! ```

use crate::error::{GeneticError, Result};

const DEFAULT_MAX_CROSSOVER_ATTEMPTS: usize = 10;
const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    chromosome_length: usize,
    population_size: usize,
    max_active: usize,
    mutation_rate: f64,
    max_crossover_attempts: usize,
    /// Number of top-ranked parents carried unchanged into the next generation.
    elitism: usize,
    /// Minimum population size for which fitness is evaluated in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn new(
        chromosome_length: usize,
        population_size: usize,
        max_active: usize,
        mutation_rate: f64,
    ) -> Self {
        Self {
            chromosome_length,
            population_size,
            max_active,
            mutation_rate,
            max_crossover_attempts: DEFAULT_MAX_CROSSOVER_ATTEMPTS,
            elitism: 0,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }

    /// Checks every parameter. Nothing is clamped.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` naming the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        if self.chromosome_length == 0 {
            return Err(GeneticError::Configuration(
                "chromosome_length must be at least 1".to_string(),
            ));
        }
        if self.max_active > self.chromosome_length {
            return Err(GeneticError::Configuration(format!(
                "max_active ({}) exceeds chromosome_length ({})",
                self.max_active, self.chromosome_length
            )));
        }
        if self.population_size <= 1 {
            return Err(GeneticError::Configuration(format!(
                "population_size must be greater than 1, got {}",
                self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::Configuration(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.max_crossover_attempts == 0 {
            return Err(GeneticError::Configuration(
                "max_crossover_attempts must be at least 1".to_string(),
            ));
        }
        if self.elitism > self.breeding_pool_size() {
            return Err(GeneticError::Configuration(format!(
                "elitism ({}) exceeds the breeding pool size ({})",
                self.elitism,
                self.breeding_pool_size()
            )));
        }
        Ok(())
    }

    /// Size of the truncation-selected breeding pool: the top half, rounded down.
    pub fn breeding_pool_size(&self) -> usize {
        self.population_size / 2
    }

    pub fn get_chromosome_length(&self) -> usize {
        self.chromosome_length
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_max_active(&self) -> usize {
        self.max_active
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_max_crossover_attempts(&self) -> usize {
        self.max_crossover_attempts
    }

    pub fn get_elitism(&self) -> usize {
        self.elitism
    }

    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    pub fn set_max_crossover_attempts(&mut self, attempts: usize) {
        self.max_crossover_attempts = attempts;
    }

    pub fn set_elitism(&mut self, elitism: usize) {
        self.elitism = elitism;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset parameters fall back to a small default problem (10 sites, 20 plans,
/// budget 3, 1% mutation).
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    chromosome_length: Option<usize>,
    population_size: Option<usize>,
    max_active: Option<usize>,
    mutation_rate: Option<f64>,
    max_crossover_attempts: Option<usize>,
    elitism: Option<usize>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn chromosome_length(mut self, value: usize) -> Self {
        self.chromosome_length = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn max_active(mut self, value: usize) -> Self {
        self.max_active = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn max_crossover_attempts(mut self, value: usize) -> Self {
        self.max_crossover_attempts = Some(value);
        self
    }

    pub fn elitism(mut self, value: usize) -> Self {
        self.elitism = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the options. Call [`EvolutionOptions::validate`] (or hand the
    /// options to the launcher, which validates) before running.
    pub fn build(self) -> EvolutionOptions {
        EvolutionOptions {
            chromosome_length: self.chromosome_length.unwrap_or(10),
            population_size: self.population_size.unwrap_or(20),
            max_active: self.max_active.unwrap_or(3),
            mutation_rate: self.mutation_rate.unwrap_or(0.01),
            max_crossover_attempts: self
                .max_crossover_attempts
                .unwrap_or(DEFAULT_MAX_CROSSOVER_ATTEMPTS),
            elitism: self.elitism.unwrap_or(0),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
        }
    }
}
