//! # siteopt
//!
//! A genetic algorithm that chooses which resource sites to upgrade. Given
//! historical per-site observations and a budget of `K` upgrades out of `N`
//! sites, it searches for the activation plan with the lowest total cost.
//!
//! ## Example
//!
//! ```rust
//! use siteopt::{
//!     dataset::Dataset,
//!     evolution::{EvolutionLauncher, EvolutionOptions, SiteChallenge},
//!     population::Population,
//!     rng::RandomNumberGenerator,
//!     selection::TruncationSelection,
//!     strategy::BudgetedBreedStrategy,
//! };
//!
//! let dataset = Dataset::from_counts(vec![vec![5, 3], vec![1], vec![10, 4], vec![0, 2]]);
//! let options = EvolutionOptions::new(4, 8, 2, 0.1);
//! let mut rng = RandomNumberGenerator::from_seed(42);
//!
//! let launcher = EvolutionLauncher::new(
//!     BudgetedBreedStrategy::new(),
//!     TruncationSelection::default(),
//!     SiteChallenge::new(&dataset),
//! );
//!
//! let mut population = Population::from_options(&options, &mut rng)?;
//! for _ in 0..20 {
//!     population = launcher.step(&population, &options, &mut rng)?;
//! }
//!
//! let best = population.fittest(launcher.challenge())?;
//! assert!(best.chromosome.activation_count() <= 2);
//! # Ok::<(), siteopt::GeneticError>(())
//! ```
pub mod chromosome;
pub mod dataset;
pub mod error;
pub mod evolution;
pub mod operators;
pub mod population;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use chromosome::Chromosome;
pub use dataset::Dataset;
pub use error::{GeneticError, OptionExt, Result};
pub use population::Population;
