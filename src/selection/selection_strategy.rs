use std::fmt::Debug;

use crate::error::Result;

/// Trait for selection strategies.
///
/// A selection strategy picks the breeding pool from a scored population. The
/// `fitness` slice is positionally aligned with `population`.
///
/// # Examples
///
/// ```
/// use siteopt::selection::{SelectionStrategy, TruncationSelection};
///
/// let population = vec!["a", "b", "c", "d"];
/// let fitness = vec![-3.0, -1.0, -4.0, -1.0];
///
/// let pool = TruncationSelection::default()
///     .select(&population, &fitness, 2)
///     .unwrap();
///
/// // "b" and "d" tie; the earlier one ranks first
/// assert_eq!(pool, vec!["b", "d"]);
/// ```
pub trait SelectionStrategy<P>: Debug + Send + Sync
where
    P: Clone,
{
    /// Selects individuals from the population based on their fitness scores.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness vector length doesn't match the population length
    fn select(&self, population: &[P], fitness: &[f64], num_to_select: usize) -> Result<Vec<P>>;
}
