use std::cmp::Ordering;

use crate::error::{GeneticError, Result};
use crate::selection::selection_strategy::SelectionStrategy;

/// Keeps the top-ranked individuals and discards the rest.
///
/// Individuals are ranked by descending fitness with a stable sort, so equal
/// scores keep their population order. NaN scores always rank last.
///
/// # Examples
///
/// ```
/// use siteopt::selection::{SelectionStrategy, TruncationSelection};
///
/// let population = vec![1, 2, 3];
/// let fitness = vec![0.5, 0.8, 0.3];
///
/// let selection = TruncationSelection::default();
/// assert_eq!(selection.select(&population, &fitness, 2).unwrap(), vec![2, 1]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TruncationSelection;

impl TruncationSelection {
    pub fn new() -> Self {
        Self
    }

    /// Population indices ordered best first.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` for an empty fitness slice.
    pub fn rank(&self, fitness: &[f64]) -> Result<Vec<usize>> {
        if fitness.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut order: Vec<usize> = (0..fitness.len()).collect();
        order.sort_by(|&a, &b| descending(fitness[a], fitness[b]));
        Ok(order)
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

impl<P> SelectionStrategy<P> for TruncationSelection
where
    P: Clone,
{
    fn select(&self, population: &[P], fitness: &[f64], num_to_select: usize) -> Result<Vec<P>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if fitness.len() != population.len() {
            return Err(GeneticError::Configuration(format!(
                "Fitness vector length ({}) doesn't match population length ({})",
                fitness.len(),
                population.len()
            )));
        }

        Ok(self
            .rank(fitness)?
            .into_iter()
            .take(num_to_select)
            .map(|idx| population[idx].clone())
            .collect())
    }
}
