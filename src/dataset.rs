//! # Dataset
//!
//! Read-only per-site observation history. Record `i` holds the observed values
//! (for example failed reservations per period) of site `i`, which lines up with
//! gene `i` of every chromosome.

use crate::error::{GeneticError, Result};

/// Deserializes from a bare array of per-site records and goes through the
/// same validation as [`Dataset::new`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Dataset {
    sites: Vec<Vec<f64>>,
}

impl Dataset {
    /// Wraps per-site observations.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Dataset` if any observation is negative, NaN or
    /// infinite.
    pub fn new(sites: Vec<Vec<f64>>) -> Result<Self> {
        for (site, record) in sites.iter().enumerate() {
            if let Some((period, value)) = record
                .iter()
                .enumerate()
                .find(|(_, value)| !value.is_finite() || **value < 0.0)
            {
                return Err(GeneticError::Dataset(format!(
                    "site {} period {} has invalid observation {}",
                    site, period, value
                )));
            }
        }

        Ok(Self { sites })
    }

    /// Builds a dataset from integer counts, which are always valid observations.
    pub fn from_counts(counts: Vec<Vec<u32>>) -> Self {
        Self {
            sites: counts
                .into_iter()
                .map(|record| record.into_iter().map(f64::from).collect())
                .collect(),
        }
    }

    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn site(&self, index: usize) -> Option<&[f64]> {
        self.sites.get(index).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.sites.iter().map(Vec::as_slice)
    }

    /// Sum of every observation: the cost when no site is activated.
    pub fn total_observed(&self) -> f64 {
        self.iter().map(|record| record.iter().sum::<f64>()).sum()
    }
}

impl TryFrom<Vec<Vec<f64>>> for Dataset {
    type Error = GeneticError;

    fn try_from(sites: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(sites)
    }
}

impl From<Dataset> for Vec<Vec<f64>> {
    fn from(dataset: Dataset) -> Self {
        dataset.sites
    }
}
