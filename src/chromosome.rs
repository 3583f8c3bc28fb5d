//! # Chromosome
//!
//! A `Chromosome` is a fixed-length bit vector with one gene per site: `true`
//! means the site is activated (upgraded). The number of active genes is the
//! chromosome's *activation count*, which the genetic operators keep at or below
//! the activation budget `K`.
//!
//! Freshly generated chromosomes carry exactly `K` active genes. Crossover may
//! produce children with fewer than `K`, never more. Mutation swaps one active
//! and one inactive gene, so it never changes the count.
//!
//! ## Example
//!
//! ```rust
//! use siteopt::chromosome::Chromosome;
//! use siteopt::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(11);
//! let chromosome = Chromosome::generate(10, 4, &mut rng).unwrap();
//!
//! assert_eq!(chromosome.len(), 10);
//! assert_eq!(chromosome.activation_count(), 4);
//! ```

use std::fmt;

use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Chromosome {
    genes: Vec<bool>,
}

impl Chromosome {
    /// Generates a chromosome of `length` genes with exactly `max_active` of them
    /// set. The active positions are drawn uniformly without replacement.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `max_active > length`.
    pub fn generate(
        length: usize,
        max_active: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        if max_active > length {
            return Err(GeneticError::Configuration(format!(
                "max_active ({}) exceeds chromosome length ({})",
                max_active, length
            )));
        }

        let mut genes = vec![false; length];
        for position in rng.sample_indices(length, max_active) {
            genes[position] = true;
        }

        Ok(Self { genes })
    }

    /// Builds a chromosome from `0`/`1` values.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidChromosome` if any value is not `0` or `1`.
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        bits.iter()
            .enumerate()
            .map(|(position, &bit)| match bit {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(GeneticError::InvalidChromosome(format!(
                    "gene {} has value {}, expected 0 or 1",
                    position, other
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(|genes| Self { genes })
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Whether the site at `position` is activated. Out-of-range positions are
    /// reported as inactive.
    pub fn is_active(&self, position: usize) -> bool {
        self.genes.get(position).copied().unwrap_or(false)
    }

    /// Number of activated sites.
    pub fn activation_count(&self) -> usize {
        self.count_active(0..self.genes.len())
    }

    /// Indices of the activated sites, in ascending order.
    pub fn active_sites(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(position, &active)| active.then_some(position))
    }

    pub fn to_bits(&self) -> Vec<u8> {
        self.genes.iter().map(|&active| u8::from(active)).collect()
    }

    /// Clears `buffer` and fills it with every position whose gene equals
    /// `active`. The buffer is reused across calls so no allocation happens once
    /// it has grown to the chromosome length.
    pub fn collect_positions(&self, active: bool, buffer: &mut Vec<usize>) {
        buffer.clear();
        buffer.extend(
            self.genes
                .iter()
                .enumerate()
                .filter_map(|(position, &gene)| (gene == active).then_some(position)),
        );
    }

    pub(crate) fn count_active(&self, range: std::ops::Range<usize>) -> usize {
        self.genes[range].iter().filter(|&&active| active).count()
    }

    /// `head[..cut] ++ tail[cut..]`. Both inputs must have the same length.
    pub(crate) fn splice(head: &Self, tail: &Self, cut: usize) -> Self {
        let mut genes = Vec::with_capacity(head.len());
        genes.extend_from_slice(&head.genes[..cut]);
        genes.extend_from_slice(&tail.genes[cut..]);
        Self { genes }
    }

    /// Activates `activate` and deactivates `deactivate`.
    pub(crate) fn swap_activation(&mut self, activate: usize, deactivate: usize) {
        debug_assert!(!self.genes[activate] && self.genes[deactivate]);
        self.genes[activate] = true;
        self.genes[deactivate] = false;
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(genes: Vec<bool>) -> Self {
        Self { genes }
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.genes
            .iter()
            .try_for_each(|&active| f.write_str(if active { "1" } else { "0" }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_has_exact_budget() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        for max_active in 0..=12 {
            let chromosome = Chromosome::generate(12, max_active, &mut rng).unwrap();
            assert_eq!(chromosome.len(), 12);
            assert_eq!(chromosome.activation_count(), max_active);
        }
    }

    #[test]
    fn test_generate_rejects_budget_above_length() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let result = Chromosome::generate(3, 4, &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_generate_budget_zero_and_full() {
        let mut rng = RandomNumberGenerator::from_seed(9);
        let none = Chromosome::generate(6, 0, &mut rng).unwrap();
        assert!(none.genes().iter().all(|&g| !g));

        let all = Chromosome::generate(6, 6, &mut rng).unwrap();
        assert!(all.genes().iter().all(|&g| g));
    }

    #[test]
    fn test_from_bits() {
        let chromosome = Chromosome::from_bits(&[1, 0, 1, 0]).unwrap();
        assert_eq!(chromosome.activation_count(), 2);
        assert!(chromosome.is_active(0));
        assert!(!chromosome.is_active(1));
        assert!(!chromosome.is_active(10));
        assert_eq!(chromosome.to_bits(), vec![1, 0, 1, 0]);
        assert_eq!(chromosome.to_string(), "1010");

        let err = Chromosome::from_bits(&[1, 2]).unwrap_err();
        assert!(matches!(err, GeneticError::InvalidChromosome(msg) if msg.contains("gene 1")));
    }

    #[test]
    fn test_collect_positions_reuses_buffer() {
        let chromosome = Chromosome::from_bits(&[0, 1, 1, 0, 1]).unwrap();
        let mut buffer = Vec::new();

        chromosome.collect_positions(true, &mut buffer);
        assert_eq!(buffer, vec![1, 2, 4]);

        chromosome.collect_positions(false, &mut buffer);
        assert_eq!(buffer, vec![0, 3]);

        assert_eq!(chromosome.active_sites().collect::<Vec<_>>(), vec![1, 2, 4]);
    }

    #[test]
    fn test_splice_and_count() {
        let a = Chromosome::from_bits(&[1, 1, 0, 0]).unwrap();
        let b = Chromosome::from_bits(&[0, 0, 1, 1]).unwrap();

        assert_eq!(Chromosome::splice(&a, &b, 1).to_bits(), vec![1, 0, 1, 1]);
        assert_eq!(Chromosome::splice(&b, &a, 3).to_bits(), vec![0, 0, 1, 0]);
        assert_eq!(a.count_active(0..1), 1);
        assert_eq!(b.count_active(1..4), 2);
    }

    #[test]
    fn test_swap_activation_keeps_count() {
        let mut chromosome = Chromosome::from_bits(&[1, 0, 0]).unwrap();
        chromosome.swap_activation(2, 0);
        assert_eq!(chromosome.to_bits(), vec![0, 0, 1]);
        assert_eq!(chromosome.activation_count(), 1);
    }
}
