use tracing::trace;

use crate::{chromosome::Chromosome, rng::RandomNumberGenerator};

/// Reusable position buffers for [`mutate`], so repeated mutations do not
/// allocate once the buffers have grown to the chromosome length.
#[derive(Debug, Clone, Default)]
pub struct MutationScratch {
    inactive: Vec<usize>,
    active: Vec<usize>,
}

impl MutationScratch {
    pub fn with_capacity(length: usize) -> Self {
        Self {
            inactive: Vec::with_capacity(length),
            active: Vec::with_capacity(length),
        }
    }
}

/// Count-preserving swap mutation.
///
/// With probability `mutation_rate`, one inactive site and one active site are
/// drawn uniformly (independently of each other) and their states are swapped.
/// Returns whether a swap happened. A chromosome with no active or no inactive
/// site is left untouched.
///
/// # Example
///
/// ```rust
/// use siteopt::chromosome::Chromosome;
/// use siteopt::operators::{mutate, MutationScratch};
/// use siteopt::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let mut scratch = MutationScratch::default();
/// let mut plan = Chromosome::from_bits(&[1, 0, 0, 1]).unwrap();
///
/// assert!(mutate(&mut plan, 1.0, &mut rng, &mut scratch));
/// assert_eq!(plan.activation_count(), 2);
/// ```
pub fn mutate(
    chromosome: &mut Chromosome,
    mutation_rate: f64,
    rng: &mut RandomNumberGenerator,
    scratch: &mut MutationScratch,
) -> bool {
    if rng.probability() >= mutation_rate {
        return false;
    }

    chromosome.collect_positions(false, &mut scratch.inactive);
    chromosome.collect_positions(true, &mut scratch.active);

    if scratch.inactive.is_empty() || scratch.active.is_empty() {
        trace!(
            inactive = scratch.inactive.len(),
            active = scratch.active.len(),
            "nothing to swap, mutation skipped"
        );
        return false;
    }

    let activate = scratch.inactive[rng.index(scratch.inactive.len())];
    let deactivate = scratch.active[rng.index(scratch.active.len())];
    chromosome.swap_activation(activate, deactivate);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_preserves_activation_count() {
        let mut rng = RandomNumberGenerator::from_seed(31);
        let mut scratch = MutationScratch::with_capacity(15);

        for max_active in 0..=15 {
            let mut chromosome = Chromosome::generate(15, max_active, &mut rng).unwrap();
            for rate in [0.0, 0.3, 1.0] {
                mutate(&mut chromosome, rate, &mut rng, &mut scratch);
                assert_eq!(chromosome.activation_count(), max_active);
                assert_eq!(chromosome.len(), 15);
            }
        }
    }

    #[test]
    fn test_certain_mutation_moves_exactly_one_site() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let mut scratch = MutationScratch::default();
        let original = Chromosome::from_bits(&[1, 0, 1, 0, 0, 1]).unwrap();

        let mut mutated = original.clone();
        assert!(mutate(&mut mutated, 1.0, &mut rng, &mut scratch));

        let changed: Vec<usize> = (0..original.len())
            .filter(|&i| original.is_active(i) != mutated.is_active(i))
            .collect();
        assert_eq!(changed.len(), 2);
        assert_eq!(
            changed.iter().filter(|&&i| mutated.is_active(i)).count(),
            1
        );
    }

    #[test]
    fn test_zero_rate_never_mutates() {
        let mut rng = RandomNumberGenerator::from_seed(6);
        let mut scratch = MutationScratch::default();
        let original = Chromosome::from_bits(&[1, 0, 1, 0]).unwrap();

        let mut chromosome = original.clone();
        for _ in 0..100 {
            assert!(!mutate(&mut chromosome, 0.0, &mut rng, &mut scratch));
        }
        assert_eq!(chromosome, original);
    }

    #[test]
    fn test_degenerate_chromosomes_are_untouched() {
        let mut rng = RandomNumberGenerator::from_seed(6);
        let mut scratch = MutationScratch::default();

        let mut all_on = Chromosome::from_bits(&[1, 1, 1]).unwrap();
        assert!(!mutate(&mut all_on, 1.0, &mut rng, &mut scratch));
        assert_eq!(all_on.to_bits(), vec![1, 1, 1]);

        let mut all_off = Chromosome::from_bits(&[0, 0, 0]).unwrap();
        assert!(!mutate(&mut all_off, 1.0, &mut rng, &mut scratch));
        assert_eq!(all_off.to_bits(), vec![0, 0, 0]);

        let mut empty = Chromosome::from(Vec::new());
        assert!(!mutate(&mut empty, 1.0, &mut rng, &mut scratch));
    }

    #[test]
    fn test_mutation_rate_is_respected_on_average() {
        let mut rng = RandomNumberGenerator::from_seed(99);
        let mut scratch = MutationScratch::default();
        let mut chromosome = Chromosome::from_bits(&[1, 0, 1, 0, 1, 0, 1, 0]).unwrap();

        let swaps = (0..10_000)
            .filter(|_| mutate(&mut chromosome, 0.25, &mut rng, &mut scratch))
            .count();
        assert!((2_000..3_000).contains(&swaps), "swaps = {}", swaps);
    }
}
