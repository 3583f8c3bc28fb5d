//! # Budgeted Breeding
//!
//! Reproduction for activation plans under a site budget: random distinct
//! parent pairs, budgeted single-point crossover, then count-preserving swap
//! mutation on every child.

use tracing::debug;

use crate::{
    chromosome::Chromosome,
    error::{GeneticError, Result},
    evolution::options::EvolutionOptions,
    operators::{crossover, mutate, MutationScratch},
    rng::RandomNumberGenerator,
    strategy::BreedStrategy,
};

#[derive(Debug, Clone, Default)]
pub struct BudgetedBreedStrategy;

impl BudgetedBreedStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Draws two distinct pool positions. Every draw is independent, so the same
    /// parent can appear in many pairs over a generation. A pool of one is
    /// paired with itself.
    fn draw_pair(pool_size: usize, rng: &mut RandomNumberGenerator) -> (usize, usize) {
        if pool_size == 1 {
            return (0, 0);
        }
        let first = rng.index(pool_size);
        let mut second = rng.index(pool_size - 1);
        if second >= first {
            second += 1;
        }
        (first, second)
    }
}

impl BreedStrategy for BudgetedBreedStrategy {
    fn breed(
        &self,
        parents: &[Chromosome],
        num_offspring: usize,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>> {
        if num_offspring == 0 {
            return Ok(Vec::new());
        }
        if parents.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let max_active = evol_options.get_max_active();
        let max_attempts = evol_options.get_max_crossover_attempts();

        let mut children = Vec::with_capacity(num_offspring);
        let mut fallbacks = 0usize;

        while children.len() < num_offspring {
            let (first, second) = Self::draw_pair(parents.len(), rng);
            let outcome = crossover(
                &parents[first],
                &parents[second],
                max_active,
                max_attempts,
                rng,
            );
            if outcome.is_fallback() {
                fallbacks += 1;
            }

            let (child1, child2) = outcome.into_pair();
            children.push(child1);
            if children.len() < num_offspring {
                children.push(child2);
            }
        }

        let mut scratch = MutationScratch::with_capacity(evol_options.get_chromosome_length());
        let mut mutations = 0usize;
        for child in children.iter_mut() {
            if mutate(child, evol_options.get_mutation_rate(), rng, &mut scratch) {
                mutations += 1;
            }
        }

        debug!(
            offspring = children.len(),
            pool = parents.len(),
            fallbacks,
            mutations,
            "bred offspring"
        );

        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(
        rng: &mut RandomNumberGenerator,
        size: usize,
        length: usize,
        k: usize,
    ) -> Vec<Chromosome> {
        (0..size)
            .map(|_| Chromosome::generate(length, k, rng).unwrap())
            .collect()
    }

    #[test]
    fn test_breed_returns_requested_count() {
        let mut rng = RandomNumberGenerator::from_seed(12);
        let options = EvolutionOptions::new(10, 8, 3, 0.2);
        let parents = pool(&mut rng, 4, 10, 3);
        let strategy = BudgetedBreedStrategy::new();

        for count in [0, 1, 2, 3, 7, 8, 9] {
            let children = strategy.breed(&parents, count, &options, &mut rng).unwrap();
            assert_eq!(children.len(), count);
            for child in &children {
                assert_eq!(child.len(), 10);
                assert!(child.activation_count() <= 3);
            }
        }
    }

    #[test]
    fn test_breed_from_single_parent() {
        let mut rng = RandomNumberGenerator::from_seed(12);
        let options = EvolutionOptions::new(6, 2, 2, 0.0);
        let parents = vec![Chromosome::from_bits(&[1, 0, 0, 1, 0, 0]).unwrap()];

        let children = BudgetedBreedStrategy::new()
            .breed(&parents, 2, &options, &mut rng)
            .unwrap();

        // Self-crossover reproduces the parent; no mutation at rate 0
        assert_eq!(children, vec![parents[0].clone(), parents[0].clone()]);
    }

    #[test]
    fn test_breed_with_empty_pool() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let options = EvolutionOptions::new(4, 4, 2, 0.1);
        let strategy = BudgetedBreedStrategy::new();

        assert_eq!(
            strategy.breed(&[], 3, &options, &mut rng),
            Err(GeneticError::EmptyPopulation)
        );
        assert_eq!(strategy.breed(&[], 0, &options, &mut rng), Ok(Vec::new()));
    }

    #[test]
    fn test_draw_pair_is_distinct() {
        let mut rng = RandomNumberGenerator::from_seed(77);
        for size in 2..6 {
            for _ in 0..200 {
                let (a, b) = BudgetedBreedStrategy::draw_pair(size, &mut rng);
                assert_ne!(a, b);
                assert!(a < size && b < size);
            }
        }
        assert_eq!(BudgetedBreedStrategy::draw_pair(1, &mut rng), (0, 0));
    }

    #[test]
    fn test_breed_is_reproducible() {
        let options = EvolutionOptions::new(12, 10, 4, 0.5);
        let mut seed_rng = RandomNumberGenerator::from_seed(3);
        let parents = pool(&mut seed_rng, 5, 12, 4);

        let mut rng1 = RandomNumberGenerator::from_seed(40);
        let mut rng2 = RandomNumberGenerator::from_seed(40);
        let strategy = BudgetedBreedStrategy::new();

        assert_eq!(
            strategy.breed(&parents, 10, &options, &mut rng1).unwrap(),
            strategy.breed(&parents, 10, &options, &mut rng2).unwrap()
        );
    }
}
