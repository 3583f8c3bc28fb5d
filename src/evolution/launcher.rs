use tracing::{debug, info, instrument};

use super::{challenge::Challenge, options::EvolutionOptions};
use crate::{
    chromosome::Chromosome,
    error::{GeneticError, Result},
    population::Population,
    rng::RandomNumberGenerator,
    selection::SelectionStrategy,
    strategy::BreedStrategy,
};

/// A chromosome together with the score it was given.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    pub chromosome: Chromosome,
    pub score: f64,
}

/// Summary of the population produced by one generational step.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// Zero-based index of the step that produced the population.
    pub generation: usize,
    pub best_score: f64,
    pub mean_score: f64,
}

/// What [`EvolutionLauncher::evolve`] hands back after the last generation.
#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    /// The final population.
    pub population: Population,
    /// Best chromosome seen in the initial population or any later generation.
    pub best: EvolutionResult,
    pub history: Vec<GenerationReport>,
}

/// Runs generational steps: evaluate, select, reproduce, mutate, replenish.
///
/// The launcher holds no mutable state. Each [`step`](Self::step) consumes a
/// population by reference and returns a brand new one. The caller owns the
/// iteration count and the random number generator.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Strategy, Selection, Chall>
where
    Strategy: BreedStrategy,
    Selection: SelectionStrategy<Chromosome>,
    Chall: Challenge,
{
    strategy: Strategy,
    selection: Selection,
    challenge: Chall,
}

impl<Strategy, Selection, Chall> EvolutionLauncher<Strategy, Selection, Chall>
where
    Strategy: BreedStrategy,
    Selection: SelectionStrategy<Chromosome>,
    Chall: Challenge,
{
    /// Creates a new `EvolutionLauncher` instance.
    ///
    /// # Arguments
    ///
    /// * `strategy` - Breeds the offspring from the breeding pool.
    /// * `selection` - Picks the breeding pool from a scored population.
    /// * `challenge` - Scores chromosomes.
    pub fn new(strategy: Strategy, selection: Selection, challenge: Chall) -> Self {
        Self {
            strategy,
            selection,
            challenge,
        }
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    fn validate(&self, options: &EvolutionOptions, population: &Population) -> Result<()> {
        options.validate()?;

        if let Some(sites) = self.challenge.expected_length() {
            if sites != options.get_chromosome_length() {
                return Err(GeneticError::Configuration(format!(
                    "challenge covers {} sites but chromosome_length is {}",
                    sites,
                    options.get_chromosome_length()
                )));
            }
        }

        if population.len() != options.get_population_size() {
            return Err(GeneticError::Configuration(format!(
                "population has {} members, expected {}",
                population.len(),
                options.get_population_size()
            )));
        }

        for (index, chromosome) in population.iter().enumerate() {
            if chromosome.len() != options.get_chromosome_length() {
                return Err(GeneticError::InvalidChromosome(format!(
                    "member {} has length {}, expected {}",
                    index,
                    chromosome.len(),
                    options.get_chromosome_length()
                )));
            }
            if chromosome.activation_count() > options.get_max_active() {
                return Err(GeneticError::InvalidChromosome(format!(
                    "member {} activates {} sites, budget is {}",
                    index,
                    chromosome.activation_count(),
                    options.get_max_active()
                )));
            }
        }

        Ok(())
    }

    /// Performs one generational step and returns the next population.
    ///
    /// 1. Score every member (in parallel at or above the parallel threshold).
    /// 2. Keep the top half as the breeding pool.
    /// 3. Carry the first `elitism` pool members over unchanged.
    /// 4. Breed the remaining slots.
    /// 5. Pad with fresh exact-budget chromosomes if the strategy came up short.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` or `InvalidChromosome` error when the options,
    /// challenge and population do not agree, a `FitnessCalculation` error for
    /// non-finite scores and a `Breeding` error if the strategy fails.
    #[instrument(level = "debug", skip_all, fields(size = population.len()))]
    pub fn step(
        &self,
        population: &Population,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        self.validate(options, population)?;

        let scores = population.evaluate(&self.challenge, options.get_parallel_threshold())?;
        let pool = self.selection.select(
            population.members(),
            &scores,
            options.breeding_pool_size(),
        )?;

        let target = options.get_population_size();
        let elites = options.get_elitism().min(pool.len());

        let mut next = Vec::with_capacity(target);
        next.extend(pool.iter().take(elites).cloned());

        let offspring = self
            .strategy
            .breed(&pool, target - elites, options, rng)
            .map_err(|e| GeneticError::Breeding(format!("Failed to breed offspring: {}", e)))?;
        next.extend(offspring);
        next.truncate(target);

        let missing = target - next.len();
        if missing > 0 {
            debug!(missing, "replenishing population with fresh chromosomes");
        }
        for _ in 0..missing {
            next.push(Chromosome::generate(
                options.get_chromosome_length(),
                options.get_max_active(),
                rng,
            )?);
        }

        let (best, mean) = summarize(&scores);
        debug!(best, mean, pool = pool.len(), elites, "generation evaluated");

        Ok(Population::from(next))
    }

    /// Runs `num_generations` steps starting from `initial`.
    ///
    /// After each step the new population is scored for the history. The best
    /// chromosome is tracked across all generations, so it survives even when
    /// the population itself loses it.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`step`](Self::step) or from scoring.
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        initial: Population,
        num_generations: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionOutcome> {
        self.validate(options, &initial)?;
        info!(
            generations = num_generations,
            population = options.get_population_size(),
            sites = options.get_chromosome_length(),
            budget = options.get_max_active(),
            "starting evolution"
        );

        let mut best = initial.fittest(&self.challenge)?;
        let mut population = initial;
        let mut history = Vec::with_capacity(num_generations);

        for generation in 0..num_generations {
            population = self.step(&population, options, rng)?;

            let scores = population.evaluate(&self.challenge, options.get_parallel_threshold())?;
            let (best_score, mean_score) = summarize(&scores);
            if best_score > best.score {
                if let Some(index) = scores.iter().position(|&score| score == best_score) {
                    best = EvolutionResult {
                        chromosome: population.members()[index].clone(),
                        score: best_score,
                    };
                }
            }

            debug!(generation, best_score, mean_score, "generation complete");
            history.push(GenerationReport {
                generation,
                best_score,
                mean_score,
            });
        }

        info!(best_score = best.score, "evolution finished");

        Ok(EvolutionOutcome {
            population,
            best,
            history,
        })
    }
}

/// Best and mean of a non-empty score slice.
fn summarize(scores: &[f64]) -> (f64, f64) {
    let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    (best, mean)
}
