//! # Population
//!
//! An ordered collection of chromosomes. A population is built once, then each
//! generational step replaces it wholesale. Members are never edited in place.
//!
//! Scoring a population preserves member order. Large populations are scored
//! with rayon. Order matters because truncation selection breaks ties by
//! position.

use rayon::prelude::*;

use crate::{
    chromosome::Chromosome,
    error::{GeneticError, OptionExt, Result},
    evolution::{options::EvolutionOptions, Challenge, EvolutionResult},
    rng::RandomNumberGenerator,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Population {
    members: Vec<Chromosome>,
}

impl Population {
    /// Generates `population_size` independent chromosomes of `length` genes,
    /// each with exactly `max_active` active genes. Duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `population_size <= 1` or
    /// `max_active > length`.
    pub fn generate_valid(
        population_size: usize,
        length: usize,
        max_active: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        if population_size <= 1 {
            return Err(GeneticError::Configuration(format!(
                "population_size must be greater than 1, got {}",
                population_size
            )));
        }

        let members = (0..population_size)
            .map(|_| Chromosome::generate(length, max_active, rng))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { members })
    }

    /// Generates the initial population described by `options`.
    pub fn from_options(
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        options.validate()?;
        Self::generate_valid(
            options.get_population_size(),
            options.get_chromosome_length(),
            options.get_max_active(),
            rng,
        )
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Chromosome] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome> {
        self.members.iter()
    }

    pub fn into_inner(self) -> Vec<Chromosome> {
        self.members
    }

    /// Scores every member, in population order. Populations of at least
    /// `parallel_threshold` members are scored in parallel.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidChromosome` if a member's length differs
    /// from the challenge's expected length, and
    /// `GeneticError::FitnessCalculation` if any score is NaN or infinite.
    pub fn evaluate<C>(&self, challenge: &C, parallel_threshold: usize) -> Result<Vec<f64>>
    where
        C: Challenge + ?Sized,
    {
        if let Some(expected) = challenge.expected_length() {
            if let Some((index, chromosome)) = self
                .members
                .iter()
                .enumerate()
                .find(|(_, chromosome)| chromosome.len() != expected)
            {
                return Err(GeneticError::InvalidChromosome(format!(
                    "member {} has {} genes but the challenge covers {} sites",
                    index,
                    chromosome.len(),
                    expected
                )));
            }
        }

        let score = |chromosome: &Chromosome| -> Result<f64> {
            let score = challenge.score(chromosome);
            if !score.is_finite() {
                return Err(GeneticError::FitnessCalculation(format!(
                    "Non-finite fitness score encountered: {}",
                    score
                )));
            }
            Ok(score)
        };

        if self.members.len() >= parallel_threshold {
            self.members.par_iter().map(score).collect()
        } else {
            self.members.iter().map(score).collect()
        }
    }

    /// The highest-scoring member. Ties go to the earliest member.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` for an empty population, or a
    /// fitness error from scoring.
    pub fn fittest<C>(&self, challenge: &C) -> Result<EvolutionResult>
    where
        C: Challenge + ?Sized,
    {
        let scores = self.evaluate(challenge, usize::MAX)?;
        scores
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (index, &score)| match best {
                Some((_, best_score)) if best_score >= score => best,
                _ => Some((index, score)),
            })
            .map(|(index, score)| EvolutionResult {
                chromosome: self.members[index].clone(),
                score,
            })
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }
}

impl From<Vec<Chromosome>> for Population {
    fn from(members: Vec<Chromosome>) -> Self {
        Self { members }
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Chromosome;
    type IntoIter = std::slice::Iter<'a, Chromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
