use crate::{
    chromosome::Chromosome,
    error::{GeneticError, Result},
    evolution::{Challenge, EvolutionLauncher},
    selection::SelectionStrategy,
    strategy::BreedStrategy,
};

/// Assembles an [`EvolutionLauncher`] piece by piece.
///
/// # Example
///
/// ```rust
/// use siteopt::dataset::Dataset;
/// use siteopt::evolution::{EvolutionLauncherBuilder, SiteChallenge};
/// use siteopt::selection::TruncationSelection;
/// use siteopt::strategy::BudgetedBreedStrategy;
///
/// let dataset = Dataset::from_counts(vec![vec![5], vec![1], vec![10], vec![0]]);
/// let launcher = EvolutionLauncherBuilder::new()
///     .with_breed_strategy(BudgetedBreedStrategy::new())
///     .with_selection_strategy(TruncationSelection::default())
///     .with_challenge(SiteChallenge::new(&dataset))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionLauncherBuilder<B, S, C>
where
    B: BreedStrategy,
    S: SelectionStrategy<Chromosome>,
    C: Challenge,
{
    breed_strategy: Option<B>,
    selection_strategy: Option<S>,
    challenge: Option<C>,
}

impl<B, S, C> EvolutionLauncherBuilder<B, S, C>
where
    B: BreedStrategy,
    S: SelectionStrategy<Chromosome>,
    C: Challenge,
{
    pub fn new() -> Self {
        Self {
            breed_strategy: None,
            selection_strategy: None,
            challenge: None,
        }
    }

    pub fn with_breed_strategy(mut self, breed_strategy: B) -> Self {
        self.breed_strategy = Some(breed_strategy);
        self
    }

    pub fn with_selection_strategy(mut self, selection_strategy: S) -> Self {
        self.selection_strategy = Some(selection_strategy);
        self
    }

    pub fn with_challenge(mut self, challenge: C) -> Self {
        self.challenge = Some(challenge);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<B, S, C>> {
        let breed_strategy = self.breed_strategy.ok_or_else(|| {
            GeneticError::Configuration("Breeding strategy not specified".to_string())
        })?;

        let selection_strategy = self.selection_strategy.ok_or_else(|| {
            GeneticError::Configuration("Selection strategy not specified".to_string())
        })?;

        let challenge = self
            .challenge
            .ok_or_else(|| GeneticError::Configuration("Challenge not specified".to_string()))?;

        Ok(EvolutionLauncher::new(
            breed_strategy,
            selection_strategy,
            challenge,
        ))
    }
}

impl<B, S, C> Default for EvolutionLauncherBuilder<B, S, C>
where
    B: BreedStrategy,
    S: SelectionStrategy<Chromosome>,
    C: Challenge,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dataset::Dataset, evolution::SiteChallenge, selection::TruncationSelection,
        strategy::BudgetedBreedStrategy,
    };

    type Builder =
        EvolutionLauncherBuilder<BudgetedBreedStrategy, TruncationSelection, SiteChallenge>;

    fn challenge() -> SiteChallenge {
        SiteChallenge::new(&Dataset::from_counts(vec![vec![1, 2], vec![3]]))
    }

    #[test]
    fn test_build_complete() {
        let launcher = Builder::new()
            .with_breed_strategy(BudgetedBreedStrategy::new())
            .with_selection_strategy(TruncationSelection::default())
            .with_challenge(challenge())
            .build();
        assert!(launcher.is_ok());
    }

    #[test]
    fn test_build_reports_missing_parts() {
        let missing_strategy = Builder::default()
            .with_selection_strategy(TruncationSelection::default())
            .with_challenge(challenge())
            .build();
        assert!(matches!(
            missing_strategy,
            Err(GeneticError::Configuration(msg)) if msg.contains("Breeding strategy")
        ));

        let missing_selection = Builder::new()
            .with_breed_strategy(BudgetedBreedStrategy::new())
            .with_challenge(challenge())
            .build();
        assert!(matches!(
            missing_selection,
            Err(GeneticError::Configuration(msg)) if msg.contains("Selection strategy")
        ));

        let missing_challenge = Builder::new()
            .with_breed_strategy(BudgetedBreedStrategy::new())
            .with_selection_strategy(TruncationSelection::default())
            .build();
        assert!(matches!(
            missing_challenge,
            Err(GeneticError::Configuration(msg)) if msg.contains("Challenge")
        ));
    }
}
