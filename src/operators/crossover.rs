use tracing::trace;

use crate::{chromosome::Chromosome, rng::RandomNumberGenerator};

/// Result of a budgeted crossover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossoverOutcome {
    /// Both children of an accepted cut, in `(parent1 head, parent2 head)` order.
    Children(Chromosome, Chromosome),
    /// No attempted cut kept both children within budget, so the parents come
    /// back unchanged.
    Parents(Chromosome, Chromosome),
}

impl CrossoverOutcome {
    pub fn into_pair(self) -> (Chromosome, Chromosome) {
        match self {
            Self::Children(a, b) | Self::Parents(a, b) => (a, b),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Parents(..))
    }
}

/// Single-point crossover under an activation budget.
///
/// Up to `max_attempts` times, a cut is drawn uniformly from `1..=len - 1` and
/// the children `parent1[..cut] ++ parent2[cut..]` and
/// `parent2[..cut] ++ parent1[cut..]` are considered. The first cut for which
/// both children have at most `max_active` active sites is accepted. Children
/// below the budget are accepted as they are.
///
/// If every attempt overshoots, or the parents are too short to cut (or differ
/// in length), the parents are returned unchanged.
///
/// # Example
///
/// ```rust
/// use siteopt::chromosome::Chromosome;
/// use siteopt::operators::crossover;
/// use siteopt::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(3);
/// let a = Chromosome::from_bits(&[1, 1, 0, 0]).unwrap();
/// let b = Chromosome::from_bits(&[0, 0, 1, 1]).unwrap();
///
/// let (c1, c2) = crossover(&a, &b, 2, 10, &mut rng).into_pair();
/// assert!(c1.activation_count() <= 2 && c2.activation_count() <= 2);
/// ```
pub fn crossover(
    parent1: &Chromosome,
    parent2: &Chromosome,
    max_active: usize,
    max_attempts: usize,
    rng: &mut RandomNumberGenerator,
) -> CrossoverOutcome {
    let len = parent1.len();
    if len < 2 || parent2.len() != len {
        trace!(len, other_len = parent2.len(), "no cut point available, keeping parents");
        return CrossoverOutcome::Parents(parent1.clone(), parent2.clone());
    }

    let total = parent1.activation_count() + parent2.activation_count();

    for attempt in 0..max_attempts {
        let cut = rng.inclusive(1, len - 1);
        let first = parent1.count_active(0..cut) + parent2.count_active(cut..len);
        let second = total - first;

        if first <= max_active && second <= max_active {
            trace!(attempt, cut, first, second, "crossover accepted");
            return CrossoverOutcome::Children(
                Chromosome::splice(parent1, parent2, cut),
                Chromosome::splice(parent2, parent1, cut),
            );
        }
    }

    trace!(max_attempts, max_active, "crossover exceeded budget on every attempt, keeping parents");
    CrossoverOutcome::Parents(parent1.clone(), parent2.clone())
}
