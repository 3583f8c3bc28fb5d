pub mod builder;
pub mod challenge;
pub mod launcher;
pub mod options;

pub use builder::EvolutionLauncherBuilder;
pub use challenge::{Challenge, SiteChallenge};
pub use launcher::{EvolutionLauncher, EvolutionOutcome, EvolutionResult, GenerationReport};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder};
