pub mod candidate;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod population;
pub mod rng;

// Re-export commonly used types for convenience
pub use candidate::Candidate;
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult, GenerationReport};
pub use fitness::FitnessTarget;
pub use population::Population;
pub use rng::RandomNumberGenerator;
