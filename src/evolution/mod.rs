pub mod launcher;
pub mod options;
pub mod report;

pub use launcher::{EvolutionLauncher, EvolutionResult};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder};
pub use report::{format_grouped, group_digits, GenerationReport};
