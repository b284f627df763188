//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the six parameters of a simulated world:
//! how old a candidate may grow, how many generations to run, the overcrowding
//! cap, the initial population, the death threshold on fitness and the mutation
//! fraction applied to children.
//!
//! ## Example
//!
//! ```rust
//! use evopi::evolution::options::EvolutionOptions;
//! use rust_decimal_macros::dec;
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(5, 50, 1000, 100, dec!(1), dec!(0.0001));
//!
//! // Or start from the defaults and change what you need
//! let options = EvolutionOptions::builder()
//!     .max_generations(10)
//!     .initial_population(20)
//!     .build();
//! assert_eq!(options.get_max_generations(), 10);
//! assert_eq!(options.get_max_age(), 5);
//! ```
//!
//! ## Defaults
//!
//! | field | value |
//! |---|---|
//! | `max_age` | 5 |
//! | `max_generations` | 100 |
//! | `max_population` | 10000 |
//! | `initial_population` | 300 |
//! | `max_distance_from_pi` | 1 |
//! | `mutation_fraction` | 0.000001 |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{GeneticError, Result};

const DEFAULT_MAX_AGE: u32 = 5;
const DEFAULT_MAX_GENERATIONS: usize = 100;
const DEFAULT_MAX_POPULATION: usize = 10_000;
const DEFAULT_INITIAL_POPULATION: usize = 300;
const DEFAULT_MAX_DISTANCE: Decimal = dec!(1);
const DEFAULT_MUTATION_FRACTION: Decimal = dec!(0.000001);

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionOptions {
    max_age: u32,
    max_generations: usize,
    /// Population size above which the less fit half is discarded
    max_population: usize,
    initial_population: usize,
    /// Candidates at least this far from the reference value die
    max_distance_from_pi: Decimal,
    mutation_fraction: Decimal,
}

impl EvolutionOptions {
    pub fn new(
        max_age: u32,
        max_generations: usize,
        max_population: usize,
        initial_population: usize,
        max_distance_from_pi: Decimal,
        mutation_fraction: Decimal,
    ) -> Self {
        Self {
            max_age,
            max_generations,
            max_population,
            initial_population,
            max_distance_from_pi,
            mutation_fraction,
        }
    }

    pub fn get_max_age(&self) -> u32 {
        self.max_age
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn get_max_population(&self) -> usize {
        self.max_population
    }

    pub fn get_initial_population(&self) -> usize {
        self.initial_population
    }

    pub fn get_max_distance_from_pi(&self) -> Decimal {
        self.max_distance_from_pi
    }

    pub fn get_mutation_fraction(&self) -> Decimal {
        self.mutation_fraction
    }

    /// Sets the maximum age.
    pub fn set_max_age(&mut self, max_age: u32) {
        self.max_age = max_age;
    }

    /// Sets the number of generations.
    pub fn set_max_generations(&mut self, max_generations: usize) {
        self.max_generations = max_generations;
    }

    /// Sets the overcrowding cap.
    pub fn set_max_population(&mut self, max_population: usize) {
        self.max_population = max_population;
    }

    /// Sets the initial population size.
    pub fn set_initial_population(&mut self, initial_population: usize) {
        self.initial_population = initial_population;
    }

    /// Sets the fitness death threshold.
    pub fn set_max_distance_from_pi(&mut self, max_distance_from_pi: Decimal) {
        self.max_distance_from_pi = max_distance_from_pi;
    }

    /// Sets the mutation fraction.
    pub fn set_mutation_fraction(&mut self, mutation_fraction: Decimal) {
        self.mutation_fraction = mutation_fraction;
    }

    /// Checks that the options describe a runnable world.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the distance threshold or the
    /// mutation fraction is negative.
    pub fn validate(&self) -> Result<()> {
        if self.max_distance_from_pi < Decimal::ZERO {
            return Err(GeneticError::Configuration(format!(
                "Maximum distance from pi cannot be negative: {}",
                self.max_distance_from_pi
            )));
        }

        if self.mutation_fraction < Decimal::ZERO {
            return Err(GeneticError::Configuration(format!(
                "Mutation fraction cannot be negative: {}",
                self.mutation_fraction
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// Any field left unset falls back to its default.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            max_age: DEFAULT_MAX_AGE,
            max_generations: DEFAULT_MAX_GENERATIONS,
            max_population: DEFAULT_MAX_POPULATION,
            initial_population: DEFAULT_INITIAL_POPULATION,
            max_distance_from_pi: DEFAULT_MAX_DISTANCE,
            mutation_fraction: DEFAULT_MUTATION_FRACTION,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    max_age: Option<u32>,
    max_generations: Option<usize>,
    max_population: Option<usize>,
    initial_population: Option<usize>,
    max_distance_from_pi: Option<Decimal>,
    mutation_fraction: Option<Decimal>,
}

impl EvolutionOptionsBuilder {
    pub fn max_age(mut self, value: u32) -> Self {
        self.max_age = Some(value);
        self
    }

    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    pub fn max_population(mut self, value: usize) -> Self {
        self.max_population = Some(value);
        self
    }

    pub fn initial_population(mut self, value: usize) -> Self {
        self.initial_population = Some(value);
        self
    }

    pub fn max_distance_from_pi(mut self, value: Decimal) -> Self {
        self.max_distance_from_pi = Some(value);
        self
    }

    pub fn mutation_fraction(mut self, value: Decimal) -> Self {
        self.mutation_fraction = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        EvolutionOptions {
            max_age: self.max_age.unwrap_or(DEFAULT_MAX_AGE),
            max_generations: self.max_generations.unwrap_or(DEFAULT_MAX_GENERATIONS),
            max_population: self.max_population.unwrap_or(DEFAULT_MAX_POPULATION),
            initial_population: self
                .initial_population
                .unwrap_or(DEFAULT_INITIAL_POPULATION),
            max_distance_from_pi: self.max_distance_from_pi.unwrap_or(DEFAULT_MAX_DISTANCE),
            mutation_fraction: self.mutation_fraction.unwrap_or(DEFAULT_MUTATION_FRACTION),
        }
    }
}
