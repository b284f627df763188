//! # Population
//!
//! The `Population` owns the candidates of one simulated world and exposes the
//! operations applied to it each generation: aging, the three death rules and
//! reproduction. Every operation is a no-op on an empty population.
//!
//! The candidates are kept sorted ascending by fitness after every operation
//! that changes membership, so the fittest candidate is always at position 0.
//!
//! ## Example
//!
//! ```rust
//! use evopi::fitness::FitnessTarget;
//! use evopi::population::Population;
//! use evopi::rng::RandomNumberGenerator;
//! use rust_decimal::Decimal;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let mut population = Population::random(10, FitnessTarget::pi(), &mut rng);
//!
//! let children = population.reproduce(Decimal::ZERO, &mut rng);
//! assert_eq!(children, 5);
//! assert_eq!(population.len(), 15);
//!
//! population.remove_overcrowded(12);
//! assert_eq!(population.len(), 7);
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    candidate::Candidate,
    error::{GeneticError, OptionExt, Result},
    fitness::FitnessTarget,
    rng::RandomNumberGenerator,
};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct Population {
    candidates: Vec<Candidate>,
    target: FitnessTarget,
}

impl Population {
    /// Creates an empty population scored against `target`.
    pub fn new(target: FitnessTarget) -> Self {
        Self {
            candidates: Vec::new(),
            target,
        }
    }

    /// Creates a population of `size` random candidates, sorted by fitness.
    pub fn random(size: usize, target: FitnessTarget, rng: &mut RandomNumberGenerator) -> Self {
        let candidates = (0..size)
            .map(|_| Candidate::random(rng, &target))
            .collect();
        Self::from_candidates(candidates, target)
    }

    /// Wraps existing candidates, sorting them by fitness.
    pub fn from_candidates(candidates: Vec<Candidate>, target: FitnessTarget) -> Self {
        let mut population = Self { candidates, target };
        population.sort_by_fitness();
        population
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn target(&self) -> &FitnessTarget {
        &self.target
    }

    /// The candidate closest to the reference value, if any survive.
    pub fn fittest(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    /// Like [`Population::fittest`], but an empty population is an error.
    pub fn try_fittest(&self) -> Result<&Candidate> {
        self.fittest()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }

    /// Stable ascending sort by fitness; ties keep their current order.
    pub fn sort_by_fitness(&mut self) {
        self.candidates.sort_by(|a, b| a.fitness().cmp(&b.fitness()));
    }

    /// Advances every candidate by one generation.
    pub fn age_all(&mut self) {
        self.candidates.iter_mut().for_each(Candidate::grow_older);
    }

    /// Removes every candidate whose age has reached `max_age`.
    pub fn remove_aged_out(&mut self, max_age: u32) -> usize {
        let before = self.candidates.len();
        self.candidates.retain(|candidate| candidate.age() < max_age);
        let removed = before - self.candidates.len();
        debug!(removed, max_age, "removed aged-out candidates");
        removed
    }

    /// Removes every candidate at least `max_distance` away from the reference.
    pub fn remove_unfit(&mut self, max_distance: Decimal) -> usize {
        let before = self.candidates.len();
        self.candidates
            .retain(|candidate| candidate.fitness() < max_distance);
        let removed = before - self.candidates.len();
        debug!(removed, %max_distance, "removed unfit candidates");
        removed
    }

    /// Breeds one child from each adjacent pair of the fitness-sorted population.
    ///
    /// Pairs are (0, 1), (2, 3) and so on; with an odd population the last
    /// candidate sits this generation out. Children are appended and the
    /// population is sorted again. Returns the number of children born.
    pub fn reproduce(&mut self, mutation_fraction: Decimal, rng: &mut RandomNumberGenerator) -> usize {
        self.sort_by_fitness();

        let children: Vec<Candidate> = self
            .candidates
            .chunks_exact(2)
            .map(|pair| Candidate::offspring(&pair[0], &pair[1], mutation_fraction, rng, &self.target))
            .collect();

        let born = children.len();
        self.candidates.extend(children);
        self.sort_by_fitness();
        debug!(born, "reproduced candidates");
        born
    }

    /// Halves the population, keeping the fittest, once it exceeds `max_population`.
    ///
    /// Returns the number of candidates removed.
    pub fn remove_overcrowded(&mut self, max_population: usize) -> usize {
        let before = self.candidates.len();
        if before <= max_population {
            return 0;
        }

        self.sort_by_fitness();
        self.candidates.truncate(before / 2);
        let removed = before - self.candidates.len();
        debug!(removed, max_population, "removed overcrowded candidates");
        removed
    }
}
