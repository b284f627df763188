//! # Candidate
//!
//! A `Candidate` is one rational approximation `numerator / denominator` together
//! with its fitness (distance to the reference value) and its age in generations.
//!
//! Candidates come into existence in one of three ways:
//!
//! - [`Candidate::random`] draws both components from `[1, MAX_COMPONENT]`.
//! - [`Candidate::from_parts`] takes explicit components and rejects zeros.
//! - [`Candidate::offspring`] derives a child from two parents with mutation.
//!
//! The ratio and the fitness are fixed at construction. Only the owning
//! `Population` advances the age.
//!
//! ## Example
//!
//! ```rust
//! use evopi::candidate::Candidate;
//! use evopi::fitness::FitnessTarget;
//! use rust_decimal_macros::dec;
//!
//! let target = FitnessTarget::pi();
//! let approx = Candidate::from_parts(355, 113, &target).unwrap();
//! assert_eq!(approx.age(), 0);
//! assert!(approx.fitness() < dec!(0.000001));
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::{
    error::{GeneticError, Result},
    fitness::FitnessTarget,
    rng::RandomNumberGenerator,
};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    numerator: u64,
    denominator: u64,
    age: u32,
    fitness: Decimal,
}

impl Candidate {
    /// Creates a candidate whose components are both drawn at random.
    pub fn random(rng: &mut RandomNumberGenerator, target: &FitnessTarget) -> Self {
        let numerator = rng.draw_component();
        let denominator = rng.draw_component();
        Self::scored(numerator, denominator, target)
    }

    /// Creates a candidate from explicit components.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidRatio` if either component is zero.
    pub fn from_parts(numerator: u64, denominator: u64, target: &FitnessTarget) -> Result<Self> {
        if numerator == 0 || denominator == 0 {
            return Err(GeneticError::InvalidRatio {
                numerator,
                denominator,
            });
        }
        Ok(Self::scored(numerator, denominator, target))
    }

    /// Derives a child from two parents.
    ///
    /// Each component is the exact average of the parents' components, scaled by
    /// `1 + mutation_fraction` or `1 - mutation_fraction` on an independent coin
    /// flip, then rounded half-to-even. Components that end up below 1 are clamped
    /// to 1, so the child is always a valid ratio.
    pub fn offspring(
        father: &Candidate,
        mother: &Candidate,
        mutation_fraction: Decimal,
        rng: &mut RandomNumberGenerator,
        target: &FitnessTarget,
    ) -> Self {
        let numerator = mutate_component(
            average(father.numerator, mother.numerator),
            mutation_fraction,
            rng.flip_coin(),
        );
        let denominator = mutate_component(
            average(father.denominator, mother.denominator),
            mutation_fraction,
            rng.flip_coin(),
        );
        Self::scored(numerator, denominator, target)
    }

    fn scored(numerator: u64, denominator: u64, target: &FitnessTarget) -> Self {
        let fitness = target.score(ratio(numerator, denominator));
        Self {
            numerator,
            denominator,
            age: 0,
            fitness,
        }
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Number of generations this candidate has survived.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Distance to the reference value; lower is fitter.
    pub fn fitness(&self) -> Decimal {
        self.fitness
    }

    pub fn ratio_value(&self) -> Decimal {
        ratio(self.numerator, self.denominator)
    }

    pub(crate) fn grow_older(&mut self) {
        self.age = self.age.saturating_add(1);
    }
}

fn ratio(numerator: u64, denominator: u64) -> Decimal {
    Decimal::from(numerator) / Decimal::from(denominator)
}

fn average(a: u64, b: u64) -> Decimal {
    (Decimal::from(a) + Decimal::from(b)) / Decimal::TWO
}

/// Scales `value` up or down by `fraction` and rounds it back to a component >= 1.
fn mutate_component(value: Decimal, fraction: Decimal, scale_up: bool) -> u64 {
    let factor = if scale_up {
        Decimal::ONE + fraction
    } else {
        Decimal::ONE - fraction
    };

    let scaled = match value.checked_mul(factor) {
        Some(scaled) => scaled.round(),
        None if factor.is_sign_negative() => return 1,
        None => return u64::MAX,
    };

    if scaled < Decimal::ONE {
        1
    } else {
        scaled.to_u64().unwrap_or(u64::MAX)
    }
}
