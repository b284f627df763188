//! # FitnessTarget
//!
//! Scores a ratio by its absolute distance from a reference value. Lower is fitter.
//! The reference is carried explicitly so a candidate's fitness never depends on
//! process-wide state.
//!
//! ```rust
//! use evopi::fitness::FitnessTarget;
//! use rust_decimal_macros::dec;
//!
//! let target = FitnessTarget::pi();
//! let score = target.score(dec!(3));
//! assert!(score > dec!(0.14) && score < dec!(0.15));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// π to the 28 significant digits a `Decimal` can hold.
pub const PI: Decimal = dec!(3.141592653589793238462643383);

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitnessTarget {
    reference: Decimal,
}

impl FitnessTarget {
    pub fn new(reference: Decimal) -> Self {
        Self { reference }
    }

    pub fn pi() -> Self {
        Self::new(PI)
    }

    pub fn reference(&self) -> Decimal {
        self.reference
    }

    /// Absolute distance between `ratio` and the reference value.
    pub fn score(&self, ratio: Decimal) -> Decimal {
        (self.reference - ratio).abs()
    }
}

impl Default for FitnessTarget {
    fn default() -> Self {
        Self::pi()
    }
}
