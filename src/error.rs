//! # Error Types
//!
//! This module defines the error type shared by the simulation. The taxonomy is
//! deliberately small: generation steps never fail on data conditions, so errors
//! only surface from explicit construction, option validation and from callers
//! that insist on a fittest candidate.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use evopi::error::{GeneticError, Result};
//!
//! fn some_function() -> Result<()> {
//!     Ok(())
//! }
//!
//! match some_function() {
//!     Ok(_) => println!("Success!"),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use evopi::error::{GeneticError, OptionExt};
//!
//! fn first_numerator(numerators: &[u64]) -> evopi::error::Result<u64> {
//!     numerators.first().cloned().ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//!
//! assert!(first_numerator(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while building or running a simulation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneticError {
    /// A candidate was requested with a zero numerator or denominator.
    #[error("Invalid ratio: {numerator}/{denominator} must have both components >= 1")]
    InvalidRatio { numerator: u64, denominator: u64 },

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,
}

/// A specialized Result type for simulation operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
