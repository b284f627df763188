//! # GenerationReport
//!
//! A read-only snapshot of the world after a generation: how many generations
//! have elapsed, how many candidates are alive and which one is fittest. Its
//! `Display` implementation renders the status block printed by the binary, with
//! decimals grouped in threes so the matching digits line up against the
//! reference value.
//!
//! ```text
//! * 3 generations elapsed; world population: 412
//! * Fittest candidate: 355/113 (age 2, fitness 0.000000266764189...)
//! * 3.1 415 926 719 ... (this candidate's pi)
//! * 3.1 415 926 535 ... (actual pi)
//! ```

use std::fmt;

use rust_decimal::Decimal;

use crate::candidate::Candidate;

/// Number of decimal places shown when printing ratios.
pub const DISPLAY_PRECISION: u32 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub generation: usize,
    pub population_size: usize,
    pub fittest: Option<Candidate>,
    pub reference: Decimal,
}

impl GenerationReport {
    pub fn has_survivors(&self) -> bool {
        self.fittest.is_some()
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "* {} generations elapsed; world population: {}",
            self.generation, self.population_size
        )?;

        match &self.fittest {
            Some(fittest) => {
                writeln!(
                    f,
                    "* Fittest candidate: {}/{} (age {}, fitness {})",
                    fittest.numerator(),
                    fittest.denominator(),
                    fittest.age(),
                    fittest.fitness()
                )?;
                writeln!(f, "* {} (this candidate's pi)", format_grouped(fittest.ratio_value()))?;
            }
            None => writeln!(f, "Sorry, no animals are alive")?,
        }

        writeln!(f, "* {} (actual pi)", format_grouped(self.reference))
    }
}

/// Renders `value` with [`DISPLAY_PRECISION`] decimals, grouped in threes.
pub fn format_grouped(value: Decimal) -> String {
    let rounded = value.round_dp(DISPLAY_PRECISION);
    group_digits(&format!("{:.*}", DISPLAY_PRECISION as usize, rounded))
}

/// Splits `text` into space-separated chunks of three characters.
pub fn group_digits(text: &str) -> String {
    text.chars()
        .collect::<Vec<_>>()
        .chunks(3)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
