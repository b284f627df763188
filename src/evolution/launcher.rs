use tracing::{info, info_span};

use super::{options::EvolutionOptions, report::GenerationReport};
use crate::{
    candidate::Candidate,
    error::Result,
    fitness::FitnessTarget,
    population::Population,
    rng::RandomNumberGenerator,
};

/// Represents the result of a run: the surviving population after the last generation.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// Number of generations stepped.
    pub generations: usize,
    /// The population as it stood after the final generation.
    pub population: Population,
}

impl EvolutionResult {
    pub fn fittest(&self) -> Option<&Candidate> {
        self.population.fittest()
    }
}

/// Drives a world through a fixed number of generations.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher {
    options: EvolutionOptions,
    target: FitnessTarget,
}

impl EvolutionLauncher {
    /// Creates a launcher that evolves approximations of π.
    pub fn new(options: EvolutionOptions) -> Self {
        Self::with_target(options, FitnessTarget::pi())
    }

    /// Creates a launcher scoring candidates against an arbitrary reference value.
    pub fn with_target(options: EvolutionOptions, target: FitnessTarget) -> Self {
        Self { options, target }
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn target(&self) -> &FitnessTarget {
        &self.target
    }

    /// Creates the initial world: `initial_population` random candidates, sorted by fitness.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the options fail validation.
    pub fn initialize(&self, rng: &mut RandomNumberGenerator) -> Result<Population> {
        self.options.validate()?;
        Ok(Population::random(
            self.options.get_initial_population(),
            self.target,
            rng,
        ))
    }

    /// Applies one generation to `population`.
    ///
    /// The order is fixed: aged-out candidates die, unfit candidates die, the
    /// survivors reproduce, overcrowding halves the world, then everyone ages.
    /// An empty population passes through unchanged.
    pub fn step_generation<'a>(
        &self,
        population: &'a mut Population,
        rng: &mut RandomNumberGenerator,
    ) -> &'a mut Population {
        population.remove_aged_out(self.options.get_max_age());
        population.remove_unfit(self.options.get_max_distance_from_pi());
        population.reproduce(self.options.get_mutation_fraction(), rng);
        population.remove_overcrowded(self.options.get_max_population());
        population.age_all();
        population
    }

    /// Snapshot of `population` labelled with `generation`.
    pub fn report(&self, generation: usize, population: &Population) -> GenerationReport {
        GenerationReport {
            generation,
            population_size: population.len(),
            fittest: population.fittest().cloned(),
            reference: self.target.reference(),
        }
    }

    /// Runs the whole simulation.
    ///
    /// `observer` sees a report for generation 0 (the initial world) and one after
    /// every generation. The run always lasts exactly `max_generations` steps, even
    /// once no candidate is left alive.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the options fail validation.
    pub fn run<F>(&self, rng: &mut RandomNumberGenerator, mut observer: F) -> Result<EvolutionResult>
    where
        F: FnMut(&GenerationReport),
    {
        let mut population = self.initialize(rng)?;
        observer(&self.report(0, &population));

        let max_generations = self.options.get_max_generations();
        for generation in 1..=max_generations {
            let _span = info_span!("generation", generation).entered();
            self.step_generation(&mut population, rng);

            let report = self.report(generation, &population);
            match &report.fittest {
                Some(fittest) => info!(
                    population = report.population_size,
                    fitness = %fittest.fitness(),
                    "generation complete"
                ),
                None => info!(population = 0, "generation complete, no survivors"),
            }
            observer(&report);
        }

        Ok(EvolutionResult {
            generations: max_generations,
            population,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneticError;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_initialize() {
        let options = EvolutionOptions::builder().initial_population(25).build();
        let launcher = EvolutionLauncher::new(options);
        let mut rng = RandomNumberGenerator::from_seed(1);

        let population = launcher.initialize(&mut rng).unwrap();

        assert_eq!(population.len(), 25);
        assert_eq!(population.target(), launcher.target());
    }

    #[test]
    fn test_initialize_rejects_invalid_options() {
        let options = EvolutionOptions::builder()
            .mutation_fraction(dec!(-1))
            .build();
        let launcher = EvolutionLauncher::new(options);
        let mut rng = RandomNumberGenerator::from_seed(1);

        assert!(matches!(
            launcher.initialize(&mut rng),
            Err(GeneticError::Configuration(_))
        ));
    }

    #[test]
    fn test_run_reports_every_generation() {
        let options = EvolutionOptions::builder()
            .max_generations(6)
            .initial_population(40)
            .build();
        let launcher = EvolutionLauncher::new(options);
        let mut rng = RandomNumberGenerator::from_seed(2);

        let mut generations = Vec::new();
        let result = launcher
            .run(&mut rng, |report| generations.push(report.generation))
            .unwrap();

        assert_eq!(generations, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(result.generations, 6);
    }

    #[test]
    fn test_run_with_zero_generations_reports_initial_state() {
        let options = EvolutionOptions::builder()
            .max_generations(0)
            .initial_population(3)
            .build();
        let launcher = EvolutionLauncher::new(options);
        let mut rng = RandomNumberGenerator::from_seed(2);

        let mut reports = Vec::new();
        let result = launcher
            .run(&mut rng, |report| reports.push(report.clone()))
            .unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].population_size, 3);
        assert_eq!(result.population.len(), 3);
    }

    #[test]
    fn test_with_target() {
        let launcher = EvolutionLauncher::with_target(
            EvolutionOptions::default(),
            FitnessTarget::new(Decimal::ONE),
        );
        let report = launcher.report(0, &Population::new(*launcher.target()));

        assert_eq!(report.reference, Decimal::ONE);
        assert!(report.fittest.is_none());
    }
}
