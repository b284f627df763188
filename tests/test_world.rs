use evopi::{
    candidate::Candidate,
    evolution::{EvolutionLauncher, EvolutionOptions, GenerationReport},
    fitness::FitnessTarget,
    population::Population,
    rng::RandomNumberGenerator,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn close_candidates(target: &FitnessTarget) -> Vec<Candidate> {
    [(3, 1), (22, 7), (333, 106), (355, 113)]
        .iter()
        .map(|&(n, d)| Candidate::from_parts(n, d, target).unwrap())
        .collect()
}

#[test]
fn test_single_generation_scenario() {
    init_tracing();
    let options = EvolutionOptions::new(5, 1, 10_000, 4, dec!(1), Decimal::ZERO);
    let launcher = EvolutionLauncher::new(options);
    let mut rng = RandomNumberGenerator::from_seed(2024);
    let target = *launcher.target();
    let originals = close_candidates(&target);
    let mut population = Population::from_candidates(originals.clone(), target);

    // Every candidate is within distance 1 of pi
    assert_eq!(population.remove_unfit(dec!(1)), 0);

    launcher.step_generation(&mut population, &mut rng);

    assert_eq!(population.len(), 6);
    assert!(population.candidates().iter().all(|c| c.age() == 1));
    for original in &originals {
        assert!(population.candidates().iter().any(|c| {
            c.numerator() == original.numerator() && c.denominator() == original.denominator()
        }));
    }
}

#[test]
fn test_zero_survivors_keep_reporting() {
    init_tracing();
    let options = EvolutionOptions::builder()
        .max_generations(5)
        .initial_population(50)
        .max_distance_from_pi(Decimal::ZERO)
        .build();
    let launcher = EvolutionLauncher::new(options);
    let mut rng = RandomNumberGenerator::from_seed(8);

    let mut reports: Vec<GenerationReport> = Vec::new();
    let result = launcher
        .run(&mut rng, |report| reports.push(report.clone()))
        .unwrap();

    assert_eq!(reports.len(), 6);
    assert_eq!(reports[0].population_size, 50);
    for report in &reports[1..] {
        assert_eq!(report.population_size, 0);
        assert!(!report.has_survivors());
        assert!(report.to_string().contains("no animals are alive"));
    }
    assert!(result.fittest().is_none());
    assert!(result.population.try_fittest().is_err());
}

#[test]
fn test_aged_out_candidates_die_before_breeding() {
    init_tracing();
    let options = EvolutionOptions::new(2, 3, 10_000, 0, dec!(1), Decimal::ZERO);
    let launcher = EvolutionLauncher::new(options);
    let mut rng = RandomNumberGenerator::from_seed(1);
    let target = *launcher.target();
    let mut population = Population::from_candidates(close_candidates(&target), target);

    launcher.step_generation(&mut population, &mut rng);
    launcher.step_generation(&mut population, &mut rng);
    assert!(population.candidates().iter().any(|c| c.age() == 2));

    launcher.step_generation(&mut population, &mut rng);
    assert!(population.candidates().iter().all(|c| c.age() <= 2));
    assert!(population.candidates().iter().all(|c| c.age() >= 1));
}

#[test]
fn test_overcrowding_caps_population() {
    init_tracing();
    let options = EvolutionOptions::new(5, 1, 5, 0, dec!(1), Decimal::ZERO);
    let launcher = EvolutionLauncher::new(options);
    let mut rng = RandomNumberGenerator::from_seed(1);
    let target = *launcher.target();
    let mut population = Population::from_candidates(close_candidates(&target), target);

    // 4 parents + 2 children = 6 > 5, halved to 3
    launcher.step_generation(&mut population, &mut rng);

    assert_eq!(population.len(), 3);
    let fittest = population.fittest().unwrap();
    assert_eq!((fittest.numerator(), fittest.denominator()), (355, 113));
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let options = EvolutionOptions::builder()
        .max_generations(10)
        .initial_population(200)
        .mutation_fraction(dec!(0.01))
        .build();
    let launcher = EvolutionLauncher::new(options);

    let first = launcher
        .run(&mut RandomNumberGenerator::from_seed(77), |_| {})
        .unwrap();
    let second = launcher
        .run(&mut RandomNumberGenerator::from_seed(77), |_| {})
        .unwrap();

    assert_eq!(first.population.candidates(), second.population.candidates());
}

#[test]
fn test_fitness_never_gets_worse_without_aging() {
    // With no age limit and no mutation the fittest candidate always survives
    let options = EvolutionOptions::builder()
        .max_age(u32::MAX)
        .max_generations(20)
        .initial_population(300)
        .mutation_fraction(Decimal::ZERO)
        .build();
    let launcher = EvolutionLauncher::new(options);
    let mut rng = RandomNumberGenerator::from_seed(5);

    let mut best: Vec<Decimal> = Vec::new();
    launcher
        .run(&mut rng, |report| {
            if let Some(fittest) = &report.fittest {
                best.push(fittest.fitness());
            }
        })
        .unwrap();

    assert!(best.windows(2).all(|pair| pair[1] <= pair[0]));
}
