//! Runs one world with the default options and prints its status after every generation.

use evopi::{EvolutionLauncher, EvolutionOptions, RandomNumberGenerator};
use tracing_subscriber::EnvFilter;

fn main() -> evopi::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let options = EvolutionOptions::default();
    println!("World configuration: {:?}\n", options);

    let launcher = EvolutionLauncher::new(options);
    let mut rng = RandomNumberGenerator::new();
    launcher.run(&mut rng, |report| println!("{}", report))?;

    Ok(())
}
