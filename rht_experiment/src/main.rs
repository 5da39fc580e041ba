use clap::Parser;
use rht_experiment::quantization::config::{DEFAULT_DIMENSION, DEFAULT_TRIALS};
use rht_experiment::{Experiment, ExperimentConfig};

/// Measures sign-quantization error of the randomized Hadamard transform
/// on random unit-sphere points.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Sphere dimension (power of two)
    #[arg(short, long, default_value_t = DEFAULT_DIMENSION)]
    dimension: usize,

    /// Number of Monte Carlo trials
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Base seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run trials on the current thread only
    #[arg(long)]
    sequential: bool,
}

impl Cli {
    fn into_config(self) -> ExperimentConfig {
        let config = ExperimentConfig::default()
            .with_dimension(self.dimension)
            .with_trials(self.trials)
            .with_parallel(!self.sequential);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Parsed arguments: {:?}", cli);

    let experiment = Experiment::new(cli.into_config())?;
    log::debug!("Experiment config: {:?}", experiment.config());
    let summary = experiment.run()?;
    println!("{}", summary);

    Ok(())
}
