use crate::quantization::errors::{ExperimentError, ExperimentResult};
use hadamard::ensure_power_of_two;

pub const DEFAULT_DIMENSION: usize = 1024;
pub const DEFAULT_TRIALS: usize = 100;

/// Parameters of a quantization-error experiment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Sphere dimension, a power of two.
    pub dimension: usize,
    pub trials: usize,
    /// Base seed. `None` draws one from the thread RNG at run time.
    pub seed: Option<u64>,
    /// Fan trials out over the rayon thread pool.
    pub parallel: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            trials: DEFAULT_TRIALS,
            seed: None,
            parallel: true,
        }
    }
}

impl ExperimentConfig {
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> ExperimentResult<()> {
        ensure_power_of_two(self.dimension)?;
        if self.trials == 0 {
            return Err(ExperimentError::NoTrials);
        }
        Ok(())
    }
}
