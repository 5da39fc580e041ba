use crate::quantization::config::ExperimentConfig;
use crate::quantization::errors::{ExperimentError, ExperimentResult};
use crate::quantization::metrics::mean_squared_error;
use crate::quantization::quantizer::{Quantizer, SignQuantizer};
use crate::quantization::report::ErrorSummary;
use crate::quantization::sampler::random_point_on_sphere;
use hadamard::{inverse_randomized_transform, randomized_transform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// One trial: sphere point -> randomized transform -> quantize -> inverse.
/// Returns the reconstruction MSE.
pub fn run_trial<Q, R>(dimension: usize, quantizer: &Q, rng: &mut R) -> ExperimentResult<f64>
where
    Q: Quantizer + ?Sized,
    R: Rng + ?Sized,
{
    let original = random_point_on_sphere(dimension, rng)?;
    let (transformed, mask) = randomized_transform(&original, rng)?;
    let quantized = quantizer.quantize(&transformed);
    let reconstructed = inverse_randomized_transform(&quantized, &mask)?;
    mean_squared_error(&original, &reconstructed)
}

pub struct Experiment<Q: Quantizer = SignQuantizer> {
    config: ExperimentConfig,
    quantizer: Q,
}

impl Experiment<SignQuantizer> {
    pub fn new(config: ExperimentConfig) -> ExperimentResult<Self> {
        Self::with_quantizer(config, SignQuantizer)
    }
}

impl<Q: Quantizer> Experiment<Q> {
    pub fn with_quantizer(config: ExperimentConfig, quantizer: Q) -> ExperimentResult<Self> {
        config.validate()?;
        Ok(Self { config, quantizer })
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Runs every trial and aggregates the errors.
    ///
    /// Trial `t` draws from its own generator seeded with `base_seed + t`,
    /// so the result does not depend on `parallel`.
    pub fn run(&self) -> ExperimentResult<ErrorSummary> {
        let base_seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        log::info!(
            "Running {} trials, dimension {}, base seed {}, parallel: {}",
            self.config.trials,
            self.config.dimension,
            base_seed,
            self.config.parallel
        );

        let errors: Vec<f64> = if self.config.parallel {
            (0..self.config.trials)
                .into_par_iter()
                .map(|trial| self.seeded_trial(base_seed, trial))
                .collect::<ExperimentResult<Vec<f64>>>()?
        } else {
            (0..self.config.trials)
                .map(|trial| self.seeded_trial(base_seed, trial))
                .collect::<ExperimentResult<Vec<f64>>>()?
        };

        let summary = ErrorSummary::from_errors(&errors).ok_or(ExperimentError::NoTrials)?;
        log::info!(
            "MSE over {} trials: min {}, mean {}, max {}",
            summary.trials,
            summary.min,
            summary.mean,
            summary.max
        );
        Ok(summary)
    }

    fn seeded_trial(&self, base_seed: u64, trial: usize) -> ExperimentResult<f64> {
        let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(trial as u64));
        let mse = run_trial(self.config.dimension, &self.quantizer, &mut rng)?;
        log::trace!("trial {}: mse {}", trial, mse);
        Ok(mse)
    }
}
