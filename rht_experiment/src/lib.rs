pub mod quantization;
pub use quantization::config::ExperimentConfig;
pub use quantization::errors::{ExperimentError, ExperimentResult};
pub use quantization::experiment::{run_trial, Experiment};
pub use quantization::quantizer::{Quantizer, SignQuantizer};
pub use quantization::report::ErrorSummary;
