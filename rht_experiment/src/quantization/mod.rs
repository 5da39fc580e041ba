//! Monte Carlo measurement of sign-quantization error under the randomized
//! Hadamard transform.

pub mod config;
pub mod errors;
pub mod experiment;
pub mod metrics;
pub mod quantizer;
pub mod report;
pub mod sampler;
