use crate::quantization::errors::{ExperimentError, ExperimentResult};

/// Mean of squared per-coordinate differences.
pub fn mean_squared_error(original: &[f64], reconstructed: &[f64]) -> ExperimentResult<f64> {
    if original.len() != reconstructed.len() {
        return Err(ExperimentError::LengthMismatch {
            left: original.len(),
            right: reconstructed.len(),
        });
    }
    if original.is_empty() {
        return Err(ExperimentError::EmptyDimension);
    }

    let sum: f64 = original
        .iter()
        .zip(reconstructed.iter())
        .map(|(a, b)| (a - b) * (a - b))
        .sum();
    Ok(sum / original.len() as f64)
}
