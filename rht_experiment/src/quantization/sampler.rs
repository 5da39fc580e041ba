use crate::quantization::errors::{ExperimentError, ExperimentResult};
use rand::Rng;
use rand_distr::StandardNormal;

/// Uniform random point on the unit sphere in `dimension` dimensions:
/// independent standard normals, divided by their norm.
pub fn random_point_on_sphere<R: Rng + ?Sized>(
    dimension: usize,
    rng: &mut R,
) -> ExperimentResult<Vec<f64>> {
    if dimension == 0 {
        return Err(ExperimentError::EmptyDimension);
    }

    loop {
        let mut point: Vec<f64> = (0..dimension).map(|_| rng.sample(StandardNormal)).collect();
        let norm = euclidean_norm(&point);
        // all-zero draw, only reachable for tiny dimensions
        if norm == 0.0 || !norm.is_finite() {
            continue;
        }
        for v in point.iter_mut() {
            *v /= norm;
        }
        return Ok(point);
    }
}

pub fn euclidean_norm(values: &[f64]) -> f64 {
    values.iter().map(|v| v * v).sum::<f64>().sqrt()
}
