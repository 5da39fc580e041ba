use crate::transform::errors::TransformResult;
use crate::transform::fwht::{fwht_in_place, inverse_fwht_in_place};
use crate::transform::sign_mask::SignMask;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Randomized Hadamard transform: random sign flip, then FWHT.
///
/// Returns the unnormalized transform together with the mask that was used.
/// The mask is needed by [`inverse_randomized_transform`].
pub fn randomized_transform<R: Rng + ?Sized>(
    values: &[f64],
    rng: &mut R,
) -> TransformResult<(Vec<f64>, SignMask)> {
    let mut out = values.to_vec();
    let mask = randomized_transform_in_place(&mut out, rng)?;
    Ok((out, mask))
}

pub fn randomized_transform_in_place<R: Rng + ?Sized>(
    values: &mut [f64],
    rng: &mut R,
) -> TransformResult<SignMask> {
    let mask = SignMask::random(values.len(), rng)?;
    mask.apply(values)?;
    fwht_in_place(values)?;
    log::trace!("randomized transform of length {}", values.len());
    Ok(mask)
}

/// Undoes [`randomized_transform`]: FWHT, divide by `n`, flip signs back.
///
/// Exact up to rounding when `transformed` is what the forward call
/// returned; an approximation of the original when it was modified in
/// between (e.g. quantized).
pub fn inverse_randomized_transform(
    transformed: &[f64],
    mask: &SignMask,
) -> TransformResult<Vec<f64>> {
    let mut out = transformed.to_vec();
    inverse_randomized_transform_in_place(&mut out, mask)?;
    Ok(out)
}

pub fn inverse_randomized_transform_in_place(
    values: &mut [f64],
    mask: &SignMask,
) -> TransformResult<()> {
    mask.check_len(values.len())?;
    inverse_fwht_in_place(values)?;

    let n = values.len() as f64;
    for v in values.iter_mut() {
        *v /= n;
    }
    mask.apply(values)
}

/// Randomized transform bound to its own random source.
///
/// One instance per worker gives each worker an independent, optionally
/// reproducible stream of masks.
pub struct RandomizedHadamard<R: Rng> {
    rng: R,
}

impl RandomizedHadamard<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomizedHadamard<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn forward(&mut self, values: &[f64]) -> TransformResult<(Vec<f64>, SignMask)> {
        randomized_transform(values, &mut self.rng)
    }

    pub fn inverse(&self, transformed: &[f64], mask: &SignMask) -> TransformResult<Vec<f64>> {
        inverse_randomized_transform(transformed, mask)
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}
