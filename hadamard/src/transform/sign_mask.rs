use crate::transform::errors::{TransformError, TransformResult};
use crate::transform::fwht::ensure_power_of_two;
use bitvec::prelude::BitVec;
use rand::Rng;

/// A vector of ±1 values, stored one bit per coordinate (bit set = -1).
///
/// Masks are produced by the forward randomized transform and handed to the
/// caller, who must pass the same mask to the matching inverse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignMask {
    negative: BitVec,
}

impl SignMask {
    /// Draws `len` independent fair signs from `rng`.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> TransformResult<Self> {
        ensure_power_of_two(len)?;
        let negative = (0..len).map(|_| rng.random_bool(0.5)).collect();
        Ok(Self { negative })
    }

    /// Builds a mask from explicit signs. Every entry must be +1 or -1.
    pub fn from_signs(signs: &[i8]) -> TransformResult<Self> {
        ensure_power_of_two(signs.len())?;
        let mut negative = BitVec::with_capacity(signs.len());
        for (index, &value) in signs.iter().enumerate() {
            match value {
                1 => negative.push(false),
                -1 => negative.push(true),
                _ => return Err(TransformError::InvalidSign { index, value }),
            }
        }
        Ok(Self { negative })
    }

    pub fn len(&self) -> usize {
        self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.negative.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.negative.get(index).map(|bit| sign_value(*bit))
    }

    /// Iterates over the mask as `+1.0` / `-1.0`.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.negative.iter().by_vals().map(sign_value)
    }

    pub fn to_signs(&self) -> Vec<i8> {
        self.negative
            .iter()
            .by_vals()
            .map(|neg| if neg { -1 } else { 1 })
            .collect()
    }

    /// Multiplies `values` elementwise by the mask. Applying the same mask
    /// twice restores the input.
    pub fn apply(&self, values: &mut [f64]) -> TransformResult<()> {
        self.check_len(values.len())?;
        for (value, neg) in values.iter_mut().zip(self.negative.iter().by_vals()) {
            if neg {
                *value = -*value;
            }
        }
        Ok(())
    }

    pub(crate) fn check_len(&self, vector_len: usize) -> TransformResult<()> {
        if self.len() != vector_len {
            return Err(TransformError::MismatchedMask {
                mask_len: self.len(),
                vector_len,
            });
        }
        Ok(())
    }
}

#[inline]
fn sign_value(negative: bool) -> f64 {
    if negative { -1.0 } else { 1.0 }
}
