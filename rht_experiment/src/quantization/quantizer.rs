use bitvec::prelude::{BitSlice, BitVec};

/// Maps a transformed vector onto a coarser set of values.
pub trait Quantizer: Send + Sync {
    fn quantize(&self, values: &[f64]) -> Vec<f64>;
}

/// 1-bit quantizer: every coordinate becomes +1 or -1.
///
/// Zero convention: an exact zero, of either sign, quantizes to +1. So does
/// NaN. Only values strictly below zero map to -1.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignQuantizer;

impl SignQuantizer {
    #[inline]
    pub fn sign(value: f64) -> f64 {
        if value < 0.0 { -1.0 } else { 1.0 }
    }

    /// Packs the quantized signs, one bit per coordinate (bit set = -1).
    pub fn encode(&self, values: &[f64]) -> BitVec {
        values.iter().map(|&v| v < 0.0).collect()
    }

    pub fn decode(&self, bits: &BitSlice) -> Vec<f64> {
        bits.iter()
            .by_vals()
            .map(|neg| if neg { -1.0 } else { 1.0 })
            .collect()
    }
}

impl Quantizer for SignQuantizer {
    fn quantize(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| Self::sign(v)).collect()
    }
}
