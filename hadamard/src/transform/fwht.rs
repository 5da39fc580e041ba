use crate::transform::errors::{TransformError, TransformResult};

/// Checks that `len` is a valid transform length: 2^k for some k >= 0.
/// Zero is rejected.
pub fn ensure_power_of_two(len: usize) -> TransformResult<()> {
    if len.is_power_of_two() {
        Ok(())
    } else {
        Err(TransformError::InvalidLength { len })
    }
}

/// Fast Walsh-Hadamard transform, returning a new vector.
///
/// The result is unnormalized: `fwht(fwht(x)) == n * x`.
pub fn fwht(values: &[f64]) -> TransformResult<Vec<f64>> {
    let mut out = values.to_vec();
    fwht_in_place(&mut out)?;
    Ok(out)
}

/// In-place variant of [`fwht`]. The buffer is left untouched on error.
pub fn fwht_in_place(values: &mut [f64]) -> TransformResult<()> {
    ensure_power_of_two(values.len())?;
    butterfly(values);
    Ok(())
}

/// Inverse transform up to a factor of `n`.
///
/// The transform is its own inverse up to scale, so this runs the same
/// butterfly again. The caller divides by `n` to get the true inverse.
pub fn inverse_fwht(values: &[f64]) -> TransformResult<Vec<f64>> {
    fwht(values)
}

pub fn inverse_fwht_in_place(values: &mut [f64]) -> TransformResult<()> {
    fwht_in_place(values)
}

/// Butterfly network: log2(n) passes, stride `h` = 1, 2, 4, ...
///
/// Each pass splits the buffer into blocks of `2h` and replaces every pair
/// (a, b) = (x[j], x[j + h]) of a block with (a + b, a - b).
#[inline]
fn butterfly(values: &mut [f64]) {
    let n = values.len();
    let mut h = 1;
    while h < n {
        for block in values.chunks_exact_mut(h * 2) {
            let (lo, hi) = block.split_at_mut(h);
            for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                let (x, y) = (*a, *b);
                *a = x + y;
                *b = x - y;
            }
        }
        h *= 2;
    }
}
