use std::fmt;

/// Min / mean / max of the per-trial mean squared errors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorSummary {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
    pub trials: usize,
}

impl ErrorSummary {
    /// Returns `None` for an empty slice.
    pub fn from_errors(errors: &[f64]) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }

        let min = errors.iter().copied().fold(f64::INFINITY, f64::min);
        let max = errors.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = errors.iter().sum::<f64>() / errors.len() as f64;

        Some(Self {
            min,
            // rounding in the sum can push the mean a hair outside [min, max]
            mean: mean.max(min).min(max),
            max,
            trials: errors.len(),
        })
    }
}

impl fmt::Display for ErrorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Min MSE:  {}", self.min)?;
        writeln!(f, "Mean MSE: {}", self.mean)?;
        write!(f, "Max MSE:  {}", self.max)
    }
}
