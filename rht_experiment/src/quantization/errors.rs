use hadamard::TransformError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExperimentError {
    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error("dimension must be at least 1")]
    EmptyDimension,

    #[error("vectors have different lengths: {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("experiment needs at least one trial")]
    NoTrials,
}

pub type ExperimentResult<T> = Result<T, ExperimentError>;
