use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("vector length {len} is not a power of two")]
    InvalidLength { len: usize },

    #[error("sign mask has length {mask_len}, but the vector has length {vector_len}")]
    MismatchedMask { mask_len: usize, vector_len: usize },

    #[error("sign at index {index} is {value}, expected +1 or -1")]
    InvalidSign { index: usize, value: i8 },
}

pub type TransformResult<T> = Result<T, TransformError>;
