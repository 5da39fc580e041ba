//! Walsh-Hadamard transform and its randomized (sign-flipped) wrapper.

pub mod errors;
pub mod fwht;
pub mod randomized;
pub mod sign_mask;

// Re-export main components for easier access from outside the transform module.
pub use self::errors::{TransformError, TransformResult};
pub use self::fwht::{fwht, fwht_in_place, inverse_fwht, inverse_fwht_in_place};
pub use self::randomized::{inverse_randomized_transform, randomized_transform, RandomizedHadamard};
pub use self::sign_mask::SignMask;
