pub mod transform;
pub use transform::errors::{TransformError, TransformResult};
pub use transform::fwht::{ensure_power_of_two, fwht, fwht_in_place, inverse_fwht, inverse_fwht_in_place};
pub use transform::randomized::{
    inverse_randomized_transform, inverse_randomized_transform_in_place, randomized_transform,
    randomized_transform_in_place, RandomizedHadamard,
};
pub use transform::sign_mask::SignMask;
