// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod math;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod aliases;
    pub mod error;
    pub mod matrix;
    pub mod traits;
    pub mod vector;
}

pub use types::aliases::*;
pub use types::error::{NumericsError, Result};
pub use types::matrix::Matrix;
pub use types::traits::{Compute, ComputeOf, Dimension, HasW, HasX, HasY, HasZ, Scalar};
pub use types::vector::Vector;
