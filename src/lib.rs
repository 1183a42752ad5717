//! # Mia - Fixed-Dimension Numerics
//!
//! Mia provides small, stack-resident vectors and matrices whose dimension is
//! part of the type, plus a bump arena for placing batches of them
//! contiguously.
//!
//! ## Core Features
//!
//! - **Vectors**: `Vector<T, N>` over any primitive integer or float
//! - **Compute types**: reductions produced in a per-element compute type
//! - **Matrices**: `Matrix<T, R, C>` built from row vectors
//! - **Arena**: O(1) zeroed allocation with bulk reset
//!
//! ## Quick Start
//!
//! ```rust
//! use mia::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let a: Vector3 = Vector3::new([1.0, 0.0, 0.0]);
//! let b: Vector3 = Vector3::new([0.0, 1.0, 0.0]);
//!
//! assert_eq!(Vector::dot_product(&a, &b), 0.0);
//! assert_eq!(Vector::cross_product(&a, &b), Vector3::forward());
//!
//! // Short input is rejected rather than read out of bounds
//! assert!(Vector3::<f32>::from_slice(&[1.0_f32, 2.0]).is_err());
//!
//! // Place vectors in an arena
//! let mut arena = Arena::new()?;
//! let points = arena.alloc_slice_copy(&[a, b])?;
//! points[0] *= 2.0;
//! assert_eq!(points[0].x(), 2.0);
//! arena.reset();
//! # Ok(())
//! # }
//! ```

pub mod memory;
pub mod numerics;

// Re-export commonly used types for convenience
pub use memory::{Arena, ArenaConfig, ArenaError, ArenaStats};
pub use numerics::{Matrix, NumericsError, Scalar, Vector};

/// Everything needed for typical vector code.
pub mod prelude {
    pub use crate::memory::{Arena, ArenaConfig, ArenaError};
    pub use crate::numerics::math::{clamp, in_range, lerp};
    pub use crate::numerics::types::aliases::*;
    pub use crate::numerics::{Compute, ComputeOf, Matrix, NumericsError, Scalar, Vector};
}

/// Version information for the mia crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
