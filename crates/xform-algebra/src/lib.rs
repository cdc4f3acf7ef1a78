#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! This crate provides:
//! - `Vec2`/`Vec3` value types (`vec` module) with the degenerate-length
//!   `normalize` fallback the camera builders rely on
//! - `Mat3`/`Mat4` column-major homogeneous transforms with elementary
//!   builders, multiply/transpose/inverse, and destination-buffer variants
//!
//! Degenerate inputs never raise: singular inverses and zero-span
//! projections propagate NaN/infinity, and callers gate on `is_finite()`.

mod mat3;
mod mat4;
mod vec;

// Re-export types at crate root for convenience
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use vec::{Vec2, Vec3};
