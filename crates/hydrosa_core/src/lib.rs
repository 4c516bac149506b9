//! Sensitivity analysis and array utilities for environmental model output
//!
//! This crate provides:
//! - Variance-based (Sobol) first-order and total-order sensitivity indices,
//!   using Saltelli's estimator with the Saltelli (2002) cross-term improvement
//! - Packed and explicit encodings of the A, B and C model-output designs
//! - Fortran-style `pack`/`unpack` of N-dimensional arrays under a mask
//!
//! # Example
//!
//! ```ignore
//! use hydrosa_core::{SobolInput, sobol_index};
//!
//! let input = SobolInput::builder()
//!     .packed_outputs(outputs)
//!     .base_samples(ns)
//!     .build()?;
//! let indices = sobol_index(&input, true, true)?;
//! println!("Si = {:?}", indices.first_order);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod pack;
pub mod sobol;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod grid;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{GridError, PackError, ShapeError, SobolError};
pub use grid::Grid;
pub use pack::{pack, unpack, unpack_with_fill};
pub use sobol::{SobolEstimator, SobolIndices, SobolInput, SobolOptions, sobol_index};
