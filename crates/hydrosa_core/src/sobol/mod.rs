//! Variance-based (Sobol) sensitivity indices.
//!
//! Model outputs from two base designs A and B and from the mixed designs C
//! (row `i` takes parameter `i` from A and every other parameter from B) are
//! turned into first-order indices Si and total-order indices STi.
//!
//! ```ignore
//! use hydrosa_core::sobol::{SobolEstimator, SobolInput, SobolOptions};
//!
//! // Explicit sample sets
//! let input = SobolInput::explicit(ya, yb, yc);
//! let indices = SobolEstimator::new(SobolOptions::default()).compute(&input)?;
//!
//! // Same data, packed as [A | B | C row 0 | ... | C row k-1]
//! let packed = SobolInput::packed(outputs, ns);
//! let st = SobolEstimator::new(SobolOptions::total_order_only()).compute(&packed)?;
//! ```

mod config;
mod estimator;
mod input;

pub use config::*;
pub use estimator::*;
pub use input::{SobolInput, SobolInputBuilder};
