//! Configuration types for the Sobol estimator.

use serde::{Deserialize, Serialize};

/// Which sensitivity indices to compute.
///
/// Both default to `true`; missing fields in serialized options take the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SobolOptions {
    /// Compute first-order indices (Si)
    pub first_order: bool,
    /// Compute total-order indices (STi)
    pub total_order: bool,
}

impl Default for SobolOptions {
    fn default() -> Self {
        Self {
            first_order: true,
            total_order: true,
        }
    }
}

impl SobolOptions {
    #[must_use]
    pub fn new(first_order: bool, total_order: bool) -> Self {
        Self {
            first_order,
            total_order,
        }
    }

    /// Only first-order indices
    #[must_use]
    pub fn first_order_only() -> Self {
        Self::new(true, false)
    }

    /// Only total-order indices
    #[must_use]
    pub fn total_order_only() -> Self {
        Self::new(false, true)
    }

    /// Check that at least one index is requested
    #[must_use]
    pub fn requests_any(&self) -> bool {
        self.first_order || self.total_order
    }
}
