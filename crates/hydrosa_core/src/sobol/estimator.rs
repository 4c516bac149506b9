//! Saltelli's single-loop estimator for first-order and total-order indices.
//!
//! With `ns` base samples the estimator uses
//!
//! ```text
//! f0²   = 1/ns     Σ A·B
//! V     = 1/ns     Σ A² − f0²
//! Si    = (1/(ns−1) Σ A·Ci − f0²) / V
//! STi   = 1 − (1/(ns−1) Σ B·Ci − f0²) / V
//! ```
//!
//! The A·B cross product for `f0²` is the Saltelli (2002) improvement over
//! `mean(A)²`. The divisors differ on purpose and must stay as written.
//!
//! References: Saltelli (2002), *Computer Physics Communications* 145(2);
//! Saltelli et al. (2008), *Global Sensitivity Analysis. The Primer*, p. 164ff.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, SobolError};

use super::SobolOptions;
use super::input::{SampleView, SobolInput};

/// First-order and total-order indices, one value per parameter.
///
/// Values are not clamped; small sample counts routinely give results outside `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SobolIndices {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_order: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_order: Option<Vec<f64>>,
}

impl SobolIndices {
    /// Number of parameters the indices cover
    #[must_use]
    pub fn num_parameters(&self) -> usize {
        self.first_order
            .as_ref()
            .or(self.total_order.as_ref())
            .map_or(0, Vec::len)
    }

    /// Requested index sequences in order: Si first, then STi
    #[must_use]
    pub fn outputs(&self) -> Vec<&[f64]> {
        self.first_order
            .as_deref()
            .into_iter()
            .chain(self.total_order.as_deref())
            .collect()
    }

    /// Owned version of [`SobolIndices::outputs`]
    #[must_use]
    pub fn into_outputs(self) -> Vec<Vec<f64>> {
        self.first_order.into_iter().chain(self.total_order).collect()
    }
}

/// Computes Sobol indices for a fixed choice of outputs
#[derive(Debug, Clone, Copy, Default)]
pub struct SobolEstimator {
    options: SobolOptions,
}

impl SobolEstimator {
    #[must_use]
    pub fn new(options: SobolOptions) -> Self {
        Self { options }
    }

    /// Compute the requested indices.
    ///
    /// All validation happens before any arithmetic: requesting nothing gives
    /// [`SobolError::NoOutputRequested`], inconsistent dimensions give
    /// [`SobolError::InvalidShape`].
    pub fn compute(&self, input: &SobolInput) -> Result<SobolIndices> {
        if !self.options.requests_any() {
            return Err(SobolError::NoOutputRequested);
        }
        let view = input.resolve()?;
        debug!(
            base_samples = view.base_samples(),
            parameters = view.num_parameters(),
            "resolved Sobol input"
        );

        let ns = view.base_samples() as f64;
        let fnsa = 1.0 / ns;
        let fnsa1 = 1.0 / (ns - 1.0);

        let f0_sq = fnsa * dot(view.ya, view.yb);
        let var_a = fnsa * dot(view.ya, view.ya) - f0_sq;
        if var_a == 0.0 || !var_a.is_finite() {
            warn!(var_a, "total variance estimate is degenerate, indices will not be finite");
        }

        let first_order = self.options.first_order.then(|| {
            per_parameter(&view, |row| (fnsa1 * dot(view.ya, row) - f0_sq) / var_a)
        });
        let total_order = self.options.total_order.then(|| {
            per_parameter(&view, |row| 1.0 - (fnsa1 * dot(view.yb, row) - f0_sq) / var_a)
        });

        Ok(SobolIndices {
            first_order,
            total_order,
        })
    }
}

/// Compute Sobol indices, selecting Si and STi with flags
pub fn sobol_index(input: &SobolInput, first_order: bool, total_order: bool) -> Result<SobolIndices> {
    SobolEstimator::new(SobolOptions::new(first_order, total_order)).compute(input)
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Evaluate `f` on every row of C, in parameter order
fn per_parameter<F>(view: &SampleView<'_>, f: F) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    #[cfg(feature = "parallel")]
    let values: Vec<f64> = (0..view.num_parameters())
        .into_par_iter()
        .map(|i| f(view.row(i)))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let values: Vec<f64> = (0..view.num_parameters()).map(|i| f(view.row(i))).collect();

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_output_requested() {
        let input = SobolInput::explicit(vec![1.0, 2.0], vec![3.0, 4.0], vec![vec![5.0, 6.0]]);
        assert_eq!(
            sobol_index(&input, false, false).unwrap_err(),
            SobolError::NoOutputRequested
        );
    }

    #[test]
    fn test_no_output_checked_before_shape() {
        let input = SobolInput::packed(vec![0.0; 7], 2);
        assert_eq!(
            sobol_index(&input, false, false).unwrap_err(),
            SobolError::NoOutputRequested
        );
    }

    #[test]
    fn test_hand_computed_two_samples() {
        // A = [1, 3], B = [2, 2], C0 = [1, 1]
        // f0² = (2 + 6)/2 = 4, V = (1 + 9)/2 - 4 = 1
        // Si = (1 + 3) - 4 = 0, STi = 1 - ((2 + 2) - 4) = 1
        let input = SobolInput::explicit(vec![1.0, 3.0], vec![2.0, 2.0], vec![vec![1.0, 1.0]]);
        let indices = sobol_index(&input, true, true).unwrap();

        assert_eq!(indices.first_order, Some(vec![0.0]));
        assert_eq!(indices.total_order, Some(vec![1.0]));
    }

    #[test]
    fn test_constant_output_is_not_finite() {
        let input = SobolInput::explicit(vec![2.0, 2.0], vec![2.0, 2.0], vec![vec![2.0, 2.0]]);
        let indices = sobol_index(&input, true, false).unwrap();
        assert!(!indices.first_order.unwrap()[0].is_finite());
    }

    #[test]
    fn test_outputs_order() {
        let indices = SobolIndices {
            first_order: Some(vec![0.1, 0.2]),
            total_order: Some(vec![0.3, 0.4]),
        };
        assert_eq!(indices.num_parameters(), 2);
        assert_eq!(indices.outputs(), vec![&[0.1, 0.2][..], &[0.3, 0.4][..]]);

        let only_total = SobolIndices {
            first_order: None,
            total_order: Some(vec![0.3, 0.4]),
        };
        assert_eq!(only_total.num_parameters(), 2);
        assert_eq!(only_total.into_outputs(), vec![vec![0.3, 0.4]]);
    }
}
