//! JSON request documents read from stdin.

use hydrosa_core::{Grid, SobolInput, SobolOptions};
use serde::{Deserialize, Serialize};

/// Estimator input plus the indices to compute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SobolRequest {
    pub input: SobolInput,
    #[serde(default)]
    pub options: SobolOptions,
}

impl SobolRequest {
    /// Apply command-line overrides on top of the request's options
    #[must_use]
    pub fn with_overrides(mut self, first_order_only: bool, total_order_only: bool) -> Self {
        if first_order_only {
            self.options = SobolOptions::first_order_only();
        } else if total_order_only {
            self.options = SobolOptions::total_order_only();
        }
        self
    }
}

/// Array and mask for `pack`
#[derive(Debug, Clone, Deserialize)]
pub struct PackRequest {
    pub array: Grid<f64>,
    pub mask: Grid<bool>,
}

/// Packed vector and mask for `unpack`.
///
/// Unmasked positions come from `field` when given, otherwise they hold `fill`.
#[derive(Debug, Clone, Deserialize)]
pub struct UnpackRequest {
    pub vector: Grid<f64>,
    pub mask: Grid<bool>,
    pub field: Option<Grid<f64>>,
    #[serde(default)]
    pub fill: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_default_options() {
        let request: SobolRequest = serde_json::from_str(
            r#"{"input": {"mode": "packed", "outputs": [1, 3, 2, 2, 1, 1], "base_samples": 2}}"#,
        )
        .unwrap();
        assert_eq!(request.options, SobolOptions::default());
    }

    #[test]
    fn test_overrides() {
        let request = SobolRequest {
            input: SobolInput::packed(vec![0.0; 6], 2),
            options: SobolOptions::default(),
        };

        assert_eq!(
            request.clone().with_overrides(true, false).options,
            SobolOptions::first_order_only()
        );
        assert_eq!(
            request.clone().with_overrides(false, true).options,
            SobolOptions::total_order_only()
        );
        assert_eq!(
            request.with_overrides(false, false).options,
            SobolOptions::default()
        );
    }

    #[test]
    fn test_unpack_request_defaults() {
        let request: UnpackRequest = serde_json::from_str(
            r#"{"vector": {"shape": [1], "data": [2]}, "mask": {"shape": [2], "data": [false, true]}}"#,
        )
        .unwrap();
        assert!(request.field.is_none());
        assert_eq!(request.fill, 0.0);
    }
}
