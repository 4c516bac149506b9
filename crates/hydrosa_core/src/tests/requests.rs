//! Tests for serialized estimator input, options and results

use crate::sobol::{SobolIndices, SobolInput, SobolOptions, sobol_index};

#[test]
fn test_packed_input_from_json() {
    let input: SobolInput = serde_json::from_str(
        r#"{"mode": "packed", "outputs": [1, 3, 2, 2, 1, 1], "base_samples": 2}"#,
    )
    .unwrap();

    assert_eq!(
        input,
        SobolInput::packed(vec![1.0, 3.0, 2.0, 2.0, 1.0, 1.0], 2)
    );
    let indices = sobol_index(&input, true, true).unwrap();
    assert_eq!(indices.first_order, Some(vec![0.0]));
    assert_eq!(indices.total_order, Some(vec![1.0]));
}

#[test]
fn test_explicit_input_from_json() {
    let input: SobolInput = serde_json::from_str(
        r#"{"mode": "explicit", "ya": [1, 3], "yb": [2, 2], "yc": [[1, 1], [3, 1]]}"#,
    )
    .unwrap();

    assert_eq!(input.num_parameters(), Ok(2));
    assert_eq!(input.base_samples(), Ok(2));
}

#[test]
fn test_unknown_mode_rejected() {
    let result = serde_json::from_str::<SobolInput>(r#"{"mode": "radial", "outputs": []}"#);
    assert!(result.is_err());
}

#[test]
fn test_indices_skip_unrequested() {
    let indices = SobolIndices {
        first_order: None,
        total_order: Some(vec![0.5]),
    };
    let json = serde_json::to_string(&indices).unwrap();
    assert_eq!(json, r#"{"total_order":[0.5]}"#);

    let parsed: SobolIndices = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, indices);
}

#[test]
fn test_options_round_trip() {
    let options = SobolOptions::first_order_only();
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(json, r#"{"first_order":true,"total_order":false}"#);
}
