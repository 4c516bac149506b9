//! Cross-module tests for the estimator and array utilities
//!
//! Tests are organized by topic:
//! - `reference` - Golden values from the published ten-parameter example
//! - `properties` - Shape, mode-equivalence and selection properties on random data
//! - `requests` - Serialized inputs and options
//! - `island` - Packing a land mask out of an ocean grid

mod requests;
