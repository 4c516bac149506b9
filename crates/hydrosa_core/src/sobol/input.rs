//! Model-output encodings accepted by the estimator.
//!
//! Outputs come either packed as `[A | B | C row 0 | ... | C row k-1]` together
//! with the base sample count `ns`, or as the three explicit sets `ya`, `yb`
//! and `yc` (one row of `ns` outputs per parameter).

use serde::{Deserialize, Serialize};

use crate::error::{ShapeError, SobolError};

/// Model outputs for the A, B and C designs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SobolInput {
    /// Flat `ns * (k + 2)` outputs laid out as A, B, then C row-major
    Packed {
        outputs: Vec<f64>,
        base_samples: usize,
    },
    /// Base samples `ya`, `yb` and the `k x ns` resampled matrix `yc`
    Explicit {
        ya: Vec<f64>,
        yb: Vec<f64>,
        yc: Vec<Vec<f64>>,
    },
}

impl SobolInput {
    /// Create packed input from flat outputs and the base sample count
    #[must_use]
    pub fn packed(outputs: Vec<f64>, base_samples: usize) -> Self {
        SobolInput::Packed {
            outputs,
            base_samples,
        }
    }

    /// Create explicit input from `ya`, `yb` and the rows of `yc`
    #[must_use]
    pub fn explicit(ya: Vec<f64>, yb: Vec<f64>, yc: Vec<Vec<f64>>) -> Self {
        SobolInput::Explicit { ya, yb, yc }
    }

    /// Start a builder where either input combination may be supplied
    #[must_use]
    pub fn builder() -> SobolInputBuilder {
        SobolInputBuilder::new()
    }

    /// Number of base samples `ns`, after validating the shape
    pub fn base_samples(&self) -> Result<usize, ShapeError> {
        self.resolve().map(|view| view.base_samples())
    }

    /// Number of parameters `k`, after validating the shape
    pub fn num_parameters(&self) -> Result<usize, ShapeError> {
        self.resolve().map(|view| view.num_parameters())
    }

    /// Convert into the packed encoding (A, then B, then C row-major)
    pub fn to_packed(&self) -> Result<SobolInput, ShapeError> {
        let view = self.resolve()?;
        let ns = view.base_samples();
        let mut outputs = Vec::with_capacity(ns * (view.num_parameters() + 2));
        outputs.extend_from_slice(view.ya);
        outputs.extend_from_slice(view.yb);
        for i in 0..view.num_parameters() {
            outputs.extend_from_slice(view.row(i));
        }
        Ok(SobolInput::packed(outputs, ns))
    }

    /// Validate dimensions and borrow A, B and the rows of C.
    pub(crate) fn resolve(&self) -> Result<SampleView<'_>, ShapeError> {
        match self {
            SobolInput::Packed {
                outputs,
                base_samples,
            } => {
                let ns = *base_samples;
                if ns < 2 {
                    return Err(ShapeError::TooFewBaseSamples { base_samples: ns });
                }
                if outputs.len() % ns != 0 {
                    return Err(ShapeError::PackedLength {
                        len: outputs.len(),
                        base_samples: ns,
                    });
                }
                if outputs.len() / ns < 3 {
                    return Err(ShapeError::NoParameters);
                }

                let (ya, rest) = outputs.split_at(ns);
                let (yb, yc) = rest.split_at(ns);
                Ok(SampleView {
                    ya,
                    yb,
                    rows: Rows::Packed(yc),
                })
            }
            SobolInput::Explicit { ya, yb, yc } => {
                let ns = ya.len();
                if yb.len() != ns {
                    return Err(ShapeError::BaseSampleLength {
                        expected: ns,
                        found: yb.len(),
                    });
                }
                if let Some((row, found)) = yc
                    .iter()
                    .map(Vec::len)
                    .enumerate()
                    .find(|&(_, len)| len != ns)
                {
                    return Err(ShapeError::RowLength {
                        row,
                        expected: ns,
                        found,
                    });
                }
                if ns < 2 {
                    return Err(ShapeError::TooFewBaseSamples { base_samples: ns });
                }
                if yc.is_empty() {
                    return Err(ShapeError::NoParameters);
                }

                Ok(SampleView {
                    ya,
                    yb,
                    rows: Rows::Nested(yc),
                })
            }
        }
    }
}

/// Borrowed, validated view of the three sample sets
#[derive(Debug, Clone, Copy)]
pub(crate) struct SampleView<'a> {
    pub ya: &'a [f64],
    pub yb: &'a [f64],
    rows: Rows<'a>,
}

#[derive(Debug, Clone, Copy)]
enum Rows<'a> {
    /// Row-major `k x ns` remainder of a packed sequence
    Packed(&'a [f64]),
    Nested(&'a [Vec<f64>]),
}

impl<'a> SampleView<'a> {
    pub fn base_samples(&self) -> usize {
        self.ya.len()
    }

    pub fn num_parameters(&self) -> usize {
        match self.rows {
            Rows::Packed(data) => data.len() / self.ya.len(),
            Rows::Nested(rows) => rows.len(),
        }
    }

    /// Row `i` of C (outputs with only parameter `i` taken from A)
    pub fn row(&self, i: usize) -> &'a [f64] {
        match self.rows {
            Rows::Packed(data) => {
                let ns = self.ya.len();
                &data[i * ns..(i + 1) * ns]
            }
            Rows::Nested(rows) => &rows[i],
        }
    }
}

/// Collects optional pieces of input and picks the supply mode.
///
/// If any of `ya`, `yb` or `yc` is given the explicit mode is selected and all
/// three are required. Otherwise both packed outputs and `base_samples` are
/// required.
#[derive(Debug, Clone, Default)]
pub struct SobolInputBuilder {
    packed_outputs: Option<Vec<f64>>,
    base_samples: Option<usize>,
    ya: Option<Vec<f64>>,
    yb: Option<Vec<f64>>,
    yc: Option<Vec<Vec<f64>>>,
}

impl SobolInputBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Packed `ns * (k + 2)` outputs
    #[must_use]
    pub fn packed_outputs(mut self, outputs: Vec<f64>) -> Self {
        self.packed_outputs = Some(outputs);
        self
    }

    /// Base sample count `ns` for packed outputs
    #[must_use]
    pub fn base_samples(mut self, ns: usize) -> Self {
        self.base_samples = Some(ns);
        self
    }

    #[must_use]
    pub fn ya(mut self, ya: Vec<f64>) -> Self {
        self.ya = Some(ya);
        self
    }

    #[must_use]
    pub fn yb(mut self, yb: Vec<f64>) -> Self {
        self.yb = Some(yb);
        self
    }

    /// Resampled outputs, one row per parameter
    #[must_use]
    pub fn yc(mut self, yc: Vec<Vec<f64>>) -> Self {
        self.yc = Some(yc);
        self
    }

    /// Resolve the supply mode. Shapes are checked later by the estimator.
    pub fn build(self) -> Result<SobolInput, SobolError> {
        let explicit_given = self.ya.is_some() || self.yb.is_some() || self.yc.is_some();
        if explicit_given {
            return match (self.ya, self.yb, self.yc) {
                (Some(ya), Some(yb), Some(yc)) => Ok(SobolInput::explicit(ya, yb, yc)),
                _ => Err(SobolError::MissingInput),
            };
        }

        match (self.packed_outputs, self.base_samples) {
            (Some(outputs), Some(ns)) => Ok(SobolInput::packed(outputs, ns)),
            _ => Err(SobolError::MissingInput),
        }
    }
}
