use std::fmt;

/// Dimension problems found while resolving estimator input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// `yb` does not have the same length as `ya`
    BaseSampleLength { expected: usize, found: usize },
    /// A row of `yc` does not have `ns` columns
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// `yc` has no rows, or the packed sequence only holds A and B
    NoParameters,
    /// The variance estimators need at least two base samples
    TooFewBaseSamples { base_samples: usize },
    /// Packed length is not `ns * (k + 2)` for an integer `k`
    PackedLength { len: usize, base_samples: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::BaseSampleLength { expected, found } => {
                write!(f, "yb has {found} samples but ya has {expected}")
            }
            ShapeError::RowLength {
                row,
                expected,
                found,
            } => write!(f, "yc row {row} has {found} columns, expected {expected}"),
            ShapeError::NoParameters => write!(f, "no parameter rows in yc"),
            ShapeError::TooFewBaseSamples { base_samples } => {
                write!(f, "need at least 2 base samples, got {base_samples}")
            }
            ShapeError::PackedLength { len, base_samples } => write!(
                f,
                "packed length {len} is not a multiple of {base_samples} base samples"
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Errors returned by the Sobol index estimator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SobolError {
    /// Neither first-order nor total-order indices were requested
    NoOutputRequested,
    /// Neither packed outputs with `ns` nor `ya`, `yb` and `yc` were supplied
    MissingInput,
    InvalidShape(ShapeError),
}

impl fmt::Display for SobolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SobolError::NoOutputRequested => {
                write!(f, "no output chosen: first-order and total-order both disabled")
            }
            SobolError::MissingInput => {
                write!(f, "either packed outputs and ns or ya, yb and yc must be given")
            }
            SobolError::InvalidShape(e) => write!(f, "invalid shape: {e}"),
        }
    }
}

impl std::error::Error for SobolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SobolError::InvalidShape(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ShapeError> for SobolError {
    fn from(err: ShapeError) -> Self {
        SobolError::InvalidShape(err)
    }
}

/// Shape and data that cannot form a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The product of the non-zero extents does not fit in `usize`
    SizeOverflow { shape: Vec<usize> },
    DataLength { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::SizeOverflow { shape } => {
                write!(f, "grid shape {shape:?} has too many elements")
            }
            GridError::DataLength { expected, found } => write!(
                f,
                "grid data has {found} elements but its shape needs {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Errors related to masked packing and unpacking
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// The mask has more dimensions than the array
    MaskRankTooLarge { mask: usize, array: usize },
    /// Shapes that must agree do not
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },
    Grid(GridError),
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackError::MaskRankTooLarge { mask, array } => write!(
                f,
                "mask has {mask} dimensions but the array only has {array}"
            ),
            PackError::ShapeMismatch { expected, found } => {
                write!(f, "shape mismatch: expected {expected:?}, found {found:?}")
            }
            PackError::Grid(e) => write!(f, "invalid result grid: {e}"),
        }
    }
}

impl std::error::Error for PackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PackError::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for PackError {
    fn from(err: GridError) -> Self {
        PackError::Grid(err)
    }
}

pub type Result<T> = std::result::Result<T, SobolError>;
