//! N-dimensional arrays as a shape over a flat row-major vector.
//!
//! `pack` and `unpack` only ever walk a grid block by block, where a block is
//! the contiguous run of elements spanned by the trailing dimensions. That is
//! the access this type offers; there is no per-element indexing.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Row-major N-dimensional array.
///
/// The last dimension varies fastest. A grid with an empty shape is
/// zero-dimensional and holds one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid<T> {
    shape: Vec<usize>,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Grid of the given shape with every element set to `fill`
    pub fn new(shape: Vec<usize>, fill: T) -> Result<Self, GridError> {
        let len = element_count(&shape)?;
        Ok(Self {
            shape,
            data: vec![fill; len],
        })
    }
}

impl<T> Grid<T> {
    /// Grid over `data`, which must be in row-major order
    pub fn from_data(shape: Vec<usize>, data: Vec<T>) -> Result<Self, GridError> {
        let expected = element_count(&shape)?;
        if data.len() != expected {
            return Err(GridError::DataLength {
                expected,
                found: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// One-dimensional grid over `data`
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            shape: vec![data.len()],
            data,
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Number of elements spanned by the last `trailing` dimensions
    pub fn block_len(&self, trailing: usize) -> usize {
        let start = self.ndim().saturating_sub(trailing);
        self.shape[start..].iter().product()
    }

    /// Contiguous blocks spanned by the last `trailing` dimensions, one per
    /// index of the leading dimensions.
    ///
    /// A grid with no elements yields no blocks.
    pub fn blocks(&self, trailing: usize) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.block_len(trailing).max(1))
    }

    /// Mutable counterpart of [`Grid::blocks`]
    pub fn blocks_mut(&mut self, trailing: usize) -> impl Iterator<Item = &mut [T]> {
        let block = self.block_len(trailing).max(1);
        self.data.chunks_exact_mut(block)
    }
}

/// Element count of `shape`.
///
/// The product of the non-zero extents must fit in `usize`, so every block
/// length taken from a valid shape fits as well.
fn element_count(shape: &[usize]) -> Result<usize, GridError> {
    let nonzero = shape
        .iter()
        .filter(|&&extent| extent > 0)
        .try_fold(1usize, |acc, &extent| acc.checked_mul(extent))
        .ok_or_else(|| GridError::SizeOverflow {
            shape: shape.to_vec(),
        })?;
    Ok(if shape.contains(&0) { 0 } else { nonzero })
}

/// Serialized form, checked before it becomes a `Grid`
#[derive(Deserialize)]
struct RawGrid<T> {
    shape: Vec<usize>,
    data: Vec<T>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Grid<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawGrid::<T>::deserialize(deserializer)?;
        Grid::from_data(raw.shape, raw.data).map_err(<D::Error as de::Error>::custom)
    }
}
