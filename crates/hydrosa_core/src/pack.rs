//! Fortran-style `pack` and `unpack` under a boolean mask.
//!
//! The mask covers the trailing dimensions of the array. Packing keeps the
//! leading dimensions and collapses the masked ones into a single dimension
//! holding only the elements under `true` mask entries, in row-major order.
//!
//! A typical use is a catchment mask over a `(time, y, x)` field: packing
//! gives a `(time, ncells)` array of the cells inside the catchment.

use tracing::debug;

use crate::error::PackError;
use crate::grid::Grid;

/// Pack the trailing dimensions of `array` under `mask`.
///
/// An all-false mask gives a trailing dimension of length zero.
pub fn pack<T: Clone>(array: &Grid<T>, mask: &Grid<bool>) -> Result<Grid<T>, PackError> {
    let leading = leading_shape(array.shape(), mask.shape())?;
    let selected = count_true(mask);

    let data = array
        .blocks(mask.ndim())
        .flat_map(|block| {
            block
                .iter()
                .zip(mask.data())
                .filter(|(_, keep)| **keep)
                .map(|(value, _)| value.clone())
        })
        .collect();

    let mut shape = leading.to_vec();
    shape.push(selected);
    debug!(?shape, selected, "packed array");
    Ok(Grid::from_data(shape, data)?)
}

/// Scatter `vector` back into a copy of `field` under `mask`.
///
/// `field` must end with the mask's shape, and `vector` must have the shape
/// `pack` would produce for it. Positions under a `false` mask entry keep
/// their value from `field`.
pub fn unpack<T: Clone>(
    vector: &Grid<T>,
    mask: &Grid<bool>,
    field: &Grid<T>,
) -> Result<Grid<T>, PackError> {
    let leading = leading_shape(field.shape(), mask.shape())?;
    let selected = count_true(mask);

    let mut expected = leading.to_vec();
    expected.push(selected);
    if vector.shape() != expected.as_slice() {
        return Err(PackError::ShapeMismatch {
            expected,
            found: vector.shape().to_vec(),
        });
    }

    let mut unpacked = field.clone();
    for (out, packed) in unpacked.blocks_mut(mask.ndim()).zip(vector.blocks(1)) {
        let targets = out
            .iter_mut()
            .zip(mask.data())
            .filter_map(|(slot, &keep)| keep.then_some(slot));
        for (slot, value) in targets.zip(packed) {
            *slot = value.clone();
        }
    }
    Ok(unpacked)
}

/// Unpack into a new array where unmasked positions hold `fill`.
///
/// The result has the leading dimensions of `vector` followed by the mask's shape.
pub fn unpack_with_fill<T: Clone>(
    vector: &Grid<T>,
    mask: &Grid<bool>,
    fill: T,
) -> Result<Grid<T>, PackError> {
    let Some((_, leading)) = vector.shape().split_last() else {
        return Err(PackError::ShapeMismatch {
            expected: vec![count_true(mask)],
            found: Vec::new(),
        });
    };
    let mut shape = leading.to_vec();
    shape.extend_from_slice(mask.shape());
    unpack(vector, mask, &Grid::new(shape, fill)?)
}

/// Leading dimensions of `array` not covered by `mask`
fn leading_shape<'a>(array: &'a [usize], mask: &[usize]) -> Result<&'a [usize], PackError> {
    if mask.len() > array.len() {
        return Err(PackError::MaskRankTooLarge {
            mask: mask.len(),
            array: array.len(),
        });
    }
    let (leading, trailing) = array.split_at(array.len() - mask.len());
    if trailing != mask {
        return Err(PackError::ShapeMismatch {
            expected: mask.to_vec(),
            found: trailing.to_vec(),
        });
    }
    Ok(leading)
}

fn count_true(mask: &Grid<bool>) -> usize {
    mask.data().iter().filter(|&&keep| keep).count()
}
