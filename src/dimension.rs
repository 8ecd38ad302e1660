// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Row-major coordinate arithmetic over a shape.
//!
//! All functions here are pure: they look at a shape (one extent per axis)
//! and never at element data.

use crate::error::{out_of_range, too_large, ShapeError};

/// Return the number of elements for a shape, or an error if the product
/// overflows `usize`.
pub fn size_of_shape_checked(shape: &[usize]) -> Result<usize, ShapeError> {
    shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or(ShapeError::InvalidArgumentType("shape size overflows usize"))
}

/// Like [`size_of_shape_checked`], but also rejects a shape without axes,
/// which no array may have.
pub fn array_size_checked(shape: &[usize]) -> Result<usize, ShapeError> {
    if shape.is_empty() {
        return Err(ShapeError::InvalidArgumentType("shape must have at least one axis"));
    }
    size_of_shape_checked(shape)
}

/// Compute the row-major strides of `shape`.
///
/// Shape (a, b, c) => strides (b * c, c, 1). Each entry is the number of
/// buffer elements spanned by one step along that axis, i.e. the product
/// of all extents strictly to its right.
pub fn default_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; shape.len()];
    let mut cum_prod = 1;
    for (stride, &dim) in strides.iter_mut().zip(shape).rev() {
        *stride = cum_prod;
        cum_prod *= dim;
    }
    strides
}

/// Return `(offset, len)` of the buffer region addressed by `index`.
///
/// A full coordinate addresses a single element (`len == 1`). A shorter
/// coordinate addresses the contiguous run spanned by its last axis, whose
/// length is that axis' stride.
///
/// **Errors** if `index` is empty, longer than `shape`, or any coordinate is
/// out of bounds for its axis.
pub fn offset_of(shape: &[usize], index: &[usize]) -> Result<(usize, usize), ShapeError> {
    if index.is_empty() {
        return Err(ShapeError::InvalidArgumentType("index must have at least one coordinate"));
    }
    if index.len() > shape.len() {
        return Err(too_large(index.len(), shape.len()));
    }
    let strides = default_strides(shape);
    let mut offset = 0;
    for ((&i, &d), &s) in index.iter().zip(shape).zip(&strides) {
        if i >= d {
            return Err(out_of_range(i, d));
        }
        offset += i * s;
    }
    Ok((offset, strides[index.len() - 1]))
}

/// Map a flat buffer offset back to its full coordinate.
///
/// **Errors** if `offset` is not smaller than the number of elements.
pub fn index_of(shape: &[usize], offset: usize) -> Result<Vec<usize>, ShapeError> {
    let size = size_of_shape_checked(shape)?;
    if offset >= size {
        return Err(out_of_range(offset, size));
    }
    let mut rest = offset;
    let index = default_strides(shape)
        .into_iter()
        .map(|s| {
            let i = rest / s;
            rest %= s;
            i
        })
        .collect();
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn strides_are_suffix_products() {
        assert_eq!(default_strides(&[2, 3, 4]), vec![12, 4, 1]);
        assert_eq!(default_strides(&[5]), vec![1]);
        assert_eq!(default_strides(&[3, 0, 2]), vec![0, 2, 1]);
    }

    #[test]
    fn full_and_partial_offsets() {
        let shape = [2, 3, 4];
        assert_eq!(offset_of(&shape, &[1, 2, 3]).unwrap(), (23, 1));
        assert_eq!(offset_of(&shape, &[1, 2]).unwrap(), (20, 4));
        assert_eq!(offset_of(&shape, &[1]).unwrap(), (12, 12));
    }

    #[test]
    fn offset_errors() {
        let shape = [2, 3];
        assert_eq!(offset_of(&shape, &[]).unwrap_err().kind(), ErrorKind::InvalidArgumentType);
        assert_eq!(offset_of(&shape, &[0, 0, 0]).unwrap_err().kind(), ErrorKind::DimensionMismatch);
        assert_eq!(
            offset_of(&shape, &[0, 3]).unwrap_err(),
            ShapeError::IndexOutOfRange { index: 3, min: 0, max: 2 }
        );
    }

    #[test]
    fn index_of_inverts_offset_of() {
        let shape = [3, 2, 4];
        for offset in 0..24 {
            let index = index_of(&shape, offset).unwrap();
            assert_eq!(offset_of(&shape, &index).unwrap(), (offset, 1));
        }
        assert!(index_of(&shape, 24).is_err());
    }

    #[test]
    fn size_overflow() {
        assert!(size_of_shape_checked(&[usize::MAX, 2]).is_err());
        assert_eq!(size_of_shape_checked(&[2, 0, 7]).unwrap(), 0);
        assert_eq!(array_size_checked(&[]).unwrap_err().kind(), ErrorKind::InvalidArgumentType);
        assert_eq!(array_size_checked(&[0]).unwrap(), 0);
    }
}
