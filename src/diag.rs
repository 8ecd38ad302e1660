// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::cmp::min;

use crate::error::{mismatch, require_rank, ShapeError};
use crate::{Element, NdArray};

/// Values for the diagonal built by [`NdArray::from_diag`].
#[derive(Clone, Debug, PartialEq)]
pub enum DiagSource<A> {
    /// The same value along the whole diagonal.
    Scalar(f64),
    /// Exactly one value per diagonal element.
    Values(Vec<f64>),
    /// A one-dimensional array with one element per diagonal element.
    Array(NdArray<A>),
}

/// Return `(len, first_row, first_col)` of the `k`-th diagonal of a
/// `rows × cols` matrix.
fn diag_params(rows: usize, cols: usize, k: isize) -> (usize, usize, usize) {
    let (r0, c0) = if k >= 0 {
        (0, k.unsigned_abs())
    } else {
        (k.unsigned_abs(), 0)
    };
    let len = min(rows.saturating_sub(r0), cols.saturating_sub(c0));
    (len, r0, c0)
}

impl<A> NdArray<A>
where
    A: Element,
{
    /// Return a copy of the `k`-th diagonal of a 2-D array.
    ///
    /// `k > 0` selects a diagonal above the main one (towards higher
    /// columns), `k < 0` one below it (towards higher rows). A diagonal that
    /// lies entirely outside the matrix is empty.
    ///
    /// **Errors** with `UnsupportedRank` unless the array is 2-D.
    ///
    /// ```
    /// use ndbuffer::NdArray;
    ///
    /// let a = NdArray::<u8>::from_nested(vec![[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(a.diagonal(0).unwrap().as_slice(), &[1, 5]);
    /// assert_eq!(a.diagonal(1).unwrap().as_slice(), &[2, 6]);
    /// assert_eq!(a.diagonal(-1).unwrap().as_slice(), &[4]);
    /// assert!(a.diagonal(3).unwrap().is_empty());
    /// ```
    pub fn diagonal(&self, k: isize) -> Result<NdArray<A>, ShapeError> {
        let (rows, cols) = self.dim2()?;
        let (len, r0, c0) = diag_params(rows, cols, k);
        let data: Vec<A> = (0..len).map(|i| self.data[(i + r0) * cols + i + c0]).collect();
        Ok(NdArray::from(data))
    }

    /// Create a `rows × cols` matrix with `source` on the `k`-th diagonal
    /// and `default` (zero if `None`) everywhere else.
    ///
    /// Numbers are converted with the dtype's write rule.
    ///
    /// **Errors** with `UnsupportedRank` if `size` does not have two entries
    /// or an array source is not 1-D, and with `DimensionMismatch` if a
    /// sequence or array source does not have exactly one element per
    /// diagonal position.
    ///
    /// ```
    /// use ndbuffer::{DiagSource, NdArray};
    ///
    /// let a = NdArray::<f64>::from_diag(&[2, 3], DiagSource::Values(vec![7., 8.]), 1, None).unwrap();
    /// assert_eq!(a.as_slice(), &[0., 7., 0., 0., 0., 8.]);
    ///
    /// let b = NdArray::<f64>::from_diag(&[2, 2], DiagSource::Scalar(1.), 0, Some(-1.)).unwrap();
    /// assert_eq!(b.as_slice(), &[1., -1., -1., 1.]);
    /// ```
    pub fn from_diag(
        size: &[usize],
        source: DiagSource<A>,
        k: isize,
        default: Option<f64>,
    ) -> Result<Self, ShapeError> {
        require_rank(size.len(), 2)?;
        let (rows, cols) = (size[0], size[1]);
        let (len, r0, c0) = diag_params(rows, cols, k);
        let values: Vec<A> = match source {
            DiagSource::Scalar(x) => vec![A::from_f64(x); len],
            DiagSource::Values(xs) => {
                if xs.len() != len {
                    return Err(mismatch(xs.len(), len));
                }
                xs.into_iter().map(A::from_f64).collect()
            }
            DiagSource::Array(array) => {
                require_rank(array.ndim(), 1)?;
                if array.len() != len {
                    return Err(mismatch(array.len(), len));
                }
                array.into_raw_vec()
            }
        };
        let fill = default.map_or_else(A::zero, A::from_f64);
        let mut matrix = NdArray::from_elem(size, fill)?;
        for (i, x) in values.into_iter().enumerate() {
            matrix.data[(i + r0) * cols + i + c0] = x;
        }
        Ok(matrix)
    }
}
