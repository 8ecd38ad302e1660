// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods for two-dimensional arrays.
use crate::error::{out_of_range, require_rank, ShapeError};
use crate::{ArrayView, NdArray};

/// # Methods For 2-D Arrays
impl<A> NdArray<A> {
    /// Return `(rows, columns)` of a two-dimensional array.
    ///
    /// **Errors** with `UnsupportedRank` if the array is not 2-D.
    pub fn dim2(&self) -> Result<(usize, usize), ShapeError> {
        require_rank(self.ndim(), 2)?;
        Ok((self.shape[0], self.shape[1]))
    }

    /// Return the number of rows (length of `Axis(0)`) in the two-dimensional array.
    ///
    /// ```
    /// use ndbuffer::NdArray;
    ///
    /// let array = NdArray::<u8>::zeros(&[3, 2]).unwrap();
    /// assert_eq!(array.nrows().unwrap(), 3);
    /// ```
    pub fn nrows(&self) -> Result<usize, ShapeError> {
        self.dim2().map(|(rows, _)| rows)
    }

    /// Return the number of columns (length of `Axis(1)`) in the two-dimensional array.
    pub fn ncols(&self) -> Result<usize, ShapeError> {
        self.dim2().map(|(_, cols)| cols)
    }

    /// Return an array view of row `index`.
    ///
    /// ```
    /// use ndbuffer::NdArray;
    ///
    /// let a = NdArray::<f64>::from_nested(vec![[1., 2.], [3., 4.]]).unwrap();
    /// assert_eq!(a.row(0).unwrap().as_slice(), &[1., 2.]);
    /// ```
    pub fn row(&self, index: usize) -> Result<ArrayView<'_, A>, ShapeError> {
        let (rows, cols) = self.dim2()?;
        if index >= rows {
            return Err(out_of_range(index, rows));
        }
        Ok(ArrayView {
            data: &self.data[index * cols..(index + 1) * cols],
            shape: &self.shape[1..],
        })
    }

    /// Exchange rows `i` and `j` in place.
    ///
    /// Swapping the same pair twice restores the original array.
    ///
    /// **Errors** with `UnsupportedRank` unless the array is 2-D, and with
    /// `IndexOutOfRange` if either row does not exist.
    ///
    /// ```
    /// use ndbuffer::NdArray;
    ///
    /// let mut a = NdArray::<u8>::from_nested(vec![[1, 2], [3, 4], [5, 6]]).unwrap();
    /// a.swap_rows(0, 2).unwrap();
    /// assert_eq!(a.as_slice(), &[5, 6, 3, 4, 1, 2]);
    /// ```
    pub fn swap_rows(&mut self, i: usize, j: usize) -> Result<(), ShapeError> {
        let (rows, _) = self.dim2()?;
        for index in [i, j] {
            if index >= rows {
                return Err(out_of_range(index, rows));
            }
        }
        if i == j {
            return Ok(());
        }
        let row_len = self.data.len() / rows;
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let (head, tail) = self.data.split_at_mut(hi * row_len);
        head[lo * row_len..(lo + 1) * row_len].swap_with_slice(&mut tail[..row_len]);
        Ok(())
    }
}
