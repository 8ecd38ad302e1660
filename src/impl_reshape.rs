// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Resizing and reshaping.

use std::cmp::min;

use crate::dimension;
use crate::error::{mismatch, ShapeError};
use crate::{Element, NdArray};

impl<A> NdArray<A>
where
    A: Element,
{
    /// Give the array a new shape, reallocating its buffer as needed.
    ///
    /// The leading elements are kept in their flat order, as many as fit,
    /// and new slots are set to `fill` converted with the dtype's write rule
    /// (zero if `None`). No per-axis remapping takes place: to grow a
    /// non-trailing axis while keeping rows aligned, pad the data first.
    ///
    /// **Errors** with `InvalidArgumentType` if `shape` has no axes. On error
    /// the array is unchanged.
    ///
    /// ```
    /// use ndbuffer::NdArray;
    ///
    /// let mut a = NdArray::<u8>::from_nested(vec![1, 2, 3, 4]).unwrap();
    /// a.resize(&[6], None).unwrap();
    /// assert_eq!(a.as_slice(), &[1, 2, 3, 4, 0, 0]);
    ///
    /// a.resize(&[2, 2], Some(9.)).unwrap();
    /// assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
    /// ```
    pub fn resize(&mut self, shape: &[usize], fill: Option<f64>) -> Result<(), ShapeError> {
        let len = dimension::array_size_checked(shape)?;
        let fill = fill.map_or_else(A::zero, A::from_f64);
        self.data.resize(len, fill);
        self.shape = shape.to_vec();
        Ok(())
    }

    /// Return a resized copy of the array, see [`NdArray::resize`].
    pub fn resized(&self, shape: &[usize], fill: Option<f64>) -> Result<Self, ShapeError> {
        let len = dimension::array_size_checked(shape)?;
        let fill = fill.map_or_else(A::zero, A::from_f64);
        let keep = min(len, self.data.len());
        let mut data = Vec::with_capacity(len);
        data.extend_from_slice(&self.data[..keep]);
        data.resize(len, fill);
        Ok(NdArray {
            data,
            shape: shape.to_vec(),
        })
    }

    /// Reinterpret the elements with a new shape, in place.
    ///
    /// No data moves; the row-major element sequence is unchanged.
    ///
    /// **Errors** with `DimensionMismatch` if the product of `shape` differs
    /// from the number of elements, and with `InvalidArgumentType` if
    /// `shape` has no axes.
    ///
    /// ```
    /// use ndbuffer::NdArray;
    ///
    /// let mut a = NdArray::<f32>::from_nested(vec![1., 2., 3., 4., 5., 6.]).unwrap();
    /// a.reshape(&[2, 3]).unwrap();
    /// assert_eq!(a.get(&[1, 0]).unwrap().scalar(), Some(4.));
    /// assert!(a.reshape(&[4, 2]).is_err());
    /// ```
    pub fn reshape(&mut self, shape: &[usize]) -> Result<(), ShapeError> {
        let len = dimension::array_size_checked(shape)?;
        if len != self.data.len() {
            return Err(mismatch(len, self.data.len()));
        }
        self.shape = shape.to_vec();
        Ok(())
    }

    /// Return a copy of the array with a new shape, see [`NdArray::reshape`].
    pub fn to_shape(&self, shape: &[usize]) -> Result<Self, ShapeError> {
        self.clone().into_shape(shape)
    }

    /// Consume the array and return it with a new shape, see
    /// [`NdArray::reshape`].
    pub fn into_shape(mut self, shape: &[usize]) -> Result<Self, ShapeError> {
        self.reshape(shape)?;
        Ok(self)
    }

    /// Return a copy of the array without its length-one axes.
    ///
    /// An array whose axes all have length one keeps a single axis.
    pub fn squeeze(&self) -> Self {
        let mut shape: Vec<usize> = self.shape.iter().copied().filter(|&d| d != 1).collect();
        if shape.is_empty() {
            shape.push(1);
        }
        NdArray {
            data: self.data.clone(),
            shape,
        }
    }
}
