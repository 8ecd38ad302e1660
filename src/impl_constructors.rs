// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for ndbuffer
//!
use crate::dimension;
use crate::error::{mismatch, ShapeError};
use crate::{Element, NdArray, Nested, Record};

/// Input accepted by [`NdArray::from_source`].
///
/// Each variant has its own normalization path into element buffer and
/// shape.
#[derive(Clone, Debug)]
pub enum Source<'a, A> {
    /// Deep copy of an existing array.
    FromExisting(&'a NdArray<A>),
    /// A persisted record; see [`NdArray::from_record`].
    FromRecord(&'a Record),
    /// A rectangular nested literal; see [`NdArray::from_nested`].
    FromNested(Nested),
    /// The empty array, shape `[0]`.
    Empty,
}

/// Constructor methods for n-dimensional arrays.
impl<A> NdArray<A>
where
    A: Element,
{
    /// Create the empty array, with shape `[0]`.
    pub fn new() -> Self {
        NdArray {
            data: Vec::new(),
            shape: vec![0],
        }
    }

    /// Create an array from any [`Source`].
    ///
    /// ```
    /// use ndbuffer::{NdArray, Source};
    ///
    /// let a = NdArray::<u16>::from_source(Source::FromNested(vec![1, 2, 3].into())).unwrap();
    /// let b = NdArray::from_source(Source::FromExisting(&a)).unwrap();
    /// assert_eq!(a, b);
    ///
    /// let e = NdArray::<u16>::from_source(Source::Empty).unwrap();
    /// assert_eq!(e.shape(), &[0]);
    /// ```
    pub fn from_source(source: Source<'_, A>) -> Result<Self, ShapeError> {
        match source {
            Source::FromExisting(array) => Ok(array.clone()),
            Source::FromRecord(record) => Self::from_record(record),
            Source::FromNested(nested) => Self::from_nested(nested),
            Source::Empty => Ok(Self::new()),
        }
    }

    /// Create an array from a rectangular nested literal, converting each
    /// number with the dtype's write rule.
    ///
    /// Arrays nested inside the literal are flattened to plain sequences
    /// first, so they may be mixed with other values.
    ///
    /// **Errors** with `InvalidArgumentType` for a bare number and with
    /// `DimensionMismatch` for ragged nesting.
    ///
    /// ```
    /// use ndbuffer::{ClampedU8, NdArray};
    ///
    /// let a = NdArray::<ClampedU8>::from_nested(vec![[-5., 2.5], [3.5, 900.]]).unwrap();
    /// assert_eq!(a.shape(), &[2, 2]);
    /// assert_eq!(a.as_slice(), &[ClampedU8(0), ClampedU8(2), ClampedU8(4), ClampedU8(255)]);
    /// ```
    pub fn from_nested<N>(nested: N) -> Result<Self, ShapeError>
    where
        N: Into<Nested>,
    {
        let (shape, values) = nested.into().into_shape_and_values()?;
        Ok(NdArray {
            data: values.into_iter().map(A::from_f64).collect(),
            shape,
        })
    }

    /// Create an array with the given shape from a vector of elements in
    /// row-major order (no copying needed).
    ///
    /// **Errors** if the shape has no axes or `data.len()` differs from the
    /// product of the shape.
    pub fn from_shape_vec(shape: &[usize], data: Vec<A>) -> Result<Self, ShapeError> {
        let size = dimension::array_size_checked(shape)?;
        if data.len() != size {
            return Err(mismatch(data.len(), size));
        }
        Ok(NdArray {
            data,
            shape: shape.to_vec(),
        })
    }

    /// Create an array with copies of `elem`.
    pub fn from_elem(shape: &[usize], elem: A) -> Result<Self, ShapeError> {
        let size = dimension::array_size_checked(shape)?;
        Ok(NdArray {
            data: vec![elem; size],
            shape: shape.to_vec(),
        })
    }

    /// Create an array filled with the dtype's zero.
    pub fn zeros(shape: &[usize]) -> Result<Self, ShapeError> {
        Self::from_elem(shape, A::zero())
    }

    /// Create an identity matrix of size `n` (square 2D array).
    ///
    /// **Panics** if `n * n` would overflow usize.
    pub fn eye(n: usize) -> Self {
        let mut data = vec![A::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = A::one();
        }
        NdArray { data, shape: vec![n, n] }
    }
}

impl<A: Element> Default for NdArray<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a one-dimensional array from a vector (no copying needed).
impl<A> From<Vec<A>> for NdArray<A> {
    fn from(data: Vec<A>) -> Self {
        let shape = vec![data.len()];
        NdArray { data, shape }
    }
}
