// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::slice;

use crate::dimension;
use crate::error::{mismatch, ShapeError};
use crate::{ArrayView, DType, Element, NdArray, Nested, Selected};

/// # Methods For All Arrays
impl<A> NdArray<A> {
    /// Return the shape of the array as a slice.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Return the number of dimensions (axes) in the array.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Return the total number of elements in the array.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return whether the array has any elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the elements in row-major order.
    pub fn as_slice(&self) -> &[A] {
        &self.data
    }

    /// Return the elements in row-major order, for modification.
    ///
    /// Writes through this slice bypass the dtype's numeric conversion since
    /// they are already typed.
    pub fn as_slice_mut(&mut self) -> &mut [A] {
        &mut self.data
    }

    /// Return an iterator of references to the elements, in row-major order.
    pub fn iter(&self) -> slice::Iter<'_, A> {
        self.data.iter()
    }

    /// Return an iterator of mutable references to the elements, in
    /// row-major order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, A> {
        self.data.iter_mut()
    }

    /// Return the underlying vector of elements.
    pub fn into_raw_vec(self) -> Vec<A> {
        self.data
    }

    /// Return a view of the whole array.
    pub fn view(&self) -> ArrayView<'_, A> {
        ArrayView {
            data: &self.data,
            shape: &self.shape,
        }
    }
}

impl<A> NdArray<A>
where
    A: Element,
{
    /// Return the dtype tag of the elements.
    pub fn dtype(&self) -> DType {
        A::DTYPE
    }

    /// Look up a coordinate.
    ///
    /// A coordinate with one entry per axis returns the element. A shorter
    /// coordinate returns a view of the contiguous sub-array it addresses,
    /// whose shape is the remaining trailing axes.
    ///
    /// **Errors** with `InvalidArgumentType` for an empty coordinate, with
    /// `DimensionMismatch` if it has more entries than the array has axes, and
    /// with `IndexOutOfRange` if any entry is out of bounds.
    ///
    /// ```
    /// use ndbuffer::{NdArray, Selected};
    ///
    /// let a = NdArray::<u32>::from_nested(vec![[1, 2], [3, 4]]).unwrap();
    /// assert_eq!(a.get(&[0, 1]).unwrap(), Selected::Scalar(2));
    ///
    /// let row = a.get(&[1]).unwrap().view().unwrap();
    /// assert_eq!(row.shape(), &[2]);
    /// assert_eq!(row.as_slice(), &[3, 4]);
    /// ```
    pub fn get(&self, index: &[usize]) -> Result<Selected<'_, A>, ShapeError> {
        let (offset, len) = dimension::offset_of(&self.shape, index)?;
        if index.len() == self.ndim() {
            Ok(Selected::Scalar(self.data[offset]))
        } else {
            Ok(Selected::View(ArrayView {
                data: &self.data[offset..offset + len],
                shape: &self.shape[index.len()..],
            }))
        }
    }

    /// Assign `value` at a coordinate.
    ///
    /// `value` is flattened and must hold exactly as many numbers as the
    /// coordinate addresses: one for a full coordinate, the product of the
    /// remaining axes for a partial one. Each number is converted with the
    /// dtype's write rule.
    ///
    /// **Errors** like [`NdArray::get`], and with `DimensionMismatch` if the
    /// number of values is wrong. On error the array is unchanged.
    ///
    /// ```
    /// use ndbuffer::NdArray;
    ///
    /// let mut a = NdArray::<u8>::zeros(&[2, 3]).unwrap();
    /// a.set(&[0, 2], 300).unwrap();
    /// a.set(&[1], [7, 8, 9]).unwrap();
    /// assert_eq!(a.as_slice(), &[0, 0, 44, 7, 8, 9]);
    /// assert!(a.set(&[1], [1, 2]).is_err());
    /// ```
    pub fn set<V>(&mut self, index: &[usize], value: V) -> Result<(), ShapeError>
    where
        V: Into<Nested>,
    {
        let (offset, len) = dimension::offset_of(&self.shape, index)?;
        let values = value.into().flatten();
        if values.len() != len {
            return Err(mismatch(values.len(), len));
        }
        for (dst, x) in self.data[offset..offset + len].iter_mut().zip(values) {
            *dst = A::from_f64(x);
        }
        Ok(())
    }

    /// Set every element to `value`, converted with the dtype's write rule.
    pub fn fill(&mut self, value: f64) {
        let x = A::from_f64(value);
        self.data.iter_mut().for_each(|elt| *elt = x);
    }

    /// Convert the array to element type `B`, going through `f64` and `B`'s
    /// write rule.
    ///
    /// ```
    /// use ndbuffer::NdArray;
    ///
    /// let a = NdArray::<f64>::from_nested(vec![1.7, -1., 256.]).unwrap();
    /// assert_eq!(a.map_into::<u8>().as_slice(), &[1, 255, 0]);
    /// ```
    pub fn map_into<B>(&self) -> NdArray<B>
    where
        B: Element,
    {
        NdArray {
            data: self.data.iter().map(|x| B::from_f64(x.to_f64())).collect(),
            shape: self.shape.clone(),
        }
    }
}
