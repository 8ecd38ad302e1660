// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods for array views, and conversion of arrays into nested rows.

use std::slice;

use crate::{ArrayView, Element, NdArray, Nested, NestedRows};

/// Methods for read-only array views.
impl<'a, A> ArrayView<'a, A> {
    /// Return the shape of the view.
    pub fn shape(&self) -> &'a [usize] {
        self.shape
    }

    /// Return the number of dimensions (axes) of the view.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Return the number of elements in the view.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return whether the view has any elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the viewed elements, with the lifetime of the owner.
    pub fn as_slice(&self) -> &'a [A] {
        self.data
    }

    /// Return a reference to the element at flat position `i` of the view.
    pub fn get(&self, i: usize) -> Option<&'a A> {
        self.data.get(i)
    }

    /// Return an iterator of references to the elements, in row-major order.
    pub fn iter(&self) -> slice::Iter<'a, A> {
        self.data.iter()
    }

    /// Build nested rows whose leaves alias the owner's buffer.
    pub fn nested_view(&self) -> NestedRows<&'a [A]> {
        build_rows(self.data, self.shape, &mut |run| run)
    }

    /// Copy the viewed elements into a new array with the view's shape.
    pub fn to_owned(&self) -> NdArray<A>
    where
        A: Clone,
    {
        NdArray {
            data: self.data.to_vec(),
            shape: self.shape.to_vec(),
        }
    }
}

/// Conversion into nested rows.
impl<A> NdArray<A> {
    /// Build nested rows whose leaves are slices of this array's buffer.
    ///
    /// The innermost axis becomes a leaf; every other axis becomes a sequence
    /// of its sub-rows. The result borrows the array.
    ///
    /// The tree has one node per row of every axis, so its size grows with
    /// the extents even when the array holds no elements (shape `[n, 0]`
    /// yields `n` empty leaves).
    ///
    /// ```
    /// use ndbuffer::{NdArray, NestedRows};
    ///
    /// let a = NdArray::<u8>::from_nested(vec![[1, 2], [3, 4]]).unwrap();
    /// let rows = a.nested_view();
    /// assert_eq!(
    ///     rows,
    ///     NestedRows::Seq(vec![NestedRows::Leaf(&[1, 2][..]), NestedRows::Leaf(&[3, 4][..])])
    /// );
    /// ```
    pub fn nested_view(&self) -> NestedRows<&[A]> {
        self.view().nested_view()
    }

    /// Build nested rows whose leaves are copies, independent of this array.
    ///
    /// Sized like [`NdArray::nested_view`].
    pub fn to_nested_vec(&self) -> NestedRows<Vec<A>>
    where
        A: Clone,
    {
        build_rows(&self.data, &self.shape, &mut |run: &[A]| run.to_vec())
    }
}

impl<A: Element> NdArray<A> {
    /// Materialize the array as a nested literal, widening each element to
    /// `f64`.
    ///
    /// The result can be fed back to [`NdArray::from_nested`], or used as
    /// part of a larger literal.
    pub fn to_nested(&self) -> Nested {
        let rows = build_rows(&self.data, &self.shape, &mut |run: &[A]| {
            Nested::Seq(run.iter().map(|x| Nested::Scalar(x.to_f64())).collect())
        });
        Nested::from(rows)
    }
}

impl<A: Element> From<&NdArray<A>> for Nested {
    fn from(array: &NdArray<A>) -> Self {
        array.to_nested()
    }
}

impl<A: Element> From<NdArray<A>> for Nested {
    fn from(array: NdArray<A>) -> Self {
        array.to_nested()
    }
}

/// Split `data` along the leading axes of `shape`, calling `leaf` on each
/// contiguous innermost run.
fn build_rows<'a, A, L, F>(data: &'a [A], shape: &[usize], leaf: &mut F) -> NestedRows<L>
where
    F: FnMut(&'a [A]) -> L,
{
    match shape {
        [] | [_] => NestedRows::Leaf(leaf(data)),
        [n, rest @ ..] => {
            let step: usize = rest.iter().product();
            // with no elements below this axis, `n` is not bounded by the buffer
            let mut rows = Vec::with_capacity(if step == 0 { 0 } else { *n });
            for i in 0..*n {
                rows.push(build_rows(&data[i * step..(i + 1) * step], rest, leaf));
            }
            NestedRows::Seq(rows)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_of_3d_array() {
        let a = NdArray::<u32>::from_shape_vec(&[2, 1, 3], (0..6).collect()).unwrap();
        let rows = a.to_nested_vec();
        assert_eq!(
            rows,
            NestedRows::Seq(vec![
                NestedRows::Seq(vec![NestedRows::Leaf(vec![0, 1, 2])]),
                NestedRows::Seq(vec![NestedRows::Leaf(vec![3, 4, 5])]),
            ])
        );
        assert_eq!(a.nested_view().leaves().len(), 2);
    }

    #[test]
    fn rows_with_zero_length_axes() {
        let a = NdArray::<f32>::zeros(&[2, 0]).unwrap();
        assert_eq!(
            a.nested_view(),
            NestedRows::Seq(vec![NestedRows::Leaf(&[][..]), NestedRows::Leaf(&[][..])])
        );
        let b = NdArray::<f32>::zeros(&[0, 4]).unwrap();
        assert_eq!(b.to_nested_vec(), NestedRows::Seq(vec![]));
    }

    #[test]
    fn rows_of_empty_array_with_long_leading_axis() {
        let n = 1 << 16;
        let a = NdArray::<u8>::from_shape_vec(&[n, 3, 0], vec![]).unwrap();
        let rows = a.nested_view();
        let leaves = rows.leaves();
        assert_eq!(leaves.len(), n * 3);
        assert!(leaves.iter().all(|leaf| leaf.is_empty()));
        match rows {
            NestedRows::Seq(ref outer) => assert_eq!(outer.len(), n),
            NestedRows::Leaf(_) => panic!("expected nested rows"),
        }
    }

    #[test]
    fn nested_literal_round_trip() {
        let a = NdArray::<f64>::from_nested(vec![[[1., 2.]], [[3., 4.]]]).unwrap();
        let b = NdArray::<f64>::from_nested(a.to_nested()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn view_to_owned() {
        let a = NdArray::<u8>::from_nested(vec![[1, 2, 3], [4, 5, 6]]).unwrap();
        let row = a.get(&[1]).unwrap().view().unwrap();
        let owned = row.to_owned();
        assert_eq!(owned.shape(), &[3]);
        assert_eq!(owned.as_slice(), &[4, 5, 6]);
        assert_eq!(row.nested_view(), NestedRows::Leaf(&[4, 5, 6][..]));
    }
}
