// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ops::{Index, IndexMut};
use std::slice;

use crate::dimension;
use crate::{ArrayView, NdArray};

#[cold]
#[inline(never)]
fn array_out_of_bounds(index: &[usize], shape: &[usize]) -> ! {
    panic!(
        "ndbuffer: index {:?} is out of bounds or not a full coordinate for array of shape {:?}",
        index, shape
    )
}

/// Flat offset of a full coordinate, panicking like slice indexing.
#[inline]
fn full_offset(index: &[usize], shape: &[usize]) -> usize {
    if index.len() != shape.len() {
        array_out_of_bounds(index, shape);
    }
    match dimension::offset_of(shape, index) {
        Ok((offset, _)) => offset,
        Err(_) => array_out_of_bounds(index, shape),
    }
}

/// Access the element at a full coordinate.
///
/// **Panics** if the coordinate does not have one entry per axis or is out
/// of bounds; [`NdArray::get`] is the fallible alternative.
impl<A> Index<&[usize]> for NdArray<A> {
    type Output = A;

    #[inline]
    fn index(&self, index: &[usize]) -> &A {
        &self.data[full_offset(index, &self.shape)]
    }
}

/// Access the element at a full coordinate mutably.
///
/// **Panics** if the coordinate does not have one entry per axis or is out
/// of bounds.
impl<A> IndexMut<&[usize]> for NdArray<A> {
    #[inline]
    fn index_mut(&mut self, index: &[usize]) -> &mut A {
        let offset = full_offset(index, &self.shape);
        &mut self.data[offset]
    }
}

impl<A, const N: usize> Index<[usize; N]> for NdArray<A> {
    type Output = A;

    #[inline]
    fn index(&self, index: [usize; N]) -> &A {
        &self[&index[..]]
    }
}

impl<A, const N: usize> IndexMut<[usize; N]> for NdArray<A> {
    #[inline]
    fn index_mut(&mut self, index: [usize; N]) -> &mut A {
        &mut self[&index[..]]
    }
}

impl<'a, A> IntoIterator for &'a NdArray<A> {
    type Item = &'a A;
    type IntoIter = slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, A> IntoIterator for &'a mut NdArray<A> {
    type Item = &'a mut A;
    type IntoIter = slice::IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<'a, A> IntoIterator for ArrayView<'a, A> {
    type Item = &'a A;
    type IntoIter = slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<A: PartialEq> PartialEq<ArrayView<'_, A>> for NdArray<A> {
    fn eq(&self, rhs: &ArrayView<'_, A>) -> bool {
        self.shape() == rhs.shape && self.as_slice() == rhs.data
    }
}

impl<A: PartialEq> PartialEq<NdArray<A>> for ArrayView<'_, A> {
    fn eq(&self, rhs: &NdArray<A>) -> bool {
        rhs == self
    }
}

#[cfg(test)]
mod tests {
    use crate::NdArray;

    #[test]
    fn index_full_coordinates() {
        let mut a = NdArray::<u32>::from_shape_vec(&[2, 3], (0..6).collect()).unwrap();
        assert_eq!(a[[1, 2]], 5);
        a[[0, 1]] = 10;
        assert_eq!(a[&[0, 1][..]], 10);
        let sum: u32 = a.iter().sum();
        assert_eq!(sum, 24);
    }

    #[test]
    #[should_panic]
    fn index_partial_coordinate_panics() {
        let a = NdArray::<u32>::zeros(&[2, 3]).unwrap();
        let _x = a[[1]];
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics() {
        let a = NdArray::<u32>::zeros(&[2, 3]).unwrap();
        let _x = a[[2, 0]];
    }

    #[test]
    fn view_equality() {
        let a = NdArray::<u8>::from_nested(vec![[1, 2], [3, 4]]).unwrap();
        let b = NdArray::<u8>::from(vec![3, 4]);
        assert_eq!(b, a.row(1).unwrap());
        assert_eq!(a.row(1).unwrap(), b);
        assert_eq!(a, a.view());
    }
}
