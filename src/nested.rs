// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Nested sequence forms of array data.
//!
//! [`Nested`] is the literal *input* form: arbitrarily nested sequences of
//! numbers, converted to the array's dtype when written.
//! [`NestedRows`] is the *output* form built from an existing array, with one
//! contiguous run of the buffer per innermost row.

use crate::dtype::ClampedU8;
use crate::error::{mismatch, ShapeError};

/// A nested sequence literal of numbers.
///
/// Most values convert into `Nested` with `.into()`: numbers become
/// [`Nested::Scalar`], and vectors or arrays of convertible values become
/// [`Nested::Seq`].
///
/// ```
/// use ndbuffer::Nested;
///
/// let n: Nested = vec![[1, 2], [3, 4]].into();
/// assert_eq!(n.shape().unwrap(), vec![2, 2]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Nested {
    Scalar(f64),
    Seq(Vec<Nested>),
}

impl Nested {
    /// Infer the shape of a rectangular literal.
    ///
    /// A scalar has the empty shape; an empty sequence has shape `[0]`.
    ///
    /// **Errors** with `DimensionMismatch` if sibling sequences differ in
    /// rank or length.
    pub fn shape(&self) -> Result<Vec<usize>, ShapeError> {
        match self {
            Nested::Scalar(_) => Ok(Vec::new()),
            Nested::Seq(items) => {
                let Some(first) = items.first() else {
                    return Ok(vec![0]);
                };
                let inner = first.shape()?;
                for item in &items[1..] {
                    let other = item.shape()?;
                    if other.len() != inner.len() {
                        return Err(mismatch(other.len(), inner.len()));
                    }
                    if let Some((&a, &e)) = other.iter().zip(&inner).find(|(a, e)| a != e) {
                        return Err(mismatch(a, e));
                    }
                }
                let mut shape = Vec::with_capacity(inner.len() + 1);
                shape.push(items.len());
                shape.extend(inner);
                Ok(shape)
            }
        }
    }

    /// Return true if this is a bare number.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Nested::Scalar(_))
    }

    /// Collect all numbers in depth-first order, ignoring the structure.
    pub fn flatten(&self) -> Vec<f64> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut Vec<f64>) {
        match self {
            Nested::Scalar(x) => out.push(*x),
            Nested::Seq(items) => items.iter().for_each(|item| item.flatten_into(out)),
        }
    }

    /// Validate a rectangular literal of rank at least one and return its
    /// shape together with its numbers in row-major order.
    pub(crate) fn into_shape_and_values(self) -> Result<(Vec<usize>, Vec<f64>), ShapeError> {
        if self.is_scalar() {
            return Err(ShapeError::InvalidArgumentType("array literal must be a sequence"));
        }
        let shape = self.shape()?;
        Ok((shape, self.flatten()))
    }
}

macro_rules! impl_nested_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Nested {
                #[inline]
                fn from(x: $t) -> Self {
                    Nested::Scalar(x as f64)
                }
            }
        )*
    };
}

impl_nested_from_number!(u8, u16, u32, u64, usize, i8, i16, i32, i64, f32, f64);

impl From<ClampedU8> for Nested {
    fn from(x: ClampedU8) -> Self {
        Nested::Scalar(x.get() as f64)
    }
}

impl<T> From<Vec<T>> for Nested
where
    T: Into<Nested>,
{
    fn from(xs: Vec<T>) -> Self {
        Nested::Seq(xs.into_iter().map(Into::into).collect())
    }
}

impl<T, const N: usize> From<[T; N]> for Nested
where
    T: Into<Nested>,
{
    fn from(xs: [T; N]) -> Self {
        Nested::Seq(xs.into_iter().map(Into::into).collect())
    }
}

impl<T> From<&[T]> for Nested
where
    T: Clone + Into<Nested>,
{
    fn from(xs: &[T]) -> Self {
        Nested::Seq(xs.iter().cloned().map(Into::into).collect())
    }
}

/// Nested rows of an array, with leaves of type `L`.
///
/// The innermost axis of the array becomes a [`NestedRows::Leaf`]; every
/// other axis becomes a [`NestedRows::Seq`] of its sub-rows. `L` is `&[A]`
/// for views into the owning array and `Vec<A>` for materialized copies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NestedRows<L> {
    Leaf(L),
    Seq(Vec<NestedRows<L>>),
}

impl<L> NestedRows<L> {
    /// Transform every leaf with `f`, keeping the structure.
    pub fn map<M, F>(self, mut f: F) -> NestedRows<M>
    where
        F: FnMut(L) -> M,
    {
        self.map_inner(&mut f)
    }

    fn map_inner<M, F>(self, f: &mut F) -> NestedRows<M>
    where
        F: FnMut(L) -> M,
    {
        match self {
            NestedRows::Leaf(leaf) => NestedRows::Leaf(f(leaf)),
            NestedRows::Seq(rows) => NestedRows::Seq(rows.into_iter().map(|r| r.map_inner(f)).collect()),
        }
    }

    /// Return the leaves in order.
    pub fn leaves(&self) -> Vec<&L> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a L>) {
        match self {
            NestedRows::Leaf(leaf) => out.push(leaf),
            NestedRows::Seq(rows) => rows.iter().for_each(|r| r.collect_leaves(out)),
        }
    }
}

impl From<NestedRows<Nested>> for Nested {
    fn from(rows: NestedRows<Nested>) -> Self {
        match rows {
            NestedRows::Leaf(leaf) => leaf,
            NestedRows::Seq(rows) => Nested::Seq(rows.into_iter().map(Nested::from).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn infer_shape() {
        let n: Nested = vec![[[1, 2, 3], [4, 5, 6]]].into();
        assert_eq!(n.shape().unwrap(), vec![1, 2, 3]);
        assert_eq!(n.flatten(), vec![1., 2., 3., 4., 5., 6.]);
        assert_eq!(Nested::Seq(vec![]).shape().unwrap(), vec![0]);
        assert_eq!(Nested::from(2.5).shape().unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn ragged_literals_are_rejected() {
        let n = Nested::Seq(vec![vec![1, 2].into(), vec![3].into()]);
        assert_eq!(n.shape().unwrap_err(), mismatch(1, 2));
        let n = Nested::Seq(vec![vec![1, 2].into(), 3.into()]);
        assert_eq!(n.shape().unwrap_err().kind(), ErrorKind::DimensionMismatch);
    }

    #[test]
    fn scalar_literal_is_not_an_array() {
        let err = Nested::from(1).into_shape_and_values().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgumentType);
    }

    #[test]
    fn map_and_leaves() {
        let rows = NestedRows::Seq(vec![NestedRows::Leaf(vec![1, 2]), NestedRows::Leaf(vec![3])]);
        let lens = rows.map(|leaf| leaf.len());
        assert_eq!(lens.leaves(), vec![&2, &1]);
    }
}
