// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Index-set based extraction and assignment.

use std::ops::{Range, RangeInclusive};

use crate::dimension;
use crate::error::{mismatch, too_large, ShapeError};
use crate::{Element, NdArray, Nested};

/// A selection of coordinates along each of the leading axes of an array.
pub trait IndexSelector {
    /// Number of selected coordinates per axis.
    fn size(&self) -> Vec<usize>;

    /// Selected coordinates per axis, in selection order.
    fn to_array(&self) -> Vec<Vec<usize>>;

    /// Return true if every axis selects a single coordinate.
    ///
    /// A scalar selector that covers every axis of an array extracts a bare
    /// element rather than an array.
    fn is_scalar(&self) -> bool;
}

/// The selection along one axis.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AxisSelect {
    /// A single coordinate.
    Index(usize),
    /// A half-open range of coordinates.
    Range(Range<usize>),
    /// An explicit list of coordinates, possibly unordered or repeated.
    List(Vec<usize>),
}

impl AxisSelect {
    /// Return the number of selected coordinates.
    pub fn len(&self) -> usize {
        match self {
            AxisSelect::Index(_) => 1,
            AxisSelect::Range(r) => r.len(),
            AxisSelect::List(v) => v.len(),
        }
    }

    /// Return whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the selected coordinates in order.
    pub fn coords(&self) -> Vec<usize> {
        match self {
            AxisSelect::Index(i) => vec![*i],
            AxisSelect::Range(r) => r.clone().collect(),
            AxisSelect::List(v) => v.clone(),
        }
    }
}

impl From<usize> for AxisSelect {
    fn from(i: usize) -> Self {
        AxisSelect::Index(i)
    }
}

impl From<Range<usize>> for AxisSelect {
    fn from(r: Range<usize>) -> Self {
        AxisSelect::Range(r)
    }
}

impl From<RangeInclusive<usize>> for AxisSelect {
    fn from(r: RangeInclusive<usize>) -> Self {
        let (start, end) = r.into_inner();
        if end < start {
            AxisSelect::Range(start..start)
        } else {
            AxisSelect::Range(start..end + 1)
        }
    }
}

impl From<Vec<usize>> for AxisSelect {
    fn from(v: Vec<usize>) -> Self {
        AxisSelect::List(v)
    }
}

impl From<&[usize]> for AxisSelect {
    fn from(v: &[usize]) -> Self {
        AxisSelect::List(v.to_vec())
    }
}

/// An [`IndexSelector`] with one [`AxisSelect`] per leading axis.
///
/// Usually built with the [`select!`](crate::select) macro.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndexSet {
    axes: Vec<AxisSelect>,
}

impl IndexSet {
    /// Create an index set from per-axis selections.
    pub fn new(axes: Vec<AxisSelect>) -> Self {
        IndexSet { axes }
    }

    /// Return the per-axis selections.
    pub fn axes(&self) -> &[AxisSelect] {
        &self.axes
    }
}

impl IndexSelector for IndexSet {
    fn size(&self) -> Vec<usize> {
        self.axes.iter().map(AxisSelect::len).collect()
    }

    fn to_array(&self) -> Vec<Vec<usize>> {
        self.axes.iter().map(AxisSelect::coords).collect()
    }

    fn is_scalar(&self) -> bool {
        self.axes.iter().all(|axis| matches!(axis, AxisSelect::Index(_)))
    }
}

/// The result of [`NdArray::subset`].
#[derive(Clone, Debug, PartialEq)]
pub enum Subset<A> {
    Scalar(A),
    Array(NdArray<A>),
}

impl<A> Subset<A> {
    /// Return the element, if the selection was scalar.
    pub fn scalar(self) -> Option<A> {
        match self {
            Subset::Scalar(x) => Some(x),
            Subset::Array(_) => None,
        }
    }

    /// Return the array, if the selection was not scalar.
    pub fn into_array(self) -> Option<NdArray<A>> {
        match self {
            Subset::Scalar(_) => None,
            Subset::Array(a) => Some(a),
        }
    }
}

/// Validated per-axis coordinates together with the plane size of every
/// axis of the array.
struct SubsetPlan {
    coords: Vec<Vec<usize>>,
    planes: Vec<usize>,
    shape: Vec<usize>,
    len: usize,
}

impl SubsetPlan {
    fn new<I>(shape: &[usize], index: &I) -> Result<Self, ShapeError>
    where
        I: IndexSelector + ?Sized,
    {
        let coords = index.to_array();
        if coords.is_empty() {
            return Err(ShapeError::InvalidArgumentType("index must select at least one axis"));
        }
        if coords.len() > shape.len() {
            return Err(too_large(coords.len(), shape.len()));
        }
        for (axis, &extent) in coords.iter().zip(shape) {
            if let Some(&c) = axis.iter().find(|&&c| c >= extent) {
                return Err(too_large(c + 1, extent));
            }
        }
        let mut result_shape: Vec<usize> = coords.iter().map(Vec::len).collect();
        result_shape.extend_from_slice(&shape[coords.len()..]);
        let len = dimension::size_of_shape_checked(&result_shape)?;
        Ok(SubsetPlan {
            planes: dimension::default_strides(shape),
            coords,
            shape: result_shape,
            len,
        })
    }

    /// Length of each contiguous run below the last indexed axis.
    fn run_len(&self) -> usize {
        self.planes[self.coords.len() - 1]
    }

    /// Total number of addressed elements.
    fn len(&self) -> usize {
        self.len
    }

    /// Call `f` with the buffer offset of every addressed run, in output
    /// order.
    fn for_each_run<F>(&self, f: &mut F)
    where
        F: FnMut(usize),
    {
        self.walk(0, 0, f)
    }

    fn walk<F>(&self, axis: usize, offset: usize, f: &mut F)
    where
        F: FnMut(usize),
    {
        if axis == self.coords.len() {
            f(offset);
            return;
        }
        let plane = self.planes[axis];
        for &c in &self.coords[axis] {
            self.walk(axis + 1, offset + c * plane, f);
        }
    }
}

impl<A> NdArray<A>
where
    A: Element,
{
    /// Extract the elements selected by `index` into a new array.
    ///
    /// The result's shape is the per-axis selection sizes followed by the
    /// array's axes that `index` does not cover. A scalar selector that
    /// covers every axis yields [`Subset::Scalar`].
    ///
    /// **Errors** with `DimensionMismatch` if `index` has more axes than the
    /// array or selects a coordinate beyond an axis' extent, and with
    /// `InvalidArgumentType` if it selects no axis at all.
    ///
    /// ```
    /// use ndbuffer::{select, NdArray, Subset};
    ///
    /// let a = NdArray::<u8>::from_shape_vec(&[3, 2, 2], (0..12).collect()).unwrap();
    /// let sub = a.subset(&select![vec![2, 0]]).unwrap().into_array().unwrap();
    /// assert_eq!(sub.shape(), &[2, 2, 2]);
    /// assert_eq!(sub.as_slice(), &[8, 9, 10, 11, 0, 1, 2, 3]);
    ///
    /// assert_eq!(a.subset(&select![1, 1, 0]).unwrap(), Subset::Scalar(6));
    /// ```
    pub fn subset<I>(&self, index: &I) -> Result<Subset<A>, ShapeError>
    where
        I: IndexSelector + ?Sized,
    {
        let plan = SubsetPlan::new(&self.shape, index)?;
        let run = plan.run_len();
        if index.is_scalar() && plan.coords.len() == self.ndim() {
            let mut element = None;
            plan.for_each_run(&mut |offset| element = Some(self.data[offset]));
            if let Some(x) = element {
                return Ok(Subset::Scalar(x));
            }
        }
        let mut data = Vec::with_capacity(plan.len());
        plan.for_each_run(&mut |offset| data.extend_from_slice(&self.data[offset..offset + run]));
        Ok(Subset::Array(NdArray { data, shape: plan.shape }))
    }

    /// Overwrite the elements selected by `index` with `value`.
    ///
    /// `value` is flattened and must hold exactly as many numbers as the
    /// selection addresses; they are written in the order [`NdArray::subset`]
    /// would return the selected elements, converted with the dtype's write
    /// rule. When a coordinate is selected twice the later value wins.
    ///
    /// **Errors** like [`NdArray::subset`], and with `DimensionMismatch` if
    /// the number of values is wrong. On error the array is unchanged.
    ///
    /// ```
    /// use ndbuffer::{select, NdArray};
    ///
    /// let mut a = NdArray::<u32>::zeros(&[3, 3]).unwrap();
    /// a.set_subset(&select![0..2, vec![0, 2]], [[1, 2], [3, 4]]).unwrap();
    /// assert_eq!(a.as_slice(), &[1, 0, 2, 3, 0, 4, 0, 0, 0]);
    /// ```
    pub fn set_subset<I, V>(&mut self, index: &I, value: V) -> Result<(), ShapeError>
    where
        I: IndexSelector + ?Sized,
        V: Into<Nested>,
    {
        let plan = SubsetPlan::new(&self.shape, index)?;
        let values: Vec<A> = value.into().flatten().into_iter().map(A::from_f64).collect();
        if values.len() != plan.len() {
            return Err(mismatch(values.len(), plan.len()));
        }
        let run = plan.run_len();
        let mut cursor = 0;
        let data = &mut self.data;
        plan.for_each_run(&mut |offset| {
            data[offset..offset + run].copy_from_slice(&values[cursor..cursor + run]);
            cursor += run;
        });
        Ok(())
    }
}
