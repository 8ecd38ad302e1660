// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![doc(html_root_url = "https://docs.rs/ndbuffer/0.1/")]
#![allow(clippy::needless_range_loop)]

//! The `ndbuffer` crate provides [`NdArray`], a dense n-dimensional array of
//! fixed-width numbers stored in a single contiguous, row-major buffer.
//!
//! - The element type picks the dtype: `u8`, `u16`, `u32`, `f32`, `f64` or
//!   [`ClampedU8`]. Numeric input (nested literals, fill values, records) is
//!   narrowed with the dtype's write rule, see [`Element::from_f64`].
//! - Coordinates shorter than the rank address a contiguous sub-array,
//!   returned as a borrowing [`ArrayView`].
//! - Index sets ([`IndexSelector`], [`select!`]) extract or overwrite
//!   arbitrary per-axis selections.
//! - Resizing, reshaping, diagonals, row swaps and persisted [`Record`]s
//!   complete the API.
//!
//! ```
//! use ndbuffer::{NdArray, Selected};
//!
//! let a = NdArray::<f64>::from_nested(vec![[1, 2], [3, 4]]).unwrap();
//! assert_eq!(a.get(&[0, 1]).unwrap(), Selected::Scalar(2.));
//! assert_eq!(a.get(&[1]).unwrap().view().unwrap().as_slice(), &[3., 4.]);
//! assert_eq!(a.diagonal(0).unwrap().as_slice(), &[1., 4.]);
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `serde`
//!   - Enables serialization support for serde 1.x, through [`Record`]
//! - `approx`
//!   - Implementations of traits from version 0.5 of the [`approx`] crate.

#[macro_use]
mod macros;

mod array_approx;
#[cfg(feature = "serde")]
mod array_serde;
mod arraytraits;
mod diag;
pub mod dimension;
mod dtype;
mod error;
mod impl_2d;
mod impl_constructors;
mod impl_methods;
mod impl_reshape;
mod impl_views;
mod nested;
pub mod prelude;
mod record;
mod subset;

pub use crate::diag::DiagSource;
pub use crate::dtype::{ClampedU8, DType, Element};
pub use crate::error::{ErrorKind, Relation, ShapeError};
pub use crate::impl_constructors::Source;
pub use crate::nested::{Nested, NestedRows};
pub use crate::record::{DynArray, Record, RECORD_KIND};
pub use crate::subset::{AxisSelect, IndexSelector, IndexSet, Subset};

/// A dense n-dimensional array that owns its elements.
///
/// The elements live in one `Vec<A>` in row-major order (the last axis
/// varies fastest), and the shape always has at least one axis: the empty
/// array has shape `[0]`. The product of the shape always equals the number
/// of elements.
///
/// Fallible operations return [`ShapeError`] and leave the array unchanged
/// when they fail.
#[derive(Clone, Debug, PartialEq)]
pub struct NdArray<A> {
    data: Vec<A>,
    shape: Vec<usize>,
}

/// A read-only view of a contiguous part of an [`NdArray`].
///
/// A view borrows its owner, so the owner cannot be modified, resized or
/// reshaped while the view is alive; use [`ArrayView::to_owned`] to keep the
/// data beyond that.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrayView<'a, A> {
    data: &'a [A],
    shape: &'a [usize],
}

/// The result of [`NdArray::get`]: a single element for a full coordinate,
/// a view for a partial one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Selected<'a, A> {
    Scalar(A),
    View(ArrayView<'a, A>),
}

impl<'a, A: Copy> Selected<'a, A> {
    /// Return the element, if this is a scalar.
    pub fn scalar(self) -> Option<A> {
        match self {
            Selected::Scalar(x) => Some(x),
            Selected::View(_) => None,
        }
    }

    /// Return the view, if this is a partial selection.
    pub fn view(self) -> Option<ArrayView<'a, A>> {
        match self {
            Selected::Scalar(_) => None,
            Selected::View(v) => Some(v),
        }
    }
}
