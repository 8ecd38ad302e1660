// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Build an [`IndexSet`](crate::IndexSet) from one selection per axis.
///
/// `select![a, b, ...]` takes a comma separated list with one entry per
/// leading axis of the array. Each entry is an *index* (`usize`), a *range*
/// (`Range<usize>` or `RangeInclusive<usize>`), or a *list* of coordinates
/// (`Vec<usize>`). Trailing axes that get no entry are kept whole.
///
/// For example `select![0..2, vec![2, 0]]` picks rows 0 and 1, and from
/// each of them columns 2 and 0 in that order.
///
/// ```
/// use ndbuffer::{select, IndexSelector, NdArray};
///
/// let a = NdArray::<u8>::from_nested(vec![[1, 2, 3], [4, 5, 6]]).unwrap();
/// let sub = a.subset(&select![0..2, vec![2, 0]]).unwrap().into_array().unwrap();
/// assert_eq!(sub.shape(), &[2, 2]);
/// assert_eq!(sub.as_slice(), &[3, 1, 6, 4]);
///
/// assert!(select![1, 2].is_scalar());
/// ```
#[macro_export]
macro_rules! select {
    ($($axis:expr),+ $(,)?) => {
        $crate::IndexSet::new(vec![$($crate::AxisSelect::from($axis)),+])
    };
}
