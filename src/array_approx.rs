// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[cfg(feature = "approx")]
mod approx_methods {
    use crate::NdArray;

    impl<A> NdArray<A> {
        /// A test for equality that uses the elementwise absolute difference to compute the
        /// approximate equality of two arrays.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn abs_diff_eq(&self, other: &NdArray<A>, epsilon: A::Epsilon) -> bool
        where
            A: ::approx::AbsDiffEq,
            A::Epsilon: Clone,
        {
            <Self as ::approx::AbsDiffEq>::abs_diff_eq(self, other, epsilon)
        }

        /// A test for equality that uses an elementwise relative comparison if the values are far
        /// apart; and the absolute difference otherwise.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn relative_eq(&self, other: &NdArray<A>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool
        where
            A: ::approx::RelativeEq,
            A::Epsilon: Clone,
        {
            <Self as ::approx::RelativeEq>::relative_eq(self, other, epsilon, max_relative)
        }
    }
}

#[cfg(feature = "approx")]
mod approx_impls {
    use approx::{AbsDiffEq, RelativeEq, UlpsEq};

    use crate::NdArray;

    /// **Requires crate feature `"approx"`.**
    impl<A> AbsDiffEq for NdArray<A>
    where
        A: AbsDiffEq,
        A::Epsilon: Clone,
    {
        type Epsilon = A::Epsilon;

        fn default_epsilon() -> A::Epsilon {
            A::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &NdArray<A>, epsilon: A::Epsilon) -> bool {
            if self.shape() != other.shape() {
                return false;
            }

            self.iter()
                .zip(other.iter())
                .all(move |(a, b)| A::abs_diff_eq(a, b, epsilon.clone()))
        }
    }

    /// **Requires crate feature `"approx"`.**
    impl<A> RelativeEq for NdArray<A>
    where
        A: RelativeEq,
        A::Epsilon: Clone,
    {
        fn default_max_relative() -> A::Epsilon {
            A::default_max_relative()
        }

        fn relative_eq(&self, other: &NdArray<A>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool {
            if self.shape() != other.shape() {
                return false;
            }

            self.iter()
                .zip(other.iter())
                .all(move |(a, b)| A::relative_eq(a, b, epsilon.clone(), max_relative.clone()))
        }
    }

    /// **Requires crate feature `"approx"`.**
    impl<A> UlpsEq for NdArray<A>
    where
        A: UlpsEq,
        A::Epsilon: Clone,
    {
        fn default_max_ulps() -> u32 {
            A::default_max_ulps()
        }

        fn ulps_eq(&self, other: &NdArray<A>, epsilon: A::Epsilon, max_ulps: u32) -> bool {
            if self.shape() != other.shape() {
                return false;
            }

            self.iter()
                .zip(other.iter())
                .all(move |(a, b)| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
        }
    }

}
