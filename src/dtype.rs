// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element types and their write conversion rules.

use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use num_traits::{AsPrimitive, One, Zero};

use crate::error::ShapeError;

/// Tag naming the element type of an array.
///
/// The tag is what gets persisted in a [`Record`](crate::Record); the
/// matching Rust type is given by the [`Element`] impls.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DType {
    Uint8,
    Uint16,
    Uint32,
    Float32,
    Float64,
    Uint8Clamped,
}

impl DType {
    /// All supported dtypes.
    pub const ALL: [DType; 6] = [
        DType::Uint8,
        DType::Uint16,
        DType::Uint32,
        DType::Float32,
        DType::Float64,
        DType::Uint8Clamped,
    ];

    /// The lowercase tag used in records.
    pub fn name(self) -> &'static str {
        match self {
            DType::Uint8 => "uint8",
            DType::Uint16 => "uint16",
            DType::Uint32 => "uint32",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Uint8Clamped => "uint8clamped",
        }
    }

    /// Width of one element in bytes.
    pub fn size_of(self) -> usize {
        match self {
            DType::Uint8 | DType::Uint8Clamped => 1,
            DType::Uint16 => 2,
            DType::Uint32 | DType::Float32 => 4,
            DType::Float64 => 8,
        }
    }

    /// Apply this dtype's write conversion to `value` and widen the result
    /// back to `f64`.
    ///
    /// ```
    /// use ndbuffer::DType;
    ///
    /// assert_eq!(DType::Uint8.coerce(257.9), 1.);
    /// assert_eq!(DType::Uint8Clamped.coerce(257.9), 255.);
    /// assert_eq!(DType::Float64.coerce(-0.5), -0.5);
    /// ```
    pub fn coerce(self, value: f64) -> f64 {
        match self {
            DType::Uint8 => u8::from_f64(value).to_f64(),
            DType::Uint16 => u16::from_f64(value).to_f64(),
            DType::Uint32 => u32::from_f64(value).to_f64(),
            DType::Float32 => f32::from_f64(value).to_f64(),
            DType::Float64 => value,
            DType::Uint8Clamped => ClampedU8::from_f64(value).to_f64(),
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DType {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DType::ALL
            .iter()
            .copied()
            .find(|dtype| dtype.name() == s)
            .ok_or(ShapeError::InvalidArgumentType("unknown dtype tag"))
    }
}

/// A fixed-width numeric type that can be stored in an [`NdArray`](crate::NdArray).
///
/// Every value written through the numeric input path (nested literals,
/// fill values, records) goes through [`Element::from_f64`], which narrows
/// or clamps it according to the dtype.
pub trait Element:
    Copy + PartialEq + fmt::Debug + Zero + One + AsPrimitive<f64> + Send + Sync + 'static
{
    /// The dtype tag of this element type.
    const DTYPE: DType;

    /// Convert `value` using this dtype's write rule.
    fn from_f64(value: f64) -> Self;

    /// Widen this element to `f64`; lossless for every supported type.
    #[inline]
    fn to_f64(self) -> f64 {
        self.as_()
    }
}

/// Truncate toward zero and wrap modulo `modulus`; non-finite values map to 0.
#[inline]
fn wrap_unsigned(value: f64, modulus: f64) -> f64 {
    if !value.is_finite() {
        return 0.;
    }
    value.trunc().rem_euclid(modulus)
}

macro_rules! impl_unsigned_element {
    ($t:ty, $dtype:expr) => {
        impl Element for $t {
            const DTYPE: DType = $dtype;

            #[inline]
            fn from_f64(value: f64) -> Self {
                wrap_unsigned(value, (<$t>::MAX as f64) + 1.) as $t
            }
        }
    };
}

impl_unsigned_element!(u8, DType::Uint8);
impl_unsigned_element!(u16, DType::Uint16);
impl_unsigned_element!(u32, DType::Uint32);

impl Element for f32 {
    const DTYPE: DType = DType::Float32;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Element for f64 {
    const DTYPE: DType = DType::Float64;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

/// An 8-bit unsigned integer whose writes saturate at `0` and `255`
/// instead of wrapping.
///
/// Conversion from `f64` rounds half to even, and NaN becomes 0.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClampedU8(pub u8);

impl ClampedU8 {
    /// Return the wrapped byte.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

fn clamp_u8(value: f64) -> u8 {
    if value.is_nan() || value <= 0. {
        return 0;
    }
    if value >= 255. {
        return 255;
    }
    let floor = value.floor();
    let rounded = match value - floor {
        d if d > 0.5 => floor + 1.,
        d if d < 0.5 => floor,
        _ if floor % 2. == 0. => floor,
        _ => floor + 1.,
    };
    rounded as u8
}

impl Element for ClampedU8 {
    const DTYPE: DType = DType::Uint8Clamped;

    #[inline]
    fn from_f64(value: f64) -> Self {
        ClampedU8(clamp_u8(value))
    }
}

impl From<u8> for ClampedU8 {
    fn from(x: u8) -> Self {
        ClampedU8(x)
    }
}

impl From<ClampedU8> for f64 {
    fn from(x: ClampedU8) -> Self {
        x.0 as f64
    }
}

impl AsPrimitive<f64> for ClampedU8 {
    #[inline]
    fn as_(self) -> f64 {
        self.0 as f64
    }
}

impl Add for ClampedU8 {
    type Output = ClampedU8;

    fn add(self, rhs: Self) -> Self {
        ClampedU8(self.0.saturating_add(rhs.0))
    }
}

impl Mul for ClampedU8 {
    type Output = ClampedU8;

    fn mul(self, rhs: Self) -> Self {
        ClampedU8(self.0.saturating_mul(rhs.0))
    }
}

impl Zero for ClampedU8 {
    fn zero() -> Self {
        ClampedU8(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl One for ClampedU8 {
    fn one() -> Self {
        ClampedU8(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_wraps() {
        assert_eq!(u8::from_f64(256.), 0);
        assert_eq!(u8::from_f64(-1.), 255);
        assert_eq!(u8::from_f64(3.99), 3);
        assert_eq!(u8::from_f64(-3.99), 253);
        assert_eq!(u16::from_f64(65537.), 1);
        assert_eq!(u32::from_f64(4294967297.), 1);
        assert_eq!(u32::from_f64(f64::NAN), 0);
        assert_eq!(u8::from_f64(f64::INFINITY), 0);
    }

    #[test]
    fn clamped_rounds_half_to_even() {
        assert_eq!(ClampedU8::from_f64(300.), ClampedU8(255));
        assert_eq!(ClampedU8::from_f64(-4.), ClampedU8(0));
        assert_eq!(ClampedU8::from_f64(f64::NAN), ClampedU8(0));
        assert_eq!(ClampedU8::from_f64(1.5), ClampedU8(2));
        assert_eq!(ClampedU8::from_f64(2.5), ClampedU8(2));
        assert_eq!(ClampedU8::from_f64(2.51), ClampedU8(3));
        assert_eq!(ClampedU8::from_f64(2.49), ClampedU8(2));
    }

    #[test]
    fn floats() {
        assert_eq!(f32::from_f64(0.1), 0.1f32);
        assert_eq!(f64::from_f64(-7.25), -7.25);
        assert_eq!(0.5f32.to_f64(), 0.5);
    }

    #[test]
    fn dtype_tags() {
        for dtype in DType::ALL {
            assert_eq!(dtype.name().parse::<DType>().unwrap(), dtype);
        }
        assert!("int8".parse::<DType>().is_err());
        assert_eq!(<u16 as Element>::DTYPE, DType::Uint16);
        assert_eq!(DType::Float64.size_of(), 8);
    }
}
