// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Persisted form of an array.

use crate::dimension;
use crate::error::{mismatch, ShapeError};
use crate::{ClampedU8, DType, Element, NdArray};

/// Type tag stored in the `kind` field of every [`Record`].
pub const RECORD_KIND: &str = "NdArray";

/// A self-describing, dtype-independent snapshot of an array.
///
/// `data` holds the elements in row-major order, widened to `f64`, which is
/// lossless for every supported dtype.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub kind: String,
    pub data: Vec<f64>,
    pub shape: Vec<usize>,
    pub dtype: DType,
}

impl Record {
    /// Check the kind tag and that `data` matches `shape`.
    fn validate(&self) -> Result<(), ShapeError> {
        if self.kind != RECORD_KIND {
            return Err(ShapeError::InvalidArgumentType("record kind is not NdArray"));
        }
        let size = dimension::array_size_checked(&self.shape)?;
        if self.data.len() != size {
            return Err(mismatch(self.data.len(), size));
        }
        Ok(())
    }
}

impl<A> NdArray<A>
where
    A: Element,
{
    /// Return the persisted form of the array.
    ///
    /// ```
    /// use ndbuffer::{DType, NdArray};
    ///
    /// let a = NdArray::<u16>::from_nested(vec![[1, 2], [3, 4]]).unwrap();
    /// let record = a.to_record();
    /// assert_eq!(record.kind, "NdArray");
    /// assert_eq!(record.data, vec![1., 2., 3., 4.]);
    /// assert_eq!(record.shape, vec![2, 2]);
    /// assert_eq!(record.dtype, DType::Uint16);
    /// assert_eq!(NdArray::from_record(&record).unwrap(), a);
    /// ```
    pub fn to_record(&self) -> Record {
        Record {
            kind: RECORD_KIND.to_string(),
            data: self.data.iter().map(|x| x.to_f64()).collect(),
            shape: self.shape.clone(),
            dtype: A::DTYPE,
        }
    }

    /// Rebuild an array from its persisted form.
    ///
    /// **Errors** with `InvalidArgumentType` if the record's kind is not
    /// [`RECORD_KIND`], its dtype is not `A`'s, or its shape has no axes; and
    /// with `DimensionMismatch` if the length of `data` differs from the
    /// product of `shape`. Data is never truncated or padded.
    pub fn from_record(record: &Record) -> Result<Self, ShapeError> {
        if record.dtype != A::DTYPE {
            return Err(ShapeError::InvalidArgumentType("record dtype does not match element type"));
        }
        record.validate()?;
        Ok(NdArray {
            data: record.data.iter().map(|&x| A::from_f64(x)).collect(),
            shape: record.shape.clone(),
        })
    }
}

impl<A: Element> From<&NdArray<A>> for Record {
    fn from(array: &NdArray<A>) -> Self {
        array.to_record()
    }
}

impl<A: Element> TryFrom<&Record> for NdArray<A> {
    type Error = ShapeError;

    fn try_from(record: &Record) -> Result<Self, ShapeError> {
        NdArray::from_record(record)
    }
}

/// An array whose dtype is only known at run time.
#[derive(Clone, Debug, PartialEq)]
pub enum DynArray {
    Uint8(NdArray<u8>),
    Uint16(NdArray<u16>),
    Uint32(NdArray<u32>),
    Float32(NdArray<f32>),
    Float64(NdArray<f64>),
    Uint8Clamped(NdArray<ClampedU8>),
}

macro_rules! dispatch {
    ($value:expr, $array:ident => $body:expr) => {
        match $value {
            DynArray::Uint8($array) => $body,
            DynArray::Uint16($array) => $body,
            DynArray::Uint32($array) => $body,
            DynArray::Float32($array) => $body,
            DynArray::Float64($array) => $body,
            DynArray::Uint8Clamped($array) => $body,
        }
    };
}

impl DynArray {
    /// Rebuild an array of whatever dtype the record names.
    ///
    /// ```
    /// use ndbuffer::{DType, DynArray, NdArray};
    ///
    /// let record = NdArray::<f32>::from_nested(vec![0.5, 1.5]).unwrap().to_record();
    /// let array = DynArray::from_record(&record).unwrap();
    /// assert_eq!(array.dtype(), DType::Float32);
    /// assert_eq!(array.shape(), &[2]);
    /// ```
    pub fn from_record(record: &Record) -> Result<Self, ShapeError> {
        Ok(match record.dtype {
            DType::Uint8 => DynArray::Uint8(NdArray::from_record(record)?),
            DType::Uint16 => DynArray::Uint16(NdArray::from_record(record)?),
            DType::Uint32 => DynArray::Uint32(NdArray::from_record(record)?),
            DType::Float32 => DynArray::Float32(NdArray::from_record(record)?),
            DType::Float64 => DynArray::Float64(NdArray::from_record(record)?),
            DType::Uint8Clamped => DynArray::Uint8Clamped(NdArray::from_record(record)?),
        })
    }

    /// Return the persisted form of the array.
    pub fn to_record(&self) -> Record {
        dispatch!(self, a => a.to_record())
    }

    /// Return the dtype of the elements.
    pub fn dtype(&self) -> DType {
        dispatch!(self, a => a.dtype())
    }

    /// Return the shape of the array.
    pub fn shape(&self) -> &[usize] {
        dispatch!(self, a => a.shape())
    }

    /// Return the elements widened to `f64`, in row-major order.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        dispatch!(self, a => a.iter().map(|x| x.to_f64()).collect())
    }
}

macro_rules! impl_dyn_from {
    ($($t:ty => $variant:ident),*) => {
        $(
            impl From<NdArray<$t>> for DynArray {
                fn from(array: NdArray<$t>) -> Self {
                    DynArray::$variant(array)
                }
            }
        )*
    };
}

impl_dyn_from!(
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    f32 => Float32,
    f64 => Float64,
    ClampedU8 => Uint8Clamped
);
