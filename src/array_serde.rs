// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, SerializeStruct, Serializer};

use crate::{DynArray, Element, NdArray, Record, RECORD_KIND};

/// **Requires crate feature `"serde"`**
///
/// Serialized with the same fields as a [`Record`].
impl<A> Serialize for NdArray<A>
where
    A: Element,
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        let mut state = serializer.serialize_struct("Record", 4)?;
        state.serialize_field("kind", RECORD_KIND)?;
        state.serialize_field("data", &Sequence(self.as_slice()))?;
        state.serialize_field("shape", self.shape())?;
        state.serialize_field("dtype", &A::DTYPE)?;
        state.end()
    }
}

// private wrapper serializing elements widened to f64
struct Sequence<'a, A>(&'a [A]);

impl<A> Serialize for Sequence<'_, A>
where
    A: Element,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for elt in self.0 {
            seq.serialize_element(&elt.to_f64())?;
        }
        seq.end()
    }
}

/// **Requires crate feature `"serde"`**
impl<'de, A> Deserialize<'de> for NdArray<A>
where
    A: Element,
{
    fn deserialize<D>(deserializer: D) -> Result<NdArray<A>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = Record::deserialize(deserializer)?;
        NdArray::from_record(&record).map_err(de::Error::custom)
    }
}

/// **Requires crate feature `"serde"`**
impl Serialize for DynArray {
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        match self {
            DynArray::Uint8(a) => a.serialize(serializer),
            DynArray::Uint16(a) => a.serialize(serializer),
            DynArray::Uint32(a) => a.serialize(serializer),
            DynArray::Float32(a) => a.serialize(serializer),
            DynArray::Float64(a) => a.serialize(serializer),
            DynArray::Uint8Clamped(a) => a.serialize(serializer),
        }
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for DynArray {
    fn deserialize<D>(deserializer: D) -> Result<DynArray, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = Record::deserialize(deserializer)?;
        DynArray::from_record(&record).map_err(de::Error::custom)
    }
}
