// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndbuffer prelude.
//!
//! This module contains the most used types, traits and macros that you can
//! import easily as a group.
//!
//! ```
//! use ndbuffer::prelude::*;
//! ```

#[doc(no_inline)]
pub use crate::{ArrayView, NdArray, Selected, Subset};

#[doc(no_inline)]
pub use crate::{ClampedU8, DType, Element};

#[doc(no_inline)]
pub use crate::{AxisSelect, IndexSelector, IndexSet, Nested};

#[doc(no_inline)]
pub use crate::{ErrorKind, ShapeError};

pub use crate::select;
