// Copyright 2026 ndaxes developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndaxes prelude.
//!
//! This module contains the most used types, traits and functions that you
//! can import easily as a group.
//!
//! ```
//! use ndaxes::prelude::*;
//! ```

#[doc(no_inline)]
pub use crate::{ArcArray, ArrayKind, DType, Order};

#[doc(no_inline)]
pub use crate::{AsArray, AxisArg, Element, IntoPermute, Permute};

#[doc(no_inline)]
pub use crate::{asanyarray, asarray, ascontiguousarray, asfortranarray, moveaxis, rollaxis, swapaxes, transpose};
