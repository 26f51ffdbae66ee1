// Copyright 2026 ndaxes developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndaxes"]
#![doc(html_root_url = "https://docs.rs/ndaxes/0.1/")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::many_single_char_names, clippy::len_without_is_empty)]

//! The `ndaxes` crate reorders the axes of n-dimensional arrays without
//! copying their elements.
//!
//! - [`ArcArray`]: an n-dimensional array handle over reference counted
//!   storage. Cloning a handle, or deriving a view from it, shares the
//!   storage and copies only the shape and strides.
//! - [`rollaxis`] and [`moveaxis`]: move one or several axes to new
//!   positions, keeping the relative order of the others. Both return a view.
//! - [`asarray`]: convert vectors, slices, scalars or arrays of another
//!   element type into an [`ArcArray`], copying only when required.
//!
//! ```
//! use ndaxes::prelude::*;
//!
//! let a = ArcArray::<f64>::zeros((3, 4, 5, 6));
//! assert_eq!(rollaxis(&a, 3, 1).unwrap().shape(), &[3, 6, 4, 5]);
//! assert_eq!(rollaxis(&a, 2, 0).unwrap().shape(), &[5, 3, 4, 6]);
//! assert_eq!(rollaxis(&a, 1, 4).unwrap().shape(), &[3, 5, 6, 4]);
//!
//! let x = ArcArray::<f32>::zeros((3, 4, 5));
//! let y = moveaxis(&x, [0, 1], [-1, -2]).unwrap();
//! assert_eq!(y.shape(), &[5, 4, 3]);
//! assert!(y.shares_storage(&x));
//! ```
//!
//! ## Aliasing
//!
//! Every handle derived from another by [`rollaxis`], [`moveaxis`],
//! [`swapaxes`], [`transpose`] or [`.view()`](ArcArray::view) refers to the
//! same buffer. Writing through [`.get_mut()`](ArcArray::get_mut) first
//! makes the writer's buffer unique (copy on write), so aliases never
//! observe each other's writes.
//!
//! ## Crate Feature Flags
//!
//! - `serde`: `Serialize` and `Deserialize` for arrays and the tag enums.

pub use crate::conversion::{AsArray, ConstructOptions};
pub use crate::dimension::{
    normalize_axis_index,
    normalize_axis_tuple,
    AxisArg,
    AxisIndex,
    IntoDimension,
};
pub use crate::dtype::{DType, Element};
pub use crate::error::{AxisError, ErrorKind, Result};
pub use crate::free_functions::{
    array,
    asanyarray,
    asarray,
    ascontiguousarray,
    asfortranarray,
    moveaxis,
    rollaxis,
    swapaxes,
    transpose,
};
pub use crate::iterators::Iter;
pub use crate::order::Order;
pub use crate::permute::{plan_moveaxis, plan_rollaxis, AxesPlan, IntoPermute, Permute};

use crate::data_repr::SharedRepr;

mod arrayformat;
#[cfg(feature = "serde")]
mod array_serde;
mod conversion;
mod data_repr;
pub mod dimension;
mod dtype;
mod error;
mod free_functions;
mod impl_constructors;
mod impl_methods;
mod iterators;
mod order;
mod permute;

pub mod prelude;

/// Array index type
pub type Ix = usize;
/// Array index type (signed)
pub type Ixs = isize;

/// Which representation an array handle exposes.
///
/// `Matrix` is the two-dimensional specialization. [`asarray`] always
/// projects a handle to `Base`, while [`asanyarray`] keeps the kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrayKind {
    /// Plain n-dimensional array
    #[default]
    Base,
    /// Two-dimensional matrix
    Matrix,
}

/// An n-dimensional array handle with shared, reference counted storage.
///
/// The handle owns its shape and strides and a counted reference to the
/// element buffer. `Clone` is cheap and never copies elements; the result
/// aliases the same storage, as does every view produced by the axis
/// reordering operations.
///
/// Strides are counted in elements and are never negative. The element at
/// logical index `[i, j, ...]` is found at `i * strides[0] + j * strides[1] + ...`
/// in the buffer.
///
/// ## Contents
///
/// + [Constructors](#constructors)
/// + [Inspection](#inspection)
/// + [Views and axis reordering](#views-and-axis-reordering)
/// + [Elements](#elements)
/// + [Conversions](#conversions)
pub struct ArcArray<A> {
    /// Shared element buffer
    data: SharedRepr<A>,
    /// The lengths of the axes.
    dim: Vec<Ix>,
    /// The element count stride per axis.
    strides: Vec<Ixs>,
    kind: ArrayKind,
}

impl<A> Clone for ArcArray<A> {
    fn clone(&self) -> Self {
        ArcArray {
            data: self.data.clone(),
            dim: self.dim.clone(),
            strides: self.strides.clone(),
            kind: self.kind,
        }
    }
}
