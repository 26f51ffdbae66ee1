// Copyright 2026 ndaxes developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::dimension::{normalize_axis_index, AxisArg};
use crate::error::Result;
use crate::permute::{self, AxesPlan, IntoPermute, Permute};
use crate::{ArcArray, AsArray, ConstructOptions, Element, Ix, Ixs, Order};

/// Build a new array from `input` with full control over copying, order,
/// kind and minimum dimensionality.
///
/// ```
/// use ndaxes::{array, ArcArray, ConstructOptions};
///
/// let a: ArcArray<f64> = array(vec![vec![1, 2], vec![3, 4]], ConstructOptions::new()).unwrap();
/// assert_eq!(a.shape(), &[2, 2]);
/// assert_eq!(a.get(&[1, 0]), Some(&3.));
/// ```
pub fn array<A, T>(input: T, options: ConstructOptions) -> Result<ArcArray<A>>
where
    A: Element,
    T: AsArray,
{
    input.construct(options)
}

/// Convert `input` to an array of `A`, copying only when required.
///
/// An `ArcArray<A>` whose layout satisfies `order` (any layout when `order`
/// is `None`) is returned as a new handle to the same storage. A different
/// element type, or a layout that does not satisfy `order`, gives a copy
/// with each element converted to `A`. A matrix is returned as a base array.
///
/// **Errors** with `InvalidCast` if an element does not fit `A`, and with
/// `IncompatibleShape` for ragged nested input.
///
/// ```
/// use ndaxes::{asarray, ArcArray, Order};
///
/// let a = ArcArray::from(vec![1., 2.]);
/// assert!(asarray::<f64, _>(&a, None).unwrap().shares_storage(&a));
///
/// let b: ArcArray<f32> = asarray(&a, None).unwrap();
/// assert_eq!(b.to_vec(), vec![1., 2.]);
///
/// let m = ArcArray::<f64>::zeros((2, 3)).into_matrix().unwrap();
/// assert!(!asarray::<f64, _>(&m, Some(Order::C)).unwrap().is_matrix());
/// ```
pub fn asarray<A, T>(input: T, order: Option<Order>) -> Result<ArcArray<A>>
where
    A: Element,
    T: AsArray,
{
    input.construct(ConstructOptions::new().copy(false).order_opt(order))
}

/// Like [`asarray`], but a matrix stays a matrix.
pub fn asanyarray<A, T>(input: T, order: Option<Order>) -> Result<ArcArray<A>>
where
    A: Element,
    T: AsArray,
{
    input.construct(ConstructOptions::new().copy(false).order_opt(order).subok(true))
}

/// Return an array with at least one axis in row major storage.
///
/// A zero-dimensional input becomes shape `[1]`.
pub fn ascontiguousarray<A, T>(input: T) -> Result<ArcArray<A>>
where
    A: Element,
    T: AsArray,
{
    input.construct(ConstructOptions::new().copy(false).order(Order::C).ndmin(1))
}

/// Return an array with at least one axis in column major storage.
///
/// A zero-dimensional input becomes shape `[1]`.
pub fn asfortranarray<A, T>(input: T) -> Result<ArcArray<A>>
where
    A: Element,
    T: AsArray,
{
    input.construct(ConstructOptions::new().copy(false).order(Order::F).ndmin(1))
}

/// Roll `axis` backwards until it lies before position `start`; the other
/// axes keep their relative order.
///
/// `axis` counts from the end when negative. A negative `start` is offset by
/// the number of axes, after which it must lie in `0..=ndim`. Pass `0` to
/// roll the axis to the front. [`moveaxis`] is the easier to reason about
/// alternative.
///
/// Returns a view sharing storage with `a`. Vectors, slices and nested
/// vectors are converted with [`asarray`] first.
///
/// **Errors** with `AxisOutOfRange` if `axis` is out of bounds, and with
/// `InvalidArgument` if `start` is.
///
/// ```
/// use ndaxes::{rollaxis, ArcArray};
///
/// let a = ArcArray::<i32>::zeros((3, 4, 5, 6));
/// assert_eq!(rollaxis(&a, 3, 1).unwrap().shape(), &[3, 6, 4, 5]);
/// assert_eq!(rollaxis(&a, 2, 0).unwrap().shape(), &[5, 3, 4, 6]);
/// assert_eq!(rollaxis(&a, 1, 4).unwrap().shape(), &[3, 5, 6, 4]);
/// ```
pub fn rollaxis<T>(a: T, axis: Ixs, start: Ixs) -> Result<<T::Target as Permute>::Output>
where
    T: IntoPermute,
{
    let a = a.into_permute()?;
    let plan = permute::plan_rollaxis(a.ndim(), axis, start)?;
    Ok(permute::apply(&a, &plan))
}

/// Move axes `source` to positions `destination`; the other axes keep
/// their relative order.
///
/// Both arguments are a single axis or a sequence of distinct axes of the
/// same length, negative values counting from the end.
///
/// Returns a view sharing storage with `a`. Vectors, slices and nested
/// vectors are converted with [`asarray`] first.
///
/// **Errors** with `AxisOutOfRange` or `RepeatedAxis` for a bad axis in
/// either argument, and with `InvalidArgument` if their lengths differ.
///
/// ```
/// use ndaxes::{moveaxis, transpose, ArcArray};
///
/// let x = ArcArray::<f64>::zeros((3, 4, 5));
/// assert_eq!(moveaxis(&x, 0, -1).unwrap().shape(), &[4, 5, 3]);
/// assert_eq!(moveaxis(&x, -1, 0).unwrap().shape(), &[5, 3, 4]);
///
/// // these all achieve the same result
/// assert_eq!(transpose(&x).unwrap().shape(), &[5, 4, 3]);
/// assert_eq!(moveaxis(&x, [0, 1], [-1, -2]).unwrap().shape(), &[5, 4, 3]);
/// assert_eq!(moveaxis(&x, [0, 1, 2], [-1, -2, -3]).unwrap().shape(), &[5, 4, 3]);
/// ```
pub fn moveaxis<T, S, D>(a: T, source: S, destination: D) -> Result<<T::Target as Permute>::Output>
where
    T: IntoPermute,
    S: AxisArg,
    D: AxisArg,
{
    let a = a.into_permute()?;
    let plan = permute::plan_moveaxis(a.ndim(), &source, &destination)?;
    Ok(permute::apply(&a, &plan))
}

/// Exchange axes `axis1` and `axis2`, which may be negative.
///
/// **Errors** with `AxisOutOfRange` if either axis is out of bounds.
///
/// ```
/// use ndaxes::{swapaxes, ArcArray};
///
/// let a = ArcArray::<u8>::zeros((2, 3, 4));
/// assert_eq!(swapaxes(&a, 0, -1).unwrap().shape(), &[4, 3, 2]);
/// ```
pub fn swapaxes<T>(a: T, axis1: Ixs, axis2: Ixs) -> Result<<T::Target as Permute>::Output>
where
    T: IntoPermute,
{
    let a = a.into_permute()?;
    let ndim = a.ndim();
    let axis1 = normalize_axis_index(axis1, ndim, None)?;
    let axis2 = normalize_axis_index(axis2, ndim, None)?;
    let mut axes: Vec<Ix> = (0..ndim).collect();
    axes.swap(axis1, axis2);
    Ok(permute::apply(&a, &AxesPlan::Permutation(axes)))
}

/// Reverse the order of the axes.
pub fn transpose<T>(a: T) -> Result<<T::Target as Permute>::Output>
where
    T: IntoPermute,
{
    let a = a.into_permute()?;
    let axes: Vec<Ix> = (0..a.ndim()).rev().collect();
    Ok(permute::apply(&a, &AxesPlan::Permutation(axes)))
}
