// Copyright 2026 ndaxes developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Axis permutation planning, and applying a plan to anything that can
//! permute its axes.
use crate::conversion::ConstructOptions;
use crate::dimension::{normalize_axis_index, normalize_axis_tuple, AxisArg};
use crate::error::{AxisError, Result};
use crate::{ArcArray, AsArray, Element, Ix, Ixs};

/// The axis order computed by a planner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AxesPlan {
    /// No axis moves; the result is a plain view of the input.
    Identity,
    /// Axis `i` of the result is axis `p[i]` of the input.
    Permutation(Vec<Ix>),
}

impl AxesPlan {
    /// Return `true` for the pass-through plan.
    pub fn is_identity(&self) -> bool {
        matches!(self, AxesPlan::Identity)
    }

    /// Return the full permutation for an array with `ndim` axes.
    pub fn to_permutation(&self, ndim: usize) -> Vec<Ix> {
        match self {
            AxesPlan::Identity => (0..ndim).collect(),
            AxesPlan::Permutation(p) => p.clone(),
        }
    }
}

/// Plan rolling `axis` backwards until it lies before position `start`.
///
/// `axis` may be negative, counting from the end. `start` may be negative
/// too and is then offset by `ndim`; after that it must lie in `0..=ndim`.
/// Since the rolled axis is first taken out, a `start` past `axis` refers to
/// the position before removal.
///
/// Returns `AxesPlan::Identity` when the axis already lies before `start`.
///
/// **Errors** with `AxisOutOfRange` if `axis` is outside `-ndim..ndim`, and
/// with `InvalidArgument` if `start` is outside `-ndim..ndim + 1`.
///
/// ```
/// use ndaxes::{plan_rollaxis, AxesPlan};
///
/// assert_eq!(plan_rollaxis(4, 3, 1).unwrap(), AxesPlan::Permutation(vec![0, 3, 1, 2]));
/// assert_eq!(plan_rollaxis(4, 1, 2).unwrap(), AxesPlan::Identity);
/// ```
pub fn plan_rollaxis(ndim: usize, axis: Ixs, start: Ixs) -> Result<AxesPlan> {
    let axis = normalize_axis_index(axis, ndim, None)?;
    let n = ndim as Ixs;
    let start = if start < 0 { start + n } else { start };
    if !(0..=n).contains(&start) {
        // reports `start` after the offset
        return Err(AxisError::InvalidArgument(format!(
            "'start' arg requires {} <= start < {}, but {} was passed in",
            -n,
            n + 1,
            start
        )));
    }
    let mut start = start as Ix;
    if axis < start {
        // the axis is removed before being inserted
        start -= 1;
    }
    if axis == start {
        return Ok(AxesPlan::Identity);
    }
    let mut axes: Vec<Ix> = (0..ndim).collect();
    axes.remove(axis);
    axes.insert(start, axis);
    Ok(AxesPlan::Permutation(axes))
}

/// Plan moving axes `source` to positions `destination`; the other axes keep
/// their relative order.
///
/// Each argument is a single axis or a sequence of axes, possibly negative.
///
/// **Errors** with `AxisOutOfRange` or `RepeatedAxis` from normalizing
/// either argument, and with `InvalidArgument` if they differ in length.
///
/// ```
/// use ndaxes::{plan_moveaxis, AxesPlan};
///
/// assert_eq!(plan_moveaxis(3, &0, &-1).unwrap(), AxesPlan::Permutation(vec![1, 2, 0]));
/// assert_eq!(plan_moveaxis(3, &[0, 1], &[-1, -2]).unwrap(), AxesPlan::Permutation(vec![2, 1, 0]));
/// ```
pub fn plan_moveaxis<S, D>(ndim: usize, source: &S, destination: &D) -> Result<AxesPlan>
where
    S: AxisArg + ?Sized,
    D: AxisArg + ?Sized,
{
    let source = normalize_axis_tuple(source, ndim, "source")?;
    let destination = normalize_axis_tuple(destination, ndim, "destination")?;
    if source.len() != destination.len() {
        return Err(AxisError::InvalidArgument(
            "`source` and `destination` arguments must have the same number of elements".to_string(),
        ));
    }

    let mut moved = vec![false; ndim];
    for &axis in &source {
        moved[axis] = true;
    }
    let mut order: Vec<Ix> = (0..ndim).filter(|&axis| !moved[axis]).collect();

    // ascending destinations, so each insert leaves earlier positions in place
    let mut pairs: Vec<(Ix, Ix)> = destination.into_iter().zip(source).collect();
    pairs.sort_unstable();
    for (dest, src) in pairs {
        order.insert(dest, src);
    }
    Ok(AxesPlan::Permutation(order))
}

/// Types that can reorder their axes without copying elements.
///
/// This is the one capability the axis functions need from an array. It is
/// implemented for [`ArcArray`]; other array-like types implement it to be
/// accepted by [`rollaxis`](crate::rollaxis), [`moveaxis`](crate::moveaxis)
/// and friends directly.
pub trait Permute {
    /// The view type produced.
    type Output;

    /// Number of axes.
    fn ndim(&self) -> usize;

    /// A view with unchanged axis order.
    fn view(&self) -> Self::Output;

    /// A view whose axis `i` is axis `axes[i]` of `self`.
    ///
    /// `axes` is always a permutation of `0..self.ndim()` when called by this
    /// crate.
    fn permuted_axes(&self, axes: &[Ix]) -> Self::Output;
}

/// Apply a plan: a plain view for `Identity`, a permuted view otherwise.
pub(crate) fn apply<P>(array: &P, plan: &AxesPlan) -> P::Output
where
    P: Permute + ?Sized,
{
    match plan {
        AxesPlan::Identity => array.view(),
        AxesPlan::Permutation(axes) => array.permuted_axes(axes),
    }
}

/// Argument conversion into a [`Permute`] value.
///
/// Borrowed `Permute` values are used as they are. Vectors, slices and
/// fixed size arrays do not have the capability and are converted with
/// [`asarray`](crate::asarray) first.
pub trait IntoPermute {
    type Target: Permute;

    fn into_permute(self) -> Result<Self::Target>;
}

impl<'a, P> IntoPermute for &'a P
where
    P: Permute + Clone,
{
    type Target = P;

    fn into_permute(self) -> Result<P> {
        Ok(self.clone())
    }
}

impl<A> IntoPermute for ArcArray<A> {
    type Target = ArcArray<A>;

    fn into_permute(self) -> Result<ArcArray<A>> {
        Ok(self)
    }
}

fn convert<T, A>(input: T) -> Result<ArcArray<A>>
where
    T: AsArray,
    A: Element,
{
    input.construct(ConstructOptions::new().copy(false))
}

impl<A: Element> IntoPermute for Vec<A> {
    type Target = ArcArray<A>;

    fn into_permute(self) -> Result<ArcArray<A>> {
        convert(self)
    }
}

impl<'a, A: Element> IntoPermute for &'a [A] {
    type Target = ArcArray<A>;

    fn into_permute(self) -> Result<ArcArray<A>> {
        convert(self)
    }
}

impl<A: Element, const N: usize> IntoPermute for [A; N] {
    type Target = ArcArray<A>;

    fn into_permute(self) -> Result<ArcArray<A>> {
        convert(self)
    }
}

impl<A: Element> IntoPermute for Vec<Vec<A>> {
    type Target = ArcArray<A>;

    fn into_permute(self) -> Result<ArcArray<A>> {
        convert(self)
    }
}
