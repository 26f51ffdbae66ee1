// Copyright 2026 ndaxes developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Building arrays from array-like input.
use std::any::Any;

use num_complex::{Complex32, Complex64};

use crate::dtype::cast_elem;
use crate::error::{incompatible_shapes, Result};
use crate::{ArcArray, ArrayKind, Element, Order};

/// How [`array`](crate::array) and the `as*array` functions build their
/// result.
///
/// The default copies the input into new row major or column major storage
/// (whichever the input is closest to) and returns a base array.
///
/// ```
/// use ndaxes::{ArcArray, ConstructOptions, Order};
///
/// let opts = ConstructOptions::new().copy(false).order(Order::F).ndmin(2);
/// let a: ArcArray<f64> = ndaxes::array(vec![1., 2., 3.], opts).unwrap();
/// assert_eq!(a.shape(), &[1, 3]);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConstructOptions {
    copy: bool,
    order: Option<Order>,
    subok: bool,
    ndmin: usize,
}

impl ConstructOptions {
    pub fn new() -> Self {
        ConstructOptions {
            copy: true,
            order: None,
            subok: false,
            ndmin: 0,
        }
    }

    /// Always allocate new storage (`true`, the default), or reuse the
    /// input's storage when its element type and layout already fit.
    pub fn copy(mut self, copy: bool) -> Self {
        self.copy = copy;
        self
    }

    /// Require contiguous storage in `order`.
    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Like [`.order()`](Self::order), where `None` accepts any layout.
    pub fn order_opt(mut self, order: Option<Order>) -> Self {
        self.order = order;
        self
    }

    /// Keep the input's [`ArrayKind`] (`true`), or always return a base
    /// array (`false`, the default).
    pub fn subok(mut self, subok: bool) -> Self {
        self.subok = subok;
        self
    }

    /// Prepend axes of length one until the result has at least `ndmin`
    /// axes.
    pub fn ndmin(mut self, ndmin: usize) -> Self {
        self.ndmin = ndmin;
        self
    }
}

impl Default for ConstructOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Input that can be turned into an [`ArcArray`] of any element type.
///
/// Implemented for arrays (owned and borrowed), scalars (zero-dimensional),
/// vectors, slices and fixed size arrays (one-dimensional) and vectors of
/// vectors (two-dimensional).
///
/// Empty inputs keep their rank: an empty vector becomes shape `[0]` and an
/// empty vector of vectors becomes shape `[0, 0]`, since there is no first
/// row to take the column count from. Rows of a vector of vectors must all
/// have the same length.
pub trait AsArray {
    /// Build an array of `B` from `self`.
    ///
    /// **Errors** with `InvalidCast` if an element does not fit `B`, and with
    /// `IncompatibleShape` for ragged nested input.
    fn construct<B: Element>(self, options: ConstructOptions) -> Result<ArcArray<B>>;
}

impl<'a, A: Element> AsArray for &'a ArcArray<A> {
    fn construct<B: Element>(self, options: ConstructOptions) -> Result<ArcArray<B>> {
        let kind = if options.subok { self.kind() } else { ArrayKind::Base };
        let reusable = !options.copy && options.order.map_or(true, |order| self.satisfies(order));
        let array = match (self as &dyn Any).downcast_ref::<ArcArray<B>>() {
            Some(same) if reusable => same.view(),
            _ => self.cast_order(options.order.unwrap_or_else(|| self.closest_order()))?,
        };
        Ok(finish(array, kind, options.ndmin))
    }
}

impl<A: Element> AsArray for ArcArray<A> {
    fn construct<B: Element>(self, options: ConstructOptions) -> Result<ArcArray<B>> {
        (&self).construct(options)
    }
}

impl<A: Element> AsArray for Vec<A> {
    fn construct<B: Element>(self, options: ConstructOptions) -> Result<ArcArray<B>> {
        let mut input = Some(self);
        if let Some(same) = (&mut input as &mut dyn Any).downcast_mut::<Option<Vec<B>>>() {
            // same element type: the vector becomes the storage as is
            let v = same.take().unwrap_or_default();
            return Ok(finish(ArcArray::from_vec(v), ArrayKind::Base, options.ndmin));
        }
        let v = cast_vec(input.as_deref().unwrap_or_default())?;
        Ok(finish(ArcArray::from_vec(v), ArrayKind::Base, options.ndmin))
    }
}

impl<'a, A: Element> AsArray for &'a [A] {
    fn construct<B: Element>(self, options: ConstructOptions) -> Result<ArcArray<B>> {
        Ok(finish(ArcArray::from_vec(cast_vec(self)?), ArrayKind::Base, options.ndmin))
    }
}

impl<A: Element, const N: usize> AsArray for [A; N] {
    fn construct<B: Element>(self, options: ConstructOptions) -> Result<ArcArray<B>> {
        (&self[..]).construct(options)
    }
}

impl<A: Element> AsArray for Vec<Vec<A>> {
    fn construct<B: Element>(self, options: ConstructOptions) -> Result<ArcArray<B>> {
        let rows = self.len();
        let cols = self.first().map_or(0, Vec::len);
        if let Some(ragged) = self.iter().find(|row| row.len() != cols) {
            return Err(incompatible_shapes(&[rows, cols], &[ragged.len()]));
        }
        let mut v = Vec::with_capacity(rows * cols);
        for row in &self {
            for &x in row {
                v.push(cast_elem::<A, B>(x)?);
            }
        }
        let array = ArcArray::from_shape_vec((rows, cols), v)?;
        let array = match options.order {
            Some(order) if !array.satisfies(order) => array.to_owned_order(order),
            _ => array,
        };
        Ok(finish(array, ArrayKind::Base, options.ndmin))
    }
}

macro_rules! scalar_as_array {
    ($($t:ty),*) => {
        $(
            impl AsArray for $t {
                fn construct<B: Element>(self, options: ConstructOptions) -> Result<ArcArray<B>> {
                    let x = cast_elem::<$t, B>(self)?;
                    Ok(finish(ArcArray::from_scalar(x), ArrayKind::Base, options.ndmin))
                }
            }
        )*
    };
}

scalar_as_array!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, Complex32, Complex64);

fn cast_vec<A: Element, B: Element>(xs: &[A]) -> Result<Vec<B>> {
    xs.iter().map(|&x| cast_elem::<A, B>(x)).collect()
}

fn finish<B>(array: ArcArray<B>, kind: ArrayKind, ndmin: usize) -> ArcArray<B> {
    let array = array.with_leading_axes(ndmin);
    // only a two-dimensional handle can stay a matrix
    let kind = if array.ndim() == 2 { kind } else { ArrayKind::Base };
    array.with_kind(kind)
}

impl<A> ArcArray<A> {
    /// Row major unless the array is laid out column major only.
    pub(crate) fn closest_order(&self) -> Order {
        if self.is_fortran_layout() && !self.is_standard_layout() {
            Order::ColumnMajor
        } else {
            Order::RowMajor
        }
    }

    pub(crate) fn with_kind(mut self, kind: ArrayKind) -> Self {
        self.kind = kind;
        self
    }

    /// Prepend axes of length one until there are at least `ndmin` axes.
    pub(crate) fn with_leading_axes(mut self, ndmin: usize) -> Self {
        let missing = ndmin.saturating_sub(self.ndim());
        if missing > 0 {
            let mut dim = vec![1; missing];
            dim.extend_from_slice(&self.dim);
            let mut strides = vec![0; missing];
            strides.extend_from_slice(&self.strides);
            self.dim = dim;
            self.strides = strides;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn owned_vec_keeps_allocation() {
        let v = vec![1.0f64, 2.0, 3.0];
        let ptr = v.as_ptr();
        let a: ArcArray<f64> = v.construct(ConstructOptions::new().copy(false)).unwrap();
        assert_eq!(a.data.as_slice().as_ptr(), ptr);
    }

    #[test]
    fn vec_casts_elements() {
        let a: ArcArray<f32> = vec![1i64, -2, 3].construct(ConstructOptions::new()).unwrap();
        assert_eq!(a.to_vec(), vec![1.0, -2.0, 3.0]);
        let err = vec![300i32].construct::<u8>(ConstructOptions::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCast);
    }

    #[test]
    fn nested_vectors() {
        let a: ArcArray<i32> = vec![vec![1, 2, 3], vec![4, 5, 6]]
            .construct(ConstructOptions::new().order(Order::F))
            .unwrap();
        assert_eq!(a.shape(), &[2, 3]);
        assert!(a.is_fortran_layout());
        assert_eq!(a.to_vec(), vec![1, 2, 3, 4, 5, 6]);

        let err = vec![vec![1, 2], vec![3]].construct::<i32>(ConstructOptions::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleShape);

        let empty: ArcArray<i32> = Vec::<Vec<i32>>::new().construct(ConstructOptions::new()).unwrap();
        assert_eq!(empty.shape(), &[0, 0]);
    }

    #[test]
    fn scalars_and_ndmin() {
        let s: ArcArray<f64> = 2i32.construct(ConstructOptions::new()).unwrap();
        assert_eq!(s.shape(), &[] as &[usize]);
        let s: ArcArray<f64> = 2i32.construct(ConstructOptions::new().ndmin(2)).unwrap();
        assert_eq!(s.shape(), &[1, 1]);
        assert_eq!(s.get(&[0, 0]), Some(&2.0));
    }

    #[test]
    fn leading_axes_keep_layout() {
        let a = ArcArray::from_shape_vec((2, 3), (0..6).collect::<Vec<i32>>()).unwrap();
        let b = a.view().with_leading_axes(4);
        assert_eq!(b.shape(), &[1, 1, 2, 3]);
        assert!(b.is_standard_layout());
        assert!(b.shares_storage(&a));
        assert_eq!(b.get(&[0, 0, 1, 2]), Some(&5));
        assert_eq!(a.view().with_leading_axes(1).shape(), &[2, 3]);
    }

    #[test]
    fn matrix_kind_needs_two_axes() {
        let m = ArcArray::from_shape_vec((2, 2), vec![1u8, 2, 3, 4]).unwrap().into_matrix().unwrap();
        let kept: ArcArray<u8> = (&m).construct(ConstructOptions::new().subok(true)).unwrap();
        assert!(kept.is_matrix());
        let padded: ArcArray<u8> = (&m).construct(ConstructOptions::new().subok(true).ndmin(3)).unwrap();
        assert!(!padded.is_matrix());
    }
}
