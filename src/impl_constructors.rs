// Copyright 2026 ndaxes developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for `ArcArray`.
use crate::dimension::{self, IntoDimension};
use crate::dtype::cast_elem;
use crate::error::{incompatible_shapes, AxisError, Result};
use crate::iterators::Indices;
use crate::{ArcArray, ArrayKind, Element, Ix, Ixs, Order, SharedRepr};

#[track_caller]
fn size_of_shape_unwrap(dim: &[Ix]) -> usize {
    match dimension::size_of_shape_checked(dim) {
        Some(size) => size,
        None => panic!("ndaxes: Shape too large, product of non-zero axis lengths overflows isize"),
    }
}

/// # Constructors
impl<A> ArcArray<A> {
    /// Create a one-dimensional array from a vector (no copying needed).
    ///
    /// ```
    /// use ndaxes::ArcArray;
    ///
    /// let array = ArcArray::from_vec(vec![1., 2., 3., 4.]);
    /// assert_eq!(array.shape(), &[4]);
    /// ```
    pub fn from_vec(v: Vec<A>) -> Self {
        let len = v.len();
        Self::from_parts(SharedRepr::from(v), vec![len], vec![1], ArrayKind::Base)
    }

    /// Create a zero-dimensional array holding `x`.
    pub fn from_scalar(x: A) -> Self {
        Self::from_parts(SharedRepr::from(vec![x]), Vec::new(), Vec::new(), ArrayKind::Base)
    }

    /// Create an array with the given shape from a vector of elements in
    /// row major order.
    ///
    /// **Errors** if the shape does not hold exactly `v.len()` elements.
    ///
    /// ```
    /// use ndaxes::ArcArray;
    ///
    /// let a = ArcArray::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(a.get(&[1, 0]), Some(&4));
    /// assert!(ArcArray::from_shape_vec((2, 2), vec![1, 2, 3]).is_err());
    /// ```
    pub fn from_shape_vec<Sh>(shape: Sh, v: Vec<A>) -> Result<Self>
    where
        Sh: IntoDimension,
    {
        Self::from_shape_vec_order(shape, v, Order::RowMajor)
    }

    /// Create an array with the given shape from a vector of elements laid
    /// out in `order`.
    ///
    /// **Errors** if the shape does not hold exactly `v.len()` elements.
    pub fn from_shape_vec_order<Sh>(shape: Sh, v: Vec<A>, order: Order) -> Result<Self>
    where
        Sh: IntoDimension,
    {
        let dim = shape.into_dimension();
        if dimension::size_of_shape_checked(&dim) != Some(v.len()) {
            return Err(incompatible_shapes(&dim, &[v.len()]));
        }
        let strides = dimension::strides_for(&dim, order);
        Ok(Self::from_parts(SharedRepr::from(v), dim, strides, ArrayKind::Base))
    }

    /// Create an array with the given shape, filled with `elem`.
    ///
    /// **Panics** if the product of the axis lengths overflows `isize`.
    #[track_caller]
    pub fn from_elem<Sh>(shape: Sh, elem: A) -> Self
    where
        Sh: IntoDimension,
        A: Clone,
    {
        let dim = shape.into_dimension();
        let size = size_of_shape_unwrap(&dim);
        let strides = dimension::strides_for(&dim, Order::RowMajor);
        Self::from_parts(SharedRepr::from(vec![elem; size]), dim, strides, ArrayKind::Base)
    }

    /// Create an array of zeros with the given shape.
    ///
    /// **Panics** if the product of the axis lengths overflows `isize`.
    #[track_caller]
    pub fn zeros<Sh>(shape: Sh) -> Self
    where
        Sh: IntoDimension,
        A: Element,
    {
        Self::from_elem(shape, A::zero())
    }

    /// Create a one-dimensional array from the half-open interval
    /// `[start, stop)` with elements spaced by `step`.
    ///
    /// The length is `ceil((stop - start) / step)`, or zero when that is
    /// negative. Each element `start + i * step` is cast to `A`.
    ///
    /// **Errors** if `step` is zero, if the length is not finite or does not
    /// fit `isize`, or if an element does not fit `A`.
    ///
    /// ```
    /// use ndaxes::ArcArray;
    ///
    /// let a = ArcArray::<f64>::arange(0., 2., 0.5).unwrap();
    /// assert_eq!(a.to_vec(), vec![0., 0.5, 1., 1.5]);
    /// let b = ArcArray::<i32>::arange(5., 0., -2.).unwrap();
    /// assert_eq!(b.to_vec(), vec![5, 3, 1]);
    /// ```
    pub fn arange(start: f64, stop: f64, step: f64) -> Result<Self>
    where
        A: Element,
    {
        if step == 0. {
            return Err(AxisError::InvalidArgument("arange: step must be non-zero".into()));
        }
        let len = ((stop - start) / step).ceil();
        if !len.is_finite() || len > Ixs::MAX as f64 {
            return Err(AxisError::InvalidArgument(format!(
                "arange: cannot build {} elements from [{}, {}) by {}",
                len, start, stop, step
            )));
        }
        let len = if len > 0. { len as usize } else { 0 };
        let v = (0..len)
            .map(|i| cast_elem::<f64, A>(start + i as f64 * step))
            .collect::<Result<Vec<A>>>()?;
        Ok(Self::from_vec(v))
    }

    /// Create an array with the given shape, calling `f` with the index of
    /// each element in row major order.
    ///
    /// **Panics** if the product of the axis lengths overflows `isize`.
    ///
    /// ```
    /// use ndaxes::ArcArray;
    ///
    /// let a = ArcArray::from_shape_fn((2, 3), |ix| 10 * ix[0] + ix[1]);
    /// assert_eq!(a.to_vec(), vec![0, 1, 2, 10, 11, 12]);
    /// ```
    #[track_caller]
    pub fn from_shape_fn<Sh, F>(shape: Sh, mut f: F) -> Self
    where
        Sh: IntoDimension,
        F: FnMut(&[Ix]) -> A,
    {
        let dim = shape.into_dimension();
        let size = size_of_shape_unwrap(&dim);
        let mut v = Vec::with_capacity(size);
        let mut indices = Indices::new(&dim, Order::RowMajor);
        while let Some(index) = indices.next_index() {
            v.push(f(index));
        }
        let strides = dimension::strides_for(&dim, Order::RowMajor);
        Self::from_parts(SharedRepr::from(v), dim, strides, ArrayKind::Base)
    }

    pub(crate) fn from_parts(data: SharedRepr<A>, dim: Vec<Ix>, strides: Vec<Ixs>, kind: ArrayKind) -> Self {
        debug_assert_eq!(dim.len(), strides.len());
        ArcArray {
            data,
            dim,
            strides,
            kind,
        }
    }
}

impl<A> From<Vec<A>> for ArcArray<A> {
    fn from(v: Vec<A>) -> Self {
        ArcArray::from_vec(v)
    }
}

impl<A: Clone> From<&[A]> for ArcArray<A> {
    fn from(xs: &[A]) -> Self {
        ArcArray::from_vec(xs.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn shape_vec_orders() {
        let c = ArcArray::from_shape_vec_order((2, 3), (0..6).collect(), Order::C).unwrap();
        let f = ArcArray::from_shape_vec_order((2, 3), (0..6).collect(), Order::F).unwrap();
        assert_eq!(c.strides(), &[3, 1]);
        assert_eq!(f.strides(), &[1, 2]);
        assert_eq!(c.get(&[0, 1]), Some(&1));
        assert_eq!(f.get(&[0, 1]), Some(&2));
        assert_eq!(f.to_vec(), vec![0, 2, 4, 1, 3, 5]);
    }

    #[test]
    fn wrong_length() {
        let err = ArcArray::from_shape_vec((2, 2), vec![1., 2., 3.]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleShape);
    }

    #[test]
    fn scalars_and_zeros() {
        let s = ArcArray::from_scalar(2.5f32);
        assert_eq!(s.ndim(), 0);
        assert_eq!(s.len(), 1);
        assert_eq!(s.get(&[]), Some(&2.5));

        let z = ArcArray::<i64>::zeros((2, 0, 3));
        assert_eq!(z.len(), 0);
        assert!(z.is_empty());
        assert_eq!(z.to_vec(), Vec::<i64>::new());
    }

    #[test]
    fn arange_intervals() {
        let a = ArcArray::<f64>::arange(0., 5., 1.).unwrap();
        assert_eq!(a.shape(), &[5]);
        assert_eq!(a.to_vec(), vec![0., 1., 2., 3., 4.]);
        assert_eq!(ArcArray::<f64>::arange(1., 2., 0.3).unwrap().len(), 4);
        assert_eq!(ArcArray::<i64>::arange(3., -1., -1.).unwrap().to_vec(), vec![3, 2, 1, 0]);

        let empty = ArcArray::<u8>::arange(4., 1., 1.).unwrap();
        assert_eq!(empty.shape(), &[0]);
        assert!(empty.is_standard_layout());
    }

    #[test]
    fn arange_rejects_bad_steps() {
        let err = ArcArray::<f32>::arange(0., 1., 0.).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = ArcArray::<f32>::arange(0., f64::INFINITY, 1.).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(ArcArray::<f32>::arange(0., f64::NAN, 1.).is_err());
        let err = ArcArray::<u8>::arange(-2., 2., 1.).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCast);
    }

    #[test]
    #[should_panic]
    fn shape_overflow() {
        let _ = ArcArray::from_elem((usize::MAX, 2), 0u8);
    }
}
