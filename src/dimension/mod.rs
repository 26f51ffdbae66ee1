// Copyright 2026 ndaxes developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape and stride arithmetic shared by the array handle and the planners.
use crate::order::Order;
use crate::{Ix, Ixs};

pub use self::axes::{normalize_axis_index, normalize_axis_tuple, AxisArg, AxisIndex};
pub use self::conversion::IntoDimension;

mod axes;
mod conversion;

/// Calculate offset from `Ix` index and `Ixs` stride
#[inline(always)]
pub fn stride_offset(n: Ix, stride: Ixs) -> isize {
    (n as isize) * stride
}

/// Return the number of elements of `dim`, or `None` on overflow.
///
/// The empty product is 1, so a zero-dimensional shape holds one element.
pub fn size_of_shape_checked(dim: &[Ix]) -> Option<usize> {
    dim.iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .filter(|&size| size <= isize::MAX as usize)
}

/// Contiguous strides for `dim` in the given memory order.
///
/// Shape (a, b, c) gives strides (b * c, c, 1) in row major order and
/// (1, a, a * b) in column major order.
pub fn strides_for(dim: &[Ix], order: Order) -> Vec<Ixs> {
    let mut strides = vec![0; dim.len()];
    let mut cum_prod: Ixs = 1;
    let mut assign = |axis: usize| {
        strides[axis] = cum_prod;
        cum_prod *= dim[axis].max(1) as Ixs;
    };
    match order {
        Order::RowMajor => (0..dim.len()).rev().for_each(&mut assign),
        Order::ColumnMajor => (0..dim.len()).for_each(&mut assign),
    }
    strides
}

/// Return true if `strides` describe a contiguous layout of `dim` in
/// `order`.
///
/// Axes of length one may have any stride, and an empty array is
/// contiguous in every order.
pub fn is_layout(dim: &[Ix], strides: &[Ixs], order: Order) -> bool {
    debug_assert_eq!(dim.len(), strides.len());
    if dim.iter().any(|&d| d == 0) {
        return true;
    }
    let expected = strides_for(dim, order);
    dim.iter()
        .zip(strides.iter().zip(&expected))
        .all(|(&d, (&s, &e))| d == 1 || s == e)
}

/// Return true if `axes` holds each of `0..ndim` exactly once.
pub fn is_valid_permutation(ndim: usize, axes: &[Ix]) -> bool {
    if axes.len() != ndim {
        return false;
    }
    let mut seen = vec![false; ndim];
    for &axis in axes {
        match seen.get_mut(axis) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// Collect `source[axes[i]]` for each `i`.
pub(crate) fn permute<T: Copy>(source: &[T], axes: &[Ix]) -> Vec<T> {
    axes.iter().map(|&axis| source[axis]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguous_strides() {
        assert_eq!(strides_for(&[3, 4, 5], Order::C), vec![20, 5, 1]);
        assert_eq!(strides_for(&[3, 4, 5], Order::F), vec![1, 3, 12]);
        assert_eq!(strides_for(&[], Order::C), Vec::<Ixs>::new());
        assert_eq!(strides_for(&[2, 0, 3], Order::C), vec![3, 3, 1]);
    }

    #[test]
    fn layouts() {
        assert!(is_layout(&[3, 4], &[4, 1], Order::C));
        assert!(!is_layout(&[3, 4], &[4, 1], Order::F));
        assert!(is_layout(&[3, 4], &[1, 3], Order::F));
        // length one axes are unconstrained
        assert!(is_layout(&[3, 1], &[1, 99], Order::C));
        assert!(is_layout(&[3, 1], &[1, 99], Order::F));
        assert!(is_layout(&[0, 4], &[7, 7], Order::C));
    }

    #[test]
    fn permutations() {
        assert!(is_valid_permutation(3, &[2, 0, 1]));
        assert!(is_valid_permutation(0, &[]));
        assert!(!is_valid_permutation(3, &[0, 1]));
        assert!(!is_valid_permutation(3, &[0, 1, 1]));
        assert!(!is_valid_permutation(2, &[0, 2]));
        assert_eq!(permute(&[3, 4, 5], &[2, 0, 1]), vec![5, 3, 4]);
    }

    #[test]
    fn sizes() {
        assert_eq!(size_of_shape_checked(&[]), Some(1));
        assert_eq!(size_of_shape_checked(&[3, 0, 2]), Some(0));
        assert_eq!(size_of_shape_checked(&[usize::MAX, 2]), None);
        assert_eq!(stride_offset(3, -2), -6);
    }
}
