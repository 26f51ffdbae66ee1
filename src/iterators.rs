// Copyright 2026 ndaxes developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::iter::FusedIterator;

use crate::dimension;
use crate::{ArcArray, Ix, Ixs, Order};

/// Walks every index of a shape, in row major or column major order.
pub(crate) struct Indices<'a> {
    dim: &'a [Ix],
    index: Vec<Ix>,
    remaining: usize,
    started: bool,
    order: Order,
}

impl<'a> Indices<'a> {
    pub(crate) fn new(dim: &'a [Ix], order: Order) -> Self {
        Indices {
            dim,
            index: vec![0; dim.len()],
            remaining: dimension::size_of_shape_checked(dim).unwrap_or(0),
            started: false,
            order,
        }
    }

    /// Advance to the next index; the first call yields all zeros.
    pub(crate) fn next_index(&mut self) -> Option<&[Ix]> {
        self.step(&[]).map(|_| &self.index[..])
    }

    /// Advance like `next_index`, and return the change of the element
    /// offset under `strides` (zero on the first call).
    ///
    /// An empty `strides` skips the offset bookkeeping.
    fn step(&mut self, strides: &[Ixs]) -> Option<isize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        if !self.started {
            self.started = true;
            return Some(0);
        }
        let ndim = self.dim.len();
        let mut delta = 0;
        for k in 0..ndim {
            let axis = match self.order {
                Order::RowMajor => ndim - 1 - k,
                Order::ColumnMajor => k,
            };
            let stride = strides.get(axis).copied().unwrap_or(0);
            self.index[axis] += 1;
            delta += stride;
            if self.index[axis] < self.dim[axis] {
                break;
            }
            // wrap around and carry into the next axis
            delta -= dimension::stride_offset(self.dim[axis], stride);
            self.index[axis] = 0;
        }
        Some(delta)
    }

    fn len(&self) -> usize {
        self.remaining
    }
}

/// An iterator over the elements of an array, in logical order.
///
/// Created with [`ArcArray::iter`]; iterator element type is `&'a A`.
pub struct Iter<'a, A> {
    data: &'a [A],
    strides: &'a [Ixs],
    indices: Indices<'a>,
    offset: isize,
}

impl<'a, A> Iter<'a, A> {
    pub(crate) fn new(array: &'a ArcArray<A>, order: Order) -> Self {
        Iter {
            data: array.data.as_slice(),
            strides: &array.strides,
            indices: Indices::new(&array.dim, order),
            offset: 0,
        }
    }
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<&'a A> {
        let delta = self.indices.step(self.strides)?;
        self.offset += delta;
        Some(&self.data[self.offset as usize])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.indices.len();
        (len, Some(len))
    }
}

impl<'a, A> ExactSizeIterator for Iter<'a, A> {}

impl<'a, A> FusedIterator for Iter<'a, A> {}

impl<'a, A> Clone for Iter<'a, A> {
    fn clone(&self) -> Self {
        Iter {
            data: self.data,
            strides: self.strides,
            indices: Indices {
                dim: self.indices.dim,
                index: self.indices.index.clone(),
                remaining: self.indices.remaining,
                started: self.indices.started,
                order: self.indices.order,
            },
            offset: self.offset,
        }
    }
}

impl<'a, A> IntoIterator for &'a ArcArray<A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_and_column_major_indices() {
        let dim = [2, 3];
        let mut c = Indices::new(&dim, Order::C);
        let mut seen = Vec::new();
        while let Some(ix) = c.next_index() {
            seen.push(ix.to_vec());
        }
        assert_eq!(seen, vec![vec![0, 0], vec![0, 1], vec![0, 2], vec![1, 0], vec![1, 1], vec![1, 2]]);

        let mut f = Indices::new(&dim, Order::F);
        let mut seen = Vec::new();
        while let Some(ix) = f.next_index() {
            seen.push(ix.to_vec());
        }
        assert_eq!(seen, vec![vec![0, 0], vec![1, 0], vec![0, 1], vec![1, 1], vec![0, 2], vec![1, 2]]);
    }

    #[test]
    fn zero_dim_yields_once() {
        let mut ix = Indices::new(&[], Order::C);
        assert_eq!(ix.next_index(), Some(&[][..]));
        assert_eq!(ix.next_index(), None);
    }

    #[test]
    fn iter_follows_strides() {
        let a = ArcArray::from_shape_vec((2, 3), vec![0, 1, 2, 3, 4, 5]).unwrap();
        let t = a.permuted_axes(&[1, 0]);
        let it = t.iter();
        assert_eq!(it.len(), 6);
        assert_eq!(it.cloned().collect::<Vec<_>>(), vec![0, 3, 1, 4, 2, 5]);
        assert_eq!(t.iter_order(Order::F).cloned().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
    }
}
