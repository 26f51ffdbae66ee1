// Copyright 2026 ndaxes developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::dimension::{self, AxisArg};
use crate::dtype::cast_elem;
use crate::error::{AxisError, Result};
use crate::iterators::Iter;
use crate::permute::{self, Permute};
use crate::{ArcArray, ArrayKind, DType, Element, Ix, Ixs, Order, SharedRepr};

/// # Inspection
impl<A> ArcArray<A> {
    /// Return the total number of elements in the array.
    pub fn len(&self) -> usize {
        self.dim.iter().product()
    }

    /// Return whether the array has any elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the shape of the array as a slice.
    pub fn shape(&self) -> &[Ix] {
        &self.dim
    }

    /// Return the strides of the array, counted in elements.
    pub fn strides(&self) -> &[Ixs] {
        &self.strides
    }

    /// Return the number of dimensions (axes) in the array
    pub fn ndim(&self) -> usize {
        self.dim.len()
    }

    /// Return the representation this handle exposes.
    pub fn kind(&self) -> ArrayKind {
        self.kind
    }

    /// Return the runtime tag of the element type.
    pub fn dtype(&self) -> DType
    where
        A: Element,
    {
        A::DTYPE
    }

    /// Return `true` if the array data is laid out in contiguous “C order” in
    /// memory (where the last index is the most rapidly varying).
    pub fn is_standard_layout(&self) -> bool {
        dimension::is_layout(&self.dim, &self.strides, Order::RowMajor)
    }

    /// Return `true` if the array data is laid out in contiguous “F order” in
    /// memory (where the first index is the most rapidly varying).
    pub fn is_fortran_layout(&self) -> bool {
        dimension::is_layout(&self.dim, &self.strides, Order::ColumnMajor)
    }

    /// Return `true` if the array is contiguous in `order`.
    pub fn satisfies(&self, order: Order) -> bool {
        match order {
            Order::RowMajor => self.is_standard_layout(),
            Order::ColumnMajor => self.is_fortran_layout(),
        }
    }

    /// Return `true` if both handles refer to the same element buffer.
    ///
    /// ```
    /// use ndaxes::ArcArray;
    ///
    /// let a = ArcArray::<f64>::zeros((2, 3));
    /// let v = a.view().reversed_axes();
    /// assert!(v.shares_storage(&a));
    /// assert!(!a.to_owned_order(Default::default()).shares_storage(&a));
    /// ```
    pub fn shares_storage(&self, other: &ArcArray<A>) -> bool {
        self.data.ptr_eq(&other.data)
    }

    /// Return `true` if no other handle shares this array's storage.
    pub fn is_unique(&self) -> bool {
        self.data.handle_count() == 1
    }
}

/// # Views and axis reordering
///
/// None of these methods copy elements. Each returns a handle that shares
/// storage with `self` under new shape and stride metadata.
impl<A> ArcArray<A> {
    /// Return a new handle to the same elements, with the same shape and
    /// strides.
    ///
    /// The metadata is independent: reordering the axes of either handle
    /// afterwards does not affect the other.
    pub fn view(&self) -> ArcArray<A> {
        self.clone()
    }

    /// Permute the axes.
    ///
    /// Axis `i` of the result is axis `axes[i]` of `self`, so
    /// `shape[i] = self.shape()[axes[i]]` and likewise for the strides.
    ///
    /// **Panics** if `axes` is not a permutation of `0..self.ndim()`; such a
    /// permutation is a bug in the caller, not an input error.
    ///
    /// ```
    /// use ndaxes::ArcArray;
    ///
    /// let a = ArcArray::<u8>::zeros((2, 3, 4));
    /// assert_eq!(a.permuted_axes(&[1, 2, 0]).shape(), &[3, 4, 2]);
    /// ```
    #[track_caller]
    pub fn permuted_axes(&self, axes: &[Ix]) -> ArcArray<A> {
        assert!(
            dimension::is_valid_permutation(self.ndim(), axes),
            "permuted_axes: {:?} is not a permutation of the {} axes",
            axes,
            self.ndim()
        );
        ArcArray::from_parts(
            self.data.clone(),
            dimension::permute(&self.dim, axes),
            dimension::permute(&self.strides, axes),
            self.kind,
        )
    }

    /// Swap axes `ax` and `bx`.
    ///
    /// This does not move any data, it just adjusts the array’s dimensions
    /// and strides.
    ///
    /// **Panics** if the axes are out of bounds.
    #[track_caller]
    pub fn swap_axes(&mut self, ax: usize, bx: usize) {
        self.dim.swap(ax, bx);
        self.strides.swap(ax, bx);
    }

    /// Transpose the array by reversing axes.
    ///
    /// Transposition reverses the order of the axes (dimensions and strides)
    /// while retaining the same data.
    pub fn reversed_axes(mut self) -> ArcArray<A> {
        self.dim.reverse();
        self.strides.reverse();
        self
    }

    /// Roll `axis` backwards until it lies before position `start`.
    ///
    /// See [`rollaxis`](crate::rollaxis).
    pub fn roll_axis(&self, axis: Ixs, start: Ixs) -> Result<ArcArray<A>> {
        let plan = permute::plan_rollaxis(self.ndim(), axis, start)?;
        Ok(permute::apply(self, &plan))
    }

    /// Move axes `source` to positions `destination`.
    ///
    /// See [`moveaxis`](crate::moveaxis).
    pub fn move_axes<S, D>(&self, source: S, destination: D) -> Result<ArcArray<A>>
    where
        S: AxisArg,
        D: AxisArg,
    {
        let plan = permute::plan_moveaxis(self.ndim(), &source, &destination)?;
        Ok(permute::apply(self, &plan))
    }
}

/// # Elements
impl<A> ArcArray<A> {
    /// Return a reference to the element at `index`, or `None` if the index
    /// is out of bounds or has the wrong number of axes.
    pub fn get(&self, index: &[Ix]) -> Option<&A> {
        let offset = self.offset_of(index)?;
        self.data.as_slice().get(offset)
    }

    /// Return a mutable reference to the element at `index`, or `None` if
    /// the index is out of bounds.
    ///
    /// If the storage is shared with other handles, it is copied first, so
    /// the write is never visible through another handle.
    pub fn get_mut(&mut self, index: &[Ix]) -> Option<&mut A>
    where
        A: Clone,
    {
        let offset = self.offset_of(index)?;
        self.data.make_mut().get_mut(offset)
    }

    fn offset_of(&self, index: &[Ix]) -> Option<usize> {
        if index.len() != self.ndim() {
            return None;
        }
        let mut offset = 0;
        for ((&i, &d), &s) in index.iter().zip(&self.dim).zip(&self.strides) {
            if i >= d {
                return None;
            }
            offset += dimension::stride_offset(i, s);
        }
        Some(offset as usize)
    }

    /// Return an iterator of references to the elements of the array, in
    /// logical row major order regardless of the memory layout.
    pub fn iter(&self) -> Iter<'_, A> {
        Iter::new(self, Order::RowMajor)
    }

    pub(crate) fn iter_order(&self, order: Order) -> Iter<'_, A> {
        Iter::new(self, order)
    }

    /// Return the elements in logical row major order.
    pub fn to_vec(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// # Conversions
impl<A> ArcArray<A> {
    /// Return a copy of the array in new storage laid out in `order`.
    ///
    /// The kind is kept.
    pub fn to_owned_order(&self, order: Order) -> ArcArray<A>
    where
        A: Clone,
    {
        let v = self.iter_order(order).cloned().collect();
        ArcArray::from_parts(
            SharedRepr::from(v),
            self.dim.clone(),
            dimension::strides_for(&self.dim, order),
            self.kind,
        )
    }

    /// Copy the array into new storage laid out in `order`, converting each
    /// element to `B`.
    ///
    /// **Errors** with `InvalidCast` if an element does not fit `B`.
    pub fn cast_order<B>(&self, order: Order) -> Result<ArcArray<B>>
    where
        A: Element,
        B: Element,
    {
        let v = self
            .iter_order(order)
            .map(|&x| cast_elem::<A, B>(x))
            .collect::<Result<Vec<B>>>()?;
        Ok(ArcArray::from_parts(
            SharedRepr::from(v),
            self.dim.clone(),
            dimension::strides_for(&self.dim, order),
            self.kind,
        ))
    }

    /// Return the same handle exposing the base representation.
    pub fn into_base(mut self) -> ArcArray<A> {
        self.kind = ArrayKind::Base;
        self
    }

    /// Return the same handle exposing the matrix representation.
    ///
    /// **Errors** with `InvalidArgument` unless the array is
    /// two-dimensional.
    pub fn into_matrix(mut self) -> Result<ArcArray<A>> {
        if self.ndim() != 2 {
            return Err(AxisError::InvalidArgument(format!(
                "matrix must be 2-dimensional, got shape {:?}",
                self.dim
            )));
        }
        self.kind = ArrayKind::Matrix;
        Ok(self)
    }

    /// Return `true` if this handle exposes the matrix representation.
    pub fn is_matrix(&self) -> bool {
        self.kind == ArrayKind::Matrix
    }
}

impl<A: PartialEq> PartialEq for ArcArray<A> {
    /// Arrays are equal when their shapes and their elements in logical
    /// order are equal; memory layout and kind do not matter.
    fn eq(&self, rhs: &Self) -> bool {
        self.shape() == rhs.shape() && self.iter().eq(rhs.iter())
    }
}

impl<A: Eq> Eq for ArcArray<A> {}

impl<A> Permute for ArcArray<A> {
    type Output = ArcArray<A>;

    fn ndim(&self) -> usize {
        ArcArray::ndim(self)
    }

    fn view(&self) -> ArcArray<A> {
        ArcArray::view(self)
    }

    fn permuted_axes(&self, axes: &[Ix]) -> ArcArray<A> {
        ArcArray::permuted_axes(self, axes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arange(shape: &[Ix]) -> ArcArray<i32> {
        let n = shape.iter().product::<usize>() as i32;
        ArcArray::from_shape_vec(shape, (0..n).collect()).unwrap()
    }

    #[test]
    fn permuted_axes_moves_strides() {
        let a = arange(&[2, 3, 4]);
        assert_eq!(a.strides(), &[12, 4, 1]);
        let p = a.permuted_axes(&[2, 0, 1]);
        assert_eq!(p.shape(), &[4, 2, 3]);
        assert_eq!(p.strides(), &[1, 12, 4]);
        assert!(p.shares_storage(&a));
        assert!(!p.is_standard_layout());
        assert_eq!(p.get(&[3, 1, 2]), a.get(&[1, 2, 3]));
    }

    #[test]
    #[should_panic]
    fn permuted_axes_rejects_repeats() {
        arange(&[2, 3]).permuted_axes(&[0, 0]);
    }

    #[test]
    fn reversed_is_fortran() {
        let a = arange(&[2, 3, 4]);
        let t = a.view().reversed_axes();
        assert_eq!(t.shape(), &[4, 3, 2]);
        assert!(t.is_fortran_layout());
        assert!(t.satisfies(Order::F));
        assert_eq!(a.shape(), &[2, 3, 4]);
    }

    #[test]
    fn swap_axes_in_place() {
        let mut a = arange(&[2, 3]);
        a.swap_axes(0, 1);
        assert_eq!(a.shape(), &[3, 2]);
        assert_eq!(a.to_vec(), vec![0, 3, 1, 4, 2, 5]);
    }

    #[test]
    fn copy_on_write() {
        let mut a = arange(&[2, 2]);
        let b = a.permuted_axes(&[1, 0]);
        assert!(!a.is_unique());
        *a.get_mut(&[0, 1]).unwrap() = 100;
        assert!(!a.shares_storage(&b));
        assert!(a.is_unique());
        assert_eq!(a.get(&[0, 1]), Some(&100));
        assert_eq!(b.get(&[1, 0]), Some(&1));
    }

    #[test]
    fn out_of_bounds_get() {
        let a = arange(&[2, 3]);
        assert_eq!(a.get(&[2, 0]), None);
        assert_eq!(a.get(&[0]), None);
    }

    #[test]
    fn owned_copies() {
        let a = arange(&[2, 3]).reversed_axes();
        let c = a.to_owned_order(Order::C);
        assert!(c.is_standard_layout());
        assert!(!c.shares_storage(&a));
        assert_eq!(c, a);
        let f = a.cast_order::<f64>(Order::F).unwrap();
        assert!(f.is_fortran_layout());
        assert_eq!(f.get(&[2, 1]), Some(&5.0));
    }

    #[test]
    fn kinds() {
        let m = arange(&[2, 3]).into_matrix().unwrap();
        assert!(m.is_matrix());
        assert_eq!(m.kind(), ArrayKind::Matrix);
        assert!(!m.into_base().is_matrix());
        assert!(arange(&[2, 3, 1]).into_matrix().is_err());
        assert_eq!(arange(&[1]).dtype(), DType::Int32);
    }
}
