// Copyright 2026 ndaxes developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tuple, array and vector shapes.
use crate::Ix;

/// Argument conversion into an array shape.
///
/// `()` is the zero-dimensional shape, a bare `Ix` is one-dimensional, and
/// tuples, arrays and vectors of `Ix` give one axis per entry.
pub trait IntoDimension {
    fn into_dimension(self) -> Vec<Ix>;
}

impl IntoDimension for () {
    #[inline]
    fn into_dimension(self) -> Vec<Ix> {
        Vec::new()
    }
}

impl IntoDimension for Ix {
    #[inline]
    fn into_dimension(self) -> Vec<Ix> {
        vec![self]
    }
}

impl<const N: usize> IntoDimension for [Ix; N] {
    #[inline]
    fn into_dimension(self) -> Vec<Ix> {
        self.to_vec()
    }
}

impl<'a> IntoDimension for &'a [Ix] {
    #[inline]
    fn into_dimension(self) -> Vec<Ix> {
        self.to_vec()
    }
}

impl IntoDimension for Vec<Ix> {
    #[inline]
    fn into_dimension(self) -> Vec<Ix> {
        self
    }
}

impl<'a> IntoDimension for &'a Vec<Ix> {
    #[inline]
    fn into_dimension(self) -> Vec<Ix> {
        self.clone()
    }
}

macro_rules! tuple_into_dimension {
    ($($name:ident)+) => {
        impl IntoDimension for ($(tuple_into_dimension!(@ix $name),)+) {
            #[inline]
            #[allow(non_snake_case)]
            fn into_dimension(self) -> Vec<Ix> {
                let ($($name,)+) = self;
                vec![$($name),+]
            }
        }
    };
    (@ix $name:ident) => { Ix };
}

tuple_into_dimension!(a);
tuple_into_dimension!(a b);
tuple_into_dimension!(a b c);
tuple_into_dimension!(a b c d);
tuple_into_dimension!(a b c d e);
tuple_into_dimension!(a b c d e f);
