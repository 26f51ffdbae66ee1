// Copyright 2026 ndaxes developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element types and their runtime tags.
use std::any::Any;
use std::fmt;

use num_complex::{Complex32, Complex64};
use num_traits::{NumCast, Zero};

use crate::error::{AxisError, Result};

/// Runtime tag of an array's element type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DType {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Complex32,
    Complex64,
}

impl DType {
    /// Lowercase name, `"float64"`, `"complex64"`, ...
    pub const fn name(self) -> &'static str {
        match self {
            DType::Int8 => "int8",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::UInt8 => "uint8",
            DType::UInt16 => "uint16",
            DType::UInt32 => "uint32",
            DType::UInt64 => "uint64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Complex32 => "complex32",
            DType::Complex64 => "complex64",
        }
    }

    /// Size of one element in bytes.
    pub const fn itemsize(self) -> usize {
        match self {
            DType::Int8 | DType::UInt8 => 1,
            DType::Int16 | DType::UInt16 => 2,
            DType::Int32 | DType::UInt32 | DType::Float32 => 4,
            DType::Int64 | DType::UInt64 | DType::Float64 | DType::Complex32 => 8,
            DType::Complex64 => 16,
        }
    }

    pub const fn is_complex(self) -> bool {
        matches!(self, DType::Complex32 | DType::Complex64)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Element types an [`ArcArray`](crate::ArcArray) can hold.
///
/// ***Don't implement this trait, the set of element types is closed.***
pub trait Element:
    Copy + NumCast + Zero + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// The runtime tag for this type.
    const DTYPE: DType;
}

macro_rules! impl_element {
    ($($t:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $t {
                const DTYPE: DType = DType::$dtype;
            }
        )*
    };
}

impl_element! {
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    Complex32 => Complex32,
    Complex64 => Complex64,
}

/// Convert one element, failing if the value does not fit `B`.
///
/// Floats are truncated toward zero when cast to integers; complex values
/// only cast to real types when their imaginary part is zero.
#[inline]
pub(crate) fn cast_elem<A, B>(x: A) -> Result<B>
where
    A: Element,
    B: Element,
{
    if let Some(&same) = (&x as &dyn Any).downcast_ref::<B>() {
        return Ok(same);
    }
    let cast = if A::DTYPE.is_complex() && B::DTYPE.is_complex() {
        complex_cast(x)
    } else {
        num_traits::cast::<A, B>(x)
    };
    cast.ok_or(AxisError::InvalidCast {
        from: A::DTYPE,
        to: B::DTYPE,
    })
}

// `NumCast` goes through a real number, which would drop the imaginary part
fn complex_cast<A: Element, B: Element>(x: A) -> Option<B> {
    let x = &x as &dyn Any;
    let c = match x.downcast_ref::<Complex32>() {
        Some(c) => Complex64::new(c.re.into(), c.im.into()),
        None => *x.downcast_ref::<Complex64>()?,
    };
    let mut out: Option<B> = None;
    let slot = &mut out as &mut dyn Any;
    if let Some(slot) = slot.downcast_mut::<Option<Complex64>>() {
        *slot = Some(c);
    } else if let Some(slot) = slot.downcast_mut::<Option<Complex32>>() {
        *slot = Some(Complex32::new(c.re as f32, c.im as f32));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn tags() {
        assert_eq!(<f64 as Element>::DTYPE, DType::Float64);
        assert_eq!(<Complex32 as Element>::DTYPE.itemsize(), 8);
        assert_eq!(DType::UInt16.to_string(), "uint16");
        assert!(DType::Complex64.is_complex());
    }

    #[test]
    fn checked_casts() {
        assert_eq!(cast_elem::<i32, f64>(7).unwrap(), 7.0);
        assert_eq!(cast_elem::<f64, i16>(-2.75).unwrap(), -2);
        assert_eq!(cast_elem::<i32, u8>(-1).unwrap_err().kind(), ErrorKind::InvalidCast);
        assert_eq!(cast_elem::<f32, Complex64>(1.5).unwrap(), Complex64::new(1.5, 0.));
        assert!(cast_elem::<Complex64, f64>(Complex64::new(1., 1.)).is_err());
        assert_eq!(cast_elem::<Complex64, f64>(Complex64::new(4., 0.)).unwrap(), 4.);
    }

    #[test]
    fn complex_keeps_imaginary_part() {
        let z = Complex32::new(1.5, -2.);
        assert_eq!(cast_elem::<Complex32, Complex32>(z).unwrap(), z);
        assert_eq!(cast_elem::<Complex32, Complex64>(z).unwrap(), Complex64::new(1.5, -2.));
        assert_eq!(cast_elem::<Complex64, Complex32>(Complex64::new(0.5, 3.)).unwrap(), Complex32::new(0.5, 3.));
    }
}
