use crate::error::{AxisError, Result};
use crate::{Ix, Ixs};

/// An integer that can name an axis, possibly counted from the end.
pub trait AxisIndex: Copy {
    /// The axis as a signed index; `-1` is the last axis.
    fn axis_index(self) -> Ixs;
}

macro_rules! impl_axis_index {
    ($($t:ty),*) => {
        $(
            impl AxisIndex for $t {
                #[inline]
                fn axis_index(self) -> Ixs {
                    // wider than `isize` on some targets: saturate, never wrap
                    Ixs::try_from(self).unwrap_or(if self < 0 { Ixs::MIN } else { Ixs::MAX })
                }
            }
        )*
    };
}

impl_axis_index!(i8, i16, i32, i64, isize);

impl AxisIndex for usize {
    #[inline]
    fn axis_index(self) -> Ixs {
        // anything past isize::MAX is out of range for every array anyway
        Ixs::try_from(self).unwrap_or(Ixs::MAX)
    }
}

/// A single axis or a sequence of axes, as accepted by
/// [`moveaxis`](crate::moveaxis).
///
/// A single axis behaves as a sequence of length one.
pub trait AxisArg {
    /// The axes as signed indices, in the order given.
    fn axis_indices(&self) -> Vec<Ixs>;
}

macro_rules! impl_axis_arg_scalar {
    ($($t:ty),*) => {
        $(
            impl AxisArg for $t {
                fn axis_indices(&self) -> Vec<Ixs> {
                    vec![self.axis_index()]
                }
            }
        )*
    };
}

impl_axis_arg_scalar!(i8, i16, i32, i64, isize, usize);

impl<T: AxisIndex, const N: usize> AxisArg for [T; N] {
    fn axis_indices(&self) -> Vec<Ixs> {
        self.iter().map(|&ax| ax.axis_index()).collect()
    }
}

impl<T: AxisIndex> AxisArg for [T] {
    fn axis_indices(&self) -> Vec<Ixs> {
        self.iter().map(|&ax| ax.axis_index()).collect()
    }
}

impl<T: AxisIndex> AxisArg for Vec<T> {
    fn axis_indices(&self) -> Vec<Ixs> {
        self[..].axis_indices()
    }
}

impl<'a, A: AxisArg + ?Sized> AxisArg for &'a A {
    fn axis_indices(&self) -> Vec<Ixs> {
        (**self).axis_indices()
    }
}

/// Resolve `axis` into `0..ndim`, counting negative values from the end.
///
/// **Errors** with `AxisOutOfRange` if `axis` is outside `-ndim..ndim`.
/// `label` names the argument in the error message.
pub fn normalize_axis_index(axis: Ixs, ndim: Ix, label: Option<&'static str>) -> Result<Ix> {
    let n = ndim as Ixs;
    if axis < -n || axis >= n {
        return Err(AxisError::AxisOutOfRange { axis, ndim, label });
    }
    Ok(if axis < 0 { (axis + n) as Ix } else { axis as Ix })
}

/// Resolve every axis of `axes` into `0..ndim`, keeping their order.
///
/// **Errors** with `AxisOutOfRange` for an axis outside `-ndim..ndim`, and
/// with `RepeatedAxis` if two entries resolve to the same axis. `label`
/// names the argument in either message.
pub fn normalize_axis_tuple<T>(axes: &T, ndim: Ix, label: &'static str) -> Result<Vec<Ix>>
where
    T: AxisArg + ?Sized,
{
    let mut seen = vec![false; ndim];
    axes.axis_indices()
        .into_iter()
        .map(|axis| {
            let axis = normalize_axis_index(axis, ndim, Some(label))?;
            if seen[axis] {
                return Err(AxisError::RepeatedAxis { label: Some(label) });
            }
            seen[axis] = true;
            Ok(axis)
        })
        .collect()
}
