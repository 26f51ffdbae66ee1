// Copyright 2026 ndaxes developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::{DType, Ix, Ixs};

/// An error related to axis arguments, array shape or element conversion.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AxisError {
    /// An axis does not resolve into `0..ndim`, even allowing negative
    /// indices counted from the end.
    #[error("{}axis {axis} is out of bounds for array of dimension {ndim}", Label(.label))]
    AxisOutOfRange {
        axis: Ixs,
        ndim: Ix,
        label: Option<&'static str>,
    },
    /// The same axis appears twice in a multi-axis argument.
    #[error("repeated axis{}", InArgument(.label))]
    RepeatedAxis {
        label: Option<&'static str>,
    },
    /// A planner-level contract violation.
    #[error("{0}")]
    InvalidArgument(String),
    /// Element count does not match the shape, or nested input is ragged.
    #[error("incompatible shapes, expected {expected:?}, found {found:?}")]
    IncompatibleShape {
        expected: Vec<Ix>,
        found: Vec<Ix>,
    },
    /// A value could not be represented in the requested element type.
    #[error("cannot cast array data from {from} to {to}")]
    InvalidCast {
        from: DType,
        to: DType,
    },
}

/// Error code for an [`AxisError`], without its payload.
///
/// This enumeration is not exhaustive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// axis index out of range
    AxisOutOfRange,
    /// same axis given twice
    RepeatedAxis,
    /// argument out of its valid range, or mismatched arguments
    InvalidArgument,
    /// incompatible shapes
    IncompatibleShape,
    /// element value does not fit the target type
    InvalidCast,
}

impl AxisError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            AxisError::AxisOutOfRange { .. } => ErrorKind::AxisOutOfRange,
            AxisError::RepeatedAxis { .. } => ErrorKind::RepeatedAxis,
            AxisError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            AxisError::IncompatibleShape { .. } => ErrorKind::IncompatibleShape,
            AxisError::InvalidCast { .. } => ErrorKind::InvalidCast,
        }
    }
}

/// Result alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, AxisError>;

pub(crate) fn incompatible_shapes(expected: &[Ix], found: &[Ix]) -> AxisError {
    AxisError::IncompatibleShape {
        expected: expected.to_vec(),
        found: found.to_vec(),
    }
}

// `label: ` prefix for out of range axes
struct Label<'a>(&'a Option<&'static str>);

impl fmt::Display for Label<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.0 {
            Some(label) => write!(f, "{}: ", label),
            None => Ok(()),
        }
    }
}

struct InArgument<'a>(&'a Option<&'static str>);

impl fmt::Display for InArgument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.0 {
            Some(label) => write!(f, " in `{}` argument", label),
            None => Ok(()),
        }
    }
}
