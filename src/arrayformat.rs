// Copyright 2026 ndaxes developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::iterators::Indices;
use crate::{ArcArray, Ix, Order};

fn format_array<A, F>(array: &ArcArray<A>, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let ndim = array.ndim();
    for _ in 0..ndim {
        f.write_str("[")?;
    }
    let mut indices = Indices::new(array.shape(), Order::RowMajor);
    let mut last_index: Option<Vec<Ix>> = None;
    // Take the index wraparounds as cues for when to add []'s and how many.
    while let Some(index) = indices.next_index() {
        if let Some(last) = &last_index {
            let changed = index
                .iter()
                .zip(last)
                .take(ndim.saturating_sub(1))
                .position(|(a, b)| a != b);
            match changed {
                Some(i) => {
                    // new row: close and reopen this many brackets
                    let n = ndim - i - 1;
                    for _ in 0..n {
                        f.write_str("]")?;
                    }
                    f.write_str(",\n")?;
                    for _ in 0..ndim - n {
                        f.write_str(" ")?;
                    }
                    for _ in 0..n {
                        f.write_str("[")?;
                    }
                }
                None => f.write_str(", ")?,
            }
        }
        if let Some(elt) = array.get(index) {
            format(elt, f)?;
        }
        last_index = Some(index.to_vec());
    }
    for _ in 0..ndim {
        f.write_str("]")?;
    }
    Ok(())
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
impl<A: fmt::Display> fmt::Display for ArcArray<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style, followed by the shape, strides
/// and kind.
impl<A: fmt::Debug> fmt::Debug for ArcArray<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)?;
        write!(
            f,
            " shape={:?}, strides={:?}, kind={:?}",
            self.shape(),
            self.strides(),
            self.kind()
        )
    }
}
