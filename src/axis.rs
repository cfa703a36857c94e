// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::ShapeError;

/// An axis of a [`Layout`](crate::Layout).
///
/// `Axis(i)` names position `i` of a layout's `dims`/`strides` tuples:
/// `Axis(0)` is the outermost axis (slowest varying in the default walk)
/// and `Axis(n - 1)` the innermost. Operations that fold, grow or walk
/// along one axis — `reduce_axis`, `append`, `insert`, `remove`,
/// `Cursor::with_major` — take the axis as this newtype, so a call like
/// `a.insert(&b, 1, Axis(2))` keeps the position and the axis number
/// apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axis(pub usize);

impl Axis {
    /// The position of this axis in a layout's `dims`/`strides` tuples.
    #[inline]
    pub fn index(self) -> usize {
        let Axis(ix) = self;
        ix
    }

    /// The same position, checked against a rank: `OutOfBounds` when the
    /// axis does not address one of `ndim` axes.
    pub(crate) fn usable_for(self, ndim: usize) -> Result<usize, ShapeError> {
        if self.index() < ndim {
            Ok(self.index())
        } else {
            Err(ShapeError::out_of_bounds(ndim, self.index()))
        }
    }
}

impl From<usize> for Axis {
    #[inline]
    fn from(ix: usize) -> Axis {
        Axis(ix)
    }
}
