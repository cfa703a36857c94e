// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::Array;

fn format_array<A, F>(arr: &Array<A>, f: &mut fmt::Formatter<'_>, format: &mut F) -> fmt::Result
where F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result
{
    if arr.is_empty() {
        return write!(f, "[]");
    }
    let mut subs = vec![0isize; arr.ndim()];
    format_axis(arr, f, format, &mut subs, 0)
}

fn format_axis<A, F>(
    arr: &Array<A>,
    f: &mut fmt::Formatter<'_>,
    format: &mut F,
    subs: &mut Vec<isize>,
    axis: usize,
) -> fmt::Result
where F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result
{
    write!(f, "[")?;
    for i in 0..arr.shape()[axis] {
        if i > 0 {
            write!(f, ", ")?;
        }
        subs[axis] = i as isize;
        if axis + 1 == arr.ndim() {
            format(arr.at(&subs[..]), f)?;
        } else {
            format_axis(arr, f, format, subs, axis + 1)?;
        }
    }
    write!(f, "]")
}

/// Format the array with each element using `Display`, in nested
/// brackets, one bracket level per axis.
impl<A: fmt::Display> fmt::Display for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, &mut |x, f| x.fmt(f))
    }
}

/// Format the array with each element using `Debug`, followed by the
/// shape and strides.
impl<A: fmt::Debug> fmt::Debug for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, &mut |x, f| x.fmt(f))?;
        write!(f, ", shape={:?}, strides={:?}", self.shape(), self.strides())
    }
}
