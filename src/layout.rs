// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::axis::Axis;
use crate::dim_vec::DimVec;
use crate::interval::Interval;
use crate::numeric::wrap_index;

/// The descriptor mapping n-dimensional subscripts to flat buffer positions.
///
/// A layout records the shape, the per-axis strides (in elements), the
/// offset of the first element into the buffer, the element count and
/// whether the layout was derived by slicing (a *view*).
///
/// Freshly created layouts are row-major: the last axis varies fastest,
/// `strides[n-1] = 1` and `strides[i] = strides[i+1] * dims[i+1]`.
/// Layouts derived by slicing keep the parent's stride structure scaled by
/// the interval steps; all other derivations (axis removal, permutation,
/// axis growth) re-derive row-major strides over the new shape.
///
/// A layout with any zero dimension is *empty*: it has no storage
/// obligation and `count` is zero. Empty layouts are ordinary values, not
/// errors; callers test [`is_empty`](Layout::is_empty).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
    dims: DimVec<usize>,
    strides: DimVec<usize>,
    offset: usize,
    count: usize,
    view: bool,
}

/// Flat offset of in-range subscripts against a stride tuple.
///
/// This and [`Layout::offset_of`] are the only places subscript
/// arithmetic lives; cursors and element access both resolve through here.
#[inline]
pub(crate) fn stride_offset(subs: &[isize], strides: &[usize]) -> isize {
    let mut offset = 0;
    for (&s, &stride) in subs.iter().zip(strides.iter()) {
        offset += s * stride as isize;
    }
    offset
}

fn default_strides(dims: &[usize]) -> DimVec<usize> {
    let mut strides = DimVec::<usize>::from(dims);
    // Compute default array strides: element distance of each axis in a
    // contiguous row-major buffer.
    let mut it = strides.iter_mut().rev();
    // Set first element to 1
    let mut cum_prod = 1;
    if let Some(first) = it.next() {
        *first = 1;
    }
    for (s, &d) in it.zip(dims.iter().rev()) {
        cum_prod *= d;
        *s = cum_prod;
    }
    strides
}

impl Layout {
    /// Row-major layout over `shape`, offset zero, not a view.
    ///
    /// A shape with any zero dimension gives the empty layout.
    pub fn from_shape(shape: &[usize]) -> Layout {
        let dims = DimVec::from(shape);
        if shape.is_empty() || shape.iter().any(|&d| d == 0) {
            return Layout {
                strides: DimVec::zeros(shape.len()),
                dims,
                offset: 0,
                count: 0,
                view: false,
            };
        }
        let strides = default_strides(shape);
        let count = shape.iter().product();
        Layout { dims, strides, offset: 0, count, view: false }
    }

    /// Layout of the rectangular region `intervals` selects out of `self`.
    ///
    /// Each interval is wrapped into the axis range and canonicalised to a
    /// positive step; missing trailing intervals mean the full axis, extra
    /// intervals are ignored. A degenerate canonicalised interval (start
    /// past stop) gives the empty layout. The result shares the parent's
    /// buffer positions and is flagged as a view.
    pub fn slice(&self, intervals: &[Interval]) -> Layout {
        let n = self.ndim();
        if self.is_empty() {
            let mut out = self.clone();
            out.view = true;
            return out;
        }
        let mut dims = self.dims.clone();
        let mut strides = self.strides.clone();
        let mut offset = self.offset;
        for (i, &iv) in intervals.iter().enumerate().take(n) {
            let r = iv.wrap(self.dims[i]).forward();
            if r.start > r.stop {
                return Layout {
                    dims: DimVec::zeros(n),
                    strides: DimVec::zeros(n),
                    offset: 0,
                    count: 0,
                    view: true,
                };
            }
            dims[i] = r.len();
            strides[i] = self.strides[i] * r.step as usize;
            offset += self.strides[i] * r.start as usize;
        }
        let count = dims.iter().product();
        Layout { dims, strides, offset, count, view: true }
    }

    /// The reduction shape: `axis` removed, strides re-derived row-major.
    ///
    /// A 1-D parent reduces to shape `[1]`.
    pub fn remove_axis(&self, axis: Axis) -> Layout {
        debug_assert!(axis.index() < self.ndim());
        if self.ndim() == 1 {
            return Layout::from_shape(&[1]);
        }
        let dims = self.dims.remove(axis.index());
        Layout::from_shape(&dims)
    }

    /// The permuted shape: `dims[i] = self.dims[order[i]]`, strides
    /// re-derived row-major (a permuted layout is materialised by copy,
    /// not carried as strides).
    ///
    /// An `order` that is not a permutation of `0..n` gives the empty
    /// layout.
    pub fn permute(&self, order: &[usize]) -> Layout {
        let n = self.ndim();
        if order.len() != n || !is_permutation(order) {
            return Layout::from_shape(&[0]);
        }
        let mut dims = DimVec::<usize>::zeros(n);
        for (i, &ax) in order.iter().enumerate() {
            dims[i] = self.dims[ax];
        }
        Layout::from_shape(&dims)
    }

    /// The shape with `dims[axis]` grown by `delta` (possibly negative),
    /// strides re-derived row-major. Used by append, insert and remove to
    /// compute output shapes. A non-positive resulting dim gives the
    /// empty layout.
    pub fn grow_axis(&self, axis: Axis, delta: isize) -> Layout {
        debug_assert!(axis.index() < self.ndim());
        let mut dims = self.dims.clone();
        let new_dim = dims[axis.index()] as isize + delta;
        if new_dim <= 0 {
            dims[axis.index()] = 0;
            return Layout::from_shape(&dims);
        }
        dims[axis.index()] = new_dim as usize;
        Layout::from_shape(&dims)
    }

    /// The lane base layout: `axis` dropped but the parent's strides and
    /// offset kept, so a cursor over it visits the first element of every
    /// lane along `axis`.
    pub(crate) fn sans_axis(&self, axis: Axis) -> Layout {
        debug_assert!(axis.index() < self.ndim());
        let (dims, strides) = if self.ndim() == 1 {
            // a single lane; one base position
            (DimVec::from(&[1][..]), DimVec::from(&[0][..]))
        } else {
            (self.dims.remove(axis.index()), self.strides.remove(axis.index()))
        };
        let count = dims.iter().product();
        Layout {
            dims,
            strides,
            offset: self.offset,
            count,
            view: true,
        }
    }

    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Total number of elements; the product of the dims when non-empty.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_view(&self) -> bool {
        self.view
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// A non-view layout whose walk order is the buffer order.
    pub fn is_contiguous(&self) -> bool {
        !self.view && !self.is_empty()
    }

    /// Resolve a subscript tuple to the flat buffer position of the
    /// element it addresses.
    ///
    /// Subscripts wrap into `[0, dims[i])` by Euclidean modulo, so
    /// negative values count from the back of the axis. Fewer subscripts
    /// than axes address the trailing axes (missing leading subscripts are
    /// zero); extra subscripts are ignored.
    ///
    /// The layout must not be empty.
    pub fn offset_of(&self, subs: &[isize]) -> usize {
        debug_assert!(!self.is_empty());
        let n = self.ndim();
        let mut pos = self.offset;
        if subs.len() >= n {
            for i in 0..n {
                pos += self.strides[i] * wrap_index(subs[i], self.dims[i]);
            }
        } else {
            let lead = n - subs.len();
            for (i, &s) in subs.iter().enumerate() {
                let axis = lead + i;
                pos += self.strides[axis] * wrap_index(s, self.dims[axis]);
            }
        }
        pos
    }
}

fn is_permutation(order: &[usize]) -> bool {
    let mut seen = [false; 8];
    let mut seen_spill;
    let seen: &mut [bool] = if order.len() <= 8 {
        &mut seen
    } else {
        seen_spill = vec![false; order.len()];
        &mut seen_spill
    };
    for &ax in order {
        if ax >= order.len() || seen[ax] {
            return false;
        }
        seen[ax] = true;
    }
    true
}
