// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::axis::Axis;
use crate::dim_vec::DimVec;
use crate::layout::{stride_offset, Layout};

/// A walker over the flat positions of a layout.
///
/// The cursor keeps a subscript tuple and advances it through the layout
/// in a caller-chosen axis order; dereferencing yields the flat buffer
/// position of the current subscripts. It is the one place in the crate
/// where subscript bookkeeping lives: every operation that traverses an
/// array opens a cursor (or the [`FlatCursor`] fast path) over its layout.
///
/// The cursor borrows only the layout — it holds no reference to any
/// buffer and does not extend a buffer's lifetime.
///
/// ## Order
///
/// The default order is row-major. [`with_major`](Cursor::with_major)
/// makes one axis the outermost (slowest varying) and walks the remaining
/// axes row-major. [`with_order`](Cursor::with_order) takes a full
/// permutation of the axes; the **last** entry of the order is the
/// innermost, fastest-varying axis, and carries propagate right to left
/// through the order.
///
/// ## Range
///
/// Each axis has an exclusive `(lower, upper)` band, by default
/// `(-1, dims[i])`. The cursor is in range while the subscript of the
/// *major* (outermost) axis lies strictly inside its band. Stepping past
/// either end leaves the cursor out of range in a state from which the
/// inverse step re-enters at the boundary element.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    layout: &'a Layout,
    order: DimVec<usize>,
    start: DimVec<isize>,
    lower: DimVec<isize>,
    upper: DimVec<isize>,
    subs: DimVec<isize>,
}

impl<'a> Cursor<'a> {
    /// Cursor over `layout` in row-major order.
    pub fn new(layout: &'a Layout) -> Cursor<'a> {
        let order = DimVec::from((0..layout.ndim()).collect::<Vec<_>>());
        Self::with_order_impl(layout, order)
    }

    /// Cursor walking `axis` as the outermost (slowest) axis, all other
    /// axes row-major inside it.
    pub fn with_major(layout: &'a Layout, axis: Axis) -> Cursor<'a> {
        debug_assert!(axis.index() < layout.ndim());
        let mut order = Vec::with_capacity(layout.ndim());
        order.push(axis.index());
        order.extend((0..layout.ndim()).filter(|&ax| ax != axis.index()));
        Self::with_order_impl(layout, DimVec::from(order))
    }

    /// Cursor walking the axes in the given order; `order[last]` is the
    /// innermost, fastest-varying axis.
    ///
    /// `order` must be a permutation of `0..layout.ndim()`.
    pub fn with_order(layout: &'a Layout, order: &[usize]) -> Cursor<'a> {
        debug_assert_eq!(order.len(), layout.ndim());
        Self::with_order_impl(layout, DimVec::from(order))
    }

    fn with_order_impl(layout: &'a Layout, order: DimVec<usize>) -> Cursor<'a> {
        let n = layout.ndim();
        let start = DimVec::zeros(n);
        let mut lower = DimVec::zeros(n);
        let mut upper = DimVec::zeros(n);
        for i in 0..n {
            lower[i] = -1;
            // an empty layout has no positions: start out of range
            upper[i] = if layout.is_empty() { 0 } else { layout.dims()[i] as isize };
        }
        Cursor {
            layout,
            order,
            subs: start.clone(),
            start,
            lower,
            upper,
        }
    }

    /// Replace the start subscripts (and move there).
    pub fn starting_at(mut self, subs: &[isize]) -> Cursor<'a> {
        debug_assert_eq!(subs.len(), self.layout.ndim());
        self.start = DimVec::from(subs);
        self.subs = self.start.clone();
        self
    }

    /// Replace one axis' exclusive `(lower, upper)` band.
    pub fn bounded(mut self, axis: Axis, lower: isize, upper: isize) -> Cursor<'a> {
        debug_assert!(axis.index() < self.layout.ndim());
        self.lower[axis.index()] = lower;
        self.upper[axis.index()] = upper;
        self
    }

    /// The flat buffer position of the current subscripts.
    ///
    /// Meaningful while the cursor is in range.
    #[inline]
    pub fn pos(&self) -> usize {
        debug_assert!(self.in_range());
        (self.layout.offset() as isize + stride_offset(&self.subs, self.layout.strides())) as usize
    }

    /// The current subscript tuple.
    #[inline]
    pub fn subs(&self) -> &[isize] {
        &self.subs
    }

    /// Whether the major-axis subscript is strictly inside its band.
    #[inline]
    pub fn in_range(&self) -> bool {
        match self.order.first() {
            None => false,
            Some(&major) => {
                self.subs[major] > self.lower[major] && self.subs[major] < self.upper[major]
            }
        }
    }

    /// Step the cursor `n` units forward (or backward for negative `n`)
    /// in its axis order.
    pub fn advance(&mut self, n: isize) {
        if n >= 0 {
            for _ in 0..n {
                self.step_forward();
            }
        } else {
            for _ in 0..-n {
                self.step_backward();
            }
        }
    }

    /// Return to the start subscripts.
    pub fn reset(&mut self) {
        self.subs = self.start.clone();
    }

    fn step_forward(&mut self) {
        for k in (0..self.order.len()).rev() {
            let ax = self.order[k];
            self.subs[ax] += 1;
            if k > 0 && self.subs[ax] >= self.upper[ax] {
                // carry into the next slower axis
                self.subs[ax] = self.lower[ax] + 1;
            } else {
                return;
            }
        }
    }

    fn step_backward(&mut self) {
        for k in (0..self.order.len()).rev() {
            let ax = self.order[k];
            self.subs[ax] -= 1;
            if k > 0 && self.subs[ax] <= self.lower[ax] {
                // borrow from the next slower axis
                self.subs[ax] = self.upper[ax] - 1;
            } else {
                return;
            }
        }
    }
}

impl Iterator for Cursor<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if !self.in_range() {
            return None;
        }
        let pos = self.pos();
        self.step_forward();
        Some(pos)
    }
}

/// Fast cursor for contiguous, non-view layouts.
///
/// Iterates the flat position directly, one element at a time over the
/// whole buffer range of the layout, or by the stride of a single axis
/// (a *lane*) under [`with_major`](FlatCursor::with_major). On a
/// contiguous layout it produces exactly the sequence the general
/// [`Cursor`] produces; it only skips the subscript bookkeeping.
#[derive(Copy, Clone, Debug)]
pub struct FlatCursor {
    base: usize,
    step: usize,
    i: isize,
    n: isize,
}

impl FlatCursor {
    /// Flat walk of a contiguous layout, first element to last.
    pub fn new(layout: &Layout) -> FlatCursor {
        debug_assert!(layout.is_contiguous() || layout.is_empty());
        FlatCursor {
            base: layout.offset(),
            step: 1,
            i: 0,
            n: layout.count() as isize,
        }
    }

    /// Walk along `axis` only, from the layout's first element, stepping
    /// by that axis' stride.
    pub fn with_major(layout: &Layout, axis: Axis) -> FlatCursor {
        debug_assert!(axis.index() < layout.ndim());
        FlatCursor {
            base: layout.offset(),
            step: layout.strides()[axis.index()],
            i: 0,
            n: layout.dims()[axis.index()] as isize,
        }
    }

    /// A lane of `n` positions starting at `base` with the given element
    /// step.
    pub(crate) fn lane(base: usize, step: usize, n: usize) -> FlatCursor {
        FlatCursor { base, step, i: 0, n: n as isize }
    }

    #[inline]
    pub fn pos(&self) -> usize {
        debug_assert!(self.in_range());
        self.base + self.i as usize * self.step
    }

    #[inline]
    pub fn in_range(&self) -> bool {
        self.i > -1 && self.i < self.n
    }

    /// Step `n` units; saturates one past either end, from where the
    /// inverse step re-enters range.
    #[inline]
    pub fn advance(&mut self, n: isize) {
        self.i = (self.i + n).max(-1).min(self.n);
    }

    pub fn reset(&mut self) {
        self.i = 0;
    }
}

impl Iterator for FlatCursor {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if !self.in_range() {
            return None;
        }
        let pos = self.pos();
        self.i += 1;
        Some(pos)
    }
}
