// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape-changing operations: reshape, resize, transpose, append, insert,
//! remove and the raw elementwise copies.
//!
//! Each operation documents whether its result shares the source buffer
//! or is freshly allocated. None of them writes into a destination before
//! all validation has passed, so a failure leaves every operand untouched.

use crate::axis::Axis;
use crate::cursor::Cursor;
use crate::dim_vec::DimVec;
use crate::error::ShapeError;
use crate::layout::Layout;
use crate::storage::alloc_vec;
use crate::Array;

impl<A> Array<A> {
    /// The same elements under a new shape of equal count.
    ///
    /// An equal shape returns a shared handle. A non-view source returns
    /// a new handle over the same buffer with a fresh row-major layout.
    /// A view source is copied element by element, walking the old and
    /// new layouts in lock step, into a fresh buffer — the only way a
    /// non-contiguous view reshapes correctly.
    ///
    /// **Errors** with `IncompatibleShape` when the counts differ.
    pub fn reshape(&self, shape: &[usize]) -> Result<Array<A>, ShapeError>
    where A: Clone
    {
        let layout = Layout::from_shape(shape);
        if layout.count() != self.len() {
            return Err(ShapeError::incompatible_shapes(self.shape(), shape));
        }
        if shape == self.shape() {
            return Ok(self.clone());
        }
        if self.is_view() {
            let mut v = alloc_vec(layout.count())?;
            for pos in Cursor::new(self.layout()) {
                v.push(unsafe { self.flat(pos) }.clone());
            }
            Ok(Self::from_parts(v, layout))
        } else {
            Ok(self.with_layout(layout))
        }
    }

    /// A freshly allocated array of the new shape, filled from `self` in
    /// default walk order until either side is exhausted; any remaining
    /// destination elements are the element type's default value.
    ///
    /// The result never aliases `self`.
    pub fn resize(&self, shape: &[usize]) -> Result<Array<A>, ShapeError>
    where A: Clone + Default
    {
        let layout = Layout::from_shape(shape);
        let mut v = alloc_vec(layout.count())?;
        let mut src = Cursor::new(self.layout());
        for _ in 0..layout.count() {
            match src.next() {
                Some(pos) => v.push(unsafe { self.flat(pos) }.clone()),
                None => v.push(A::default()),
            }
        }
        Ok(Self::from_parts(v, layout))
    }

    /// The axes reordered so that `result.shape()[i] = self.shape()[order[i]]`.
    ///
    /// The result is a freshly allocated contiguous array: the source is
    /// walked with `order` as the cursor's axis order and the destination
    /// row-major. An `order` that is not a permutation of the axes gives
    /// the empty array.
    pub fn transpose(&self, order: &[usize]) -> Array<A>
    where A: Clone
    {
        let layout = self.layout().permute(order);
        if layout.is_empty() {
            return Self::from_parts(Vec::new(), layout);
        }
        let mut v = Vec::with_capacity(layout.count());
        for pos in Cursor::with_order(self.layout(), order) {
            v.push(unsafe { self.flat(pos) }.clone());
        }
        Self::from_parts(v, layout)
    }

    /// `self` and `other` joined along `axis`.
    ///
    /// The shapes must agree on every other axis. The result is freshly
    /// allocated with `dims[axis]` the sum of the two operands'.
    ///
    /// **Errors** with `OutOfBounds` for an invalid axis and
    /// `IncompatibleShape` for disagreeing shapes.
    pub fn append(&self, other: &Array<A>, axis: Axis) -> Result<Array<A>, ShapeError>
    where A: Clone
    {
        let ax = axis.usable_for(self.ndim())?;
        self.check_same_but(other, ax)?;
        let layout = self.layout().grow_axis(axis, other.shape()[ax] as isize);
        let mut v = alloc_vec(layout.count())?;
        let split = self.shape()[ax] as isize;
        let mut dst = Cursor::new(&layout);
        while dst.in_range() {
            let subs = dst.subs();
            let value = if subs[ax] < split {
                unsafe { self.flat(self.layout().offset_of(subs)) }.clone()
            } else {
                let mut s = DimVec::from(subs);
                s[ax] -= split;
                unsafe { other.flat(other.layout().offset_of(&s)) }.clone()
            };
            v.push(value);
            dst.advance(1);
        }
        Ok(Self::from_parts(v, layout))
    }

    /// `self` and `other` flattened and concatenated into a 1-D array of
    /// `self.len() + other.len()` elements.
    pub fn append_flat(&self, other: &Array<A>) -> Array<A>
    where A: Clone
    {
        let layout = Layout::from_shape(&[self.len() + other.len()]);
        let mut v = Vec::with_capacity(self.len() + other.len());
        v.extend(self.iter().cloned());
        v.extend(other.iter().cloned());
        Self::from_parts(v, layout)
    }

    /// `other` spliced into `self` so that it occupies
    /// `[position, position + other.shape()[axis])` along `axis`.
    ///
    /// The shapes must agree on every other axis.
    ///
    /// **Errors** with `OutOfBounds` when `position` is past the end of
    /// the axis, and `IncompatibleShape` for disagreeing shapes.
    pub fn insert(&self, other: &Array<A>, position: usize, axis: Axis) -> Result<Array<A>, ShapeError>
    where A: Clone
    {
        let ax = axis.usable_for(self.ndim())?;
        self.check_same_but(other, ax)?;
        if position > self.shape()[ax] {
            return Err(ShapeError::out_of_bounds(self.shape()[ax], position));
        }
        let inserted = other.shape()[ax];
        let layout = self.layout().grow_axis(axis, inserted as isize);
        let mut v = alloc_vec(layout.count())?;
        let lo = position as isize;
        let hi = lo + inserted as isize;
        let mut dst = Cursor::new(&layout);
        while dst.in_range() {
            let subs = dst.subs();
            let value = if subs[ax] < lo {
                unsafe { self.flat(self.layout().offset_of(subs)) }.clone()
            } else if subs[ax] < hi {
                let mut s = DimVec::from(subs);
                s[ax] -= lo;
                unsafe { other.flat(other.layout().offset_of(&s)) }.clone()
            } else {
                let mut s = DimVec::from(subs);
                s[ax] -= inserted as isize;
                unsafe { self.flat(self.layout().offset_of(&s)) }.clone()
            };
            v.push(value);
            dst.advance(1);
        }
        Ok(Self::from_parts(v, layout))
    }

    /// `other` flattened and spliced into flattened `self` at the given
    /// flat position; the result is 1-D.
    ///
    /// **Errors** with `OutOfBounds` when `position > self.len()`.
    pub fn insert_flat(&self, other: &Array<A>, position: usize) -> Result<Array<A>, ShapeError>
    where A: Clone
    {
        if position > self.len() {
            return Err(ShapeError::out_of_bounds(self.len(), position));
        }
        let layout = Layout::from_shape(&[self.len() + other.len()]);
        let mut v = alloc_vec(layout.count())?;
        let mut it = self.iter();
        v.extend(it.by_ref().take(position).cloned());
        v.extend(other.iter().cloned());
        v.extend(it.cloned());
        Ok(Self::from_parts(v, layout))
    }

    /// `count` positions removed from `axis` starting at `position`.
    ///
    /// Both `position` and `count` are clamped to the axis extent, so the
    /// call never fails on a range that overshoots the end; removing
    /// everything yields the empty array.
    pub fn remove(&self, position: usize, count: usize, axis: Axis) -> Result<Array<A>, ShapeError>
    where A: Clone
    {
        let ax = axis.usable_for(self.ndim())?;
        let dim = self.shape()[ax];
        let position = position.min(dim);
        let removed = count.min(dim - position);
        let layout = self.layout().grow_axis(axis, -(removed as isize));
        let mut v = alloc_vec(layout.count())?;
        let lo = position as isize;
        let mut dst = Cursor::new(&layout);
        while dst.in_range() {
            let mut s = DimVec::from(dst.subs());
            if s[ax] >= lo {
                // skip the removed band of the source
                s[ax] += removed as isize;
            }
            v.push(unsafe { self.flat(self.layout().offset_of(&s)) }.clone());
            dst.advance(1);
        }
        Ok(Self::from_parts(v, layout))
    }

    /// The flat analogue of [`remove`](Array::remove): `count` elements
    /// removed from the flattened array starting at flat `position`, with
    /// the same clamping.
    pub fn remove_flat(&self, position: usize, count: usize) -> Result<Array<A>, ShapeError>
    where A: Clone
    {
        let dim = self.len();
        let position = position.min(dim);
        let removed = count.min(dim - position);
        let layout = Layout::from_shape(&[dim - removed]);
        let mut v = alloc_vec(layout.count())?;
        let mut it = self.iter();
        v.extend(it.by_ref().take(position).cloned());
        let it = it.skip(removed);
        v.extend(it.cloned());
        Ok(Self::from_parts(v, layout))
    }

    /// Elementwise copy from `src` into `self`'s buffer, both walked in
    /// default order, until either side is exhausted. Shapes are not
    /// consulted and nothing rebinds.
    pub fn copy_from(&mut self, src: &Array<A>)
    where A: Clone
    {
        let mut dst = Cursor::new(self.layout());
        let mut s = Cursor::new(src.layout());
        while let (Some(d), Some(p)) = (dst.next(), s.next()) {
            unsafe {
                *self.flat_ptr(d) = src.flat(p).clone();
            }
        }
    }

    /// Like [`copy_from`](Array::copy_from), except that a destination
    /// that is *not* a view is first rebound to a fresh buffer of `src`'s
    /// shape — after which the copy fills it completely. A view
    /// destination keeps its identity and receives the lock-step copy.
    pub fn set_from(&mut self, src: &Array<A>)
    where A: Clone
    {
        if self.is_view() {
            self.copy_from(src);
        } else {
            *self = src.to_owned();
        }
    }

    fn with_layout(&self, layout: Layout) -> Array<A> {
        let mut out = self.clone();
        out.set_layout(layout);
        out
    }

    fn check_same_but(&self, other: &Array<A>, ax: usize) -> Result<(), ShapeError> {
        if other.ndim() != self.ndim() {
            return Err(ShapeError::incompatible_shapes(self.shape(), other.shape()));
        }
        for i in 0..self.ndim() {
            if i != ax && self.shape()[i] != other.shape()[i] {
                return Err(ShapeError::incompatible_shapes(self.shape(), other.shape()));
            }
        }
        Ok(())
    }
}
