// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Traversal-driven operations: elementwise mapping, folds and
//! reductions, filtering, searching and lock-step comparisons.
//!
//! Everything here is a thin composition over a layout and one or two
//! cursors; the iteration order is the row-major walk of the operand
//! layouts.

use num_traits::{Float, One, Zero};

use crate::axis::Axis;
use crate::cursor::{Cursor, FlatCursor};
use crate::error::ShapeError;
use crate::layout::Layout;
use crate::numeric;
use crate::storage::alloc_vec;
use crate::Array;

impl<A> Array<A> {
    /// A new array of the same shape with `f` applied to every element.
    pub fn map<B, F>(&self, mut f: F) -> Array<B>
    where F: FnMut(&A) -> B
    {
        let layout = Layout::from_shape(self.shape());
        let mut v = Vec::with_capacity(layout.count());
        for pos in Cursor::new(self.layout()) {
            v.push(f(unsafe { self.flat(pos) }));
        }
        Array::from_parts(v, layout)
    }

    /// A new array combining `self` and `rhs` elementwise with `f`.
    ///
    /// **Errors** with `IncompatibleShape` when the shapes differ — there
    /// is no broadcasting.
    pub fn zip_map<B, C, F>(&self, rhs: &Array<B>, mut f: F) -> Result<Array<C>, ShapeError>
    where F: FnMut(&A, &B) -> C
    {
        if self.shape() != rhs.shape() {
            return Err(ShapeError::incompatible_shapes(self.shape(), rhs.shape()));
        }
        let layout = Layout::from_shape(self.shape());
        let mut v = alloc_vec(layout.count())?;
        let mut a = Cursor::new(self.layout());
        let mut b = Cursor::new(rhs.layout());
        while let (Some(pa), Some(pb)) = (a.next(), b.next()) {
            v.push(f(unsafe { self.flat(pa) }, unsafe { rhs.flat(pb) }));
        }
        Ok(Array::from_parts(v, layout))
    }

    /// Fold every element into `init` in row-major walk order.
    pub fn fold<B, F>(&self, init: B, mut f: F) -> B
    where F: FnMut(B, &A) -> B
    {
        let mut acc = init;
        for pos in Cursor::new(self.layout()) {
            acc = f(acc, unsafe { self.flat(pos) });
        }
        acc
    }

    /// Fold the elements left to right, the first element seeding the
    /// accumulator. An empty array yields the element type's default
    /// value.
    pub fn reduce<F>(&self, mut f: F) -> A
    where
        A: Clone + Default,
        F: FnMut(A, &A) -> A,
    {
        let mut cur = Cursor::new(self.layout());
        match cur.next() {
            None => A::default(),
            Some(first) => {
                let mut acc = unsafe { self.flat(first) }.clone();
                for pos in cur {
                    acc = f(acc, unsafe { self.flat(pos) });
                }
                acc
            }
        }
    }

    /// Fold along one axis; the output shape is `self`'s with `axis`
    /// removed (shape `[1]` for a 1-D input).
    ///
    /// Each output element folds the `dims[axis]` input elements of its
    /// lane. `init`, when given, seeds every lane; otherwise the lane's
    /// first element does. An `axis` at or past the rank folds along the
    /// last axis.
    pub fn reduce_axis<F>(&self, axis: Axis, init: Option<A>, mut f: F) -> Array<A>
    where
        A: Clone,
        F: FnMut(A, &A) -> A,
    {
        if self.ndim() == 0 {
            return Array::from_parts(Vec::new(), Layout::from_shape(&[0]));
        }
        let ax = if axis.index() >= self.ndim() {
            Axis(self.ndim() - 1)
        } else {
            axis
        };
        let out_layout = self.layout().remove_axis(ax);
        let lane_len = self.shape()[ax.index()];
        if lane_len == 0 {
            // nothing to fold: the lanes are empty
            return match init {
                Some(x) => {
                    let v = vec![x; out_layout.count()];
                    Array::from_parts(v, out_layout)
                }
                None => Array::from_parts(Vec::new(), Layout::from_shape(&[0])),
            };
        }
        if self.is_empty() {
            return Array::from_parts(Vec::new(), out_layout);
        }
        let lane_stride = self.strides()[ax.index()];
        let outer = self.layout().sans_axis(ax);
        let mut v = Vec::with_capacity(out_layout.count());
        for base in Cursor::new(&outer) {
            let mut lane = FlatCursor::lane(base, lane_stride, lane_len);
            let mut acc = match &init {
                Some(x) => x.clone(),
                None => {
                    // the lane's first position is its base
                    lane.advance(1);
                    unsafe { self.flat(base) }.clone()
                }
            };
            for pos in lane {
                acc = f(acc, unsafe { self.flat(pos) });
            }
            v.push(acc);
        }
        Array::from_parts(v, out_layout)
    }

    /// Sum of all elements; zero for an empty array.
    pub fn sum(&self) -> A
    where A: Clone + Zero
    {
        self.fold(A::zero(), |acc, x| acc + x.clone())
    }

    /// Product of all elements; one for an empty array.
    pub fn product(&self) -> A
    where A: Clone + One
    {
        self.fold(A::one(), |acc, x| acc * x.clone())
    }

    /// A 1-D array of the elements matching the predicate, in walk order.
    /// Empty input or no matches give the empty array.
    pub fn filter<F>(&self, mut pred: F) -> Array<A>
    where
        A: Clone,
        F: FnMut(&A) -> bool,
    {
        let mut v = Vec::with_capacity(self.len());
        for pos in Cursor::new(self.layout()) {
            let x = unsafe { self.flat(pos) };
            if pred(x) {
                v.push(x.clone());
            }
        }
        let layout = Layout::from_shape(&[v.len()]);
        Array::from_parts(v, layout)
    }

    /// A 1-D array of the elements whose mask entry is `true`.
    ///
    /// **Errors** with `IncompatibleShape` when the mask's shape differs.
    pub fn filter_mask(&self, mask: &Array<bool>) -> Result<Array<A>, ShapeError>
    where A: Clone
    {
        if self.shape() != mask.shape() {
            return Err(ShapeError::incompatible_shapes(self.shape(), mask.shape()));
        }
        let mut v = Vec::with_capacity(self.len());
        let mut a = Cursor::new(self.layout());
        let mut m = Cursor::new(mask.layout());
        while let (Some(pa), Some(pm)) = (a.next(), m.next()) {
            if *unsafe { mask.flat(pm) } {
                v.push(unsafe { self.flat(pa) }.clone());
            }
        }
        let layout = Layout::from_shape(&[v.len()]);
        Ok(Array::from_parts(v, layout))
    }

    /// A 1-D array of the flat buffer positions of the elements matching
    /// the predicate — coordinates into this array's (possibly shared)
    /// buffer, composable with [`take_flat`](Array::take_flat).
    pub fn find<F>(&self, mut pred: F) -> Array<usize>
    where F: FnMut(&A) -> bool
    {
        let mut v = Vec::with_capacity(self.len());
        for pos in Cursor::new(self.layout()) {
            if pred(unsafe { self.flat(pos) }) {
                v.push(pos);
            }
        }
        let layout = Layout::from_shape(&[v.len()]);
        Array::from_parts(v, layout)
    }

    /// The flat buffer positions of the elements whose mask entry is
    /// `true`.
    ///
    /// **Errors** with `IncompatibleShape` when the mask's shape differs.
    pub fn find_mask(&self, mask: &Array<bool>) -> Result<Array<usize>, ShapeError> {
        if self.shape() != mask.shape() {
            return Err(ShapeError::incompatible_shapes(self.shape(), mask.shape()));
        }
        let mut v = Vec::with_capacity(self.len());
        let mut a = Cursor::new(self.layout());
        let mut m = Cursor::new(mask.layout());
        while let (Some(pa), Some(pm)) = (a.next(), m.next()) {
            if *unsafe { mask.flat(pm) } {
                v.push(pa);
            }
        }
        let layout = Layout::from_shape(&[v.len()]);
        Ok(Array::from_parts(v, layout))
    }

    /// Whether every element is truthy (differs from the element type's
    /// default value). Vacuously `true` for an empty array.
    pub fn all(&self) -> bool
    where A: Default + PartialEq
    {
        let falsy = A::default();
        self.iter().all(|x| *x != falsy)
    }

    /// Whether any element is truthy; `false` for an empty array.
    pub fn any(&self) -> bool
    where A: Default + PartialEq
    {
        let falsy = A::default();
        self.iter().any(|x| *x != falsy)
    }

    /// Short-circuiting lock-step test of `pred` over every element pair.
    /// Unequal shapes are `false`; two empty arrays are `true`.
    pub fn all_match<B, F>(&self, rhs: &Array<B>, mut pred: F) -> bool
    where F: FnMut(&A, &B) -> bool
    {
        if self.shape() != rhs.shape() {
            return false;
        }
        let mut a = Cursor::new(self.layout());
        let mut b = Cursor::new(rhs.layout());
        while let (Some(pa), Some(pb)) = (a.next(), b.next()) {
            if !pred(unsafe { self.flat(pa) }, unsafe { rhs.flat(pb) }) {
                return false;
            }
        }
        true
    }

    /// Short-circuiting lock-step test for any element pair matching
    /// `pred`. Unequal shapes and empty arrays are `false`.
    pub fn any_match<B, F>(&self, rhs: &Array<B>, mut pred: F) -> bool
    where F: FnMut(&A, &B) -> bool
    {
        if self.shape() != rhs.shape() {
            return false;
        }
        let mut a = Cursor::new(self.layout());
        let mut b = Cursor::new(rhs.layout());
        while let (Some(pa), Some(pb)) = (a.next(), b.next()) {
            if pred(unsafe { self.flat(pa) }, unsafe { rhs.flat(pb) }) {
                return true;
            }
        }
        false
    }

    /// Whether the two arrays are shape-equal and element-equal.
    pub fn all_equal(&self, rhs: &Array<A>) -> bool
    where A: PartialEq
    {
        self.all_match(rhs, |a, b| a == b)
    }

    /// Elementwise approximate equality `|a - b| <= atol + rtol * |b|`.
    ///
    /// **Errors** with `IncompatibleShape` when the shapes differ.
    pub fn close(&self, rhs: &Array<A>, atol: A, rtol: A) -> Result<Array<bool>, ShapeError>
    where A: Float
    {
        self.zip_map(rhs, |a, b| numeric::close(*a, *b, atol, rtol))
    }

    /// [`close`](Array::close) with the crate's default tolerances.
    pub fn close_default(&self, rhs: &Array<A>) -> Result<Array<bool>, ShapeError>
    where A: Float
    {
        self.close(rhs, default_atol(), default_rtol())
    }

    /// Whether every element pair is [`close`](numeric::close). Unequal
    /// shapes are `false`; two empty arrays are `true`.
    pub fn all_close(&self, rhs: &Array<A>, atol: A, rtol: A) -> bool
    where A: Float
    {
        self.all_match(rhs, |a, b| numeric::close(*a, *b, atol, rtol))
    }

    /// [`all_close`](Array::all_close) with the crate's default
    /// tolerances.
    pub fn all_close_default(&self, rhs: &Array<A>) -> bool
    where A: Float
    {
        self.all_close(rhs, default_atol(), default_rtol())
    }

    /// Elementwise `==`, as an array of `bool`.
    pub fn elem_eq(&self, rhs: &Array<A>) -> Result<Array<bool>, ShapeError>
    where A: PartialEq
    {
        self.zip_map(rhs, |a, b| a == b)
    }

    /// Elementwise `!=`, as an array of `bool`.
    pub fn elem_ne(&self, rhs: &Array<A>) -> Result<Array<bool>, ShapeError>
    where A: PartialEq
    {
        self.zip_map(rhs, |a, b| a != b)
    }

    /// Elementwise `<`, as an array of `bool`.
    pub fn elem_lt(&self, rhs: &Array<A>) -> Result<Array<bool>, ShapeError>
    where A: PartialOrd
    {
        self.zip_map(rhs, |a, b| a < b)
    }

    /// Elementwise `<=`, as an array of `bool`.
    pub fn elem_le(&self, rhs: &Array<A>) -> Result<Array<bool>, ShapeError>
    where A: PartialOrd
    {
        self.zip_map(rhs, |a, b| a <= b)
    }

    /// Elementwise `>`, as an array of `bool`.
    pub fn elem_gt(&self, rhs: &Array<A>) -> Result<Array<bool>, ShapeError>
    where A: PartialOrd
    {
        self.zip_map(rhs, |a, b| a > b)
    }

    /// Elementwise `>=`, as an array of `bool`.
    pub fn elem_ge(&self, rhs: &Array<A>) -> Result<Array<bool>, ShapeError>
    where A: PartialOrd
    {
        self.zip_map(rhs, |a, b| a >= b)
    }
}

fn default_atol<A: Float>() -> A {
    A::from(numeric::DEFAULT_ATOL).unwrap()
}

fn default_rtol<A: Float>() -> A {
    A::from(numeric::DEFAULT_RTOL).unwrap()
}

/// Whole-array equality: shape-equal and element-equal.
impl<A, B> PartialEq<Array<B>> for Array<A>
where A: PartialEq<B>
{
    fn eq(&self, rhs: &Array<B>) -> bool {
        self.all_match(rhs, |a, b| a == b)
    }
}

impl<A: Eq> Eq for Array<A> {}
