// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::ops::*;

use num_complex::Complex;

use crate::Array;

/// Elements that can be used as direct operands in arithmetic with arrays.
///
/// For example, `f64` is a `ScalarOperand` which means that for an array
/// `a`, arithmetic like `&a + 1.0`, and, `&a * 2.`, and `a += 3.` are
/// allowed.
///
/// `ScalarOperand` determines for which scalars `K` operations `&A @ K`
/// and `A @= K` are defined, as ***right hand side operands***, for
/// applicable arithmetic operators (denoted `@`).
///
/// ***Left hand side*** scalar operands are not related to this trait
/// (they need one `impl` per concrete scalar type); but they are still
/// implemented for the same types, allowing operations `K @ &A` and
/// `K @ A` for the primitive numeric types `K`.
///
/// This trait ***does not*** limit which elements can be stored in an
/// array in general. Non-`ScalarOperand` types can still participate in
/// arithmetic as array elements in array-array operations.
pub trait ScalarOperand: 'static + Clone {}
impl ScalarOperand for bool {}
impl ScalarOperand for i8 {}
impl ScalarOperand for u8 {}
impl ScalarOperand for i16 {}
impl ScalarOperand for u16 {}
impl ScalarOperand for i32 {}
impl ScalarOperand for u32 {}
impl ScalarOperand for i64 {}
impl ScalarOperand for u64 {}
impl ScalarOperand for i128 {}
impl ScalarOperand for u128 {}
impl ScalarOperand for isize {}
impl ScalarOperand for usize {}
impl ScalarOperand for f32 {}
impl ScalarOperand for f64 {}
impl ScalarOperand for Complex<f32> {}
impl ScalarOperand for Complex<f64> {}

macro_rules! impl_binary_op(
    ($trt:ident, $operator:tt, $mth:ident, $doc:expr) => (
/// Perform elementwise
#[doc=$doc]
/// between references `self` and `rhs`,
/// and return the result as a new array.
///
/// **Panics** if the shapes disagree; there is no broadcasting.
impl<'a, 'b, A, B> $trt<&'b Array<B>> for &'a Array<A>
where
    A: Clone + $trt<B>,
    B: Clone,
{
    type Output = Array<<A as $trt<B>>::Output>;
    fn $mth(self, rhs: &'b Array<B>) -> Self::Output
    {
        match self.zip_map(rhs, |a, b| a.clone() $operator b.clone()) {
            Ok(out) => out,
            Err(e) => panic!("{}", e),
        }
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and `rhs`,
/// and return the result as a new array.
///
/// **Panics** if the shapes disagree; there is no broadcasting.
impl<A, B> $trt<Array<B>> for Array<A>
where
    A: Clone + $trt<B>,
    B: Clone,
{
    type Output = Array<<A as $trt<B>>::Output>;
    fn $mth(self, rhs: Array<B>) -> Self::Output
    {
        (&self).$mth(&rhs)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and reference `rhs`,
/// and return the result as a new array.
///
/// **Panics** if the shapes disagree; there is no broadcasting.
impl<'a, A, B> $trt<&'a Array<B>> for Array<A>
where
    A: Clone + $trt<B>,
    B: Clone,
{
    type Output = Array<<A as $trt<B>>::Output>;
    fn $mth(self, rhs: &'a Array<B>) -> Self::Output
    {
        (&self).$mth(rhs)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between reference `self` and `rhs`,
/// and return the result as a new array.
///
/// **Panics** if the shapes disagree; there is no broadcasting.
impl<'a, A, B> $trt<Array<B>> for &'a Array<A>
where
    A: Clone + $trt<B>,
    B: Clone,
{
    type Output = Array<<A as $trt<B>>::Output>;
    fn $mth(self, rhs: Array<B>) -> Self::Output
    {
        self.$mth(&rhs)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between reference `self` and the scalar `rhs`,
/// and return the result as a new array.
impl<'a, A, B> $trt<B> for &'a Array<A>
where
    A: Clone + $trt<B>,
    B: ScalarOperand,
{
    type Output = Array<<A as $trt<B>>::Output>;
    fn $mth(self, rhs: B) -> Self::Output
    {
        self.map(|a| a.clone() $operator rhs.clone())
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and the scalar `rhs`,
/// and return the result as a new array.
impl<A, B> $trt<B> for Array<A>
where
    A: Clone + $trt<B>,
    B: ScalarOperand,
{
    type Output = Array<<A as $trt<B>>::Output>;
    fn $mth(self, rhs: B) -> Self::Output
    {
        (&self).$mth(rhs)
    }
}
    );
);

impl_binary_op!(Add, +, add, "addition");
impl_binary_op!(Sub, -, sub, "subtraction");
impl_binary_op!(Mul, *, mul, "multiplication");
impl_binary_op!(Div, /, div, "division");
impl_binary_op!(Rem, %, rem, "remainder");
impl_binary_op!(BitAnd, &, bitand, "bit and");
impl_binary_op!(BitOr, |, bitor, "bit or");
impl_binary_op!(BitXor, ^, bitxor, "bit xor");
impl_binary_op!(Shl, <<, shl, "left shift");
impl_binary_op!(Shr, >>, shr, "right shift");

macro_rules! impl_scalar_lhs_op {
    ($scalar:ty, $trt:ident, $operator:tt, $mth:ident) => (
impl<'a> $trt<&'a Array<$scalar>> for $scalar {
    type Output = Array<$scalar>;
    fn $mth(self, rhs: &'a Array<$scalar>) -> Array<$scalar>
    {
        rhs.map(|b| self $operator b.clone())
    }
}

impl $trt<Array<$scalar>> for $scalar {
    type Output = Array<$scalar>;
    fn $mth(self, rhs: Array<$scalar>) -> Array<$scalar>
    {
        self.$mth(&rhs)
    }
}
    );
}

macro_rules! impl_scalar_lhs_arith {
    ($($scalar:ty),*) => {
        $(
            impl_scalar_lhs_op!($scalar, Add, +, add);
            impl_scalar_lhs_op!($scalar, Sub, -, sub);
            impl_scalar_lhs_op!($scalar, Mul, *, mul);
            impl_scalar_lhs_op!($scalar, Div, /, div);
            impl_scalar_lhs_op!($scalar, Rem, %, rem);
        )*
    };
}

macro_rules! impl_scalar_lhs_bits {
    ($($scalar:ty),*) => {
        $(
            impl_scalar_lhs_op!($scalar, BitAnd, &, bitand);
            impl_scalar_lhs_op!($scalar, BitOr, |, bitor);
            impl_scalar_lhs_op!($scalar, BitXor, ^, bitxor);
        )*
    };
}

impl_scalar_lhs_arith!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize, f32, f64, Complex<f32>, Complex<f64>);
impl_scalar_lhs_bits!(bool, i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);

macro_rules! impl_assign_op {
    ($trt:ident, $method:ident, $binop_trt:ident, $binop_mth:ident, $doc:expr) => {
/// Perform
#[doc=$doc]
/// between `self` and reference `rhs`, rebinding `self` to the
/// elementwise result.
///
/// **Panics** if the shapes disagree; there is no broadcasting.
impl<'a, A, B> $trt<&'a Array<B>> for Array<A>
where
    A: Clone + $binop_trt<B, Output = A>,
    B: Clone,
{
    fn $method(&mut self, rhs: &'a Array<B>)
    {
        *self = (&*self).$binop_mth(rhs);
    }
}

/// Perform
#[doc=$doc]
/// between `self` and `rhs`, rebinding `self` to the elementwise
/// result.
///
/// **Panics** if the shapes disagree; there is no broadcasting.
impl<A, B> $trt<Array<B>> for Array<A>
where
    A: Clone + $binop_trt<B, Output = A>,
    B: Clone,
{
    fn $method(&mut self, rhs: Array<B>)
    {
        self.$method(&rhs);
    }
}

/// Perform
#[doc=$doc]
/// between `self` and the scalar `rhs`, rebinding `self` to the
/// elementwise result.
impl<A, B> $trt<B> for Array<A>
where
    A: Clone + $binop_trt<B, Output = A>,
    B: ScalarOperand,
{
    fn $method(&mut self, rhs: B)
    {
        *self = (&*self).$binop_mth(rhs);
    }
}
    };
}

impl_assign_op!(AddAssign, add_assign, Add, add, "addition");
impl_assign_op!(SubAssign, sub_assign, Sub, sub, "subtraction");
impl_assign_op!(MulAssign, mul_assign, Mul, mul, "multiplication");
impl_assign_op!(DivAssign, div_assign, Div, div, "division");
impl_assign_op!(RemAssign, rem_assign, Rem, rem, "remainder");
impl_assign_op!(BitAndAssign, bitand_assign, BitAnd, bitand, "bit and");
impl_assign_op!(BitOrAssign, bitor_assign, BitOr, bitor, "bit or");
impl_assign_op!(BitXorAssign, bitxor_assign, BitXor, bitxor, "bit xor");
impl_assign_op!(ShlAssign, shl_assign, Shl, shl, "left shift");
impl_assign_op!(ShrAssign, shr_assign, Shr, shr, "right shift");

/// Perform elementwise negation of reference `self` and return the result
/// as a new array.
impl<'a, A> Neg for &'a Array<A>
where A: Clone + Neg
{
    type Output = Array<<A as Neg>::Output>;
    fn neg(self) -> Self::Output
    {
        self.map(|a| -a.clone())
    }
}

/// Perform elementwise negation of `self` and return the result as a new
/// array.
impl<A> Neg for Array<A>
where A: Clone + Neg
{
    type Output = Array<<A as Neg>::Output>;
    fn neg(self) -> Self::Output
    {
        (&self).neg()
    }
}

/// Perform elementwise unary not of reference `self` and return the
/// result as a new array.
impl<'a, A> Not for &'a Array<A>
where A: Clone + Not
{
    type Output = Array<<A as Not>::Output>;
    fn not(self) -> Self::Output
    {
        self.map(|a| !a.clone())
    }
}

/// Perform elementwise unary not of `self` and return the result as a new
/// array.
impl<A> Not for Array<A>
where A: Clone + Not
{
    type Output = Array<<A as Not>::Output>;
    fn not(self) -> Self::Output
    {
        (&self).not()
    }
}
