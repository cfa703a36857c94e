// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::numeric::wrap_index;

/// An inclusive range of an array axis, with step size.
///
/// Fields are `start`, `stop` and `step`, where both bounds are included
/// and negative `start` or `stop` are counted from the back of the axis
/// (they wrap into `[0, n)` when the interval is applied to an axis of
/// length `n`).
///
/// ## Examples
///
/// `Interval::new(a, b, 2)` is every second element from `a` through `b`.
/// It can also be created with `Interval::from(a..=b).step_by(2)`. The
/// Python equivalent is `[a:b+1:2]`.
///
/// `Interval::from(..)` is the full range of an axis: it runs from the
/// first element through the last (`stop` of `-1` counts from the back).
///
/// `Interval::index(i)` selects the single subscript `i`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    /// first index; negative values are counted from the back of the axis
    pub start: isize,
    /// last index, included; negative values are counted from the back of
    /// the axis
    pub stop: isize,
    /// step size in elements; the default is 1, for every element
    pub step: isize,
}

impl Interval {
    /// Create a new `Interval` with the given bounds.
    ///
    /// `step` must be nonzero.
    /// (This method checks with a debug assertion that `step` is not zero.)
    pub fn new(start: isize, stop: isize, step: isize) -> Interval {
        debug_assert_ne!(step, 0, "Interval::new: step must be nonzero");
        Interval { start, stop, step }
    }

    /// The interval selecting the single subscript `i`.
    #[inline]
    pub fn index(i: isize) -> Interval {
        Interval { start: i, stop: i, step: 1 }
    }

    /// The full range of an axis.
    #[inline]
    pub fn full() -> Interval {
        Interval { start: 0, stop: -1, step: 1 }
    }

    /// Create a new `Interval` with the given step size (multiplied with
    /// the previous step size).
    ///
    /// `step` must be nonzero.
    /// (This method checks with a debug assertion that `step` is not zero.)
    #[inline]
    pub fn step_by(self, step: isize) -> Self {
        debug_assert_ne!(step, 0, "Interval::step_by: step must be nonzero");
        Interval { step: self.step * step, ..self }
    }

    /// Canonicalise to a positive step.
    ///
    /// A backward interval is turned around; a forward interval is returned
    /// unchanged.
    #[inline]
    pub fn forward(self) -> Self {
        if self.step < 0 {
            self.reverse()
        } else {
            self
        }
    }

    /// The same range walked in the opposite direction.
    #[inline]
    pub fn reverse(self) -> Self {
        Interval {
            start: self.stop,
            stop: self.start,
            step: -self.step,
        }
    }

    /// Wrap `start` and `stop` into `[0, n)` by Euclidean modulo; `step`
    /// is unchanged.
    #[inline]
    pub fn wrap(self, n: usize) -> Self {
        Interval {
            start: wrap_index(self.start, n) as isize,
            stop: wrap_index(self.stop, n) as isize,
            step: self.step,
        }
    }

    /// Number of subscripts selected by a canonicalised (forward, wrapped)
    /// interval.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        debug_assert!(self.step > 0 && self.start <= self.stop);
        ((self.stop - self.start) / self.step + 1) as usize
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.stop)?;
        if self.step != 1 {
            write!(f, ";{}", self.step)?;
        }
        Ok(())
    }
}

impl From<isize> for Interval {
    #[inline]
    fn from(i: isize) -> Interval {
        Interval::index(i)
    }
}

impl From<i32> for Interval {
    #[inline]
    fn from(i: i32) -> Interval {
        Interval::index(i as isize)
    }
}

impl From<usize> for Interval {
    #[inline]
    fn from(i: usize) -> Interval {
        Interval::index(i as isize)
    }
}

macro_rules! impl_interval_from_range {
    ($index:ty) => {
        impl From<Range<$index>> for Interval {
            #[inline]
            fn from(r: Range<$index>) -> Interval {
                let (start, end) = (r.start as isize, r.end as isize);
                if start >= 0 && end <= start {
                    // an empty range has no inclusive spelling; this
                    // degenerate interval slices to the empty layout
                    Interval { start: 1, stop: 0, step: 1 }
                } else {
                    Interval { start, stop: end - 1, step: 1 }
                }
            }
        }

        impl From<RangeInclusive<$index>> for Interval {
            #[inline]
            fn from(r: RangeInclusive<$index>) -> Interval {
                Interval {
                    start: *r.start() as isize,
                    stop: *r.end() as isize,
                    step: 1,
                }
            }
        }

        impl From<RangeFrom<$index>> for Interval {
            #[inline]
            fn from(r: RangeFrom<$index>) -> Interval {
                Interval {
                    start: r.start as isize,
                    stop: -1,
                    step: 1,
                }
            }
        }

        impl From<RangeTo<$index>> for Interval {
            #[inline]
            fn from(r: RangeTo<$index>) -> Interval {
                Interval::from(0..r.end)
            }
        }

        impl From<RangeToInclusive<$index>> for Interval {
            #[inline]
            fn from(r: RangeToInclusive<$index>) -> Interval {
                Interval {
                    start: 0,
                    stop: r.end as isize,
                    step: 1,
                }
            }
        }
    };
}
impl_interval_from_range!(isize);
impl_interval_from_range!(usize);
impl_interval_from_range!(i32);

impl From<RangeFull> for Interval {
    #[inline]
    fn from(_: RangeFull) -> Interval {
        Interval::full()
    }
}

#[cfg(test)]
mod tests {
    use super::Interval;

    #[test]
    fn forward_turns_backward_intervals_around() {
        assert_eq!(Interval::new(5, 1, -2).forward(), Interval::new(1, 5, 2));
        assert_eq!(Interval::new(1, 5, 2).forward(), Interval::new(1, 5, 2));
    }

    #[test]
    fn reverse_is_involutive() {
        let iv = Interval::new(2, 7, 3);
        assert_eq!(iv.reverse().reverse(), iv);
    }

    #[test]
    fn wrap_is_euclidean() {
        assert_eq!(Interval::new(-1, -1, 1).wrap(4), Interval::new(3, 3, 1));
        assert_eq!(Interval::new(-5, 2, 1).wrap(4), Interval::new(3, 2, 1));
        assert_eq!(Interval::new(0, 5, 1).wrap(4), Interval::new(0, 1, 1));
    }

    #[test]
    fn range_conversions() {
        assert_eq!(Interval::from(1..3), Interval::new(1, 2, 1));
        assert_eq!(Interval::from(1..=3), Interval::new(1, 3, 1));
        assert_eq!(Interval::from(..), Interval::new(0, -1, 1));
        assert_eq!(Interval::from(2..), Interval::new(2, -1, 1));
        assert_eq!(Interval::from(..3), Interval::new(0, 2, 1));
        assert_eq!(Interval::from(3), Interval::new(3, 3, 1));
    }

    #[test]
    fn empty_range_is_degenerate() {
        let iv = Interval::from(0..0);
        assert!(iv.forward().start > iv.forward().stop);
    }
}
