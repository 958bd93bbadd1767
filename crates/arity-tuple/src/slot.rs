// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Validated Component Slots
//!
//! `Slot<N>` is a zero-cost wrapper around `usize` that is guaranteed to
//! address one of the `N` components of a tuple. Constructing a slot from a
//! runtime index is the only place where the index is range-checked, so the
//! dispatch tables behind `TupleRead::component` and
//! `TupleWrite::set_component` never see an out-of-range value.
//!
//! ## Arity markers
//!
//! `Dimension<N>` is a zero-sized marker used in `where` clauses to gate
//! arity-specific items at compile time:
//!
//! - `SupportedArity` holds for `Dimension<2>`, `Dimension<3>`, `Dimension<4>`.
//! - `HasThird` holds for `Dimension<3>` and `Dimension<4>`.
//! - `HasFourth` holds for `Dimension<4>`.
//!
//! ```rust
//! use arity_tuple::slot::Slot;
//!
//! let third = Slot::<3>::THIRD;
//! assert_eq!(third.index(), 2);
//! assert_eq!(third.name(), "third");
//! assert!(Slot::<3>::new(3).is_err());
//! ```
//!
//! Naming a slot the arity does not have is rejected by the compiler:
//!
//! ```compile_fail
//! use arity_tuple::slot::Slot;
//!
//! let fourth = Slot::<3>::FOURTH;
//! ```
//!
//! Slots only exist for the supported arities:
//!
//! ```compile_fail
//! use arity_tuple::slot::Slot;
//!
//! let fifth = Slot::<5>::new(4);
//! ```

use crate::error::{Result, TupleError};
use std::iter::FusedIterator;

/// Zero-sized marker carrying a tuple arity at the type level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Dimension<const N: usize>;

/// Implemented for the arities the tuple contracts support.
pub trait SupportedArity {}

/// Implemented for arities that have a third component.
pub trait HasThird: SupportedArity {}

/// Implemented for arities that have a fourth component.
pub trait HasFourth: HasThird {}

impl SupportedArity for Dimension<2> {}
impl SupportedArity for Dimension<3> {}
impl SupportedArity for Dimension<4> {}

impl HasThird for Dimension<3> {}
impl HasThird for Dimension<4> {}

impl HasFourth for Dimension<4> {}

/// A component index known to lie in `[0, N)`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot<const N: usize> {
    index: usize,
}

impl<const N: usize> Slot<N>
where
    Dimension<N>: SupportedArity,
{
    /// Creates a slot from a runtime index.
    ///
    /// # Errors
    ///
    /// Returns `TupleError::IndexOutOfRange` if `index >= N`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arity_tuple::slot::Slot;
    /// assert_eq!(Slot::<2>::new(1).map(|s| s.index()), Ok(1));
    /// assert!(Slot::<2>::new(2).is_err());
    /// ```
    #[inline(always)]
    pub const fn new(index: usize) -> Result<Self> {
        if index < N {
            Ok(Self { index })
        } else {
            Err(TupleError::IndexOutOfRange {
                index,
                dimensions: N,
            })
        }
    }

    /// Creates a slot without range-checking `index` in release builds.
    ///
    /// Callers must guarantee `index < N`.
    #[inline(always)]
    pub(crate) const fn new_unchecked(index: usize) -> Self {
        debug_assert!(index < N, "called `Slot::new_unchecked` with an index out of range");
        Self { index }
    }

    /// Returns the zero-based index of the slot.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Returns the name of the slot (`"first"` .. `"fourth"`).
    #[inline]
    pub const fn name(self) -> &'static str {
        match self.index {
            0 => "first",
            1 => "second",
            2 => "third",
            _ => "fourth",
        }
    }

    /// Returns an iterator over all slots in order `0..N`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arity_tuple::slot::Slot;
    /// let names: Vec<_> = Slot::<3>::all().map(|s| s.name()).collect();
    /// assert_eq!(names, ["first", "second", "third"]);
    /// ```
    #[inline]
    pub const fn all() -> Slots<N> {
        Slots { front: 0, back: N }
    }
}

impl<const N: usize> Slot<N>
where
    Dimension<N>: SupportedArity,
{
    /// The first component.
    pub const FIRST: Self = Self { index: 0 };
    /// The second component.
    pub const SECOND: Self = Self { index: 1 };
}

impl<const N: usize> Slot<N>
where
    Dimension<N>: HasThird,
{
    /// The third component.
    pub const THIRD: Self = Self { index: 2 };
}

impl<const N: usize> Slot<N>
where
    Dimension<N>: HasFourth,
{
    /// The fourth component.
    pub const FOURTH: Self = Self { index: 3 };
}

impl<const N: usize> std::fmt::Debug for Slot<N>
where
    Dimension<N>: SupportedArity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.index)
    }
}

impl<const N: usize> std::fmt::Display for Slot<N>
where
    Dimension<N>: SupportedArity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.index)
    }
}

impl<const N: usize> TryFrom<usize> for Slot<N>
where
    Dimension<N>: SupportedArity,
{
    type Error = TupleError;

    #[inline]
    fn try_from(index: usize) -> Result<Self> {
        Self::new(index)
    }
}

impl<const N: usize> From<Slot<N>> for usize {
    #[inline]
    fn from(slot: Slot<N>) -> Self {
        slot.index
    }
}

/// An iterator over the slots of an `N`-component tuple, in index order.
#[derive(Clone, Debug)]
pub struct Slots<const N: usize> {
    front: usize,
    back: usize,
}

impl<const N: usize> Iterator for Slots<N>
where
    Dimension<N>: SupportedArity,
{
    type Item = Slot<N>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let slot = Slot::new_unchecked(self.front);
            self.front += 1;
            Some(slot)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<const N: usize> DoubleEndedIterator for Slots<N>
where
    Dimension<N>: SupportedArity,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(Slot::new_unchecked(self.back))
        } else {
            None
        }
    }
}

impl<const N: usize> ExactSizeIterator for Slots<N> where Dimension<N>: SupportedArity {}

impl<const N: usize> FusedIterator for Slots<N> where Dimension<N>: SupportedArity {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_in_range() {
        for index in 0..4 {
            assert_eq!(Slot::<4>::new(index).map(Slot::index), Ok(index));
        }
    }

    #[test]
    fn test_new_out_of_range() {
        assert_eq!(
            Slot::<2>::new(2),
            Err(TupleError::IndexOutOfRange {
                index: 2,
                dimensions: 2
            })
        );
        assert!(Slot::<3>::new(usize::MAX).is_err());
    }

    #[test]
    fn test_named_constants() {
        assert_eq!(Slot::<2>::FIRST.index(), 0);
        assert_eq!(Slot::<2>::SECOND.index(), 1);
        assert_eq!(Slot::<3>::THIRD.index(), 2);
        assert_eq!(Slot::<4>::FOURTH.index(), 3);
        assert_eq!(Slot::<4>::FOURTH.name(), "fourth");
    }

    #[test]
    fn test_conversions() {
        let slot: Slot<3> = Slot::try_from(1).expect("index 1 is in range");
        assert_eq!(usize::from(slot), 1);
        assert!(Slot::<3>::try_from(5).is_err());
    }

    #[test]
    fn test_debug_and_display() {
        assert_eq!(format!("{}", Slot::<3>::SECOND), "second(1)");
        assert_eq!(format!("{:?}", Slot::<4>::FOURTH), "fourth(3)");
    }

    #[test]
    fn test_all_iterates_in_order() {
        let indices: Vec<usize> = Slot::<4>::all().map(Slot::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(Slot::<3>::all().len(), 3);
    }

    #[test]
    fn test_all_double_ended_and_fused() {
        let mut slots = Slot::<3>::all();
        assert_eq!(slots.next_back().map(Slot::index), Some(2));
        assert_eq!(slots.next().map(Slot::index), Some(0));
        assert_eq!(slots.next().map(Slot::index), Some(1));
        assert_eq!(slots.next(), None);
        assert_eq!(slots.next_back(), None);
    }
}
