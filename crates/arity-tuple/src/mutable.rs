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

//! # Read-Write Capability
//!
//! `TupleMutable<T, N>` composes `TupleRead` and `TupleWrite`. The two
//! parents never define the same method: `dimensions` and every other
//! query live on `TupleRead` only, setters and import live on `TupleWrite`
//! only, so a mutable container has exactly one implementation of each.
//! The trait is implemented for every type that has both capabilities and
//! adds the read-modify-write helpers that need both.

use crate::{
    read::TupleRead,
    slot::{Dimension, Slot, SupportedArity},
    write::TupleWrite,
};
use arity_core::kind::Element;

/// Read and write access to the components of a fixed-arity container.
pub trait TupleMutable<T, const N: usize>: TupleRead<T, N> + TupleWrite<T, N>
where
    T: Element,
    Dimension<N>: SupportedArity,
{
    /// Copies every component of `other` into `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arity_tuple::prelude::*;
    /// let mut v = Tuple2::new([0, 0]);
    /// v.assign(&(4, 5));
    /// assert_eq!(v, Tuple2::new([4, 5]));
    /// ```
    #[inline]
    fn assign<R>(&mut self, other: &R) -> &mut Self
    where
        R: TupleRead<T, N> + ?Sized,
    {
        self.set_values(other.to_values())
    }

    /// Replaces the component in `slot` with `f(current)`.
    #[inline]
    fn update<F>(&mut self, slot: Slot<N>, f: F) -> &mut Self
    where
        F: FnOnce(T) -> T,
    {
        let value = f(self.component(slot));
        self.set_component(slot, value);
        self
    }

    /// Exchanges the components in slots `a` and `b`.
    #[inline]
    fn swap_components(&mut self, a: Slot<N>, b: Slot<N>) -> &mut Self {
        let first = self.component(a);
        let second = self.component(b);
        self.set_component(a, second);
        self.set_component(b, first);
        self
    }

    /// Replaces every component with `f(current)`, in slot order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arity_tuple::prelude::*;
    /// let mut v = [1, 2, 3];
    /// v.map_in_place(|x| x * 10);
    /// assert_eq!(v, [10, 20, 30]);
    /// ```
    fn map_in_place<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(T) -> T,
    {
        for slot in Slot::<N>::all() {
            let value = f(self.component(slot));
            self.set_component(slot, value);
        }
        self
    }
}

impl<C, T, const N: usize> TupleMutable<T, N> for C
where
    C: TupleRead<T, N> + TupleWrite<T, N> + ?Sized,
    T: Element,
    Dimension<N>: SupportedArity,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::Tuple4;

    /// Generic in-place normalization through the mutable contract only.
    fn clamp_all<C, const N: usize>(c: &mut C, max: i32)
    where
        C: TupleMutable<i32, N>,
        Dimension<N>: SupportedArity,
    {
        c.map_in_place(|x| x.min(max));
    }

    #[test]
    fn test_update() {
        let mut v = (1_i32, 2_i32);
        v.update(Slot::SECOND, |x| x + 40);
        assert_eq!(v, (1, 42));
    }

    #[test]
    fn test_swap_components() {
        let mut v = Tuple4::new(['a', 'b', 'c', 'd']);
        v.swap_components(Slot::FIRST, Slot::FOURTH);
        assert_eq!(v, Tuple4::new(['d', 'b', 'c', 'a']));
        v.swap_components(Slot::SECOND, Slot::SECOND);
        assert_eq!(v, Tuple4::new(['d', 'b', 'c', 'a']));
    }

    #[test]
    fn test_generic_mutation() {
        let mut v = [5, 50, 500];
        clamp_all(&mut v, 60);
        assert_eq!(v, [5, 50, 60]);
    }

    #[test]
    fn test_assign_then_chain() {
        let mut v = [0_i64; 3];
        v.assign(&(1_i64, 2_i64, 3_i64)).set_third(30);
        assert_eq!(v, [1, 2, 30]);
        assert_eq!(v.dimensions(), 3);
    }
}
