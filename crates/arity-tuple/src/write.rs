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

//! # Write Capability
//!
//! `TupleWrite<T, N>` is the write-only contract: named and indexed setters
//! and array import. Setters mutate in place and return `&mut Self`, so all
//! components can be assigned in one chained expression. Code that prefers
//! value semantics should build new instances through `TupleFactory`
//! instead; in-place mutation is opt-in by requiring this trait.
//!
//! ```rust
//! use arity_tuple::prelude::*;
//!
//! let mut v = Tuple3::new([0, 0, 0]);
//! v.set_first(1).set_second(2).set_third(3);
//! assert_eq!(v, Tuple3::new([1, 2, 3]));
//! ```

use crate::{
    error::Result,
    factory::values_from_slice,
    slot::{Dimension, HasFourth, HasThird, Slot, SupportedArity},
};
use arity_core::kind::Element;

/// Write-only access to the components of a fixed-arity container.
pub trait TupleWrite<T, const N: usize>
where
    T: Element,
    Dimension<N>: SupportedArity,
{
    /// Stores `value` in `slot`.
    fn set_component(&mut self, slot: Slot<N>, value: T);

    /// Sets the first component.
    #[inline(always)]
    fn set_first(&mut self, value: T) -> &mut Self
    {
        self.set_component(Slot::<N>::FIRST, value);
        self
    }

    /// Sets the second component.
    #[inline(always)]
    fn set_second(&mut self, value: T) -> &mut Self
    {
        self.set_component(Slot::<N>::SECOND, value);
        self
    }

    /// Sets the third component.
    #[inline(always)]
    fn set_third(&mut self, value: T) -> &mut Self
    where
        Dimension<N>: HasThird,
    {
        self.set_component(Slot::<N>::THIRD, value);
        self
    }

    /// Sets the fourth component.
    #[inline(always)]
    fn set_fourth(&mut self, value: T) -> &mut Self
    where
        Dimension<N>: HasFourth,
    {
        self.set_component(Slot::<N>::FOURTH, value);
        self
    }

    /// Sets the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns `TupleError::IndexOutOfRange` if `index >= N`; the container is
    /// left unchanged.
    #[inline]
    fn set_by_index(&mut self, index: usize, value: T) -> Result<&mut Self> {
        let slot = Slot::new(index)?;
        self.set_component(slot, value);
        Ok(self)
    }

    /// Sets all components from `values`, in slot order.
    fn set_values(&mut self, values: [T; N]) -> &mut Self {
        for (index, value) in values.into_iter().enumerate() {
            self.set_component(Slot::new_unchecked(index), value);
        }
        self
    }

    /// Sets all components from `src[0..N]`, in slot order.
    ///
    /// # Errors
    ///
    /// Returns `TupleError::BufferTooShort` if `src.len() < N`; the container
    /// is left unchanged.
    #[inline]
    fn from_array(&mut self, src: &[T]) -> Result<&mut Self> {
        let values = values_from_slice(src)?;
        Ok(self.set_values(values))
    }
}
