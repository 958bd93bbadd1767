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

//! Homogeneous Rust tuples as containers.
//!
//! Each arity gets its own dispatch `match` from slot index to tuple field.
//! `Slot<N>` only ever holds indices below `N`, so the final arm serves the
//! last field.

use crate::{factory::TupleFactory, read::TupleRead, slot::Slot, write::TupleWrite};
use arity_core::kind::Element;

macro_rules! impl_record_for {
    ($n:literal, $tuple:ty, [$($field:tt => $value:ident),+], $last:tt => $last_value:ident) => {
        impl<T> TupleRead<T, $n> for $tuple
        where
            T: Element,
        {
            #[inline(always)]
            fn component(&self, slot: Slot<$n>) -> T {
                match slot.index() {
                    $($field => self.$field.clone(),)+
                    _ => self.$last.clone(),
                }
            }
        }

        impl<T> TupleWrite<T, $n> for $tuple
        where
            T: Element,
        {
            #[inline(always)]
            fn set_component(&mut self, slot: Slot<$n>, value: T) {
                match slot.index() {
                    $($field => self.$field = value,)+
                    _ => self.$last = value,
                }
            }
        }

        impl<T> TupleFactory<T, $n> for $tuple
        where
            T: Element,
        {
            #[inline(always)]
            fn with_values(&self, values: [T; $n]) -> Self {
                let [$($value,)+ $last_value] = values;
                ($($value,)+ $last_value)
            }
        }
    };
}

impl_record_for!(2, (T, T), [0 => a], 1 => b);
impl_record_for!(3, (T, T, T), [0 => a, 1 => b], 2 => c);
impl_record_for!(4, (T, T, T, T), [0 => a, 1 => b, 2 => c], 3 => d);
