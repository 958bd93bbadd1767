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

use crate::{
    factory::TupleFactory,
    read::TupleRead,
    slot::{Dimension, Slot, SupportedArity},
    write::TupleWrite,
};
use arity_core::kind::Element;

impl<T, const N: usize> TupleRead<T, N> for [T; N]
where
    T: Element,
    Dimension<N>: SupportedArity,
{
    #[inline(always)]
    fn component(&self, slot: Slot<N>) -> T {
        self[slot.index()].clone()
    }

    #[inline(always)]
    fn to_values(&self) -> [T; N] {
        self.clone()
    }
}

impl<T, const N: usize> TupleWrite<T, N> for [T; N]
where
    T: Element,
    Dimension<N>: SupportedArity,
{
    #[inline(always)]
    fn set_component(&mut self, slot: Slot<N>, value: T) {
        self[slot.index()] = value;
    }

    #[inline(always)]
    fn set_values(&mut self, values: [T; N]) -> &mut Self {
        *self = values;
        self
    }
}

impl<T, const N: usize> TupleFactory<T, N> for [T; N]
where
    T: Element,
    Dimension<N>: SupportedArity,
{
    #[inline(always)]
    fn with_values(&self, values: [T; N]) -> Self {
        values
    }
}
