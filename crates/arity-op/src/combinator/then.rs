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

use crate::{fallible::FallibleOperation, operation::Operation};

/// Runs `first` and then `second` with the same arguments.
///
/// Created by [`Operation::then`] and [`Operation::before`].
#[derive(Clone, Copy, Debug)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    #[inline(always)]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns the two operations in execution order.
    #[inline(always)]
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<Args, A, B> Operation<Args> for Then<A, B>
where
    Args: Clone,
    A: Operation<Args>,
    B: Operation<Args>,
{
    #[inline]
    fn invoke(&mut self, args: Args) {
        self.first.invoke(args.clone());
        self.second.invoke(args);
    }
}

/// Runs `first` and, if it succeeds, `second` with the same arguments.
///
/// Created by [`FallibleOperation::then`] and [`FallibleOperation::before`].
#[derive(Clone, Copy, Debug)]
pub struct TryThen<A, B> {
    first: A,
    second: B,
}

impl<A, B> TryThen<A, B> {
    #[inline(always)]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns the two operations in execution order.
    #[inline(always)]
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<Args, A, B> FallibleOperation<Args> for TryThen<A, B>
where
    Args: Clone,
    A: FallibleOperation<Args>,
    B: FallibleOperation<Args, Error = <A as FallibleOperation<Args>>::Error>,
{
    type Error = <A as FallibleOperation<Args>>::Error;

    #[inline]
    fn try_invoke(&mut self, args: Args) -> Result<(), Self::Error> {
        self.first.try_invoke(args.clone())?;
        self.second.try_invoke(args)
    }
}
