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

//! # Operations
//!
//! An `Operation<Args>` is a side-effecting callback without a return
//! value. `Args` is the tuple of arguments the callback takes: `(A,)`,
//! `(A, B)`, `(A, B, C)` or `(A, B, C, D)`. Slices and arrays are ordinary
//! argument types, e.g. `(&[i32],)`.
//!
//! Combinators never mutate their operands; each returns a new operation
//! that owns the operands it was built from.
//!
//! ```rust
//! use arity_op::prelude::*;
//! use std::cell::Cell;
//!
//! let sum = Cell::new(0);
//! let product = Cell::new(0);
//! let mut both = from_fn(|a: i32, b: i32| sum.set(sum.get() + a + b))
//!     .then(from_fn(|a: i32, b: i32| product.set(product.get() + a * b)));
//!
//! both.invoke((2, 3));
//! assert_eq!((sum.get(), product.get()), (5, 6));
//! ```

use crate::{adapter::AsFallible, combinator::then::Then};
use std::fmt::Debug;

/// A composable callback that performs side effects and cannot fail.
pub trait Operation<Args> {
    /// Runs the operation with `args`.
    fn invoke(&mut self, args: Args);

    /// Returns an operation that runs `self` and then `after`, both with the
    /// same arguments, every time.
    #[inline]
    fn then<O>(self, after: O) -> Then<Self, O>
    where
        Self: Sized,
        O: Operation<Args>,
        Args: Clone,
    {
        Then::new(self, after)
    }

    /// Returns an operation that runs `first` and then `self`.
    ///
    /// Equivalent to `first.then(self)`.
    #[inline]
    fn before<O>(self, first: O) -> Then<O, Self>
    where
        Self: Sized,
        O: Operation<Args>,
        Args: Clone,
    {
        Then::new(first, self)
    }

    /// Lifts the operation into a `FallibleOperation` with error type `E`
    /// that never fails.
    #[inline]
    fn into_fallible<E>(self) -> AsFallible<Self, E>
    where
        Self: Sized,
        E: Debug,
    {
        AsFallible::new(self)
    }

    /// Boxes the operation, erasing its concrete type.
    #[inline]
    fn boxed<'a>(self) -> Box<dyn Operation<Args> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<Args, O> Operation<Args> for Box<O>
where
    O: Operation<Args> + ?Sized,
{
    #[inline(always)]
    fn invoke(&mut self, args: Args) {
        (**self).invoke(args);
    }
}

impl<Args, O> Operation<Args> for &mut O
where
    O: Operation<Args> + ?Sized,
{
    #[inline(always)]
    fn invoke(&mut self, args: Args) {
        (**self).invoke(args);
    }
}
