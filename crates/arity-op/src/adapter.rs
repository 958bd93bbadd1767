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

//! Adapters from closures to operations
//!
//! `FnOperation` and `TryFnOperation` lift plain closures of arity 1 to 4
//! into the operation traits. Every combinator in this crate is written
//! once against the traits; the adapters are the only boundary where a
//! closure signature is translated into an argument tuple.
//!
//! Behavior
//! - `from_fn(|a, b| ..)` implements `Operation<(A, B)>`.
//! - `try_from_fn(|a, b| -> Result<(), E> ..)` implements
//!   `FallibleOperation<(A, B)>` with `Error = E`.
//! - `AsFallible` presents an infallible operation as a fallible one that
//!   always succeeds.

use crate::{fallible::FallibleOperation, operation::Operation};
use std::{fmt::Debug, marker::PhantomData};

/// An infallible operation backed by a closure.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct FnOperation<F> {
    f: F,
}

impl<F> FnOperation<F> {
    /// Wraps `f`.
    #[inline(always)]
    pub const fn new(f: F) -> Self {
        Self { f }
    }

    /// Returns the wrapped closure.
    #[inline(always)]
    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<F> Debug for FnOperation<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnOperation")
    }
}

/// A fallible operation backed by a closure returning `Result<(), E>`.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct TryFnOperation<F> {
    f: F,
}

impl<F> TryFnOperation<F> {
    /// Wraps `f`.
    #[inline(always)]
    pub const fn new(f: F) -> Self {
        Self { f }
    }

    /// Returns the wrapped closure.
    #[inline(always)]
    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<F> Debug for TryFnOperation<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TryFnOperation")
    }
}

/// Lifts a closure into an [`Operation`].
///
/// ```rust
/// use arity_op::prelude::*;
/// use std::cell::Cell;
///
/// let total = Cell::new(0);
/// let mut add = from_fn(|a: i32, b: i32, c: i32| total.set(a + b + c));
/// add.invoke((1, 2, 3));
/// assert_eq!(total.get(), 6);
/// ```
#[inline(always)]
pub const fn from_fn<F>(f: F) -> FnOperation<F> {
    FnOperation::new(f)
}

/// Lifts a closure returning `Result<(), E>` into a [`FallibleOperation`].
///
/// ```rust
/// use arity_op::prelude::*;
///
/// let mut parse = try_from_fn(|text: &str| text.parse::<u8>().map(drop));
/// assert!(parse.try_invoke(("42",)).is_ok());
/// assert!(parse.try_invoke(("x",)).is_err());
/// ```
#[inline(always)]
pub const fn try_from_fn<F>(f: F) -> TryFnOperation<F> {
    TryFnOperation::new(f)
}

macro_rules! impl_fn_adapters {
    ($($ty:ident => $value:ident),+) => {
        impl<Func, $($ty),+> Operation<($($ty,)+)> for FnOperation<Func>
        where
            Func: FnMut($($ty),+),
        {
            #[inline(always)]
            fn invoke(&mut self, ($($value,)+): ($($ty,)+)) {
                (self.f)($($value),+)
            }
        }

        impl<Func, Failure, $($ty),+> FallibleOperation<($($ty,)+)> for TryFnOperation<Func>
        where
            Func: FnMut($($ty),+) -> Result<(), Failure>,
            Failure: Debug,
        {
            type Error = Failure;

            #[inline(always)]
            fn try_invoke(&mut self, ($($value,)+): ($($ty,)+)) -> Result<(), Failure> {
                (self.f)($($value),+)
            }
        }
    };
}

impl_fn_adapters!(A => a);
impl_fn_adapters!(A => a, B => b);
impl_fn_adapters!(A => a, B => b, C => c);
impl_fn_adapters!(A => a, B => b, C => c, D => d);

/// An infallible operation presented as a fallible one that always succeeds.
///
/// Created by [`Operation::into_fallible`].
pub struct AsFallible<O, E> {
    operation: O,
    _failure: PhantomData<fn() -> E>,
}

impl<O, E> AsFallible<O, E> {
    /// Wraps `operation`.
    #[inline(always)]
    pub const fn new(operation: O) -> Self {
        Self {
            operation,
            _failure: PhantomData,
        }
    }

    /// Returns the wrapped operation.
    #[inline(always)]
    pub fn into_inner(self) -> O {
        self.operation
    }
}

impl<O, E> Clone for AsFallible<O, E>
where
    O: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.operation.clone())
    }
}

impl<O, E> Debug for AsFallible<O, E>
where
    O: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsFallible")
            .field("operation", &self.operation)
            .finish()
    }
}

impl<Args, O, E> FallibleOperation<Args> for AsFallible<O, E>
where
    O: Operation<Args>,
    E: Debug,
{
    type Error = E;

    #[inline(always)]
    fn try_invoke(&mut self, args: Args) -> Result<(), E> {
        self.operation.invoke(args);
        Ok(())
    }
}
