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

//! # Fallible operations
//!
//! A `FallibleOperation<Args>` is an operation that may report a failure.
//! Sequencing propagates the first failure unchanged. The recovery
//! combinators (`handle_with`, `ignore_failures`, `on_failure`) are the only
//! places where a failure is consumed.
//!
//! ```rust
//! use arity_op::prelude::*;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let mut checked = try_from_fn(|x: i32| {
//!     calls.set(calls.get() + 1);
//!     if x < 0 { Err("negative") } else { Ok(()) }
//! })
//! .ignore_failures();
//!
//! checked.invoke((-1,));
//! checked.invoke((1,));
//! assert_eq!(calls.get(), 2);
//! ```

use crate::{
    combinator::{
        recover::{HandleWith, IgnoreFailures, OnFailure},
        then::TryThen,
    },
    operation::Operation,
};
use std::fmt::Debug;

/// A composable callback that performs side effects and may fail.
pub trait FallibleOperation<Args> {
    /// The failure reported by `try_invoke`.
    type Error: Debug;

    /// Runs the operation with `args`.
    ///
    /// # Errors
    ///
    /// Returns the operation's own failure.
    fn try_invoke(&mut self, args: Args) -> Result<(), Self::Error>;

    /// Returns an operation that runs `self` and then `after` with the same
    /// arguments. If `self` fails, `after` is skipped and the failure is
    /// returned unchanged.
    #[inline]
    fn then<O>(self, after: O) -> TryThen<Self, O>
    where
        Self: Sized,
        O: FallibleOperation<Args, Error = Self::Error>,
        Args: Clone,
    {
        TryThen::new(self, after)
    }

    /// Returns an operation that runs `first` and then `self`.
    #[inline]
    fn before<O>(self, first: O) -> TryThen<O, Self>
    where
        Self: Sized,
        O: FallibleOperation<Args, Error = Self::Error>,
        Args: Clone,
    {
        TryThen::new(first, self)
    }

    /// Returns an infallible operation that passes every failure of `self`
    /// to `handler`, exactly once per failure.
    #[inline]
    fn handle_with<H>(self, handler: H) -> HandleWith<Self, H>
    where
        Self: Sized,
        H: Operation<(Self::Error,)>,
    {
        HandleWith::new(self, handler)
    }

    /// Returns an infallible operation that discards every failure of
    /// `self`. Side effects performed before the failure remain.
    #[inline]
    fn ignore_failures(self) -> IgnoreFailures<Self>
    where
        Self: Sized,
    {
        IgnoreFailures::new(self)
    }

    /// Returns an operation that runs `fallback` with the original
    /// arguments whenever `self` fails.
    ///
    /// When `fallback` is an [`Operation`] the result is infallible. When it
    /// is a `FallibleOperation` the result fails with the fallback's error.
    #[inline]
    fn on_failure<F>(self, fallback: F) -> OnFailure<Self, F>
    where
        Self: Sized,
        Args: Clone,
    {
        OnFailure::new(self, fallback)
    }

    /// Boxes the operation, erasing its concrete type.
    #[inline]
    fn boxed<'a>(self) -> Box<dyn FallibleOperation<Args, Error = Self::Error> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<Args, O> FallibleOperation<Args> for Box<O>
where
    O: FallibleOperation<Args> + ?Sized,
{
    type Error = O::Error;

    #[inline(always)]
    fn try_invoke(&mut self, args: Args) -> Result<(), Self::Error> {
        (**self).try_invoke(args)
    }
}

impl<Args, O> FallibleOperation<Args> for &mut O
where
    O: FallibleOperation<Args> + ?Sized,
{
    type Error = O::Error;

    #[inline(always)]
    fn try_invoke(&mut self, args: Args) -> Result<(), Self::Error> {
        (**self).try_invoke(args)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Refusal {
        TooLarge(u32),
        Odd(u32),
    }

    #[test]
    fn test_then_stops_at_first_failure() {
        let log = RefCell::new(Vec::new());
        let mut op = try_from_fn(|x: u32| {
            log.borrow_mut().push("bound");
            if x > 10 { Err(Refusal::TooLarge(x)) } else { Ok(()) }
        })
        .then(try_from_fn(|x: u32| {
            log.borrow_mut().push("parity");
            if x % 2 == 1 { Err(Refusal::Odd(x)) } else { Ok(()) }
        }));

        assert_eq!(op.try_invoke((4,)), Ok(()));
        assert_eq!(op.try_invoke((11,)), Err(Refusal::TooLarge(11)));
        assert_eq!(op.try_invoke((3,)), Err(Refusal::Odd(3)));
        assert_eq!(
            *log.borrow(),
            vec!["bound", "parity", "bound", "bound", "parity"]
        );
    }

    #[test]
    fn test_before_runs_argument_first() {
        let log = RefCell::new(Vec::new());
        let mut op = try_from_fn(|_: ()| -> Result<(), Refusal> {
            log.borrow_mut().push("self");
            Ok(())
        })
        .before(try_from_fn(|_: ()| -> Result<(), Refusal> {
            log.borrow_mut().push("first");
            Err(Refusal::Odd(1))
        }));

        assert_eq!(op.try_invoke(((),)), Err(Refusal::Odd(1)));
        assert_eq!(*log.borrow(), vec!["first"]);
    }

    #[test]
    fn test_handle_with_invokes_handler_once_per_failure() {
        let failures = RefCell::new(Vec::new());
        let mut op = try_from_fn(|x: u32| if x > 10 { Err(Refusal::TooLarge(x)) } else { Ok(()) })
            .handle_with(from_fn(|failure: Refusal| failures.borrow_mut().push(failure)));

        op.invoke((3,));
        op.invoke((12,));
        op.invoke((40,));
        assert_eq!(
            *failures.borrow(),
            vec![Refusal::TooLarge(12), Refusal::TooLarge(40)]
        );
    }

    #[test]
    fn test_ignore_failures_keeps_side_effects() {
        let effects = RefCell::new(Vec::new());
        let mut op = try_from_fn(|a: i32, b: i32| {
            effects.borrow_mut().push(a + b);
            Err::<(), _>("always fails")
        })
        .ignore_failures();

        op.invoke((1, 2));
        op.invoke((3, 4));
        assert_eq!(*effects.borrow(), vec![3, 7]);
    }

    #[test]
    fn test_on_failure_with_infallible_fallback() {
        let fallback_args = RefCell::new(Vec::new());
        let mut op = try_from_fn(|x: u32| if x % 2 == 1 { Err(Refusal::Odd(x)) } else { Ok(()) })
            .on_failure(from_fn(|x: u32| fallback_args.borrow_mut().push(x)));

        Operation::invoke(&mut op, (2,));
        Operation::invoke(&mut op, (5,));
        assert_eq!(*fallback_args.borrow(), vec![5]);
    }

    #[test]
    fn test_on_failure_with_fallible_fallback_reports_its_error() {
        let mut op = try_from_fn(|x: u32| if x % 2 == 1 { Err(Refusal::Odd(x)) } else { Ok(()) })
            .on_failure(try_from_fn(|x: u32| {
                if x > 10 { Err(format!("{x} is out of reach")) } else { Ok(()) }
            }));

        assert_eq!(FallibleOperation::try_invoke(&mut op, (2,)), Ok(()));
        assert_eq!(FallibleOperation::try_invoke(&mut op, (5,)), Ok(()));
        assert_eq!(
            FallibleOperation::try_invoke(&mut op, (13,)),
            Err(String::from("13 is out of reach"))
        );
    }

    #[test]
    fn test_boxed_fallible_operation() {
        let mut boxed: Box<dyn FallibleOperation<(i8,), Error = &str>> =
            try_from_fn(|x: i8| if x == 0 { Err("zero") } else { Ok(()) }).boxed();

        assert_eq!(boxed.try_invoke((1,)), Ok(()));
        assert_eq!(boxed.try_invoke((0,)), Err("zero"));
    }

    #[test]
    fn test_into_fallible_never_fails() {
        let seen = RefCell::new(0);
        let mut op = from_fn(|x: i32| *seen.borrow_mut() += x)
            .into_fallible::<Refusal>()
            .then(try_from_fn(|x: i32| if x < 0 { Err(Refusal::Odd(0)) } else { Ok(()) }));

        assert_eq!(op.try_invoke((5,)), Ok(()));
        assert_eq!(op.try_invoke((-1,)), Err(Refusal::Odd(0)));
        assert_eq!(*seen.borrow(), 4);
    }
}
