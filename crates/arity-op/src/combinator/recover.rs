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

//! Failure recovery
//!
//! These wrappers are the only combinators that consume a failure.
//!
//! Behavior
//! - `HandleWith`: infallible; each failure is passed to the handler once.
//! - `IgnoreFailures`: infallible; failures are logged and dropped.
//! - `OnFailure`: runs the fallback with the original arguments. It is
//!   infallible or fallible depending on the fallback.

use crate::{fallible::FallibleOperation, operation::Operation};
use tracing::{debug, trace};

/// Routes every failure of an operation to a handler.
///
/// Created by [`FallibleOperation::handle_with`].
#[derive(Clone, Copy, Debug)]
pub struct HandleWith<S, H> {
    operation: S,
    handler: H,
}

impl<S, H> HandleWith<S, H> {
    #[inline(always)]
    pub const fn new(operation: S, handler: H) -> Self {
        Self { operation, handler }
    }
}

impl<Args, S, H> Operation<Args> for HandleWith<S, H>
where
    S: FallibleOperation<Args>,
    H: Operation<(S::Error,)>,
{
    #[inline]
    fn invoke(&mut self, args: Args) {
        if let Err(failure) = self.operation.try_invoke(args) {
            trace!(?failure, "handing operation failure to handler");
            self.handler.invoke((failure,));
        }
    }
}

/// Discards every failure of an operation.
///
/// Created by [`FallibleOperation::ignore_failures`].
#[repr(transparent)]
#[derive(Clone, Copy, Debug)]
pub struct IgnoreFailures<S> {
    operation: S,
}

impl<S> IgnoreFailures<S> {
    #[inline(always)]
    pub const fn new(operation: S) -> Self {
        Self { operation }
    }

    /// Returns the wrapped operation.
    #[inline(always)]
    pub fn into_inner(self) -> S {
        self.operation
    }
}

impl<Args, S> Operation<Args> for IgnoreFailures<S>
where
    S: FallibleOperation<Args>,
{
    #[inline]
    fn invoke(&mut self, args: Args) {
        if let Err(failure) = self.operation.try_invoke(args) {
            debug!(?failure, "ignoring operation failure");
        }
    }
}

/// Runs a fallback with the original arguments when an operation fails.
///
/// Created by [`FallibleOperation::on_failure`].
#[derive(Clone, Copy, Debug)]
pub struct OnFailure<S, F> {
    operation: S,
    fallback: F,
}

impl<S, F> OnFailure<S, F> {
    #[inline(always)]
    pub const fn new(operation: S, fallback: F) -> Self {
        Self {
            operation,
            fallback,
        }
    }
}

impl<Args, S, F> Operation<Args> for OnFailure<S, F>
where
    Args: Clone,
    S: FallibleOperation<Args>,
    F: Operation<Args>,
{
    #[inline]
    fn invoke(&mut self, args: Args) {
        if let Err(failure) = self.operation.try_invoke(args.clone()) {
            debug!(?failure, "operation failed, running fallback");
            self.fallback.invoke(args);
        }
    }
}

impl<Args, S, F> FallibleOperation<Args> for OnFailure<S, F>
where
    Args: Clone,
    S: FallibleOperation<Args>,
    F: FallibleOperation<Args>,
{
    type Error = F::Error;

    #[inline]
    fn try_invoke(&mut self, args: Args) -> Result<(), Self::Error> {
        match self.operation.try_invoke(args.clone()) {
            Ok(()) => Ok(()),
            Err(failure) => {
                debug!(?failure, "operation failed, running fallback");
                self.fallback.try_invoke(args)
            }
        }
    }
}
