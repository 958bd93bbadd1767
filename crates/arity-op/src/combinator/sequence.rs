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

//! Sequences of boxed operations
//!
//! `Sequence` and `TrySequence` aggregate any number of operations sharing
//! one argument tuple and run them in insertion order. An empty sequence
//! does nothing. A single-element sequence forwards its arguments without
//! cloning them.
//!
//! `of` takes boxed elements so one call can mix operation types. The
//! [`sequence!`](crate::sequence) and [`try_sequence!`](crate::try_sequence)
//! macros box each element for the caller, and `push` accepts any
//! operation by value.

use crate::{error::CompositionError, fallible::FallibleOperation, operation::Operation};
use tracing::{trace, warn};

type BoxedOperation<'a, Args> = Box<dyn Operation<Args> + 'a>;
type BoxedFallible<'a, Args, E> = Box<dyn FallibleOperation<Args, Error = E> + 'a>;

/// Builds a [`Sequence`] from operations of any type, boxing each one.
///
/// ```rust
/// use arity_op::{prelude::*, sequence};
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
/// let mut all = sequence![
///     from_fn(|x: i32| log.borrow_mut().push(x)),
///     NoOp,
///     from_fn(|x: i32| log.borrow_mut().push(-x)),
/// ];
///
/// all.invoke((3,));
/// assert_eq!(*log.borrow(), vec![3, -3]);
/// ```
#[macro_export]
macro_rules! sequence {
    ($($operation:expr),* $(,)?) => {
        $crate::Sequence::of([$($crate::Operation::boxed($operation)),*])
    };
}

/// Builds a [`TrySequence`] from fallible operations of any type, boxing
/// each one.
#[macro_export]
macro_rules! try_sequence {
    ($($operation:expr),* $(,)?) => {
        $crate::TrySequence::of([$($crate::FallibleOperation::boxed($operation)),*])
    };
}

/// Collects optional elements, reporting the first absent position.
fn collect_present<T, I>(operations: Option<I>) -> Result<Vec<T>, CompositionError>
where
    I: IntoIterator<Item = Option<T>>,
{
    let Some(operations) = operations else {
        warn!("operation sequence is absent");
        return Err(CompositionError::MissingSequence);
    };

    operations
        .into_iter()
        .enumerate()
        .map(|(index, operation)| {
            operation.ok_or_else(|| {
                warn!(index, "operation is absent from sequence");
                CompositionError::MissingOperation { index }
            })
        })
        .collect()
}

/// An operation that runs a list of operations in order.
pub struct Sequence<'a, Args> {
    operations: Vec<BoxedOperation<'a, Args>>,
}

impl<'a, Args> std::fmt::Debug for Sequence<'a, Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequence")
            .field("len", &self.operations.len())
            .finish()
    }
}

impl<'a, Args> std::fmt::Display for Sequence<'a, Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sequence({} operations)", self.operations.len())
    }
}

impl<'a, Args> Default for Sequence<'a, Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, Args> Sequence<'a, Args> {
    /// Creates a new empty `Sequence`.
    #[inline]
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    /// Creates a new empty `Sequence` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            operations: Vec::with_capacity(capacity),
        }
    }

    /// Creates a `Sequence` running `operations` in iteration order.
    ///
    /// ```rust
    /// use arity_op::prelude::*;
    /// use std::cell::RefCell;
    ///
    /// let log = RefCell::new(Vec::new());
    /// let mut all = Sequence::of([
    ///     from_fn(|x: i32| log.borrow_mut().push(x)).boxed(),
    ///     from_fn(|x: i32| log.borrow_mut().push(x * 10)).boxed(),
    /// ]);
    ///
    /// all.invoke((4,));
    /// assert_eq!(*log.borrow(), vec![4, 40]);
    /// ```
    #[inline]
    pub fn of<I>(operations: I) -> Self
    where
        I: IntoIterator<Item = BoxedOperation<'a, Args>>,
    {
        operations.into_iter().collect()
    }

    /// Creates a `Sequence` from an optional list of optional operations.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::MissingSequence`] when `operations` is
    /// `None`, and [`CompositionError::MissingOperation`] with the position
    /// of the first `None` element.
    pub fn try_of<I>(operations: Option<I>) -> Result<Self, CompositionError>
    where
        I: IntoIterator<Item = Option<BoxedOperation<'a, Args>>>,
    {
        collect_present(operations).map(|operations| Self { operations })
    }

    /// Appends an operation of any type, boxing it.
    #[inline]
    pub fn push<O>(&mut self, operation: O)
    where
        O: Operation<Args> + 'a,
    {
        self.operations.push(Box::new(operation));
    }

    /// Appends a boxed operation.
    #[inline]
    pub fn push_boxed(&mut self, operation: BoxedOperation<'a, Args>) {
        self.operations.push(operation);
    }

    /// Returns the number of operations in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the sequence contains no operations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Removes every operation.
    #[inline]
    pub fn clear(&mut self) {
        self.operations.clear();
    }
}

impl<'a, Args> FromIterator<BoxedOperation<'a, Args>> for Sequence<'a, Args> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = BoxedOperation<'a, Args>>,
    {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}

impl<'a, Args> Operation<Args> for Sequence<'a, Args>
where
    Args: Clone,
{
    fn invoke(&mut self, args: Args) {
        let Some((last, init)) = self.operations.split_last_mut() else {
            return;
        };
        for operation in init {
            operation.invoke(args.clone());
        }
        last.invoke(args);
    }
}

/// A fallible operation that runs a list of fallible operations in order,
/// stopping at the first failure.
pub struct TrySequence<'a, Args, E> {
    operations: Vec<BoxedFallible<'a, Args, E>>,
}

impl<'a, Args, E> std::fmt::Debug for TrySequence<'a, Args, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrySequence")
            .field("len", &self.operations.len())
            .finish()
    }
}

impl<'a, Args, E> std::fmt::Display for TrySequence<'a, Args, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TrySequence({} operations)", self.operations.len())
    }
}

impl<'a, Args, E> Default for TrySequence<'a, Args, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, Args, E> TrySequence<'a, Args, E> {
    /// Creates a new empty `TrySequence`.
    #[inline]
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    /// Creates a new empty `TrySequence` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            operations: Vec::with_capacity(capacity),
        }
    }

    /// Creates a `TrySequence` running `operations` in iteration order.
    #[inline]
    pub fn of<I>(operations: I) -> Self
    where
        I: IntoIterator<Item = BoxedFallible<'a, Args, E>>,
    {
        operations.into_iter().collect()
    }

    /// Creates a `TrySequence` from an optional list of optional operations.
    ///
    /// # Errors
    ///
    /// Same as [`Sequence::try_of`].
    pub fn try_of<I>(operations: Option<I>) -> Result<Self, CompositionError>
    where
        I: IntoIterator<Item = Option<BoxedFallible<'a, Args, E>>>,
    {
        collect_present(operations).map(|operations| Self { operations })
    }

    /// Appends a fallible operation of any type, boxing it.
    #[inline]
    pub fn push<O>(&mut self, operation: O)
    where
        O: FallibleOperation<Args, Error = E> + 'a,
    {
        self.operations.push(Box::new(operation));
    }

    /// Appends a boxed operation.
    #[inline]
    pub fn push_boxed(&mut self, operation: BoxedFallible<'a, Args, E>) {
        self.operations.push(operation);
    }

    /// Returns the number of operations in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the sequence contains no operations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Removes every operation.
    #[inline]
    pub fn clear(&mut self) {
        self.operations.clear();
    }
}

impl<'a, Args, E> FromIterator<BoxedFallible<'a, Args, E>> for TrySequence<'a, Args, E> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = BoxedFallible<'a, Args, E>>,
    {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}

impl<'a, Args, E> FallibleOperation<Args> for TrySequence<'a, Args, E>
where
    Args: Clone,
    E: std::fmt::Debug,
{
    type Error = E;

    fn try_invoke(&mut self, args: Args) -> Result<(), E> {
        let Some((last, init)) = self.operations.split_last_mut() else {
            return Ok(());
        };
        let last_step = init.len();
        for (step, operation) in init.iter_mut().enumerate() {
            if let Err(failure) = operation.try_invoke(args.clone()) {
                trace!(step, "operation sequence stopped at failing step");
                return Err(failure);
            }
        }
        last.try_invoke(args).inspect_err(|_| {
            trace!(step = last_step, "operation sequence stopped at failing step");
        })
    }
}
