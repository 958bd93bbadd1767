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

//! # Arity Operations
//!
//! Composable side-effecting callbacks of one to four arguments.
//!
//! - [`Operation`]: an infallible callback with `then` and `before`.
//! - [`FallibleOperation`]: a callback that may fail, with sequencing and
//!   the recovery combinators `handle_with`, `ignore_failures` and
//!   `on_failure`.
//! - [`Sequence`] / [`TrySequence`]: any number of operations run in order,
//!   built with [`sequence!`] / [`try_sequence!`] from unboxed operations.
//! - [`from_fn`] / [`try_from_fn`]: closure adapters.
//!
//! Arguments are passed as a tuple, so a two-argument operation is invoked
//! as `op.invoke((a, b))` and a single-argument one as `op.invoke((a,))`.
//!
//! ```rust
//! use arity_op::prelude::*;
//! use std::cell::RefCell;
//!
//! let log = RefCell::new(Vec::new());
//! let mut store = try_from_fn(|key: &str, value: i32| {
//!     if value < 0 {
//!         return Err(format!("{key}: negative"));
//!     }
//!     log.borrow_mut().push((key.to_owned(), value));
//!     Ok(())
//! })
//! .on_failure(from_fn(|key: &str, _: i32| log.borrow_mut().push((key.to_owned(), 0))));
//!
//! store.invoke(("a", 3));
//! store.invoke(("b", -1));
//! assert_eq!(*log.borrow(), vec![("a".to_owned(), 3), ("b".to_owned(), 0)]);
//! ```

pub mod adapter;
pub mod combinator;
pub mod error;
pub mod fallible;
pub mod no_op;
pub mod operation;

pub use adapter::{AsFallible, FnOperation, TryFnOperation, from_fn, try_from_fn};
pub use combinator::{
    recover::{HandleWith, IgnoreFailures, OnFailure},
    sequence::{Sequence, TrySequence},
    then::{Then, TryThen},
};
pub use error::CompositionError;
pub use fallible::FallibleOperation;
pub use no_op::NoOp;
pub use operation::Operation;

pub mod prelude {
    pub use crate::{
        CompositionError, FallibleOperation, NoOp, Operation, Sequence, TrySequence, from_fn,
        try_from_fn,
    };
}
