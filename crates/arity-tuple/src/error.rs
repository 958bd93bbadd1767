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

//! Errors reported by the tuple contracts.

use arity_core::kind::ElementKind;
use thiserror::Error;

/// Broad classification of a `TupleError`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorCategory {
    /// An index outside `[0, N)` was passed to an indexed accessor.
    OutOfRange,
    /// An argument violated a documented precondition.
    IllegalArgument,
}

/// The error type for all fallible tuple operations.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Error)]
pub enum TupleError {
    /// The index does not address a component of the tuple.
    #[error("index {index} is out of range for a tuple of {dimensions} components")]
    IndexOutOfRange { index: usize, dimensions: usize },

    /// A tolerance was negative (or, for floats, NaN).
    #[error("tolerance for {kind} components must be non-negative")]
    NegativeTolerance { kind: ElementKind },

    /// A marshaling buffer holds fewer elements than the tuple has components.
    #[error("buffer of length {len} is too short for a tuple of {dimensions} components")]
    BufferTooShort { len: usize, dimensions: usize },
}

impl TupleError {
    /// Returns the category of the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arity_tuple::error::{ErrorCategory, TupleError};
    /// let err = TupleError::IndexOutOfRange { index: 3, dimensions: 3 };
    /// assert_eq!(err.category(), ErrorCategory::OutOfRange);
    /// ```
    #[inline]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::IndexOutOfRange { .. } => ErrorCategory::OutOfRange,
            Self::NegativeTolerance { .. } | Self::BufferTooShort { .. } => {
                ErrorCategory::IllegalArgument
            }
        }
    }
}

/// Convenience alias used throughout `arity-tuple`.
pub type Result<T> = std::result::Result<T, TupleError>;
