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

//! Errors reported while composing operations.

use thiserror::Error;

/// The error type for validated composition (`try_of`).
///
/// Both variants are illegal-argument failures: the caller supplied a
/// missing sequence or a sequence with a missing element.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Error)]
pub enum CompositionError {
    /// No sequence of operations was supplied.
    #[error("operation sequence is absent")]
    MissingSequence,

    /// The sequence has no operation at `index`.
    #[error("operation at position {index} is absent")]
    MissingOperation { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            CompositionError::MissingSequence.to_string(),
            "operation sequence is absent"
        );
        assert_eq!(
            CompositionError::MissingOperation { index: 2 }.to_string(),
            "operation at position 2 is absent"
        );
    }
}
