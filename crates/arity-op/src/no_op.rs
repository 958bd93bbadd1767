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

use crate::operation::Operation;

/// An operation that does nothing for any argument tuple.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct NoOp;

impl<Args> Operation<Args> for NoOp {
    #[inline(always)]
    fn invoke(&mut self, _args: Args) {}
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use std::cell::Cell;

    #[test]
    fn test_no_op_accepts_any_arity() {
        let mut op = NoOp;
        Operation::<(u8,)>::invoke(&mut op, (1,));
        Operation::<(u8, &str)>::invoke(&mut op, (1, "x"));
        Operation::<([i32; 3], f64, bool)>::invoke(&mut op, ([1, 2, 3], 0.5, true));
        Operation::<(char, char, char, char)>::invoke(&mut op, ('a', 'b', 'c', 'd'));
    }

    #[test]
    fn test_no_op_is_neutral_under_then() {
        let hits = Cell::new(0);
        let mut op = NoOp
            .then(from_fn(|x: i32| hits.set(hits.get() + x)))
            .then(NoOp);

        op.invoke((5,));
        assert_eq!(hits.get(), 5);
    }
}
