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

//! # Construction Capability
//!
//! Generic code that receives some container `C: TupleFactory<T, N>` has no
//! way to call `C`'s constructor. `TupleFactory` closes that gap: any
//! instance can produce a fresh instance of its own concrete type, filled
//! from raw values, a slice, or any other container exposing `TupleRead`.
//! A single required method, `with_values`, backs the rest.
//!
//! ```rust
//! use arity_tuple::prelude::*;
//!
//! fn mirrored<C>(c: &C) -> C
//! where
//!     C: TupleFactory<i32, 2>,
//! {
//!     c.with_values([c.second(), c.first()])
//! }
//!
//! assert_eq!(mirrored(&(1, 2)), (2, 1));
//! assert_eq!(mirrored(&Tuple2::new([3, 4])), Tuple2::new([4, 3]));
//! ```

use crate::{
    error::{Result, TupleError},
    read::TupleRead,
    slot::{Dimension, SupportedArity},
};
use arity_core::kind::Element;

/// Builds new instances of the implementing container type.
pub trait TupleFactory<T, const N: usize>: TupleRead<T, N> + Sized
where
    T: Element,
    Dimension<N>: SupportedArity,
{
    /// Returns a new instance of `Self` holding `values` in slot order.
    fn with_values(&self, values: [T; N]) -> Self;

    /// Returns a new instance of `Self` with the same components.
    #[inline]
    fn copy(&self) -> Self {
        self.with_values(self.to_values())
    }

    /// Returns a new instance of `Self` holding the components of `other`.
    #[inline]
    fn with<R>(&self, other: &R) -> Self
    where
        R: TupleRead<T, N> + ?Sized,
    {
        self.with_values(other.to_values())
    }

    /// Returns a new instance of `Self` holding `src[0..N]`.
    ///
    /// # Errors
    ///
    /// Returns `TupleError::BufferTooShort` if `src.len() < N`.
    #[inline]
    fn with_array(&self, src: &[T]) -> Result<Self> {
        values_from_slice(src).map(|values| self.with_values(values))
    }
}

/// Copies `src[0..N]` into an array.
///
/// # Errors
///
/// Returns `TupleError::BufferTooShort` if `src.len() < N`.
pub(crate) fn values_from_slice<T, const N: usize>(src: &[T]) -> Result<[T; N]>
where
    T: Clone,
{
    match src.get(..N) {
        Some(head) => Ok(std::array::from_fn(|index| head[index].clone())),
        None => Err(TupleError::BufferTooShort {
            len: src.len(),
            dimensions: N,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{containers::ArrayTuple, slot::Slot};

    /// A wrapper that carries a label through every construction.
    #[derive(Clone, PartialEq, Debug)]
    struct Labeled {
        label: &'static str,
        values: [i32; 2],
    }

    impl TupleRead<i32, 2> for Labeled {
        fn component(&self, slot: Slot<2>) -> i32 {
            self.values[slot.index()]
        }
    }

    impl TupleFactory<i32, 2> for Labeled {
        fn with_values(&self, values: [i32; 2]) -> Self {
            Self {
                label: self.label,
                values,
            }
        }
    }

    fn doubled<C>(c: &C) -> C
    where
        C: TupleFactory<i32, 2>,
    {
        let [a, b] = c.to_values();
        c.with_values([a * 2, b * 2])
    }

    #[test]
    fn test_generic_code_keeps_concrete_type() {
        let labeled = Labeled {
            label: "speed",
            values: [1, 2],
        };
        let result = doubled(&labeled);
        assert_eq!(result.label, "speed");
        assert_eq!(result.values, [2, 4]);

        assert_eq!(doubled(&(5, 6)), (10, 12));
        assert_eq!(doubled(&[7, 8]), [14, 16]);
    }

    #[test]
    fn test_copy() {
        let t = ArrayTuple::new([1.5_f64, 2.5, 3.5]);
        let c = t.copy();
        assert_eq!(c, t);
    }

    #[test]
    fn test_with_adopts_other_container() {
        let template = Labeled {
            label: "origin",
            values: [0, 0],
        };
        let adopted = template.with(&(3, 4));
        assert_eq!(adopted.label, "origin");
        assert_eq!(adopted.values, [3, 4]);
        assert_eq!(template.values, [0, 0]);
    }

    #[test]
    fn test_with_array() {
        let t = ArrayTuple::new([0_u8; 3]);
        assert_eq!(t.with_array(&[1, 2, 3, 4]), Ok(ArrayTuple::new([1, 2, 3])));
        assert_eq!(
            t.with_array(&[1, 2]),
            Err(TupleError::BufferTooShort {
                len: 2,
                dimensions: 3
            })
        );
    }

    #[test]
    fn test_values_from_slice() {
        assert_eq!(values_from_slice::<i32, 2>(&[9, 8, 7]), Ok([9, 8]));
        assert!(values_from_slice::<i32, 4>(&[]).is_err());
    }
}
