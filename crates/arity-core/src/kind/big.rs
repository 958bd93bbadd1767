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

//! Arbitrary-precision element kinds backed by `num-bigint` and `bigdecimal`.

pub use bigdecimal::BigDecimal;
pub use num_bigint::BigInt;

use super::{Element, ElementKind, TolerantElement, ZeroElement};
use num_traits::{Signed, Zero};

impl Element for BigInt {
    const KIND: ElementKind = ElementKind::BigInt;
}

impl ZeroElement for BigInt {
    #[inline]
    fn zero() -> Self {
        <BigInt as Zero>::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }
}

impl TolerantElement for BigInt {
    #[inline]
    fn is_valid_tolerance(&self) -> bool {
        !Signed::is_negative(self)
    }

    #[inline]
    fn is_within(&self, reference: &Self, tolerance: &Self) -> bool {
        Signed::abs(&(self - reference)) <= *tolerance
    }
}

// `BigDecimal` compares by numeric value, so `1.0 == 1.00`.
impl Element for BigDecimal {
    const KIND: ElementKind = ElementKind::BigDecimal;
}

impl ZeroElement for BigDecimal {
    #[inline]
    fn zero() -> Self {
        <BigDecimal as Zero>::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }
}

impl TolerantElement for BigDecimal {
    #[inline]
    fn is_valid_tolerance(&self) -> bool {
        *self >= <BigDecimal as Zero>::zero()
    }

    #[inline]
    fn is_within(&self, reference: &Self, tolerance: &Self) -> bool {
        (self - reference).abs() <= *tolerance
    }
}
