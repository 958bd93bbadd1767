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

use super::{Element, ElementKind, FloatElement, TolerantElement, ZeroElement};

macro_rules! impl_element_for {
    ($t:ty, $kind:ident) => {
        impl Element for $t {
            const KIND: ElementKind = ElementKind::$kind;
        }
    };
}

macro_rules! impl_zero_for {
    ($t:ty, $zero:expr) => {
        impl ZeroElement for $t {
            #[inline(always)]
            fn zero() -> Self {
                $zero
            }

            #[inline(always)]
            fn is_zero(&self) -> bool {
                *self == $zero
            }
        }
    };
}

macro_rules! impl_signed_int_for {
    ($t:ty, $kind:ident) => {
        impl_element_for!($t, $kind);
        impl_zero_for!($t, 0);

        impl TolerantElement for $t {
            #[inline(always)]
            fn is_valid_tolerance(&self) -> bool {
                *self >= 0
            }

            #[inline(always)]
            fn is_within(&self, reference: &Self, tolerance: &Self) -> bool {
                // `abs_diff` cannot overflow, unlike `(a - b).abs()`.
                self.abs_diff(*reference) <= tolerance.unsigned_abs()
            }
        }
    };
}

macro_rules! impl_unsigned_int_for {
    ($t:ty, $kind:ident) => {
        impl_element_for!($t, $kind);
        impl_zero_for!($t, 0);

        impl TolerantElement for $t {
            #[inline(always)]
            fn is_valid_tolerance(&self) -> bool {
                true
            }

            #[inline(always)]
            fn is_within(&self, reference: &Self, tolerance: &Self) -> bool {
                self.abs_diff(*reference) <= *tolerance
            }
        }
    };
}

macro_rules! impl_float_for {
    ($t:ty, $kind:ident) => {
        impl Element for $t {
            const KIND: ElementKind = ElementKind::$kind;

            #[inline(always)]
            fn slot_eq(&self, other: &Self) -> bool {
                self == other || (self.is_nan() && other.is_nan())
            }
        }

        impl_zero_for!($t, 0.0);

        impl TolerantElement for $t {
            #[inline(always)]
            fn is_valid_tolerance(&self) -> bool {
                // NaN fails this comparison as well.
                *self >= 0.0
            }

            #[inline(always)]
            fn is_within(&self, reference: &Self, tolerance: &Self) -> bool {
                (*self - *reference).abs() <= *tolerance
            }
        }

        impl FloatElement for $t {
            #[inline(always)]
            fn is_finite(&self) -> bool {
                <$t>::is_finite(*self)
            }
        }
    };
}

impl_signed_int_for!(i8, I8);
impl_signed_int_for!(i16, I16);
impl_signed_int_for!(i32, I32);
impl_signed_int_for!(i64, I64);

impl_unsigned_int_for!(u8, U8);
impl_unsigned_int_for!(u16, U16);
impl_unsigned_int_for!(u32, U32);
impl_unsigned_int_for!(u64, U64);

impl_float_for!(f32, F32);
impl_float_for!(f64, F64);

impl_element_for!(bool, Bool);
impl_zero_for!(bool, false);

impl_element_for!(char, Char);
impl_zero_for!(char, '\0');

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(<i8 as Element>::KIND, ElementKind::I8);
        assert_eq!(<i64 as Element>::KIND, ElementKind::I64);
        assert_eq!(<u8 as Element>::KIND, ElementKind::U8);
        assert_eq!(<f32 as Element>::KIND, ElementKind::F32);
        assert_eq!(<bool as Element>::KIND, ElementKind::Bool);
        assert_eq!(<char as Element>::KIND, ElementKind::Char);
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(i32::zero(), 0);
        assert_eq!(u64::zero(), 0);
        assert_eq!(f64::zero(), 0.0);
        assert!(!bool::zero());
        assert_eq!(char::zero(), '\0');

        assert!(0_i16.is_zero());
        assert!(!1_u8.is_zero());
        assert!((-0.0_f32).is_zero());
        assert!(false.is_zero());
        assert!(!'a'.is_zero());
    }

    #[test]
    fn test_float_slot_eq_is_reflexive_for_nan() {
        assert!(f32::NAN.slot_eq(&f32::NAN));
        assert!(f64::NAN.slot_eq(&f64::NAN));
        assert!(!f64::NAN.slot_eq(&0.0));
        assert!(1.5_f64.slot_eq(&1.5));
        assert!(0.0_f64.slot_eq(&-0.0));
    }

    #[test]
    fn test_signed_tolerance_does_not_overflow() {
        // |(-128) - 127| = 255 does not fit in i8.
        assert!(!i8::MIN.is_within(&i8::MAX, &i8::MAX));
        assert!(!i8::MIN.is_within(&0, &i8::MAX));
        assert!((-127_i8).is_within(&0, &i8::MAX));
        assert!(i64::MIN.is_within(&i64::MIN, &0));
    }

    #[test]
    fn test_tolerance_validity() {
        assert!(0_i32.is_valid_tolerance());
        assert!(!(-1_i32).is_valid_tolerance());
        assert!(0_u32.is_valid_tolerance());
        assert!(0.0_f64.is_valid_tolerance());
        assert!(!(-0.5_f32).is_valid_tolerance());
        assert!(!f64::NAN.is_valid_tolerance());
        assert!(f64::INFINITY.is_valid_tolerance());
    }

    #[test]
    fn test_float_within() {
        assert!(0.1_f64.is_within(&0.0, &0.1));
        assert!(!0.11_f64.is_within(&0.0, &0.1));
        assert!(!f64::NAN.is_within(&0.0, &f64::INFINITY));
        assert!(!f64::INFINITY.is_within(&f64::INFINITY, &1.0));
    }

    #[test]
    fn test_finiteness() {
        assert!(1.0_f32.is_finite());
        assert!(!FloatElement::is_finite(&f64::NAN));
        assert!(!FloatElement::is_finite(&f64::NEG_INFINITY));
    }

    proptest! {
        #[test]
        fn prop_signed_within_matches_wide_arithmetic(
            a in any::<i32>(),
            b in any::<i32>(),
            t in 0_i32..=i32::MAX,
        ) {
            let wide = (i64::from(a) - i64::from(b)).abs() <= i64::from(t);
            prop_assert_eq!(a.is_within(&b, &t), wide);
        }

        #[test]
        fn prop_unsigned_within_is_symmetric(a in any::<u16>(), b in any::<u16>(), t in any::<u16>()) {
            prop_assert_eq!(a.is_within(&b, &t), b.is_within(&a, &t));
        }
    }
}
