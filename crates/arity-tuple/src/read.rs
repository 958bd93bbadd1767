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

//! # Read Capability
//!
//! `TupleRead<T, N>` is the read-only contract of an `N`-component container
//! holding elements of kind `T`. An implementation supplies one method,
//! `component`, which maps a validated `Slot<N>` to the stored value; every
//! other accessor, equality check, zero/finiteness/validity query and array
//! export is derived from it.
//!
//! Kind-specific queries are gated on the element traits of `arity-core`:
//! `is_zero` needs `T: ZeroElement`, `is_zero_within` and `equals_within`
//! need `T: TolerantElement`, `is_finite` needs `T: FloatElement`, and
//! `is_valid` needs `T: OptionalElement`.
//!
//! ```rust
//! use arity_tuple::prelude::*;
//!
//! let v = Tuple3::new([1, 2, 3]);
//! assert_eq!(v.dimensions(), 3);
//! assert_eq!(v.get_by_index(1), Ok(2));
//! assert!(v.get_by_index(3).is_err());
//! assert_eq!(v.is_zero_within(0), Ok(false));
//! assert!(Tuple3::new([0, 0, 0]).is_zero());
//! ```
//!
//! Containers outside the supported arities cannot implement the contract:
//!
//! ```compile_fail
//! use arity_tuple::{read::TupleRead, slot::Slot};
//!
//! struct Five([i32; 5]);
//!
//! impl TupleRead<i32, 5> for Five {
//!     fn component(&self, slot: Slot<5>) -> i32 {
//!         self.0[slot.index()]
//!     }
//! }
//! ```

use crate::{
    error::{Result, TupleError},
    slot::{Dimension, HasFourth, HasThird, Slot, SupportedArity},
};
use arity_core::kind::{Element, FloatElement, OptionalElement, TolerantElement, ZeroElement};

/// Read-only access to the components of a fixed-arity container.
pub trait TupleRead<T, const N: usize>
where
    T: Element,
    Dimension<N>: SupportedArity,
{
    /// Returns the value stored in `slot`.
    fn component(&self, slot: Slot<N>) -> T;

    /// Returns the number of components, which is always `N`.
    #[inline(always)]
    fn dimensions(&self) -> usize {
        N
    }

    /// Returns the first component.
    #[inline(always)]
    fn first(&self) -> T
    {
        self.component(Slot::<N>::FIRST)
    }

    /// Returns the second component.
    #[inline(always)]
    fn second(&self) -> T
    {
        self.component(Slot::<N>::SECOND)
    }

    /// Returns the third component.
    #[inline(always)]
    fn third(&self) -> T
    where
        Dimension<N>: HasThird,
    {
        self.component(Slot::<N>::THIRD)
    }

    /// Returns the fourth component.
    #[inline(always)]
    fn fourth(&self) -> T
    where
        Dimension<N>: HasFourth,
    {
        self.component(Slot::<N>::FOURTH)
    }

    /// Returns the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns `TupleError::IndexOutOfRange` if `index >= N`.
    #[inline]
    fn get_by_index(&self, index: usize) -> Result<T> {
        Slot::new(index).map(|slot| self.component(slot))
    }

    /// Returns all components as an array, in slot order.
    #[inline]
    fn to_values(&self) -> [T; N] {
        std::array::from_fn(|index| self.component(Slot::new_unchecked(index)))
    }

    /// Writes the components into `dest[0..N]` in slot order and returns
    /// `dest`. Elements past `N` are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `TupleError::BufferTooShort` if `dest.len() < N`; `dest` is not
    /// modified in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arity_tuple::prelude::*;
    /// let mut buffer = [0; 4];
    /// let written = (7, 8).to_array(&mut buffer).expect("buffer is long enough");
    /// assert_eq!(written, &[7, 8, 0, 0]);
    /// ```
    fn to_array<'a>(&self, dest: &'a mut [T]) -> Result<&'a mut [T]> {
        if dest.len() < N {
            return Err(TupleError::BufferTooShort {
                len: dest.len(),
                dimensions: N,
            });
        }
        for slot in Slot::<N>::all() {
            dest[slot.index()] = self.component(slot);
        }
        Ok(dest)
    }

    /// Componentwise exact equality with another container.
    ///
    /// Returns `false` if `other` is `None`. Comparison stops at the first
    /// mismatching slot.
    fn equals<R>(&self, other: Option<&R>) -> bool
    where
        R: TupleRead<T, N> + ?Sized,
    {
        match other {
            None => false,
            Some(other) => {
                Slot::<N>::all().all(|slot| self.component(slot).slot_eq(&other.component(slot)))
            }
        }
    }

    /// Componentwise equality within `tolerance`.
    ///
    /// Returns `Ok(false)` if `other` is `None`. Comparison stops at the first
    /// slot whose deviation exceeds `tolerance`.
    ///
    /// # Errors
    ///
    /// Returns `TupleError::NegativeTolerance` if `tolerance` is negative,
    /// whether or not `other` is present.
    fn equals_within<R>(&self, other: Option<&R>, tolerance: T) -> Result<bool>
    where
        R: TupleRead<T, N> + ?Sized,
        T: TolerantElement,
    {
        validate_tolerance(&tolerance)?;
        Ok(match other {
            None => false,
            Some(other) => Slot::<N>::all().all(|slot| {
                self.component(slot)
                    .is_within(&other.component(slot), &tolerance)
            }),
        })
    }

    /// Returns `true` if every component is the zero value of its kind.
    fn is_zero(&self) -> bool
    where
        T: ZeroElement,
    {
        Slot::<N>::all().all(|slot| self.component(slot).is_zero())
    }

    /// Returns `true` if every component deviates from zero by at most
    /// `tolerance`.
    ///
    /// # Errors
    ///
    /// Returns `TupleError::NegativeTolerance` if `tolerance` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arity_tuple::prelude::*;
    /// let v = Tuple2::new([0.05, -0.1]);
    /// assert_eq!(v.is_zero_within(0.1), Ok(true));
    /// assert_eq!(v.is_zero_within(0.01), Ok(false));
    /// assert!(v.is_zero_within(-1.0).is_err());
    /// ```
    fn is_zero_within(&self, tolerance: T) -> Result<bool>
    where
        T: TolerantElement,
    {
        validate_tolerance(&tolerance)?;
        let zero = T::zero();
        Ok(Slot::<N>::all().all(|slot| self.component(slot).is_within(&zero, &tolerance)))
    }

    /// Returns `true` if every component is finite.
    fn is_finite(&self) -> bool
    where
        T: FloatElement,
    {
        Slot::<N>::all().all(|slot| FloatElement::is_finite(&self.component(slot)))
    }

    /// Returns `true` if every component holds a value.
    fn is_valid(&self) -> bool
    where
        T: OptionalElement,
    {
        Slot::<N>::all().all(|slot| self.component(slot).is_present())
    }
}

/// Checks that `tolerance` can be used for tolerance comparisons.
///
/// # Errors
///
/// Returns `TupleError::NegativeTolerance` if `tolerance` is negative (or
/// NaN for floating-point kinds).
#[inline]
pub fn validate_tolerance<T>(tolerance: &T) -> Result<()>
where
    T: TolerantElement,
{
    if tolerance.is_valid_tolerance() {
        Ok(())
    } else {
        Err(TupleError::NegativeTolerance { kind: T::KIND })
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::{error::ErrorCategory, factory::TupleFactory};
    use arity_core::kind::{ElementKind, Payload};
    use proptest::prelude::*;
    use std::cell::Cell;

    /// A record type with its own dispatch table.
    #[derive(Clone, Copy, PartialEq, Debug)]
    struct Rgb {
        r: u8,
        g: u8,
        b: u8,
    }

    impl TupleRead<u8, 3> for Rgb {
        fn component(&self, slot: Slot<3>) -> u8 {
            match slot.index() {
                0 => self.r,
                1 => self.g,
                _ => self.b,
            }
        }
    }

    #[test]
    fn test_dimensions_is_constant() {
        assert_eq!(Rgb { r: 0, g: 0, b: 0 }.dimensions(), 3);
        assert_eq!([1_i64, 2].dimensions(), 2);
        assert_eq!([0.0_f32; 4].dimensions(), 4);
    }

    #[test]
    fn test_named_accessors_on_record() {
        let c = Rgb { r: 10, g: 20, b: 30 };
        assert_eq!(c.first(), 10);
        assert_eq!(c.second(), 20);
        assert_eq!(c.third(), 30);
    }

    #[test]
    fn test_get_by_index_scenario() {
        let v = [1_i32, 2, 3];
        assert_eq!(v.get_by_index(1), Ok(2));
        let err = v.get_by_index(3).expect_err("index 3 is out of range");
        assert_eq!(err.category(), ErrorCategory::OutOfRange);
        assert_eq!(
            err,
            TupleError::IndexOutOfRange {
                index: 3,
                dimensions: 3
            }
        );
    }

    #[test]
    fn test_to_array_fills_in_order_and_returns_buffer() {
        let v = [4_u16, 5, 6, 7];
        let mut buffer = [0_u16; 5];
        let ptr = buffer.as_ptr();
        let written = v.to_array(&mut buffer).expect("buffer is long enough");
        assert_eq!(written.as_ptr(), ptr);
        assert_eq!(written, &[4, 5, 6, 7, 0]);
    }

    #[test]
    fn test_to_array_rejects_short_buffer() {
        let mut buffer = [9_i8; 2];
        let err = [1_i8, 2, 3]
            .to_array(&mut buffer)
            .expect_err("buffer is too short");
        assert_eq!(
            err,
            TupleError::BufferTooShort {
                len: 2,
                dimensions: 3
            }
        );
        assert_eq!(err.category(), ErrorCategory::IllegalArgument);
        assert_eq!(buffer, [9, 9]);
    }

    #[test]
    fn test_zero_scenario() {
        assert_eq!([1_i32, 2, 3].is_zero_within(0), Ok(false));
        assert!([0_i32, 0, 0].is_zero());
        assert!(![0_i32, 1, 0].is_zero());
        assert!([false, false].is_zero());
    }

    #[test]
    fn test_is_zero_within_bounds() {
        let v = [-2_i32, 1, 2];
        assert_eq!(v.is_zero_within(1), Ok(false));
        assert_eq!(v.is_zero_within(2), Ok(true));
        assert_eq!([5_u32, 3].is_zero_within(5), Ok(true));
    }

    #[test]
    fn test_negative_tolerance_is_illegal() {
        let err = [1_i64, 2].is_zero_within(-1).expect_err("negative tolerance");
        assert_eq!(
            err,
            TupleError::NegativeTolerance {
                kind: ElementKind::I64
            }
        );
        assert!([0.0_f64, 0.0].is_zero_within(f64::NAN).is_err());
        assert!([1_i32, 2].equals_within(None::<&[i32; 2]>, -3).is_err());
    }

    #[test]
    fn test_equals_is_reflexive_and_rejects_absent() {
        let v = [1.0_f64, f64::NAN, 3.0];
        assert!(v.equals(Some(&v)));
        assert!(!v.equals(None::<&[f64; 3]>));
        assert!(!v.equals(Some(&[1.0, f64::NAN, 3.5])));
    }

    #[test]
    fn test_equals_across_container_types() {
        let record = Rgb { r: 1, g: 2, b: 3 };
        assert!(record.equals(Some(&[1_u8, 2, 3])));
        assert!([1_u8, 2, 3].equals(Some(&record)));
        assert!(!record.equals(Some(&(1_u8, 2_u8, 4_u8))));
    }

    #[test]
    fn test_equals_within() {
        let a = [1.0_f32, 2.0];
        let b = [1.05_f32, 1.95];
        assert_eq!(a.equals_within(Some(&b), 0.1), Ok(true));
        assert_eq!(a.equals_within(Some(&b), 0.01), Ok(false));
        assert_eq!(a.equals_within(None::<&[f32; 2]>, 1.0), Ok(false));
        assert_eq!(a.equals_within(Some(&a), 0.0), Ok(true));
    }

    /// Counts how many components have been read.
    struct Counted {
        values: [i32; 4],
        reads: Cell<usize>,
    }

    impl Counted {
        fn new(values: [i32; 4]) -> Self {
            Self {
                values,
                reads: Cell::new(0),
            }
        }
    }

    impl TupleRead<i32, 4> for Counted {
        fn component(&self, slot: Slot<4>) -> i32 {
            self.reads.set(self.reads.get() + 1);
            self.values[slot.index()]
        }
    }

    #[test]
    fn test_equals_stops_at_first_mismatching_slot() {
        let left = Counted::new([1, 9, 3, 4]);
        let right = Counted::new([1, 2, 3, 4]);

        assert!(!left.equals(Some(&right)));
        assert_eq!(left.reads.get(), 2);
        assert_eq!(right.reads.get(), 2);

        let same = Counted::new([1, 9, 3, 4]);
        assert!(left.equals(Some(&same)));
        assert_eq!(same.reads.get(), 4);
    }

    #[test]
    fn test_equals_within_stops_at_first_slot_out_of_tolerance() {
        let left = Counted::new([0, 10, 0, 0]);
        let right = Counted::new([1, 1, 1, 1]);

        assert_eq!(left.equals_within(Some(&right), 1), Ok(false));
        assert_eq!(right.reads.get(), 2);

        let rejected = Counted::new([0, 0, 0, 0]);
        assert!(left.equals_within(Some(&rejected), -1).is_err());
        assert_eq!(rejected.reads.get(), 0);
    }

    #[test]
    fn test_is_finite() {
        assert!([1.0_f64, -2.0, 0.0].is_finite());
        assert!(![1.0_f64, f64::INFINITY].is_finite());
        assert!(![f32::NAN, 0.0].is_finite());
    }

    #[test]
    fn test_is_valid_for_text_and_objects() {
        let text = [Some(String::from("a")), Some(String::from("b"))];
        assert!(text.is_valid());
        let missing = [Some(String::from("a")), None, Some(String::from("c"))];
        assert!(!missing.is_valid());

        #[derive(Clone, PartialEq, Debug)]
        struct Node(u32);
        impl Payload for Node {}

        let nodes = [Some(Node(1)), Some(Node(2)), Some(Node(3)), None];
        assert!(!nodes.is_valid());
        assert!(nodes.equals(Some(&nodes.clone())));
    }

    #[test]
    fn test_char_components() {
        let v = ('a', 'b');
        assert_eq!(v.second(), 'b');
        assert!(!v.is_zero());
        assert!(('\0', '\0').is_zero());
    }

    #[test]
    fn test_to_values_round_trips_through_factory() {
        let v = [3_u64, 1, 4, 1];
        assert_eq!(v.to_values(), v);
        assert_eq!(v.copy(), v);
    }

    #[cfg(feature = "big")]
    #[test]
    fn test_big_components() {
        use arity_core::kind::{BigDecimal, BigInt};
        use std::str::FromStr;

        let v = [BigInt::from(0), BigInt::from(-3)];
        assert_eq!(v.is_zero_within(BigInt::from(3)), Ok(true));
        assert_eq!(v.is_zero_within(BigInt::from(2)), Ok(false));
        assert!(v.is_zero_within(BigInt::from(-1)).is_err());

        let d = [
            BigDecimal::from_str("0.001").expect("valid decimal"),
            BigDecimal::from_str("-0.002").expect("valid decimal"),
        ];
        let tolerance = BigDecimal::from_str("0.002").expect("valid decimal");
        assert_eq!(d.is_zero_within(tolerance), Ok(true));
        assert!(!d.is_zero());
    }

    proptest! {
        #[test]
        fn prop_get_by_index_matches_named_accessors(a in any::<i32>(), b in any::<i32>(), c in any::<i32>(), d in any::<i32>()) {
            let v = [a, b, c, d];
            prop_assert_eq!(v.get_by_index(0), Ok(v.first()));
            prop_assert_eq!(v.get_by_index(1), Ok(v.second()));
            prop_assert_eq!(v.get_by_index(2), Ok(v.third()));
            prop_assert_eq!(v.get_by_index(3), Ok(v.fourth()));
        }

        #[test]
        fn prop_get_by_index_out_of_range(index in 3_usize..) {
            let v = (1_i16, 2_i16, 3_i16);
            prop_assert_eq!(v.get_by_index(index).map_err(|e| e.category()), Err(ErrorCategory::OutOfRange));
        }

        #[test]
        fn prop_is_zero_within_matches_definition(a in -100_i32..100, b in -100_i32..100, t in 0_i32..150) {
            let expected = a.abs() <= t && b.abs() <= t;
            prop_assert_eq!([a, b].is_zero_within(t), Ok(expected));
        }

        #[test]
        fn prop_is_zero_matches_definition(a in 0_u8..3, b in 0_u8..3, c in 0_u8..3) {
            prop_assert_eq!((a, b, c).is_zero(), a == 0 && b == 0 && c == 0);
        }

        #[test]
        fn prop_to_array_preserves_slot_order(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
            let mut buffer = [0_i64; 3];
            let written = (a, b, c).to_array(&mut buffer).map(|w| w.to_vec());
            prop_assert_eq!(written, Ok(vec![a, b, c]));
        }
    }
}
