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

//! # Element Kinds
//!
//! Every component slot of a tuple holds a value of one element kind. The
//! generic tuple contracts only ever talk to components through the traits
//! in this module, so the same contract body serves integers, floats,
//! arbitrary-precision numbers, text and opaque payloads alike.
//!
//! ## Trait hierarchy
//!
//! ```text
//! Element
//!   ├── ZeroElement
//!   │     └── TolerantElement
//!   │           └── FloatElement
//!   └── OptionalElement
//! ```
//!
//! - `Element`: the kind tag and exact, reflexive slot equality.
//! - `ZeroElement`: kinds with a distinguished zero value.
//! - `TolerantElement`: kinds supporting `|a - b| <= tolerance`.
//! - `FloatElement`: floating-point kinds with a finiteness check.
//! - `OptionalElement`: kinds that may hold an absent value.
//!
//! ## Submodules
//!
//! - `primitive`: Implementations for the primitive integers, floats, `bool`
//!   and `char`.
//! - `big`: Implementations for `BigInt` and `BigDecimal` (feature `big`).
//! - `payload`: The `Payload` trait and the `Option<P>` implementation used
//!   for the text and generic-object kinds.

#[cfg(feature = "big")]
pub mod big;
pub mod payload;
pub mod primitive;

#[cfg(feature = "big")]
pub use big::{BigDecimal, BigInt};
pub use payload::Payload;

use std::fmt::Debug;

/// The closed set of element kinds a tuple component can have.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ElementKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Bool,
    Char,
    BigInt,
    BigDecimal,
    Text,
    Object,
}

impl ElementKind {
    /// Returns a short, human-readable name for the kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arity_core::kind::ElementKind;
    /// assert_eq!(ElementKind::I32.name(), "i32");
    /// assert_eq!(ElementKind::BigDecimal.name(), "big decimal");
    /// ```
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::BigInt => "big integer",
            Self::BigDecimal => "big decimal",
            Self::Text => "text",
            Self::Object => "object",
        }
    }

    /// Returns `true` for the fixed-width integer kinds.
    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
        )
    }

    /// Returns `true` for `f32` and `f64`.
    #[inline]
    pub const fn is_floating_point(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Returns `true` for the arbitrary-precision kinds.
    #[inline]
    pub const fn is_arbitrary_precision(self) -> bool {
        matches!(self, Self::BigInt | Self::BigDecimal)
    }

    /// Returns `true` for kinds whose slots may be absent.
    #[inline]
    pub const fn is_optional(self) -> bool {
        matches!(self, Self::Text | Self::Object)
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A type that can be stored in a tuple component slot.
///
/// # Examples
///
/// ```rust
/// # use arity_core::kind::{Element, ElementKind};
/// assert_eq!(<u16 as Element>::KIND, ElementKind::U16);
/// assert!(f64::NAN.slot_eq(&f64::NAN));
/// ```
pub trait Element: Clone + PartialEq + Debug {
    /// The kind tag of the implementing type.
    const KIND: ElementKind;

    /// Exact equality between two slot values.
    ///
    /// Must be reflexive for every value, including float NaN.
    #[inline(always)]
    fn slot_eq(&self, other: &Self) -> bool {
        self == other
    }
}

/// An element kind with a distinguished zero value.
pub trait ZeroElement: Element {
    /// The zero value of the kind.
    fn zero() -> Self;

    /// Returns `true` if `self` equals the zero value of the kind.
    fn is_zero(&self) -> bool;
}

/// An element kind supporting absolute-deviation comparisons.
///
/// # Examples
///
/// ```rust
/// # use arity_core::kind::TolerantElement;
/// assert!(5_i32.is_within(&3, &2));
/// assert!(!5_i32.is_within(&3, &1));
/// assert!(!(-1.0_f64).is_valid_tolerance());
/// ```
pub trait TolerantElement: ZeroElement {
    /// Returns `true` if `self` may be used as a tolerance (`self >= 0`).
    fn is_valid_tolerance(&self) -> bool;

    /// Returns `true` if `|self - reference| <= tolerance`.
    ///
    /// `tolerance` must satisfy `is_valid_tolerance`; the result is
    /// unspecified otherwise.
    fn is_within(&self, reference: &Self, tolerance: &Self) -> bool;
}

/// A floating-point element kind.
pub trait FloatElement: TolerantElement + Copy {
    /// Returns `true` if the value is neither NaN nor infinite.
    fn is_finite(&self) -> bool;
}

/// An element kind whose values may be absent.
///
/// # Examples
///
/// ```rust
/// # use arity_core::kind::OptionalElement;
/// assert!(Some(String::from("a")).is_present());
/// assert!(!None::<String>.is_present());
/// ```
pub trait OptionalElement: Element {
    /// Returns `true` if a value is present.
    fn is_present(&self) -> bool;
}
