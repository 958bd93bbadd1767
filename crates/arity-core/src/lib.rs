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

//! # Arity Core
//!
//! Element kinds for the `arity` tuple contracts. A tuple contract is written
//! once, generic over its component type; this crate supplies the per-kind
//! semantics that the generic contract leans on.
//!
//! ## Modules
//!
//! - `kind`: The closed set of element kinds (`ElementKind`) and the traits
//!   that describe what a kind supports: exact slot equality (`Element`),
//!   a zero value (`ZeroElement`), tolerance comparisons (`TolerantElement`),
//!   finiteness (`FloatElement`) and presence (`OptionalElement`).
//!
//! ## Kinds
//!
//! | Kind                      | Rust type                      |
//! |---------------------------|--------------------------------|
//! | 8/16/32/64-bit integers   | `i8`..`i64`, `u8`..`u64`       |
//! | 32/64-bit floats          | `f32`, `f64`                   |
//! | boolean, character        | `bool`, `char`                 |
//! | arbitrary precision       | `BigInt`, `BigDecimal` (`big`) |
//! | text                      | `Option<String>`               |
//! | generic payload           | `Option<P>` where `P: Payload` |
//!
//! The arbitrary-precision kinds are behind the `big` feature, enabled by
//! default.

pub mod kind;
