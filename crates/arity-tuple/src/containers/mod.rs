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

//! # Reference Containers
//!
//! Concrete containers implementing the tuple contracts. They show the
//! three shapes a container usually takes and make the contracts usable
//! out of the box.
//!
//! ## Submodules
//!
//! - `array`: Fixed arrays `[T; N]` for `N` in `2..=4`.
//! - `record`: Homogeneous Rust tuples `(T, T)`, `(T, T, T)` and
//!   `(T, T, T, T)`, each with a literal dispatch `match`.
//! - `array_tuple`: `ArrayTuple<T, N>`, a transparent wrapper over `[T; N]`
//!   with formatting, conversions and indexing by `Slot<N>`; aliased as
//!   `Tuple2`, `Tuple3` and `Tuple4`.

pub mod array;
pub mod array_tuple;
pub mod record;

pub use array_tuple::{ArrayTuple, Tuple2, Tuple3, Tuple4};
