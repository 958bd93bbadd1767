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

//! # Arity Tuple
//!
//! Generic contracts for fixed-arity component containers: values with two,
//! three or four components of one element kind, addressable by name
//! (`first` .. `fourth`) and by index. Each contract is written once,
//! generic over the element type `T` and the arity `N`; per-kind behavior
//! comes from the element traits in `arity-core`.
//!
//! ## Capabilities
//!
//! - `TupleRead`: accessors, indexed dispatch, equality (exact and within a
//!   tolerance), zero/finiteness/validity checks and array export.
//! - `TupleFactory`: builds new instances of the implementing type from
//!   values, slices or other containers, so generic code never needs a
//!   constructor.
//! - `TupleWrite`: fluent in-place setters and array import.
//! - `TupleMutable`: the composition of read and write, with one canonical
//!   implementation per method.
//!
//! ## Modules
//!
//! - `slot`: `Slot<N>` validated indices and the `Dimension<N>` arity markers.
//! - `read`, `write`, `mutable`, `factory`: the capability contracts.
//! - `containers`: Implementations for arrays, Rust tuples and `ArrayTuple`.
//! - `error`: `TupleError`, its `ErrorCategory`, and the `Result` alias.
//!
//! ```rust
//! use arity_tuple::prelude::*;
//!
//! fn scaled<C>(c: &C, factor: f64) -> C
//! where
//!     C: TupleFactory<f64, 3>,
//! {
//!     let [x, y, z] = c.to_values();
//!     c.with_values([x * factor, y * factor, z * factor])
//! }
//!
//! let v = Tuple3::new([1.0, 2.0, 3.0]);
//! assert_eq!(scaled(&v, 2.0), Tuple3::new([2.0, 4.0, 6.0]));
//! assert_eq!(scaled(&(1.0, 0.0, 0.0), 0.5), (0.5, 0.0, 0.0));
//! ```

pub mod containers;
pub mod error;
pub mod factory;
pub mod mutable;
pub mod read;
pub mod slot;
pub mod write;

pub use containers::{ArrayTuple, Tuple2, Tuple3, Tuple4};
pub use error::{ErrorCategory, Result, TupleError};
pub use factory::TupleFactory;
pub use mutable::TupleMutable;
pub use read::TupleRead;
pub use slot::{Dimension, Slot};
pub use write::TupleWrite;

/// Items intended for glob-import: `use arity_tuple::prelude::*;`
pub mod prelude {
    pub use crate::{
        containers::{ArrayTuple, Tuple2, Tuple3, Tuple4},
        error::{ErrorCategory, TupleError},
        factory::TupleFactory,
        mutable::TupleMutable,
        read::TupleRead,
        slot::Slot,
        write::TupleWrite,
    };
}
