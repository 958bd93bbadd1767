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

use crate::{
    factory::TupleFactory,
    read::TupleRead,
    slot::{Dimension, Slot, SupportedArity},
    write::TupleWrite,
};
use arity_core::kind::{Element, ZeroElement};

/// A fixed-arity container backed by an array.
///
/// # Examples
///
/// ```rust
/// # use arity_tuple::prelude::*;
/// let v = Tuple3::new([1, 2, 3]);
/// assert_eq!(v[Slot::SECOND], 2);
/// assert_eq!(format!("{}", v), "(1, 2, 3)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ArrayTuple<T, const N: usize> {
    components: [T; N],
}

/// A two-component `ArrayTuple`.
pub type Tuple2<T> = ArrayTuple<T, 2>;
/// A three-component `ArrayTuple`.
pub type Tuple3<T> = ArrayTuple<T, 3>;
/// A four-component `ArrayTuple`.
pub type Tuple4<T> = ArrayTuple<T, 4>;

impl<T, const N: usize> ArrayTuple<T, N>
where
    Dimension<N>: SupportedArity,
{
    /// Creates a new `ArrayTuple` from its components.
    #[inline(always)]
    pub const fn new(components: [T; N]) -> Self {
        Self { components }
    }

    /// Consumes the tuple and returns its components.
    #[inline(always)]
    pub fn into_inner(self) -> [T; N] {
        self.components
    }

    /// Returns the components as a slice, in slot order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    /// Returns an iterator over the components, in slot order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.components.iter()
    }
}

impl<T, const N: usize> ArrayTuple<T, N>
where
    T: ZeroElement,
    Dimension<N>: SupportedArity,
{
    /// Creates a tuple whose components are all zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arity_tuple::prelude::*;
    /// assert!(Tuple4::<f64>::zero().is_zero());
    /// ```
    #[inline]
    pub fn zero() -> Self {
        Self::new(std::array::from_fn(|_| T::zero()))
    }
}

impl<T, const N: usize> Default for ArrayTuple<T, N>
where
    T: ZeroElement,
    Dimension<N>: SupportedArity,
{
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> TupleRead<T, N> for ArrayTuple<T, N>
where
    T: Element,
    Dimension<N>: SupportedArity,
{
    #[inline(always)]
    fn component(&self, slot: Slot<N>) -> T {
        self.components[slot.index()].clone()
    }
}

impl<T, const N: usize> TupleWrite<T, N> for ArrayTuple<T, N>
where
    T: Element,
    Dimension<N>: SupportedArity,
{
    #[inline(always)]
    fn set_component(&mut self, slot: Slot<N>, value: T) {
        self.components[slot.index()] = value;
    }
}

impl<T, const N: usize> TupleFactory<T, N> for ArrayTuple<T, N>
where
    T: Element,
    Dimension<N>: SupportedArity,
{
    #[inline(always)]
    fn with_values(&self, values: [T; N]) -> Self {
        Self::new(values)
    }
}

impl<T, const N: usize> std::ops::Index<Slot<N>> for ArrayTuple<T, N>
where
    Dimension<N>: SupportedArity,
{
    type Output = T;

    #[inline(always)]
    fn index(&self, slot: Slot<N>) -> &Self::Output {
        &self.components[slot.index()]
    }
}

impl<T, const N: usize> std::ops::IndexMut<Slot<N>> for ArrayTuple<T, N>
where
    Dimension<N>: SupportedArity,
{
    #[inline(always)]
    fn index_mut(&mut self, slot: Slot<N>) -> &mut Self::Output {
        &mut self.components[slot.index()]
    }
}

impl<T, const N: usize> std::fmt::Display for ArrayTuple<T, N>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (index, component) in self.components.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", component)?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayTuple<T, N>
where
    Dimension<N>: SupportedArity,
{
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self::new(components)
    }
}

impl<T, const N: usize> From<ArrayTuple<T, N>> for [T; N] {
    #[inline]
    fn from(tuple: ArrayTuple<T, N>) -> Self {
        tuple.components
    }
}

impl<T> From<(T, T)> for ArrayTuple<T, 2> {
    #[inline]
    fn from((a, b): (T, T)) -> Self {
        Self::new([a, b])
    }
}

impl<T> From<(T, T, T)> for ArrayTuple<T, 3> {
    #[inline]
    fn from((a, b, c): (T, T, T)) -> Self {
        Self::new([a, b, c])
    }
}

impl<T> From<(T, T, T, T)> for ArrayTuple<T, 4> {
    #[inline]
    fn from((a, b, c, d): (T, T, T, T)) -> Self {
        Self::new([a, b, c, d])
    }
}

impl<T, const N: usize> IntoIterator for ArrayTuple<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a ArrayTuple<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
