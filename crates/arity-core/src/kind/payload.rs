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

//! Text and generic-object kinds.
//!
//! Both kinds may be absent, so their slot type is `Option<P>`. The payload
//! type decides which of the two kinds it belongs to through `Payload::KIND`.

use super::{Element, ElementKind, OptionalElement};
use std::{fmt::Debug, rc::Rc, sync::Arc};

/// A value that can be stored, possibly absent, in a text or object slot.
///
/// # Examples
///
/// ```rust
/// # use arity_core::kind::{Element, ElementKind, Payload};
/// #[derive(Clone, PartialEq, Debug)]
/// struct Tag(u32);
///
/// impl Payload for Tag {}
///
/// assert_eq!(<Option<Tag> as Element>::KIND, ElementKind::Object);
/// assert_eq!(<Option<String> as Element>::KIND, ElementKind::Text);
/// ```
pub trait Payload: Clone + PartialEq + Debug {
    /// The kind of slot this payload is stored in.
    const KIND: ElementKind = ElementKind::Object;
}

macro_rules! impl_text_payload_for {
    ($t:ty) => {
        impl Payload for $t {
            const KIND: ElementKind = ElementKind::Text;
        }
    };
}

impl_text_payload_for!(String);
impl_text_payload_for!(Box<str>);
impl_text_payload_for!(Rc<str>);
impl_text_payload_for!(Arc<str>);
impl_text_payload_for!(&'static str);

impl<P> Element for Option<P>
where
    P: Payload,
{
    const KIND: ElementKind = P::KIND;
}

impl<P> OptionalElement for Option<P>
where
    P: Payload,
{
    #[inline(always)]
    fn is_present(&self) -> bool {
        self.is_some()
    }
}
