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

//! # Objective Value Trait
//!
//! Unified bounds for the scalar an adapter reports as the quality of a
//! solution. The engine only ever compares values with `<`, so the trait is
//! deliberately loose: any `num_traits::Num` that is ordered, copyable and
//! printable qualifies. Integers and floats both work out of the box.
//!
//! ## Ordering
//!
//! Values are assumed to be totally ordered over the range an adapter actually
//! produces. Floating point `NaN` breaks every comparison the engine makes and
//! must never be returned by an adapter.

use num_traits::Num;

/// A trait alias for the objective values produced by a problem adapter.
///
/// Strictly smaller is strictly better. Implemented for every type that
/// satisfies the bounds, including all primitive integers and floats.
pub trait ObjectiveValue:
    Num + PartialOrd + Copy + std::fmt::Debug + std::fmt::Display + Send + Sync
{
    /// Returns `true` if `self` is strictly better than `other`.
    #[inline]
    fn improves_on(self, other: Self) -> bool {
        self < other
    }
}

impl<T> ObjectiveValue for T where
    T: Num + PartialOrd + Copy + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}
