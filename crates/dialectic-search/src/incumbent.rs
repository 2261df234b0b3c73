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

//! # Incumbent (Best Solution Holder)
//!
//! Keeps the best solution seen during a run together with its objective
//! value. A search may wander away from good regions on purpose (for example
//! when it restarts from a perturbed candidate), so the best answer is tracked
//! independently from whatever the search currently works on.
//!
//! ## Highlights
//!
//! - An incumbent always exists; it is seeded with the first evaluated solution.
//! - `try_install(&S, V) -> bool` installs strictly better candidates only and
//!   clones the candidate only when it is installed.
//! - The stored value therefore never increases over the lifetime of the holder.
//!
//! ## Usage
//!
//! ```rust
//! use dialectic_search::incumbent::Incumbent;
//!
//! let mut inc = Incumbent::new(vec![3, 1, 2], 7_i64);
//!
//! assert!(!inc.try_install(&vec![1, 3, 2], 7)); // ties are not improvements
//! assert!(inc.try_install(&vec![1, 2, 3], 4));
//!
//! let (solution, value) = inc.into_inner();
//! assert_eq!(solution, vec![1, 2, 3]);
//! assert_eq!(value, 4);
//! ```

use crate::num::ObjectiveValue;

/// The best solution found so far and its objective value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Incumbent<S, V> {
    solution: S,
    value: V,
    updates: u64,
}

impl<S, V> Incumbent<S, V>
where
    V: ObjectiveValue,
{
    /// Creates a new incumbent from an initial solution and its value.
    #[inline]
    pub fn new(solution: S, value: V) -> Self {
        Self {
            solution,
            value,
            updates: 0,
        }
    }

    /// Returns `true` if a candidate with `value` would replace the incumbent.
    #[inline]
    pub fn is_improved_by(&self, value: V) -> bool {
        value.improves_on(self.value)
    }

    /// Installs `candidate` if `value` is strictly better than the incumbent.
    ///
    /// Returns `true` if the candidate was installed.
    #[inline]
    pub fn try_install(&mut self, candidate: &S, value: V) -> bool
    where
        S: Clone,
    {
        if !self.is_improved_by(value) {
            return false;
        }

        self.solution = candidate.clone();
        self.value = value;
        self.updates = self.updates.saturating_add(1);
        true
    }

    /// Returns the incumbent solution.
    #[inline]
    pub fn solution(&self) -> &S {
        &self.solution
    }

    /// Returns the incumbent objective value.
    #[inline]
    pub fn value(&self) -> V {
        self.value
    }

    /// Returns how many times the incumbent has been replaced since creation.
    #[inline]
    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// Consumes the incumbent, returning the solution and its value.
    #[inline]
    pub fn into_inner(self) -> (S, V) {
        (self.solution, self.value)
    }
}

impl<S, V> std::fmt::Display for Incumbent<S, V>
where
    V: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Incumbent(objective={}, updates={})",
            self.value, self.updates
        )
    }
}
