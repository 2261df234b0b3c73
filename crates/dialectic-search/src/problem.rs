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

//! Problem adapter interface for Dialectic Search.
//!
//! The engine never looks inside a solution. Everything it needs to know about
//! a problem is funneled through `DialecticProblem`: how to build a starting
//! point, how to polish a candidate into a local optimum, how to perturb one,
//! how to recombine two, and how to score one on its own.
//!
//! Operations that may draw random numbers take `&mut self`, so an adapter can
//! own its generator and a run stays reproducible under a fixed seed. Every
//! operation is fallible through the associated `Error` type; the engine hands
//! such errors back to its caller untouched. Adapters that cannot fail should
//! use `std::convert::Infallible`.

use crate::num::ObjectiveValue;

/// The capability set a problem must provide to be searched dialectically.
pub trait DialecticProblem {
    /// The opaque candidate representation.
    type Solution: Clone;

    /// The objective value; strictly smaller is strictly better.
    type Value: ObjectiveValue;

    /// The failure type of the adapter operations.
    type Error;

    /// Returns the name of the problem, used in log output.
    fn name(&self) -> &str {
        "DialecticProblem"
    }

    /// Produces a structurally valid starting candidate. May be randomized.
    fn init_solution(&mut self) -> Result<Self::Solution, Self::Error>;

    /// Returns a candidate no worse than `solution`, paired with its objective value.
    ///
    /// Must terminate; the engine has no way to interrupt it.
    fn greedy_improvement(
        &mut self,
        solution: Self::Solution,
    ) -> Result<(Self::Solution, Self::Value), Self::Error>;

    /// Produces a perturbed variant of `solution`. May be randomized.
    fn modify(&mut self, solution: &Self::Solution) -> Result<Self::Solution, Self::Error>;

    /// Recombines `thesis` and `antithesis` into a single candidate.
    ///
    /// The result need not be evaluated; the engine always passes it through
    /// `greedy_improvement` afterwards.
    fn merge(
        &mut self,
        thesis: &Self::Solution,
        antithesis: &Self::Solution,
    ) -> Result<Self::Solution, Self::Error>;

    /// Computes the objective value of `solution`.
    ///
    /// The search loop takes its values from `greedy_improvement` and never calls this.
    fn evaluate(&self, solution: &Self::Solution) -> Result<Self::Value, Self::Error>;
}

impl<P> DialecticProblem for &mut P
where
    P: DialecticProblem + ?Sized,
{
    type Solution = P::Solution;
    type Value = P::Value;
    type Error = P::Error;

    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn init_solution(&mut self) -> Result<Self::Solution, Self::Error> {
        (**self).init_solution()
    }

    #[inline]
    fn greedy_improvement(
        &mut self,
        solution: Self::Solution,
    ) -> Result<(Self::Solution, Self::Value), Self::Error> {
        (**self).greedy_improvement(solution)
    }

    #[inline]
    fn modify(&mut self, solution: &Self::Solution) -> Result<Self::Solution, Self::Error> {
        (**self).modify(solution)
    }

    #[inline]
    fn merge(
        &mut self,
        thesis: &Self::Solution,
        antithesis: &Self::Solution,
    ) -> Result<Self::Solution, Self::Error> {
        (**self).merge(thesis, antithesis)
    }

    #[inline]
    fn evaluate(&self, solution: &Self::Solution) -> Result<Self::Value, Self::Error> {
        (**self).evaluate(solution)
    }
}

impl<P> DialecticProblem for Box<P>
where
    P: DialecticProblem + ?Sized,
{
    type Solution = P::Solution;
    type Value = P::Value;
    type Error = P::Error;

    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn init_solution(&mut self) -> Result<Self::Solution, Self::Error> {
        (**self).init_solution()
    }

    #[inline]
    fn greedy_improvement(
        &mut self,
        solution: Self::Solution,
    ) -> Result<(Self::Solution, Self::Value), Self::Error> {
        (**self).greedy_improvement(solution)
    }

    #[inline]
    fn modify(&mut self, solution: &Self::Solution) -> Result<Self::Solution, Self::Error> {
        (**self).modify(solution)
    }

    #[inline]
    fn merge(
        &mut self,
        thesis: &Self::Solution,
        antithesis: &Self::Solution,
    ) -> Result<Self::Solution, Self::Error> {
        (**self).merge(thesis, antithesis)
    }

    #[inline]
    fn evaluate(&self, solution: &Self::Solution) -> Result<Self::Value, Self::Error> {
        (**self).evaluate(solution)
    }
}

impl<S, V, E> std::fmt::Debug for dyn DialecticProblem<Solution = S, Value = V, Error = E>
where
    S: Clone,
    V: ObjectiveValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DialecticProblem {{ name: {} }}", self.name())
    }
}
