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

//! Loop-carried state of a single Dialectic Search run.
//!
//! `SearchState` owns the thesis the inner loop climbs from, the best solution
//! seen so far and both loop counters. All acceptance, stagnation and restart
//! rules live here, so the engine only has to sequence adapter calls and report
//! events. A fresh state is built for every run and dropped at its end.
//!
//! # Rules
//!
//! A synthesis is compared against the current thesis:
//! - strictly worse: rejected, the thesis stays, the local counter increments;
//! - equal: accepted as a lateral move, the local counter increments;
//! - strictly better: accepted, the local counter resets to zero.
//!
//! Independently, any accepted synthesis strictly better than the best solution
//! replaces it. A restart swaps the thesis for the antithesis of the last
//! iteration and advances the global counter. It never touches the best.

use dialectic_search::{incumbent::Incumbent, num::ObjectiveValue};

/// How a synthesis compares to the thesis it was offered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SynthesisVerdict {
    /// Strictly better than the thesis. Installed; stagnation resets.
    Improving,
    /// Exactly as good as the thesis. Installed; counts as stagnation.
    Lateral,
    /// Strictly worse than the thesis. Discarded; counts as stagnation.
    Rejected,
}

impl SynthesisVerdict {
    /// Judges a synthesis value against the current thesis value.
    #[inline]
    pub fn judge<V>(thesis_value: V, synthesis_value: V) -> Self
    where
        V: ObjectiveValue,
    {
        if thesis_value < synthesis_value {
            SynthesisVerdict::Rejected
        } else if synthesis_value < thesis_value {
            SynthesisVerdict::Improving
        } else {
            SynthesisVerdict::Lateral
        }
    }

    /// Returns `true` if the synthesis becomes the new thesis.
    #[inline]
    pub fn is_accepted(self) -> bool {
        !matches!(self, SynthesisVerdict::Rejected)
    }
}

impl std::fmt::Display for SynthesisVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SynthesisVerdict::Improving => write!(f, "Improving"),
            SynthesisVerdict::Lateral => write!(f, "Lateral"),
            SynthesisVerdict::Rejected => write!(f, "Rejected"),
        }
    }
}

/// What happened when a synthesis was offered to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SynthesisReport {
    /// How the synthesis compared to the thesis.
    pub verdict: SynthesisVerdict,
    /// Whether the synthesis replaced the best solution.
    pub new_best: bool,
}

/// Thesis, best solution and counters of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState<S, V> {
    thesis: S,
    thesis_value: V,
    best: Incumbent<S, V>,
    global_counter: u64,
    local_counter: u64,
}

impl<S, V> SearchState<S, V>
where
    S: Clone,
    V: ObjectiveValue,
{
    /// Creates the state from the greedily improved initial solution.
    ///
    /// The initial thesis is also the first best solution.
    #[inline]
    pub fn new(thesis: S, thesis_value: V) -> Self {
        Self {
            best: Incumbent::new(thesis.clone(), thesis_value),
            thesis,
            thesis_value,
            global_counter: 0,
            local_counter: 0,
        }
    }

    /// Returns the current thesis.
    #[inline]
    pub fn thesis(&self) -> &S {
        &self.thesis
    }

    /// Returns the objective value of the current thesis.
    #[inline]
    pub fn thesis_value(&self) -> V {
        self.thesis_value
    }

    /// Returns the best solution seen so far.
    #[inline]
    pub fn best_solution(&self) -> &S {
        self.best.solution()
    }

    /// Returns the objective value of the best solution.
    #[inline]
    pub fn best_value(&self) -> V {
        self.best.value()
    }

    /// Returns the number of completed outer passes.
    #[inline]
    pub fn global_counter(&self) -> u64 {
        self.global_counter
    }

    /// Returns the number of consecutive non-improving inner iterations.
    #[inline]
    pub fn local_counter(&self) -> u64 {
        self.local_counter
    }

    /// Returns `true` while another outer pass is permitted.
    #[inline]
    pub fn has_passes_left(&self, global_limit: u64) -> bool {
        self.global_counter < global_limit
    }

    /// Returns `true` once the current pass has stagnated.
    #[inline]
    pub fn is_stagnated(&self, local_limit: u64) -> bool {
        self.local_counter >= local_limit
    }

    /// Starts a new outer pass.
    #[inline]
    pub fn begin_pass(&mut self) {
        self.local_counter = 0;
    }

    /// Offers a greedily improved synthesis as the next thesis.
    ///
    /// Applies rejection, best update, reset-or-stagnate and acceptance, in
    /// that order.
    pub fn offer_synthesis(&mut self, synthesis: S, synthesis_value: V) -> SynthesisReport {
        let verdict = SynthesisVerdict::judge(self.thesis_value, synthesis_value);

        if verdict == SynthesisVerdict::Rejected {
            self.local_counter = self.local_counter.saturating_add(1);
            return SynthesisReport {
                verdict,
                new_best: false,
            };
        }

        let new_best = self.best.try_install(&synthesis, synthesis_value);

        match verdict {
            SynthesisVerdict::Improving => self.local_counter = 0,
            _ => self.local_counter = self.local_counter.saturating_add(1),
        }

        self.thesis = synthesis;
        self.thesis_value = synthesis_value;

        debug_assert!(
            !self.thesis_value.improves_on(self.best.value()),
            "called `SearchState::offer_synthesis` with inconsistent best value: thesis has {}, best has {}",
            self.thesis_value,
            self.best.value()
        );

        SynthesisReport { verdict, new_best }
    }

    /// Ends the current pass by continuing from `antithesis`.
    ///
    /// The thesis may get worse here; the best solution is left untouched.
    #[inline]
    pub fn restart(&mut self, antithesis: S, antithesis_value: V) {
        self.thesis = antithesis;
        self.thesis_value = antithesis_value;
        self.global_counter = self.global_counter.saturating_add(1);
    }

    /// Consumes the state, returning the best solution and its value.
    #[inline]
    pub fn into_best(self) -> (S, V) {
        self.best.into_inner()
    }
}
