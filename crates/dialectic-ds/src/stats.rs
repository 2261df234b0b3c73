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

//! Statistics reporting for Dialectic Search runs.
//!
//! This module defines a lightweight container for aggregate metrics gathered
//! during a run: completed outer passes, inner iterations, how each synthesis
//! was judged against the thesis (improving, lateral or rejected), how often
//! the best solution changed, and the total elapsed time. Updates use
//! saturating arithmetic so long runs never trap on overflow.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DialecticStatistics {
    /// Number of completed outer passes (each ends with a restart).
    pub passes: u64,

    /// Number of inner iterations, i.e. thesis/antithesis/synthesis rounds.
    pub iterations: u64,

    /// Syntheses strictly better than the thesis they replaced.
    pub improving_syntheses: u64,

    /// Syntheses exactly as good as the thesis they replaced.
    pub lateral_syntheses: u64,

    /// Syntheses strictly worse than the thesis, discarded.
    pub rejected_syntheses: u64,

    /// Number of times the best solution was replaced.
    pub best_updates: u64,

    /// Total time taken by the run.
    pub time_total: Duration,
}

impl Default for DialecticStatistics {
    fn default() -> Self {
        Self {
            passes: 0,
            iterations: 0,
            improving_syntheses: 0,
            lateral_syntheses: 0,
            rejected_syntheses: 0,
            best_updates: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl DialecticStatistics {
    /// Called at the start of each inner iteration.
    #[inline]
    pub fn on_iteration(&mut self) {
        self.iterations = self.iterations.saturating_add(1);
    }

    /// Called when a pass ends with a restart.
    #[inline]
    pub fn on_pass_completed(&mut self) {
        self.passes = self.passes.saturating_add(1);
    }

    #[inline]
    pub fn on_improving_synthesis(&mut self) {
        self.improving_syntheses = self.improving_syntheses.saturating_add(1);
    }

    #[inline]
    pub fn on_lateral_synthesis(&mut self) {
        self.lateral_syntheses = self.lateral_syntheses.saturating_add(1);
    }

    #[inline]
    pub fn on_rejected_synthesis(&mut self) {
        self.rejected_syntheses = self.rejected_syntheses.saturating_add(1);
    }

    #[inline]
    pub fn on_best_update(&mut self) {
        self.best_updates = self.best_updates.saturating_add(1);
    }

    /// Sets the total time taken by the run.
    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Number of syntheses installed as the new thesis.
    #[inline]
    pub fn accepted_syntheses(&self) -> u64 {
        self.improving_syntheses.saturating_add(self.lateral_syntheses)
    }
}

impl std::fmt::Display for DialecticStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Dialectic Search Statistics:")?;
        writeln!(f, "   Passes:               {}", self.passes)?;
        writeln!(f, "   Iterations:           {}", self.iterations)?;
        writeln!(f, "   Improving Syntheses:  {}", self.improving_syntheses)?;
        writeln!(f, "   Lateral Syntheses:    {}", self.lateral_syntheses)?;
        writeln!(f, "   Rejected Syntheses:   {}", self.rejected_syntheses)?;
        writeln!(f, "   Best Updates:         {}", self.best_updates)?;
        writeln!(f, "   Total Time:           {:?}", self.time_total)?;
        Ok(())
    }
}
