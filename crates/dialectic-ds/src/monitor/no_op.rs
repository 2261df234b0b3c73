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
    monitor::dialectic_monitor::DialecticMonitor, state::SynthesisVerdict,
    stats::DialecticStatistics,
};

/// A no-operation monitor that ignores every event and never stops the run.
///
/// `DialecticSearch::search` runs with this monitor.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor;

impl NoOperationMonitor {
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self
    }
}

impl<S, V> DialecticMonitor<S, V> for NoOperationMonitor {
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_start(&mut self, _initial_thesis: &S, _value: V) {}

    #[inline(always)]
    fn on_end(&mut self, _best_solution: &S, _value: V, _statistics: &DialecticStatistics) {}

    #[inline(always)]
    fn on_synthesis_accepted(
        &mut self,
        _thesis: &S,
        _value: V,
        _verdict: SynthesisVerdict,
        _statistics: &DialecticStatistics,
    ) {
    }

    #[inline(always)]
    fn on_synthesis_rejected(&mut self, _value: V, _statistics: &DialecticStatistics) {}

    #[inline(always)]
    fn on_best_solution_updated(
        &mut self,
        _solution: &S,
        _value: V,
        _statistics: &DialecticStatistics,
    ) {
    }

    #[inline(always)]
    fn on_restart(&mut self, _thesis: &S, _value: V, _statistics: &DialecticStatistics) {}
}
