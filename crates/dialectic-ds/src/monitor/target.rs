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

//! Target-value termination for Dialectic Search.
//!
//! `TargetValueMonitor` stops a run as soon as the best objective value reaches
//! a caller-supplied target, such as a known optimum or a lower bound. Without
//! it a run always spends its full iteration budget, even after the answer can
//! no longer improve.

use crate::{
    monitor::dialectic_monitor::DialecticMonitor, state::SynthesisVerdict,
    stats::DialecticStatistics,
};
use dialectic_search::{monitor::search_monitor::SearchCommand, num::ObjectiveValue};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetValueMonitor<V> {
    target: V,
    best: Option<V>,
}

impl<V> TargetValueMonitor<V>
where
    V: ObjectiveValue,
{
    /// Create a new monitor that terminates once the best value is `<= target`.
    pub fn new(target: V) -> Self {
        Self { target, best: None }
    }

    /// Returns the configured target.
    pub fn target(&self) -> V {
        self.target
    }

    /// Returns `true` once the best value seen has reached the target.
    pub fn is_reached(&self) -> bool {
        self.best.is_some_and(|best| best <= self.target)
    }
}

impl<S, V> DialecticMonitor<S, V> for TargetValueMonitor<V>
where
    V: ObjectiveValue,
{
    fn name(&self) -> &str {
        "TargetValueMonitor"
    }

    fn on_start(&mut self, _initial_thesis: &S, value: V) {
        self.best = Some(value);
    }

    fn on_end(&mut self, _best_solution: &S, _value: V, _statistics: &DialecticStatistics) {}

    fn on_synthesis_accepted(
        &mut self,
        _thesis: &S,
        _value: V,
        _verdict: SynthesisVerdict,
        _statistics: &DialecticStatistics,
    ) {
    }

    fn on_synthesis_rejected(&mut self, _value: V, _statistics: &DialecticStatistics) {}

    fn on_best_solution_updated(
        &mut self,
        _solution: &S,
        value: V,
        _statistics: &DialecticStatistics,
    ) {
        self.best = Some(value);
    }

    fn on_restart(&mut self, _thesis: &S, _value: V, _statistics: &DialecticStatistics) {}

    fn search_command(&mut self, _statistics: &DialecticStatistics) -> SearchCommand {
        match self.best {
            Some(best) if best <= self.target => SearchCommand::Terminate(format!(
                "Target value reached: {} (best={})",
                self.target, best
            )),
            _ => SearchCommand::Continue,
        }
    }
}
