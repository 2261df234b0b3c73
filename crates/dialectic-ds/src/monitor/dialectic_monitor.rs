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

//! Monitoring interface for Dialectic Search runs.
//!
//! This module defines callbacks for observing the lifecycle of a run: its
//! start and end, every synthesis as it is accepted or rejected, every change
//! of the best solution, and every diversification restart. Implementations can
//! stream logs, collect metrics, or stop the run early by returning a search
//! command. The default `search_command` continues, so monitors that only
//! observe stay lightweight.

use crate::{state::SynthesisVerdict, stats::DialecticStatistics};
use dialectic_search::monitor::search_monitor::SearchCommand;

/// A monitor for Dialectic Search.
///
/// `S` is the problem's solution type and `V` its objective value type.
pub trait DialecticMonitor<S, V> {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called once the initial solution has been greedily improved.
    fn on_start(&mut self, initial_thesis: &S, value: V);

    /// Called when the run ends, with the best solution found.
    fn on_end(&mut self, best_solution: &S, value: V, statistics: &DialecticStatistics);

    /// Called when a synthesis has been installed as the new thesis.
    fn on_synthesis_accepted(
        &mut self,
        thesis: &S,
        value: V,
        verdict: SynthesisVerdict,
        statistics: &DialecticStatistics,
    );

    /// Called when a synthesis was strictly worse than the thesis and discarded.
    fn on_synthesis_rejected(&mut self, value: V, statistics: &DialecticStatistics);

    /// Called when the best solution has been replaced.
    fn on_best_solution_updated(
        &mut self,
        solution: &S,
        value: V,
        statistics: &DialecticStatistics,
    );

    /// Called when a pass ends and the thesis is replaced by the last antithesis.
    fn on_restart(&mut self, thesis: &S, value: V, statistics: &DialecticStatistics);

    /// Determines whether the run may start its next inner iteration.
    fn search_command(&mut self, _statistics: &DialecticStatistics) -> SearchCommand {
        SearchCommand::Continue
    }
}

impl<S, V, M> DialecticMonitor<S, V> for &mut M
where
    M: DialecticMonitor<S, V> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_start(&mut self, initial_thesis: &S, value: V) {
        (**self).on_start(initial_thesis, value);
    }

    fn on_end(&mut self, best_solution: &S, value: V, statistics: &DialecticStatistics) {
        (**self).on_end(best_solution, value, statistics);
    }

    fn on_synthesis_accepted(
        &mut self,
        thesis: &S,
        value: V,
        verdict: SynthesisVerdict,
        statistics: &DialecticStatistics,
    ) {
        (**self).on_synthesis_accepted(thesis, value, verdict, statistics);
    }

    fn on_synthesis_rejected(&mut self, value: V, statistics: &DialecticStatistics) {
        (**self).on_synthesis_rejected(value, statistics);
    }

    fn on_best_solution_updated(
        &mut self,
        solution: &S,
        value: V,
        statistics: &DialecticStatistics,
    ) {
        (**self).on_best_solution_updated(solution, value, statistics);
    }

    fn on_restart(&mut self, thesis: &S, value: V, statistics: &DialecticStatistics) {
        (**self).on_restart(thesis, value, statistics);
    }

    fn search_command(&mut self, statistics: &DialecticStatistics) -> SearchCommand {
        (**self).search_command(statistics)
    }
}

impl<S, V> std::fmt::Debug for dyn DialecticMonitor<S, V> + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DialecticMonitor {{ name: {} }}", self.name())
    }
}

impl<S, V> std::fmt::Display for dyn DialecticMonitor<S, V> + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DialecticMonitor: {}", self.name())
    }
}
