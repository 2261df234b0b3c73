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
use dialectic_search::{monitor::search_monitor::SearchCommand, num::ObjectiveValue};

/// Fans every event out to a list of monitors, in insertion order.
pub struct CompositeDialecticMonitor<'a, S, V> {
    monitors: Vec<Box<dyn DialecticMonitor<S, V> + 'a>>,
}

impl<'a, S, V> Default for CompositeDialecticMonitor<'a, S, V> {
    fn default() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }
}

impl<'a, S, V> CompositeDialecticMonitor<'a, S, V> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: DialecticMonitor<S, V> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    #[inline]
    pub fn add_boxed_monitor(&mut self, monitor: Box<dyn DialecticMonitor<S, V> + 'a>) {
        self.monitors.push(monitor);
    }

    #[inline]
    pub fn add_boxed_monitors<I>(&mut self, monitors: I)
    where
        I: IntoIterator<Item = Box<dyn DialecticMonitor<S, V> + 'a>>,
    {
        self.monitors.extend(monitors);
    }

    #[inline]
    pub fn monitors(&self) -> &[Box<dyn DialecticMonitor<S, V> + 'a>] {
        &self.monitors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, S, V> std::fmt::Debug for CompositeDialecticMonitor<'a, S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeDialecticMonitor")
            .field("monitors", &self.monitors)
            .finish()
    }
}

impl<'a, S, V> DialecticMonitor<S, V> for CompositeDialecticMonitor<'a, S, V>
where
    V: ObjectiveValue,
{
    fn name(&self) -> &str {
        "CompositeDialecticMonitor"
    }

    fn on_start(&mut self, initial_thesis: &S, value: V) {
        for m in &mut self.monitors {
            m.on_start(initial_thesis, value);
        }
    }

    fn on_end(&mut self, best_solution: &S, value: V, statistics: &DialecticStatistics) {
        for m in &mut self.monitors {
            m.on_end(best_solution, value, statistics);
        }
    }

    fn on_synthesis_accepted(
        &mut self,
        thesis: &S,
        value: V,
        verdict: SynthesisVerdict,
        statistics: &DialecticStatistics,
    ) {
        for m in &mut self.monitors {
            m.on_synthesis_accepted(thesis, value, verdict, statistics);
        }
    }

    fn on_synthesis_rejected(&mut self, value: V, statistics: &DialecticStatistics) {
        for m in &mut self.monitors {
            m.on_synthesis_rejected(value, statistics);
        }
    }

    fn on_best_solution_updated(
        &mut self,
        solution: &S,
        value: V,
        statistics: &DialecticStatistics,
    ) {
        for m in &mut self.monitors {
            m.on_best_solution_updated(solution, value, statistics);
        }
    }

    fn on_restart(&mut self, thesis: &S, value: V, statistics: &DialecticStatistics) {
        for m in &mut self.monitors {
            m.on_restart(thesis, value, statistics);
        }
    }

    fn search_command(&mut self, statistics: &DialecticStatistics) -> SearchCommand {
        for m in &mut self.monitors {
            match m.search_command(statistics) {
                SearchCommand::Continue => continue,
                // First terminate request wins so the reported reason is deterministic.
                SearchCommand::Terminate(msg) => return SearchCommand::Terminate(msg),
            }
        }
        SearchCommand::Continue
    }
}
