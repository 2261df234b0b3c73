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

//! Structured progress logging for Dialectic Search.
//!
//! `LogMonitor` turns engine events into `tracing` events. Start, every new
//! best solution and the final summary are logged at `INFO`. Restarts are the
//! most frequent event on long runs, so only every `restart_interval`-th one is
//! logged, at `DEBUG`. The monitor never installs a subscriber; route the
//! events wherever the host application already sends its logs.

use crate::{
    monitor::dialectic_monitor::DialecticMonitor, state::SynthesisVerdict,
    stats::DialecticStatistics,
};
use dialectic_search::num::ObjectiveValue;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    restart_interval: u64,
    restarts_seen: u64,
}

impl LogMonitor {
    /// Default number of restarts between two logged restarts.
    pub const DEFAULT_RESTART_INTERVAL: u64 = 10;

    /// Creates a monitor logging every `restart_interval`-th restart.
    ///
    /// An interval of zero disables restart logging.
    pub fn new(restart_interval: u64) -> Self {
        Self {
            start_time: Instant::now(),
            restart_interval,
            restarts_seen: 0,
        }
    }

    /// Returns the configured restart interval.
    pub fn restart_interval(&self) -> u64 {
        self.restart_interval
    }

    #[inline]
    fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.start_time.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RESTART_INTERVAL)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(restart_interval: {})", self.restart_interval)
    }
}

impl<S, V> DialecticMonitor<S, V> for LogMonitor
where
    V: ObjectiveValue,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_start(&mut self, _initial_thesis: &S, value: V) {
        self.start_time = Instant::now();
        self.restarts_seen = 0;
        info!(initial_value = %value, "dialectic search started");
    }

    fn on_end(&mut self, _best_solution: &S, value: V, statistics: &DialecticStatistics) {
        info!(
            best_value = %value,
            passes = statistics.passes,
            iterations = statistics.iterations,
            accepted = statistics.accepted_syntheses(),
            rejected = statistics.rejected_syntheses,
            best_updates = statistics.best_updates,
            elapsed_ms = self.elapsed_ms(),
            "dialectic search finished"
        );
    }

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
        statistics: &DialecticStatistics,
    ) {
        info!(
            best_value = %value,
            pass = statistics.passes,
            iteration = statistics.iterations,
            elapsed_ms = self.elapsed_ms(),
            "new best solution"
        );
    }

    fn on_restart(&mut self, _thesis: &S, value: V, statistics: &DialecticStatistics) {
        self.restarts_seen = self.restarts_seen.saturating_add(1);
        if self.restart_interval != 0 && self.restarts_seen % self.restart_interval == 0 {
            debug!(
                thesis_value = %value,
                passes = statistics.passes,
                iterations = statistics.iterations,
                elapsed_ms = self.elapsed_ms(),
                "diversification restart"
            );
        }
    }
}
