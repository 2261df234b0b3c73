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

//! Dialectic Search outcome and termination reporting.
//!
//! The `DialecticOutcome` bundles the best solution discovered during a run
//! with its objective value, the aggregate statistics and the reason the run
//! stopped. A run either completes all of its outer passes or is aborted by a
//! monitor. Adapter failures are not outcomes; they are returned as errors.

use crate::stats::DialecticStatistics;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DialecticTerminationReason {
    /// All outer passes permitted by the global limit were executed.
    Completed,

    /// A monitor requested termination.
    /// The string contains the monitor's reason.
    Aborted(String),
}

impl std::fmt::Display for DialecticTerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DialecticTerminationReason::Completed => write!(f, "Global Limit Reached"),
            DialecticTerminationReason::Aborted(msg) => write!(f, "Aborted: {}", msg),
        }
    }
}

/// Result of a Dialectic Search run.
#[derive(Debug, Clone, PartialEq)]
pub struct DialecticOutcome<S, V> {
    termination_reason: DialecticTerminationReason,
    solution: S,
    value: V,
    statistics: DialecticStatistics,
}

impl<S, V> DialecticOutcome<S, V>
where
    V: Copy,
{
    /// Creates an outcome for a run that used up its global limit.
    #[inline]
    pub fn completed(solution: S, value: V, statistics: DialecticStatistics) -> Self {
        Self {
            termination_reason: DialecticTerminationReason::Completed,
            solution,
            value,
            statistics,
        }
    }

    /// Creates an outcome for a run stopped by a monitor.
    #[inline]
    pub fn aborted<R>(solution: S, value: V, reason: R, statistics: DialecticStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            termination_reason: DialecticTerminationReason::Aborted(reason.into()),
            solution,
            value,
            statistics,
        }
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &DialecticTerminationReason {
        &self.termination_reason
    }

    /// Returns the best solution.
    #[inline]
    pub fn solution(&self) -> &S {
        &self.solution
    }

    /// Returns the objective value of the best solution.
    #[inline]
    pub fn value(&self) -> V {
        self.value
    }

    /// Returns the statistics.
    #[inline]
    pub fn statistics(&self) -> &DialecticStatistics {
        &self.statistics
    }

    /// Returns `true` if the run executed every outer pass.
    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(
            self.termination_reason,
            DialecticTerminationReason::Completed
        )
    }

    /// Consumes the outcome, returning the best solution and its value.
    #[inline]
    pub fn into_best(self) -> (S, V) {
        (self.solution, self.value)
    }
}

impl<S, V> std::fmt::Display for DialecticOutcome<S, V>
where
    V: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DialecticOutcome(objective={}, reason={}, passes={}, iterations={})",
            self.value,
            self.termination_reason,
            self.statistics.passes,
            self.statistics.iterations
        )
    }
}
