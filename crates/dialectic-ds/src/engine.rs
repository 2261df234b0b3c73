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

//! Dialectic Search driver.
//!
//! The engine starts from a greedily improved initial solution (the thesis)
//! and repeats two nested loops. Each inner iteration perturbs and re-improves
//! the thesis into an antithesis, merges both, and re-improves the merge into a
//! synthesis. A synthesis no worse than the thesis replaces it; only a strict
//! improvement resets the stagnation counter. Once the counter reaches the local
//! limit the pass ends with a diversification restart from the last
//! antithesis. The best solution is tracked independently throughout, so a
//! restart can never make the reported answer worse.
//!
//! All problem knowledge comes from a `DialecticProblem` adapter. The engine
//! calls it strictly in sequence, never retries, and hands any adapter error
//! straight back to the caller.

use crate::{
    config::{ConfigError, SearchConfig},
    monitor::{dialectic_monitor::DialecticMonitor, no_op::NoOperationMonitor},
    result::{DialecticOutcome, DialecticTerminationReason},
    state::{SearchState, SynthesisVerdict},
    stats::DialecticStatistics,
};
use dialectic_search::{monitor::search_monitor::SearchCommand, problem::DialecticProblem};
use std::time::Instant;
use tracing::{debug, trace};

/// Dialectic Search over a problem adapter `P`.
///
/// The engine holds only the adapter and the limits. Every call to `search` or
/// `run` builds a fresh `SearchState`, so calls are independent of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialecticSearch<P> {
    problem: P,
    config: SearchConfig,
}

impl<P> DialecticSearch<P>
where
    P: DialecticProblem,
{
    /// Creates a new engine.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroLocalLimit`] if `local_limit` is zero.
    #[inline]
    pub fn new(problem: P, global_limit: u64, local_limit: u64) -> Result<Self, ConfigError> {
        Ok(Self::with_config(
            problem,
            SearchConfig::new(global_limit, local_limit)?,
        ))
    }

    /// Creates a new engine from an already validated configuration.
    #[inline]
    pub fn with_config(problem: P, config: SearchConfig) -> Self {
        Self { problem, config }
    }

    /// Returns the search limits.
    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Returns the problem adapter.
    #[inline]
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Returns the problem adapter mutably.
    #[inline]
    pub fn problem_mut(&mut self) -> &mut P {
        &mut self.problem
    }

    /// Consumes the engine, returning the problem adapter.
    #[inline]
    pub fn into_problem(self) -> P {
        self.problem
    }

    /// Runs the search to completion and returns the best solution and its value.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the problem adapter, unchanged.
    #[inline]
    pub fn search(&mut self) -> Result<(P::Solution, P::Value), P::Error> {
        self.run(&mut NoOperationMonitor::new())
            .map(DialecticOutcome::into_best)
    }

    /// Runs the search while reporting to `monitor`.
    ///
    /// Before every inner iteration the monitor is asked whether to continue.
    /// A termination request ends the run immediately, without the restart
    /// step, and is reported as [`DialecticTerminationReason::Aborted`].
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the problem adapter, unchanged. The
    /// partial state of the run is discarded.
    #[tracing::instrument(
        level = "debug",
        name = "dialectic_search",
        skip_all,
        fields(
            problem = self.problem.name(),
            global_limit = self.config.global_limit(),
            local_limit = self.config.local_limit(),
        )
    )]
    pub fn run<M>(
        &mut self,
        monitor: &mut M,
    ) -> Result<DialecticOutcome<P::Solution, P::Value>, P::Error>
    where
        M: DialecticMonitor<P::Solution, P::Value> + ?Sized,
    {
        let start_time = Instant::now();
        let mut stats = DialecticStatistics::default();
        let global_limit = self.config.global_limit();
        let local_limit = self.config.local_limit();

        let initial = self.problem.init_solution()?;
        let (thesis, thesis_value) = self.problem.greedy_improvement(initial)?;
        let mut state = SearchState::new(thesis, thesis_value);

        debug!(initial_value = %thesis_value, "initial thesis improved");
        monitor.on_start(state.thesis(), state.thesis_value());

        let termination_reason = 'global: loop {
            if !state.has_passes_left(global_limit) {
                break DialecticTerminationReason::Completed;
            }

            state.begin_pass();

            // At least one iteration always runs since `local_limit >= 1`, so
            // the restart below always has an antithesis to continue from.
            let (antithesis, antithesis_value) = loop {
                if let SearchCommand::Terminate(reason) = monitor.search_command(&stats) {
                    break 'global DialecticTerminationReason::Aborted(reason);
                }

                stats.on_iteration();

                let perturbed = self.problem.modify(state.thesis())?;
                let (antithesis, antithesis_value) = self.problem.greedy_improvement(perturbed)?;

                let merged = self.problem.merge(state.thesis(), &antithesis)?;
                let (synthesis, synthesis_value) = self.problem.greedy_improvement(merged)?;

                trace!(
                    thesis_value = %state.thesis_value(),
                    antithesis_value = %antithesis_value,
                    synthesis_value = %synthesis_value,
                    local_counter = state.local_counter(),
                    "dialectic step"
                );

                let report = state.offer_synthesis(synthesis, synthesis_value);
                match report.verdict {
                    SynthesisVerdict::Rejected => {
                        stats.on_rejected_synthesis();
                        monitor.on_synthesis_rejected(synthesis_value, &stats);
                    }
                    verdict => {
                        if verdict == SynthesisVerdict::Improving {
                            stats.on_improving_synthesis();
                        } else {
                            stats.on_lateral_synthesis();
                        }
                        monitor.on_synthesis_accepted(
                            state.thesis(),
                            state.thesis_value(),
                            verdict,
                            &stats,
                        );
                    }
                }

                if report.new_best {
                    stats.on_best_update();
                    monitor.on_best_solution_updated(
                        state.best_solution(),
                        state.best_value(),
                        &stats,
                    );
                }

                if state.is_stagnated(local_limit) {
                    break (antithesis, antithesis_value);
                }
            };

            state.restart(antithesis, antithesis_value);
            stats.on_pass_completed();

            debug_assert!(
                state.global_counter() == stats.passes,
                "called `DialecticSearch::run` with inconsistent pass count: state has {}, statistics have {}",
                state.global_counter(),
                stats.passes
            );

            debug!(
                pass = stats.passes,
                thesis_value = %state.thesis_value(),
                best_value = %state.best_value(),
                "pass finished, restarting from antithesis"
            );
            monitor.on_restart(state.thesis(), state.thesis_value(), &stats);
        };

        stats.set_total_time(start_time.elapsed());
        monitor.on_end(state.best_solution(), state.best_value(), &stats);
        debug!(
            best_value = %state.best_value(),
            reason = %termination_reason,
            iterations = stats.iterations,
            "dialectic search finished"
        );

        let (solution, value) = state.into_best();
        Ok(match termination_reason {
            DialecticTerminationReason::Completed => {
                DialecticOutcome::completed(solution, value, stats)
            }
            DialecticTerminationReason::Aborted(reason) => {
                DialecticOutcome::aborted(solution, value, reason, stats)
            }
        })
    }
}

impl<P> std::fmt::Display for DialecticSearch<P>
where
    P: DialecticProblem,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DialecticSearch(problem: {}, {})",
            self.problem.name(),
            self.config
        )
    }
}

#[cfg(test)]
mod tests {
    use super::DialecticSearch;
    use crate::{
        config::{ConfigError, SearchConfig},
        monitor::{dialectic_monitor::DialecticMonitor, target::TargetValueMonitor},
        result::DialecticTerminationReason,
        state::SynthesisVerdict,
        stats::DialecticStatistics,
    };
    use dialectic_search::problem::DialecticProblem;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::collections::VecDeque;
    use std::convert::Infallible;

    /// Minimizes `|x - 5|`: start at 0, unit-step greedy, `modify(x) = x + 3`,
    /// `merge(a, b) = floor((a + b) / 2)`. Records every adapter call.
    #[derive(Debug, Default)]
    struct Line {
        calls: Vec<String>,
    }

    impl Line {
        fn value(x: i64) -> i64 {
            (x - 5).abs()
        }
    }

    impl DialecticProblem for Line {
        type Solution = i64;
        type Value = i64;
        type Error = Infallible;

        fn name(&self) -> &str {
            "Line"
        }

        fn init_solution(&mut self) -> Result<i64, Infallible> {
            self.calls.push("init".to_string());
            Ok(0)
        }

        fn greedy_improvement(&mut self, x: i64) -> Result<(i64, i64), Infallible> {
            self.calls.push(format!("greedy({})", x));
            let mut best = x - 1;
            for candidate in [x, x + 1] {
                if Self::value(candidate) < Self::value(best) {
                    best = candidate;
                }
            }
            Ok((best, Self::value(best)))
        }

        fn modify(&mut self, x: &i64) -> Result<i64, Infallible> {
            self.calls.push(format!("modify({})", x));
            Ok(x + 3)
        }

        fn merge(&mut self, a: &i64, b: &i64) -> Result<i64, Infallible> {
            self.calls.push(format!("merge({},{})", a, b));
            Ok((a + b).div_euclid(2))
        }

        fn evaluate(&self, x: &i64) -> Result<i64, Infallible> {
            Ok(Self::value(*x))
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum ScriptError {
        Exhausted,
        Injected(usize),
    }

    /// Replays a fixed sequence of `(solution, value)` pairs from `greedy_improvement`.
    ///
    /// `modify` and `merge` only record their arguments. Once the script runs
    /// dry, `greedy_improvement` echoes its input with `fallback`, or fails if
    /// there is none.
    #[derive(Debug)]
    struct Scripted {
        script: VecDeque<(u32, i64)>,
        fallback: Option<i64>,
        fail_on_modify: Option<usize>,
        modified: Vec<u32>,
        merged: Vec<(u32, u32)>,
        greedy_calls: usize,
    }

    impl Scripted {
        fn new(script: &[(u32, i64)]) -> Self {
            Self {
                script: script.iter().copied().collect(),
                fallback: None,
                fail_on_modify: None,
                modified: Vec::new(),
                merged: Vec::new(),
                greedy_calls: 0,
            }
        }

        fn with_fallback(mut self, value: i64) -> Self {
            self.fallback = Some(value);
            self
        }

        fn failing_on_modify(mut self, call: usize) -> Self {
            self.fail_on_modify = Some(call);
            self
        }
    }

    impl DialecticProblem for Scripted {
        type Solution = u32;
        type Value = i64;
        type Error = ScriptError;

        fn init_solution(&mut self) -> Result<u32, ScriptError> {
            Ok(u32::MAX)
        }

        fn greedy_improvement(&mut self, solution: u32) -> Result<(u32, i64), ScriptError> {
            self.greedy_calls += 1;
            match (self.script.pop_front(), self.fallback) {
                (Some(next), _) => Ok(next),
                (None, Some(value)) => Ok((solution, value)),
                (None, None) => Err(ScriptError::Exhausted),
            }
        }

        fn modify(&mut self, solution: &u32) -> Result<u32, ScriptError> {
            self.modified.push(*solution);
            if self.fail_on_modify == Some(self.modified.len()) {
                return Err(ScriptError::Injected(self.modified.len()));
            }
            Ok(*solution)
        }

        fn merge(&mut self, thesis: &u32, antithesis: &u32) -> Result<u32, ScriptError> {
            self.merged.push((*thesis, *antithesis));
            Ok(*thesis)
        }

        fn evaluate(&self, _solution: &u32) -> Result<i64, ScriptError> {
            Ok(0)
        }
    }

    /// Matches a hidden bit pattern. Greedy repair only looks at a random
    /// window, so a single improvement rarely reaches the optimum.
    #[derive(Debug)]
    struct BitMatch {
        target: Vec<bool>,
        rng: ChaCha8Rng,
        window: usize,
        flips: usize,
    }

    impl BitMatch {
        fn new(seed: u64, len: usize) -> Self {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let target = (0..len).map(|_| rng.random_bool(0.5)).collect();
            Self {
                target,
                rng,
                window: 4,
                flips: 3,
            }
        }

        fn mismatches(&self, bits: &[bool]) -> i64 {
            bits.iter()
                .zip(&self.target)
                .filter(|(a, b)| a != b)
                .count() as i64
        }
    }

    impl DialecticProblem for BitMatch {
        type Solution = Vec<bool>;
        type Value = i64;
        type Error = Infallible;

        fn init_solution(&mut self) -> Result<Vec<bool>, Infallible> {
            let len = self.target.len();
            Ok((0..len).map(|_| self.rng.random_bool(0.5)).collect())
        }

        fn greedy_improvement(&mut self, mut bits: Vec<bool>) -> Result<(Vec<bool>, i64), Infallible> {
            let start = self.rng.random_range(0..bits.len());
            for offset in 0..self.window {
                let i = (start + offset) % bits.len();
                bits[i] = self.target[i];
            }
            let value = self.mismatches(&bits);
            Ok((bits, value))
        }

        fn modify(&mut self, bits: &Vec<bool>) -> Result<Vec<bool>, Infallible> {
            let mut out = bits.clone();
            for _ in 0..self.flips {
                let i = self.rng.random_range(0..out.len());
                out[i] = !out[i];
            }
            Ok(out)
        }

        fn merge(&mut self, thesis: &Vec<bool>, antithesis: &Vec<bool>) -> Result<Vec<bool>, Infallible> {
            Ok(thesis
                .iter()
                .zip(antithesis)
                .map(|(a, b)| if self.rng.random_bool(0.5) { *a } else { *b })
                .collect())
        }

        fn evaluate(&self, bits: &Vec<bool>) -> Result<i64, Infallible> {
            Ok(self.mismatches(bits))
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Event<S, V> {
        Start(S, V),
        Accepted(S, V, SynthesisVerdict),
        Rejected(V),
        Best(S, V),
        Restart(S, V),
        End(S, V),
    }

    #[derive(Debug)]
    struct Recorder<S, V> {
        events: Vec<Event<S, V>>,
    }

    impl<S, V> Recorder<S, V> {
        fn new() -> Self {
            Self { events: Vec::new() }
        }
    }

    impl<S, V> DialecticMonitor<S, V> for Recorder<S, V>
    where
        S: Clone,
        V: Copy,
    {
        fn name(&self) -> &str {
            "Recorder"
        }

        fn on_start(&mut self, thesis: &S, value: V) {
            self.events.push(Event::Start(thesis.clone(), value));
        }

        fn on_end(&mut self, best: &S, value: V, _statistics: &DialecticStatistics) {
            self.events.push(Event::End(best.clone(), value));
        }

        fn on_synthesis_accepted(
            &mut self,
            thesis: &S,
            value: V,
            verdict: SynthesisVerdict,
            _statistics: &DialecticStatistics,
        ) {
            self.events.push(Event::Accepted(thesis.clone(), value, verdict));
        }

        fn on_synthesis_rejected(&mut self, value: V, _statistics: &DialecticStatistics) {
            self.events.push(Event::Rejected(value));
        }

        fn on_best_solution_updated(
            &mut self,
            solution: &S,
            value: V,
            _statistics: &DialecticStatistics,
        ) {
            self.events.push(Event::Best(solution.clone(), value));
        }

        fn on_restart(&mut self, thesis: &S, value: V, _statistics: &DialecticStatistics) {
            self.events.push(Event::Restart(thesis.clone(), value));
        }
    }

    /// Checks the acceptance, reset and best-value rules on every event.
    #[derive(Debug, Default)]
    struct RuleChecker {
        thesis_value: Option<i64>,
        best_value: Option<i64>,
        seen: Vec<i64>,
        local_counter: u64,
        max_local_counter: u64,
    }

    impl<S> DialecticMonitor<S, i64> for RuleChecker {
        fn name(&self) -> &str {
            "RuleChecker"
        }

        fn on_start(&mut self, _thesis: &S, value: i64) {
            self.thesis_value = Some(value);
            self.best_value = Some(value);
            self.seen.push(value);
        }

        fn on_end(&mut self, _best: &S, value: i64, _statistics: &DialecticStatistics) {
            assert_eq!(Some(value), self.best_value);
            assert_eq!(self.seen.iter().copied().min(), Some(value));
        }

        fn on_synthesis_accepted(
            &mut self,
            _thesis: &S,
            value: i64,
            verdict: SynthesisVerdict,
            _statistics: &DialecticStatistics,
        ) {
            let previous = self.thesis_value.unwrap();
            assert!(value <= previous, "accepted a worse synthesis");
            match verdict {
                SynthesisVerdict::Improving => {
                    assert!(value < previous);
                    self.local_counter = 0;
                }
                SynthesisVerdict::Lateral => {
                    assert_eq!(value, previous);
                    self.local_counter += 1;
                }
                SynthesisVerdict::Rejected => panic!("rejected synthesis reported as accepted"),
            }
            self.max_local_counter = self.max_local_counter.max(self.local_counter);
            self.thesis_value = Some(value);
            self.seen.push(value);
        }

        fn on_synthesis_rejected(&mut self, value: i64, _statistics: &DialecticStatistics) {
            assert!(value > self.thesis_value.unwrap(), "rejected a non-worse synthesis");
            self.local_counter += 1;
            self.max_local_counter = self.max_local_counter.max(self.local_counter);
        }

        fn on_best_solution_updated(
            &mut self,
            _solution: &S,
            value: i64,
            _statistics: &DialecticStatistics,
        ) {
            assert!(value < self.best_value.unwrap(), "best value did not strictly decrease");
            self.best_value = Some(value);
        }

        fn on_restart(&mut self, _thesis: &S, value: i64, _statistics: &DialecticStatistics) {
            self.thesis_value = Some(value);
            self.local_counter = 0;
        }
    }

    #[test]
    fn test_canonical_trace() {
        let mut problem = Line::default();
        let mut recorder = Recorder::new();

        let outcome = {
            let mut engine = DialecticSearch::new(&mut problem, 1, 1).unwrap();
            engine.run(&mut recorder).unwrap()
        };

        assert_eq!(
            recorder.events,
            vec![
                Event::Start(1, 4),
                Event::Accepted(4, 1, SynthesisVerdict::Improving),
                Event::Best(4, 1),
                Event::Accepted(5, 0, SynthesisVerdict::Improving),
                Event::Best(5, 0),
                Event::Accepted(5, 0, SynthesisVerdict::Lateral),
                Event::Restart(7, 2),
                Event::End(5, 0),
            ]
        );

        assert_eq!(
            problem.calls,
            vec![
                "init",
                "greedy(0)",
                "modify(1)",
                "greedy(4)",
                "merge(1,5)",
                "greedy(3)",
                "modify(4)",
                "greedy(7)",
                "merge(4,6)",
                "greedy(5)",
                "modify(5)",
                "greedy(8)",
                "merge(5,7)",
                "greedy(6)",
            ]
        );

        assert!(outcome.is_completed());
        assert_eq!(*outcome.solution(), 5);
        assert_eq!(outcome.value(), 0);

        let stats = outcome.statistics();
        assert_eq!(stats.passes, 1);
        assert_eq!(stats.iterations, 3);
        assert_eq!(stats.improving_syntheses, 2);
        assert_eq!(stats.lateral_syntheses, 1);
        assert_eq!(stats.rejected_syntheses, 0);
        assert_eq!(stats.best_updates, 2);
    }

    #[test]
    fn test_search_returns_best_pair() {
        let mut engine = DialecticSearch::new(Line::default(), 1, 1).unwrap();
        assert_eq!(engine.search(), Ok((5, 0)));
    }

    #[test]
    fn test_repeated_searches_start_fresh() {
        let mut engine = DialecticSearch::new(Line::default(), 3, 2).unwrap();
        let first = engine.search().unwrap();
        let calls_after_first = engine.problem().calls.len();
        let second = engine.search().unwrap();

        assert_eq!(first, second);
        assert_eq!(engine.problem().calls.len(), 2 * calls_after_first);
        assert_eq!(engine.problem().calls[calls_after_first], "init");
    }

    #[test]
    fn test_zero_global_limit_returns_improved_initial_solution() {
        let mut engine = DialecticSearch::new(Line::default(), 0, 1).unwrap();
        let outcome = engine.run(&mut Recorder::new()).unwrap();

        assert!(outcome.is_completed());
        assert_eq!(outcome.into_best(), (1, 4));
        assert_eq!(engine.into_problem().calls, vec!["init", "greedy(0)"]);
    }

    #[test]
    fn test_zero_local_limit_is_rejected_at_construction() {
        let result = DialecticSearch::new(Line::default(), 10, 0);
        assert_eq!(result.err(), Some(ConfigError::ZeroLocalLimit));
    }

    #[test]
    fn test_with_config_and_accessors() {
        let config = SearchConfig::new(2, 3).unwrap();
        let mut engine = DialecticSearch::with_config(Line::default(), config);
        assert_eq!(engine.config(), config);
        assert_eq!(engine.problem().name(), "Line");
        engine.problem_mut().calls.push("marker".to_string());
        assert_eq!(engine.problem().calls, vec!["marker"]);
        assert_eq!(
            engine.to_string(),
            "DialecticSearch(problem: Line, SearchConfig(global_limit: 2, local_limit: 3))"
        );
    }

    #[test]
    fn test_rejection_tie_and_restart_rules() {
        let problem = Scripted::new(&[
            (0, 10),
            // pass 1
            (1, 20),
            (2, 15), // worse than 10: rejected
            (3, 30),
            (4, 10), // tie: accepted, stagnation reaches the limit
            // pass 2 continues from antithesis 3 (value 30)
            (5, 40),
            (6, 25), // better than 30 but not than the best
            (7, 8),
            (8, 7), // new best
            (9, 50),
            (10, 60), // rejected
            (11, 50),
            (12, 70), // rejected, stagnation reaches the limit
        ]);
        let mut engine = DialecticSearch::new(problem, 2, 2).unwrap();
        let mut recorder = Recorder::new();
        let outcome = engine.run(&mut recorder).unwrap();

        assert_eq!(
            recorder.events,
            vec![
                Event::Start(0, 10),
                Event::Rejected(15),
                Event::Accepted(4, 10, SynthesisVerdict::Lateral),
                Event::Restart(3, 30),
                Event::Accepted(6, 25, SynthesisVerdict::Improving),
                Event::Accepted(8, 7, SynthesisVerdict::Improving),
                Event::Best(8, 7),
                Event::Rejected(60),
                Event::Rejected(70),
                Event::Restart(11, 50),
                Event::End(8, 7),
            ]
        );

        let problem = engine.into_problem();
        // A rejected synthesis leaves the thesis untouched; a restart swaps in the antithesis.
        assert_eq!(problem.modified, vec![0, 0, 3, 6, 8, 8]);
        assert_eq!(
            problem.merged,
            vec![(0, 1), (0, 3), (3, 5), (6, 7), (8, 9), (8, 11)]
        );
        assert!(problem.script.is_empty());

        assert_eq!(outcome.into_best(), (8, 7));
    }

    #[test]
    fn test_statistics_of_scripted_run() {
        let problem = Scripted::new(&[
            (0, 10),
            (1, 20),
            (2, 15),
            (3, 30),
            (4, 10),
            (5, 40),
            (6, 25),
            (7, 8),
            (8, 7),
            (9, 50),
            (10, 60),
            (11, 50),
            (12, 70),
        ]);
        let mut engine = DialecticSearch::new(problem, 2, 2).unwrap();
        let outcome = engine.run(&mut Recorder::new()).unwrap();
        let stats = outcome.statistics();

        assert_eq!(stats.passes, 2);
        assert_eq!(stats.iterations, 6);
        assert_eq!(stats.improving_syntheses, 2);
        assert_eq!(stats.lateral_syntheses, 1);
        assert_eq!(stats.rejected_syntheses, 3);
        assert_eq!(stats.accepted_syntheses(), 3);
        assert_eq!(stats.best_updates, 1);
    }

    #[test]
    fn test_plateau_runs_exactly_global_times_local_iterations() {
        for (global, local) in [(1, 1), (3, 1), (1, 4), (5, 3)] {
            let problem = Scripted::new(&[]).with_fallback(3);
            let mut engine = DialecticSearch::new(problem, global, local).unwrap();
            let outcome = engine.run(&mut Recorder::new()).unwrap();

            let stats = outcome.statistics();
            assert_eq!(stats.passes, global);
            assert_eq!(stats.iterations, global * local);
            assert_eq!(stats.lateral_syntheses, global * local);
            assert_eq!(stats.best_updates, 0);

            let problem = engine.into_problem();
            assert_eq!(problem.modified.len() as u64, global * local);
            // init + (antithesis + synthesis) per iteration
            assert_eq!(problem.greedy_calls as u64, 1 + 2 * global * local);
        }
    }

    #[test]
    fn test_optimum_is_kept_when_adapter_cannot_escape() {
        let problem = Scripted::new(&[]).with_fallback(0);
        let mut engine = DialecticSearch::new(problem, 4, 2).unwrap();
        let mut recorder = Recorder::new();
        let (solution, value) = engine.run(&mut recorder).unwrap().into_best();

        assert_eq!((solution, value), (u32::MAX, 0));
        assert!(
            recorder
                .events
                .iter()
                .all(|e| !matches!(e, Event::Best(_, _)))
        );
    }

    #[test]
    fn test_adapter_error_propagates_unchanged() {
        let problem = Scripted::new(&[(0, 5)])
            .with_fallback(5)
            .failing_on_modify(3);
        let mut engine = DialecticSearch::new(problem, 10, 2).unwrap();
        let mut recorder = Recorder::new();

        let result = engine.run(&mut recorder);
        assert_eq!(result.err(), Some(ScriptError::Injected(3)));

        // The run stopped right at the failing call.
        let problem = engine.problem();
        assert_eq!(problem.modified.len(), 3);
        assert_eq!(problem.merged.len(), 2);
        assert!(
            recorder
                .events
                .iter()
                .all(|e| !matches!(e, Event::End(_, _)))
        );
    }

    #[test]
    fn test_error_during_initialization_propagates() {
        let mut engine = DialecticSearch::new(Scripted::new(&[]), 1, 1).unwrap();
        assert_eq!(engine.search(), Err(ScriptError::Exhausted));
        assert!(engine.problem().modified.is_empty());
    }

    #[test]
    fn test_target_monitor_aborts_once_optimum_found() {
        let mut engine = DialecticSearch::new(Line::default(), 100, 5).unwrap();
        let mut monitor = TargetValueMonitor::new(0_i64);
        let outcome = engine.run(&mut monitor).unwrap();

        assert_eq!(
            outcome.termination_reason(),
            &DialecticTerminationReason::Aborted(
                "Target value reached: 0 (best=0)".to_string()
            )
        );
        assert_eq!(outcome.statistics().iterations, 2);
        assert_eq!(outcome.statistics().passes, 0);
        assert_eq!(outcome.into_best(), (5, 0));
    }

    #[test]
    fn test_target_met_by_initial_solution_skips_all_iterations() {
        let mut engine = DialecticSearch::new(Line::default(), 100, 5).unwrap();
        let outcome = engine.run(&mut TargetValueMonitor::new(4_i64)).unwrap();

        assert!(!outcome.is_completed());
        assert_eq!(outcome.statistics().iterations, 0);
        assert_eq!(outcome.into_best(), (1, 4));
        assert_eq!(engine.problem().calls, vec!["init", "greedy(0)"]);
    }

    #[test]
    fn test_randomized_runs_obey_search_rules() {
        for seed in 0..8 {
            let mut engine = DialecticSearch::new(BitMatch::new(seed, 32), 20, 5).unwrap();
            let mut checker = RuleChecker::default();
            let outcome = engine.run(&mut checker).unwrap();

            assert!(outcome.is_completed());
            assert_eq!(outcome.statistics().passes, 20);
            assert!(checker.max_local_counter <= 5);
            assert_eq!(
                engine.problem().evaluate(outcome.solution()),
                Ok(outcome.value())
            );
        }
    }

    #[test]
    fn test_seeded_adapter_makes_search_deterministic() {
        let run = |seed| {
            let mut engine = DialecticSearch::new(BitMatch::new(seed, 48), 10, 4).unwrap();
            let outcome = engine.run(&mut Recorder::new()).unwrap();
            (outcome.statistics().iterations, outcome.into_best())
        };

        assert_eq!(run(7), run(7));
        assert_eq!(run(11), run(11));
    }
}
