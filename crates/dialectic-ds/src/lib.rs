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

//! # Dialectic Search
//!
//! A local-search metaheuristic that climbs from a current solution (the
//! thesis) by repeatedly perturbing it into an antithesis, recombining both
//! into a synthesis, and keeping the synthesis whenever it is no worse. When a
//! pass stagnates, the search restarts from the last antithesis to escape the
//! plateau, while the best solution found is kept aside.
//!
//! The engine is a shell: everything problem specific is supplied through the
//! `DialecticProblem` trait from `dialectic_search`.
//!
//! ## Modules
//!
//! - `config`: validated iteration limits (`SearchConfig`, `ConfigError`).
//! - `engine`: the `DialecticSearch` driver with `search` and `run`.
//! - `state`: loop-carried state and the acceptance/stagnation rules.
//! - `stats`: aggregate counters of a run.
//! - `result`: the outcome and termination reason of a run.
//! - `monitor`: lifecycle hooks, logging and early termination.
//!
//! ## Usage
//!
//! ```rust
//! use dialectic_ds::engine::DialecticSearch;
//! use dialectic_search::problem::DialecticProblem;
//! use std::convert::Infallible;
//!
//! /// Minimize `|x - 5|` over the integers.
//! struct Line;
//!
//! impl DialecticProblem for Line {
//!     type Solution = i64;
//!     type Value = i64;
//!     type Error = Infallible;
//!
//!     fn init_solution(&mut self) -> Result<i64, Infallible> {
//!         Ok(0)
//!     }
//!
//!     fn greedy_improvement(&mut self, x: i64) -> Result<(i64, i64), Infallible> {
//!         let best = [x - 1, x, x + 1]
//!             .into_iter()
//!             .min_by_key(|c| (c - 5).abs())
//!             .unwrap_or(x);
//!         Ok((best, (best - 5).abs()))
//!     }
//!
//!     fn modify(&mut self, x: &i64) -> Result<i64, Infallible> {
//!         Ok(x + 3)
//!     }
//!
//!     fn merge(&mut self, a: &i64, b: &i64) -> Result<i64, Infallible> {
//!         Ok((a + b).div_euclid(2))
//!     }
//!
//!     fn evaluate(&self, x: &i64) -> Result<i64, Infallible> {
//!         Ok((x - 5).abs())
//!     }
//! }
//!
//! let mut engine = DialecticSearch::new(Line, 1, 1).expect("local limit is positive");
//! assert_eq!(engine.search(), Ok((5, 0)));
//! ```

pub mod config;
pub mod engine;
pub mod monitor;
pub mod result;
pub mod state;
pub mod stats;
