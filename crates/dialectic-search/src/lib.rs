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

//! # Dialectic Search Vocabulary
//!
//! Shared building blocks for the Dialectic Search engine and for the problem
//! adapters that plug into it. Keeping these in their own crate lets adapter
//! authors depend on the contract alone, without pulling in the engine.
//!
//! ## Modules
//!
//! - `num`: The `ObjectiveValue` bound describing a totally ordered objective
//!   where strictly smaller is strictly better.
//! - `problem`: The `DialecticProblem` adapter trait with its five operations
//!   (`init_solution`, `greedy_improvement`, `modify`, `merge`, `evaluate`).
//! - `incumbent`: A single-threaded holder for the best solution seen so far.
//! - `monitor`: The `SearchCommand` used by monitors to steer a run.

pub mod incumbent;
pub mod monitor;
pub mod num;
pub mod problem;
