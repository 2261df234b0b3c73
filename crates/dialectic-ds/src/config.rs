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

//! Search limits for a Dialectic Search run.
//!
//! A run is bounded by two counters only. The global limit is the number of
//! outer passes, each ending in a diversification restart. The local limit is
//! the number of consecutive non-improving inner iterations tolerated before a
//! pass ends. There is no wall-clock limit.
//!
//! Every pass must run at least one inner iteration, because the restart at
//! the end of a pass continues from the antithesis generated inside it. A
//! local limit of zero is therefore rejected up front. A global limit of zero
//! is fine and yields the greedily improved starting solution.

use thiserror::Error;

/// Errors raised when building a [`SearchConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ConfigError {
    /// The local limit must allow at least one inner iteration per pass.
    #[error("local limit must be at least 1, got 0")]
    ZeroLocalLimit,
}

/// Immutable iteration limits of a Dialectic Search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchConfig {
    global_limit: u64,
    local_limit: u64,
}

impl SearchConfig {
    /// Global limit used by [`SearchConfig::default`].
    pub const DEFAULT_GLOBAL_LIMIT: u64 = 100;

    /// Local limit used by [`SearchConfig::default`].
    pub const DEFAULT_LOCAL_LIMIT: u64 = 50;

    /// Creates a new configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroLocalLimit`] if `local_limit` is zero.
    #[inline]
    pub fn new(global_limit: u64, local_limit: u64) -> Result<Self, ConfigError> {
        if local_limit == 0 {
            return Err(ConfigError::ZeroLocalLimit);
        }

        Ok(Self {
            global_limit,
            local_limit,
        })
    }

    /// Returns the number of outer passes.
    #[inline]
    pub fn global_limit(&self) -> u64 {
        self.global_limit
    }

    /// Returns the number of consecutive non-improving inner iterations per pass.
    #[inline]
    pub fn local_limit(&self) -> u64 {
        self.local_limit
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            global_limit: Self::DEFAULT_GLOBAL_LIMIT,
            local_limit: Self::DEFAULT_LOCAL_LIMIT,
        }
    }
}

impl std::fmt::Display for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchConfig(global_limit: {}, local_limit: {})",
            self.global_limit, self.local_limit
        )
    }
}

impl TryFrom<(u64, u64)> for SearchConfig {
    type Error = ConfigError;

    #[inline]
    fn try_from((global_limit, local_limit): (u64, u64)) -> Result<Self, Self::Error> {
        Self::new(global_limit, local_limit)
    }
}
